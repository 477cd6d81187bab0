// Dense voxel storage over a fixed region

use crate::{Region, VolumeError};
use glam::IVec3;

/// Bounded dense voxel grid
///
/// Owns one value per lattice point of its region, laid out x-major in a
/// single allocation. All voxels start at `T::default()`. Checked access
/// goes through [`get`](Volume::get)/[`set`](Volume::set); reads through
/// [`sample`](Volume::sample) outside the region observe the border value
/// instead of failing.
///
/// A volume is not internally synchronized. Concurrent reads are fine;
/// writes must be serialized against any in-flight raycast by the caller.
#[derive(Debug, Clone)]
pub struct Volume<T> {
    region: Region,
    voxels: Vec<T>,
    border_value: T,
}

impl<T: Copy + Default + PartialEq> Volume<T> {
    /// Create a volume covering `region` with every voxel at `T::default()`
    pub fn new(region: Region) -> Self {
        Self {
            region,
            voxels: vec![T::default(); region.voxel_count() as usize],
            border_value: T::default(),
        }
    }

    /// Region this volume covers
    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Value reported for samples outside the region
    pub fn border_value(&self) -> T {
        self.border_value
    }

    /// Replace the border value
    pub fn set_border_value(&mut self, value: T) {
        self.border_value = value;
    }

    /// Read the voxel at `pos`
    pub fn get(&self, pos: IVec3) -> Result<T, VolumeError> {
        let index = self.checked_index(pos)?;
        Ok(self.voxels[index])
    }

    /// Overwrite the voxel at `pos`
    pub fn set(&mut self, pos: IVec3, value: T) -> Result<(), VolumeError> {
        let index = self.checked_index(pos)?;
        self.voxels[index] = value;
        Ok(())
    }

    /// Read the voxel at `pos`, or the border value outside the region
    pub fn sample(&self, pos: IVec3) -> T {
        match self.linear_index(pos) {
            Some(index) => self.voxels[index],
            None => self.border_value,
        }
    }

    /// Linear index of an in-region position, None outside
    pub(crate) fn linear_index(&self, pos: IVec3) -> Option<usize> {
        if !self.region.contains(pos) {
            return None;
        }
        let local = pos - self.region.lower();
        let dim = self.region.dimensions();
        Some((local.x + local.y * dim.x + local.z * dim.x * dim.y) as usize)
    }

    /// Signed index offset of a lattice step (valid while staying in-region)
    pub(crate) fn index_stride(&self, delta: IVec3) -> isize {
        let dim = self.region.dimensions();
        delta.x as isize + (delta.y * dim.x) as isize + (delta.z * dim.x * dim.y) as isize
    }

    pub(crate) fn voxel_at(&self, index: usize) -> T {
        self.voxels[index]
    }

    fn checked_index(&self, pos: IVec3) -> Result<usize, VolumeError> {
        self.linear_index(pos).ok_or(VolumeError::OutOfRegion {
            pos,
            region: self.region,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_volume_is_empty() {
        let vol: Volume<u8> = Volume::new(Region::cube(IVec3::ZERO, 4));
        for z in 0..4 {
            for y in 0..4 {
                for x in 0..4 {
                    assert_eq!(vol.get(IVec3::new(x, y, z)), Ok(0));
                }
            }
        }
    }

    #[test]
    fn test_set_then_get() {
        let mut vol: Volume<u8> = Volume::new(Region::cube(IVec3::ZERO, 8));
        vol.set(IVec3::new(3, 4, 5), 200).unwrap();
        assert_eq!(vol.get(IVec3::new(3, 4, 5)), Ok(200));
        assert_eq!(vol.get(IVec3::new(5, 4, 3)), Ok(0));
    }

    #[test]
    fn test_out_of_region_access() {
        let region = Region::cube(IVec3::ZERO, 4);
        let mut vol: Volume<u8> = Volume::new(region);
        for pos in [
            IVec3::new(-1, 0, 0),
            IVec3::new(0, -1, 0),
            IVec3::new(0, 0, -1),
            IVec3::new(4, 0, 0),
            IVec3::new(0, 4, 0),
            IVec3::new(0, 0, 4),
        ] {
            assert_eq!(vol.get(pos), Err(VolumeError::OutOfRegion { pos, region }));
            assert_eq!(
                vol.set(pos, 1),
                Err(VolumeError::OutOfRegion { pos, region })
            );
        }
    }

    #[test]
    fn test_negative_corner_region() {
        let mut vol: Volume<u8> = Volume::new(Region::new(IVec3::splat(-8), IVec3::splat(7)));
        vol.set(IVec3::new(-8, -8, -8), 42).unwrap();
        vol.set(IVec3::new(7, 7, 7), 43).unwrap();
        assert_eq!(vol.get(IVec3::new(-8, -8, -8)), Ok(42));
        assert_eq!(vol.get(IVec3::new(7, 7, 7)), Ok(43));
        assert!(vol.get(IVec3::new(-9, 0, 0)).is_err());
    }

    #[test]
    fn test_sample_border_value() {
        let mut vol: Volume<u8> = Volume::new(Region::cube(IVec3::ZERO, 4));
        vol.set(IVec3::new(1, 1, 1), 9).unwrap();
        assert_eq!(vol.sample(IVec3::new(1, 1, 1)), 9);
        assert_eq!(vol.sample(IVec3::new(-1, 0, 0)), 0);

        vol.set_border_value(255);
        assert_eq!(vol.sample(IVec3::new(-1, 0, 0)), 255);
        assert_eq!(vol.sample(IVec3::new(1, 1, 1)), 9);
    }
}
