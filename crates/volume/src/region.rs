// Axis-aligned regions on the voxel lattice

use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive axis-aligned bounding box of lattice points
///
/// Both corners are part of the region: a region from (0,0,0) to (31,31,31)
/// covers 32 voxels along each axis. Invariant: `lower <= upper` on every
/// axis, enforced at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    lower: IVec3,
    upper: IVec3,
}

impl Region {
    /// Create a region from inclusive lower and upper corners
    ///
    /// Panics if `lower` exceeds `upper` on any axis.
    pub fn new(lower: IVec3, upper: IVec3) -> Self {
        assert!(
            lower.cmple(upper).all(),
            "region corners inverted: lower {lower}, upper {upper}"
        );
        Self { lower, upper }
    }

    /// Cubic region with the given side length, anchored at `lower`
    pub fn cube(lower: IVec3, side: i32) -> Self {
        Self::new(lower, lower + IVec3::splat(side - 1))
    }

    /// Inclusive lower corner
    pub fn lower(&self) -> IVec3 {
        self.lower
    }

    /// Inclusive upper corner
    pub fn upper(&self) -> IVec3 {
        self.upper
    }

    /// Voxels along x
    pub fn width(&self) -> i32 {
        self.upper.x - self.lower.x + 1
    }

    /// Voxels along y
    pub fn height(&self) -> i32 {
        self.upper.y - self.lower.y + 1
    }

    /// Voxels along z
    pub fn depth(&self) -> i32 {
        self.upper.z - self.lower.z + 1
    }

    /// Side lengths in voxels
    pub fn dimensions(&self) -> IVec3 {
        self.upper - self.lower + IVec3::ONE
    }

    /// Total number of lattice points covered
    pub fn voxel_count(&self) -> u64 {
        let d = self.dimensions();
        d.x as u64 * d.y as u64 * d.z as u64
    }

    /// Check whether the lattice point lies inside the region
    pub fn contains(&self, pos: IVec3) -> bool {
        pos.cmpge(self.lower).all() && pos.cmple(self.upper).all()
    }

    /// Check whether a continuous point lies inside the region, keeping
    /// `boundary` of margin from every face
    pub fn contains_point(&self, pos: Vec3, boundary: f32) -> bool {
        pos.cmpge(self.lower.as_vec3() + Vec3::splat(boundary)).all()
            && pos.cmple(self.upper.as_vec3() - Vec3::splat(boundary)).all()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{}]", self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_corners() {
        let region = Region::new(IVec3::new(-1, 2, 3), IVec3::new(4, 5, 6));
        assert_eq!(region.lower(), IVec3::new(-1, 2, 3));
        assert_eq!(region.upper(), IVec3::new(4, 5, 6));
    }

    #[test]
    #[should_panic(expected = "region corners inverted")]
    fn test_region_inverted_corners() {
        Region::new(IVec3::new(0, 0, 5), IVec3::new(4, 4, 4));
    }

    #[test]
    fn test_region_cube() {
        let region = Region::cube(IVec3::ZERO, 32);
        assert_eq!(region.upper(), IVec3::splat(31));
        assert_eq!(region.voxel_count(), 32 * 32 * 32);
    }

    #[test]
    fn test_region_dimensions() {
        let region = Region::new(IVec3::new(-2, 0, 1), IVec3::new(2, 0, 3));
        assert_eq!(region.width(), 5);
        assert_eq!(region.height(), 1);
        assert_eq!(region.depth(), 3);
        assert_eq!(region.dimensions(), IVec3::new(5, 1, 3));
        assert_eq!(region.voxel_count(), 15);
    }

    #[test]
    fn test_region_contains() {
        let region = Region::new(IVec3::splat(-4), IVec3::splat(4));
        assert!(region.contains(IVec3::ZERO));
        assert!(region.contains(IVec3::splat(-4)));
        assert!(region.contains(IVec3::splat(4)));
        assert!(!region.contains(IVec3::new(5, 0, 0)));
        assert!(!region.contains(IVec3::new(0, -5, 0)));
    }

    #[test]
    fn test_region_contains_point_with_boundary() {
        let region = Region::new(IVec3::ZERO, IVec3::splat(10));
        assert!(region.contains_point(Vec3::new(5.0, 5.0, 5.0), 0.0));
        assert!(region.contains_point(Vec3::new(1.0, 1.0, 1.0), 1.0));
        assert!(!region.contains_point(Vec3::new(0.5, 5.0, 5.0), 1.0));
        assert!(!region.contains_point(Vec3::new(10.5, 5.0, 5.0), 0.0));
    }
}
