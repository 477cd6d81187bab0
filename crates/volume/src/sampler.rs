// Incremental cursor over a volume's lattice

use crate::Volume;
use glam::IVec3;

/// Read cursor holding a current lattice position
///
/// Keeps the linear index of the current voxel cached so that unit steps
/// cost a stride add instead of a full index computation. The cursor may
/// wander outside the volume's region; [`value`](Sampler::value) then
/// reports the border value and the index is re-derived on re-entry.
pub struct Sampler<'a, T> {
    volume: &'a Volume<T>,
    pos: IVec3,
    index: Option<usize>,
}

impl<'a, T: Copy + Default + PartialEq> Sampler<'a, T> {
    /// Create a cursor seeded at `pos` (inside the region or not)
    pub fn new(volume: &'a Volume<T>, pos: IVec3) -> Self {
        Self {
            volume,
            pos,
            index: volume.linear_index(pos),
        }
    }

    /// Current lattice position
    pub fn position(&self) -> IVec3 {
        self.pos
    }

    /// Whether the cursor currently points inside the volume's region
    pub fn is_position_valid(&self) -> bool {
        self.index.is_some()
    }

    /// Voxel value under the cursor, border value outside the region
    pub fn value(&self) -> T {
        match self.index {
            Some(index) => self.volume.voxel_at(index),
            None => self.volume.border_value(),
        }
    }

    /// Reseat the cursor at an arbitrary position
    pub fn move_to(&mut self, pos: IVec3) {
        self.pos = pos;
        self.index = self.volume.linear_index(pos);
    }

    /// Step the cursor by `delta` lattice units
    ///
    /// Steps that stay inside the region update the cached index by the
    /// delta's stride; anything else falls back to a full recompute.
    pub fn advance(&mut self, delta: IVec3) {
        self.pos += delta;
        self.index = match self.index {
            Some(index) if self.volume.region().contains(self.pos) => {
                Some((index as isize + self.volume.index_stride(delta)) as usize)
            }
            _ => self.volume.linear_index(self.pos),
        };
    }

    pub fn move_positive_x(&mut self) {
        self.advance(IVec3::X);
    }

    pub fn move_negative_x(&mut self) {
        self.advance(IVec3::NEG_X);
    }

    pub fn move_positive_y(&mut self) {
        self.advance(IVec3::Y);
    }

    pub fn move_negative_y(&mut self) {
        self.advance(IVec3::NEG_Y);
    }

    pub fn move_positive_z(&mut self) {
        self.advance(IVec3::Z);
    }

    pub fn move_negative_z(&mut self) {
        self.advance(IVec3::NEG_Z);
    }
}
