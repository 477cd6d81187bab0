//! First-solid-voxel picking.

use crate::{cast_from, Volume};
use glam::{IVec3, Vec3};

/// Result of a successful pick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickResult {
    /// First voxel along the ray whose value differs from the empty value
    pub hit_voxel: IVec3,
    /// Voxel visited just before the hit — where a placed voxel would go
    pub previous_voxel: Option<IVec3>,
}

/// Find the first voxel along a ray that is not `empty_value`
///
/// The length of `direction_and_length` sets the pick distance. Returns
/// None when the ray exhausts itself over empty voxels (voxels outside the
/// volume's region count as the border value).
pub fn pick_voxel<T>(
    volume: &Volume<T>,
    origin: Vec3,
    direction_and_length: Vec3,
    empty_value: T,
) -> Option<PickResult>
where
    T: Copy + Default + PartialEq,
{
    cast_from(volume, origin, direction_and_length, |value| {
        value != empty_value
    })
    .map(|hit| PickResult {
        hit_voxel: hit.voxel,
        previous_voxel: hit.previous,
    })
}
