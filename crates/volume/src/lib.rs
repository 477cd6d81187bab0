mod error;
mod picking;
mod raycast;
mod region;
mod sampler;
mod volume;

pub use error::VolumeError;
pub use picking::{pick_voxel, PickResult};
pub use raycast::{cast_between, cast_from, RaycastHit};
pub use region::Region;
pub use sampler::Sampler;
pub use volume::Volume;

// Re-export glam for convenience
pub use glam;
