//! Volume error types.

use crate::Region;
use glam::IVec3;
use thiserror::Error;

/// Errors raised by bounds-checked volume access.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeError {
    /// Position lies outside the volume's region.
    #[error("position {pos} outside region {region}")]
    OutOfRegion { pos: IVec3, region: Region },
}
