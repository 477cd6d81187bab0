//! Raycasting through bounded voxel volumes
//!
//! Walks every voxel a line segment passes through, in order from start to
//! end, using a 3D DDA (Digital Differential Analyzer) over the volume's
//! lattice. A caller predicate is evaluated on each traversed voxel's value
//! and the walk stops at the first voxel it accepts.
//!
//! # Coordinate System
//!
//! Ray endpoints live in the same coordinate space as the volume's integer
//! lattice; the voxel containing a point is the componentwise floor of the
//! point. Voxels outside the volume's region sample as the border value, so
//! rays may safely overshoot the volume on either side.
//!
//! # Algorithm
//!
//! Classic grid stepping: for each axis, track the ray parameter at which
//! the next voxel boundary is crossed (`t_max`) and the parameter width of
//! one voxel (`t_delta`). Each step advances the axis with the nearest
//! boundary; when several axes tie, all of them advance together, so a ray
//! passing exactly through an edge or corner does not visit voxels it only
//! grazes. The walk ends once the parameter passes 1, i.e. the segment is
//! exhausted.

use crate::{Sampler, Volume};
use glam::{IVec3, Vec3};

/// Result of a raycast that stopped at a voxel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaycastHit<T> {
    /// Coordinate of the voxel the predicate accepted
    pub voxel: IVec3,
    /// Value handed to the predicate at the hit
    pub value: T,
    /// Voxel visited immediately before the hit, None for a hit at the seed
    pub previous: Option<IVec3>,
}

/// Cast a ray between two endpoints
///
/// Evaluates `is_hit` on the value of every voxel the segment passes
/// through, in traversal order, and stops at the first voxel it accepts.
/// Out-of-region voxels are sampled as the volume's border value; the
/// volume's `get` is never called, so a ray may start, end, or travel
/// outside the region without failing.
///
/// When `start == end` the predicate is evaluated exactly once, at the
/// single voxel containing the point.
///
/// # Arguments
/// * `volume` - Volume to traverse; never mutated
/// * `start` - Segment start point in lattice space
/// * `end` - Segment end point in lattice space
/// * `is_hit` - Predicate over voxel values; true stops the walk
pub fn cast_between<T, F>(
    volume: &Volume<T>,
    start: Vec3,
    end: Vec3,
    mut is_hit: F,
) -> Option<RaycastHit<T>>
where
    T: Copy + Default + PartialEq,
    F: FnMut(T) -> bool,
{
    let delta = end - start;

    let step = IVec3::new(
        (delta.x > 0.0) as i32 - (delta.x < 0.0) as i32,
        (delta.y > 0.0) as i32 - (delta.y < 0.0) as i32,
        (delta.z > 0.0) as i32 - (delta.z < 0.0) as i32,
    );

    let (mut tx, dtx) = boundary_crossing(start.x, delta.x);
    let (mut ty, dty) = boundary_crossing(start.y, delta.y);
    let (mut tz, dtz) = boundary_crossing(start.z, delta.z);

    let mut sampler = Sampler::new(volume, start.floor().as_ivec3());
    let mut previous = None;

    loop {
        let value = sampler.value();
        if is_hit(value) {
            return Some(RaycastHit {
                voxel: sampler.position(),
                value,
                previous,
            });
        }

        // Nearest boundary crossing; past 1 the segment is exhausted
        let t = tx.min(ty).min(tz);
        if t > 1.0 {
            return None;
        }

        previous = Some(sampler.position());

        // Advance every axis tied at the nearest boundary
        let mut advance = IVec3::ZERO;
        if tx == t {
            advance.x = step.x;
            tx += dtx;
        }
        if ty == t {
            advance.y = step.y;
            ty += dty;
        }
        if tz == t {
            advance.z = step.z;
            tz += dtz;
        }
        sampler.advance(advance);
    }
}

/// Cast from `origin` along `direction`
///
/// The length of `direction` sets the cast distance: a normalized camera
/// direction must be scaled by the maximum distance of interest or the walk
/// covers a single voxel.
pub fn cast_from<T, F>(
    volume: &Volume<T>,
    origin: Vec3,
    direction: Vec3,
    is_hit: F,
) -> Option<RaycastHit<T>>
where
    T: Copy + Default + PartialEq,
    F: FnMut(T) -> bool,
{
    cast_between(volume, origin, origin + direction, is_hit)
}

/// Parameter of the first boundary crossing and the per-voxel parameter
/// width for one axis; both infinite when the ray does not move on the axis
fn boundary_crossing(start: f32, delta: f32) -> (f32, f32) {
    if delta == 0.0 {
        return (f32::INFINITY, f32::INFINITY);
    }
    let width = 1.0 / delta.abs();
    let cell = start.floor();
    let first = if delta > 0.0 {
        (cell + 1.0 - start) * width
    } else {
        (start - cell) * width
    };
    (first, width)
}
