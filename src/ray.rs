//! Rays.

use crate::vector::Vector3;
use bytemuck::{Pod, Zeroable};

/// A ray with an origin and a direction.
///
/// The direction is not required to have unit length. A default ray starts
/// at the origin and points along the negative z-axis, the viewing direction
/// of an untransformed [`Camera3`](crate::camera::Camera3).
#[repr(C)]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct Ray3 {
    origin: Vector3,
    direction: Vector3,
}

impl Ray3 {
    #[inline]
    pub const fn new(origin: Vector3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    #[inline]
    pub const fn origin(&self) -> &Vector3 {
        &self.origin
    }

    #[inline]
    pub const fn direction(&self) -> &Vector3 {
        &self.direction
    }

    #[inline]
    pub const fn origin_mut(&mut self) -> &mut Vector3 {
        &mut self.origin
    }

    #[inline]
    pub const fn direction_mut(&mut self) -> &mut Vector3 {
        &mut self.direction
    }
}

impl Default for Ray3 {
    fn default() -> Self {
        Self::new(Vector3::zeros(), Vector3::new(0.0, 0.0, -1.0))
    }
}

impl_approx_eq_for_fields!(Ray3, [origin, direction]);
