//! Representation of spheres.

use crate::vector::Vector3;
use bytemuck::{Pod, Zeroable};

/// A sphere represented by its center point and radius.
///
/// The radius is not validated, so a negative radius is stored as given.
#[repr(C)]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Sphere {
    center: Vector3,
    radius: f64,
}

impl Sphere {
    /// Creates a new sphere with the given center and radius.
    #[inline]
    pub const fn new(center: Vector3, radius: f64) -> Self {
        Self { center, radius }
    }

    #[inline]
    pub const fn center(&self) -> &Vector3 {
        &self.center
    }

    #[inline]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }

    #[inline]
    pub fn set_center(&mut self, center: &Vector3) -> &mut Self {
        self.center = *center;
        self
    }

    #[inline]
    pub fn set_radius(&mut self, radius: f64) -> &mut Self {
        self.radius = radius;
        self
    }

    /// Sets the radius to half the given diameter.
    #[inline]
    pub fn set_diameter(&mut self, diameter: f64) -> &mut Self {
        self.radius = diameter / 2.0;
        self
    }
}

impl_approx_eq_for_fields!(Sphere, [center, radius]);
