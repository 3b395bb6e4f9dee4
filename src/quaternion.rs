//! Quaternions.

use crate::vector::Vector3;
use bytemuck::{Pod, Zeroable};

/// A quaternion `x i + y j + z k + w`, typically representing a rotation.
///
/// A default quaternion is the identity rotation `(0, 0, 0, 1)`. Nothing
/// keeps the quaternion at unit length; call [`Self::normalize`] after
/// operations where floating-point drift matters.
#[repr(C)]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct Quaternion {
    x: f64,
    y: f64,
    z: f64,
    w: f64,
}

impl Quaternion {
    /// Creates a new quaternion with the given components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Creates the identity quaternion.
    #[inline]
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Creates the quaternion representing a rotation of `angle` radians
    /// about `axis`, which must have unit length.
    #[inline]
    pub fn from_axis_angle(axis: &Vector3, angle: f64) -> Self {
        let mut quaternion = Self::identity();
        quaternion.set_axis_angle(axis, angle);
        quaternion
    }

    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    #[inline]
    pub const fn w(&self) -> f64 {
        self.w
    }

    /// Sets all components.
    #[inline]
    pub fn set(&mut self, x: f64, y: f64, z: f64, w: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self.w = w;
        self
    }

    /// Resets the quaternion to the identity.
    #[inline]
    pub fn set_identity(&mut self) -> &mut Self {
        *self = Self::identity();
        self
    }

    /// Sets the quaternion to a rotation of `angle` radians about `axis`.
    ///
    /// The axis is used as given, so it must already have unit length for the
    /// result to be a unit quaternion.
    #[inline]
    pub fn set_axis_angle(&mut self, axis: &Vector3, angle: f64) -> &mut Self {
        let (sin_half_angle, cos_half_angle) = (0.5 * angle).sin_cos();
        self.x = sin_half_angle * axis.x();
        self.y = sin_half_angle * axis.y();
        self.z = sin_half_angle * axis.z();
        self.w = cos_half_angle;
        self
    }

    /// Negates the vector part of the quaternion.
    #[inline]
    pub fn conjugate(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
        self
    }

    /// Sets this quaternion to the conjugate of `quaternion`.
    #[inline]
    pub fn conjugate_quaternion(&mut self, quaternion: &Self) -> &mut Self {
        *self = *quaternion;
        self.conjugate()
    }

    /// Sets the quaternion to its inverse, the conjugate divided by the
    /// squared length.
    ///
    /// A zero quaternion yields non-finite components.
    #[inline]
    pub fn invert(&mut self) -> &mut Self {
        let quaternion = *self;
        self.invert_quaternion(&quaternion)
    }

    /// Sets this quaternion to the inverse of `quaternion`.
    #[inline]
    pub fn invert_quaternion(&mut self, quaternion: &Self) -> &mut Self {
        let length_squared = quaternion.length_squared();
        self.x = -quaternion.x / length_squared;
        self.y = -quaternion.y / length_squared;
        self.z = -quaternion.z / length_squared;
        self.w = quaternion.w / length_squared;
        self
    }

    /// Computes the dot product of this quaternion with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Scales the quaternion to unit length. A zero quaternion is left as
    /// is.
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        let length = self.length();
        if length != 0.0 {
            self.x /= length;
            self.y /= length;
            self.z /= length;
            self.w /= length;
        }
        self
    }

    /// Returns the normalized version of the quaternion, or the quaternion
    /// itself if it has zero length.
    #[inline]
    pub fn normalized(&self) -> Self {
        let mut normalized = *self;
        normalized.normalize();
        normalized
    }

    /// Post-multiplies this quaternion by `r` (`self = self * r`).
    #[inline]
    pub fn multiply(&mut self, r: &Self) -> &mut Self {
        *self = hamilton_product(self, r);
        self
    }

    /// Pre-multiplies this quaternion by `q` (`self = q * self`).
    #[inline]
    pub fn premultiply(&mut self, q: &Self) -> &mut Self {
        *self = hamilton_product(q, self);
        self
    }

    /// Sets this quaternion to the Hamilton product `q * r`, the rotation
    /// that applies `r` first and then `q`.
    #[inline]
    pub fn multiply_quaternions(&mut self, q: &Self, r: &Self) -> &mut Self {
        *self = hamilton_product(q, r);
        self
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[f64; 4]> for Quaternion {
    #[inline]
    fn from([x, y, z, w]: [f64; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<Quaternion> for [f64; 4] {
    #[inline]
    fn from(quaternion: Quaternion) -> Self {
        [quaternion.x, quaternion.y, quaternion.z, quaternion.w]
    }
}

impl_binop!(Mul, mul, Quaternion, Quaternion, Quaternion, |a, b| {
    hamilton_product(a, b)
});

impl_approx_eq_for_fields!(Quaternion, [x, y, z, w]);

#[inline]
fn hamilton_product(q: &Quaternion, r: &Quaternion) -> Quaternion {
    Quaternion::new(
        q.x * r.w + q.w * r.x + q.y * r.z - q.z * r.y,
        q.y * r.w + q.w * r.y + q.z * r.x - q.x * r.z,
        q.z * r.w + q.w * r.z + q.x * r.y - q.y * r.x,
        q.w * r.w - q.x * r.x - q.y * r.y - q.z * r.z,
    )
}
