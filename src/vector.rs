//! Vectors.

use crate::matrix::{Matrix2, Matrix3, Matrix4};
use bytemuck::{Pod, Zeroable};
use std::ops::{Index, IndexMut};

/// A 2-dimensional vector.
#[repr(C)]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Vector2 {
    x: f64,
    y: f64,
}

/// A 3-dimensional vector.
#[repr(C)]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Vector3 {
    x: f64,
    y: f64,
    z: f64,
}

/// A 4-dimensional vector.
///
/// A default vector is the homogeneous origin `(0, 0, 0, 1)`, since the
/// w-component defaults to one.
#[repr(C)]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct Vector4 {
    x: f64,
    y: f64,
    z: f64,
    w: f64,
}

impl Vector2 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::same(0.0)
    }

    /// Creates a new vector with all ones.
    #[inline]
    pub const fn ones() -> Self {
        Self::same(1.0)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f64) -> Self {
        Self::new(value, value)
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut f64 {
        &mut self.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut f64 {
        &mut self.y
    }

    /// Sets all components.
    #[inline]
    pub fn set(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    #[inline]
    pub fn set_x(&mut self, x: f64) -> &mut Self {
        self.x = x;
        self
    }

    #[inline]
    pub fn set_y(&mut self, y: f64) -> &mut Self {
        self.y = y;
        self
    }

    /// Converts the vector to 3D by appending the given z-component.
    #[inline]
    pub const fn extended(&self, z: f64) -> Vector3 {
        Vector3::new(self.x, self.y, z)
    }

    /// Negates every component.
    #[inline]
    pub fn negate(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self
    }

    /// Sets this vector to the negation of `vector`.
    #[inline]
    pub fn negate_vector(&mut self, vector: &Self) -> &mut Self {
        self.x = -vector.x;
        self.y = -vector.y;
        self
    }

    /// Adds `vector` to this vector.
    #[inline]
    pub fn add_vector(&mut self, vector: &Self) -> &mut Self {
        self.x += vector.x;
        self.y += vector.y;
        self
    }

    /// Adds `s` to every component.
    #[inline]
    pub fn add_scalar(&mut self, s: f64) -> &mut Self {
        self.x += s;
        self.y += s;
        self
    }

    /// Adds the given values to the respective components.
    #[inline]
    pub fn add_values(&mut self, x: f64, y: f64) -> &mut Self {
        self.x += x;
        self.y += y;
        self
    }

    /// Sets this vector to `u + v`.
    #[inline]
    pub fn add_vectors(&mut self, u: &Self, v: &Self) -> &mut Self {
        self.x = u.x + v.x;
        self.y = u.y + v.y;
        self
    }

    /// Subtracts `vector` from this vector.
    #[inline]
    pub fn subtract_vector(&mut self, vector: &Self) -> &mut Self {
        self.x -= vector.x;
        self.y -= vector.y;
        self
    }

    /// Subtracts `s` from every component.
    #[inline]
    pub fn subtract_scalar(&mut self, s: f64) -> &mut Self {
        self.x -= s;
        self.y -= s;
        self
    }

    /// Subtracts the given values from the respective components.
    #[inline]
    pub fn subtract_values(&mut self, x: f64, y: f64) -> &mut Self {
        self.x -= x;
        self.y -= y;
        self
    }

    /// Sets this vector to `u - v`.
    #[inline]
    pub fn subtract_vectors(&mut self, u: &Self, v: &Self) -> &mut Self {
        self.x = u.x - v.x;
        self.y = u.y - v.y;
        self
    }

    /// Multiplies every component by `s`.
    #[inline]
    pub fn multiply_scalar(&mut self, s: f64) -> &mut Self {
        self.x *= s;
        self.y *= s;
        self
    }

    /// Divides every component by `s`.
    #[inline]
    pub fn divide_scalar(&mut self, s: f64) -> &mut Self {
        self.x /= s;
        self.y /= s;
        self
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Computes the length of the vector.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Computes the square of the length of the vector.
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Computes the distance between this and another vector.
    #[inline]
    pub fn distance_to(&self, other: &Self) -> f64 {
        self.distance_to_squared(other).sqrt()
    }

    /// Computes the squared distance between this and another vector.
    #[inline]
    pub fn distance_to_squared(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Scales the vector to unit length. A zero vector is left as is.
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        let length = self.length();
        if length != 0.0 {
            self.divide_scalar(length);
        }
        self
    }

    /// Returns the normalized version of the vector, or the vector itself if
    /// it has zero length.
    #[inline]
    pub fn normalized(&self) -> Self {
        let mut normalized = *self;
        normalized.normalize();
        normalized
    }

    /// Sets this vector to the linear interpolation `(1 - t) * u + t * v`.
    #[inline]
    pub fn lerp_vectors(&mut self, u: &Self, v: &Self, t: f64) -> &mut Self {
        self.x = (1.0 - t) * u.x + t * v.x;
        self.y = (1.0 - t) * u.y + t * v.y;
        self
    }

    /// Applies the given matrix to this vector.
    #[inline]
    pub fn transform(&mut self, matrix: &Matrix2) -> &mut Self {
        *self = linear_map_2(self, matrix);
        self
    }

    /// Sets this vector to `vector` transformed by the given matrix.
    #[inline]
    pub fn transform_vector(&mut self, vector: &Self, matrix: &Matrix2) -> &mut Self {
        *self = linear_map_2(vector, matrix);
        self
    }
}

impl From<[f64; 2]> for Vector2 {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2> for [f64; 2] {
    #[inline]
    fn from(vector: Vector2) -> Self {
        [vector.x, vector.y]
    }
}

impl_binop!(Add, add, Vector2, Vector2, Vector2, |a, b| {
    Vector2::new(a.x + b.x, a.y + b.y)
});

impl_binop!(Sub, sub, Vector2, Vector2, Vector2, |a, b| {
    Vector2::new(a.x - b.x, a.y - b.y)
});

impl_binop!(Mul, mul, Vector2, f64, Vector2, |a, b| {
    Vector2::new(a.x * b, a.y * b)
});

impl_binop!(Mul, mul, f64, Vector2, Vector2, |a, b| {
    Vector2::new(a * b.x, a * b.y)
});

impl_binop!(Div, div, Vector2, f64, Vector2, |a, b| {
    Vector2::new(a.x / b, a.y / b)
});

impl_binop_assign!(AddAssign, add_assign, Vector2, Vector2, |a, b| {
    a.add_vector(b);
});

impl_binop_assign!(SubAssign, sub_assign, Vector2, Vector2, |a, b| {
    a.subtract_vector(b);
});

impl_binop_assign!(MulAssign, mul_assign, Vector2, f64, |a, b| {
    a.multiply_scalar(*b);
});

impl_binop_assign!(DivAssign, div_assign, Vector2, f64, |a, b| {
    a.divide_scalar(*b);
});

impl_unary_op!(Neg, neg, Vector2, Vector2, |val| {
    Vector2::new(-val.x, -val.y)
});

impl Index<usize> for Vector2 {
    type Output = f64;

    #[inline]
    fn index(&self, idx: usize) -> &Self::Output {
        match idx {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("index out of bounds"),
        }
    }
}

impl IndexMut<usize> for Vector2 {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        match idx {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("index out of bounds"),
        }
    }
}

impl_approx_eq_for_fields!(Vector2, [x, y]);

impl Vector3 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::same(0.0)
    }

    /// Creates a new vector with all ones.
    #[inline]
    pub const fn ones() -> Self {
        Self::same(1.0)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f64) -> Self {
        Self::new(value, value, value)
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// The z-axis unit vector.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut f64 {
        &mut self.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut f64 {
        &mut self.y
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut f64 {
        &mut self.z
    }

    /// Sets all components.
    #[inline]
    pub fn set(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    #[inline]
    pub fn set_x(&mut self, x: f64) -> &mut Self {
        self.x = x;
        self
    }

    #[inline]
    pub fn set_y(&mut self, y: f64) -> &mut Self {
        self.y = y;
        self
    }

    #[inline]
    pub fn set_z(&mut self, z: f64) -> &mut Self {
        self.z = z;
        self
    }

    /// The 2D vector containing the x- and y-components of this vector.
    #[inline]
    pub const fn xy(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    /// Converts the vector to 4D by appending the given w-component.
    #[inline]
    pub const fn extended(&self, w: f64) -> Vector4 {
        Vector4::new(self.x, self.y, self.z, w)
    }

    /// Negates every component.
    #[inline]
    pub fn negate(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
        self
    }

    /// Sets this vector to the negation of `vector`.
    #[inline]
    pub fn negate_vector(&mut self, vector: &Self) -> &mut Self {
        self.x = -vector.x;
        self.y = -vector.y;
        self.z = -vector.z;
        self
    }

    /// Adds `vector` to this vector.
    #[inline]
    pub fn add_vector(&mut self, vector: &Self) -> &mut Self {
        self.x += vector.x;
        self.y += vector.y;
        self.z += vector.z;
        self
    }

    /// Adds `s` to every component.
    #[inline]
    pub fn add_scalar(&mut self, s: f64) -> &mut Self {
        self.x += s;
        self.y += s;
        self.z += s;
        self
    }

    /// Adds the given values to the respective components.
    #[inline]
    pub fn add_values(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.x += x;
        self.y += y;
        self.z += z;
        self
    }

    /// Sets this vector to `u + v`.
    #[inline]
    pub fn add_vectors(&mut self, u: &Self, v: &Self) -> &mut Self {
        self.x = u.x + v.x;
        self.y = u.y + v.y;
        self.z = u.z + v.z;
        self
    }

    /// Subtracts `vector` from this vector.
    #[inline]
    pub fn subtract_vector(&mut self, vector: &Self) -> &mut Self {
        self.x -= vector.x;
        self.y -= vector.y;
        self.z -= vector.z;
        self
    }

    /// Subtracts `s` from every component.
    #[inline]
    pub fn subtract_scalar(&mut self, s: f64) -> &mut Self {
        self.x -= s;
        self.y -= s;
        self.z -= s;
        self
    }

    /// Subtracts the given values from the respective components.
    #[inline]
    pub fn subtract_values(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.x -= x;
        self.y -= y;
        self.z -= z;
        self
    }

    /// Sets this vector to `u - v`.
    #[inline]
    pub fn subtract_vectors(&mut self, u: &Self, v: &Self) -> &mut Self {
        self.x = u.x - v.x;
        self.y = u.y - v.y;
        self.z = u.z - v.z;
        self
    }

    /// Multiplies every component by `s`.
    #[inline]
    pub fn multiply_scalar(&mut self, s: f64) -> &mut Self {
        self.x *= s;
        self.y *= s;
        self.z *= s;
        self
    }

    /// Divides every component by `s`.
    #[inline]
    pub fn divide_scalar(&mut self, s: f64) -> &mut Self {
        self.x /= s;
        self.y /= s;
        self.z /= s;
        self
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the (right-handed) cross product of this vector with another.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Sets this vector to the cross product `u x v`.
    #[inline]
    pub fn cross_vectors(&mut self, u: &Self, v: &Self) -> &mut Self {
        *self = u.cross(v);
        self
    }

    /// Computes the length of the vector.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Computes the square of the length of the vector.
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Computes the distance between this and another vector.
    #[inline]
    pub fn distance_to(&self, other: &Self) -> f64 {
        self.distance_to_squared(other).sqrt()
    }

    /// Computes the squared distance between this and another vector.
    #[inline]
    pub fn distance_to_squared(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }

    /// Scales the vector to unit length. A zero vector is left as is.
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        let length = self.length();
        if length != 0.0 {
            self.divide_scalar(length);
        }
        self
    }

    /// Returns the normalized version of the vector, or the vector itself if
    /// it has zero length.
    #[inline]
    pub fn normalized(&self) -> Self {
        let mut normalized = *self;
        normalized.normalize();
        normalized
    }

    /// Sets this vector to the linear interpolation `(1 - t) * u + t * v`.
    #[inline]
    pub fn lerp_vectors(&mut self, u: &Self, v: &Self, t: f64) -> &mut Self {
        self.x = (1.0 - t) * u.x + t * v.x;
        self.y = (1.0 - t) * u.y + t * v.y;
        self.z = (1.0 - t) * u.z + t * v.z;
        self
    }

    /// Applies the linear map represented by the given 3x3 matrix to this
    /// vector.
    #[inline]
    pub fn transform(&mut self, matrix: &Matrix3) -> &mut Self {
        *self = linear_map_3(self, matrix);
        self
    }

    /// Sets this vector to `vector` transformed by the given 3x3 matrix.
    #[inline]
    pub fn transform_vector(&mut self, vector: &Self, matrix: &Matrix3) -> &mut Self {
        *self = linear_map_3(vector, matrix);
        self
    }

    /// Treats this vector as a position (homogeneous coordinate 1) and
    /// applies the given homogeneous transform, including its translation.
    #[inline]
    pub fn transform_position(&mut self, matrix: &Matrix4) -> &mut Self {
        *self = homogeneous_map(self, 1.0, matrix);
        self
    }

    /// Sets this vector to the position `vector` transformed by the given
    /// homogeneous transform.
    #[inline]
    pub fn transform_position_vector(&mut self, vector: &Self, matrix: &Matrix4) -> &mut Self {
        *self = homogeneous_map(vector, 1.0, matrix);
        self
    }

    /// Treats this vector as a direction (homogeneous coordinate 0) and
    /// applies the given homogeneous transform. The translation part of the
    /// transform has no effect on directions.
    #[inline]
    pub fn transform_direction(&mut self, matrix: &Matrix4) -> &mut Self {
        *self = homogeneous_map(self, 0.0, matrix);
        self
    }

    /// Sets this vector to the direction `vector` transformed by the given
    /// homogeneous transform.
    #[inline]
    pub fn transform_direction_vector(&mut self, vector: &Self, matrix: &Matrix4) -> &mut Self {
        *self = homogeneous_map(vector, 0.0, matrix);
        self
    }
}

impl From<[f64; 3]> for Vector3 {
    #[inline]
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f64; 3] {
    #[inline]
    fn from(vector: Vector3) -> Self {
        [vector.x, vector.y, vector.z]
    }
}

impl_binop!(Add, add, Vector3, Vector3, Vector3, |a, b| {
    Vector3::new(a.x + b.x, a.y + b.y, a.z + b.z)
});

impl_binop!(Sub, sub, Vector3, Vector3, Vector3, |a, b| {
    Vector3::new(a.x - b.x, a.y - b.y, a.z - b.z)
});

impl_binop!(Mul, mul, Vector3, f64, Vector3, |a, b| {
    Vector3::new(a.x * b, a.y * b, a.z * b)
});

impl_binop!(Mul, mul, f64, Vector3, Vector3, |a, b| {
    Vector3::new(a * b.x, a * b.y, a * b.z)
});

impl_binop!(Div, div, Vector3, f64, Vector3, |a, b| {
    Vector3::new(a.x / b, a.y / b, a.z / b)
});

impl_binop_assign!(AddAssign, add_assign, Vector3, Vector3, |a, b| {
    a.add_vector(b);
});

impl_binop_assign!(SubAssign, sub_assign, Vector3, Vector3, |a, b| {
    a.subtract_vector(b);
});

impl_binop_assign!(MulAssign, mul_assign, Vector3, f64, |a, b| {
    a.multiply_scalar(*b);
});

impl_binop_assign!(DivAssign, div_assign, Vector3, f64, |a, b| {
    a.divide_scalar(*b);
});

impl_unary_op!(Neg, neg, Vector3, Vector3, |val| {
    Vector3::new(-val.x, -val.y, -val.z)
});

impl Index<usize> for Vector3 {
    type Output = f64;

    #[inline]
    fn index(&self, idx: usize) -> &Self::Output {
        match idx {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("index out of bounds"),
        }
    }
}

impl IndexMut<usize> for Vector3 {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        match idx {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("index out of bounds"),
        }
    }
}

impl_approx_eq_for_fields!(Vector3, [x, y, z]);

impl Vector4 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a new vector with all zeros, including the w-component.
    #[inline]
    pub const fn zeros() -> Self {
        Self::same(0.0)
    }

    /// Creates a new vector with all ones.
    #[inline]
    pub const fn ones() -> Self {
        Self::same(1.0)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0, 0.0)
    }

    /// The z-axis unit vector.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0, 0.0)
    }

    /// The w-axis unit vector.
    #[inline]
    pub const fn unit_w() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// The w-component.
    #[inline]
    pub const fn w(&self) -> f64 {
        self.w
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut f64 {
        &mut self.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut f64 {
        &mut self.y
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut f64 {
        &mut self.z
    }

    /// A mutable reference to the w-component.
    #[inline]
    pub const fn w_mut(&mut self) -> &mut f64 {
        &mut self.w
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

    #[inline]
    pub fn set_x(&mut self, x: f64) -> &mut Self {
        self.x = x;
        self
    }

    #[inline]
    pub fn set_y(&mut self, y: f64) -> &mut Self {
        self.y = y;
        self
    }

    #[inline]
    pub fn set_z(&mut self, z: f64) -> &mut Self {
        self.z = z;
        self
    }

    #[inline]
    pub fn set_w(&mut self, w: f64) -> &mut Self {
        self.w = w;
        self
    }

    /// The 3D vector containing the x-, y- and z-components of this vector.
    #[inline]
    pub const fn xyz(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Negates every component.
    #[inline]
    pub fn negate(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
        self.w = -self.w;
        self
    }

    /// Sets this vector to the negation of `vector`.
    #[inline]
    pub fn negate_vector(&mut self, vector: &Self) -> &mut Self {
        self.x = -vector.x;
        self.y = -vector.y;
        self.z = -vector.z;
        self.w = -vector.w;
        self
    }

    /// Adds `vector` to this vector.
    #[inline]
    pub fn add_vector(&mut self, vector: &Self) -> &mut Self {
        self.x += vector.x;
        self.y += vector.y;
        self.z += vector.z;
        self.w += vector.w;
        self
    }

    /// Adds `s` to every component.
    #[inline]
    pub fn add_scalar(&mut self, s: f64) -> &mut Self {
        self.x += s;
        self.y += s;
        self.z += s;
        self.w += s;
        self
    }

    /// Adds the given values to the respective components.
    #[inline]
    pub fn add_values(&mut self, x: f64, y: f64, z: f64, w: f64) -> &mut Self {
        self.x += x;
        self.y += y;
        self.z += z;
        self.w += w;
        self
    }

    /// Sets this vector to `u + v`.
    #[inline]
    pub fn add_vectors(&mut self, u: &Self, v: &Self) -> &mut Self {
        self.x = u.x + v.x;
        self.y = u.y + v.y;
        self.z = u.z + v.z;
        self.w = u.w + v.w;
        self
    }

    /// Subtracts `vector` from this vector.
    #[inline]
    pub fn subtract_vector(&mut self, vector: &Self) -> &mut Self {
        self.x -= vector.x;
        self.y -= vector.y;
        self.z -= vector.z;
        self.w -= vector.w;
        self
    }

    /// Subtracts `s` from every component.
    #[inline]
    pub fn subtract_scalar(&mut self, s: f64) -> &mut Self {
        self.x -= s;
        self.y -= s;
        self.z -= s;
        self.w -= s;
        self
    }

    /// Subtracts the given values from the respective components.
    #[inline]
    pub fn subtract_values(&mut self, x: f64, y: f64, z: f64, w: f64) -> &mut Self {
        self.x -= x;
        self.y -= y;
        self.z -= z;
        self.w -= w;
        self
    }

    /// Sets this vector to `u - v`.
    #[inline]
    pub fn subtract_vectors(&mut self, u: &Self, v: &Self) -> &mut Self {
        self.x = u.x - v.x;
        self.y = u.y - v.y;
        self.z = u.z - v.z;
        self.w = u.w - v.w;
        self
    }

    /// Multiplies every component by `s`.
    #[inline]
    pub fn multiply_scalar(&mut self, s: f64) -> &mut Self {
        self.x *= s;
        self.y *= s;
        self.z *= s;
        self.w *= s;
        self
    }

    /// Divides every component by `s`.
    #[inline]
    pub fn divide_scalar(&mut self, s: f64) -> &mut Self {
        self.x /= s;
        self.y /= s;
        self.z /= s;
        self.w /= s;
        self
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Computes the length of the vector.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Computes the square of the length of the vector.
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Computes the distance between this and another vector.
    #[inline]
    pub fn distance_to(&self, other: &Self) -> f64 {
        self.distance_to_squared(other).sqrt()
    }

    /// Computes the squared distance between this and another vector.
    #[inline]
    pub fn distance_to_squared(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        let dw = self.w - other.w;
        dx * dx + dy * dy + dz * dz + dw * dw
    }

    /// Scales the vector to unit length. A zero vector is left as is.
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        let length = self.length();
        if length != 0.0 {
            self.divide_scalar(length);
        }
        self
    }

    /// Returns the normalized version of the vector, or the vector itself if
    /// it has zero length.
    #[inline]
    pub fn normalized(&self) -> Self {
        let mut normalized = *self;
        normalized.normalize();
        normalized
    }

    /// Sets this vector to the linear interpolation `(1 - t) * u + t * v`.
    #[inline]
    pub fn lerp_vectors(&mut self, u: &Self, v: &Self, t: f64) -> &mut Self {
        self.x = (1.0 - t) * u.x + t * v.x;
        self.y = (1.0 - t) * u.y + t * v.y;
        self.z = (1.0 - t) * u.z + t * v.z;
        self.w = (1.0 - t) * u.w + t * v.w;
        self
    }

    /// Applies the full 4x4 matrix to this vector, w-row included.
    #[inline]
    pub fn transform(&mut self, matrix: &Matrix4) -> &mut Self {
        *self = linear_map_4(self, matrix);
        self
    }

    /// Sets this vector to `vector` transformed by the given 4x4 matrix.
    #[inline]
    pub fn transform_vector(&mut self, vector: &Self, matrix: &Matrix4) -> &mut Self {
        *self = linear_map_4(vector, matrix);
        self
    }
}

impl Default for Vector4 {
    fn default() -> Self {
        Self::unit_w()
    }
}

impl From<[f64; 4]> for Vector4 {
    #[inline]
    fn from([x, y, z, w]: [f64; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<Vector4> for [f64; 4] {
    #[inline]
    fn from(vector: Vector4) -> Self {
        [vector.x, vector.y, vector.z, vector.w]
    }
}

impl_binop!(Add, add, Vector4, Vector4, Vector4, |a, b| {
    Vector4::new(a.x + b.x, a.y + b.y, a.z + b.z, a.w + b.w)
});

impl_binop!(Sub, sub, Vector4, Vector4, Vector4, |a, b| {
    Vector4::new(a.x - b.x, a.y - b.y, a.z - b.z, a.w - b.w)
});

impl_binop!(Mul, mul, Vector4, f64, Vector4, |a, b| {
    Vector4::new(a.x * b, a.y * b, a.z * b, a.w * b)
});

impl_binop!(Mul, mul, f64, Vector4, Vector4, |a, b| {
    Vector4::new(a * b.x, a * b.y, a * b.z, a * b.w)
});

impl_binop!(Div, div, Vector4, f64, Vector4, |a, b| {
    Vector4::new(a.x / b, a.y / b, a.z / b, a.w / b)
});

impl_binop_assign!(AddAssign, add_assign, Vector4, Vector4, |a, b| {
    a.add_vector(b);
});

impl_binop_assign!(SubAssign, sub_assign, Vector4, Vector4, |a, b| {
    a.subtract_vector(b);
});

impl_binop_assign!(MulAssign, mul_assign, Vector4, f64, |a, b| {
    a.multiply_scalar(*b);
});

impl_binop_assign!(DivAssign, div_assign, Vector4, f64, |a, b| {
    a.divide_scalar(*b);
});

impl_unary_op!(Neg, neg, Vector4, Vector4, |val| {
    Vector4::new(-val.x, -val.y, -val.z, -val.w)
});

impl Index<usize> for Vector4 {
    type Output = f64;

    #[inline]
    fn index(&self, idx: usize) -> &Self::Output {
        match idx {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("index out of bounds"),
        }
    }
}

impl IndexMut<usize> for Vector4 {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        match idx {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("index out of bounds"),
        }
    }
}

impl_approx_eq_for_fields!(Vector4, [x, y, z, w]);

// The matrix buffers are column-major, so element (row, col) of an NxN
// matrix is at `m[col * N + row]`.

#[inline]
fn linear_map_2(v: &Vector2, matrix: &Matrix2) -> Vector2 {
    let m = matrix.elements();
    Vector2::new(v.x * m[0] + v.y * m[2], v.x * m[1] + v.y * m[3])
}

#[inline]
fn linear_map_3(v: &Vector3, matrix: &Matrix3) -> Vector3 {
    let m = matrix.elements();
    Vector3::new(
        v.x * m[0] + v.y * m[3] + v.z * m[6],
        v.x * m[1] + v.y * m[4] + v.z * m[7],
        v.x * m[2] + v.y * m[5] + v.z * m[8],
    )
}

/// Applies the upper three rows of the matrix to `(v, w)`, where `w` is the
/// implied homogeneous coordinate (1 for positions, 0 for directions).
#[inline]
fn homogeneous_map(v: &Vector3, w: f64, matrix: &Matrix4) -> Vector3 {
    let m = matrix.elements();
    Vector3::new(
        v.x * m[0] + v.y * m[4] + v.z * m[8] + w * m[12],
        v.x * m[1] + v.y * m[5] + v.z * m[9] + w * m[13],
        v.x * m[2] + v.y * m[6] + v.z * m[10] + w * m[14],
    )
}

#[inline]
fn linear_map_4(v: &Vector4, matrix: &Matrix4) -> Vector4 {
    let m = matrix.elements();
    Vector4::new(
        v.x * m[0] + v.y * m[4] + v.z * m[8] + v.w * m[12],
        v.x * m[1] + v.y * m[5] + v.z * m[9] + v.w * m[13],
        v.x * m[2] + v.y * m[6] + v.z * m[10] + v.w * m[14],
        v.x * m[3] + v.y * m[7] + v.z * m[11] + v.w * m[15],
    )
}
