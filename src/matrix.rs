//! Matrices.

use crate::vector::Vector3;
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};

/// A 2x2 matrix.
///
/// The elements are stored in column-major order, so the element at
/// `(row, col)` lives at index `col * 2 + row` of [`Self::elements`].
#[repr(C)]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct Matrix2 {
    elements: [f64; 4],
}

/// A 3x3 matrix.
///
/// The elements are stored in column-major order, so the element at
/// `(row, col)` lives at index `col * 3 + row` of [`Self::elements`].
#[repr(C)]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct Matrix3 {
    elements: [f64; 9],
}

/// A 4x4 matrix, typically representing a homogeneous transform or a
/// projection.
///
/// The elements are stored in column-major order, so the element at
/// `(row, col)` lives at index `col * 4 + row` of [`Self::elements`]. This is
/// the order expected when uploading the matrix to OpenGL-style graphics APIs.
#[repr(C)]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct Matrix4 {
    elements: [f64; 16],
}

impl Matrix2 {
    /// Creates the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::from_elements([1.0, 0.0, 0.0, 1.0])
    }

    /// Creates a matrix with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::from_elements([0.0; 4])
    }

    /// Creates a matrix from the given elements in row-major reading order.
    #[inline]
    pub const fn from_values(a00: f64, a01: f64, a10: f64, a11: f64) -> Self {
        Self::from_elements([a00, a10, a01, a11])
    }

    /// Creates a matrix from the given column-major element buffer.
    #[inline]
    pub const fn from_elements(elements: [f64; 4]) -> Self {
        Self { elements }
    }

    /// The column-major element buffer.
    #[inline]
    pub const fn elements(&self) -> &[f64; 4] {
        &self.elements
    }

    /// The mutable column-major element buffer.
    #[inline]
    pub const fn elements_mut(&mut self) -> &mut [f64; 4] {
        &mut self.elements
    }

    /// The element at the given row and column.
    ///
    /// # Panics
    /// If the row or column is out of range.
    #[inline]
    pub fn element(&self, row: usize, col: usize) -> f64 {
        self.elements[element_index::<2>(row, col)]
    }

    /// A mutable reference to the element at the given row and column.
    ///
    /// # Panics
    /// If the row or column is out of range.
    #[inline]
    pub fn element_mut(&mut self, row: usize, col: usize) -> &mut f64 {
        &mut self.elements[element_index::<2>(row, col)]
    }

    /// Sets all elements, given in row-major reading order.
    #[inline]
    pub fn set(&mut self, a00: f64, a01: f64, a10: f64, a11: f64) -> &mut Self {
        *self = Self::from_values(a00, a01, a10, a11);
        self
    }

    /// Resets the matrix to the identity.
    #[inline]
    pub fn set_identity(&mut self) -> &mut Self {
        *self = Self::identity();
        self
    }

    /// Post-multiplies this matrix by `matrix` (`self = self * matrix`).
    #[inline]
    pub fn multiply(&mut self, matrix: &Self) -> &mut Self {
        self.elements = column_major_product::<2, 4>(&self.elements, &matrix.elements);
        self
    }

    /// Pre-multiplies this matrix by `matrix` (`self = matrix * self`).
    #[inline]
    pub fn premultiply(&mut self, matrix: &Self) -> &mut Self {
        self.elements = column_major_product::<2, 4>(&matrix.elements, &self.elements);
        self
    }

    /// Sets this matrix to the product `a * b`.
    #[inline]
    pub fn multiply_matrices(&mut self, a: &Self, b: &Self) -> &mut Self {
        self.elements = column_major_product::<2, 4>(&a.elements, &b.elements);
        self
    }

    /// Transposes the matrix in place.
    #[inline]
    pub fn transpose(&mut self) -> &mut Self {
        self.elements = column_major_transpose::<2, 4>(&self.elements);
        self
    }

    /// Returns the transpose of the matrix.
    #[inline]
    pub fn transposed(&self) -> Self {
        Self::from_elements(column_major_transpose::<2, 4>(&self.elements))
    }
}

impl Default for Matrix2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl_binop!(Mul, mul, Matrix2, Matrix2, Matrix2, |a, b| {
    Matrix2::from_elements(column_major_product::<2, 4>(&a.elements, &b.elements))
});

impl_abs_diff_eq!(Matrix2, |a, b, epsilon| {
    elements_abs_diff_eq(&a.elements, &b.elements, epsilon)
});

impl_relative_eq!(Matrix2, |a, b, epsilon, max_relative| {
    elements_relative_eq(&a.elements, &b.elements, epsilon, max_relative)
});

impl Matrix3 {
    /// Creates the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::from_elements([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0])
    }

    /// Creates a matrix with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::from_elements([0.0; 9])
    }

    /// Creates a matrix from the given elements in row-major reading order.
    #[inline]
    pub const fn from_values(
        a00: f64,
        a01: f64,
        a02: f64,
        a10: f64,
        a11: f64,
        a12: f64,
        a20: f64,
        a21: f64,
        a22: f64,
    ) -> Self {
        Self::from_elements([a00, a10, a20, a01, a11, a21, a02, a12, a22])
    }

    /// Creates a matrix from the given column-major element buffer.
    #[inline]
    pub const fn from_elements(elements: [f64; 9]) -> Self {
        Self { elements }
    }

    /// The column-major element buffer.
    #[inline]
    pub const fn elements(&self) -> &[f64; 9] {
        &self.elements
    }

    /// The mutable column-major element buffer.
    #[inline]
    pub const fn elements_mut(&mut self) -> &mut [f64; 9] {
        &mut self.elements
    }

    /// The element at the given row and column.
    ///
    /// # Panics
    /// If the row or column is out of range.
    #[inline]
    pub fn element(&self, row: usize, col: usize) -> f64 {
        self.elements[element_index::<3>(row, col)]
    }

    /// A mutable reference to the element at the given row and column.
    ///
    /// # Panics
    /// If the row or column is out of range.
    #[inline]
    pub fn element_mut(&mut self, row: usize, col: usize) -> &mut f64 {
        &mut self.elements[element_index::<3>(row, col)]
    }

    /// Sets all elements, given in row-major reading order.
    #[inline]
    pub fn set(
        &mut self,
        a00: f64,
        a01: f64,
        a02: f64,
        a10: f64,
        a11: f64,
        a12: f64,
        a20: f64,
        a21: f64,
        a22: f64,
    ) -> &mut Self {
        *self = Self::from_values(a00, a01, a02, a10, a11, a12, a20, a21, a22);
        self
    }

    /// Resets the matrix to the identity.
    #[inline]
    pub fn set_identity(&mut self) -> &mut Self {
        *self = Self::identity();
        self
    }

    /// Post-multiplies this matrix by `matrix` (`self = self * matrix`).
    #[inline]
    pub fn multiply(&mut self, matrix: &Self) -> &mut Self {
        self.elements = column_major_product::<3, 9>(&self.elements, &matrix.elements);
        self
    }

    /// Pre-multiplies this matrix by `matrix` (`self = matrix * self`).
    #[inline]
    pub fn premultiply(&mut self, matrix: &Self) -> &mut Self {
        self.elements = column_major_product::<3, 9>(&matrix.elements, &self.elements);
        self
    }

    /// Sets this matrix to the product `a * b`.
    #[inline]
    pub fn multiply_matrices(&mut self, a: &Self, b: &Self) -> &mut Self {
        self.elements = column_major_product::<3, 9>(&a.elements, &b.elements);
        self
    }

    /// Transposes the matrix in place.
    #[inline]
    pub fn transpose(&mut self) -> &mut Self {
        self.elements = column_major_transpose::<3, 9>(&self.elements);
        self
    }

    /// Returns the transpose of the matrix.
    #[inline]
    pub fn transposed(&self) -> Self {
        Self::from_elements(column_major_transpose::<3, 9>(&self.elements))
    }
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl_binop!(Mul, mul, Matrix3, Matrix3, Matrix3, |a, b| {
    Matrix3::from_elements(column_major_product::<3, 9>(&a.elements, &b.elements))
});

impl_abs_diff_eq!(Matrix3, |a, b, epsilon| {
    elements_abs_diff_eq(&a.elements, &b.elements, epsilon)
});

impl_relative_eq!(Matrix3, |a, b, epsilon, max_relative| {
    elements_relative_eq(&a.elements, &b.elements, epsilon, max_relative)
});

impl Matrix4 {
    /// Creates the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::from_elements([
            1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Creates a matrix with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::from_elements([0.0; 16])
    }

    /// Creates a matrix from the given elements in row-major reading order.
    #[inline]
    pub const fn from_values(
        a00: f64,
        a01: f64,
        a02: f64,
        a03: f64,
        a10: f64,
        a11: f64,
        a12: f64,
        a13: f64,
        a20: f64,
        a21: f64,
        a22: f64,
        a23: f64,
        a30: f64,
        a31: f64,
        a32: f64,
        a33: f64,
    ) -> Self {
        Self::from_elements([
            a00, a10, a20, a30, a01, a11, a21, a31, a02, a12, a22, a32, a03, a13, a23, a33,
        ])
    }

    /// Creates a matrix from the given column-major element buffer.
    #[inline]
    pub const fn from_elements(elements: [f64; 16]) -> Self {
        Self { elements }
    }

    /// The column-major element buffer.
    #[inline]
    pub const fn elements(&self) -> &[f64; 16] {
        &self.elements
    }

    /// The mutable column-major element buffer.
    #[inline]
    pub const fn elements_mut(&mut self) -> &mut [f64; 16] {
        &mut self.elements
    }

    /// The element at the given row and column.
    ///
    /// # Panics
    /// If the row or column is out of range.
    #[inline]
    pub fn element(&self, row: usize, col: usize) -> f64 {
        self.elements[element_index::<4>(row, col)]
    }

    /// A mutable reference to the element at the given row and column.
    ///
    /// # Panics
    /// If the row or column is out of range.
    #[inline]
    pub fn element_mut(&mut self, row: usize, col: usize) -> &mut f64 {
        &mut self.elements[element_index::<4>(row, col)]
    }

    /// The upper-left 3x3 block, which holds the linear part of a homogeneous
    /// transform.
    #[inline]
    pub fn linear_part(&self) -> Matrix3 {
        let m = &self.elements;
        Matrix3::from_elements([m[0], m[1], m[2], m[4], m[5], m[6], m[8], m[9], m[10]])
    }

    /// Sets all elements, given in row-major reading order.
    #[inline]
    pub fn set(
        &mut self,
        a00: f64,
        a01: f64,
        a02: f64,
        a03: f64,
        a10: f64,
        a11: f64,
        a12: f64,
        a13: f64,
        a20: f64,
        a21: f64,
        a22: f64,
        a23: f64,
        a30: f64,
        a31: f64,
        a32: f64,
        a33: f64,
    ) -> &mut Self {
        *self = Self::from_values(
            a00, a01, a02, a03, a10, a11, a12, a13, a20, a21, a22, a23, a30, a31, a32, a33,
        );
        self
    }

    /// Resets the matrix to the identity.
    #[inline]
    pub fn set_identity(&mut self) -> &mut Self {
        *self = Self::identity();
        self
    }

    /// Post-multiplies this matrix by `matrix` (`self = self * matrix`).
    #[inline]
    pub fn multiply(&mut self, matrix: &Self) -> &mut Self {
        self.elements = column_major_product::<4, 16>(&self.elements, &matrix.elements);
        self
    }

    /// Pre-multiplies this matrix by `matrix` (`self = matrix * self`).
    #[inline]
    pub fn premultiply(&mut self, matrix: &Self) -> &mut Self {
        self.elements = column_major_product::<4, 16>(&matrix.elements, &self.elements);
        self
    }

    /// Sets this matrix to the product `a * b`.
    #[inline]
    pub fn multiply_matrices(&mut self, a: &Self, b: &Self) -> &mut Self {
        self.elements = column_major_product::<4, 16>(&a.elements, &b.elements);
        self
    }

    /// Transposes the matrix in place.
    #[inline]
    pub fn transpose(&mut self) -> &mut Self {
        self.elements = column_major_transpose::<4, 16>(&self.elements);
        self
    }

    /// Returns the transpose of the matrix.
    #[inline]
    pub fn transposed(&self) -> Self {
        Self::from_elements(column_major_transpose::<4, 16>(&self.elements))
    }

    /// Computes the determinant of the matrix.
    pub fn determinant(&self) -> f64 {
        let minors = Minors::of(&self.elements);
        minors.determinant()
    }

    /// Inverts the matrix in place.
    ///
    /// If the determinant is exactly zero the matrix is left unchanged, so
    /// callers that need to detect singular matrices must check
    /// [`Self::determinant`] first.
    pub fn invert(&mut self) -> &mut Self {
        let t = &self.elements;
        let minors = Minors::of(t);

        let det = minors.determinant();
        if det == 0.0 {
            return self;
        }
        let inv_det = 1.0 / det;

        let [a00, a10, a20, a30, a01, a11, a21, a31, a02, a12, a22, a32, a03, a13, a23, a33] = *t;
        let Minors {
            b00,
            b01,
            b02,
            b03,
            b04,
            b05,
            b06,
            b07,
            b08,
            b09,
            b10,
            b11,
        } = minors;

        self.elements = [
            (a11 * b11 - a12 * b10 + a13 * b09) * inv_det,
            (a12 * b08 - a10 * b11 - a13 * b07) * inv_det,
            (a10 * b10 - a11 * b08 + a13 * b06) * inv_det,
            (a11 * b07 - a10 * b09 - a12 * b06) * inv_det,
            (a02 * b10 - a01 * b11 - a03 * b09) * inv_det,
            (a00 * b11 - a02 * b08 + a03 * b07) * inv_det,
            (a01 * b08 - a00 * b10 - a03 * b06) * inv_det,
            (a00 * b09 - a01 * b07 + a02 * b06) * inv_det,
            (a31 * b05 - a32 * b04 + a33 * b03) * inv_det,
            (a32 * b02 - a30 * b05 - a33 * b01) * inv_det,
            (a30 * b04 - a31 * b02 + a33 * b00) * inv_det,
            (a31 * b01 - a30 * b03 - a32 * b00) * inv_det,
            (a22 * b04 - a21 * b05 - a23 * b03) * inv_det,
            (a20 * b05 - a22 * b02 + a23 * b01) * inv_det,
            (a21 * b02 - a20 * b04 - a23 * b00) * inv_det,
            (a20 * b03 - a21 * b01 + a22 * b00) * inv_det,
        ];
        self
    }

    /// Returns the inverse of the matrix, or the matrix itself if it is
    /// singular (see [`Self::invert`]).
    pub fn inverted(&self) -> Self {
        let mut inverted = *self;
        inverted.invert();
        inverted
    }

    /// Overwrites the matrix with a rotation of `theta` radians about the
    /// x-axis.
    pub fn make_rotation_x(&mut self, theta: f64) -> &mut Self {
        let (s, c) = theta.sin_cos();
        self.set(
            1.0, 0.0, 0.0, 0.0, //
            0.0, c, -s, 0.0, //
            0.0, s, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Overwrites the matrix with a rotation of `theta` radians about the
    /// y-axis.
    pub fn make_rotation_y(&mut self, theta: f64) -> &mut Self {
        let (s, c) = theta.sin_cos();
        self.set(
            c, 0.0, s, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            -s, 0.0, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Overwrites the matrix with a rotation of `theta` radians about the
    /// z-axis.
    pub fn make_rotation_z(&mut self, theta: f64) -> &mut Self {
        let (s, c) = theta.sin_cos();
        self.set(
            c, -s, 0.0, 0.0, //
            s, c, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Overwrites the matrix with a scaling by the components of `scale`.
    #[inline]
    pub fn make_scale(&mut self, scale: &Vector3) -> &mut Self {
        self.make_scale_values(scale.x(), scale.y(), scale.z())
    }

    /// Overwrites the matrix with a scaling by the given factors.
    pub fn make_scale_values(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.set(
            x, 0.0, 0.0, 0.0, //
            0.0, y, 0.0, 0.0, //
            0.0, 0.0, z, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Overwrites the matrix with a translation by `translation`.
    #[inline]
    pub fn make_translation(&mut self, translation: &Vector3) -> &mut Self {
        self.make_translation_values(translation.x(), translation.y(), translation.z())
    }

    /// Overwrites the matrix with a translation by the given offsets.
    pub fn make_translation_values(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.set(
            1.0, 0.0, 0.0, x, //
            0.0, 1.0, 0.0, y, //
            0.0, 0.0, 1.0, z, //
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Overwrites the matrix with an orthographic projection of the given
    /// view box onto the clip-space cube.
    pub fn make_orthographic(
        &mut self,
        left: f64,
        right: f64,
        top: f64,
        bottom: f64,
        near: f64,
        far: f64,
    ) -> &mut Self {
        let w = 1.0 / (right - left);
        let h = 1.0 / (top - bottom);
        let d = 1.0 / (far - near);

        self.set(
            2.0 * w,
            0.0,
            0.0,
            -(right + left) * w,
            0.0,
            2.0 * h,
            0.0,
            -(top + bottom) * h,
            0.0,
            0.0,
            -2.0 * d,
            -(far + near) * d,
            0.0,
            0.0,
            0.0,
            1.0,
        )
    }

    /// Overwrites the matrix with an off-center perspective projection of the
    /// given view frustum, using the right-handed OpenGL clip convention.
    pub fn make_perspective(
        &mut self,
        left: f64,
        right: f64,
        top: f64,
        bottom: f64,
        near: f64,
        far: f64,
    ) -> &mut Self {
        let width = right - left;
        let height = top - bottom;
        let depth = far - near;

        let x = 2.0 * near / width;
        let y = 2.0 * near / height;

        let a = (right + left) / width;
        let b = (top + bottom) / height;
        let c = -(far + near) / depth;
        let d = -(2.0 * far * near) / depth;

        self.set(
            x, 0.0, a, 0.0, //
            0.0, y, b, 0.0, //
            0.0, 0.0, c, d, //
            0.0, 0.0, -1.0, 0.0,
        )
    }

    /// Overwrites the matrix with a view transform for an observer at
    /// `source` looking towards `target`, with `up` giving the approximate
    /// upward direction.
    ///
    /// The view looks down its local negative z-axis. Coincident `source` and
    /// `target`, or `up` parallel to the view direction, yield NaN elements.
    pub fn look_at(&mut self, source: &Vector3, target: &Vector3, up: &Vector3) -> &mut Self {
        let mut k = *source - target;
        let k_length = k.length();
        k.divide_scalar(k_length);

        let mut i = up.cross(&k);
        let i_length = i.length();
        i.divide_scalar(i_length);

        let j = k.cross(&i);

        let tx = -i.dot(source);
        let ty = -j.dot(source);
        let tz = -k.dot(source);

        self.set(
            i.x(),
            i.y(),
            i.z(),
            tx,
            j.x(),
            j.y(),
            j.z(),
            ty,
            k.x(),
            k.y(),
            k.z(),
            tz,
            0.0,
            0.0,
            0.0,
            1.0,
        )
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl_binop!(Mul, mul, Matrix4, Matrix4, Matrix4, |a, b| {
    Matrix4::from_elements(column_major_product::<4, 16>(&a.elements, &b.elements))
});

impl_abs_diff_eq!(Matrix4, |a, b, epsilon| {
    elements_abs_diff_eq(&a.elements, &b.elements, epsilon)
});

impl_relative_eq!(Matrix4, |a, b, epsilon, max_relative| {
    elements_relative_eq(&a.elements, &b.elements, epsilon, max_relative)
});

/// The twelve 2x2 minors formed from the top two and bottom two rows of a
/// 4x4 matrix. Both the determinant and the adjugate are combinations of
/// them.
#[derive(Clone, Copy, Debug)]
struct Minors {
    b00: f64,
    b01: f64,
    b02: f64,
    b03: f64,
    b04: f64,
    b05: f64,
    b06: f64,
    b07: f64,
    b08: f64,
    b09: f64,
    b10: f64,
    b11: f64,
}

impl Minors {
    #[inline]
    fn of(t: &[f64; 16]) -> Self {
        let [a00, a10, a20, a30, a01, a11, a21, a31, a02, a12, a22, a32, a03, a13, a23, a33] = *t;
        Self {
            b00: a00 * a11 - a01 * a10,
            b01: a00 * a12 - a02 * a10,
            b02: a00 * a13 - a03 * a10,
            b03: a01 * a12 - a02 * a11,
            b04: a01 * a13 - a03 * a11,
            b05: a02 * a13 - a03 * a12,
            b06: a20 * a31 - a21 * a30,
            b07: a20 * a32 - a22 * a30,
            b08: a20 * a33 - a23 * a30,
            b09: a21 * a32 - a22 * a31,
            b10: a21 * a33 - a23 * a31,
            b11: a22 * a33 - a23 * a32,
        }
    }

    #[inline]
    fn determinant(&self) -> f64 {
        self.b00 * self.b11 - self.b01 * self.b10
            + self.b02 * self.b09
            + self.b03 * self.b08
            - self.b04 * self.b07
            + self.b05 * self.b06
    }
}

#[inline]
fn element_index<const N: usize>(row: usize, col: usize) -> usize {
    assert!(
        row < N && col < N,
        "element ({row}, {col}) out of range for {N}x{N} matrix"
    );
    col * N + row
}

/// Computes `a * b` for two column-major N-by-N buffers of length `LEN = N * N`.
/// Every multiplication routine goes through here, so all of them agree
/// bit for bit.
#[inline]
fn column_major_product<const N: usize, const LEN: usize>(
    a: &[f64; LEN],
    b: &[f64; LEN],
) -> [f64; LEN] {
    let mut product = [0.0; LEN];
    for col in 0..N {
        for row in 0..N {
            let mut sum = a[row] * b[col * N];
            for k in 1..N {
                sum += a[k * N + row] * b[col * N + k];
            }
            product[col * N + row] = sum;
        }
    }
    product
}

#[inline]
fn column_major_transpose<const N: usize, const LEN: usize>(m: &[f64; LEN]) -> [f64; LEN] {
    let mut transposed = [0.0; LEN];
    for col in 0..N {
        for row in 0..N {
            transposed[row * N + col] = m[col * N + row];
        }
    }
    transposed
}

fn elements_abs_diff_eq(a: &[f64], b: &[f64], epsilon: f64) -> bool {
    a.iter()
        .zip(b)
        .all(|(a, b)| a.abs_diff_eq(b, epsilon))
}

fn elements_relative_eq(a: &[f64], b: &[f64], epsilon: f64, max_relative: f64) -> bool {
    a.iter()
        .zip(b)
        .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
}

#[cfg(feature = "fuzzing")]
pub mod fuzzing {
    use super::*;
    use approx::abs_diff_eq;
    use arbitrary::{Arbitrary, Result, Unstructured};
    use std::mem;

    const MAX_ELEMENT_MAGNITUDE: f64 = 1e3;

    /// A [`Matrix4`] with finite elements of bounded magnitude.
    #[derive(Clone, Copy, Debug)]
    pub struct ArbitraryMatrix4(pub Matrix4);

    impl<'a> Arbitrary<'a> for ArbitraryMatrix4 {
        fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
            let mut elements = [0.0; 16];
            for element in &mut elements {
                *element = MAX_ELEMENT_MAGNITUDE * (2.0 * arbitrary_norm_f64(u)? - 1.0);
            }
            Ok(Self(Matrix4::from_elements(elements)))
        }

        fn size_hint(_depth: usize) -> (usize, Option<usize>) {
            let size = 16 * mem::size_of::<u32>();
            (size, Some(size))
        }
    }

    pub fn fuzz_test_matrix4_inversion(ArbitraryMatrix4(matrix): ArbitraryMatrix4) {
        let det = matrix.determinant();
        let inverse = matrix.inverted();

        if det == 0.0 {
            assert_eq!(inverse, matrix);
            return;
        }

        // Only check the round trip for reasonably conditioned matrices,
        // measured by the determinant relative to the product of column
        // lengths (Hadamard's bound).
        let column_length_product: f64 = (0..4)
            .map(|col| {
                (0..4)
                    .map(|row| matrix.element(row, col).powi(2))
                    .sum::<f64>()
                    .sqrt()
            })
            .product();
        if det.abs() < 1e-3 * column_length_product {
            return;
        }

        let product = matrix * inverse;
        assert!(
            abs_diff_eq!(product, Matrix4::identity(), epsilon = 1e-6),
            "{matrix:?} times its inverse {inverse:?} gave {product:?}"
        );
    }

    pub fn fuzz_test_matrix4_multiplication(
        (ArbitraryMatrix4(a), ArbitraryMatrix4(b)): (ArbitraryMatrix4, ArbitraryMatrix4),
    ) {
        let mut product = Matrix4::zeros();
        product.multiply_matrices(&a, &b);

        let mut multiplied = a;
        multiplied.multiply(&b);
        assert_eq!(multiplied, product);

        let mut premultiplied = b;
        premultiplied.premultiply(&a);
        assert_eq!(premultiplied, product);

        assert_eq!(a * b, product);

        assert_eq!(b.transposed() * a.transposed(), product.transposed());
    }

    fn arbitrary_norm_f64(u: &mut Unstructured<'_>) -> Result<f64> {
        Ok(f64::from(u.int_in_range(0..=1000000)?) / 1000000.0)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use crate::vector::Vector4;
    use approx::{abs_diff_eq, assert_abs_diff_eq};
    use proptest::prelude::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPSILON: f64 = 1e-9;

    fn sequential_matrix4() -> Matrix4 {
        Matrix4::from_values(
            1.0, 2.0, 3.0, 4.0, //
            5.0, 6.0, 7.0, 8.0, //
            9.0, 10.0, 11.0, 12.0, //
            13.0, 14.0, 15.0, 16.0,
        )
    }

    fn invertible_matrix4() -> Matrix4 {
        Matrix4::from_values(
            2.0, 0.0, 1.0, 3.0, //
            1.0, 3.0, 0.0, -1.0, //
            0.0, 1.0, 4.0, 2.0, //
            1.0, 0.0, 2.0, 5.0,
        )
    }

    fn to_nalgebra(matrix: &Matrix4) -> nalgebra::Matrix4<f64> {
        nalgebra::Matrix4::from_column_slice(matrix.elements())
    }

    fn from_nalgebra(matrix: &nalgebra::Matrix4<f64>) -> Matrix4 {
        let mut elements = [0.0; 16];
        elements.copy_from_slice(matrix.as_slice());
        Matrix4::from_elements(elements)
    }

    prop_compose! {
        fn matrix4_strategy(max_element: f64)(
            elements in prop::array::uniform16(-max_element..max_element),
        ) -> Matrix4 {
            Matrix4::from_elements(elements)
        }
    }

    prop_compose! {
        fn vector3_strategy(max_component: f64)(
            x in -max_component..max_component,
            y in -max_component..max_component,
            z in -max_component..max_component,
        ) -> Vector3 {
            Vector3::new(x, y, z)
        }
    }

    #[test]
    fn default_matrices_are_identity() {
        assert_eq!(Matrix2::default(), Matrix2::identity());
        assert_eq!(Matrix3::default(), Matrix3::identity());
        assert_eq!(Matrix4::default(), Matrix4::identity());
    }

    #[test]
    fn zero_matrices_have_only_zero_elements() {
        assert!(Matrix2::zeros().elements().iter().all(|&e| e == 0.0));
        assert!(Matrix3::zeros().elements().iter().all(|&e| e == 0.0));
        assert!(Matrix4::zeros().elements().iter().all(|&e| e == 0.0));
    }

    #[test]
    fn matrix2_from_values_stores_elements_column_major() {
        let m = Matrix2::from_values(1.0, 2.0, 3.0, 4.0);
        assert_eq!(m.elements(), &[1.0, 3.0, 2.0, 4.0]);
        assert_eq!(m.element(0, 1), 2.0);
        assert_eq!(m.element(1, 0), 3.0);
    }

    #[test]
    fn matrix3_from_values_stores_elements_column_major() {
        let m = Matrix3::from_values(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        assert_eq!(
            m.elements(),
            &[1.0, 4.0, 7.0, 2.0, 5.0, 8.0, 3.0, 6.0, 9.0]
        );
    }

    #[test]
    fn matrix4_from_values_stores_elements_column_major() {
        assert_eq!(
            sequential_matrix4().elements(),
            &[
                1.0, 5.0, 9.0, 13.0, 2.0, 6.0, 10.0, 14.0, 3.0, 7.0, 11.0, 15.0, 4.0, 8.0, 12.0,
                16.0
            ]
        );
    }

    #[test]
    fn setting_matrix_matches_from_values() {
        let mut m = Matrix4::zeros();
        m.set(
            1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0,
        );
        assert_eq!(m, sequential_matrix4());

        let mut m3 = Matrix3::zeros();
        m3.set(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        assert_eq!(
            m3,
            Matrix3::from_values(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0)
        );

        m3.set_identity();
        assert_eq!(m3, Matrix3::identity());
    }

    #[test]
    fn element_mut_writes_to_the_right_slot() {
        let mut m = Matrix4::identity();
        *m.element_mut(1, 3) = 7.0;
        assert_eq!(m.elements()[13], 7.0);
        assert_eq!(m.element(1, 3), 7.0);
    }

    #[test]
    #[should_panic]
    fn accessing_element_out_of_range_panics() {
        Matrix3::identity().element(3, 0);
    }

    #[test]
    fn matrix_equality_is_exact() {
        let a = sequential_matrix4();
        let mut b = a;
        b.elements_mut()[5] += 1e-12;
        assert_ne!(a, b);
        assert_abs_diff_eq!(a, b, epsilon = 1e-9);
    }

    #[test]
    fn multiplying_scale_and_sequential_matrix4_gives_known_result() {
        let mut m = Matrix4::from_values(
            2.0, 0.0, 0.0, 0.0, //
            0.0, 2.0, 0.0, 0.0, //
            0.0, 0.0, 2.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        );
        m.multiply(&sequential_matrix4());
        assert_eq!(
            m.elements(),
            &[
                2.0, 10.0, 18.0, 13.0, 4.0, 12.0, 20.0, 14.0, 6.0, 14.0, 22.0, 15.0, 8.0, 16.0,
                24.0, 16.0
            ]
        );
    }

    #[test]
    fn multiplying_matrix4_matches_nalgebra() {
        let a = sequential_matrix4();
        let b = invertible_matrix4();
        let expected = from_nalgebra(&(to_nalgebra(&a) * to_nalgebra(&b)));
        assert_eq!(a * b, expected);
    }

    #[test]
    fn multiply_premultiply_and_multiply_matrices_agree() {
        let a = sequential_matrix4();
        let b = invertible_matrix4();

        let mut ab = Matrix4::zeros();
        ab.multiply_matrices(&a, &b);
        let mut ba = Matrix4::zeros();
        ba.multiply_matrices(&b, &a);

        let mut m = a;
        m.multiply(&b);
        assert_eq!(m, ab);

        let mut m = a;
        m.premultiply(&b);
        assert_eq!(m, ba);

        assert_eq!(&a * &b, ab);
    }

    #[test]
    fn matrix2_and_matrix3_products_follow_row_by_column_rule() {
        let a = Matrix2::from_values(1.0, 2.0, 3.0, 4.0);
        let b = Matrix2::from_values(5.0, 6.0, 7.0, 8.0);
        assert_eq!(a * b, Matrix2::from_values(19.0, 22.0, 43.0, 50.0));

        let mut m = a;
        m.premultiply(&b);
        assert_eq!(m, Matrix2::from_values(23.0, 34.0, 31.0, 46.0));

        let a = Matrix3::from_values(1.0, 2.0, 0.0, 0.0, 1.0, 3.0, 4.0, 0.0, 1.0);
        let b = Matrix3::from_values(2.0, 0.0, 1.0, 1.0, 1.0, 0.0, 0.0, 3.0, 1.0);
        let mut m = Matrix3::identity();
        m.multiply_matrices(&a, &b);
        assert_eq!(
            m,
            Matrix3::from_values(4.0, 2.0, 1.0, 1.0, 10.0, 3.0, 8.0, 3.0, 5.0)
        );
        let mut n = a;
        n.multiply(&b);
        assert_eq!(n, m);
    }

    #[test]
    fn transposing_swaps_rows_and_columns() {
        let mut m = sequential_matrix4();
        m.transpose();
        assert_eq!(
            m,
            Matrix4::from_values(
                1.0, 5.0, 9.0, 13.0, //
                2.0, 6.0, 10.0, 14.0, //
                3.0, 7.0, 11.0, 15.0, //
                4.0, 8.0, 12.0, 16.0,
            )
        );
        assert_eq!(m.transposed(), sequential_matrix4());

        let mut m2 = Matrix2::from_values(1.0, 2.0, 3.0, 4.0);
        m2.transpose();
        assert_eq!(m2, Matrix2::from_values(1.0, 3.0, 2.0, 4.0));

        let m3 = Matrix3::from_values(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        assert_eq!(
            m3.transposed(),
            Matrix3::from_values(1.0, 4.0, 7.0, 2.0, 5.0, 8.0, 3.0, 6.0, 9.0)
        );
    }

    #[test]
    fn determinant_of_identity_is_one() {
        assert_eq!(Matrix4::identity().determinant(), 1.0);
    }

    #[test]
    fn determinant_of_sequential_matrix4_is_zero() {
        assert_eq!(sequential_matrix4().determinant(), 0.0);
    }

    #[test]
    fn determinant_matches_nalgebra() {
        let m = invertible_matrix4();
        assert_abs_diff_eq!(
            m.determinant(),
            to_nalgebra(&m).determinant(),
            epsilon = EPSILON
        );
    }

    #[test]
    fn determinant_is_invariant_under_transposition() {
        let m = invertible_matrix4();
        assert_abs_diff_eq!(m.determinant(), m.transposed().determinant(), epsilon = EPSILON);
    }

    #[test]
    fn inverting_matrix4_matches_nalgebra() {
        let m = invertible_matrix4();
        let expected = from_nalgebra(&to_nalgebra(&m).try_inverse().unwrap());
        assert_abs_diff_eq!(m.inverted(), expected, epsilon = EPSILON);
    }

    #[test]
    fn inverting_singular_matrix4_leaves_it_unchanged() {
        let mut m = sequential_matrix4();
        m.invert();
        assert_eq!(m, sequential_matrix4());

        let mut zeros = Matrix4::zeros();
        zeros.invert();
        assert_eq!(zeros, Matrix4::zeros());
    }

    #[test]
    fn inverse_of_perspective_projection_is_left_and_right_inverse() {
        let mut m = Matrix4::zeros();
        m.make_perspective(-1.0, 2.0, 1.5, -0.5, 1.0, 50.0);

        let mut left_product = m;
        left_product.invert().multiply(&m);
        assert_abs_diff_eq!(left_product, Matrix4::identity(), epsilon = EPSILON);

        assert_abs_diff_eq!(m * m.inverted(), Matrix4::identity(), epsilon = EPSILON);
    }

    #[test]
    fn inverting_identity_gives_identity() {
        assert_eq!(Matrix4::identity().inverted(), Matrix4::identity());
    }

    #[test]
    fn linear_part_is_upper_left_block() {
        assert_eq!(
            sequential_matrix4().linear_part(),
            Matrix3::from_values(1.0, 2.0, 3.0, 5.0, 6.0, 7.0, 9.0, 10.0, 11.0)
        );
    }

    #[test]
    fn rotating_about_z_maps_x_axis_to_y_axis() {
        let mut m = Matrix4::zeros();
        m.make_rotation_z(FRAC_PI_2);
        let mut v = Vector3::unit_x();
        v.transform_direction(&m);
        assert_abs_diff_eq!(v, Vector3::unit_y(), epsilon = EPSILON);
    }

    #[test]
    fn rotating_about_x_maps_y_axis_to_z_axis() {
        let mut m = Matrix4::zeros();
        m.make_rotation_x(FRAC_PI_2);
        let mut v = Vector3::unit_y();
        v.transform_direction(&m);
        assert_abs_diff_eq!(v, Vector3::unit_z(), epsilon = EPSILON);
    }

    #[test]
    fn rotating_about_y_maps_z_axis_to_x_axis() {
        let mut m = Matrix4::zeros();
        m.make_rotation_y(FRAC_PI_2);
        let mut v = Vector3::unit_z();
        v.transform_direction(&m);
        assert_abs_diff_eq!(v, Vector3::unit_x(), epsilon = EPSILON);
    }

    #[test]
    fn rotation_matrices_overwrite_previous_content() {
        let mut m = sequential_matrix4();
        m.make_rotation_x(0.0);
        assert_eq!(m, Matrix4::identity());
    }

    #[test]
    fn rotation_matrices_match_nalgebra() {
        let angle = 0.3 * PI;
        let mut m = Matrix4::zeros();

        m.make_rotation_x(angle);
        let expected = nalgebra::Rotation3::from_axis_angle(&nalgebra::Vector3::x_axis(), angle)
            .to_homogeneous();
        assert_abs_diff_eq!(m, from_nalgebra(&expected), epsilon = EPSILON);

        m.make_rotation_y(angle);
        let expected = nalgebra::Rotation3::from_axis_angle(&nalgebra::Vector3::y_axis(), angle)
            .to_homogeneous();
        assert_abs_diff_eq!(m, from_nalgebra(&expected), epsilon = EPSILON);

        m.make_rotation_z(angle);
        let expected = nalgebra::Rotation3::from_axis_angle(&nalgebra::Vector3::z_axis(), angle)
            .to_homogeneous();
        assert_abs_diff_eq!(m, from_nalgebra(&expected), epsilon = EPSILON);
    }

    #[test]
    fn scale_matrix_is_diagonal() {
        let mut m = Matrix4::zeros();
        m.make_scale(&Vector3::new(2.0, 3.0, 4.0));
        assert_eq!(
            m,
            Matrix4::from_values(
                2.0, 0.0, 0.0, 0.0, //
                0.0, 3.0, 0.0, 0.0, //
                0.0, 0.0, 4.0, 0.0, //
                0.0, 0.0, 0.0, 1.0,
            )
        );
    }

    #[test]
    fn translation_matrix_stores_offset_in_last_column() {
        let mut m = Matrix4::zeros();
        m.make_translation(&Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(&m.elements()[12..], &[1.0, 2.0, 3.0, 1.0]);
        assert_eq!(m.linear_part(), Matrix3::identity());

        let mut p = Vector3::new(1.0, 1.0, 1.0);
        p.transform_position(&m);
        assert_eq!(p, Vector3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn orthographic_projection_maps_view_box_corners_to_clip_cube() {
        let mut m = Matrix4::zeros();
        m.make_orthographic(-2.0, 4.0, 3.0, -1.0, 0.5, 10.0);

        let mut near_corner = Vector3::new(-2.0, -1.0, -0.5);
        near_corner.transform_position(&m);
        assert_abs_diff_eq!(near_corner, Vector3::new(-1.0, -1.0, -1.0), epsilon = EPSILON);

        let mut far_corner = Vector3::new(4.0, 3.0, -10.0);
        far_corner.transform_position(&m);
        assert_abs_diff_eq!(far_corner, Vector3::new(1.0, 1.0, 1.0), epsilon = EPSILON);

        assert_abs_diff_eq!(m.element(0, 3), -1.0 / 3.0, epsilon = EPSILON);
        assert_abs_diff_eq!(m.element(1, 3), -0.5, epsilon = EPSILON);
        assert_abs_diff_eq!(m.element(2, 3), -10.5 / 9.5, epsilon = EPSILON);
        assert_eq!(m.element(3, 3), 1.0);
    }

    #[test]
    fn perspective_projection_matches_nalgebra_for_symmetric_frustum() {
        let near = 0.1;
        let far = 100.0;
        let half_height = near * (0.5_f64 * FRAC_PI_2).tan();
        let half_width = 1.5 * half_height;

        let mut m = Matrix4::zeros();
        m.make_perspective(-half_width, half_width, half_height, -half_height, near, far);

        let expected = nalgebra::Perspective3::new(1.5, FRAC_PI_2, near, far).to_homogeneous();
        assert_abs_diff_eq!(m, from_nalgebra(&expected), epsilon = EPSILON);
    }

    #[test]
    fn perspective_projection_maps_near_and_far_planes_to_clip_range() {
        let mut m = Matrix4::zeros();
        m.make_perspective(-1.0, 2.0, 1.5, -0.5, 1.0, 50.0);

        let mut near_point = Vector4::new(2.0, 1.5, -1.0, 1.0);
        near_point.transform(&m);
        let ndc = near_point.xyz() / near_point.w();
        assert_abs_diff_eq!(ndc, Vector3::new(1.0, 1.0, -1.0), epsilon = EPSILON);

        let mut far_point = Vector4::new(-50.0, -25.0, -50.0, 1.0);
        far_point.transform(&m);
        let ndc = far_point.xyz() / far_point.w();
        assert_abs_diff_eq!(ndc, Vector3::new(-1.0, -1.0, 1.0), epsilon = EPSILON);
    }

    #[test]
    fn looking_at_target_along_negative_z_gives_translation() {
        let mut m = Matrix4::zeros();
        m.look_at(
            &Vector3::new(0.0, 0.0, 5.0),
            &Vector3::zeros(),
            &Vector3::unit_y(),
        );
        let mut expected = Matrix4::zeros();
        expected.make_translation_values(0.0, 0.0, -5.0);
        assert_abs_diff_eq!(m, expected, epsilon = EPSILON);
    }

    #[test]
    fn look_at_matches_nalgebra() {
        let source = Vector3::new(1.0, 2.0, 3.0);
        let target = Vector3::new(-2.0, 0.5, -1.0);
        let up = Vector3::unit_y();

        let mut m = Matrix4::zeros();
        m.look_at(&source, &target, &up);

        let expected = nalgebra::Matrix4::look_at_rh(
            &nalgebra::Point3::new(1.0, 2.0, 3.0),
            &nalgebra::Point3::new(-2.0, 0.5, -1.0),
            &nalgebra::Vector3::y(),
        );
        assert_abs_diff_eq!(m, from_nalgebra(&expected), epsilon = EPSILON);
    }

    #[test]
    fn look_at_with_coincident_source_and_target_gives_nan() {
        let mut m = Matrix4::zeros();
        let p = Vector3::new(1.0, 1.0, 1.0);
        m.look_at(&p, &p, &Vector3::unit_y());
        assert!(m.elements().iter().any(|e| e.is_nan()));
    }

    proptest! {
        #[test]
        fn multiplying_by_identity_gives_same_matrix(m in matrix4_strategy(1e3)) {
            let identity = Matrix4::identity();
            prop_assert_eq!(m * identity, m);
            prop_assert_eq!(identity * m, m);
        }
    }

    proptest! {
        #[test]
        fn multiplication_variants_are_consistent(
            a in matrix4_strategy(1e3),
            b in matrix4_strategy(1e3),
        ) {
            let mut product = Matrix4::zeros();
            product.multiply_matrices(&a, &b);

            let mut multiplied = a;
            multiplied.multiply(&b);
            prop_assert_eq!(multiplied, product);

            let mut premultiplied = b;
            premultiplied.premultiply(&a);
            prop_assert_eq!(premultiplied, product);
        }
    }

    proptest! {
        #[test]
        fn product_matches_nalgebra(a in matrix4_strategy(1e2), b in matrix4_strategy(1e2)) {
            let expected = from_nalgebra(&(to_nalgebra(&a) * to_nalgebra(&b)));
            prop_assert!(abs_diff_eq!(a * b, expected, epsilon = 1e-9));
        }
    }

    proptest! {
        #[test]
        fn determinant_matches_nalgebra_for_random_matrices(m in matrix4_strategy(10.0)) {
            prop_assert!(abs_diff_eq!(
                m.determinant(),
                to_nalgebra(&m).determinant(),
                epsilon = 1e-8
            ));
        }
    }

    proptest! {
        #[test]
        fn inverse_round_trips_for_rigid_transforms(
            angle_x in -PI..PI,
            angle_z in -PI..PI,
            translation in vector3_strategy(1e2),
        ) {
            let mut rotation_x = Matrix4::zeros();
            rotation_x.make_rotation_x(angle_x);
            let mut rotation_z = Matrix4::zeros();
            rotation_z.make_rotation_z(angle_z);
            let mut m = Matrix4::zeros();
            m.make_translation(&translation);
            m.multiply(&rotation_x).multiply(&rotation_z);

            let product = m * m.inverted();
            prop_assert!(abs_diff_eq!(product, Matrix4::identity(), epsilon = 1e-9));

            let mut left_product = m;
            left_product.invert().multiply(&m);
            prop_assert!(abs_diff_eq!(left_product, Matrix4::identity(), epsilon = 1e-9));
        }
    }

    proptest! {
        #[test]
        fn look_at_maps_source_to_view_origin_and_back(
            source in vector3_strategy(1e2),
            offset in vector3_strategy(1e2),
        ) {
            let target = source + offset;
            let up = Vector3::unit_y();
            prop_assume!(offset.length() > 1e-3);
            prop_assume!(offset.normalized().cross(&up).length() > 1e-3);

            let mut view = Matrix4::zeros();
            view.look_at(&source, &target, &up);

            let mut origin = source;
            origin.transform_position(&view);
            prop_assert!(abs_diff_eq!(origin, Vector3::zeros(), epsilon = 1e-9));

            let mut restored = origin;
            restored.transform_position(&view.inverted());
            prop_assert!(abs_diff_eq!(restored, source, epsilon = 1e-7));
        }
    }
}
