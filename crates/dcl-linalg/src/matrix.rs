use std::fmt;

use crate::{
    trig::{self, Trig},
    Axis, Error, Vector,
};

mod ops;

/// A 4x4 transform matrix with `f64` elements, stored row-major.
///
/// # Conventions
///
/// Vectors are treated as *row vectors* multiplied on the left: `v' = v · M` (see
/// [`Vector::transform_by`]). Under this convention, `a.multiply(b)` applies `a` first, then `b`:
/// for any vector `v`, `v.transform_by(&a.multiply(b)) == v.transform_by(&a).transform_by(&b)`.
///
/// The translation of an affine matrix lives in its last row. The last column produces the `w` of
/// a transformed vector, which is what makes [`Matrix::projection`] perform a perspective divide.
///
/// Rotation factories are laid out for row vectors too: [`Matrix::rotation_z`] puts `+sin` in cell
/// `[0][1]` and `-sin` in `[1][0]`, the transpose of the usual column-vector layout. Keep this in
/// mind when handing [`Matrix::as_flat`] to code that expects column vectors.
///
/// # Construction
///
/// - [`Matrix::IDENTITY`], [`Matrix::identity`] and the [`Default`] impl all yield the identity.
/// - [`Matrix::from_cells`] wraps a caller-supplied row-major grid.
/// - [`Matrix::scaling`], [`Matrix::translation`], [`Matrix::rotation_x`] (and `_y`, `_z`),
///   [`Matrix::projection`] and [`Matrix::look_at`] build the common transforms.
///
/// The builder methods [`Matrix::scale`], [`Matrix::rotate_axis`], [`Matrix::translate`],
/// [`Matrix::apply_projection`] and [`Matrix::apply_look_at`] append a transform after `self`:
///
/// ```
/// # use dcl_linalg::*;
/// let m = Matrix::identity()
///     .scale(2.0, 2.0, 2.0)
///     .translate(1.0, 0.0, 0.0);
///
/// // Scaled first, then translated.
/// assert_eq!(vec3(1.0, 1.0, 1.0).transform_by(&m), vec3(3.0, 2.0, 2.0));
/// ```
///
/// # Element Access
///
/// [`Matrix`] implements [`Index`] and [`IndexMut`] for `(row, column)` tuples. Whole rows are
/// available via [`Matrix::as_rows`] and [`Matrix::row`], columns via [`Matrix::column`], and the
/// 16 cells in row-major order via [`Matrix::as_flat`].
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(transparent)]
pub struct Matrix([[f64; 4]; 4]);

impl Matrix {
    /// The identity matrix.
    pub const IDENTITY: Self = Self([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([[0.0; 4]; 4]);

    /// Returns the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Creates a matrix from a row-major grid of cells.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dcl_linalg::*;
    /// let m = Matrix::from_cells([
    ///     [1.0, 2.0, 3.0, 4.0],
    ///     [5.0, 6.0, 7.0, 8.0],
    ///     [9.0, 10.0, 11.0, 12.0],
    ///     [13.0, 14.0, 15.0, 16.0],
    /// ]);
    /// assert_eq!(m[(1, 2)], 7.0);
    /// ```
    #[inline]
    pub const fn from_cells(cells: [[f64; 4]; 4]) -> Self {
        Self(cells)
    }

    /// Creates a matrix whose rows are the four components of the given vectors.
    pub fn from_rows(rows: [Vector; 4]) -> Self {
        Self(rows.map(Vector::to_array))
    }

    /// Creates a matrix by invoking a closure with the `(row, column)` of each cell.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dcl_linalg::*;
    /// let m = Matrix::from_fn(|row, col| if row == col { 1.0 } else { 0.0 });
    /// assert_eq!(m, Matrix::IDENTITY);
    /// ```
    pub fn from_fn(mut cb: impl FnMut(usize, usize) -> f64) -> Self {
        Self(std::array::from_fn(|row| {
            std::array::from_fn(|col| cb(row, col))
        }))
    }

    /// Returns a reference to the row-major grid of cells.
    #[inline]
    pub const fn as_rows(&self) -> &[[f64; 4]; 4] {
        &self.0
    }

    /// Returns the row-major grid of cells.
    #[inline]
    pub const fn into_rows(self) -> [[f64; 4]; 4] {
        self.0
    }

    /// Returns all 16 cells in row-major order, ready to hand to a renderer.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dcl_linalg::*;
    /// let m = Matrix::translation(1.0, 2.0, 3.0);
    /// let flat = m.as_flat();
    /// assert_eq!(&flat[12..], &[1.0, 2.0, 3.0, 1.0]);
    /// ```
    #[inline]
    pub fn as_flat(&self) -> &[f64; 16] {
        bytemuck::cast_ref(&self.0)
    }

    /// Returns row `index` as a [`Vector`].
    ///
    /// # Panics
    ///
    /// Panics if `index` is 4 or greater.
    #[inline]
    pub fn row(&self, index: usize) -> Vector {
        self.0[index].into()
    }

    /// Returns column `index` as a [`Vector`].
    ///
    /// # Panics
    ///
    /// Panics if `index` is 4 or greater.
    pub fn column(&self, index: usize) -> Vector {
        Vector::new(
            self.0[0][index],
            self.0[1][index],
            self.0[2][index],
            self.0[3][index],
        )
    }

    /// Computes the matrix product `self · other`.
    ///
    /// The result applies `self` first and `other` second to row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dcl_linalg::*;
    /// let there = Matrix::translation(5.0, 10.0, 15.0);
    /// let back = Matrix::translation(-5.0, -10.0, -15.0);
    /// assert_eq!(there.multiply(&back), Matrix::IDENTITY);
    /// ```
    pub fn multiply(&self, other: &Matrix) -> Self {
        let (a, b) = (&self.0, &other.0);
        Self::from_fn(|r, c| (0..4).fold(0.0, |acc, k| acc + a[r][k] * b[k][c]))
    }

    /// Swaps rows and columns.
    pub fn transpose(&self) -> Self {
        Self::from_fn(|r, c| self.0[c][r])
    }

    /// Creates a scaling matrix.
    pub fn scaling(sx: f64, sy: f64, sz: f64) -> Self {
        let mut m = Self::IDENTITY;
        m.0[0][0] = sx;
        m.0[1][1] = sy;
        m.0[2][2] = sz;
        m
    }

    /// Creates a translation matrix, moving points by `(x, y, z)`.
    pub fn translation(x: f64, y: f64, z: f64) -> Self {
        let mut m = Self::IDENTITY;
        m.0[3][0] = x;
        m.0[3][1] = y;
        m.0[3][2] = z;
        m
    }

    /// Creates a rotation of `degrees` around the X axis, turning Y towards Z.
    ///
    /// Transforming a vector with this matrix rotates it like [`Vector::rotate_x`].
    pub fn rotation_x(degrees: f64) -> Self {
        let Trig { cos, sin, .. } = Trig::from_degrees(degrees);
        let mut m = Self::IDENTITY;
        m.0[1][1] = cos;
        m.0[1][2] = sin;
        m.0[2][1] = -sin;
        m.0[2][2] = cos;
        m
    }

    /// Creates a rotation of `degrees` around the Y axis, turning X towards Z.
    ///
    /// Transforming a vector with this matrix rotates it like [`Vector::rotate_y`].
    pub fn rotation_y(degrees: f64) -> Self {
        let Trig { cos, sin, .. } = Trig::from_degrees(degrees);
        let mut m = Self::IDENTITY;
        m.0[0][0] = cos;
        m.0[0][2] = sin;
        m.0[2][0] = -sin;
        m.0[2][2] = cos;
        m
    }

    /// Creates a rotation of `degrees` around the Z axis, turning X towards Y.
    ///
    /// Transforming a vector with this matrix rotates it like [`Vector::rotate_z`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use dcl_linalg::*;
    /// let v = vec3(1.0, 0.0, 0.0).transform_by(&Matrix::rotation_z(90.0));
    /// assert!(v.collides_with(vec3(0.0, 1.0, 0.0), 1e-12));
    /// assert_eq!(v.w, 1.0);
    /// ```
    pub fn rotation_z(degrees: f64) -> Self {
        let Trig { cos, sin, .. } = Trig::from_degrees(degrees);
        let mut m = Self::IDENTITY;
        m.0[0][0] = cos;
        m.0[0][1] = sin;
        m.0[1][0] = -sin;
        m.0[1][1] = cos;
        m
    }

    /// Creates a rotation of `degrees` around `axis`.
    pub fn rotation(axis: Axis, degrees: f64) -> Self {
        match axis {
            Axis::X => Self::rotation_x(degrees),
            Axis::Y => Self::rotation_y(degrees),
            Axis::Z => Self::rotation_z(degrees),
        }
    }

    /// Creates a perspective projection matrix.
    ///
    /// `fov` is the field of view in degrees, `aspect` scales the X axis, and `z_near`/`z_far`
    /// are the distances of the clipping planes. The matrix copies the input `z` into the output
    /// `w`, so [`Vector::transform_by`] divides by the depth.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dcl_linalg::*;
    /// let m = Matrix::projection(90.0, 1.0, 0.1, 1000.0);
    /// assert_eq!(m[(2, 3)], 1.0);
    /// assert_eq!(m[(3, 3)], 0.0);
    /// ```
    pub fn projection(fov: f64, aspect: f64, z_near: f64, z_far: f64) -> Self {
        let f = 1.0 / trig::radians(fov / 2.0).tan();
        let depth = z_far - z_near;

        let mut m = Self::IDENTITY;
        m.0[0][0] = aspect * f;
        m.0[1][1] = f;
        m.0[2][2] = z_far / depth;
        m.0[3][2] = -z_far * z_near / depth;
        m.0[2][3] = 1.0;
        m.0[3][3] = 0.0;
        m
    }

    /// Creates a matrix that places an object at `eye`, oriented to face `target`.
    ///
    /// The rows of the result are the orthonormal basis `right`, `up`, `forward`, followed by
    /// `eye` as the translation:
    ///
    /// - `forward` is the normalized direction from `eye` to `target`,
    /// - `up` is the given `up` with its component along `forward` removed, normalized,
    /// - `right` is `forward × up`.
    ///
    /// Only the `x`, `y` and `z` of `up` are used. The view matrix of a camera is the inverse of
    /// this matrix, which [`Matrix::fast_inverse`] can compute.
    ///
    /// If `up` is parallel to `forward`, or `eye == target`, the result contains `NaN`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dcl_linalg::*;
    /// let m = Matrix::look_at(vec3(5.0, 10.0, 15.0), vec3(0.0, 0.0, 0.0), Vector::Y);
    /// assert_eq!(m.row(3), vec3(5.0, 10.0, 15.0));
    /// ```
    pub fn look_at(eye: Vector, target: Vector, up: Vector) -> Self {
        let forward = (target - eye).with_w(0.0).normalize();
        let up = up.with_w(0.0);
        let up = (up - forward.scale(up.dot(forward))).normalize();
        let right = forward.cross(up);

        let mut m = Self::IDENTITY;
        m.0[0] = [right.x, right.y, right.z, 0.0];
        m.0[1] = [up.x, up.y, up.z, 0.0];
        m.0[2] = [forward.x, forward.y, forward.z, 0.0];
        m.0[3] = [eye.x, eye.y, eye.z, 1.0];
        m
    }

    /// Inverts a rigid transform (rotation and translation only).
    ///
    /// The rotation block is transposed and the translation row becomes
    /// `(-right · pos, -up · pos, -forward · pos)`, where `right`, `up`, `forward` and `pos` are
    /// the rows of `self`.
    ///
    /// This is only the inverse if the upper-left 3x3 block of `self` is orthonormal. Matrices
    /// containing scale or shear yield a wrong result, without any error. Use
    /// [`Matrix::try_inverse`] for those.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dcl_linalg::*;
    /// let m = Matrix::rotation_y(30.0).translate(1.0, 2.0, 3.0);
    /// let p = vec3(4.0, 5.0, 6.0);
    /// let back = p.transform_by(&m).transform_by(&m.fast_inverse());
    /// assert!(back.collides_with(p, 1e-12));
    /// ```
    pub fn fast_inverse(&self) -> Self {
        let [right, up, forward, pos] = [0, 1, 2, 3].map(|i| self.row(i));

        Self([
            [right.x, up.x, forward.x, 0.0],
            [right.y, up.y, forward.y, 0.0],
            [right.z, up.z, forward.z, 0.0],
            [-right.dot(pos), -up.dot(pos), -forward.dot(pos), 1.0],
        ])
    }

    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> f64 {
        Minors::of(self).determinant()
    }

    /// Computes the general inverse of the matrix.
    ///
    /// Returns [`None`] if the matrix is singular (its [`determinant`] is zero).
    ///
    /// [`determinant`]: Self::determinant
    ///
    /// # Examples
    ///
    /// ```
    /// # use dcl_linalg::*;
    /// let m = Matrix::scaling(2.0, 4.0, 8.0);
    /// assert_eq!(m.try_inverse(), Some(Matrix::scaling(0.5, 0.25, 0.125)));
    /// assert_eq!(Matrix::ZERO.try_inverse(), None);
    /// ```
    pub fn try_inverse(&self) -> Option<Self> {
        let minors = Minors::of(self);
        let det = minors.determinant();
        if det == 0.0 {
            return None;
        }

        let Minors { s, c } = minors;
        let a = &self.0;
        let inv = 1.0 / det;

        #[rustfmt::skip]
        let cells = [
            [
                ( a[1][1] * c[5] - a[1][2] * c[4] + a[1][3] * c[3]) * inv,
                (-a[0][1] * c[5] + a[0][2] * c[4] - a[0][3] * c[3]) * inv,
                ( a[3][1] * s[5] - a[3][2] * s[4] + a[3][3] * s[3]) * inv,
                (-a[2][1] * s[5] + a[2][2] * s[4] - a[2][3] * s[3]) * inv,
            ],
            [
                (-a[1][0] * c[5] + a[1][2] * c[2] - a[1][3] * c[1]) * inv,
                ( a[0][0] * c[5] - a[0][2] * c[2] + a[0][3] * c[1]) * inv,
                (-a[3][0] * s[5] + a[3][2] * s[2] - a[3][3] * s[1]) * inv,
                ( a[2][0] * s[5] - a[2][2] * s[2] + a[2][3] * s[1]) * inv,
            ],
            [
                ( a[1][0] * c[4] - a[1][1] * c[2] + a[1][3] * c[0]) * inv,
                (-a[0][0] * c[4] + a[0][1] * c[2] - a[0][3] * c[0]) * inv,
                ( a[3][0] * s[4] - a[3][1] * s[2] + a[3][3] * s[0]) * inv,
                (-a[2][0] * s[4] + a[2][1] * s[2] - a[2][3] * s[0]) * inv,
            ],
            [
                (-a[1][0] * c[3] + a[1][1] * c[1] - a[1][2] * c[0]) * inv,
                ( a[0][0] * c[3] - a[0][1] * c[1] + a[0][2] * c[0]) * inv,
                (-a[3][0] * s[3] + a[3][1] * s[1] - a[3][2] * s[0]) * inv,
                ( a[2][0] * s[3] - a[2][1] * s[1] + a[2][2] * s[0]) * inv,
            ],
        ];
        Some(Self(cells))
    }

    /// Appends a scale by `(sx, sy, sz)` after `self`.
    pub fn scale(&self, sx: f64, sy: f64, sz: f64) -> Self {
        self.multiply(&Self::scaling(sx, sy, sz))
    }

    /// Appends a rotation of `degrees` around `axis` after `self`.
    pub fn rotate_axis(&self, axis: Axis, degrees: f64) -> Self {
        self.multiply(&Self::rotation(axis, degrees))
    }

    /// Appends a rotation around the axis called `axis` (`"x"`, `"y"` or `"z"`) after `self`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAxis`] if `axis` does not name an axis.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dcl_linalg::*;
    /// let m = Matrix::identity().rotate_named("z", 90.0)?;
    /// assert_eq!(m, Matrix::rotation_z(90.0));
    ///
    /// assert!(Matrix::identity().rotate_named("w", 90.0).is_err());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn rotate_named(&self, axis: &str, degrees: f64) -> Result<Self, Error> {
        Ok(self.rotate_axis(axis.parse()?, degrees))
    }

    /// Appends a translation by `(x, y, z)` after `self`.
    pub fn translate(&self, x: f64, y: f64, z: f64) -> Self {
        self.multiply(&Self::translation(x, y, z))
    }

    /// Appends a perspective projection (see [`Matrix::projection`]) after `self`.
    pub fn apply_projection(&self, fov: f64, aspect: f64, z_near: f64, z_far: f64) -> Self {
        self.multiply(&Self::projection(fov, aspect, z_near, z_far))
    }

    /// Appends a look-at transform (see [`Matrix::look_at`]) after `self`.
    pub fn apply_look_at(&self, eye: Vector, target: Vector, up: Vector) -> Self {
        self.multiply(&Self::look_at(eye, target, up))
    }
}

/// The 2x2 minors of the top two and bottom two rows, shared by the determinant and the inverse.
struct Minors {
    s: [f64; 6],
    c: [f64; 6],
}

impl Minors {
    fn of(m: &Matrix) -> Self {
        let a = &m.0;
        #[rustfmt::skip]
        let minors = Minors {
            s: [
                a[0][0] * a[1][1] - a[1][0] * a[0][1],
                a[0][0] * a[1][2] - a[1][0] * a[0][2],
                a[0][0] * a[1][3] - a[1][0] * a[0][3],
                a[0][1] * a[1][2] - a[1][1] * a[0][2],
                a[0][1] * a[1][3] - a[1][1] * a[0][3],
                a[0][2] * a[1][3] - a[1][2] * a[0][3],
            ],
            c: [
                a[2][0] * a[3][1] - a[3][0] * a[2][1],
                a[2][0] * a[3][2] - a[3][0] * a[2][2],
                a[2][0] * a[3][3] - a[3][0] * a[2][3],
                a[2][1] * a[3][2] - a[3][1] * a[2][2],
                a[2][1] * a[3][3] - a[3][1] * a[2][3],
                a[2][2] * a[3][3] - a[3][2] * a[2][3],
            ],
        };
        minors
    }

    fn determinant(&self) -> f64 {
        let Minors { s, c } = self;
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }
}

impl Default for Matrix {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[[f64; 4]; 4]> for Matrix {
    #[inline]
    fn from(cells: [[f64; 4]; 4]) -> Self {
        Self(cells)
    }
}

impl From<Matrix> for [[f64; 4]; 4] {
    #[inline]
    fn from(m: Matrix) -> Self {
        m.0
    }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

/// Prints one row per line.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.0.iter().enumerate() {
            if i != 0 {
                writeln!(f)?;
            }
            write!(f, "[{}, {}, {}, {}]", row[0], row[1], row[2], row[3])?;
        }
        Ok(())
    }
}
