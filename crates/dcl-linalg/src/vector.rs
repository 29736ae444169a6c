use std::fmt;

use crate::{
    trig::{self, Trig},
    Matrix,
};

mod operand;
mod ops;
mod swizzle;

pub use operand::Operand;

/// A homogeneous 4-component vector with `f64` elements.
///
/// The `w` component distinguishes points (`w = 1`) from directions (`w = 0`), and carries the
/// perspective divisor after a projective [`Vector::transform_by`].
///
/// # Construction
///
/// - [`Vector::new`] and the freestanding [`vec4`] take all four components.
/// - [`Vector::point`] and [`vec3`] create a point with `w = 1`, [`Vector::direction`] creates a
///   direction with `w = 0`.
/// - [`vec2`] creates the point `(x, y, 0, 1)`.
/// - The [`Default`] vector is the origin point `(0, 0, 0, 1)`, matching a constructor called
///   without components. [`Vector::ZERO`] is all-zero, including `w`.
/// - Arrays of 2, 3 or 4 elements convert via [`From`], filling in the same defaults.
///
/// # Arithmetic
///
/// [`Vector::add`], [`Vector::sub`], [`Vector::mul`] and [`Vector::div`] accept either another
/// vector or up to 4 scalars (see [`Operand`]). The usual operators are implemented too: `+`, `-`
/// and unary `-` work component-wise on vectors, while `* f64` and `/ f64` scale all 4 components
/// uniformly.
///
/// Every operation returns a new vector.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Vector {
    /// The all-zero vector, `(0, 0, 0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    /// The origin point, `(0, 0, 0, 1)`.
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// The unit direction along X.
    pub const X: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    /// The unit direction along Y.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    /// The unit direction along Z.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);

    /// Creates a vector from all four of its components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a point (`w = 1`).
    #[inline]
    pub const fn point(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 1.0)
    }

    /// Creates a direction (`w = 0`).
    #[inline]
    pub const fn direction(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 0.0)
    }

    /// Returns a copy of `self` with `w` replaced.
    #[inline]
    pub const fn with_w(self, w: f64) -> Self {
        Self::new(self.x, self.y, self.z, w)
    }

    /// Returns the components as an `[x, y, z, w]` array.
    #[inline]
    pub const fn to_array(self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Applies `f` to each of the four components.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dcl_linalg::*;
    /// let v = vec4(1.0, -2.0, 3.0, -4.0).map(f64::abs);
    /// assert_eq!(v, vec4(1.0, 2.0, 3.0, 4.0));
    /// ```
    pub fn map(self, mut f: impl FnMut(f64) -> f64) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z), f(self.w))
    }

    /// Combines the components of `self` and `other` pairwise using `f`.
    pub fn zip_with(self, other: Self, mut f: impl FnMut(f64, f64) -> f64) -> Self {
        Self::new(
            f(self.x, other.x),
            f(self.y, other.y),
            f(self.z, other.z),
            f(self.w, other.w),
        )
    }

    /// Component-wise addition.
    ///
    /// `other` may be a [`Vector`] or up to four scalars; missing scalars are `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dcl_linalg::*;
    /// let v = vec3(1.0, 2.0, 3.0);
    /// assert_eq!(v.add(vec3(4.0, 5.0, 6.0)), vec4(5.0, 7.0, 9.0, 2.0));
    /// assert_eq!(v.add((10.0, 20.0)), vec4(11.0, 22.0, 3.0, 1.0));
    /// ```
    pub fn add(self, other: impl Into<Operand>) -> Self {
        let [x, y, z, w] = other.into().resolve([0.0; 4]);
        Self::new(self.x + x, self.y + y, self.z + z, self.w + w)
    }

    /// Component-wise subtraction.
    ///
    /// `other` may be a [`Vector`] or up to four scalars; missing scalars are `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dcl_linalg::*;
    /// let v = vec3(5.0, 7.0, 9.0);
    /// assert_eq!(v.sub(vec3(1.0, 2.0, 3.0)), vec4(4.0, 5.0, 6.0, 0.0));
    /// assert_eq!(v.sub(1.0), vec4(4.0, 7.0, 9.0, 1.0));
    /// ```
    pub fn sub(self, other: impl Into<Operand>) -> Self {
        let [x, y, z, w] = other.into().resolve([0.0; 4]);
        Self::new(self.x - x, self.y - y, self.z - z, self.w - w)
    }

    /// Component-wise multiplication.
    ///
    /// `other` may be a [`Vector`] or up to four scalars. Missing `x`, `y` and `z` multipliers are
    /// `0`, a missing `w` multiplier is `1` so that points stay points. Use [`Vector::scale`] to
    /// multiply every component by the same factor.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dcl_linalg::*;
    /// let v = vec3(2.0, 3.0, 4.0);
    /// assert_eq!(v.mul((2.0, 2.0, 2.0)), vec4(4.0, 6.0, 8.0, 1.0));
    /// assert_eq!(v.mul(2.0), vec4(4.0, 0.0, 0.0, 1.0));
    /// ```
    pub fn mul(self, other: impl Into<Operand>) -> Self {
        let [x, y, z, w] = other.into().resolve([0.0, 0.0, 0.0, 1.0]);
        Self::new(self.x * x, self.y * y, self.z * z, self.w * w)
    }

    /// Component-wise division.
    ///
    /// `other` may be a [`Vector`] or up to four scalars; missing divisors are `1`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dcl_linalg::*;
    /// let v = vec4(8.0, 6.0, 4.0, 2.0);
    /// assert_eq!(v.div((2.0, 3.0)), vec4(4.0, 2.0, 4.0, 2.0));
    /// assert_eq!(v.div(Vector::splat(2.0)), vec4(4.0, 3.0, 2.0, 1.0));
    /// ```
    pub fn div(self, other: impl Into<Operand>) -> Self {
        let [x, y, z, w] = other.into().resolve([1.0; 4]);
        Self::new(self.x / x, self.y / y, self.z / z, self.w / w)
    }

    /// Creates a vector with every component set to `value`.
    #[inline]
    pub const fn splat(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Multiplies all four components by `n`.
    #[inline]
    pub fn scale(self, n: f64) -> Self {
        self.map(|c| c * n)
    }

    /// Computes the dot product of the `x`, `y` and `z` components, ignoring `w`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dcl_linalg::*;
    /// assert_eq!(vec3(1.0, 2.0, 3.0).dot(vec3(4.0, 5.0, 6.0)), 32.0);
    /// ```
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the right-handed cross product of the `x`, `y` and `z` components.
    ///
    /// The `w` of both inputs is ignored and the result is a direction (`w = 0`).
    ///
    /// # Examples
    ///
    /// ```
    /// # use dcl_linalg::*;
    /// assert_eq!(Vector::X.cross(Vector::Y), Vector::Z);
    /// assert_eq!(Vector::Y.cross(Vector::X), -Vector::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self {
        #[rustfmt::skip]
        let cross = Self::direction(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        );
        cross
    }

    /// Returns the squared Euclidean length over all four components.
    #[inline]
    pub fn magnitude_squared(self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Returns the Euclidean length over all four components.
    ///
    /// `w` takes part in the length. To measure the 3D length of a point, turn it into a direction
    /// with [`Vector::with_w`] first.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dcl_linalg::*;
    /// assert_eq!(Vector::direction(3.0, 4.0, 0.0).magnitude(), 5.0);
    /// assert_eq!(Vector::point(3.0, 4.0, 0.0).magnitude(), 26f64.sqrt());
    /// ```
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Divides all four components by [`Vector::magnitude`].
    ///
    /// The zero vector normalizes to all-`NaN`.
    pub fn normalize(self) -> Self {
        self / self.magnitude()
    }

    /// Returns the distance between `self` and `other`, over all four components.
    pub fn distance(self, other: Self) -> f64 {
        (self - other).magnitude()
    }

    /// Returns the normalized cross product of `self` and `other`.
    pub fn normal(self, other: Self) -> Self {
        self.cross(other).normalize()
    }

    /// Returns whether `x`, `y` and `z` of both vectors are each within `threshold` of each other.
    pub fn collides_with(self, other: Self, threshold: f64) -> bool {
        (self.x - other.x).abs() <= threshold
            && (self.y - other.y).abs() <= threshold
            && (self.z - other.z).abs() <= threshold
    }

    /// Rotates `self` around the X axis by `degrees`, returning a direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dcl_linalg::*;
    /// let v = Vector::Y.rotate_x(90.0);
    /// assert!(v.collides_with(Vector::Z, 1e-12));
    /// ```
    pub fn rotate_x(self, degrees: f64) -> Self {
        let (y, z) = Trig::from_degrees(degrees).transform(self.y, self.z);
        Self::direction(self.x, y, z)
    }

    /// Rotates `self` around the Y axis by `degrees`, returning a direction.
    ///
    /// The rotation turns `X` towards `Z`.
    pub fn rotate_y(self, degrees: f64) -> Self {
        let (x, z) = Trig::from_degrees(degrees).transform(self.x, self.z);
        Self::direction(x, self.y, z)
    }

    /// Rotates `self` around the Z axis by `degrees`, returning a direction.
    ///
    /// The rotation turns `X` towards `Y`.
    pub fn rotate_z(self, degrees: f64) -> Self {
        let (x, y) = Trig::from_degrees(degrees).transform(self.x, self.y);
        Self::direction(x, y, self.z)
    }

    /// Projects `self` onto a `width` x `height` screen with a simple perspective divide.
    ///
    /// Computes `factor = fov / (distance + z)` and returns
    /// `(x * factor + width / 2, y * factor + height / 2, z, 0)`. If `distance + z` is zero, the
    /// result contains infinities or `NaN`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dcl_linalg::*;
    /// let p = vec3(1.0, 2.0, 0.0).project(100.0, 50.0, 10.0, 5.0);
    /// assert_eq!(p, vec4(52.0, 29.0, 0.0, 0.0));
    /// ```
    pub fn project(self, width: f64, height: f64, fov: f64, distance: f64) -> Self {
        let factor = fov / (distance + self.z);
        Self::new(
            self.x * factor + width / 2.0,
            self.y * factor + height / 2.0,
            self.z,
            0.0,
        )
    }

    /// Reflects `self` off a surface with the given `normal`.
    ///
    /// `normal` does not need to be normalized, but must not be zero. Computes
    /// `d - 2 (n̂ · d) n̂`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dcl_linalg::*;
    /// let r = Vector::direction(1.0, -1.0, 0.0).reflect(Vector::direction(0.0, 5.0, 0.0));
    /// assert_eq!(r, Vector::direction(1.0, 1.0, 0.0));
    /// ```
    pub fn reflect(self, normal: Self) -> Self {
        let n = normal.normalize();
        self.sub(n.scale(2.0 * n.dot(self)))
    }

    /// Multiplies `self` as a row vector with `matrix` (`v · M`).
    ///
    /// If the resulting `w` is non-zero, `x`, `y` and `z` are divided by it (the perspective
    /// divide). `w` itself is returned as computed, not reset to 1.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dcl_linalg::*;
    /// let moved = vec3(1.0, 2.0, 3.0).transform_by(&Matrix::translation(10.0, 0.0, 0.0));
    /// assert_eq!(moved, vec4(11.0, 2.0, 3.0, 1.0));
    ///
    /// // Directions are not affected by translation.
    /// let dir = Vector::X.transform_by(&Matrix::translation(10.0, 0.0, 0.0));
    /// assert_eq!(dir, Vector::X);
    /// ```
    pub fn transform_by(self, matrix: &Matrix) -> Self {
        let m = matrix.as_rows();
        let column = |c: usize| {
            self.x * m[0][c] + self.y * m[1][c] + self.z * m[2][c] + self.w * m[3][c]
        };
        let (mut x, mut y, mut z, w) = (column(0), column(1), column(2), column(3));
        if w != 0.0 {
            x /= w;
            y /= w;
            z /= w;
        }
        Self::new(x, y, z, w)
    }

    /// Component-wise minimum.
    pub fn min(self, other: Self) -> Self {
        self.zip_with(other, f64::min)
    }

    /// Component-wise maximum.
    pub fn max(self, other: Self) -> Self {
        self.zip_with(other, f64::max)
    }

    /// Component-wise absolute value.
    pub fn abs(self) -> Self {
        self.map(f64::abs)
    }

    pub fn floor(self) -> Self {
        self.map(f64::floor)
    }

    pub fn ceil(self) -> Self {
        self.map(f64::ceil)
    }

    /// Rounds each component to the nearest integer, with halves rounded away from zero.
    pub fn round(self) -> Self {
        self.map(f64::round)
    }

    /// Component-wise fractional part, `v - floor(v)`.
    ///
    /// Unlike [`f64::fract`], the result is never negative.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dcl_linalg::*;
    /// assert_eq!(vec4(1.25, -1.25, 3.0, 0.5).fract(), vec4(0.25, 0.75, 0.0, 0.5));
    /// ```
    pub fn fract(self) -> Self {
        self.map(|c| c - c.floor())
    }

    /// Component-wise cosine (in radians).
    pub fn cos(self) -> Self {
        self.map(f64::cos)
    }

    /// Component-wise sine (in radians).
    pub fn sin(self) -> Self {
        self.map(f64::sin)
    }

    /// Linearly interpolates between `self` (at `t = 0`) and `other` (at `t = 1`).
    ///
    /// # Examples
    ///
    /// ```
    /// # use dcl_linalg::*;
    /// let a = vec4(0.0, 10.0, -2.0, 1.0);
    /// let b = vec4(4.0, 20.0, 2.0, 1.0);
    /// assert_eq!(a.mix(b, 0.25), vec4(1.0, 12.5, -1.0, 1.0));
    /// ```
    pub fn mix(self, other: Self, t: f64) -> Self {
        self.zip_with(other, |a, b| trig::lerp(a, b, t))
    }
}

impl Default for Vector {
    #[inline]
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl From<[f64; 4]> for Vector {
    #[inline]
    fn from([x, y, z, w]: [f64; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<[f64; 3]> for Vector {
    #[inline]
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::point(x, y, z)
    }
}

impl From<[f64; 2]> for Vector {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Self::point(x, y, 0.0)
    }
}

impl From<Vector> for [f64; 4] {
    #[inline]
    fn from(v: Vector) -> Self {
        v.to_array()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

/// Constructs the point `(x, y, 0, 1)`.
#[inline]
pub const fn vec2(x: f64, y: f64) -> Vector {
    Vector::point(x, y, 0.0)
}

/// Constructs the point `(x, y, z, 1)`.
#[inline]
pub const fn vec3(x: f64, y: f64, z: f64) -> Vector {
    Vector::point(x, y, z)
}

/// Constructs a [`Vector`] from all four of its components.
#[inline]
pub const fn vec4(x: f64, y: f64, z: f64, w: f64) -> Vector {
    Vector::new(x, y, z, w)
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(Vector::default(), vec4(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Vector::from([3.0, 4.0]), vec4(3.0, 4.0, 0.0, 1.0));
        assert_eq!(Vector::from([1.0, 2.0, 3.0]), vec4(1.0, 2.0, 3.0, 1.0));
        assert_eq!(<[f64; 4]>::from(vec3(1.0, 2.0, 3.0)), [1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn fmt() {
        assert_eq!(vec3(1.0, 2.5, -3.0).to_string(), "(1, 2.5, -3, 1)");
        assert_eq!(
            format!("{:?}", Vector::X),
            "Vector { x: 1.0, y: 0.0, z: 0.0, w: 0.0 }"
        );
    }

    #[test]
    fn add_sub() {
        let v = vec4(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.add(Vector::ZERO), v);
        assert_eq!(v.sub(Vector::ZERO), v);
        assert_eq!(v.add(()), v);
        assert_eq!(v.add((1.0, 1.0, 1.0, 1.0)), vec4(2.0, 3.0, 4.0, 5.0));
        assert_eq!(v.sub((1.0, 1.0, 1.0)), vec4(0.0, 1.0, 2.0, 4.0));
        assert_eq!(vec3(5.0, 7.0, 9.0).sub(vec3(1.0, 2.0, 3.0)).w, 0.0);
    }

    #[test]
    fn mul_div() {
        let v = vec4(2.0, 3.0, 4.0, 5.0);
        assert_eq!(v.mul(v), vec4(4.0, 9.0, 16.0, 25.0));
        assert_eq!(v.mul((1.0, 2.0, 3.0)), vec4(2.0, 6.0, 12.0, 5.0));
        assert_eq!(v.mul((1.0, 2.0, 3.0, 0.0)), vec4(2.0, 6.0, 12.0, 0.0));
        assert_eq!(v.div(v), Vector::splat(1.0));
        assert_eq!(v.div(()), v);
        assert_eq!(v.div((2.0, 3.0, 4.0)), vec4(1.0, 1.0, 1.0, 5.0));
        assert_eq!(v.scale(2.0), vec4(4.0, 6.0, 8.0, 10.0));
    }

    #[test]
    fn dot_cross() {
        let a = vec3(1.0, 2.0, 3.0);
        let b = vec3(4.0, 5.0, 6.0);
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(a.dot(b), b.dot(a));
        assert_eq!(
            vec3(1.0, 0.0, 0.0).cross(vec3(0.0, 1.0, 0.0)),
            vec4(0.0, 0.0, 1.0, 0.0)
        );
        assert_eq!(a.cross(a), Vector::ZERO);
        assert_eq!(a.cross(b), -b.cross(a));
    }

    #[test]
    fn magnitude() {
        assert_eq!(Vector::direction(3.0, 4.0, 0.0).magnitude(), 5.0);
        assert_eq!(vec4(1.0, 1.0, 1.0, 1.0).magnitude(), 2.0);
        assert_eq!(Vector::ZERO.magnitude(), 0.0);
        assert_eq!(vec4(1.0, 2.0, 2.0, 4.0).magnitude_squared(), 25.0);
    }

    #[test]
    fn normalize() {
        let n = Vector::direction(3.0, 4.0, 0.0).normalize();
        assert_relative_eq!(n.magnitude(), 1.0);
        assert_relative_eq!(n, Vector::direction(0.6, 0.8, 0.0));

        assert!(Vector::ZERO.normalize().x.is_nan());
    }

    #[test]
    fn distance_and_normal() {
        assert_eq!(vec3(0.0, 0.0, 0.0).distance(vec3(3.0, 4.0, 0.0)), 5.0);
        assert_eq!(
            Vector::direction(2.0, 0.0, 0.0).normal(Vector::direction(0.0, 3.0, 0.0)),
            Vector::Z
        );
    }

    #[test]
    fn collides() {
        let a = vec3(1.0, 1.0, 1.0);
        assert!(a.collides_with(vec4(1.5, 0.5, 1.0, 100.0), 0.5));
        assert!(!a.collides_with(vec3(1.0, 1.0, 1.6), 0.5));
    }

    #[test]
    fn rotate() {
        let v = vec3(1.0, 0.0, 0.0).rotate_z(90.0);
        assert_abs_diff_eq!(v, Vector::Y, epsilon = 1e-12);
        assert_eq!(v.w, 0.0);

        assert_abs_diff_eq!(Vector::Y.rotate_x(90.0), Vector::Z, epsilon = 1e-12);
        assert_abs_diff_eq!(Vector::X.rotate_y(90.0), Vector::Z, epsilon = 1e-12);

        // The axis of rotation is unaffected.
        let v = vec3(1.0, 2.0, 3.0);
        assert_eq!(v.rotate_x(33.0).x, 1.0);
        assert_eq!(v.rotate_y(33.0).y, 2.0);
        assert_eq!(v.rotate_z(33.0).z, 3.0);

        // Length in the rotation plane is preserved.
        let r = Vector::direction(3.0, 4.0, 0.0).rotate_z(-71.0);
        assert_relative_eq!(r.magnitude(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn project() {
        let p = vec3(2.0, -2.0, 1.0).project(200.0, 100.0, 90.0, 2.0);
        assert_eq!(p, vec4(160.0, -10.0, 1.0, 0.0));

        let degenerate = vec3(1.0, 1.0, -2.0).project(200.0, 100.0, 90.0, 2.0);
        assert!(degenerate.x.is_infinite());
        assert_eq!(degenerate.w, 0.0);
    }

    #[test]
    fn reflect() {
        let d = Vector::direction(1.0, -2.0, 0.0);
        assert_eq!(d.reflect(Vector::Y), Vector::direction(1.0, 2.0, 0.0));
        assert_eq!(d.reflect(Vector::Y.scale(7.0)), Vector::direction(1.0, 2.0, 0.0));

        let r = Vector::direction(1.0, 0.0, 0.0).reflect(Vector::direction(-1.0, 1.0, 0.0));
        assert_abs_diff_eq!(r, Vector::Y, epsilon = 1e-12);
    }

    #[test]
    fn transform_by() {
        let v = vec3(1.0, 2.0, 3.0);
        assert_eq!(v.transform_by(&Matrix::IDENTITY), v);

        let m = Matrix::from_cells([
            [2.0, 0.0, 0.0, 0.0],
            [0.0, 2.0, 0.0, 0.0],
            [0.0, 0.0, 2.0, 0.0],
            [0.0, 0.0, 0.0, 2.0],
        ]);
        // The perspective divide undoes the uniform scale, but `w` is kept.
        assert_eq!(v.transform_by(&m), vec4(1.0, 2.0, 3.0, 2.0));

        // No divide when the result has `w = 0`.
        assert_eq!(Vector::direction(1.0, 2.0, 3.0).transform_by(&m), vec4(2.0, 4.0, 6.0, 0.0));
    }

    #[test]
    fn component_wise() {
        let a = vec4(-1.5, 2.5, 0.2, 1.0);
        let b = vec4(1.0, -3.0, 0.2, 0.0);
        assert_eq!(a.min(b), vec4(-1.5, -3.0, 0.2, 0.0));
        assert_eq!(a.max(b), vec4(1.0, 2.5, 0.2, 1.0));
        assert_eq!(a.abs(), vec4(1.5, 2.5, 0.2, 1.0));
        assert_eq!(a.floor(), vec4(-2.0, 2.0, 0.0, 1.0));
        assert_eq!(a.ceil(), vec4(-1.0, 3.0, 1.0, 1.0));
        assert_eq!(a.round(), vec4(-2.0, 3.0, 0.0, 1.0));
        assert_eq!(Vector::ZERO.cos(), Vector::splat(1.0));
        assert_eq!(Vector::ZERO.sin(), Vector::ZERO);
        assert_eq!(a.mix(b, 0.0), a);
        assert_eq!(a.mix(b, 1.0), b);
    }
}
