//! Scalar helpers, and the degree-based rotation helper shared by [`Vector`] and [`Matrix`]
//! rotations.
//!
//! [`Vector`]: crate::Vector
//! [`Matrix`]: crate::Matrix

/// Converts an angle from degrees to radians.
#[inline]
pub fn radians(degrees: f64) -> f64 {
    degrees * (std::f64::consts::PI / 180.0)
}

/// Returns `n` modulo `m`, with the sign of `m`.
///
/// Unlike the `%` operator, a negative `n` wraps around to a non-negative result for positive `m`.
///
/// # Examples
///
/// ```
/// # use dcl_linalg::trig::modulo;
/// assert_eq!(modulo(7.0, 3.0), 1.0);
/// assert_eq!(modulo(-1.0, 3.0), 2.0);
/// assert_eq!(modulo(-90.0, 360.0), 270.0);
/// ```
#[inline]
pub fn modulo(n: f64, m: f64) -> f64 {
    n - (n / m).floor() * m
}

/// Limits `n` to `min..=max`.
///
/// Unlike [`f64::clamp`], this does not panic if `min > max`; `max` wins.
#[inline]
pub fn clamp(n: f64, min: f64, max: f64) -> f64 {
    n.max(min).min(max)
}

/// Linearly interpolates between `a` (at `t = 0`) and `b` (at `t = 1`).
///
/// `t` is not clamped, so values outside `0..=1` extrapolate.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// The cosine and sine of an angle, computed once and reused for rotations in a plane.
///
/// # Examples
///
/// ```
/// # use dcl_linalg::trig::Trig;
/// let t = Trig::from_degrees(90.0);
/// let (a, b) = t.transform(1.0, 0.0);
/// assert!(a.abs() < 1e-12);
/// assert!((b - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trig {
    /// The angle in radians.
    pub radians: f64,
    pub cos: f64,
    pub sin: f64,
}

impl Trig {
    /// Computes the cosine and sine of `degrees`.
    pub fn from_degrees(degrees: f64) -> Self {
        let radians = radians(degrees);
        Self {
            radians,
            cos: radians.cos(),
            sin: radians.sin(),
        }
    }

    /// Rotates the 2D point `(a, b)` counterclockwise by the angle.
    ///
    /// Returns `(a·cos − b·sin, a·sin + b·cos)`.
    #[inline]
    pub fn transform(&self, a: f64, b: f64) -> (f64, f64) {
        (a * self.cos - b * self.sin, a * self.sin + b * self.cos)
    }
}
