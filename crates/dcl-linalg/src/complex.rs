use std::fmt;

mod ops;

/// A complex number with `f64` parts.
///
/// Like [`Vector`][crate::Vector], a [`Complex`] is a plain `Copy` value and every operation
/// returns a new number. [`Complex::add`], [`Complex::sub`], [`Complex::mul`] and [`Complex::div`]
/// accept either another [`Complex`] or a real scalar (see [`ComplexOperand`]). The operators `+`,
/// `-`, `*` and `/` are implemented for both as well.
///
/// # Examples
///
/// ```
/// # use dcl_linalg::*;
/// let c = Complex::new(3.0, 4.0);
/// assert_eq!(c.magnitude(), 5.0);
/// assert_eq!(c.mul(Complex::new(1.0, 2.0)), Complex::new(-5.0, 10.0));
/// assert_eq!(c.add(1.0), Complex::new(4.0, 4.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Complex {
    /// The real part.
    pub re: f64,
    /// The imaginary part.
    pub im: f64,
}

/// The right-hand side of the arithmetic methods on [`Complex`]: a complex number or a real scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ComplexOperand {
    Complex(Complex),
    Scalar(f64),
}

impl From<Complex> for ComplexOperand {
    #[inline]
    fn from(c: Complex) -> Self {
        ComplexOperand::Complex(c)
    }
}

impl From<f64> for ComplexOperand {
    #[inline]
    fn from(s: f64) -> Self {
        ComplexOperand::Scalar(s)
    }
}

impl Complex {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 0.0);
    /// The imaginary unit.
    pub const I: Self = Self::new(0.0, 1.0);

    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Creates a complex number with no imaginary part.
    #[inline]
    pub const fn real(re: f64) -> Self {
        Self::new(re, 0.0)
    }

    /// Creates a complex number from its magnitude and argument (in radians).
    pub fn from_polar(magnitude: f64, argument: f64) -> Self {
        Self::new(magnitude * argument.cos(), magnitude * argument.sin())
    }

    /// Adds a complex number or a real scalar.
    pub fn add(self, other: impl Into<ComplexOperand>) -> Self {
        match other.into() {
            ComplexOperand::Complex(c) => Self::new(self.re + c.re, self.im + c.im),
            ComplexOperand::Scalar(s) => Self::new(self.re + s, self.im),
        }
    }

    /// Subtracts a complex number or a real scalar.
    pub fn sub(self, other: impl Into<ComplexOperand>) -> Self {
        match other.into() {
            ComplexOperand::Complex(c) => Self::new(self.re - c.re, self.im - c.im),
            ComplexOperand::Scalar(s) => Self::new(self.re - s, self.im),
        }
    }

    /// Multiplies by a complex number, or scales both parts by a real scalar.
    pub fn mul(self, other: impl Into<ComplexOperand>) -> Self {
        match other.into() {
            ComplexOperand::Complex(c) => Self::new(
                self.re * c.re - self.im * c.im,
                self.re * c.im + self.im * c.re,
            ),
            ComplexOperand::Scalar(s) => Self::new(self.re * s, self.im * s),
        }
    }

    /// Divides by a complex number or a real scalar.
    ///
    /// Dividing by zero (a scalar `0` or [`Complex::ZERO`]) yields `(inf, -inf)`, regardless of
    /// `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dcl_linalg::*;
    /// let q = Complex::new(3.0, 4.0).div(Complex::new(1.0, 2.0));
    /// assert!((q.re - 2.2).abs() < 1e-12);
    /// assert!((q.im + 0.4).abs() < 1e-12);
    ///
    /// assert_eq!(Complex::ONE.div(0.0), Complex::new(f64::INFINITY, f64::NEG_INFINITY));
    /// ```
    pub fn div(self, other: impl Into<ComplexOperand>) -> Self {
        match other.into() {
            ComplexOperand::Scalar(s) if s == 0.0 => Self::new(f64::INFINITY, f64::NEG_INFINITY),
            ComplexOperand::Scalar(s) => Self::new(self.re / s, self.im / s),
            ComplexOperand::Complex(c) => {
                let con = c.conjugate();
                self.mul(con).div(c.mul(con).re)
            }
        }
    }

    /// Returns the complex conjugate, `re - im·i`.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Returns the absolute value (modulus), `sqrt(re² + im²)`.
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Returns the argument (phase angle) in radians, in `-π..=π`.
    #[inline]
    pub fn argument(self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Raises `self` to a real power, in polar form.
    ///
    /// The result uses the principal argument of `self`, so `pow(0.5)` is the principal square
    /// root.
    pub fn pow(self, e: f64) -> Self {
        Self::from_polar(self.magnitude().powf(e), self.argument() * e)
    }

    /// Returns the principal square root.
    pub fn sqrt(self) -> Self {
        self.pow(0.5)
    }

    /// Returns `e^self`.
    pub fn exp(self) -> Self {
        Self::from_polar(self.re.exp(), self.im)
    }
}

impl From<f64> for Complex {
    #[inline]
    fn from(re: f64) -> Self {
        Self::real(re)
    }
}

impl From<[f64; 2]> for Complex {
    #[inline]
    fn from([re, im]: [f64; 2]) -> Self {
        Self::new(re, im)
    }
}

/// Prints `re±imi`, for example `3-4i`.
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:+}i", self.re, self.im)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    #[test]
    fn construction() {
        assert_eq!(Complex::real(5.0), Complex::new(5.0, 0.0));
        assert_eq!(Complex::from(5.0), Complex::real(5.0));
        assert_eq!(Complex::from([1.0, 2.0]), Complex::new(1.0, 2.0));
        assert_abs_diff_eq!(
            Complex::from_polar(2.0, FRAC_PI_2),
            Complex::new(0.0, 2.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn fmt() {
        assert_eq!(Complex::new(3.0, 4.0).to_string(), "3+4i");
        assert_eq!(Complex::new(3.0, -4.5).to_string(), "3-4.5i");
    }

    #[test]
    fn add_sub() {
        let a = Complex::new(3.0, 4.0);
        assert_eq!(a.add(Complex::new(1.0, 2.0)), Complex::new(4.0, 6.0));
        assert_eq!(Complex::new(5.0, 7.0).sub(Complex::new(2.0, 3.0)), Complex::new(3.0, 4.0));
        assert_eq!(a.add(2.0), Complex::new(5.0, 4.0));
        assert_eq!(a.sub(2.0), Complex::new(1.0, 4.0));
        assert_eq!(a.add(Complex::ZERO), a);
    }

    #[test]
    fn mul() {
        assert_eq!(
            Complex::new(3.0, 4.0).mul(Complex::new(1.0, 2.0)),
            Complex::new(-5.0, 10.0)
        );
        assert_eq!(Complex::new(3.0, 4.0).mul(2.0), Complex::new(6.0, 8.0));
        assert_eq!(Complex::I.mul(Complex::I), Complex::new(-1.0, 0.0));
    }

    #[test]
    fn div() {
        let q = Complex::new(3.0, 4.0).div(Complex::new(1.0, 2.0));
        assert_relative_eq!(q, Complex::new(2.2, -0.4), epsilon = 1e-12);
        assert_eq!(Complex::new(3.0, 4.0).div(2.0), Complex::new(1.5, 2.0));

        let a = Complex::new(-1.5, 0.25);
        let b = Complex::new(0.5, -3.0);
        assert_relative_eq!(a.mul(b).div(b), a, epsilon = 1e-12);
    }

    #[test]
    fn div_by_zero() {
        let inf = Complex::new(f64::INFINITY, f64::NEG_INFINITY);
        assert_eq!(Complex::new(3.0, 4.0).div(0.0), inf);
        assert_eq!(Complex::new(3.0, 4.0).div(-0.0), inf);
        assert_eq!(Complex::ZERO.div(0.0), inf);
        assert_eq!(Complex::new(3.0, 4.0).div(Complex::ZERO), inf);
    }

    #[test]
    fn polar() {
        let c = Complex::new(3.0, 4.0);
        assert_eq!(c.magnitude(), 5.0);
        assert_eq!(c.conjugate(), Complex::new(3.0, -4.0));
        assert_eq!(c.conjugate().conjugate(), c);
        assert_relative_eq!(Complex::new(1.0, 1.0).argument(), FRAC_PI_4);
        assert_eq!(Complex::new(-1.0, 0.0).argument(), PI);
        assert_eq!(Complex::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn pow() {
        assert_abs_diff_eq!(Complex::real(2.0).pow(3.0), Complex::real(8.0), epsilon = 1e-12);
        assert_abs_diff_eq!(Complex::I.pow(2.0), Complex::real(-1.0), epsilon = 1e-12);
        assert_abs_diff_eq!(Complex::real(4.0).sqrt(), Complex::real(2.0), epsilon = 1e-12);
        assert_abs_diff_eq!(
            Complex::real(-4.0).sqrt(),
            Complex::new(0.0, 2.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn exp() {
        assert_abs_diff_eq!(Complex::new(0.0, PI).exp(), Complex::real(-1.0), epsilon = 1e-12);
        assert_relative_eq!(
            Complex::real(1.0).exp(),
            Complex::real(std::f64::consts::E),
            epsilon = 1e-12
        );
    }
}
