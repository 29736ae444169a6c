use std::ops::{Add, Div, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use super::Complex;

macro_rules! binop {
    ($($trait:ident $method:ident),+) => {
        $(
            impl $trait<Complex> for Complex {
                type Output = Complex;

                #[inline]
                fn $method(self, rhs: Complex) -> Complex {
                    Complex::$method(self, rhs)
                }
            }

            impl $trait<f64> for Complex {
                type Output = Complex;

                #[inline]
                fn $method(self, rhs: f64) -> Complex {
                    Complex::$method(self, rhs)
                }
            }
        )+
    };
}

binop!(Add add, Sub sub, Mul mul, Div div);

impl Neg for Complex {
    type Output = Complex;

    #[inline]
    fn neg(self) -> Complex {
        Complex::new(-self.re, -self.im)
    }
}

impl AbsDiffEq for Complex {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.re.abs_diff_eq(&other.re, epsilon) && self.im.abs_diff_eq(&other.im, epsilon)
    }
}

impl RelativeEq for Complex {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.re.relative_eq(&other.re, epsilon, max_relative)
            && self.im.relative_eq(&other.im, epsilon, max_relative)
    }
}

impl UlpsEq for Complex {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.re.ulps_eq(&other.re, epsilon, max_ulps)
            && self.im.ulps_eq(&other.im, epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_ne, assert_relative_eq, assert_ulps_eq};

    use crate::Complex;

    #[test]
    fn operators() {
        let a = Complex::new(3.0, 4.0);
        let b = Complex::new(1.0, 2.0);
        assert_eq!(a + b, Complex::new(4.0, 6.0));
        assert_eq!(a - b, Complex::new(2.0, 2.0));
        assert_eq!(a * b, Complex::new(-5.0, 10.0));
        assert_relative_eq!(a / b, Complex::new(2.2, -0.4), epsilon = 1e-12);
        assert_eq!(-a, Complex::new(-3.0, -4.0));

        assert_eq!(a + 1.0, Complex::new(4.0, 4.0));
        assert_eq!(a - 1.0, Complex::new(2.0, 4.0));
        assert_eq!(a * 2.0, Complex::new(6.0, 8.0));
        assert_eq!(a / 2.0, Complex::new(1.5, 2.0));
        assert_eq!(a / 0.0, Complex::new(f64::INFINITY, f64::NEG_INFINITY));
    }

    #[test]
    fn approx() {
        let a = Complex::new(0.1, 0.2);
        assert_ulps_eq!(a, a);
        assert_abs_diff_ne!(a, a.conjugate());
    }
}
