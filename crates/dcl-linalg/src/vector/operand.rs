use super::Vector;

/// The right-hand side of [`Vector::add`], [`Vector::sub`], [`Vector::mul`] and [`Vector::div`].
///
/// An operand is either a whole [`Vector`], or up to four scalars given as an `f64`, a tuple of
/// up to four `f64`s, or `()`. Scalars apply to `x`, `y`, `z` and `w` in order; components
/// without a scalar fall back to a default chosen by the operation (`0` for `add`/`sub`, `1` for
/// `div`, and for `mul` `0` on `x`/`y`/`z` but `1` on `w`).
///
/// # Examples
///
/// ```
/// # use dcl_linalg::*;
/// let v = vec4(1.0, 1.0, 1.0, 1.0);
/// assert_eq!(v.add(2.0), vec4(3.0, 1.0, 1.0, 1.0));
/// assert_eq!(v.add((2.0, 3.0)), vec4(3.0, 4.0, 1.0, 1.0));
/// assert_eq!(v.add(v), vec4(2.0, 2.0, 2.0, 2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Vector(Vector),
    Scalars([Option<f64>; 4]),
}

impl Operand {
    /// Returns the four values to combine with, filling missing scalars from `gaps`.
    pub(crate) fn resolve(self, gaps: [f64; 4]) -> [f64; 4] {
        match self {
            Operand::Vector(v) => v.to_array(),
            Operand::Scalars(scalars) => {
                let mut out = gaps;
                for (slot, scalar) in out.iter_mut().zip(scalars) {
                    if let Some(scalar) = scalar {
                        *slot = scalar;
                    }
                }
                out
            }
        }
    }
}

impl From<Vector> for Operand {
    #[inline]
    fn from(v: Vector) -> Self {
        Operand::Vector(v)
    }
}

impl From<()> for Operand {
    #[inline]
    fn from((): ()) -> Self {
        Operand::Scalars([None; 4])
    }
}

impl From<f64> for Operand {
    #[inline]
    fn from(x: f64) -> Self {
        Operand::Scalars([Some(x), None, None, None])
    }
}

impl From<(f64,)> for Operand {
    #[inline]
    fn from((x,): (f64,)) -> Self {
        x.into()
    }
}

impl From<(f64, f64)> for Operand {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Operand::Scalars([Some(x), Some(y), None, None])
    }
}

impl From<(f64, f64, f64)> for Operand {
    #[inline]
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Operand::Scalars([Some(x), Some(y), Some(z), None])
    }
}

impl From<(f64, f64, f64, f64)> for Operand {
    #[inline]
    fn from((x, y, z, w): (f64, f64, f64, f64)) -> Self {
        Operand::Scalars([Some(x), Some(y), Some(z), Some(w)])
    }
}
