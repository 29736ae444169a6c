use std::{fmt, str::FromStr};

use crate::Error;

/// A coordinate axis to rotate around.
///
/// Axes can be parsed from their lowercase or uppercase names (`"x"`, `"Y"`, ...). Any other name
/// is rejected with [`Error::InvalidAxis`].
///
/// # Examples
///
/// ```
/// # use dcl_linalg::*;
/// assert_eq!("y".parse::<Axis>(), Ok(Axis::Y));
/// assert_eq!(Axis::try_from('Z'), Ok(Axis::Z));
/// assert!("w".parse::<Axis>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes, in `X`, `Y`, `Z` order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Returns the lowercase name of the axis.
    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

impl FromStr for Axis {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" | "X" => Ok(Axis::X),
            "y" | "Y" => Ok(Axis::Y),
            "z" | "Z" => Ok(Axis::Z),
            _ => Err(Error::InvalidAxis { name: s.into() }),
        }
    }
}

impl TryFrom<char> for Axis {
    type Error = Error;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.encode_utf8(&mut [0; 4]).parse()
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
