//! Swizzle accessors.
//!
//! - 2-element swizzles produce the point `(a, b, 0, 1)`.
//! - Permutations of `xyz` keep the original `w`.
//! - 3-element swizzles that repeat an element produce the point `(a, b, c, 1)`.

use super::Vector;

macro_rules! swizzle2 {
    ($($name:ident => $a:ident $b:ident),+ $(,)?) => {
        impl Vector {
            $(
                #[doc = concat!("Returns `(", stringify!($a), ", ", stringify!($b), ", 0, 1)`.")]
                #[inline]
                pub fn $name(self) -> Self {
                    Self::new(self.$a, self.$b, 0.0, 1.0)
                }
            )+
        }
    };
}

macro_rules! permute3 {
    ($($name:ident => $a:ident $b:ident $c:ident),+ $(,)?) => {
        impl Vector {
            $(
                #[doc = concat!(
                    "Returns `(", stringify!($a), ", ", stringify!($b), ", ", stringify!($c), ", w)`."
                )]
                #[inline]
                pub fn $name(self) -> Self {
                    Self::new(self.$a, self.$b, self.$c, self.w)
                }
            )+
        }
    };
}

macro_rules! repeat3 {
    ($($name:ident => $a:ident $b:ident $c:ident),+ $(,)?) => {
        impl Vector {
            $(
                #[doc = concat!(
                    "Returns `(", stringify!($a), ", ", stringify!($b), ", ", stringify!($c), ", 1)`."
                )]
                #[inline]
                pub fn $name(self) -> Self {
                    Self::new(self.$a, self.$b, self.$c, 1.0)
                }
            )+
        }
    };
}

swizzle2! {
    xy => x y,
    xz => x z,
    yx => y x,
    yz => y z,
    zx => z x,
    zy => z y,
}

permute3! {
    xyz => x y z,
    xzy => x z y,
    yxz => y x z,
    yzx => y z x,
    zxy => z x y,
    zyx => z y x,
}

repeat3! {
    xxx => x x x,
    xxy => x x y,
    xxz => x x z,
    xyx => x y x,
    xyy => x y y,
    xzx => x z x,
    xzz => x z z,
    yxx => y x x,
    yxy => y x y,
    yyx => y y x,
    yyy => y y y,
    yyz => y y z,
    yzy => y z y,
    yzz => y z z,
    zxx => z x x,
    zxz => z x z,
    zyy => z y y,
    zyz => z y z,
    zzx => z z x,
    zzy => z z y,
    zzz => z z z,
}

#[cfg(test)]
mod tests {
    use crate::vec4;

    #[test]
    fn two() {
        let v = vec4(1.0, 2.0, 3.0, 0.0);
        assert_eq!(v.xy(), vec4(1.0, 2.0, 0.0, 1.0));
        assert_eq!(v.yx(), vec4(2.0, 1.0, 0.0, 1.0));
        assert_eq!(v.zx(), vec4(3.0, 1.0, 0.0, 1.0));
        assert_eq!(v.yz(), vec4(2.0, 3.0, 0.0, 1.0));
    }

    #[test]
    fn permutations_keep_w() {
        let v = vec4(1.0, 2.0, 3.0, 0.0);
        assert_eq!(v.xyz(), v);
        assert_eq!(v.zyx(), vec4(3.0, 2.0, 1.0, 0.0));
        assert_eq!(v.yzx(), vec4(2.0, 3.0, 1.0, 0.0));
        assert_eq!(v.zxy(), vec4(3.0, 1.0, 2.0, 0.0));
    }

    #[test]
    fn repeats_are_points() {
        let v = vec4(1.0, 2.0, 3.0, 0.0);
        assert_eq!(v.zzx(), vec4(3.0, 3.0, 1.0, 1.0));
        assert_eq!(v.xxx(), vec4(1.0, 1.0, 1.0, 1.0));
        assert_eq!(v.yzy(), vec4(2.0, 3.0, 2.0, 1.0));
    }
}
