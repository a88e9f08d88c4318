use std::fmt;
use std::ops::{Add, Sub, Neg, Mul, Div};

pub const DEFAULT_DPI: f32 = 96.0;
pub const MILLIMETERS_PER_INCH: f32 = 25.4;
pub const POINTS_PER_INCH: f32 = 72.0;

macro_rules! unit {
    ($(#[$meta:meta])* $name:ident, $suffix:expr) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd)]
        pub struct $name(pub f32);

        impl $name {
            #[inline]
            pub fn value(self) -> f32 {
                self.0
            }
        }

        impl From<f32> for $name {
            fn from(value: f32) -> $name {
                $name(value)
            }
        }

        impl From<$name> for f32 {
            fn from(value: $name) -> f32 {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}{}", self.0, $suffix)
            }
        }

        impl Add for $name {
            type Output = $name;
            fn add(self, rhs: $name) -> $name {
                $name(self.0 + rhs.0)
            }
        }

        impl Sub for $name {
            type Output = $name;
            fn sub(self, rhs: $name) -> $name {
                $name(self.0 - rhs.0)
            }
        }

        impl Neg for $name {
            type Output = $name;
            fn neg(self) -> $name {
                $name(-self.0)
            }
        }

        impl Mul<f32> for $name {
            type Output = $name;
            fn mul(self, rhs: f32) -> $name {
                $name(self.0 * rhs)
            }
        }

        impl Div<f32> for $name {
            type Output = $name;
            fn div(self, rhs: f32) -> $name {
                $name(self.0 / rhs)
            }
        }
    };
}

unit!(
    /// Density-independent pixels.
    Dp, "dp"
);
unit!(
    /// Scale-independent pixels: like `Dp`, but also follows the user's font size preference.
    Sp, "sp"
);
unit!(
    /// Typographic points, 1/72 of an inch.
    Pt, "pt"
);
unit!(Inch, "in");
unit!(Mm, "mm");

// Returns `value` if it's finite and strictly positive, `fallback` otherwise.
#[inline]
pub fn ensure_positive(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

#[inline]
pub fn round_px(x: f64) -> i32 {
    x.round() as i32
}

#[inline]
pub fn pt_to_px(pt: f32, dpi: f32) -> f64 {
    f64::from(pt) * f64::from(dpi) / f64::from(POINTS_PER_INCH)
}

#[inline]
pub fn in_to_px(inc: f32, dpi: f32) -> f64 {
    f64::from(inc) * f64::from(dpi)
}

#[inline]
pub fn mm_to_px(mm: f32, dpi: f32) -> f64 {
    f64::from(mm) * f64::from(dpi) / f64::from(MILLIMETERS_PER_INCH)
}

#[inline]
pub fn px_to_pt(px: i32, dpi: f32) -> f32 {
    (f64::from(px) * f64::from(POINTS_PER_INCH) / f64::from(dpi)) as f32
}

#[inline]
pub fn px_to_in(px: i32, dpi: f32) -> f32 {
    (f64::from(px) / f64::from(dpi)) as f32
}

#[inline]
pub fn px_to_mm(px: i32, dpi: f32) -> f32 {
    (f64::from(px) * f64::from(MILLIMETERS_PER_INCH) / f64::from(dpi)) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_positive() {
        assert_eq!(ensure_positive(2.5, 1.0), 2.5);
        assert_eq!(ensure_positive(0.0, 1.0), 1.0);
        assert_eq!(ensure_positive(-3.0, DEFAULT_DPI), DEFAULT_DPI);
        assert_eq!(ensure_positive(f32::NAN, 1.0), 1.0);
        assert_eq!(ensure_positive(f32::INFINITY, 1.0), 1.0);
        assert_eq!(ensure_positive(f32::NEG_INFINITY, DEFAULT_DPI), DEFAULT_DPI);
        assert_eq!(ensure_positive(f32::MAX, 1.0), f32::MAX);
    }

    #[test]
    fn test_round_px() {
        assert_eq!(round_px(2.5), 3);
        assert_eq!(round_px(-2.5), -3);
        assert_eq!(round_px(0.49999), 0);
        assert_eq!(round_px(1e12), i32::MAX);
    }

    #[test]
    fn test_physical_units() {
        assert_eq!(round_px(pt_to_px(72.0, DEFAULT_DPI)), 96);
        assert_eq!(round_px(in_to_px(1.0, 300.0)), 300);
        assert_eq!(round_px(mm_to_px(MILLIMETERS_PER_INCH, DEFAULT_DPI)), 96);
        assert_eq!(px_to_pt(96, DEFAULT_DPI), 72.0);
        assert_eq!(px_to_in(150, 300.0), 0.5);
        assert_eq!(px_to_mm(96, DEFAULT_DPI), 25.4);
    }

    #[test]
    fn test_unit_arithmetic() {
        assert_eq!(Dp(2.0) + Dp(3.0), Dp(5.0));
        assert_eq!(Sp(2.0) - Sp(3.0), Sp(-1.0));
        assert_eq!(-Pt(4.0), Pt(-4.0));
        assert_eq!(Mm(4.0) * 2.0, Mm(8.0));
        assert_eq!(Inch(4.0) / 2.0, Inch(2.0));
        assert_eq!(f32::from(Dp::from(1.5)), 1.5);
    }

    #[test]
    fn test_unit_display() {
        assert_eq!(Dp(12.0).to_string(), "12dp");
        assert_eq!(Sp(3.25).to_string(), "3.25sp");
        assert_eq!(Mm(8.0).to_string(), "8mm");
    }
}
