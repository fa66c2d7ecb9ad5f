use core::fmt;
use core::str::FromStr;

/// Binary floating-point types a measurement can be stored in.
///
/// Formatting goes through [`UnitFloat::shortest`], the fewest significant
/// digits that parse back to the same value of this width, and parsing goes
/// through the type's `FromStr`. Every width therefore keeps its natural
/// precision.
pub trait UnitFloat:
    Copy + PartialEq + PartialOrd + fmt::Debug + fmt::Display + FromStr + Send + Sync + 'static
{
    /// Storage width in bits.
    const BITS: u32;

    fn from_f64(value: f64) -> Self;
    fn to_f64(self) -> f64;
    fn is_nan(self) -> bool;
    fn is_finite(self) -> bool;
    fn is_sign_negative(self) -> bool;

    /// Shortest plain decimal (no exponent) that `FromStr` reads back as `self`.
    fn shortest(self) -> String;
}

macro_rules! impl_unit_float {
    ($ty:ty, $bits:expr) => {
        impl UnitFloat for $ty {
            const BITS: u32 = $bits;

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $ty
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn is_nan(self) -> bool {
                <$ty>::is_nan(self)
            }

            #[inline]
            fn is_finite(self) -> bool {
                <$ty>::is_finite(self)
            }

            #[inline]
            fn is_sign_negative(self) -> bool {
                <$ty>::is_sign_negative(self)
            }

            #[inline]
            fn shortest(self) -> String {
                self.to_string()
            }
        }
    };
}

impl_unit_float!(f32, 32);
impl_unit_float!(f64, 64);

#[cfg(feature = "f16")]
impl UnitFloat for half::f16 {
    const BITS: u32 = 16;

    #[inline]
    fn from_f64(value: f64) -> Self {
        half::f16::from_f64(value)
    }

    #[inline]
    fn to_f64(self) -> f64 {
        half::f16::to_f64(self)
    }

    #[inline]
    fn is_nan(self) -> bool {
        half::f16::is_nan(self)
    }

    #[inline]
    fn is_finite(self) -> bool {
        half::f16::is_finite(self)
    }

    #[inline]
    fn is_sign_negative(self) -> bool {
        half::f16::is_sign_negative(self)
    }

    /// `f16`'s `Display` prints the shortest `f32` digits, so search for the
    /// f16 ones: at most 5 significant digits are ever needed.
    fn shortest(self) -> String {
        if self.is_finite() && self != half::f16::ZERO {
            let value = self.to_f32();
            for precision in 0..5_usize {
                let candidate = format!("{value:.precision$e}");
                if candidate.parse::<half::f16>().is_ok_and(|c| c == self) {
                    if let Ok(decimal) = candidate.parse::<f64>() {
                        return decimal.to_string();
                    }
                }
            }
        }
        self.to_string()
    }
}

/// Absolute/relative tolerance pair for comparing rounded values.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

impl Tolerances {
    /// Tolerance matching a display rounded to `digits` fraction digits.
    ///
    /// Half a unit in the last shown digit, plus one epsilon for exact ties.
    pub fn for_fraction_digits(digits: u8) -> Self {
        Self {
            abs: 0.5 * 10f64.powi(-i32::from(digits)) + f64::EPSILON,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: f64, b: f64, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}
