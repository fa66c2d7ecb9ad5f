//! Locale-aware rendering of floating-point values.

use uf_core::UnitFloat;

use crate::locale::NumberLocale;

pub const NAN_SYMBOL: &str = "NaN";
pub const INFINITY_SYMBOL: &str = "\u{221E}";

/// Decimal formatter/parser bound to a locale and a precision policy.
///
/// With `maximum_fraction_digits == None` a value is written with the
/// shortest digits that read back as the same value of its own type, so
/// [`NumberFormat::parse`] recovers it exactly. Exponent notation is never
/// produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NumberFormat {
    pub locale: NumberLocale,
    pub minimum_fraction_digits: u8,
    pub maximum_fraction_digits: Option<u8>,
    pub uses_grouping: bool,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::new(NumberLocale::current())
    }
}

impl NumberFormat {
    pub fn new(locale: NumberLocale) -> Self {
        Self {
            locale,
            minimum_fraction_digits: 0,
            maximum_fraction_digits: None,
            uses_grouping: true,
        }
    }

    pub fn with_locale(mut self, locale: NumberLocale) -> Self {
        self.locale = locale;
        self
    }

    /// Pad to `min` and round to `max` fraction digits (`None`: no rounding).
    pub fn with_fraction_digits(mut self, min: u8, max: Option<u8>) -> Self {
        self.minimum_fraction_digits = min;
        self.maximum_fraction_digits = max;
        self
    }

    pub fn with_grouping(mut self, uses_grouping: bool) -> Self {
        self.uses_grouping = uses_grouping;
        self
    }

    /// Render `value` with this locale's separators and digits.
    pub fn format<T: UnitFloat>(&self, value: T) -> String {
        if value.is_nan() {
            return NAN_SYMBOL.to_string();
        }
        if !value.is_finite() {
            return if value.is_sign_negative() {
                format!("-{INFINITY_SYMBOL}")
            } else {
                INFINITY_SYMBOL.to_string()
            };
        }

        let min = self.minimum_fraction_digits;
        let rendered = match self.maximum_fraction_digits {
            Some(max) => format!("{:.*}", usize::from(max.max(min)), value),
            None => value.shortest(),
        };
        let (negative, magnitude) = match rendered.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, rendered.as_str()),
        };
        let (integer, fraction) = magnitude.split_once('.').unwrap_or((magnitude, ""));

        // Trimmed digits are zeros, so padding back up to `min` restores them.
        let mut fraction = fraction.trim_end_matches('0').to_string();
        while fraction.len() < usize::from(min) {
            fraction.push('0');
        }

        let is_zero = integer.bytes().chain(fraction.bytes()).all(|b| b == b'0');
        let mut out = String::with_capacity(rendered.len() + integer.len() / 3 + 1);
        if negative && !is_zero {
            out.push('-');
        }
        self.push_integer(&mut out, integer);
        if !fraction.is_empty() {
            out.push(self.locale.decimal_separator());
            for b in fraction.bytes() {
                out.push(self.locale.digit(u32::from(b - b'0')));
            }
        }
        out
    }

    fn push_integer(&self, out: &mut String, digits: &str) {
        let separator = self
            .locale
            .grouping_separator()
            .filter(|_| self.uses_grouping);
        let group = usize::from(self.locale.grouping_size());
        let len = digits.len();
        for (i, b) in digits.bytes().enumerate() {
            if let Some(separator) = separator {
                if i > 0 && (len - i) % group == 0 {
                    out.push(separator);
                }
            }
            out.push(self.locale.digit(u32::from(b - b'0')));
        }
    }
}
