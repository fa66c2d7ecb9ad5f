//! Locale-aware reading of decimal numbers.

use uf_core::{UnitFloat, decimal_digit_value};

use crate::error::NumberParseError;
use crate::format::NumberFormat;

const MINUS_SIGN: char = '\u{2212}';

impl NumberFormat {
    /// Read a signed decimal number written with this locale's separators.
    ///
    /// Digits of any script are accepted. Grouping separators are optional,
    /// but once one appears the integer part must be grouped exactly as
    /// [`NumberFormat::format`] groups it: a leading group of 1 to
    /// `grouping_size` digits, then full groups. Precision settings only
    /// affect formatting.
    pub fn parse<T: UnitFloat>(&self, text: &str) -> Result<T, NumberParseError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(NumberParseError::Empty);
        }

        let decimal = self.locale.decimal_separator();
        let grouping = self.locale.grouping_separator();
        let group_size = usize::from(self.locale.grouping_size());

        let mut negative = false;
        let mut integer = String::with_capacity(text.len());
        let mut fraction = String::new();
        let mut seen_decimal = false;
        // Integer digits since the last grouping separator.
        let mut group_len = 0;
        let mut grouped = false;

        for (i, c) in text.chars().enumerate() {
            if let Some(value) = decimal_digit_value(c) {
                let digit = char::from(b'0' + value as u8);
                if seen_decimal {
                    fraction.push(digit);
                } else {
                    integer.push(digit);
                    group_len += 1;
                }
            } else if c == decimal {
                if seen_decimal {
                    return Err(NumberParseError::MultipleDecimalSeparators);
                }
                if grouped && group_len != group_size {
                    return Err(NumberParseError::MisplacedGrouping);
                }
                seen_decimal = true;
            } else if Some(c) == grouping {
                let bad_group = if grouped {
                    group_len != group_size
                } else {
                    group_len == 0 || group_len > group_size
                };
                if seen_decimal || bad_group {
                    return Err(NumberParseError::MisplacedGrouping);
                }
                grouped = true;
                group_len = 0;
            } else if c == '-' || c == MINUS_SIGN {
                if i != 0 {
                    return Err(NumberParseError::MisplacedSign);
                }
                negative = true;
            } else {
                return Err(NumberParseError::UnexpectedCharacter(c));
            }
        }

        if integer.is_empty() && fraction.is_empty() {
            return Err(NumberParseError::NoDigits);
        }
        if grouped && !seen_decimal && group_len != group_size {
            return Err(NumberParseError::MisplacedGrouping);
        }

        let canonical = format!(
            "{}{}.{}",
            if negative { "-" } else { "" },
            if integer.is_empty() { "0" } else { integer.as_str() },
            if fraction.is_empty() { "0" } else { fraction.as_str() },
        );
        let value: T = canonical.parse().map_err(|_| NumberParseError::NoDigits)?;
        if !value.is_finite() {
            return Err(NumberParseError::OutOfRange { bits: T::BITS });
        }
        Ok(value)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::locale::NumberLocale;
    use proptest::prelude::*;
    use uf_core::{Tolerances, nearly_equal};

    fn locales() -> impl Strategy<Value = NumberLocale> {
        prop_oneof![
            Just(NumberLocale::invariant()),
            Just(NumberLocale::en_us()),
            Just(NumberLocale::de_de()),
            Just(NumberLocale::fr_fr()),
            Just(NumberLocale::de_ch()),
            Just(NumberLocale::ar_eg()),
        ]
    }

    proptest! {
        #[test]
        fn f64_shortest_round_trip(v in any::<f64>(), locale in locales(), grouping in any::<bool>()) {
            prop_assume!(v.is_finite());
            let format = NumberFormat::new(locale).with_grouping(grouping);
            let parsed: f64 = format.parse(&format.format(v)).unwrap();
            prop_assert_eq!(parsed, v);
        }

        #[test]
        fn f32_shortest_round_trip(v in any::<f32>(), locale in locales()) {
            prop_assume!(v.is_finite());
            let format = NumberFormat::new(locale);
            let parsed: f32 = format.parse(&format.format(v)).unwrap();
            prop_assert_eq!(parsed, v);
        }

        #[cfg(feature = "f16")]
        #[test]
        fn f16_shortest_round_trip(bits in any::<u16>(), locale in locales()) {
            let v = half::f16::from_bits(bits);
            prop_assume!(v.is_finite());
            let format = NumberFormat::new(locale);
            let text = format.format(v);
            let parsed: half::f16 = format.parse(&text).unwrap();
            prop_assert_eq!(parsed, v);
            // Never more than the 5 significant digits an f16 needs.
            let significant = text
                .chars()
                .filter_map(uf_core::decimal_digit_value)
                .skip_while(|&d| d == 0)
                .count();
            prop_assert!(significant <= 5, "{} has too many digits", text);
        }

        #[test]
        fn rounded_round_trip_stays_within_last_digit(
            v in -1e12_f64..1e12_f64,
            digits in 0_u8..6,
            locale in locales(),
        ) {
            let format = NumberFormat::new(locale).with_fraction_digits(0, Some(digits));
            let parsed: f64 = format.parse(&format.format(v)).unwrap();
            prop_assert!(nearly_equal(parsed, v, Tolerances::for_fraction_digits(digits)));
        }
    }
}
