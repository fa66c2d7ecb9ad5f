//! Value-style unit formatter.

use uf_core::UnitFloat;
use uf_locale::{NumberFormat, NumberLocale};

use crate::config::UnitFormatConfig;
use crate::error::{UnitParseError, UnitParseResult};
use crate::sanitize::sanitize;

/// Value formatted into parse errors as an example of valid input.
#[allow(clippy::approx_constant)]
pub const EXAMPLE_VALUE: f64 = 3.14;

/// Formats values as `<number><padding><unit>` and reads them back while
/// ignoring whatever unit the user typed.
///
/// The numeric part is delegated to a [`NumberFormat`]; this type only adds
/// the unit suffix on the way out and strips non-numeric text on the way in.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitFormatStyle {
    #[cfg_attr(feature = "serde", serde(flatten))]
    config: UnitFormatConfig,
    #[cfg_attr(feature = "serde", serde(default))]
    number: NumberFormat,
}

impl UnitFormatStyle {
    /// Style for `unit` with default padding in the ambient locale.
    pub fn new(unit: impl Into<String>) -> Self {
        Self::from_config(UnitFormatConfig::new(unit))
    }

    pub fn from_config(config: UnitFormatConfig) -> Self {
        Self {
            config,
            number: NumberFormat::default(),
        }
    }

    /// Style labelled with a `uom` unit, see [`UnitFormatConfig::for_unit`].
    pub fn for_unit<U: uom::si::Unit>() -> Self {
        Self::from_config(UnitFormatConfig::for_unit::<U>())
    }

    pub fn with_padding(mut self, padding: impl Into<String>) -> Self {
        self.config = self.config.with_padding(padding);
        self
    }

    pub fn with_number_format(mut self, number: NumberFormat) -> Self {
        self.number = number;
        self
    }

    pub fn with_locale(mut self, locale: NumberLocale) -> Self {
        self.number.locale = locale;
        self
    }

    pub fn config(&self) -> &UnitFormatConfig {
        &self.config
    }

    pub fn number_format(&self) -> &NumberFormat {
        &self.number
    }

    /// Display text for an optional value; `None` gives the empty string.
    pub fn format<T: UnitFloat>(&self, value: Option<T>) -> String {
        match value {
            Some(value) => self.format_value(value),
            None => String::new(),
        }
    }

    pub fn format_value<T: UnitFloat>(&self, value: T) -> String {
        let mut out = self.number.format(value);
        self.config.push_suffix(&mut out);
        out
    }

    /// Read a value from free-form text.
    ///
    /// Empty text is `Ok(None)`. Anything else is reduced to its numeric
    /// characters and parsed with the locale's rules; the unit the user typed,
    /// if any, is ignored.
    pub fn parse<T: UnitFloat>(&self, text: &str) -> UnitParseResult<Option<T>> {
        parse_sanitized(&self.number, text, || self.example::<T>())
    }

    /// Like [`parse`](Self::parse), but empty text is a
    /// [`UnitParseError::Missing`] error.
    pub fn parse_value<T: UnitFloat>(&self, text: &str) -> UnitParseResult<T> {
        self.parse(text)?
            .ok_or_else(|| UnitParseError::Missing {
                example: self.example::<T>(),
            })
    }

    /// [`EXAMPLE_VALUE`] rendered in this style.
    pub fn example<T: UnitFloat>(&self) -> String {
        self.format_value(T::from_f64(EXAMPLE_VALUE))
    }
}

pub(crate) fn parse_sanitized<T: UnitFloat>(
    number: &NumberFormat,
    text: &str,
    example: impl FnOnce() -> String,
) -> UnitParseResult<Option<T>> {
    if text.is_empty() {
        return Ok(None);
    }
    number
        .parse(&sanitize(text))
        .map(Some)
        .map_err(|reason| UnitParseError::Malformed {
            input: text.to_string(),
            example: example(),
            reason,
        })
}

/// `value.formatted(&style)` for plain and optional floats.
pub trait FormatWithUnit {
    fn formatted(&self, style: &UnitFormatStyle) -> String;
}

macro_rules! impl_format_with_unit {
    ($($ty:ty),*) => {
        $(
            impl FormatWithUnit for $ty {
                fn formatted(&self, style: &UnitFormatStyle) -> String {
                    style.format_value(*self)
                }
            }

            impl FormatWithUnit for Option<$ty> {
                fn formatted(&self, style: &UnitFormatStyle) -> String {
                    style.format(*self)
                }
            }
        )*
    };
}

impl_format_with_unit!(f32, f64);
#[cfg(feature = "f16")]
impl_format_with_unit!(half::f16);

/// `f64::from_unit_str("12,5 mm", &style)` for required fields.
pub trait ParseWithUnit: UnitFloat {
    fn from_unit_str(text: &str, style: &UnitFormatStyle) -> UnitParseResult<Self> {
        style.parse_value(text)
    }
}

impl<T: UnitFloat> ParseWithUnit for T {}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

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

    // Units and paddings without digits, signs or separators.
    fn configs() -> impl Strategy<Value = UnitFormatConfig> {
        ("[a-zA-Z°µ/ ]{0,8}", prop_oneof![Just(""), Just(" "), Just("_"), Just("\u{00A0}")])
            .prop_map(|(unit, padding)| UnitFormatConfig::new(unit).with_padding(padding))
    }

    proptest! {
        #[test]
        fn f64_round_trip(v in any::<f64>(), config in configs(), locale in locales()) {
            prop_assume!(v.is_finite());
            let style = UnitFormatStyle::from_config(config).with_locale(locale);
            prop_assert_eq!(style.parse::<f64>(&style.format_value(v)), Ok(Some(v)));
        }

        #[test]
        fn f32_round_trip(v in any::<f32>(), config in configs(), locale in locales()) {
            prop_assume!(v.is_finite());
            let style = UnitFormatStyle::from_config(config).with_locale(locale);
            prop_assert_eq!(style.parse::<f32>(&style.format_value(v)), Ok(Some(v)));
        }

        #[test]
        fn typed_unit_never_changes_the_value(
            v in -1e9_f64..1e9_f64,
            typed in "[a-zA-Z /%°]{0,10}",
        ) {
            let style = UnitFormatStyle::new("mm").with_locale(NumberLocale::de_de());
            let number = style.number_format().format(v);
            prop_assert_eq!(
                style.parse::<f64>(&format!("{number}{typed}")),
                style.parse::<f64>(&number)
            );
        }

        #[test]
        fn parse_never_panics(text in any::<String>()) {
            let _ = UnitFormatStyle::new("mm").with_locale(NumberLocale::de_de()).parse::<f64>(&text);
        }
    }
}
