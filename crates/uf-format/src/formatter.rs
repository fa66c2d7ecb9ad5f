//! Mutable, object-style unit formatter.
//!
//! [`UnitFormatter`] suits bindings that keep one formatter per text field and
//! adjust it in place. It wraps a [`NumberFormat`] and forwards every
//! precision and grouping setting to it unchanged; the unit and padding are
//! handled only at the string boundary. Parsing is the same tolerant parse as
//! [`UnitFormatStyle`].

use uf_core::UnitFloat;
use uf_locale::{NumberFormat, NumberLocale};

use crate::config::UnitFormatConfig;
use crate::error::UnitParseResult;
use crate::style::{EXAMPLE_VALUE, UnitFormatStyle, parse_sanitized};

/// Default padding of [`UnitFormatter`]: U+00A0 NO-BREAK SPACE.
pub const NO_BREAK_SPACE: &str = "\u{00A0}";

/// Stateful formatter with an optional unit.
///
/// `Clone` duplicates the wrapped number settings together with `unit` and
/// `padding_string`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitFormatter {
    /// Appended after `padding_string`; `None` formats the bare number.
    pub unit: Option<String>,
    pub padding_string: String,
    number: NumberFormat,
}

impl Default for UnitFormatter {
    fn default() -> Self {
        Self {
            unit: None,
            padding_string: NO_BREAK_SPACE.to_string(),
            number: NumberFormat::default(),
        }
    }
}

impl UnitFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unit(unit: impl Into<String>) -> Self {
        Self {
            unit: Some(unit.into()),
            ..Self::default()
        }
    }

    pub fn number_format(&self) -> &NumberFormat {
        &self.number
    }

    pub fn set_number_format(&mut self, number: NumberFormat) {
        self.number = number;
    }

    pub fn locale(&self) -> NumberLocale {
        self.number.locale
    }

    pub fn set_locale(&mut self, locale: NumberLocale) {
        self.number.locale = locale;
    }

    pub fn minimum_fraction_digits(&self) -> u8 {
        self.number.minimum_fraction_digits
    }

    pub fn set_minimum_fraction_digits(&mut self, digits: u8) {
        self.number.minimum_fraction_digits = digits;
    }

    pub fn maximum_fraction_digits(&self) -> Option<u8> {
        self.number.maximum_fraction_digits
    }

    pub fn set_maximum_fraction_digits(&mut self, digits: Option<u8>) {
        self.number.maximum_fraction_digits = digits;
    }

    pub fn uses_grouping(&self) -> bool {
        self.number.uses_grouping
    }

    pub fn set_uses_grouping(&mut self, uses_grouping: bool) {
        self.number.uses_grouping = uses_grouping;
    }

    pub fn string_from<T: UnitFloat>(&self, value: T) -> String {
        let mut out = self.number.format(value);
        if let Some(unit) = &self.unit {
            out.push_str(&self.padding_string);
            out.push_str(unit);
        }
        out
    }

    /// Display text for an optional value; `None` gives the empty string.
    pub fn string_for<T: UnitFloat>(&self, value: Option<T>) -> String {
        value.map(|v| self.string_from(v)).unwrap_or_default()
    }

    /// Tolerant parse, see [`UnitFormatStyle::parse`].
    pub fn number_from<T: UnitFloat>(&self, text: &str) -> UnitParseResult<Option<T>> {
        parse_sanitized(&self.number, text, || {
            self.string_from(T::from_f64(EXAMPLE_VALUE))
        })
    }

    /// Equivalent immutable style, for APIs that take one.
    pub fn style(&self) -> UnitFormatStyle {
        let config = match &self.unit {
            Some(unit) => UnitFormatConfig::new(unit.as_str()).with_padding(self.padding_string.as_str()),
            None => UnitFormatConfig::new("").with_padding(""),
        };
        UnitFormatStyle::from_config(config).with_number_format(self.number)
    }
}
