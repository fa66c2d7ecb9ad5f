//! Unit label and padding shared by every format/parse call.

/// Padding placed between number and unit unless configured otherwise.
pub const DEFAULT_PADDING: &str = " ";

/// Unit symbols written directly after the number (`180°`, `5′`).
const ABUTTING_UNITS: [&str; 3] = ["°", "′", "″"];

/// Unit label plus the padding string that separates it from the number.
///
/// Pure configuration: it never refers to a particular value and can be
/// reused, cloned and shared freely.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitFormatConfig {
    unit: String,
    #[cfg_attr(feature = "serde", serde(default = "default_padding"))]
    padding: String,
}

impl UnitFormatConfig {
    /// Config for `unit` with the default padding.
    pub fn new(unit: impl Into<String>) -> Self {
        Self {
            unit: unit.into(),
            padding: DEFAULT_PADDING.to_string(),
        }
    }

    /// Replace the padding; the empty string makes the unit abut the number.
    pub fn with_padding(mut self, padding: impl Into<String>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Config labelled with the abbreviation of a `uom` unit.
    ///
    /// ```
    /// use uf_format::UnitFormatConfig;
    /// use uom::si::{angle::degree, length::millimeter};
    ///
    /// assert_eq!(UnitFormatConfig::for_unit::<millimeter>().unit(), "mm");
    /// assert_eq!(UnitFormatConfig::for_unit::<degree>().padding(), "");
    /// ```
    pub fn for_unit<U: uom::si::Unit>() -> Self {
        let unit = U::abbreviation();
        let padding = if ABUTTING_UNITS.contains(&unit) {
            ""
        } else {
            DEFAULT_PADDING
        };
        Self::new(unit).with_padding(padding)
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn padding(&self) -> &str {
        &self.padding
    }

    /// Append padding and unit to an already formatted number.
    pub(crate) fn push_suffix(&self, out: &mut String) {
        out.push_str(&self.padding);
        out.push_str(&self.unit);
    }
}

#[cfg(feature = "serde")]
fn default_padding() -> String {
    DEFAULT_PADDING.to_string()
}
