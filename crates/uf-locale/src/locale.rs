//! Decimal conventions of a locale.
//!
//! A [`NumberLocale`] only captures what number formatting needs: the decimal
//! separator, the optional grouping separator and its group size, and the
//! script digits are written in. Presets cover the conventions most often
//! met in engineering forms; [`NumberLocale::from_tag`] maps POSIX and BCP-47
//! tags onto them.

use std::sync::OnceLock;

use tracing::{debug, warn};
use uf_core::{decimal_digit_value, digit_in_script, is_decimal_digit};

use crate::error::LocaleError;

/// Environment variables consulted for the ambient locale, highest priority first.
pub const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_NUMERIC", "LANG"];

const DEFAULT_GROUPING_SIZE: u8 = 3;

/// Decimal and grouping conventions of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "LocaleFields")
)]
pub struct NumberLocale {
    decimal_separator: char,
    grouping_separator: Option<char>,
    grouping_size: u8,
    zero_digit: char,
}

impl NumberLocale {
    /// Locale with the given separators, ASCII digits and groups of three.
    pub fn new(decimal_separator: char, grouping_separator: Option<char>) -> Result<Self, LocaleError> {
        if is_decimal_digit(decimal_separator) {
            return Err(LocaleError::DigitSeparator(decimal_separator));
        }
        if let Some(grouping) = grouping_separator {
            if grouping == decimal_separator {
                return Err(LocaleError::SeparatorClash(grouping));
            }
            if is_decimal_digit(grouping) {
                return Err(LocaleError::DigitSeparator(grouping));
            }
        }
        Ok(Self {
            decimal_separator,
            grouping_separator,
            grouping_size: DEFAULT_GROUPING_SIZE,
            zero_digit: '0',
        })
    }

    pub fn with_grouping_size(mut self, size: u8) -> Result<Self, LocaleError> {
        if size == 0 {
            return Err(LocaleError::ZeroGroupingSize);
        }
        self.grouping_size = size;
        Ok(self)
    }

    /// Write digits in the script whose zero is `zero` (e.g. `'٠'`).
    pub fn with_zero_digit(mut self, zero: char) -> Result<Self, LocaleError> {
        if decimal_digit_value(zero) != Some(0) {
            return Err(LocaleError::InvalidZeroDigit(zero));
        }
        self.zero_digit = zero;
        Ok(self)
    }

    /// `1234.5`: period decimal, no grouping. Used when nothing else is known.
    pub const fn invariant() -> Self {
        Self::preset('.', None, '0')
    }

    /// `1,234.5`
    pub const fn en_us() -> Self {
        Self::preset('.', Some(','), '0')
    }

    /// `1.234,5`
    pub const fn de_de() -> Self {
        Self::preset(',', Some('.'), '0')
    }

    /// `1 234,5` with a narrow no-break space.
    pub const fn fr_fr() -> Self {
        Self::preset(',', Some('\u{202F}'), '0')
    }

    /// `1’234.5`
    pub const fn de_ch() -> Self {
        Self::preset('.', Some('\u{2019}'), '0')
    }

    /// `١٬٢٣٤٫٥`: Arabic separators and Arabic-Indic digits.
    pub const fn ar_eg() -> Self {
        Self::preset('\u{066B}', Some('\u{066C}'), '\u{0660}')
    }

    const fn preset(decimal_separator: char, grouping_separator: Option<char>, zero_digit: char) -> Self {
        Self {
            decimal_separator,
            grouping_separator,
            grouping_size: DEFAULT_GROUPING_SIZE,
            zero_digit,
        }
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    pub fn grouping_separator(&self) -> Option<char> {
        self.grouping_separator
    }

    pub fn grouping_size(&self) -> u8 {
        self.grouping_size
    }

    pub fn zero_digit(&self) -> char {
        self.zero_digit
    }

    /// Digit `value` (0–9) in this locale's script.
    pub fn digit(&self, value: u32) -> char {
        digit_in_script(self.zero_digit, value)
    }

    /// Map a POSIX (`de_DE.UTF-8`) or BCP-47 (`de-DE`) tag onto a preset.
    ///
    /// Encoding (`.UTF-8`) and modifier (`@euro`) suffixes are ignored.
    /// Returns `None` for languages without a known preset.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.split(['.', '@']).next().unwrap_or_default().trim();
        let mut parts = tag.split(['_', '-']);
        let language = parts.next().unwrap_or_default().to_ascii_lowercase();
        let region = parts
            .find(|part| part.len() == 2 || part.len() == 3)
            .map(|part| part.to_ascii_uppercase());

        let locale = match (language.as_str(), region.as_deref()) {
            ("c" | "posix", _) => Self::invariant(),
            ("de" | "it" | "rm", Some("CH" | "LI")) => Self::de_ch(),
            ("en" | "ja" | "zh" | "ko" | "he" | "th" | "hi" | "ms", _) => Self::en_us(),
            ("de" | "nl" | "it" | "es" | "pt" | "da" | "id" | "tr" | "el" | "ro" | "hr" | "sl", _) => {
                Self::de_de()
            }
            ("fr" | "ru" | "pl" | "cs" | "sk" | "fi" | "sv" | "nb" | "no" | "uk" | "hu" | "bg", _) => {
                Self::fr_fr()
            }
            ("ar", Some("MA" | "DZ" | "TN" | "LY")) => Self::fr_fr(),
            ("ar", _) => Self::ar_eg(),
            _ => return None,
        };
        Some(locale)
    }

    /// Resolve the locale from `LC_ALL`, `LC_NUMERIC` and `LANG`, in that order.
    ///
    /// The first non-empty variable decides; an unrecognized tag falls back to
    /// [`NumberLocale::invariant`] instead of consulting the next variable.
    pub fn from_env() -> Self {
        Self::from_env_with(|var| std::env::var(var).ok())
    }

    /// [`NumberLocale::from_env`] with a custom variable lookup.
    pub fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
        for var in LOCALE_ENV_VARS {
            let Some(tag) = lookup(var).filter(|tag| !tag.trim().is_empty()) else {
                continue;
            };
            return match Self::from_tag(&tag) {
                Some(locale) => {
                    debug!(var, tag = %tag, ?locale, "resolved number locale from environment");
                    locale
                }
                None => {
                    warn!(var, tag = %tag, "unrecognized locale tag, using invariant number formatting");
                    Self::invariant()
                }
            };
        }
        debug!("no locale in environment, using invariant number formatting");
        Self::invariant()
    }

    /// Process-wide ambient locale, resolved from the environment on first use.
    pub fn current() -> Self {
        static CURRENT: OnceLock<NumberLocale> = OnceLock::new();
        *CURRENT.get_or_init(Self::from_env)
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::current()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct LocaleFields {
    decimal_separator: char,
    #[serde(default)]
    grouping_separator: Option<char>,
    #[serde(default = "default_grouping_size")]
    grouping_size: u8,
    #[serde(default = "default_zero_digit")]
    zero_digit: char,
}

#[cfg(feature = "serde")]
fn default_grouping_size() -> u8 {
    DEFAULT_GROUPING_SIZE
}

#[cfg(feature = "serde")]
fn default_zero_digit() -> char {
    '0'
}

#[cfg(feature = "serde")]
impl TryFrom<LocaleFields> for NumberLocale {
    type Error = LocaleError;

    fn try_from(fields: LocaleFields) -> Result<Self, Self::Error> {
        Self::new(fields.decimal_separator, fields.grouping_separator)?
            .with_grouping_size(fields.grouping_size)?
            .with_zero_digit(fields.zero_digit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn new_rejects_clashing_separators() {
        assert_eq!(
            NumberLocale::new(',', Some(',')),
            Err(LocaleError::SeparatorClash(','))
        );
        assert_eq!(
            NumberLocale::new('5', None),
            Err(LocaleError::DigitSeparator('5'))
        );
        assert_eq!(
            NumberLocale::new('.', Some('\u{0661}')),
            Err(LocaleError::DigitSeparator('\u{0661}'))
        );
    }

    #[test]
    fn builders_validate() {
        let base = NumberLocale::new('.', Some(' ')).unwrap();
        assert_eq!(base.with_grouping_size(0), Err(LocaleError::ZeroGroupingSize));
        assert_eq!(base.with_grouping_size(4).unwrap().grouping_size(), 4);
        assert_eq!(
            base.with_zero_digit('\u{0661}'),
            Err(LocaleError::InvalidZeroDigit('\u{0661}'))
        );
        assert_eq!(base.with_zero_digit('\u{0966}').unwrap().digit(2), '\u{0968}');
    }

    #[test]
    fn presets_pass_validation() {
        for preset in [
            NumberLocale::invariant(),
            NumberLocale::en_us(),
            NumberLocale::de_de(),
            NumberLocale::fr_fr(),
            NumberLocale::de_ch(),
            NumberLocale::ar_eg(),
        ] {
            let rebuilt = NumberLocale::new(preset.decimal_separator(), preset.grouping_separator())
                .and_then(|l| l.with_zero_digit(preset.zero_digit()))
                .unwrap();
            assert_eq!(rebuilt, preset);
        }
    }

    #[test]
    fn tags_map_to_presets() {
        assert_eq!(NumberLocale::from_tag("de_DE.UTF-8"), Some(NumberLocale::de_de()));
        assert_eq!(NumberLocale::from_tag("de-CH"), Some(NumberLocale::de_ch()));
        assert_eq!(NumberLocale::from_tag("en_US"), Some(NumberLocale::en_us()));
        assert_eq!(NumberLocale::from_tag("fr_FR@euro"), Some(NumberLocale::fr_fr()));
        assert_eq!(NumberLocale::from_tag("ar_EG.UTF-8"), Some(NumberLocale::ar_eg()));
        assert_eq!(NumberLocale::from_tag("ar-MA"), Some(NumberLocale::fr_fr()));
        assert_eq!(NumberLocale::from_tag("C.UTF-8"), Some(NumberLocale::invariant()));
        assert_eq!(NumberLocale::from_tag("POSIX"), Some(NumberLocale::invariant()));
        assert_eq!(NumberLocale::from_tag("zz_ZZ"), None);
        assert_eq!(NumberLocale::from_tag(""), None);
    }

    #[test]
    fn env_precedence_follows_posix() {
        let env: HashMap<&str, &str> = [("LC_ALL", ""), ("LC_NUMERIC", "de_DE.UTF-8"), ("LANG", "en_US.UTF-8")]
            .into_iter()
            .collect();
        let locale = NumberLocale::from_env_with(|var| env.get(var).map(|v| v.to_string()));
        assert_eq!(locale, NumberLocale::de_de());

        let env: HashMap<&str, &str> = [("LC_ALL", "fr_FR"), ("LANG", "en_US")].into_iter().collect();
        let locale = NumberLocale::from_env_with(|var| env.get(var).map(|v| v.to_string()));
        assert_eq!(locale, NumberLocale::fr_fr());
    }

    #[test]
    fn env_falls_back_to_invariant() {
        assert_eq!(NumberLocale::from_env_with(|_| None), NumberLocale::invariant());

        let locale = NumberLocale::from_env_with(|var| (var == "LANG").then(|| "xx_YY".to_string()));
        assert_eq!(locale, NumberLocale::invariant());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialization_validates() {
        let locale: NumberLocale =
            serde_json::from_str(r#"{"decimal_separator": ",", "grouping_separator": "."}"#).unwrap();
        assert_eq!(locale, NumberLocale::de_de());

        let err = serde_json::from_str::<NumberLocale>(
            r#"{"decimal_separator": ",", "grouping_separator": ","}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("both"));
    }
}
