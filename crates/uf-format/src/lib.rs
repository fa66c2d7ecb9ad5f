//! uf-format: display measurements with a unit, read them back tolerantly.
//!
//! Provides:
//! - `sanitize`: reduces free-form text to the characters of a signed decimal number
//! - `UnitFormatConfig`: unit label + padding
//! - `UnitFormatStyle`: immutable formatter/parser built on `uf_locale::NumberFormat`
//! - `UnitFormatter`: mutable formatter for widget bindings
//!
//! Parsing never checks the unit the user typed. Whatever is not part of
//! the number is dropped before the locale-aware parser sees the text, so
//! `"12,5"`, `"12,5mm"` and `"12,5 kg"` all read as 12.5 under a German
//! locale. Units or paddings that themselves contain digits, `-`, `.` or
//! `,` therefore do not round-trip.
//!
//! # Example
//!
//! ```
//! use uf_format::UnitFormatStyle;
//! use uf_locale::NumberLocale;
//!
//! let style = UnitFormatStyle::new("mm").with_locale(NumberLocale::de_de());
//! assert_eq!(style.format(Some(123.45)), "123,45 mm");
//! assert_eq!(style.format(None::<f64>), "");
//!
//! assert_eq!(style.parse::<f64>("123,45mm"), Ok(Some(123.45)));
//! assert_eq!(style.parse::<f64>(""), Ok(None));
//! assert!(style.parse::<f64>("abc").is_err());
//! ```

pub mod config;
pub mod error;
pub mod formatter;
pub mod sanitize;
pub mod style;

// Re-exports for ergonomics
pub use config::{DEFAULT_PADDING, UnitFormatConfig};
pub use error::{UnitParseError, UnitParseResult};
pub use formatter::{NO_BREAK_SPACE, UnitFormatter};
pub use sanitize::{DECIMAL_SEPARATORS, is_numeric_char, sanitize};
pub use style::{EXAMPLE_VALUE, FormatWithUnit, ParseWithUnit, UnitFormatStyle};
pub use uf_core::UnitFloat;
pub use uf_locale::{NumberFormat, NumberLocale, NumberParseError};
