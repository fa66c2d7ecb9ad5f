//! uf-locale: locale-aware decimal formatting and parsing.
//!
//! Provides:
//! - `NumberLocale`: decimal/grouping separators and digit script, with presets
//!   and ambient resolution from `LC_ALL` / `LC_NUMERIC` / `LANG`
//! - `NumberFormat`: renders `UnitFloat` values and reads them back
//!
//! # Example
//!
//! ```
//! use uf_locale::{NumberFormat, NumberLocale};
//!
//! let format = NumberFormat::new(NumberLocale::de_de());
//! assert_eq!(format.format(-4711.5), "-4.711,5");
//! assert_eq!(format.parse::<f64>("-4.711,5"), Ok(-4711.5));
//! ```

pub mod error;
pub mod format;
pub mod locale;
mod parse;

// Re-exports for ergonomics
pub use error::{LocaleError, NumberParseError};
pub use format::{INFINITY_SYMBOL, NAN_SYMBOL, NumberFormat};
pub use locale::{LOCALE_ENV_VARS, NumberLocale};
pub use uf_core::UnitFloat;
