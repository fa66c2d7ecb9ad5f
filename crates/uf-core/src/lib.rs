//! uf-core: shared foundation for unitfmt.
//!
//! Contains:
//! - numeric (`UnitFloat` over 16/32/64-bit floats + tolerances)
//! - digits (Unicode decimal digit classification)

pub mod digits;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use digits::{decimal_digit_value, digit_in_script, is_decimal_digit};
pub use numeric::*;
