//! Reduction of free-form text to the characters of a signed decimal number.
//!
//! Only the minus sign, the decimal separator candidates and Unicode decimal
//! digits survive. Which separator is the decimal point is left to the
//! locale-aware parser; unit text is dropped like any other noise.

use uf_core::is_decimal_digit;

/// Characters kept as potential decimal points: period, comma, Arabic decimal separator.
pub const DECIMAL_SEPARATORS: [char; 3] = ['.', ',', '\u{066B}'];

#[inline]
pub fn is_numeric_char(c: char) -> bool {
    c == '-' || DECIMAL_SEPARATORS.contains(&c) || is_decimal_digit(c)
}

/// Keep only [`is_numeric_char`] characters of `text`, in their original order.
pub fn sanitize(text: &str) -> String {
    text.chars().filter(|&c| is_numeric_char(c)).collect()
}
