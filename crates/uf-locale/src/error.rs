//! Locale and numeric parsing errors.

use thiserror::Error;

/// Rejected locale definition.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleError {
    #[error("Decimal and grouping separator are both {0:?}")]
    SeparatorClash(char),

    #[error("Separator {0:?} is a decimal digit")]
    DigitSeparator(char),

    #[error("{0:?} is not the zero of a decimal digit script")]
    InvalidZeroDigit(char),

    #[error("Grouping size must be at least 1")]
    ZeroGroupingSize,
}

/// Why a string is not a decimal number under a locale's rules.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberParseError {
    #[error("No numeric text")]
    Empty,

    #[error("No decimal digits")]
    NoDigits,

    #[error("Minus sign must lead the number")]
    MisplacedSign,

    #[error("More than one decimal separator")]
    MultipleDecimalSeparators,

    #[error("Grouping separator outside the integer digits")]
    MisplacedGrouping,

    #[error("Unexpected character {0:?}")]
    UnexpectedCharacter(char),

    #[error("Value is out of range for a {bits}-bit float")]
    OutOfRange { bits: u32 },
}
