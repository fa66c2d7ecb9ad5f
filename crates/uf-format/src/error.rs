use thiserror::Error;
use uf_locale::NumberParseError;

pub type UnitParseResult<T> = Result<T, UnitParseError>;

/// Text that could not be turned into a value.
///
/// Both variants carry an example of valid input, rendered with the same
/// style that rejected the text, so callers can show it to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitParseError {
    #[error("Cannot parse {input}. String should adhere to the specified format, such as '{example}'")]
    Malformed {
        input: String,
        example: String,
        #[source]
        reason: NumberParseError,
    },

    #[error("No value given. String should adhere to the specified format, such as '{example}'")]
    Missing { example: String },
}

impl UnitParseError {
    /// The rejected text as the user entered it (empty for `Missing`).
    pub fn input(&self) -> &str {
        match self {
            Self::Malformed { input, .. } => input,
            Self::Missing { .. } => "",
        }
    }

    pub fn example(&self) -> &str {
        match self {
            Self::Malformed { example, .. } | Self::Missing { example } => example,
        }
    }
}
