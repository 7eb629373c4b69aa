//! Error type for number formatting

use std::fmt;

/// Failures raised while resolving formatting options
///
/// Formatting itself never fails once a [`crate::NumberFormatter`] is built;
/// every error comes from an unsupported or malformed option.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// The language tag is not well-formed
    InvalidLocale(String),
    /// The style is not one of decimal, currency, percent or unit
    InvalidStyle(String),
    /// The currency code is not three ASCII letters
    InvalidCurrency(String),
    /// The unit identifier is not a supported unit
    InvalidUnit(String),
    /// The unit style was requested without a unit
    MissingUnit,
    /// More fraction digits than the formatter supports
    InvalidFractionDigits(u32),
    /// Embedded locale data could not be read
    LocaleData(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::InvalidLocale(tag) => {
                write!(f, "Incorrect locale information provided: {:?}", tag)
            }
            FormatError::InvalidStyle(style) => write!(f, "Value {} out of range for style", style),
            FormatError::InvalidCurrency(code) => write!(f, "Invalid currency code: {}", code),
            FormatError::InvalidUnit(unit) => write!(f, "Invalid unit argument: {}", unit),
            FormatError::MissingUnit => write!(f, "Unit style requires a unit"),
            FormatError::InvalidFractionDigits(digits) => {
                write!(f, "Fraction digits value is out of range: {}", digits)
            }
            FormatError::LocaleData(msg) => write!(f, "Error parsing locale data: {}", msg),
        }
    }
}

impl std::error::Error for FormatError {}

pub type Result<T> = std::result::Result<T, FormatError>;
