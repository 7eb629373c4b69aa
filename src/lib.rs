pub mod error;
pub mod formatter;
pub mod locale;
pub mod parser;
pub mod types;

// Main API exports
pub use error::FormatError;
pub use formatter::{NumberFormatter, format_number};
pub use types::*;
