//! Option parsing module
//!
//! This module validates the string options accepted by the formatter: language
//! tags, style names, currency codes and unit identifiers.

mod identifiers;
mod language_tag;

pub use identifiers::{parse_currency_code, parse_style, parse_unit_identifier};
pub use language_tag::parse_language_tag;
