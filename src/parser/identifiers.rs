use winnow::combinator::{alt, opt, preceded, separated};
use winnow::token::{literal, take_while};
use winnow::{ModalResult, Parser};

use crate::error::{FormatError, Result};
use crate::types::{FormatStyle, UnitIdentifier};

fn style_name(input: &mut &str) -> ModalResult<FormatStyle> {
    alt((
        literal("decimal").value(FormatStyle::Decimal),
        literal("currency").value(FormatStyle::Currency),
        literal("percent").value(FormatStyle::Percent),
        literal("unit").value(FormatStyle::Unit),
    ))
    .parse_next(input)
}

fn currency_code<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    take_while(3, |c: char| c.is_ascii_alphabetic()).parse_next(input)
}

fn unit_word<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    take_while(1.., |c: char| c.is_ascii_lowercase())
        .verify(|w: &str| w != "per")
        .parse_next(input)
}

/// A simple unit such as `meter` or `fluid-ounce`
fn simple_unit<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    separated(1.., unit_word, '-')
        .map(|()| ())
        .take()
        .parse_next(input)
}

fn unit_identifier(input: &mut &str) -> ModalResult<UnitIdentifier> {
    (simple_unit, opt(preceded("-per-", simple_unit)))
        .map(|(numerator, denominator)| UnitIdentifier {
            numerator: numerator.to_string(),
            denominator: denominator.map(str::to_string),
        })
        .parse_next(input)
}

/// Parse a style name; names are case-sensitive
pub fn parse_style(style: &str) -> Result<FormatStyle> {
    let mut input = style;
    match style_name.parse_next(&mut input) {
        Ok(parsed) if input.is_empty() => Ok(parsed),
        _ => Err(FormatError::InvalidStyle(style.to_string())),
    }
}

/// Parse an ISO 4217 currency code and return it upper-cased
///
/// Only the shape is checked: any three ASCII letters are accepted, whether or
/// not the code is assigned.
pub fn parse_currency_code(code: &str) -> Result<String> {
    let mut input = code;
    match currency_code.parse_next(&mut input) {
        Ok(parsed) if input.is_empty() => Ok(parsed.to_ascii_uppercase()),
        _ => Err(FormatError::InvalidCurrency(code.to_string())),
    }
}

/// Split a unit identifier into numerator and optional `-per-` denominator
pub fn parse_unit_identifier(unit: &str) -> Result<UnitIdentifier> {
    let mut input = unit;
    match unit_identifier.parse_next(&mut input) {
        Ok(parsed) if input.is_empty() => Ok(parsed),
        _ => Err(FormatError::InvalidUnit(unit.to_string())),
    }
}
