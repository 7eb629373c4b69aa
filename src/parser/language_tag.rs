use winnow::combinator::{opt, preceded, repeat};
use winnow::token::take_while;
use winnow::{ModalResult, Parser};

use crate::error::{FormatError, Result};
use crate::types::LanguageTag;

fn is_alpha(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_digit(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit())
}

/// Parse one `-`-prefixed subtag of up to eight alphanumerics
fn subtag<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    preceded('-', take_while(1..=8, |c: char| c.is_ascii_alphanumeric())).parse_next(input)
}

fn parse_language<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    take_while(2..=8, |c: char| c.is_ascii_alphabetic())
        .verify(|s: &str| s.len() != 4)
        .parse_next(input)
}

fn parse_script<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    subtag
        .verify(|s: &str| s.len() == 4 && is_alpha(s))
        .parse_next(input)
}

fn parse_region<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    subtag
        .verify(|s: &str| (s.len() == 2 && is_alpha(s)) || (s.len() == 3 && is_digit(s)))
        .parse_next(input)
}

fn parse_variant<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    subtag
        .verify(|s: &str| {
            s.len() >= 5 || (s.len() == 4 && s.starts_with(|c: char| c.is_ascii_digit()))
        })
        .parse_next(input)
}

fn parse_extension<'s>(input: &mut &'s str) -> ModalResult<(&'s str, Vec<&'s str>)> {
    (
        subtag.verify(|s: &str| s.len() == 1 && !s.eq_ignore_ascii_case("x")),
        repeat(1.., subtag.verify(|s: &str| s.len() >= 2)),
    )
        .parse_next(input)
}

fn parse_private_use<'s>(input: &mut &'s str) -> ModalResult<Vec<&'s str>> {
    preceded(subtag.verify(|s: &str| s.eq_ignore_ascii_case("x")), repeat(1.., subtag))
        .parse_next(input)
}

fn title_case(s: &str) -> String {
    s.char_indices()
        .map(|(i, c)| {
            if i == 0 {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

fn language_tag(input: &mut &str) -> ModalResult<LanguageTag> {
    let language = parse_language.parse_next(input)?;
    let script = opt(parse_script).parse_next(input)?;
    let region = opt(parse_region).parse_next(input)?;
    let variants: Vec<&str> = repeat(0.., parse_variant).parse_next(input)?;
    let extensions: Vec<(&str, Vec<&str>)> = repeat(0.., parse_extension).parse_next(input)?;
    let private_use = opt(parse_private_use).parse_next(input)?;

    Ok(LanguageTag {
        language: language.to_ascii_lowercase(),
        script: script.map(title_case),
        region: region.map(|s| s.to_ascii_uppercase()),
        variants: variants.iter().map(|s| s.to_ascii_lowercase()).collect(),
        extensions: extensions
            .into_iter()
            .filter_map(|(singleton, subtags)| {
                let singleton = singleton.chars().next()?.to_ascii_lowercase();
                Some((
                    singleton,
                    subtags.iter().map(|s| s.to_ascii_lowercase()).collect(),
                ))
            })
            .collect(),
        private_use: private_use
            .unwrap_or_default()
            .iter()
            .map(|s| s.to_ascii_lowercase())
            .collect(),
    })
}

/// Parse a BCP 47 language tag such as `en-US` or `zh-Hant-TW`
///
/// Subtags must be separated by `-`; the whole input has to be consumed and
/// variants or extension singletons may not repeat. Extended language subtags
/// (`zh-yue`) are not part of a locale identifier and are rejected.
///
/// # Examples
/// ```
/// use intl_number_format::parser::parse_language_tag;
///
/// let tag = parse_language_tag("de-de").unwrap();
/// assert_eq!(tag.to_string(), "de-DE");
/// ```
pub fn parse_language_tag(tag: &str) -> Result<LanguageTag> {
    let invalid = || FormatError::InvalidLocale(tag.to_string());

    let mut input = tag;
    let parsed = language_tag.parse_next(&mut input).map_err(|_| invalid())?;
    if !input.is_empty() {
        return Err(invalid());
    }

    for (i, variant) in parsed.variants.iter().enumerate() {
        if parsed.variants[..i].contains(variant) {
            return Err(invalid());
        }
    }
    for (i, (singleton, _)) in parsed.extensions.iter().enumerate() {
        if parsed.extensions[..i].iter().any(|(s, _)| s == singleton) {
            return Err(invalid());
        }
    }

    Ok(parsed)
}
