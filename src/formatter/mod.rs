//! Number formatting module
//!
//! This module renders numbers in the decimal, currency, percent and unit
//! styles using resolved locale settings. The main entry point is the
//! `format_number` function; `NumberFormatter` keeps the resolved options for
//! repeated use.

mod decimal;
mod grouping;
mod patterns;

use crate::error::{FormatError, Result};
use crate::locale;
use crate::parser::{parse_currency_code, parse_language_tag, parse_style, parse_unit_identifier};
use crate::types::{
    CurrencyInfo, DEFAULT_CURRENCY, DEFAULT_LOCALE, FormatStyle, LocaleSettings,
    MAX_FRACTION_DIGITS, NumberFormatOptions, UnitInfo,
};

use decimal::DecimalDigits;
use grouping::group_integer;
use patterns::{apply_currency_pattern, apply_pattern};

/// Format a number in the requested style and locale
///
/// Absent, zero and NaN numbers format as `0`. An absent or empty style means
/// decimal, absent or zero `decimals` means no fraction digits, an absent or
/// empty currency means `USD` and an absent locale means `en-US`. Otherwise
/// exactly `decimals` fraction digits are shown.
///
/// # Arguments
/// * `number` - The value to format
/// * `format` - One of `decimal`, `currency`, `percent` or `unit`
/// * `decimals` - Exact number of fraction digits
/// * `currency` - ISO 4217 code, only displayed in the currency style
/// * `lang` - BCP 47 language tag
///
/// # Returns
/// * `Result<String, FormatError>` - The formatted number, or the option that
///   was rejected
///
/// # Examples
/// ```
/// use intl_number_format::format_number;
///
/// let result = format_number(Some(1234.5), Some("decimal"), Some(2), None, None).unwrap();
/// assert_eq!(result, "1,234.50");
///
/// let result = format_number(Some(99.999), Some("currency"), Some(2), Some("USD"), None).unwrap();
/// assert_eq!(result, "$100.00");
/// ```
pub fn format_number(
    number: Option<f64>,
    format: Option<&str>,
    decimals: Option<u32>,
    currency: Option<&str>,
    lang: Option<&str>,
) -> Result<String> {
    let number = number.filter(|n| *n != 0.0 && !n.is_nan()).unwrap_or(0.0);

    // Locale problems are reported before any other option
    let locale = lang.unwrap_or(DEFAULT_LOCALE);
    parse_language_tag(locale)?;

    let style = match format.filter(|f| !f.is_empty()) {
        Some(style) => parse_style(style)?,
        None => FormatStyle::Decimal,
    };

    let options = NumberFormatOptions {
        style,
        fraction_digits: decimals.unwrap_or(0),
        currency: currency
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CURRENCY)
            .to_string(),
        unit: None,
        locale: locale.to_string(),
    };

    Ok(NumberFormatter::new(options)?.format(number))
}

/// A formatter with validated options and resolved locale data
///
/// Building the formatter does all validation, so formatting never fails.
///
/// Unit names come from a single English table whatever the locale, so a
/// de-DE formatter renders two days as `2 days`; only the number itself
/// follows the locale.
///
/// # Examples
/// ```
/// use intl_number_format::{FormatStyle, NumberFormatOptions, NumberFormatter};
///
/// let options = NumberFormatOptions::default()
///     .with_style(FormatStyle::Unit)
///     .with_unit("kilometer-per-hour");
/// let formatter = NumberFormatter::new(options).unwrap();
/// assert_eq!(formatter.format(50.0), "50 km/h");
/// ```
#[derive(Debug, Clone)]
pub struct NumberFormatter {
    options: NumberFormatOptions,
    settings: LocaleSettings,
    resolved_locale: String,
    currency: CurrencyInfo,
    unit: Option<UnitInfo>,
}

impl NumberFormatter {
    /// Validate `options` and load the settings of the best matching locale
    pub fn new(options: NumberFormatOptions) -> Result<Self> {
        let tag = parse_language_tag(&options.locale)?;
        let (resolved_locale, settings) = locale::resolve_locale(&tag);
        Self::build(options, resolved_locale, settings)
    }

    /// Validate `options` but render with caller-supplied locale settings
    pub fn with_locale_settings(
        options: NumberFormatOptions,
        settings: LocaleSettings,
    ) -> Result<Self> {
        let tag = parse_language_tag(&options.locale)?;
        Self::build(options, tag.to_string(), settings)
    }

    fn build(
        mut options: NumberFormatOptions,
        resolved_locale: String,
        settings: LocaleSettings,
    ) -> Result<Self> {
        // Currency and unit are checked even when the style does not show them
        options.currency = parse_currency_code(&options.currency)?;
        let currency = locale::get_currency_info(&options.currency);

        let unit = match &options.unit {
            Some(unit) => {
                let identifier = parse_unit_identifier(unit)?;
                let info = locale::get_unit_info(&identifier)
                    .ok_or_else(|| FormatError::InvalidUnit(unit.clone()))?;
                Some(info)
            }
            None if options.style == FormatStyle::Unit => return Err(FormatError::MissingUnit),
            None => None,
        };

        if options.fraction_digits > MAX_FRACTION_DIGITS {
            return Err(FormatError::InvalidFractionDigits(options.fraction_digits));
        }

        Ok(Self {
            options,
            settings,
            resolved_locale,
            currency,
            unit,
        })
    }

    /// The options after validation; the currency code is upper-cased
    pub fn options(&self) -> &NumberFormatOptions {
        &self.options
    }

    /// The validated currency and the symbol shown for it
    pub fn currency(&self) -> &CurrencyInfo {
        &self.currency
    }

    /// The id of the locale whose data is used, after fallback
    pub fn resolved_locale(&self) -> &str {
        &self.resolved_locale
    }

    /// Format a value
    ///
    /// `-0.0` and negative values that round to zero keep their minus sign.
    pub fn format(&self, value: f64) -> String {
        let negative = value.is_sign_negative() && !value.is_nan();

        let (number, is_one) = if value.is_nan() {
            (self.settings.nan.clone(), false)
        } else if value.is_infinite() {
            (self.settings.infinity.clone(), false)
        } else {
            let mut digits = DecimalDigits::from_f64(value);
            if self.options.style == FormatStyle::Percent {
                digits.shift_left(2);
            }
            digits.round_to(self.options.fraction_digits as usize);
            (self.render_digits(&digits), digits.is_one())
        };

        self.apply_style(&number, negative, is_one)
    }

    fn render_digits(&self, digits: &DecimalDigits) -> String {
        let mut result = group_integer(
            &digits.integer,
            &self.settings.grouping,
            &self.settings.group_separator,
        );
        if !digits.fraction.is_empty() {
            result.push_str(&self.settings.decimal_point);
            result.extend(digits.fraction.iter().map(|d| char::from(b'0' + d)));
        }
        result
    }

    fn apply_style(&self, number: &str, negative: bool, is_one: bool) -> String {
        let sign = if negative {
            self.settings.minus_sign.as_str()
        } else {
            ""
        };

        match self.options.style {
            FormatStyle::Decimal => format!("{}{}", sign, number),
            FormatStyle::Percent => {
                let percent = apply_pattern(&self.settings.percent_pattern, number, "");
                format!("{}{}", sign, percent)
            }
            FormatStyle::Currency => {
                let symbol = &self.currency.narrow_symbol;
                match &self.settings.currency_negative_pattern {
                    Some(pattern) if negative => apply_currency_pattern(pattern, number, symbol),
                    _ => {
                        let amount =
                            apply_currency_pattern(&self.settings.currency_pattern, number, symbol);
                        format!("{}{}", sign, amount)
                    }
                }
            }
            FormatStyle::Unit => {
                let Some(unit) = &self.unit else {
                    return format!("{}{}", sign, number);
                };
                let symbol = if is_one { &unit.one } else { &unit.other };
                if unit.attached {
                    format!("{}{}{}", sign, number, symbol)
                } else {
                    let measure = apply_pattern(&self.settings.unit_pattern, number, symbol);
                    format!("{}{}", sign, measure)
                }
            }
        }
    }
}
