//! Type definitions for locale-aware number formatting
//!
//! This module defines the option set accepted by the formatter and the
//! locale settings it renders with.

use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;

/// The locale used when no language tag is supplied
pub const DEFAULT_LOCALE: &str = "en-US";

/// The currency used when no currency code is supplied
pub const DEFAULT_CURRENCY: &str = "USD";

/// Upper bound on fraction digits, same as the platform number formatters
pub const MAX_FRACTION_DIGITS: u32 = 100;

/// Formatting mode controlling symbol and scaling conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatStyle {
    /// Plain number (1,234.5)
    #[default]
    Decimal,
    /// Number with a currency symbol ($1,234.50)
    Currency,
    /// Number multiplied by 100 with a percent sign (50%)
    Percent,
    /// Number followed by a measurement unit (16 km)
    Unit,
}

impl FormatStyle {
    /// The option string naming this style
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatStyle::Decimal => "decimal",
            FormatStyle::Currency => "currency",
            FormatStyle::Percent => "percent",
            FormatStyle::Unit => "unit",
        }
    }
}

impl fmt::Display for FormatStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatStyle {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse_style(s)
    }
}

/// Digit grouping rules of a locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupingStrategy {
    /// Size of the group closest to the decimal point
    pub primary: usize,
    /// Size of every further group, when it differs from the primary one
    pub secondary: Option<usize>,
    /// Grouping only starts once the integer part has at least
    /// `primary + min_grouping` digits
    pub min_grouping: usize,
}

impl Default for GroupingStrategy {
    fn default() -> Self {
        Self {
            primary: 3,
            secondary: None,
            min_grouping: 1,
        }
    }
}

/// Locale-specific symbols and patterns
///
/// Patterns use `{number}`, `{symbol}` and `{unit}` placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleSettings {
    /// Separator between integer and fraction digits
    pub decimal_point: String,
    /// Separator inserted between digit groups
    pub group_separator: String,
    /// Sign written before negative values
    pub minus_sign: String,
    /// Rendering of infinite values, without sign
    pub infinity: String,
    /// Rendering of NaN
    pub nan: String,
    /// Digit grouping sizes
    pub grouping: GroupingStrategy,
    /// Currency layout, e.g. `{symbol}{number}` or `{number} {symbol}`
    pub currency_pattern: String,
    /// Used for negative currency amounts; the minus sign goes in front of the
    /// whole rendering when absent
    pub currency_negative_pattern: Option<String>,
    /// Percent layout, e.g. `{number}%`
    pub percent_pattern: String,
    /// Layout of non-attached units, e.g. `{number} {unit}`
    pub unit_pattern: String,
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            decimal_point: ".".to_string(),
            group_separator: ",".to_string(),
            minus_sign: "-".to_string(),
            infinity: "∞".to_string(),
            nan: "NaN".to_string(),
            grouping: GroupingStrategy::default(),
            currency_pattern: "{symbol}{number}".to_string(),
            currency_negative_pattern: None,
            percent_pattern: "{number}%".to_string(),
            unit_pattern: "{number} {unit}".to_string(),
        }
    }
}

impl LocaleSettings {
    /// Set the decimal separator
    pub fn with_decimal_point(mut self, decimal_point: impl Into<String>) -> Self {
        self.decimal_point = decimal_point.into();
        self
    }

    /// Set the group separator
    pub fn with_group_separator(mut self, separator: impl Into<String>) -> Self {
        self.group_separator = separator.into();
        self
    }

    /// Set the minus sign
    pub fn with_minus_sign(mut self, minus_sign: impl Into<String>) -> Self {
        self.minus_sign = minus_sign.into();
        self
    }

    /// Set the digit grouping sizes
    pub fn with_grouping(mut self, grouping: GroupingStrategy) -> Self {
        self.grouping = grouping;
        self
    }

    /// Set the currency layout
    pub fn with_currency_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.currency_pattern = pattern.into();
        self
    }

    /// Set a dedicated layout for negative currency amounts
    pub fn with_currency_negative_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.currency_negative_pattern = Some(pattern.into());
        self
    }

    /// Set the percent layout
    pub fn with_percent_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.percent_pattern = pattern.into();
        self
    }

    /// Set the unit layout
    pub fn with_unit_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.unit_pattern = pattern.into();
        self
    }
}

/// Display data for an ISO 4217 currency
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyInfo {
    /// Upper-case three letter code
    pub code: String,
    /// Compact glyph, e.g. `$` rather than `US$`
    pub narrow_symbol: String,
}

/// Short display data for a measurement unit
#[derive(Debug, Clone, PartialEq)]
pub struct UnitInfo {
    /// Symbol used when the rendered value is exactly one
    pub one: String,
    /// Symbol used for every other value
    pub other: String,
    /// Glued to the number without the locale's unit spacing (`5°C`)
    pub attached: bool,
}

/// Resolved formatting options
#[derive(Debug, Clone, PartialEq)]
pub struct NumberFormatOptions {
    /// Rendering style
    pub style: FormatStyle,
    /// Exact number of digits after the decimal point
    pub fraction_digits: u32,
    /// ISO 4217 code, validated in every style
    pub currency: String,
    /// Unit identifier such as `kilometer` or `kilometer-per-hour`
    pub unit: Option<String>,
    /// BCP 47 language tag
    pub locale: String,
}

impl Default for NumberFormatOptions {
    fn default() -> Self {
        Self {
            style: FormatStyle::Decimal,
            fraction_digits: 0,
            currency: DEFAULT_CURRENCY.to_string(),
            unit: None,
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl NumberFormatOptions {
    /// Set the rendering style
    pub fn with_style(mut self, style: FormatStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the exact number of fraction digits
    pub fn with_fraction_digits(mut self, digits: u32) -> Self {
        self.fraction_digits = digits;
        self
    }

    /// Set the currency code
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Set the unit identifier
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Set the language tag
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }
}

/// A parsed BCP 47 language tag
///
/// Subtags are stored in canonical case: lower-case language, title-case
/// script and upper-case region.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LanguageTag {
    /// Primary language subtag
    pub language: String,
    /// Four letter script subtag
    pub script: Option<String>,
    /// Two letter or three digit region subtag
    pub region: Option<String>,
    /// Registered variants such as `1996`
    pub variants: Vec<String>,
    /// Singleton extensions such as `u-nu-latn`, keyed by their singleton
    pub extensions: Vec<(char, Vec<String>)>,
    /// Subtags following `-x-`
    pub private_use: Vec<String>,
}

impl LanguageTag {
    /// The `language-REGION` id used to look up locale data
    pub fn locale_id(&self) -> Option<String> {
        self.region
            .as_ref()
            .map(|region| format!("{}-{}", self.language, region))
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        if let Some(script) = &self.script {
            write!(f, "-{}", script)?;
        }
        if let Some(region) = &self.region {
            write!(f, "-{}", region)?;
        }
        for variant in &self.variants {
            write!(f, "-{}", variant)?;
        }
        for (singleton, subtags) in &self.extensions {
            write!(f, "-{}", singleton)?;
            for subtag in subtags {
                write!(f, "-{}", subtag)?;
            }
        }
        if !self.private_use.is_empty() {
            f.write_str("-x")?;
            for subtag in &self.private_use {
                write!(f, "-{}", subtag)?;
            }
        }
        Ok(())
    }
}

/// A unit identifier, either simple (`kilometer`) or compound
/// (`kilometer-per-hour`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitIdentifier {
    /// The measured unit
    pub numerator: String,
    /// The unit after `-per-`, if any
    pub denominator: Option<String>,
}

impl fmt::Display for UnitIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.denominator {
            Some(denominator) => write!(f, "{}-per-{}", self.numerator, denominator),
            None => f.write_str(&self.numerator),
        }
    }
}
