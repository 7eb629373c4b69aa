//! Locale support for number formatting
//!
//! This module loads the embedded locale, currency and unit tables and
//! resolves language tags to the locale settings used for rendering.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::{FormatError, Result};
use crate::types::{
    CurrencyInfo, DEFAULT_LOCALE, GroupingStrategy, LanguageTag, LocaleSettings, UnitIdentifier,
    UnitInfo,
};

/// Provides access to the embedded locale data
struct LocaleManager {
    locale_settings: HashMap<String, LocaleSettings>,
    language_defaults: HashMap<String, String>,
    currencies: HashMap<String, String>,
    units: HashMap<String, UnitInfo>,
}

// Global singleton for locale data
static LOCALE_MANAGER: OnceLock<LocaleManager> = OnceLock::new();

fn parse_table(toml_str: &str) -> Result<toml::Table> {
    toml::from_str(toml_str).map_err(|e| FormatError::LocaleData(e.to_string()))
}

fn as_table<'a>(key: &str, value: &'a toml::Value) -> Result<&'a toml::Table> {
    value
        .as_table()
        .ok_or_else(|| FormatError::LocaleData(format!("{} is not a table", key)))
}

fn string_field(table: &toml::Table, field: &str) -> Option<String> {
    table.get(field).and_then(|v| v.as_str()).map(str::to_string)
}

impl LocaleManager {
    fn empty() -> Self {
        Self {
            locale_settings: HashMap::new(),
            language_defaults: HashMap::new(),
            currencies: HashMap::new(),
            units: HashMap::new(),
        }
    }

    fn new() -> Self {
        let mut manager = Self::empty();
        manager.load_embedded_data();
        manager
    }

    /// Load every embedded table; a broken table is logged and the entries
    /// read before the error are kept
    fn load_embedded_data(&mut self) {
        let results = [
            (
                "locale_settings",
                self.parse_locale_settings(include_str!("locale/locale_settings.toml")),
            ),
            (
                "currencies",
                self.parse_currencies(include_str!("locale/currencies.toml")),
            ),
            ("units", self.parse_units(include_str!("locale/units.toml"))),
        ];

        for (table, result) in results {
            if let Err(e) = result {
                tracing::error!(table, error = %e, "failed to load embedded locale data");
            }
        }
    }

    fn parse_locale_settings(&mut self, toml_str: &str) -> Result<()> {
        let table = parse_table(toml_str)?;

        let mut base_settings = LocaleSettings::default();
        if let Some(base) = table.get("base") {
            apply_locale_settings(&mut base_settings, as_table("base", base)?)?;
        }

        if let Some(defaults) = table.get("language_defaults") {
            for (language, locale_id) in as_table("language_defaults", defaults)? {
                let locale_id = locale_id.as_str().ok_or_else(|| {
                    FormatError::LocaleData(format!("default for {} is not a string", language))
                })?;
                self.language_defaults
                    .insert(language.clone(), locale_id.to_string());
            }
        }

        for (locale_id, value) in &table {
            if locale_id == "base" || locale_id == "language_defaults" {
                continue;
            }

            let mut settings = base_settings.clone();
            apply_locale_settings(&mut settings, as_table(locale_id, value)?)?;
            self.locale_settings.insert(locale_id.clone(), settings);
        }

        Ok(())
    }

    fn parse_currencies(&mut self, toml_str: &str) -> Result<()> {
        for (code, value) in &parse_table(toml_str)? {
            let narrow = string_field(as_table(code, value)?, "narrow").ok_or_else(|| {
                FormatError::LocaleData(format!("Missing narrow symbol for {}", code))
            })?;
            self.currencies.insert(code.clone(), narrow);
        }
        Ok(())
    }

    fn parse_units(&mut self, toml_str: &str) -> Result<()> {
        for (unit, value) in &parse_table(toml_str)? {
            let table = as_table(unit, value)?;
            let other = string_field(table, "symbol").ok_or_else(|| {
                FormatError::LocaleData(format!("Missing symbol for unit {}", unit))
            })?;
            let one = string_field(table, "one").unwrap_or_else(|| other.clone());
            let attached = table
                .get("attached")
                .and_then(|v| v.as_bool())
                .unwrap_or(false);

            self.units.insert(
                unit.clone(),
                UnitInfo {
                    one,
                    other,
                    attached,
                },
            );
        }
        Ok(())
    }

    fn get() -> &'static Self {
        LOCALE_MANAGER.get_or_init(Self::new)
    }
}

/// Apply the fields present in `table` over `settings`
fn apply_locale_settings(settings: &mut LocaleSettings, table: &toml::Table) -> Result<()> {
    if let Some(decimal) = string_field(table, "decimal") {
        settings.decimal_point = decimal;
    }
    if let Some(group) = string_field(table, "group") {
        settings.group_separator = group;
    }
    if let Some(minus) = string_field(table, "minus") {
        settings.minus_sign = minus;
    }
    if let Some(infinity) = string_field(table, "infinity") {
        settings.infinity = infinity;
    }
    if let Some(nan) = string_field(table, "nan") {
        settings.nan = nan;
    }

    if let Some(grouping) = table.get("grouping").and_then(|v| v.as_array()) {
        let sizes: Vec<usize> = grouping
            .iter()
            .filter_map(|v| v.as_integer())
            .filter_map(|v| usize::try_from(v).ok())
            .filter(|v| *v > 0)
            .collect();
        let Some(&primary) = sizes.first() else {
            return Err(FormatError::LocaleData(
                "grouping needs at least one positive size".to_string(),
            ));
        };
        settings.grouping = GroupingStrategy {
            primary,
            secondary: sizes.get(1).copied(),
            min_grouping: settings.grouping.min_grouping,
        };
    }
    if let Some(min_grouping) = table.get("min_grouping").and_then(|v| v.as_integer()) {
        settings.grouping.min_grouping = usize::try_from(min_grouping)
            .map_err(|_| FormatError::LocaleData(format!("bad min_grouping {}", min_grouping)))?;
    }

    if let Some(pattern) = string_field(table, "currency_pattern") {
        settings.currency_pattern = pattern;
    }
    if let Some(pattern) = string_field(table, "currency_negative_pattern") {
        settings.currency_negative_pattern = Some(pattern);
    }
    if let Some(pattern) = string_field(table, "percent_pattern") {
        settings.percent_pattern = pattern;
    }
    if let Some(pattern) = string_field(table, "unit_pattern") {
        settings.unit_pattern = pattern;
    }

    Ok(())
}

/// Get locale settings by locale identifier (e.g., "en-US", "de-DE")
pub fn get_locale_settings(locale_id: &str) -> Option<LocaleSettings> {
    LocaleManager::get().locale_settings.get(locale_id).cloned()
}

/// Resolve a parsed language tag to the best available locale
///
/// Tries `language-REGION`, then the default region of the language, then
/// [`DEFAULT_LOCALE`]. Returns the id of the locale actually used.
pub fn resolve_locale(tag: &LanguageTag) -> (String, LocaleSettings) {
    let manager = LocaleManager::get();

    if let Some(locale_id) = tag.locale_id() {
        if let Some(settings) = manager.locale_settings.get(&locale_id) {
            return (locale_id, settings.clone());
        }
        tracing::debug!(locale = %locale_id, "no data for region, trying language default");
    }

    if let Some(locale_id) = manager.language_defaults.get(&tag.language) {
        if let Some(settings) = manager.locale_settings.get(locale_id) {
            tracing::debug!(tag = %tag, locale = %locale_id, "using language default");
            return (locale_id.clone(), settings.clone());
        }
    }

    tracing::debug!(tag = %tag, fallback = DEFAULT_LOCALE, "unsupported locale, using default");
    let settings = manager
        .locale_settings
        .get(DEFAULT_LOCALE)
        .cloned()
        .unwrap_or_default();
    (DEFAULT_LOCALE.to_string(), settings)
}

/// Look up the narrow symbol of a currency code
///
/// Codes without a known symbol display as the code itself.
pub fn get_currency_info(code: &str) -> CurrencyInfo {
    let narrow_symbol = match LocaleManager::get().currencies.get(code) {
        Some(symbol) => symbol.clone(),
        None => {
            tracing::debug!(currency = code, "no narrow symbol, displaying code");
            code.to_string()
        }
    };
    CurrencyInfo {
        code: code.to_string(),
        narrow_symbol,
    }
}

/// Look up the short display form of a unit
///
/// Compound units without their own entry are written as `numerator/denominator`.
pub fn get_unit_info(unit: &UnitIdentifier) -> Option<UnitInfo> {
    let units = &LocaleManager::get().units;

    if let Some(info) = units.get(&unit.to_string()) {
        return Some(info.clone());
    }

    let numerator = units.get(&unit.numerator)?;
    match &unit.denominator {
        None => Some(numerator.clone()),
        Some(denominator) => {
            let denominator = units.get(denominator)?;
            Some(UnitInfo {
                one: format!("{}/{}", numerator.one, denominator.one),
                other: format!("{}/{}", numerator.other, denominator.one),
                attached: false,
            })
        }
    }
}

/// List all available locale identifiers, sorted
pub fn list_available_locales() -> Vec<String> {
    let mut locales: Vec<String> = LocaleManager::get()
        .locale_settings
        .keys()
        .cloned()
        .collect();
    locales.sort();
    locales
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_language_tag;

    #[test]
    fn test_locale_loading() {
        let locales = list_available_locales();
        assert!(locales.len() >= 16, "Should have loaded the shipped locales");
        assert!(!locales.iter().any(|l| l == "base" || l == "language_defaults"));

        let en_us = get_locale_settings("en-US").expect("Should have en-US locale");
        assert_eq!(en_us.decimal_point, ".");
        assert_eq!(en_us.group_separator, ",");
    }

    #[test]
    fn test_base_settings_are_inherited() {
        let de = get_locale_settings("de-DE").unwrap();
        assert_eq!(de.decimal_point, ",");
        assert_eq!(de.group_separator, ".");
        assert_eq!(de.minus_sign, "-");
        assert_eq!(de.unit_pattern, "{number} {unit}");

        let es = get_locale_settings("es-ES").unwrap();
        assert_eq!(es.grouping.min_grouping, 2);
        assert_eq!(es.grouping.primary, 3);

        let en_in = get_locale_settings("en-IN").unwrap();
        assert_eq!(en_in.grouping.secondary, Some(2));
    }

    fn data_error(message: &str) -> Result<()> {
        Err(FormatError::LocaleData(message.to_string()))
    }

    #[test]
    fn test_base_table_is_overridable() {
        let mut manager = LocaleManager::empty();
        let data = r#"
            [base]
            minus = "\u2212"
            unit_pattern = "{number}\u00A0{unit}"

            [language_defaults]
            xx = "xx-XX"

            [xx-XX]
            decimal = ","
            group = "."

            [yy-YY]
            minus = "-"
            grouping = [3, 2]
            min_grouping = 2
        "#;
        assert_eq!(manager.parse_locale_settings(data), Ok(()));

        let xx = &manager.locale_settings["xx-XX"];
        assert_eq!(xx.minus_sign, "\u{2212}");
        assert_eq!(xx.decimal_point, ",");
        assert_eq!(xx.unit_pattern, "{number}\u{a0}{unit}");
        assert_eq!(xx.percent_pattern, "{number}%");

        let yy = &manager.locale_settings["yy-YY"];
        assert_eq!(yy.minus_sign, "-");
        assert_eq!(yy.decimal_point, ".");
        assert_eq!(
            yy.grouping,
            GroupingStrategy {
                primary: 3,
                secondary: Some(2),
                min_grouping: 2,
            }
        );

        assert_eq!(manager.language_defaults["xx"], "xx-XX");
        assert!(!manager.locale_settings.contains_key("base"));
    }

    #[test]
    fn test_bad_locale_settings() {
        let mut manager = LocaleManager::empty();
        assert_eq!(
            manager.parse_locale_settings("[aa-AA]\ngrouping = [0, -3]\n"),
            data_error("grouping needs at least one positive size")
        );
        assert_eq!(
            manager.parse_locale_settings("[aa-AA]\nmin_grouping = -1\n"),
            data_error("bad min_grouping -1")
        );
        assert_eq!(
            manager.parse_locale_settings("aa-AA = 5\n"),
            data_error("aa-AA is not a table")
        );
        assert_eq!(
            manager.parse_locale_settings("base = \"en\"\n"),
            data_error("base is not a table")
        );
        assert_eq!(
            manager.parse_locale_settings("[language_defaults]\nxx = 1\n"),
            data_error("default for xx is not a string")
        );
        assert!(matches!(
            manager.parse_locale_settings("[aa-AA\ndecimal = ','"),
            Err(FormatError::LocaleData(_))
        ));
        assert!(manager.locale_settings.is_empty());
    }

    #[test]
    fn test_bad_currency_and_unit_tables() {
        let mut manager = LocaleManager::empty();
        assert_eq!(
            manager.parse_currencies("[AAA]\nnarrow = \"a\"\n\n[XTS]\nsymbol = \"x\"\n"),
            data_error("Missing narrow symbol for XTS")
        );
        // Entries before the broken one stay loaded
        assert_eq!(manager.currencies["AAA"], "a");

        assert_eq!(
            manager.parse_currencies("EUR = \"e\"\n"),
            data_error("EUR is not a table")
        );
        assert_eq!(
            manager.parse_units("[parsec]\none = \"pc\"\n"),
            data_error("Missing symbol for unit parsec")
        );
        assert!(matches!(
            manager.parse_units("[meter\n"),
            Err(FormatError::LocaleData(_))
        ));
        assert!(manager.units.is_empty());
    }

    #[test]
    fn test_resolve_locale_fallback() {
        let tag = parse_language_tag("de-AT").unwrap();
        assert_eq!(resolve_locale(&tag).0, "de-DE");

        let tag = parse_language_tag("fr").unwrap();
        assert_eq!(resolve_locale(&tag).0, "fr-FR");

        let tag = parse_language_tag("tlh-KX").unwrap();
        assert_eq!(resolve_locale(&tag).0, "en-US");

        let tag = parse_language_tag("en-GB").unwrap();
        assert_eq!(resolve_locale(&tag).0, "en-GB");
    }

    #[test]
    fn test_currency_lookup() {
        assert_eq!(get_currency_info("USD").narrow_symbol, "$");
        assert_eq!(get_currency_info("EUR").narrow_symbol, "€");
        assert_eq!(get_currency_info("CHF").narrow_symbol, "CHF");
    }

    #[test]
    fn test_unit_lookup() {
        let day = UnitIdentifier {
            numerator: "day".to_string(),
            denominator: None,
        };
        let info = get_unit_info(&day).unwrap();
        assert_eq!(info.one, "day");
        assert_eq!(info.other, "days");

        let speed = UnitIdentifier {
            numerator: "kilometer".to_string(),
            denominator: Some("hour".to_string()),
        };
        assert_eq!(get_unit_info(&speed).unwrap().other, "km/h");

        let consumption = UnitIdentifier {
            numerator: "liter".to_string(),
            denominator: Some("kilometer".to_string()),
        };
        assert_eq!(get_unit_info(&consumption).unwrap().other, "L/km");

        let mph = UnitIdentifier {
            numerator: "mile".to_string(),
            denominator: Some("hour".to_string()),
        };
        assert_eq!(get_unit_info(&mph).unwrap().other, "mph");

        let bogus = UnitIdentifier {
            numerator: "furlong".to_string(),
            denominator: None,
        };
        assert!(get_unit_info(&bogus).is_none());
    }
}
