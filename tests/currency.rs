#[cfg(test)]
mod tests {
    use intl_number_format::{
        FormatError, FormatStyle, LocaleSettings, NumberFormatOptions, NumberFormatter,
        format_number,
    };

    // Helper function to format a currency amount in a locale
    fn fmt_currency(
        value: f64,
        decimals: u32,
        code: &str,
        lang: &str,
    ) -> Result<String, FormatError> {
        format_number(
            Some(value),
            Some("currency"),
            Some(decimals),
            Some(code),
            Some(lang),
        )
    }

    #[test]
    fn test_currency_rounding() -> Result<(), FormatError> {
        assert_eq!(fmt_currency(99.999, 2, "USD", "en-US")?, "$100.00");
        assert_eq!(fmt_currency(1234.5, 2, "USD", "en-US")?, "$1,234.50");
        assert_eq!(fmt_currency(1234.5, 0, "USD", "en-US")?, "$1,235");
        Ok(())
    }

    #[test]
    fn test_default_currency_is_usd() -> Result<(), FormatError> {
        assert_eq!(
            format_number(Some(5.0), Some("currency"), Some(2), None, None)?,
            "$5.00"
        );
        assert_eq!(
            format_number(Some(5.0), Some("currency"), Some(2), Some(""), None)?,
            "$5.00"
        );
        Ok(())
    }

    #[test]
    fn test_narrow_symbols() -> Result<(), FormatError> {
        assert_eq!(fmt_currency(10.0, 2, "CAD", "en-US")?, "$10.00");
        assert_eq!(fmt_currency(10.0, 2, "EUR", "en-US")?, "€10.00");
        assert_eq!(fmt_currency(10.0, 0, "JPY", "ja-JP")?, "¥10");
        assert_eq!(fmt_currency(10.0, 2, "GBP", "en-GB")?, "£10.00");
        assert_eq!(fmt_currency(10.0, 2, "inr", "en-IN")?, "₹10.00");
        Ok(())
    }

    #[test]
    fn test_negative_amounts() -> Result<(), FormatError> {
        assert_eq!(fmt_currency(-5.0, 2, "USD", "en-US")?, "-$5.00");
        assert_eq!(fmt_currency(-1234.5, 2, "EUR", "de-DE")?, "-1.234,50\u{a0}€");
        assert_eq!(fmt_currency(-1234.5, 2, "EUR", "nl-NL")?, "€\u{a0}-1.234,50");
        assert_eq!(fmt_currency(-3.0, 2, "SEK", "sv-SE")?, "\u{2212}3,00\u{a0}kr");
        Ok(())
    }

    #[test]
    fn test_symbol_placement_per_locale() -> Result<(), FormatError> {
        assert_eq!(fmt_currency(1234.5, 2, "EUR", "de-DE")?, "1.234,50\u{a0}€");
        assert_eq!(fmt_currency(1234.5, 2, "EUR", "fr-FR")?, "1\u{202f}234,50\u{a0}€");
        assert_eq!(fmt_currency(1234.5, 2, "BRL", "pt-BR")?, "R$\u{a0}1.234,50");
        assert_eq!(fmt_currency(1234.5, 2, "EUR", "nl-NL")?, "€\u{a0}1.234,50");
        assert_eq!(fmt_currency(1234.5, 2, "MXN", "es-MX")?, "$1,234.50");
        Ok(())
    }

    #[test]
    fn test_alphabetic_symbols_are_spaced() -> Result<(), FormatError> {
        assert_eq!(fmt_currency(12.0, 2, "CHF", "en-US")?, "CHF\u{a0}12.00");
        assert_eq!(fmt_currency(1.0, 2, "XYZ", "en-US")?, "XYZ\u{a0}1.00");
        assert_eq!(fmt_currency(1.0, 2, "xyz", "de-DE")?, "1,00\u{a0}XYZ");
        Ok(())
    }

    #[test]
    fn test_malformed_currency_codes() {
        for code in ["US", "DOLLAR", "U5D"] {
            assert_eq!(
                fmt_currency(1.0, 2, code, "en-US"),
                Err(FormatError::InvalidCurrency(code.to_string()))
            );
        }
    }

    #[test]
    fn test_currency_validated_in_other_styles() {
        assert_eq!(
            format_number(Some(1.0), Some("decimal"), None, Some("EURO"), None),
            Err(FormatError::InvalidCurrency("EURO".to_string()))
        );
    }

    #[test]
    fn test_custom_currency_pattern() {
        let settings = LocaleSettings::default()
            .with_currency_pattern("{number} {symbol}")
            .with_currency_negative_pattern("({symbol}{number})");
        let options = NumberFormatOptions::default()
            .with_style(FormatStyle::Currency)
            .with_currency("EUR")
            .with_fraction_digits(2);
        let formatter = NumberFormatter::with_locale_settings(options, settings).unwrap();

        assert_eq!(formatter.format(1234.56), "1,234.56 €");
        assert_eq!(formatter.format(-1234.56), "(€1,234.56)");
    }
}
