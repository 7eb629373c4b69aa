const NUMBER: &str = "{number}";
const SYMBOL: &str = "{symbol}";
const UNIT: &str = "{unit}";

const NO_BREAK_SPACE: char = '\u{a0}';

/// Substitute `{number}` into a percent or unit pattern
pub(super) fn apply_pattern(pattern: &str, number: &str, unit: &str) -> String {
    pattern.replace(NUMBER, number).replace(UNIT, unit)
}

/// Substitute `{number}` and `{symbol}` into a currency pattern
///
/// A symbol that touches the number with a letter (`CHF`, `XYZ`) is set apart
/// by a no-break space.
pub(super) fn apply_currency_pattern(pattern: &str, number: &str, symbol: &str) -> String {
    let symbol_then_number = format!("{}{}", SYMBOL, NUMBER);
    let number_then_symbol = format!("{}{}", NUMBER, SYMBOL);

    let spaced = if pattern.contains(&symbol_then_number)
        && symbol.chars().last().is_some_and(char::is_alphabetic)
    {
        pattern.replacen(
            &symbol_then_number,
            &format!("{}{}{}", SYMBOL, NO_BREAK_SPACE, NUMBER),
            1,
        )
    } else if pattern.contains(&number_then_symbol)
        && symbol.chars().next().is_some_and(char::is_alphabetic)
    {
        pattern.replacen(
            &number_then_symbol,
            &format!("{}{}{}", NUMBER, NO_BREAK_SPACE, SYMBOL),
            1,
        )
    } else {
        pattern.to_string()
    };

    spaced.replace(SYMBOL, symbol).replace(NUMBER, number)
}
