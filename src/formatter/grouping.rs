use crate::types::GroupingStrategy;

/// Render integer digits with the locale's group separators
///
/// Groups are counted from the decimal point: one primary group, then
/// secondary groups (Indian style `12,34,567`). Nothing is grouped until the
/// integer part reaches `primary + min_grouping` digits.
pub(super) fn group_integer(digits: &[u8], grouping: &GroupingStrategy, separator: &str) -> String {
    let primary = grouping.primary.max(1);
    let secondary = grouping.secondary.unwrap_or(primary).max(1);

    let mut result = String::with_capacity(digits.len() + digits.len() / primary * separator.len());
    if digits.len() < primary + grouping.min_grouping.max(1) {
        result.extend(digits.iter().map(|d| char::from(b'0' + d)));
        return result;
    }

    let mut groups: Vec<&[u8]> = Vec::new();
    let mut end = digits.len();
    let mut size = primary;
    while end > size {
        groups.push(&digits[end - size..end]);
        end -= size;
        size = secondary;
    }
    groups.push(&digits[..end]);

    for (i, group) in groups.iter().rev().enumerate() {
        if i > 0 {
            result.push_str(separator);
        }
        result.extend(group.iter().map(|d| char::from(b'0' + d)));
    }
    result
}
