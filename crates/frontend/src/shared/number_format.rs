//! Number formatting for the wages input

/// Currency prefix shown in front of wages
pub const CURRENCY_PREFIX: &str = "Rp.";

/// Insert `,` thousands separators into a run of digits
///
/// # Examples
///
/// ```
/// use frontend::shared::number_format::group_thousands;
/// assert_eq!(group_thousands("1234567"), "1,234,567");
/// ```
pub fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    let chars: Vec<char> = digits.chars().rev().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result.chars().rev().collect()
}

/// Display form of the raw wages digits: "1000000" -> "Rp.1,000,000"
///
/// Empty input stays empty so the placeholder shows.
pub fn format_wages(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return String::new();
    }
    format!("{}{}", CURRENCY_PREFIX, group_thousands(&digits))
}

/// Raw digits from what the wages input shows: "Rp.1,000" -> "1000"
pub fn unformat_wages(display: &str) -> String {
    display
        .strip_prefix(CURRENCY_PREFIX)
        .unwrap_or(display)
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn test_format_wages() {
        assert_eq!(format_wages("1000000"), "Rp.1,000,000");
        assert_eq!(format_wages(""), "");
        assert_eq!(format_wages("750"), "Rp.750");
    }

    #[test]
    fn test_unformat_wages() {
        assert_eq!(unformat_wages("Rp.1,000,000"), "1000000");
        assert_eq!(unformat_wages("Rp.1,0005"), "10005");
        assert_eq!(unformat_wages("12a3"), "123");
        assert_eq!(unformat_wages("Rp."), "");
    }
}
