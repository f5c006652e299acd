/// Utilities for date text entry
///
/// Dates are typed as `dd/mm/yyyy` text; the mask only arranges digits.

/// Apply the `##/##/####` mask to whatever the user typed.
///
/// Non-digits are dropped, at most eight digits are kept and slashes are
/// inserted after the day and month groups.
/// Example: "01022023" -> "01/02/2023", "0102" -> "01/02"
pub fn mask_date(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(|c| c.is_ascii_digit()).take(8).collect();
    let mut masked = String::with_capacity(10);
    for (i, c) in digits.iter().enumerate() {
        if i == 2 || i == 4 {
            masked.push('/');
        }
        masked.push(*c);
    }
    masked
}

/// Keep only ASCII digits (postal code, weight, height)
pub fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_date() {
        assert_eq!(mask_date("01022023"), "01/02/2023");
        assert_eq!(mask_date("01/02/2023"), "01/02/2023");
        assert_eq!(mask_date("0102"), "01/02");
        assert_eq!(mask_date("010"), "01/0");
        assert_eq!(mask_date("1"), "1");
    }

    #[test]
    fn test_mask_date_drops_extra_input() {
        assert_eq!(mask_date("31-12-2024 extra 99"), "31/12/2024");
        assert_eq!(mask_date("abc"), "");
        assert_eq!(mask_date(""), "");
    }

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("40 115"), "40115");
        assert_eq!(digits_only("-7.5kg"), "75");
    }
}
