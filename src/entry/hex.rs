//! Hex colour shorthand expansion for swatch answers.

/// Expand a swatch answer into a `#`-prefixed hex code.
///
/// The answer is lower-cased and one leading `#` is dropped, then:
/// - 1 digit is repeated six times (`f` -> `#ffffff`)
/// - 2 digits are repeated three times (`a1` -> `#a1a1a1`)
/// - 3 digits each get doubled (`abc` -> `#aabbcc`)
/// - anything else is kept as typed
///
/// Nothing checks that the result is a real colour; `validate` does that later.
pub fn normalize_hex(input: &str) -> String {
    let lowered = input.to_lowercase();
    let digits = lowered.strip_prefix('#').unwrap_or(&lowered);

    let expanded = match digits.chars().count() {
        1 => digits.repeat(6),
        2 => digits.repeat(3),
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        _ => digits.to_string(),
    };

    format!("#{}", expanded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_digit_fills_all_channels() {
        assert_eq!(normalize_hex("f"), "#ffffff");
        assert_eq!(normalize_hex("#0"), "#000000");
    }

    #[test]
    fn test_two_digits_repeat() {
        assert_eq!(normalize_hex("#a1"), "#a1a1a1");
    }

    #[test]
    fn test_three_digits_double_each() {
        assert_eq!(normalize_hex("abc"), "#aabbcc");
        assert_eq!(normalize_hex("00f"), "#0000ff");
    }

    #[test]
    fn test_six_digits_untouched() {
        assert_eq!(normalize_hex("#1a2b3c"), "#1a2b3c");
        assert_eq!(normalize_hex("1A2B3C"), "#1a2b3c");
    }

    #[test]
    fn test_idempotent_on_full_codes() {
        for code in ["#1a2b3c", "ffffff", "#00FF00", "deadbe"] {
            let once = normalize_hex(code);
            assert_eq!(normalize_hex(&once), once);
        }
    }

    #[test]
    fn test_malformed_passes_through() {
        assert_eq!(normalize_hex("zzzz"), "#zzzz");
        assert_eq!(normalize_hex(""), "#");
        assert_eq!(normalize_hex("##f"), "##f#f#f");
    }
}
