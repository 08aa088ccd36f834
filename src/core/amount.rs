//! Korean won amounts such as "1억 2,000만원" and their canonical value in
//! man-won (10,000 won) units.

const EOK: u64 = 10_000;
const CHEON_MAN: u64 = 1_000;
const BAEK_MAN: u64 = 100;

/// Parse an amount into man-won, falling back to 0 for unreadable text.
///
/// Only the part before the first `(` is read, so a capped amount such as
/// "2,000만(3,000만)" parses as its minimum.
pub fn parse_amount(text: &str) -> u64 {
    try_parse_amount(text).unwrap_or(0)
}

/// Like [`parse_amount`] but returns `None` when no number could be read.
pub fn try_parse_amount(text: &str) -> Option<u64> {
    let mut clean: String = text
        .chars()
        .filter(|c| *c != '원' && *c != ',' && !c.is_whitespace())
        .collect();
    if let Some(idx) = clean.find('(') {
        clean.truncate(idx);
    }

    if clean.contains('억') {
        let mut parts = clean.split('억');
        let eok = parts.next().and_then(leading_int);
        let rest = parts.next().unwrap_or_default();
        let remainder = if rest.contains('천') {
            leading_int(&rest.replacen('천', "", 1)).map(|v| v.saturating_mul(CHEON_MAN))
        } else if rest.contains('만') {
            leading_int(&rest.replacen('만', "", 1))
        } else {
            None
        };
        if eok.is_none() && remainder.is_none() {
            return None;
        }
        let value = eok
            .unwrap_or(0)
            .saturating_mul(EOK)
            .saturating_add(remainder.unwrap_or(0));
        Some(value)
    } else if clean.contains("천만") {
        leading_int(&clean.replacen("천만", "", 1)).map(|v| v.saturating_mul(CHEON_MAN))
    } else if clean.contains("백만") {
        leading_int(&clean.replacen("백만", "", 1)).map(|v| v.saturating_mul(BAEK_MAN))
    } else if clean.contains('만') {
        leading_int(&clean.replacen('만', "", 1))
    } else {
        leading_int(&clean)
    }
}

/// Render a man-won value as "N억 M,MMM만원".
pub fn format_amount(value: u64) -> String {
    if value == 0 {
        return "0원".to_string();
    }
    let eok = value / EOK;
    let man = value % EOK;

    let mut out = String::new();
    if eok > 0 {
        out.push_str(&format!("{eok}억 "));
    }
    if man > 0 {
        out.push_str(&group_thousands(man));
        out.push('만');
    }
    format!("{}원", out.trim_end())
}

fn leading_int(text: &str) -> Option<u64> {
    let end = text
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());
    let digits = &text[..end];
    if digits.is_empty() {
        return None;
    }
    // Only overflow can fail here.
    Some(digits.parse().unwrap_or(u64::MAX))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_documented_examples() {
        assert_eq!(parse_amount("1억 2,000만원"), 12_000);
        assert_eq!(parse_amount("7,500만"), 7_500);
        assert_eq!(parse_amount("0원"), 0);
        assert_eq!(parse_amount(""), 0);
    }

    #[test]
    fn parses_magnitude_units() {
        assert_eq!(parse_amount("3천만원"), 3_000);
        assert_eq!(parse_amount("5백만원"), 500);
        assert_eq!(parse_amount("2억원"), 20_000);
        assert_eq!(parse_amount("1억5천만원"), 15_000);
        assert_eq!(parse_amount("1,000"), 1_000);
    }

    #[test]
    fn reads_only_the_minimum_of_a_capped_amount() {
        assert_eq!(parse_amount("2,000만(3,000만)"), 2_000);
        assert_eq!(parse_amount("3,000만"), 3_000);
    }

    #[test]
    fn unreadable_text_is_zero_but_distinguishable() {
        assert_eq!(parse_amount("세부보장참조"), 0);
        assert_eq!(try_parse_amount("세부보장참조"), None);
        assert_eq!(try_parse_amount("0원"), Some(0));
    }

    #[test]
    fn formats_with_eok_and_separators() {
        assert_eq!(format_amount(0), "0원");
        assert_eq!(format_amount(12_000), "1억 2,000만원");
        assert_eq!(format_amount(10_000), "1억원");
        assert_eq!(format_amount(7_500), "7,500만원");
        assert_eq!(format_amount(500), "500만원");
        assert_eq!(format_amount(123_456_789), "12345억 6,789만원");
    }

    #[test]
    fn overlong_digit_runs_saturate() {
        assert_eq!(parse_amount("10,000,000,000,000,000,000만원"), u64::MAX);
        assert_eq!(try_parse_amount("99999999999999999999999억"), Some(u64::MAX));
    }

    proptest! {
        #[test]
        fn format_then_parse_round_trips(value in 0u64..10_000_000_000) {
            prop_assert_eq!(parse_amount(&format_amount(value)), value);
        }
    }
}
