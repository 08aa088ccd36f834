use std::sync::LazyLock;

use regex::Regex;

/// An amount with a won unit, or the "see detail breakdown" marker.
pub static AMOUNT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9,]+(?:억|천|백|십)*(?:만원|억원|만|억)|세부보장참조")
        .expect("valid amount pattern")
});

static DIGITS_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("valid digit pattern"));

const SHORT_LINE_CHARS: usize = 5;

pub fn has_amount(line: &str) -> bool {
    AMOUNT_PATTERN.is_match(line)
}

/// Re-join table rows that wrapped across several text lines.
///
/// A line without an amount is held and followed by the next lines until the
/// joined text carries one. Blank lines end a pending row.
pub fn merge_wrapped_lines(lines: &[&str]) -> Vec<String> {
    let mut merged = Vec::new();
    let mut pending = String::new();

    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if !pending.is_empty() {
                merged.push(std::mem::take(&mut pending));
            }
            continue;
        }

        let line_has_amount = has_amount(trimmed);

        if !pending.is_empty() {
            pending.push(' ');
            pending.push_str(trimmed);
            if line_has_amount || has_amount(&pending) {
                merged.push(std::mem::take(&mut pending));
            }
        } else if line_has_amount
            || trimmed.chars().count() < SHORT_LINE_CHARS
            || DIGITS_ONLY.is_match(trimmed)
        {
            merged.push(trimmed.to_string());
        } else {
            pending = trimmed.to_string();
        }
    }

    if !pending.is_empty() {
        merged.push(pending);
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn detects_amounts_and_reference_marker() {
        assert!(has_amount("암진단비 1,000만원"));
        assert!(has_amount("질병사망 1억"));
        assert!(has_amount("수술비 5천만원"));
        assert!(has_amount("26종 세부보장참조"));
        assert!(!has_amount("보험료 12,300원"));
        assert!(!has_amount("암 통합치료비(기본형)"));
    }

    #[test]
    fn joins_wrapped_rows() {
        let lines = [
            "암 통합치료비(기본형)",
            "(암중점치료기관(상급종합병원 포함)) 1억원 35,000원",
            "질병사망 1,000만원",
        ];
        assert_eq!(
            merge_wrapped_lines(&lines),
            vec![
                "암 통합치료비(기본형) (암중점치료기관(상급종합병원 포함)) 1억원 35,000원".to_string(),
                "질병사망 1,000만원".to_string(),
            ]
        );
    }

    #[test]
    fn short_and_numeric_lines_stand_alone() {
        let lines = ["10", "기타", "12345", "암진단비 500만원"];
        assert_eq!(
            merge_wrapped_lines(&lines),
            vec!["10", "기타", "12345", "암진단비 500만원"]
        );
    }

    #[test]
    fn blank_line_flushes_pending_row() {
        let lines = ["가입담보 안내문구", "", "암진단비 500만원"];
        assert_eq!(
            merge_wrapped_lines(&lines),
            vec!["가입담보 안내문구", "암진단비 500만원"]
        );
    }

    #[test]
    fn unterminated_row_is_kept() {
        let lines = ["첫번째 줄입니다", "두번째 줄입니다"];
        assert_eq!(
            merge_wrapped_lines(&lines),
            vec!["첫번째 줄입니다 두번째 줄입니다"]
        );
    }
}
