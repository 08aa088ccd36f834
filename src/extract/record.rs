use std::sync::LazyLock;

use regex::Regex;

use crate::core::model::RawCoverageRecord;

/// Literal shown instead of an amount when the row is broken down elsewhere.
pub const DETAIL_REFERENCE: &str = "세부보장참조";

/// Rows starting with this word point at a breakdown table, not a coverage.
const DETAIL_PREFIX: &str = "세부보장";

/// Phrases that only occur in disclaimers, legal boilerplate and table headers.
const DENY_LIST: &[&str] = &[
    "해당 상품은", "경우", "따라", "법에", "지급하여", "포함되어", "보호법",
    "해약환급금", "예시표", "적용이율", "최저보증", "평균공시",
    "가입금액인", "합계", "점검",
    "참고", "확인하시기", "바랍니다", "입니다", "됩니다",
    "최초계약", "경과시점", "감액적용", "면책",
    "법률상", "부담하여", "손해를", "배상책임을",
    "이전 진단", "이전 수술", "이전 치료",
    "같은 질병", "같은 종류", "반은 경",
    "※", "보장개시", "납입면제",
    "남성", "여성", "만기", "가입금액",
];

/// Category labels printed in the first table column.
const CATEGORY_LABELS: &[&str] = &[
    "기본계약", "3대진단", "치료비", "수술비", "입원비", "배상책임",
    "후유장해", "기타", "2대진단", "질병", "상해", "운전자",
];

/// Endings of Korean sentences; a "name" ending with one is stray prose.
const SENTENCE_ENDINGS: &[char] = &['다', '요', '음', '함', '는', '은'];

const MAX_NAME_CHARS: usize = 120;

/// Sample placeholders such as "00만원" in example tables, not real amounts.
static PLACEHOLDER_AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^0-9,])00만?원").expect("valid placeholder pattern")
});

static UNIT_AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9,]+(?:억|천|백|십)*(?:만원|억원|만|억)").expect("valid amount pattern")
});

static WON_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9,]+(?:천|백|십)?원").expect("valid won pattern"));

static PREMIUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9,]+").expect("valid premium pattern"));

static PERIOD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)[0-9]+\s*년\s*/?.*").expect("valid period pattern"));

static AGE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+(?:년|세|월)\s*/?\s*\d*(?:년|세|월)?\s*").expect("valid age prefix pattern")
});

static NUMBER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\s+").expect("valid number prefix pattern"));

static BULLET_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ㄴ\-•·\s]+").expect("valid bullet pattern"));

static TRAILING_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.\s]+$").expect("valid trailing pattern"));

static LEADING_PAREN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\([^)]*\)").expect("valid paren pattern"));

static TRAILING_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([가-힣])\d+$").expect("valid trailing digit pattern"));

pub fn is_boilerplate(line: &str) -> bool {
    DENY_LIST.iter().any(|phrase| line.contains(phrase)) || PLACEHOLDER_AMOUNT.is_match(line)
}

/// Parse one merged line into a coverage record.
///
/// Returns `None` for boilerplate, rows without an amount, and names that
/// look like prose.
pub fn parse_coverage_line(line: &str, sequence_id: usize) -> Option<RawCoverageRecord> {
    let trimmed = line.trim();
    if trimmed.is_empty() || is_boilerplate(trimmed) || trimmed.starts_with(DETAIL_PREFIX) {
        return None;
    }

    let (start, end) = locate_amount(trimmed)?;

    let amount = trimmed[start..end].to_string();
    let name = clean_name(&trimmed[..start]);
    let (premium, period) = parse_suffix(&trimmed[end..]);

    if !is_plausible_name(&name) {
        return None;
    }

    Some(RawCoverageRecord {
        sequence_id,
        name,
        amount,
        premium,
        period,
        original: trimmed.to_string(),
    })
}

/// Byte span of the first amount: unit amounts, then plain won, then the
/// reference marker.
fn locate_amount(line: &str) -> Option<(usize, usize)> {
    UNIT_AMOUNT
        .find(line)
        .or_else(|| WON_AMOUNT.find(line))
        .map(|m| (m.start(), m.end()))
        .or_else(|| {
            line.find(DETAIL_REFERENCE)
                .map(|idx| (idx, idx + DETAIL_REFERENCE.len()))
        })
}

/// Strip table decorations from the text in front of the amount.
pub fn clean_name(raw: &str) -> String {
    let mut name = raw.trim().to_string();

    name = AGE_PREFIX.replace(&name, "").trim().to_string();
    name = NUMBER_PREFIX.replace(&name, "").trim().to_string();

    for label in CATEGORY_LABELS {
        if let Some(rest) = name.strip_prefix(label) {
            if rest.starts_with(|c: char| c.is_whitespace() || c.is_ascii_digit()) {
                name = rest.trim().to_string();
            }
        }
    }

    name = NUMBER_PREFIX.replace(&name, "").to_string();
    name = BULLET_PREFIX.replace(&name, "").to_string();
    name = NUMBER_PREFIX.replace(&name, "").to_string();
    name = TRAILING_PUNCT.replace(&name, "").to_string();
    name = name.replace(DETAIL_REFERENCE, "").trim().to_string();
    name = LEADING_PAREN.replace(&name, "").trim().to_string();
    name = TRAILING_DIGITS.replace(&name, "$1").trim().to_string();

    name
}

/// Premium ("12,300원") and renewal period ("20년/100세") after the amount.
fn parse_suffix(suffix: &str) -> (String, String) {
    let mut rest = suffix.trim();
    let mut premium = "-".to_string();
    let mut period = "-".to_string();

    if let Some(m) = PREMIUM.find(rest) {
        premium = format!("{}원", m.as_str());
        rest = rest[m.end()..].trim();
    }
    if let Some(m) = PERIOD.find(rest) {
        period = m.as_str().trim().to_string();
    }

    (premium, period)
}

fn is_plausible_name(name: &str) -> bool {
    let len = name.chars().count();
    if len <= 1 || len >= MAX_NAME_CHARS {
        return false;
    }
    name.chars()
        .last()
        .map(|c| !SENTENCE_ENDINGS.contains(&c))
        .unwrap_or(false)
}
