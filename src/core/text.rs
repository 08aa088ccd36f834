//! Hangul cleanup for fragment text.
//!
//! Some PDF producers emit syllables as separate conjoining jamo, sometimes with
//! spaces between them. NFC composes the jamo back into syllables. NFKC is not
//! used: it would fold "Ⅱ" into "II" and break catalog keys.
use unicode_normalization::UnicodeNormalization;

fn is_hangul_jamo(c: char) -> bool {
    matches!(
        c as u32,
        0x1100..=0x11FF | // Hangul Jamo
        0xA960..=0xA97F | // Hangul Jamo Extended-A
        0xD7B0..=0xD7FF   // Hangul Jamo Extended-B
    )
}

fn drop_space_between_jamo(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    for (i, c) in chars.iter().enumerate() {
        if c.is_whitespace() {
            let prev = chars[..i].iter().rev().find(|ch| !ch.is_whitespace());
            let next = chars[i + 1..].iter().find(|ch| !ch.is_whitespace());
            if let (Some(p), Some(n)) = (prev, next) {
                if is_hangul_jamo(*p) && is_hangul_jamo(*n) {
                    continue;
                }
            }
        }
        out.push(*c);
    }

    out
}

/// Compose decomposed Hangul. Control whitespace such as tabs becomes a
/// space and other control characters are dropped.
pub fn normalize_fragment_text(text: &str) -> String {
    let text = if text.chars().any(is_hangul_jamo) {
        drop_space_between_jamo(text)
    } else {
        text.to_string()
    };
    text.nfc()
        .filter_map(|c| match c {
            c if !c.is_control() => Some(c),
            c if c.is_whitespace() => Some(' '),
            _ => None,
        })
        .collect()
}
