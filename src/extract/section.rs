/// Headings that open the coverage list.
pub const START_MARKERS: &[&str] = &["가입담보리스트", "가입담보", "담보사항"];

/// Headings that close it.
pub const END_MARKERS: &[&str] = &["주의사항", "유의사항", "알아두실"];

/// Marker lines are short headings; longer lines mentioning them are prose.
const MAX_MARKER_LINE_CHARS: usize = 40;

/// Line span of the coverage list, `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionBounds {
    /// Index of the start marker line, `None` when the document has none.
    pub start: Option<usize>,
    pub end: usize,
}

impl SectionBounds {
    pub fn offset(&self) -> usize {
        self.start.unwrap_or(0)
    }

    pub fn slice<'a, 'b>(&self, lines: &'b [&'a str]) -> &'b [&'a str] {
        &lines[self.offset()..self.end]
    }
}

/// Find the coverage list. Without a start marker the whole document is used.
pub fn locate_section(lines: &[&str]) -> SectionBounds {
    let mut start = None;
    let mut end = None;

    for (idx, line) in lines.iter().enumerate() {
        let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.chars().count() >= MAX_MARKER_LINE_CHARS {
            continue;
        }
        if start.is_none() {
            if contains_any(&compact, START_MARKERS) {
                start = Some(idx);
            }
        } else if contains_any(&compact, END_MARKERS) {
            end = Some(idx);
            break;
        }
    }

    match start {
        Some(start) => SectionBounds {
            start: Some(start),
            end: end.unwrap_or(lines.len()),
        },
        None => SectionBounds {
            start: None,
            end: lines.len(),
        },
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_between_start_and_end_markers() {
        let lines = ["표지", "가입 담보 리스트", "암진단비 1,000만원", "주의 사항", "기타"];
        let bounds = locate_section(&lines);
        assert_eq!(bounds.start, Some(1));
        assert_eq!(bounds.end, 3);
        assert_eq!(bounds.slice(&lines), &["가입 담보 리스트", "암진단비 1,000만원"]);
    }

    #[test]
    fn open_section_runs_to_end_of_document() {
        let lines = ["담보사항", "암진단비 1,000만원"];
        let bounds = locate_section(&lines);
        assert_eq!(bounds, SectionBounds { start: Some(0), end: 2 });
    }

    #[test]
    fn missing_start_marker_uses_whole_document() {
        let lines = ["암진단비 1,000만원", "주의사항"];
        let bounds = locate_section(&lines);
        assert_eq!(bounds.start, None);
        assert_eq!(bounds.offset(), 0);
        assert_eq!(bounds.end, 2);
    }

    #[test]
    fn end_marker_before_start_is_ignored() {
        let lines = ["유의사항", "가입담보", "질병사망 1억원", "알아두실 사항"];
        let bounds = locate_section(&lines);
        assert_eq!(bounds, SectionBounds { start: Some(1), end: 3 });
    }

    #[test]
    fn long_lines_are_not_markers() {
        let long = format!("가입담보{}", "가".repeat(40));
        let lines = [long.as_str(), "담보사항"];
        assert_eq!(locate_section(&lines).start, Some(1));
    }
}
