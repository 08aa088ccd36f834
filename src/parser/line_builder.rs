use std::cmp::Ordering;

use crate::core::model::PositionedFragment;
use crate::core::text::normalize_fragment_text;

/// Fragments closer than this vertically share a row.
const ROW_TOLERANCE: f32 = 5.0;
/// A vertical jump larger than this starts a new line.
const LINE_BREAK_GAP: f32 = 8.0;
/// A horizontal gap larger than this inserts a space.
const WORD_GAP: f32 = 5.0;

/// Rebuild reading-order text for one page.
///
/// The result does not depend on the order the fragments arrive in.
pub fn reconstruct_page_text(fragments: &[PositionedFragment]) -> String {
    let ordered = reading_order(fragments);
    let Some(first) = ordered.first() else {
        return String::new();
    };

    let mut last_y = first.y;
    let mut last_x = first.x;
    let mut text = String::new();

    for fragment in ordered {
        if (fragment.y - last_y).abs() > LINE_BREAK_GAP {
            text.push('\n');
        } else if fragment.x - last_x > WORD_GAP {
            text.push(' ');
        }
        text.push_str(&normalize_fragment_text(&fragment.text));
        last_y = fragment.y;
        last_x = fragment.right_edge();
    }

    text
}

/// Join page texts in page order, one trailing newline per non-empty page.
pub fn join_pages<I, S>(pages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut full = String::new();
    for page in pages {
        let page = page.as_ref();
        if page.is_empty() {
            continue;
        }
        full.push_str(page);
        full.push('\n');
    }
    full
}

/// Top-to-bottom rows, left-to-right inside a row.
///
/// Rows are anchored on their topmost fragment so that the grouping is a
/// proper equivalence and the sort stays total.
fn reading_order(fragments: &[PositionedFragment]) -> Vec<&PositionedFragment> {
    let mut by_height: Vec<&PositionedFragment> = fragments.iter().collect();
    by_height.sort_by(|a, b| {
        b.y.total_cmp(&a.y)
            .then_with(|| a.x.total_cmp(&b.x))
            .then_with(|| a.text.cmp(&b.text))
            .then_with(|| a.width.total_cmp(&b.width))
    });

    let mut ordered = Vec::with_capacity(by_height.len());
    let mut row: Vec<&PositionedFragment> = Vec::new();
    let mut anchor_y = f32::NAN;

    for fragment in by_height {
        if !row.is_empty() && (anchor_y - fragment.y).abs() >= ROW_TOLERANCE {
            flush_row(&mut row, &mut ordered);
        }
        if row.is_empty() {
            anchor_y = fragment.y;
        }
        row.push(fragment);
    }
    flush_row(&mut row, &mut ordered);

    ordered
}

fn flush_row<'a>(row: &mut Vec<&'a PositionedFragment>, ordered: &mut Vec<&'a PositionedFragment>) {
    row.sort_by(|a, b| match a.x.total_cmp(&b.x) {
        Ordering::Equal => b
            .y
            .total_cmp(&a.y)
            .then_with(|| a.text.cmp(&b.text))
            .then_with(|| a.width.total_cmp(&b.width)),
        other => other,
    });
    ordered.append(row);
}
