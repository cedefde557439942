use tracing::trace;

use crate::{LineAccessor, Position, TextRange};

/// Line offsets in nearness order: 0, +1, -1, +2, -2, ...
///
/// The line after the start is preferred over the line before at equal
/// distance. The iterator is infinite; [`locate`] stops consuming it once
/// both directions run past the document bounds.
pub fn spiral_offsets() -> impl Iterator<Item = i64> {
    std::iter::once(0).chain((1i64..).flat_map(|distance| [distance, -distance]))
}

/// Find the nearest start tag named `node_name` around `start`, visiting
/// lines in [`spiral_offsets`] order. Within a line the leftmost match wins;
/// the start column never affects the visiting order.
pub fn locate<A>(
    accessor: &A,
    start: Position,
    line_count: usize,
    node_name: &str,
) -> Option<TextRange>
where
    A: LineAccessor + ?Sized,
{
    for offset in spiral_offsets() {
        let line = start.line as i64 + offset;
        if line < 0 || line >= line_count as i64 {
            // Skipped, not a failure. Give up only once the current
            // distance is out of bounds on both sides.
            let distance = offset.abs();
            let past_end = start.line as i64 + distance >= line_count as i64;
            let past_start = start.line as i64 - distance < 0;
            if past_end && past_start {
                return None;
            }
            continue;
        }
        let line = line as usize;
        for (column, span) in markup::scan_tags(accessor.line_text(line)) {
            if let Ok(record) = markup::parse_tag(span) {
                if record.node_name == node_name {
                    trace!(line, column, node_name, "located element");
                    return Some(TextRange::on_line(line, column, column + span.len()));
                }
            }
        }
    }
    None
}

#[cfg(test)]
#[test]
fn test_spiral_offsets() {
    let head: Vec<i64> = spiral_offsets().take(7).collect();
    assert_eq!(head, vec![0, 1, -1, 2, -2, 3, -3]);
}

#[cfg(test)]
#[test]
fn test_locate_spirals_outward() {
    let doc: &[&str] = &["", "++text++", "", "<input name=\"x\">"];
    let found = locate(doc, Position::new(1, 2), 4, "input");
    assert_eq!(found, Some(TextRange::on_line(3, 0, 16)));
}

#[cfg(test)]
#[test]
fn test_locate_prefers_same_line_then_line_after() {
    let doc: &[&str] = &["<input name=\"above\">", "text", "<input name=\"below\">"];
    let found = locate(doc, Position::new(1, 0), 3, "input").unwrap();
    assert_eq!(found.start.line, 2);

    let doc: &[&str] = &["<input name=\"above\">", "text <input name=\"here\">", "<input name=\"below\">"];
    let found = locate(doc, Position::new(1, 0), 3, "input").unwrap();
    assert_eq!(found, TextRange::on_line(1, 5, 24));
}

#[cfg(test)]
#[test]
fn test_locate_leftmost_on_line() {
    let doc: &[&str] = &["<br> <input name=\"a\"> <input name=\"b\">"];
    let found = locate(doc, Position::new(0, 30), 1, "input").unwrap();
    assert_eq!(found, TextRange::on_line(0, 5, 21));
}

#[cfg(test)]
#[test]
fn test_locate_not_found_terminates() {
    let doc: &[&str] = &["nothing", "to", "see"];
    assert_eq!(locate(doc, Position::new(0, 0), 3, "input"), None);
    assert_eq!(locate(doc, Position::new(2, 0), 3, "input"), None);

    let doc: &[&str] = &["only line"];
    assert_eq!(locate(doc, Position::new(0, 0), 1, "input"), None);
}

#[cfg(test)]
#[test]
fn test_locate_ignores_end_tags_and_other_names() {
    let doc: &[&str] = &["</input>", "<section>", "<input disabled>"];
    let found = locate(doc, Position::new(0, 0), 3, "input");
    assert_eq!(found, Some(TextRange::on_line(2, 0, 16)));
}
