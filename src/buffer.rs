use editing::{Edit, EditBatch, LineAccessor, TextRange};

/// Line storage for one document. Splitting on `\n` keeps a final empty line
/// for documents ending in a newline, so [`TextBuffer::to_text`] round-trips
/// the source exactly.
pub struct TextBuffer {
    lines: Vec<String>,
}

impl TextBuffer {
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
        }
    }

    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    /// The text inside `range`, which may span lines.
    pub fn text_in(&self, range: TextRange) -> String {
        let TextRange { start, end } = range;
        if start.line == end.line {
            return self.lines[start.line][start.column..end.column].to_string();
        }
        let mut text = self.lines[start.line][start.column..].to_string();
        for line in &self.lines[start.line + 1..end.line] {
            text.push('\n');
            text.push_str(line);
        }
        text.push('\n');
        text.push_str(&self.lines[end.line][..end.column]);
        text
    }

    /// Apply every edit of `batch` as one group. Edits are applied in
    /// descending start order so a replacement never shifts the range of one
    /// applied after it; ranges must not overlap.
    pub fn apply(&mut self, batch: &EditBatch) {
        let mut edits: Vec<&Edit> = batch.0.iter().collect();
        edits.sort_by(|a, b| b.range.start.cmp(&a.range.start));
        for edit in edits {
            self.replace(edit.range, &edit.replacement);
        }
    }

    fn replace(&mut self, range: TextRange, replacement: &str) {
        let mut spliced = self.lines[range.start.line][..range.start.column].to_string();
        spliced.push_str(replacement);
        spliced.push_str(&self.lines[range.end.line][range.end.column..]);
        let lines = spliced.split('\n').map(str::to_string).collect::<Vec<_>>();
        self.lines.splice(range.start.line..=range.end.line, lines);
    }
}

impl LineAccessor for TextBuffer {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_text(&self, index: usize) -> &str {
        &self.lines[index]
    }
}

#[cfg(test)]
#[test]
fn test_text_round_trip() {
    let source = "a\nb\n";
    assert_eq!(TextBuffer::from_text(source).to_text(), source);
    let source = "no trailing newline";
    assert_eq!(TextBuffer::from_text(source).to_text(), source);
}

#[cfg(test)]
#[test]
fn test_text_in_spans_lines() {
    let buffer = TextBuffer::from_text("one\ntwo\nthree");
    assert_eq!(buffer.text_in(TextRange::on_line(1, 1, 3)), "wo");
    assert_eq!(
        buffer.text_in(TextRange::new(
            editing::Position::new(0, 2),
            editing::Position::new(2, 3),
        )),
        "e\ntwo\nthr"
    );
}

#[cfg(test)]
#[test]
fn test_apply_batch_in_any_order() {
    let source = "++C++ <input name=\"test3\" value=\"C\" type=\"checkbox\">";
    let edits = vec![
        Edit {
            range: TextRange::on_line(0, 0, 5),
            replacement: "<label for=\"test3_C\">++C++</label>".to_string(),
        },
        Edit {
            range: TextRange::on_line(0, 6, source.len()),
            replacement: "<input id=\"test3_C\">".to_string(),
        },
    ];
    let expected = "<label for=\"test3_C\">++C++</label> <input id=\"test3_C\">";

    let mut buffer = TextBuffer::from_text(source);
    buffer.apply(&EditBatch(edits.clone()));
    assert_eq!(buffer.to_text(), expected);

    let mut buffer = TextBuffer::from_text(source);
    buffer.apply(&EditBatch(edits.into_iter().rev().collect()));
    assert_eq!(buffer.to_text(), expected);
}

#[cfg(test)]
#[test]
fn test_replace_with_newlines() {
    let mut buffer = TextBuffer::from_text("before MARK after");
    buffer.apply(&EditBatch(vec![Edit {
        range: TextRange::on_line(0, 7, 11),
        replacement: "one\ntwo".to_string(),
    }]));
    assert_eq!(buffer.to_text(), "before one\ntwo after");
}
