use super::*;

fn selection_around(doc: &[&str], line: usize, marker: &str) -> (TextRange, String) {
    let start = doc[line].find(marker).unwrap();
    let end = doc[line].rfind(marker).unwrap() + marker.len();
    (TextRange::on_line(line, start, end), doc[line][start..end].to_string())
}

#[cfg(test)]
#[test]
fn test_label_wrap_synthesizes_id() {
    let doc: &[&str] = &[
        "<form>",
        "    <input name=\"test3\" value=\"C\" type=\"checkbox\"> ++C++",
        "</form>",
    ];
    let (selection, text) = selection_around(doc, 1, "++");
    let batch = wrap_selection_as_label(doc, selection, &text, doc.len()).unwrap();

    assert_eq!(batch.0.len(), 2);
    assert_eq!(batch.0[0].range, selection);
    assert_eq!(batch.0[0].replacement, "<label for=\"test3_C\">++C++</label>");
    assert_eq!(batch.0[1].range, TextRange::on_line(1, 4, 50));
    assert_eq!(
        batch.0[1].replacement,
        "<input id=\"test3_C\" name=\"test3\" value=\"C\" type=\"checkbox\" class=\"css-checkbox-symbol\">"
    );
}

#[cfg(test)]
#[test]
fn test_label_wrap_with_bare_attribute() {
    let doc: &[&str] = &[
        "    <input name=\"test3\" value=\"C\" type=\"checkbox\" disabled> ++This is label text C++",
    ];
    let (selection, text) = selection_around(doc, 0, "++");
    let batch = wrap_selection_as_label(doc, selection, &text, doc.len()).unwrap();

    assert_eq!(
        batch.0[0].replacement,
        "<label for=\"test3_C\">++This is label text C++</label>"
    );
    assert_eq!(
        batch.0[1].replacement,
        "<input id=\"test3_C\" name=\"test3\" value=\"C\" type=\"checkbox\" disabled class=\"css-checkbox-symbol\">"
    );
}

#[cfg(test)]
#[test]
fn test_label_wrap_reuses_existing_id() {
    let doc: &[&str] = &[
        "    ++This is label text D++ <input id=\"reused\" name=\"test4\" value=\"D\" type=\"checkbox\" class=\"a--css--class\">",
    ];
    let (selection, text) = selection_around(doc, 0, "++");
    let batch = wrap_selection_as_label(doc, selection, &text, doc.len()).unwrap();

    assert_eq!(batch.0[0].replacement, "<label for=\"reused\">++This is label text D++</label>");
    assert_eq!(
        batch.0[1].replacement,
        "<input id=\"reused\" name=\"test4\" value=\"D\" type=\"checkbox\" class=\"a--css--class css-checkbox-symbol\">"
    );
}

#[cfg(test)]
#[test]
fn test_label_wrap_skips_class_for_radio() {
    let doc: &[&str] = &["++A++", "<input name=\"test1\" value=\"A\" type=\"radio\">"];
    let (selection, text) = selection_around(doc, 0, "++");
    let batch = wrap_selection_as_label(doc, selection, &text, doc.len()).unwrap();

    assert_eq!(batch.0[0].replacement, "<label for=\"test1_A\">++A++</label>");
    assert_eq!(
        batch.0[1].replacement,
        "<input id=\"test1_A\" name=\"test1\" value=\"A\" type=\"radio\">"
    );
}

#[cfg(test)]
#[test]
fn test_label_wrap_finds_input_on_neighbouring_line() {
    let doc: &[&str] = &["", "++text++", "", "<input name=\"x\" value=\"y\">"];
    let (selection, text) = selection_around(doc, 1, "++");
    let batch = wrap_selection_as_label(doc, selection, &text, doc.len()).unwrap();
    assert_eq!(batch.0[1].range, TextRange::on_line(3, 0, 26));
}

#[cfg(test)]
#[test]
fn test_label_wrap_requires_selection() {
    let doc: &[&str] = &["<input name=\"x\" value=\"y\">"];
    let err = wrap_selection_as_label(doc, TextRange::on_line(0, 0, 0), "", doc.len());
    assert_eq!(err, Err(WorkflowError::EmptySelection));
    assert_eq!(err.unwrap_err().to_string(), "select text first");
}

#[cfg(test)]
#[test]
fn test_label_wrap_requires_an_input_nearby() {
    let doc: &[&str] = &["++orphan++", "<section>"];
    let (selection, text) = selection_around(doc, 0, "++");
    let err = wrap_selection_as_label(doc, selection, &text, doc.len());
    assert_eq!(err, Err(WorkflowError::ElementNotFound));
    assert_eq!(err.unwrap_err().to_string(), "no related input element found");
}

#[cfg(test)]
#[test]
fn test_rearrange_selections_independently() {
    let first = r#"<input name="_inputNameA" type="radio" class="_inputClass" value="_inputValueA with some spaces" disabled>"#;
    let second = r#"<input value="" id="_id" disabled name="_inputNameB" type="radio" class="">"#;
    let selections = vec![
        (TextRange::on_line(0, 0, first.len()), first.to_string()),
        (TextRange::on_line(4, 0, second.len()), second.to_string()),
    ];
    let batch = rearrange(&selections).unwrap();

    assert_eq!(batch.0.len(), 2);
    assert_eq!(
        batch.0[0].replacement,
        r#"<input name="_inputNameA" value="_inputValueA with some spaces" type="radio" disabled class="_inputClass">"#
    );
    assert_eq!(
        batch.0[1].replacement,
        r#"<input id="_id" name="_inputNameB" value="" type="radio" disabled class="">"#
    );

    // Order of processing does not matter
    let reversed: Vec<_> = selections.iter().rev().cloned().collect();
    let swapped = rearrange(&reversed).unwrap();
    assert_eq!(swapped.0[1].replacement, batch.0[0].replacement);
    assert_eq!(swapped.0[0].replacement, batch.0[1].replacement);
}

#[cfg(test)]
#[test]
fn test_rearrange_rejects_non_tag_selection() {
    let selections = vec![(TextRange::on_line(0, 0, 5), "hello".to_string())];
    assert_eq!(rearrange(&selections), Err(WorkflowError::Malformed(MalformedTag::MissingDelimiters)));
}
