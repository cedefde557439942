use tracing::debug;

use crate::locate::locate;
use crate::{Edit, EditBatch, LineAccessor, TextRange, WorkflowError};
use markup::AttributeValue;

/// Wrap the selected text in a `<label>` tied to the nearest `input`
/// element.
///
/// The input gains a synthesized `id` of `<name>_<value>` when it has none,
/// and the class `css-checkbox-symbol` when its `type` is `checkbox`. The
/// returned batch holds exactly two edits: the selection becomes the label
/// markup and the located input becomes its re-serialized record.
pub fn wrap_selection_as_label<A>(
    accessor: &A,
    selection: TextRange,
    selection_text: &str,
    line_count: usize,
) -> Result<EditBatch, WorkflowError>
where
    A: LineAccessor + ?Sized,
{
    if selection_text.is_empty() {
        return Err(WorkflowError::EmptySelection);
    }
    let input_range = locate(accessor, selection.start, line_count, "input")
        .ok_or(WorkflowError::ElementNotFound)?;
    let line = accessor.line_text(input_range.start.line);
    let mut input = markup::parse_tag(&line[input_range.start.column..input_range.end.column])?;

    if !input.attributes.contains("id") {
        let id = format!(
            "{}_{}",
            input.attributes.text("name"),
            input.attributes.text("value")
        );
        debug!("input has no id, synthesized {id}");
        input.attributes.set("id", AttributeValue::Text(id));
    }
    if input.attributes.text("type") == "checkbox" {
        let classes = markup::add_class(input.attributes.text("class"), "css-checkbox-symbol");
        input.attributes.set("class", AttributeValue::Text(classes));
    }

    let label = format!(
        "<label for=\"{}\">{}</label>",
        input.attributes.text("id"),
        selection_text
    );
    Ok(EditBatch(vec![
        Edit {
            range: selection,
            replacement: label,
        },
        Edit {
            range: input_range,
            replacement: markup::serialize(&input),
        },
    ]))
}

/// Re-serialize each selected tag with its attributes in canonical order.
/// Selections are independent; a selection that is not a single tag fails
/// the whole call so no partial batch escapes.
pub fn rearrange(selections: &[(TextRange, String)]) -> Result<EditBatch, WorkflowError> {
    let mut edits = Vec::with_capacity(selections.len());
    for (range, text) in selections {
        let record = markup::parse_tag(text)?;
        edits.push(Edit {
            range: *range,
            replacement: markup::serialize(&record),
        });
    }
    Ok(EditBatch(edits))
}
