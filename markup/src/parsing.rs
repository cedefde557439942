use nom::{
    branch::alt,
    bytes::complete::{is_not, take_till},
    character::complete::{alphanumeric1, char, space0, space1},
    combinator::{all_consuming, opt, recognize},
    multi::{many0, many1, separated_list1},
    sequence::{delimited, tuple},
    IResult,
};
use tracing::trace;

use super::{AttributeMap, AttributeValue, ElementRecord, MalformedTag};

/// Parse a single start or self-closing tag into an [`ElementRecord`].
///
/// The text between `<` and `>` is split into space-delimited tokens; spaces
/// and `=` inside a double-quoted span do not delimit. The first token is the
/// node name, every later token becomes an attribute.
pub fn parse_tag(tag_text: &str) -> Result<ElementRecord, MalformedTag> {
    let inner = tag_text
        .strip_prefix('<')
        .and_then(|rest| rest.strip_suffix('>'))
        .ok_or(MalformedTag::MissingDelimiters)?;
    let (_, parts) = attribute_tokens(inner).map_err(|_| MalformedTag::EmptyTag)?;

    let node_name = parts[0].to_string();
    let mut attributes = AttributeMap::empty();
    for part in &parts[1..] {
        let (name, value) = split_attribute(part);
        attributes.set(name, value);
    }
    trace!(node_name = %node_name, attributes = attributes.len(), "parsed tag");
    Ok(ElementRecord {
        node_name,
        raw_text: tag_text.to_string(),
        attributes,
    })
}

#[cfg(test)]
#[test]
fn test_parse_tag() {
    let record = parse_tag(r#"<input name="a" type="radio" class="c" value="v with space" disabled>"#)
        .unwrap();
    assert_eq!(record.node_name, "input");
    assert_eq!(record.attributes.text("name"), "a");
    assert_eq!(record.attributes.text("type"), "radio");
    assert_eq!(record.attributes.text("class"), "c");
    assert_eq!(record.attributes.text("value"), "v with space");
    assert_eq!(record.attributes.get("disabled"), Some(&AttributeValue::Bare));
    assert_eq!(record.attributes.len(), 5);
}

#[cfg(test)]
#[test]
fn test_parse_tag_without_attributes() {
    let record = parse_tag("<br>").unwrap();
    assert_eq!(record.node_name, "br");
    assert!(record.attributes.is_empty());
    assert_eq!(record.raw_text, "<br>");
}

#[cfg(test)]
#[test]
fn test_parse_malformed() {
    assert_eq!(parse_tag("no brackets"), Err(MalformedTag::MissingDelimiters));
    assert_eq!(parse_tag("<input"), Err(MalformedTag::MissingDelimiters));
    assert_eq!(parse_tag("input>"), Err(MalformedTag::MissingDelimiters));
    assert_eq!(parse_tag("<>"), Err(MalformedTag::EmptyTag));
    assert_eq!(parse_tag("<   >"), Err(MalformedTag::EmptyTag));
}

/// The tag content as tokens: runs of quoted and bare spans, split on
/// unquoted spaces.
fn attribute_tokens(input: &str) -> IResult<&str, Vec<&str>> {
    all_consuming(delimited(space0, separated_list1(space1, token), space0))(input)
}

fn token(input: &str) -> IResult<&str, &str> {
    recognize(many1(alt((quoted_span, bare_span))))(input)
}

/// A double-quoted span, quotes included. A missing closing quote extends
/// the span to the end of the input.
fn quoted_span(input: &str) -> IResult<&str, &str> {
    recognize(tuple((char('"'), take_till(|c| c == '"'), opt(char('"')))))(input)
}

fn bare_span(input: &str) -> IResult<&str, &str> {
    is_not(" \"")(input)
}

#[cfg(test)]
#[test]
fn test_tokens() {
    let (_, parts) = attribute_tokens(r#"input value="v = 1 < 2" disabled"#).unwrap();
    assert_eq!(parts, vec!["input", r#"value="v = 1 < 2""#, "disabled"]);

    // Unterminated quote swallows the rest of the content
    let (_, parts) = attribute_tokens(r#"input value="oops disabled"#).unwrap();
    assert_eq!(parts, vec!["input", r#"value="oops disabled"#]);
}

/// Split one token at its first `=`. No `=` means a bare attribute;
/// otherwise the remainder, minus one surrounding pair of double quotes,
/// is the value. Later `=` characters belong to the value.
fn split_attribute(token: &str) -> (&str, AttributeValue) {
    match token.split_once('=') {
        Some((name, value)) => (name, AttributeValue::Text(strip_quotes(value).to_string())),
        None => (token, AttributeValue::Bare),
    }
}

fn strip_quotes(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(value)
}

#[cfg(test)]
#[test]
fn test_split_attribute() {
    assert_eq!(
        split_attribute(r#"value="a=b=c""#),
        ("value", AttributeValue::Text("a=b=c".into()))
    );
    assert_eq!(split_attribute(r#"value="""#), ("value", AttributeValue::Text("".into())));
    assert_eq!(split_attribute("value=bare"), ("value", AttributeValue::Text("bare".into())));
    assert_eq!(split_attribute("disabled"), ("disabled", AttributeValue::Bare));
}

/// All start-tag spans in `text`, left to right, paired with the byte offset
/// each begins at. Double-quoted attribute values may contain `>`; end tags
/// (`</x>`) never match.
pub fn scan_tags(text: &str) -> Vec<(usize, &str)> {
    let mut found = Vec::new();
    let mut from = 0;
    while let Some(at) = text[from..].find('<').map(|rel| from + rel) {
        match tag_span(&text[at..]) {
            Ok((_, span)) => {
                found.push((at, span));
                from = at + span.len();
            }
            Err(_) => from = at + 1,
        }
    }
    found
}

/// One `<word ...>` construct at the start of the input.
fn tag_span(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        char('<'),
        alphanumeric1,
        many0(alt((quoted_span, is_not("<>\"")))),
        char('>'),
    )))(input)
}

#[cfg(test)]
#[test]
fn test_scan_tags() {
    let line = r#"before <input name="x"> middle <br> </input> after"#;
    let found = scan_tags(line);
    assert_eq!(
        found,
        vec![(7, r#"<input name="x">"#), (31, "<br>")]
    );

    // A quoted `>` does not close the tag
    let line = r#"<input value="a > b"> rest"#;
    assert_eq!(scan_tags(line), vec![(0, r#"<input value="a > b">"#)]);

    assert!(scan_tags("no tags here, 1 < 2").is_empty());
}
