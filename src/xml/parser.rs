//! quick-xml backed parser producing the projlint tree model.

use quick_xml::Reader;
use quick_xml::events::Event;
use thiserror::Error;

use super::tree::{Document, Element};

/// A well-formedness error in the input text.
///
/// Raised before any structural validation runs; a document that fails here
/// never reaches the validator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("XML syntax error at line {line}, column {column}: {message}")]
pub struct SyntaxError {
    /// 1-based line of the error position.
    pub line: usize,
    /// 1-based column of the error position.
    pub column: usize,
    /// Description of the well-formedness violation.
    pub message: String,
}

impl SyntaxError {
    /// Create a new syntax error.
    pub fn new(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            column,
            message: message.into(),
        }
    }

    fn at_offset(input: &str, offset: usize, message: impl Into<String>) -> Self {
        let (line, column) = line_col(input, offset);
        Self::new(line, column, message)
    }
}

/// Parse XML text into a document tree.
///
/// Element and attribute names are reduced to their local names (namespace
/// prefixes stripped). Attribute values and text content are unescaped.
/// Whitespace-only text, comments, processing instructions, and the XML
/// declaration are discarded; CDATA sections contribute text content.
///
/// # Returns
///
/// * `Ok(Document)` - The parsed tree with its root element
/// * `Err(SyntaxError)` - The input is not well-formed XML
pub fn parse_str(input: &str) -> Result<Document, SyntaxError> {
    let mut reader = Reader::from_str(input);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let offset = reader.buffer_position() as usize;
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if root.is_some() && stack.is_empty() {
                    return Err(SyntaxError::at_offset(
                        input,
                        offset,
                        "content after the document root element",
                    ));
                }
                stack.push(element_from_event(input, &e, offset)?);
            }
            Ok(Event::Empty(e)) => {
                let element = element_from_event(input, &e, offset)?;
                attach(input, &mut stack, &mut root, element, offset)?;
            }
            Ok(Event::End(_)) => {
                // check_end_names guarantees the tag matches; an End with an
                // empty stack would already have failed inside quick-xml.
                let Some(element) = stack.pop() else {
                    return Err(SyntaxError::at_offset(input, offset, "unexpected end tag"));
                };
                attach(input, &mut stack, &mut root, element, offset)?;
            }
            Ok(Event::Text(t)) => {
                let text = t
                    .unescape()
                    .map_err(|e| SyntaxError::at_offset(input, offset, e.to_string()))?;
                match stack.last_mut() {
                    Some(parent) => parent.append_text(&text),
                    None => {
                        return Err(SyntaxError::at_offset(
                            input,
                            offset,
                            "text outside the document root element",
                        ));
                    }
                }
            }
            Ok(Event::CData(t)) => {
                let text = String::from_utf8_lossy(t.as_ref()).into_owned();
                match stack.last_mut() {
                    Some(parent) => parent.append_text(&text),
                    None => {
                        return Err(SyntaxError::at_offset(
                            input,
                            offset,
                            "CDATA outside the document root element",
                        ));
                    }
                }
            }
            Ok(Event::Eof) => break,
            // Declaration, comments, processing instructions, DOCTYPE.
            Ok(_) => {}
            Err(e) => {
                let offset = reader.buffer_position() as usize;
                return Err(SyntaxError::at_offset(input, offset, e.to_string()));
            }
        }
    }

    if let Some(unclosed) = stack.last() {
        return Err(SyntaxError::at_offset(
            input,
            input.len(),
            format!("unexpected end of document: <{}> is not closed", unclosed.name()),
        ));
    }

    match root {
        Some(root) => Ok(Document::new(root)),
        None => Err(SyntaxError::at_offset(input, input.len(), "no root element found")),
    }
}

/// Build an element from a start/empty tag event, stripping namespace
/// prefixes from the element and attribute names.
fn element_from_event(
    input: &str,
    event: &quick_xml::events::BytesStart<'_>,
    offset: usize,
) -> Result<Element, SyntaxError> {
    let name = String::from_utf8_lossy(event.local_name().as_ref()).into_owned();
    let mut element = Element::new(name);

    for attr in event.attributes() {
        let attr = attr.map_err(|e| SyntaxError::at_offset(input, offset, e.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| SyntaxError::at_offset(input, offset, e.to_string()))?;
        element = element.with_attr(key, value.into_owned());
    }

    Ok(element)
}

/// Attach a completed element to its parent, or install it as the root.
fn attach(
    input: &str,
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
    offset: usize,
) -> Result<(), SyntaxError> {
    match stack.last_mut() {
        Some(parent) => parent.add_child(element),
        None => {
            if root.is_some() {
                return Err(SyntaxError::at_offset(
                    input,
                    offset,
                    "content after the document root element",
                ));
            }
            *root = Some(element);
        }
    }
    Ok(())
}

/// Convert a byte offset into a 1-based (line, column) pair.
fn line_col(input: &str, offset: usize) -> (usize, usize) {
    let mut offset = offset.min(input.len());
    while offset > 0 && !input.is_char_boundary(offset) {
        offset -= 1;
    }
    let before = &input[..offset];
    let line = before.matches('\n').count() + 1;
    let column = match before.rfind('\n') {
        Some(idx) => before[idx + 1..].chars().count() + 1,
        None => before.chars().count() + 1,
    };
    (line, column)
}
