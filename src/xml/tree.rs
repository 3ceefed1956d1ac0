//! Ordered-labeled-tree model for parsed project documents.

use std::collections::HashMap;

/// A parsed project document.
///
/// A well-formed document always has exactly one root element; documents
/// with no root never get past the parser.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// The root element of the document.
    pub root: Element,
}

impl Document {
    /// Create a document from its root element.
    pub fn new(root: Element) -> Self {
        Self { root }
    }
}

/// One element in the document tree.
///
/// Elements carry a local name (namespace prefixes are stripped by the
/// parser), an unordered attribute map, ordered child elements, and the
/// concatenated direct text content.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: String,
    attributes: HashMap<String, String>,
    children: Vec<Element>,
    text: String,
}

impl Element {
    /// Create a new element with the given local name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: HashMap::new(),
            children: Vec::new(),
            text: String::new(),
        }
    }

    /// Builder-style: add an attribute.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Builder-style: append a child element.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Builder-style: append text content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text.push_str(&text.into());
        self
    }

    /// Append a child element.
    pub fn add_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Append text content.
    pub fn append_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// The element's local name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up an attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// The element's direct children, in document order.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Iterate over direct children with the given local name.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Whether the element has any child elements.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// The concatenated direct text content of this element.
    pub fn text(&self) -> &str {
        &self.text
    }
}
