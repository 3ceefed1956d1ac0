//! XML tree model and parser for projlint.
//!
//! The validator consumes an ordered, rooted tree of elements; this module
//! defines that shape (`Document`, `Element`) and a quick-xml backed parser
//! that produces it. Namespace prefixes and URIs are discarded at parse
//! time: rule matching compares local names only.
//!
//! Malformed XML is a distinct failure path from structural findings. The
//! parser reports it as a `SyntaxError` with a 1-based line/column position
//! and never hands a partial tree to the validator.

mod parser;
mod tree;

#[cfg(test)]
mod tests;

// Re-export public API
pub use parser::{SyntaxError, parse_str};
pub use tree::{Document, Element};
