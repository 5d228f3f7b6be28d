//! # kdl_tree
//!
//! An in-memory document tree model and writer for a KDL-style
//! configuration format.
//!
//! ## The model
//!
//! A [`Document`] holds a name and one root [`Node`]. Every node carries
//! a name, an ordered list of positional [`Arguments`], a key-unique set
//! of named [`Properties`], and a list of owned child nodes — together
//! forming a strict tree. Arguments and property values share a single
//! closed scalar type, [`Value`]: null, boolean, 64-bit integer, 64-bit
//! float, or UTF-8 string.
//!
//! Reading documents from text is out of scope; this crate builds trees
//! programmatically and renders them.
//!
//! ## Quick Start
//!
//! ```rust
//! use kdl_tree::{Document, Node, Value};
//!
//! let mut doc = Document::new();
//! doc.set_name("doc");
//!
//! let mut node = Node::new("foo");
//! node.arguments_mut().push(Value::from(42));
//! node.properties_mut()
//!     .insert("enabled".to_string(), Value::from(true));
//! doc.root_mut().children_mut().push(node);
//!
//! let rendered = kdl_tree::to_string(&doc);
//! assert_eq!(rendered, "// doc\nfoo 42 \"enabled\"=#true {\n\n}\n");
//! ```
//!
//! ## Output syntax
//!
//! The writer produces a fixed grammar other systems may depend on:
//!
//! ```text
//! // document-name
//! node-name arg1 arg2 "key"=value {
//! child-node ...
//! }
//! ```
//!
//! Null, true, and false render as `#null`, `#true`, and `#false`;
//! strings render double-quoted with their content emitted verbatim (the
//! format's escaping rules are an open question — see the [`ser`] module
//! docs). Argument order is significant and preserved; property order is
//! not significant, though rendering is deterministic: the same document
//! serializes to byte-identical output every time.
//!
//! ## Rendering destinations
//!
//! The writer emits tokens into a [`Sink`]. [`to_string`] renders into an
//! in-memory `String`, [`to_writer`] hands the rendered bytes to any
//! `io::Write`, and [`Document::write_to_file`] persists them to a path.
//! The writer itself cannot fail; only the I/O layers return [`Result`].
//!
//! ## serde interop
//!
//! [`Value`] implements `Serialize` and `Deserialize` over the five
//! scalar kinds, so values move freely between this crate and other serde
//! formats:
//!
//! ```rust
//! use kdl_tree::Value;
//!
//! let value: Value = serde_json::from_str("42").unwrap();
//! assert_eq!(value, Value::Integer(42));
//! ```

pub mod arguments;
pub mod document;
pub mod error;
pub mod macros;
pub mod node;
pub mod properties;
pub mod ser;
pub mod sink;
pub mod value;

pub use arguments::Arguments;
pub use document::Document;
pub use error::{Error, Result};
pub use node::Node;
pub use properties::Properties;
pub use sink::Sink;
pub use value::{Kind, Value};

use std::io;

/// Renders a [`Document`] to a `String`.
///
/// Rendering is deterministic and cannot fail; serializing the same
/// document twice produces byte-identical output.
///
/// # Examples
///
/// ```rust
/// use kdl_tree::Document;
///
/// let mut doc = Document::new();
/// doc.set_name("doc");
/// assert_eq!(kdl_tree::to_string(&doc), "// doc\n");
/// ```
#[must_use]
pub fn to_string(document: &Document) -> String {
    let mut out = String::new();
    ser::write_document(&mut out, document);
    out
}

/// Renders a [`Document`] and writes the bytes to an `io::Write`
/// destination.
///
/// # Examples
///
/// ```rust
/// use kdl_tree::Document;
///
/// let mut doc = Document::new();
/// doc.set_name("doc");
///
/// let mut buffer = Vec::new();
/// kdl_tree::to_writer(&mut buffer, &doc).unwrap();
/// assert_eq!(buffer, b"// doc\n");
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if writing to the destination fails.
pub fn to_writer<W>(mut writer: W, document: &Document) -> Result<()>
where
    W: io::Write,
{
    let rendered = to_string(document);
    writer
        .write_all(rendered.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
