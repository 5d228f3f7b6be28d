//! The recursive document writer.
//!
//! This module renders a [`Document`] — or any fragment of one — into a
//! [`Sink`] as the format's textual syntax:
//!
//! ```text
//! document   := "// " name "\n" node*
//! node       := node-name " " argument* property* "{\n" node* "\n}\n"
//! argument   := value " "
//! property   := "\"" key "\"" "=" value " "
//! value      := "#null" | "#true" | "#false" | integer | float | "\"" string "\""
//! ```
//!
//! The walk is depth-first and pre-order: a node emits its own line, then
//! its children inside the braces, in child-list order. Arguments are
//! emitted in index order; properties in the map's iteration order, which
//! the format treats as insignificant. The writer holds no state of its
//! own and never mutates what it visits, so rendering the same tree twice
//! produces byte-identical output.
//!
//! Rendering cannot fail: the functions perform no validation and return
//! `()`. Whatever happens to the emitted tokens afterwards is the sink's
//! concern.
//!
//! String content is emitted between double quotes **verbatim** — no
//! escaping of embedded quotes or control characters is performed. What
//! escaping the format requires is an unresolved question of the format
//! itself; until it is settled, strings containing `"` or newlines
//! produce output that a future reader may not be able to round-trip.
//!
//! # Example
//!
//! ```rust
//! use kdl_tree::{Document, Node, Value};
//!
//! let mut doc = Document::new();
//! doc.set_name("doc");
//!
//! let mut node = Node::new("foo");
//! node.arguments_mut().push(Value::from(42));
//! doc.root_mut().children_mut().push(node);
//!
//! assert_eq!(kdl_tree::to_string(&doc), "// doc\nfoo 42 {\n\n}\n");
//! ```

use crate::{Arguments, Document, Node, Properties, Sink, Value};

mod tokens {
    pub const NULL: &str = "#null";
    pub const TRUE: &str = "#true";
    pub const FALSE: &str = "#false";
    pub const QUOTE: char = '"';
    pub const EQUAL: char = '=';
    pub const SPACE: char = ' ';
    pub const LBRACE: char = '{';
    pub const RBRACE: char = '}';
    pub const NEWLINE: char = '\n';
    pub const SLASH: char = '/';
}

/// Writes a single [`Value`] into the sink.
///
/// - null → `#null`
/// - boolean → `#true` or `#false`
/// - integer → `123`
/// - float → `3.14`
/// - string → `"hello"` (quoted, unescaped)
pub fn write_value<S: Sink>(out: &mut S, value: &Value) {
    match value {
        Value::Null => out.write_text(tokens::NULL),
        Value::Bool(content) => {
            out.write_text(if *content { tokens::TRUE } else { tokens::FALSE });
        }
        Value::Integer(content) => out.write_int(*content),
        Value::Float(content) => out.write_float(*content),
        Value::String(content) => {
            out.write_char(tokens::QUOTE);
            out.write_text(content);
            out.write_char(tokens::QUOTE);
        }
    }
}

/// Writes a node's arguments, each followed by a space, in index order.
pub fn write_arguments<S: Sink>(out: &mut S, arguments: &Arguments) {
    for argument in arguments {
        write_value(out, argument);
        out.write_char(tokens::SPACE);
    }
}

/// Writes one key-value property as `"key"=value`.
pub fn write_property<S: Sink>(out: &mut S, key: &str, value: &Value) {
    out.write_char(tokens::QUOTE);
    out.write_text(key);
    out.write_char(tokens::QUOTE);
    out.write_char(tokens::EQUAL);
    write_value(out, value);
}

/// Writes a node's properties, each followed by a space.
pub fn write_properties<S: Sink>(out: &mut S, properties: &Properties) {
    for (key, value) in properties {
        write_property(out, key, value);
        out.write_char(tokens::SPACE);
    }
}

/// Writes a node and its children recursively.
///
/// Format:
///
/// ```text
/// node-name arg1 arg2 "key"=value {
/// child-node ...
/// }
/// ```
///
/// Recursion depth equals tree depth; a pathologically deep tree can
/// exhaust the call stack.
pub fn write_node<S: Sink>(out: &mut S, node: &Node) {
    out.write_text(node.name());
    out.write_char(tokens::SPACE);
    write_arguments(out, node.arguments());
    write_properties(out, node.properties());
    out.write_char(tokens::LBRACE);
    out.write_char(tokens::NEWLINE);
    for child in node.children() {
        write_node(out, child);
    }
    out.write_char(tokens::NEWLINE);
    out.write_char(tokens::RBRACE);
    out.write_char(tokens::NEWLINE);
}

/// Writes an entire [`Document`] into the sink.
///
/// The document name becomes a comment header, followed by every
/// root-level child node. The root node itself is an invisible container
/// and is not rendered.
///
/// Format:
///
/// ```text
/// // document-name
/// <node serialization...>
/// ```
pub fn write_document<S: Sink>(out: &mut S, document: &Document) {
    out.write_char(tokens::SLASH);
    out.write_char(tokens::SLASH);
    out.write_char(tokens::SPACE);
    out.write_text(document.name());
    out.write_char(tokens::NEWLINE);
    for node in document.root().children() {
        write_node(out, node);
    }
}
