//! The top-level document container.

use crate::{Error, Node, Result};
use std::fs::File;
use std::path::Path;

/// An entire document: a name plus one root node.
///
/// The root node exclusively owns the whole tree beneath it. It acts as
/// an invisible container — the writer renders the document header and
/// the root's children, never the root itself — so a freshly created
/// document has an unnamed, empty root ready to be populated.
///
/// # Examples
///
/// ```rust
/// use kdl_tree::{Document, Node, Value};
///
/// let mut doc = Document::default();
/// doc.set_name("config");
///
/// let mut server = Node::new("server");
/// server.arguments_mut().push(Value::from(8080));
/// doc.root_mut().children_mut().push(server);
///
/// let rendered = kdl_tree::to_string(&doc);
/// assert!(rendered.starts_with("// config\n"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    name: String,
    root: Node,
}

impl Document {
    /// Creates an empty document: no name, an unnamed empty root.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the name of the document.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the name of the document.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Gets the root node of the document.
    #[must_use]
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Gets a modifiable reference to the root node of the document.
    #[must_use]
    pub fn root_mut(&mut self) -> &mut Node {
        &mut self.root
    }

    /// Replaces the root node of the document.
    pub fn set_root(&mut self, root: Node) {
        self.root = root;
    }

    /// Serializes the document and writes it to a file at the given path.
    ///
    /// The byte sequence written is exactly what [`to_string`](crate::to_string)
    /// produces; this method only adds the file handling. The file is
    /// created if missing and truncated if present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be created or written.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use kdl_tree::Document;
    ///
    /// let mut doc = Document::new();
    /// doc.set_name("config");
    /// doc.write_to_file("config.kdl").unwrap();
    /// ```
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path).map_err(|e| Error::io(&e.to_string()))?;
        crate::to_writer(file, self)
    }
}
