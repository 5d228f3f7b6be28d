//! The named tree element of a document.

use crate::{Arguments, Properties};

/// A node is the core element of the document tree. Each node has:
///
/// - A name
/// - An ordered list of arguments ([`Arguments`])
/// - A set of named properties ([`Properties`])
/// - A list of child nodes
///
/// Children are owned exclusively by their parent, so nodes form a strict
/// tree with no sharing or cycles; dropping a node drops everything
/// beneath it. Children are appended and removed through the child `Vec`
/// directly.
///
/// No validation happens at this layer: an empty name or duplicate child
/// names are structurally permitted.
///
/// # Examples
///
/// ```rust
/// use kdl_tree::{Node, Value};
///
/// let mut server = Node::new("server");
/// server.arguments_mut().push(Value::from("localhost"));
/// server
///     .properties_mut()
///     .insert("port".to_string(), Value::from(8080));
/// server.children_mut().push(Node::new("tls"));
///
/// assert_eq!(server.name(), "server");
/// assert_eq!(server.children().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Node {
    name: String,
    arguments: Arguments,
    properties: Properties,
    children: Vec<Node>,
}

impl Node {
    /// Creates a node with the given name and no arguments, properties,
    /// or children.
    pub fn new(name: impl Into<String>) -> Self {
        Node {
            name: name.into(),
            arguments: Arguments::new(),
            properties: Properties::new(),
            children: Vec::new(),
        }
    }

    /// Gets the name of the node.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the name of the node.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Gets the arguments of this node.
    #[must_use]
    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    /// Gets a modifiable reference to the arguments of this node.
    #[must_use]
    pub fn arguments_mut(&mut self) -> &mut Arguments {
        &mut self.arguments
    }

    /// Gets the properties of this node.
    #[must_use]
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Gets a modifiable reference to the properties of this node.
    #[must_use]
    pub fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }

    /// Gets the child nodes of this node.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Gets a modifiable reference to the list of child nodes.
    #[must_use]
    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }
}
