//! Arena-backed markup tree.
//!
//! All nodes of one conversion live in a single `Vec` owned by [`Document`].
//! Children are stored as index lists in document order. The parent link is
//! only consulted while the tree is being built; rendering always walks the
//! tree top-down from [`Document::root`].

use indexmap::IndexMap;

/// Ordered attribute map (name -> value)
pub type Attributes = IndexMap<String, String>;

/// Index of a node inside its [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// What a node represents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Synthetic document root, never rendered itself
    Root,
    /// Markup element with a lowercase tag name
    Element { tag: String, attributes: Attributes },
    /// Run of character content
    Text(String),
}

/// A node in the arena.
#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl Node {
    fn new(kind: NodeKind, parent: Option<NodeId>) -> Self {
        Self {
            kind,
            parent,
            children: Vec::new(),
        }
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        matches!(self.kind, NodeKind::Element { .. })
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        matches!(self.kind, NodeKind::Text(_))
    }

    /// Tag name for elements
    pub fn tag(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        match &self.kind {
            NodeKind::Element { attributes, .. } => {
                attributes.get(&name.to_ascii_lowercase()).map(String::as_str)
            }
            _ => None,
        }
    }

    /// Character content for text nodes
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// A complete markup tree, built once per conversion.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    /// Create a document holding only the root
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeKind::Root, None)],
        }
    }

    /// The synthetic root
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Node kind, if the id belongs to this document
    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.get(id).map(|n| &n.kind)
    }

    /// Child ids in document order
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Element children whose tag is one of `tags`
    pub fn children_tagged<'a>(
        &'a self,
        id: NodeId,
        tags: &'a [&'a str],
    ) -> impl Iterator<Item = NodeId> + 'a {
        self.children(id)
            .iter()
            .copied()
            .filter(move |&child| self.tag(child).is_some_and(|t| tags.contains(&t)))
    }

    /// Tag name of an element node
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(Node::tag)
    }

    /// Attribute of an element node
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.get(id).and_then(|n| n.attr(name))
    }

    /// Check if a node is an element
    pub fn is_element(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(Node::is_element)
    }

    /// Check if a node is a text run
    pub fn is_text(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(Node::is_text)
    }

    /// All descendant text of a node, concatenated in document order
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        let mut pending = vec![id];
        while let Some(id) = pending.pop() {
            let Some(node) = self.get(id) else {
                continue;
            };
            match &node.kind {
                NodeKind::Text(text) => out.push_str(text),
                _ => pending.extend(node.children.iter().rev()),
            }
        }
        out
    }

    /// Number of nodes, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when nothing but the root exists
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Append an element as the last child of `parent`
    pub fn append_element(&mut self, parent: NodeId, tag: &str, attributes: Attributes) -> NodeId {
        self.append(
            parent,
            NodeKind::Element {
                tag: tag.to_ascii_lowercase(),
                attributes,
            },
        )
    }

    /// Append text under `parent`, merging into a trailing text child
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        let last = self.children(parent).last().copied();
        if let Some(last) = last {
            if let Some(Node {
                kind: NodeKind::Text(existing),
                ..
            }) = self.nodes.get_mut(last.index())
            {
                existing.push_str(text);
                return last;
            }
        }
        self.append(parent, NodeKind::Text(text.to_string()))
    }

    fn append(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new(kind, Some(parent)));
        if let Some(p) = self.nodes.get_mut(parent.index()) {
            p.children.push(id);
        }
        id
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
