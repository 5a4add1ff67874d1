use std::collections::BTreeMap;

/// Source location recorded by the parser. Stripped from any content that is
/// relocated into a ToC, since the original offsets stop meaning anything there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

/// A single node in a document tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(Text),
    Comment(Comment),
}

/// An element with a tag, an attribute map and ordered children
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub properties: BTreeMap<String, String>,
    pub children: Vec<Node>,
    pub position: Option<Position>,
}

/// A run of character data
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub value: String,
    pub position: Option<Position>,
}

/// A comment node
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub value: String,
    pub position: Option<Position>,
}

/// The root of a parsed document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub children: Vec<Node>,
}

/// Child-index path from the document root to a node
pub type NodePath = Vec<usize>;

impl Element {
    pub fn new<S: Into<String>>(tag: S) -> Self {
        Element {
            tag: tag.into(),
            properties: BTreeMap::new(),
            children: Vec::new(),
            position: None,
        }
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(|v| v.as_str())
    }

    pub fn set_attribute<S: Into<String>>(&mut self, name: &str, value: S) {
        self.properties.insert(name.to_string(), value.into());
    }
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(elem) => Some(elem),
            Node::Text(_) | Node::Comment(_) => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(elem) => Some(elem),
            Node::Text(_) | Node::Comment(_) => None,
        }
    }
}

impl Document {
    /// Look up the element at a child-index path
    pub fn element_at(&self, path: &[usize]) -> Option<&Element> {
        let (&first, rest) = path.split_first()?;
        let mut elem = self.children.get(first)?.as_element()?;
        for &index in rest {
            elem = elem.children.get(index)?.as_element()?;
        }
        Some(elem)
    }

    /// Mutable variant of `element_at`
    pub fn element_at_mut(&mut self, path: &[usize]) -> Option<&mut Element> {
        let (&first, rest) = path.split_first()?;
        let mut elem = self.children.get_mut(first)?.as_element_mut()?;
        for &index in rest {
            elem = elem.children.get_mut(index)?.as_element_mut()?;
        }
        Some(elem)
    }
}

/// Recursively remove parser position metadata from a subtree
pub fn strip_positions(nodes: &mut [Node]) {
    for node in nodes {
        match node {
            Node::Element(elem) => {
                elem.position = None;
                strip_positions(&mut elem.children);
            }
            Node::Text(text) => text.position = None,
            Node::Comment(comment) => comment.position = None,
        }
    }
}
