//! In-memory element tree implementing the `Document` port.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use veneer_app::ports::Document;
use veneer_domain::observer::Span;

/// Handle to an element of a [`MemoryDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug)]
struct Node {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    parent: Option<NodeId>,
    layout: Option<Span>,
}

/// Description of an element to append to a [`MemoryDocument`].
#[derive(Debug, Clone, Default)]
pub struct ElementSpec {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
}

impl ElementSpec {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}

/// Shared, cloneable element tree rooted at `<html>` with a `<body>` child.
///
/// Clones share the same tree, like handles to one browser document.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: Rc<RefCell<Vec<Node>>>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    const ROOT: NodeId = NodeId(0);
    const BODY: NodeId = NodeId(1);

    #[must_use]
    pub fn new() -> Self {
        let node = |tag: &str, parent| Node {
            tag: tag.to_string(),
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            parent,
            layout: None,
        };
        Self {
            nodes: Rc::new(RefCell::new(vec![
                node("html", None),
                node("body", Some(Self::ROOT)),
            ])),
        }
    }

    #[must_use]
    pub fn body(&self) -> NodeId {
        Self::BODY
    }

    /// Append a new element as the last child of `parent`.
    pub fn append(&self, parent: NodeId, spec: ElementSpec) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(Node {
            tag: spec.tag,
            classes: spec.classes,
            attributes: spec.attributes,
            parent: Some(parent),
            layout: None,
        });
        NodeId(nodes.len() - 1)
    }

    /// Place `element` at a vertical position in document coordinates.
    pub fn set_layout(&self, element: NodeId, top: f64, height: f64) {
        self.nodes.borrow_mut()[element.0].layout = Some(Span::new(top, height));
    }

    #[must_use]
    pub fn layout(&self, element: NodeId) -> Option<Span> {
        self.nodes.borrow()[element.0].layout
    }

    #[must_use]
    pub fn classes(&self, element: NodeId) -> Vec<String> {
        self.nodes.borrow()[element.0].classes.clone()
    }

    fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let len = self.nodes.borrow().len();
        (0..len)
            .map(NodeId)
            .filter(|id| *id != scope && self.contains(&scope, id))
            .collect()
    }

    fn select_from(&self, scope: NodeId, selector: &str) -> Vec<NodeId> {
        let Some(selector) = Selector::parse(selector) else {
            tracing::warn!(selector, "unsupported selector");
            return Vec::new();
        };
        let candidates = self.descendants(scope);
        let nodes = self.nodes.borrow();
        candidates
            .into_iter()
            .filter(|id| selector.matches(&nodes[id.0]))
            .collect()
    }
}

impl Document for MemoryDocument {
    type Element = NodeId;

    fn root(&self) -> Option<NodeId> {
        Some(Self::ROOT)
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.nodes
            .borrow()
            .iter()
            .position(|node| node.attributes.get("id").is_some_and(|v| v == id))
            .map(NodeId)
    }

    fn select_all(&self, selector: &str) -> Vec<NodeId> {
        self.select_from(Self::ROOT, selector)
    }

    fn select_within(&self, scope: &NodeId, selector: &str) -> Vec<NodeId> {
        self.select_from(*scope, selector)
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        self.nodes.borrow()[element.0].attributes.get(name).cloned()
    }

    fn set_attribute(&self, element: &NodeId, name: &str, value: &str) {
        self.nodes.borrow_mut()[element.0]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn has_class(&self, element: &NodeId, class: &str) -> bool {
        self.nodes.borrow()[element.0]
            .classes
            .iter()
            .any(|c| c == class)
    }

    fn set_class(&self, element: &NodeId, class: &str, present: bool) {
        let mut nodes = self.nodes.borrow_mut();
        let classes = &mut nodes[element.0].classes;
        let exists = classes.iter().any(|c| c == class);
        if present && !exists {
            classes.push(class.to_string());
        } else if !present && exists {
            classes.retain(|c| c != class);
        }
    }

    fn contains(&self, ancestor: &NodeId, node: &NodeId) -> bool {
        let nodes = self.nodes.borrow();
        let mut current = Some(*node);
        while let Some(id) = current {
            if id == *ancestor {
                return true;
            }
            current = nodes[id.0].parent;
        }
        false
    }
}

/// A compound selector: `tag`, `#id`, `.class`, `[attr]` and `[attr=value]`
/// parts in any combination, without combinators.
#[derive(Debug, Default, PartialEq)]
struct Selector {
    tag: Option<String>,
    classes: Vec<String>,
    attributes: Vec<(String, Option<String>)>,
}

impl Selector {
    fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() || input.contains(char::is_whitespace) || input.contains(',') {
            return None;
        }
        let mut selector = Self::default();
        let tag_end = input.find(['#', '.', '[']).unwrap_or(input.len());
        let (tag, mut rest) = input.split_at(tag_end);
        if !tag.is_empty() && tag != "*" {
            selector.tag = Some(tag.to_ascii_lowercase());
        }
        while let Some(marker) = rest.chars().next() {
            rest = &rest[marker.len_utf8()..];
            match marker {
                '#' | '.' => {
                    let end = rest.find(['#', '.', '[']).unwrap_or(rest.len());
                    let (name, tail) = rest.split_at(end);
                    if name.is_empty() {
                        return None;
                    }
                    if marker == '#' {
                        selector
                            .attributes
                            .push(("id".to_string(), Some(name.to_string())));
                    } else {
                        selector.classes.push(name.to_string());
                    }
                    rest = tail;
                }
                '[' => {
                    let end = rest.find(']')?;
                    let body = &rest[..end];
                    rest = &rest[end + 1..];
                    let attribute = match body.split_once('=') {
                        Some((name, value)) => (
                            name.to_string(),
                            Some(value.trim_matches(['"', '\'']).to_string()),
                        ),
                        None => (body.to_string(), None),
                    };
                    if attribute.0.is_empty() {
                        return None;
                    }
                    selector.attributes.push(attribute);
                }
                _ => return None,
            }
        }
        Some(selector)
    }

    fn matches(&self, node: &Node) -> bool {
        self.tag.as_ref().is_none_or(|tag| *tag == node.tag)
            && self
                .classes
                .iter()
                .all(|class| node.classes.iter().any(|c| c == class))
            && self
                .attributes
                .iter()
                .all(|(name, expected)| match (node.attributes.get(name), expected) {
                    (Some(actual), Some(expected)) => actual == expected,
                    (Some(_), None) => true,
                    (None, _) => false,
                })
    }
}
