//! Minimal in-module port fakes for service unit tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use veneer_domain::error::StorageError;
use veneer_domain::theme::ColorScheme;
use veneer_domain::time::{self, Timestamp};

use crate::ports::{Clock, Document, Environment, PreferenceStore, Viewport};

#[derive(Default)]
struct Node {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: HashMap<String, String>,
    parent: Option<usize>,
}

/// Flat element list with parent links. Supports `tag`, `.class`, `#id` and
/// `tag[attr]` selectors.
#[derive(Clone, Default)]
pub struct FakeDocument {
    nodes: Rc<RefCell<Vec<Node>>>,
}

impl FakeDocument {
    pub fn new() -> Self {
        let doc = Self::default();
        doc.nodes.borrow_mut().push(Node {
            tag: "html".to_string(),
            ..Node::default()
        });
        doc
    }

    pub fn add(&self, parent: usize, tag: &str, id: Option<&str>, classes: &[&str]) -> usize {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(Node {
            tag: tag.to_string(),
            id: id.map(str::to_string),
            classes: classes.iter().map(|c| (*c).to_string()).collect(),
            attributes: HashMap::new(),
            parent: Some(parent),
        });
        nodes.len() - 1
    }

    fn matches(node: &Node, selector: &str) -> bool {
        if let Some(class) = selector.strip_prefix('.') {
            return node.classes.iter().any(|c| c == class);
        }
        if let Some(id) = selector.strip_prefix('#') {
            return node.id.as_deref() == Some(id);
        }
        match selector.split_once('[') {
            Some((tag, attr)) => {
                let attr = attr.trim_end_matches(']');
                node.tag == tag && node.attributes.contains_key(attr)
            }
            None => node.tag == selector,
        }
    }
}

impl Document for FakeDocument {
    type Element = usize;

    fn root(&self) -> Option<usize> {
        Some(0)
    }

    fn element_by_id(&self, id: &str) -> Option<usize> {
        self.nodes
            .borrow()
            .iter()
            .position(|n| n.id.as_deref() == Some(id))
    }

    fn select_all(&self, selector: &str) -> Vec<usize> {
        self.select_within(&0, selector)
    }

    fn select_within(&self, scope: &usize, selector: &str) -> Vec<usize> {
        let nodes = self.nodes.borrow();
        (0..nodes.len())
            .filter(|i| i != scope && self.contains(scope, i))
            .filter(|i| Self::matches(&nodes[*i], selector))
            .collect()
    }

    fn attribute(&self, element: &usize, name: &str) -> Option<String> {
        self.nodes.borrow()[*element].attributes.get(name).cloned()
    }

    fn set_attribute(&self, element: &usize, name: &str, value: &str) {
        self.nodes.borrow_mut()[*element]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn has_class(&self, element: &usize, class: &str) -> bool {
        self.nodes.borrow()[*element].classes.iter().any(|c| c == class)
    }

    fn set_class(&self, element: &usize, class: &str, present: bool) {
        let mut nodes = self.nodes.borrow_mut();
        let classes = &mut nodes[*element].classes;
        classes.retain(|c| c != class);
        if present {
            classes.push(class.to_string());
        }
    }

    fn contains(&self, ancestor: &usize, node: &usize) -> bool {
        let nodes = self.nodes.borrow();
        let mut current = Some(*node);
        while let Some(index) = current {
            if index == *ancestor {
                return true;
            }
            current = nodes[index].parent;
        }
        false
    }
}

#[derive(Default)]
pub struct FakeStore {
    pub values: RefCell<HashMap<String, String>>,
    pub fail_writes: Cell<bool>,
}

impl PreferenceStore for FakeStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            return Err(StorageError::Write {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            });
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeEnvironment {
    pub scheme: Option<ColorScheme>,
    pub native_lazy: bool,
}

impl Environment for FakeEnvironment {
    fn color_scheme(&self) -> Option<ColorScheme> {
        self.scheme
    }

    fn supports_native_lazy_loading(&self) -> bool {
        self.native_lazy
    }
}

#[derive(Default)]
pub struct FakeViewport {
    pub offset: Cell<f64>,
    pub scroll_to_top_calls: Cell<u32>,
}

impl Viewport for FakeViewport {
    fn scroll_offset(&self) -> f64 {
        self.offset.get()
    }

    fn scroll_to_top(&self) {
        self.scroll_to_top_calls.set(self.scroll_to_top_calls.get() + 1);
        self.offset.set(0.0);
    }
}

pub struct FakeClock {
    pub now: Cell<Timestamp>,
}

impl Default for FakeClock {
    fn default() -> Self {
        Self {
            now: Cell::new(time::from_millis(0)),
        }
    }
}

impl FakeClock {
    pub fn set_millis(&self, millis: i64) {
        self.now.set(time::from_millis(millis));
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Timestamp {
        self.now.get()
    }
}
