//! In-memory `View` used by tests and non-browser builds.
//!
//! Supports the selector subset the header uses: compound `tag#id.class`
//! selectors and comma-separated lists. Events are delivered synchronously
//! through `dispatch`.

#[cfg(test)]
#[path = "headless_test.rs"]
mod headless_test;

use std::cell::RefCell;
use std::collections::BTreeMap;

use super::{Handler, NodeRef, UiEvent, View};

const BODY: usize = 0;

struct NodeData {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    text: String,
    parent: Option<usize>,
    children: Vec<usize>,
    listeners: Vec<(UiEvent, Handler)>,
}

impl NodeData {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            style: BTreeMap::new(),
            text: String::new(),
            parent: None,
            children: Vec::new(),
            listeners: Vec::new(),
        }
    }
}

/// Document with a single `<body>` root.
pub struct HeadlessDocument {
    nodes: RefCell<Vec<NodeData>>,
}

impl Default for HeadlessDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessDocument {
    pub fn new() -> Self {
        Self { nodes: RefCell::new(vec![NodeData::new("body")]) }
    }

    /// Create an element and append it to `parent`.
    pub fn add(&self, parent: NodeRef, tag: &str, class_name: &str) -> NodeRef {
        let node = self.alloc(tag);
        if !class_name.is_empty() {
            self.set_class_name(node, class_name);
        }
        self.append_child(parent, node);
        node
    }

    /// Create an element with an `id` and append it to `parent`.
    pub fn add_with_id(&self, parent: NodeRef, tag: &str, id: &str) -> NodeRef {
        let node = self.add(parent, tag, "");
        self.set_attribute(node, "id", id);
        node
    }

    /// Body handle; always present.
    pub fn root(&self) -> NodeRef {
        NodeRef(BODY)
    }

    /// Deliver `event` to every listener registered on `node`.
    pub fn dispatch(&self, node: NodeRef, event: UiEvent) {
        let handlers: Vec<Handler> = self
            .nodes
            .borrow()
            .get(node.0)
            .map(|n| {
                n.listeners
                    .iter()
                    .filter(|(e, _)| *e == event)
                    .map(|(_, h)| h.clone())
                    .collect()
            })
            .unwrap_or_default();
        for handler in handlers {
            handler();
        }
    }

    pub fn click(&self, node: NodeRef) {
        self.dispatch(node, UiEvent::Click);
    }

    pub fn listener_count(&self, node: NodeRef, event: UiEvent) -> usize {
        self.nodes
            .borrow()
            .get(node.0)
            .map_or(0, |n| n.listeners.iter().filter(|(e, _)| *e == event).count())
    }

    pub fn style(&self, node: NodeRef, property: &str) -> Option<String> {
        self.nodes.borrow().get(node.0)?.style.get(property).cloned()
    }

    pub fn tag(&self, node: NodeRef) -> Option<String> {
        self.nodes.borrow().get(node.0).map(|n| n.tag.clone())
    }

    pub fn children(&self, node: NodeRef) -> Vec<NodeRef> {
        self.nodes
            .borrow()
            .get(node.0)
            .map(|n| n.children.iter().copied().map(NodeRef).collect())
            .unwrap_or_default()
    }

    /// Whether `node` is reachable from `<body>`.
    pub fn is_attached(&self, node: NodeRef) -> bool {
        let nodes = self.nodes.borrow();
        let mut cursor = Some(node.0);
        while let Some(idx) = cursor {
            if idx == BODY {
                return true;
            }
            cursor = nodes.get(idx).and_then(|n| n.parent);
        }
        false
    }

    fn alloc(&self, tag: &str) -> NodeRef {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(NodeData::new(tag));
        NodeRef(nodes.len() - 1)
    }

    fn detach(nodes: &mut [NodeData], idx: usize) {
        if let Some(parent) = nodes[idx].parent.take() {
            nodes[parent].children.retain(|c| *c != idx);
        }
    }

    /// Attached nodes in document order.
    fn document_order(&self) -> Vec<usize> {
        let nodes = self.nodes.borrow();
        let mut out = Vec::new();
        let mut stack = vec![BODY];
        while let Some(idx) = stack.pop() {
            out.push(idx);
            stack.extend(nodes[idx].children.iter().rev().copied());
        }
        out
    }

    fn text_content(nodes: &[NodeData], idx: usize) -> String {
        let mut out = nodes[idx].text.clone();
        for child in &nodes[idx].children {
            out.push_str(&Self::text_content(nodes, *child));
        }
        out
    }

    fn with_node(&self, node: NodeRef, f: impl FnOnce(&mut NodeData)) {
        if let Some(data) = self.nodes.borrow_mut().get_mut(node.0) {
            f(data);
        }
    }
}

#[derive(Debug, Default, PartialEq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Compound {
    fn matches(&self, node: &NodeData) -> bool {
        self.tag.as_ref().map_or(true, |t| t.eq_ignore_ascii_case(&node.tag))
            && self.id.as_ref().map_or(true, |id| node.attributes.get("id") == Some(id))
            && self.classes.iter().all(|c| node.classes.contains(c))
    }
}

fn parse_selector(selector: &str) -> Vec<Compound> {
    selector
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(parse_compound)
        .collect()
}

fn parse_compound(input: &str) -> Compound {
    let mut compound = Compound::default();
    let mut kind = None;
    let mut buf = String::new();
    for ch in input.chars().map(Some).chain(std::iter::once(None)) {
        match ch {
            Some('.' | '#') | None => {
                if !buf.is_empty() {
                    let part = std::mem::take(&mut buf);
                    match kind {
                        Some('.') => compound.classes.push(part),
                        Some('#') => compound.id = Some(part),
                        _ => compound.tag = Some(part),
                    }
                }
                kind = ch;
            }
            Some(c) => buf.push(c),
        }
    }
    compound
}

impl View for HeadlessDocument {
    fn body(&self) -> Option<NodeRef> {
        Some(NodeRef(BODY))
    }

    fn query(&self, selector: &str) -> Option<NodeRef> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<NodeRef> {
        let compounds = parse_selector(selector);
        if compounds.is_empty() {
            return Vec::new();
        }
        let order = self.document_order();
        let nodes = self.nodes.borrow();
        order
            .into_iter()
            .filter(|idx| compounds.iter().any(|c| c.matches(&nodes[*idx])))
            .map(NodeRef)
            .collect()
    }

    fn by_id(&self, id: &str) -> Option<NodeRef> {
        self.query(&format!("#{id}"))
    }

    fn create_element(&self, tag: &str) -> Option<NodeRef> {
        Some(self.alloc(tag))
    }

    fn parent(&self, node: NodeRef) -> Option<NodeRef> {
        self.nodes.borrow().get(node.0)?.parent.map(NodeRef)
    }

    fn append_child(&self, parent: NodeRef, child: NodeRef) {
        let mut nodes = self.nodes.borrow_mut();
        if parent.0 >= nodes.len() || child.0 >= nodes.len() || parent == child || child.0 == BODY {
            return;
        }
        Self::detach(&mut nodes, child.0);
        nodes[child.0].parent = Some(parent.0);
        nodes[parent.0].children.push(child.0);
    }

    fn insert_before(&self, reference: NodeRef, node: NodeRef) {
        let mut nodes = self.nodes.borrow_mut();
        if reference.0 >= nodes.len() || node.0 >= nodes.len() || reference == node || node.0 == BODY {
            return;
        }
        let Some(parent) = nodes[reference.0].parent else {
            return;
        };
        Self::detach(&mut nodes, node.0);
        let pos = nodes[parent]
            .children
            .iter()
            .position(|c| *c == reference.0)
            .unwrap_or(0);
        nodes[parent].children.insert(pos, node.0);
        nodes[node.0].parent = Some(parent);
    }

    fn remove(&self, node: NodeRef) {
        let mut nodes = self.nodes.borrow_mut();
        if node.0 == BODY || node.0 >= nodes.len() {
            return;
        }
        Self::detach(&mut nodes, node.0);
    }

    fn text(&self, node: NodeRef) -> String {
        let nodes = self.nodes.borrow();
        if node.0 >= nodes.len() {
            return String::new();
        }
        Self::text_content(&nodes, node.0)
    }

    fn set_text(&self, node: NodeRef, text: &str) {
        let mut nodes = self.nodes.borrow_mut();
        if node.0 >= nodes.len() {
            return;
        }
        for child in std::mem::take(&mut nodes[node.0].children) {
            nodes[child].parent = None;
        }
        nodes[node.0].text = text.to_owned();
    }

    fn attribute(&self, node: NodeRef, name: &str) -> Option<String> {
        let nodes = self.nodes.borrow();
        let data = nodes.get(node.0)?;
        if name == "class" {
            return (!data.classes.is_empty()).then(|| data.classes.join(" "));
        }
        data.attributes.get(name).cloned()
    }

    fn set_attribute(&self, node: NodeRef, name: &str, value: &str) {
        if name == "class" {
            self.set_class_name(node, value);
            return;
        }
        self.with_node(node, |n| {
            n.attributes.insert(name.to_owned(), value.to_owned());
        });
    }

    fn set_class_name(&self, node: NodeRef, class_name: &str) {
        self.with_node(node, |n| {
            n.classes = class_name.split_whitespace().map(str::to_owned).collect();
        });
    }

    fn has_class(&self, node: NodeRef, class: &str) -> bool {
        self.nodes
            .borrow()
            .get(node.0)
            .map_or(false, |n| n.classes.iter().any(|c| c == class))
    }

    fn add_class(&self, node: NodeRef, class: &str) {
        self.with_node(node, |n| {
            if !n.classes.iter().any(|c| c == class) {
                n.classes.push(class.to_owned());
            }
        });
    }

    fn remove_class(&self, node: NodeRef, class: &str) {
        self.with_node(node, |n| n.classes.retain(|c| c != class));
    }

    fn set_style(&self, node: NodeRef, property: &str, value: &str) {
        self.with_node(node, |n| {
            n.style.insert(property.to_owned(), value.to_owned());
        });
    }

    fn listen(&self, node: NodeRef, event: UiEvent, handler: Handler) {
        self.with_node(node, |n| n.listeners.push((event, handler)));
    }
}
