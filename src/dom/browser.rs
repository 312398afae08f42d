//! `View` over the live browser document.
//!
//! Elements are interned into a `HandleTable` so components can hold plain
//! `NodeRef` values. The handle is stamped on the element as
//! `data-header-node`, and released when the element is removed or its
//! content replaced. Listener closures are leaked with `forget`; they live as
//! long as the page does.

use std::cell::RefCell;

use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, Element, HtmlElement};

use super::handles::HandleTable;
use super::{Handler, NodeRef, UiEvent, View};

const HANDLE_ATTRIBUTE: &str = "data-header-node";

pub struct BrowserView {
    document: Document,
    nodes: RefCell<HandleTable<Element>>,
}

impl BrowserView {
    pub fn new(document: Document) -> Self {
        Self { document, nodes: RefCell::new(HandleTable::new()) }
    }

    fn intern(&self, element: Element) -> NodeRef {
        let key = element
            .get_attribute(HANDLE_ATTRIBUTE)
            .and_then(|raw| raw.parse().ok())
            .map(NodeRef);
        let (node, fresh) = self.nodes.borrow_mut().intern(key, element.clone());
        if fresh {
            let _ = element.set_attribute(HANDLE_ATTRIBUTE, &node.0.to_string());
        }
        node
    }

    fn get(&self, node: NodeRef) -> Option<Element> {
        self.nodes.borrow().get(node).cloned()
    }

    /// Drop the handles of every stamped element below `element`.
    fn release_descendants(&self, element: &Element) {
        let Ok(list) = element.query_selector_all(&format!("[{HANDLE_ATTRIBUTE}]")) else {
            return;
        };
        let mut nodes = self.nodes.borrow_mut();
        for child in (0..list.length()).filter_map(|i| list.item(i)) {
            let Ok(child) = child.dyn_into::<Element>() else {
                continue;
            };
            if let Some(id) = child.get_attribute(HANDLE_ATTRIBUTE).and_then(|raw| raw.parse().ok()) {
                nodes.release(NodeRef(id));
            }
            let _ = child.remove_attribute(HANDLE_ATTRIBUTE);
        }
    }
}

impl View for BrowserView {
    fn body(&self) -> Option<NodeRef> {
        let body = self.document.body()?;
        Some(self.intern(body.unchecked_into()))
    }

    fn query(&self, selector: &str) -> Option<NodeRef> {
        let element = self.document.query_selector(selector).ok().flatten()?;
        Some(self.intern(element))
    }

    fn query_all(&self, selector: &str) -> Vec<NodeRef> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|n| n.dyn_into::<Element>().ok())
            .map(|e| self.intern(e))
            .collect()
    }

    fn by_id(&self, id: &str) -> Option<NodeRef> {
        let element = self.document.get_element_by_id(id)?;
        Some(self.intern(element))
    }

    fn create_element(&self, tag: &str) -> Option<NodeRef> {
        let element = self.document.create_element(tag).ok()?;
        Some(self.intern(element))
    }

    fn parent(&self, node: NodeRef) -> Option<NodeRef> {
        let parent = self.get(node)?.parent_element()?;
        Some(self.intern(parent))
    }

    fn append_child(&self, parent: NodeRef, child: NodeRef) {
        if let (Some(parent), Some(child)) = (self.get(parent), self.get(child)) {
            let _ = parent.append_child(&child);
        }
    }

    fn insert_before(&self, reference: NodeRef, node: NodeRef) {
        let (Some(reference), Some(node)) = (self.get(reference), self.get(node)) else {
            return;
        };
        if let Some(parent) = reference.parent_node() {
            let _ = parent.insert_before(&node, Some(&reference));
        }
    }

    fn remove(&self, node: NodeRef) {
        let Some(element) = self.get(node) else {
            return;
        };
        element.remove();
        self.release_descendants(&element);
        self.nodes.borrow_mut().release(node);
        let _ = element.remove_attribute(HANDLE_ATTRIBUTE);
    }

    fn text(&self, node: NodeRef) -> String {
        self.get(node).and_then(|e| e.text_content()).unwrap_or_default()
    }

    fn set_text(&self, node: NodeRef, text: &str) {
        if let Some(element) = self.get(node) {
            self.release_descendants(&element);
            element.set_text_content(Some(text));
        }
    }

    fn attribute(&self, node: NodeRef, name: &str) -> Option<String> {
        self.get(node)?.get_attribute(name)
    }

    fn set_attribute(&self, node: NodeRef, name: &str, value: &str) {
        if let Some(element) = self.get(node) {
            let _ = element.set_attribute(name, value);
        }
    }

    fn set_class_name(&self, node: NodeRef, class_name: &str) {
        if let Some(element) = self.get(node) {
            element.set_class_name(class_name);
        }
    }

    fn has_class(&self, node: NodeRef, class: &str) -> bool {
        self.get(node).map_or(false, |e| e.class_list().contains(class))
    }

    fn add_class(&self, node: NodeRef, class: &str) {
        if let Some(element) = self.get(node) {
            let _ = element.class_list().add_1(class);
        }
    }

    fn remove_class(&self, node: NodeRef, class: &str) {
        if let Some(element) = self.get(node) {
            let _ = element.class_list().remove_1(class);
        }
    }

    fn set_style(&self, node: NodeRef, property: &str, value: &str) {
        if let Some(element) = self.get(node).and_then(|e| e.dyn_into::<HtmlElement>().ok()) {
            let _ = element.style().set_property(property, value);
        }
    }

    fn listen(&self, node: NodeRef, event: UiEvent, handler: Handler) {
        let Some(element) = self.get(node) else {
            return;
        };
        let cb = Closure::<dyn FnMut()>::new(move || handler());
        let _ = element.add_event_listener_with_callback(event.as_str(), cb.as_ref().unchecked_ref());
        cb.forget();
    }
}
