//! Minimal document interface the header glue is written against.
//!
//! DESIGN
//! ======
//! Components never touch `web_sys` directly. They look elements up and mutate
//! them through `View`, which has two implementations: `BrowserView` over the
//! live document (hydrate only) and `HeadlessDocument`, an in-memory tree used
//! by tests and non-browser builds. Elements are addressed by `NodeRef`
//! handles owned by the implementation.

pub mod handles;
pub mod headless;

#[cfg(feature = "hydrate")]
pub mod browser;

use std::rc::Rc;

/// Opaque element handle issued by a `View`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeRef(pub(crate) usize);

/// Pointer events the header listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiEvent {
    Click,
    MouseEnter,
    MouseLeave,
}

impl UiEvent {
    pub fn as_str(self) -> &'static str {
        match self {
            UiEvent::Click => "click",
            UiEvent::MouseEnter => "mouseenter",
            UiEvent::MouseLeave => "mouseleave",
        }
    }
}

pub type Handler = Rc<dyn Fn()>;

/// Element lookup and mutation.
///
/// Lookups return `None`/empty when nothing matches; mutations on detached or
/// unknown handles are silently ignored.
pub trait View {
    fn body(&self) -> Option<NodeRef>;
    /// First element matching a selector, in document order.
    fn query(&self, selector: &str) -> Option<NodeRef>;
    /// All elements matching a selector (comma-separated lists allowed), in
    /// document order.
    fn query_all(&self, selector: &str) -> Vec<NodeRef>;
    fn by_id(&self, id: &str) -> Option<NodeRef>;
    fn create_element(&self, tag: &str) -> Option<NodeRef>;

    fn parent(&self, node: NodeRef) -> Option<NodeRef>;
    fn append_child(&self, parent: NodeRef, child: NodeRef);
    /// Insert `node` into `reference`'s parent, right before `reference`.
    fn insert_before(&self, reference: NodeRef, node: NodeRef);
    /// Detach `node` from the document.
    fn remove(&self, node: NodeRef);

    fn text(&self, node: NodeRef) -> String;
    /// Replace all content of `node` with a single text run.
    fn set_text(&self, node: NodeRef, text: &str);
    fn attribute(&self, node: NodeRef, name: &str) -> Option<String>;
    fn set_attribute(&self, node: NodeRef, name: &str, value: &str);

    fn set_class_name(&self, node: NodeRef, class_name: &str);
    fn has_class(&self, node: NodeRef, class: &str) -> bool;
    fn add_class(&self, node: NodeRef, class: &str);
    fn remove_class(&self, node: NodeRef, class: &str);
    /// Set an inline style property, e.g. `display`.
    fn set_style(&self, node: NodeRef, property: &str, value: &str);

    fn listen(&self, node: NodeRef, event: UiEvent, handler: Handler);
}

/// Create an element with a class list and optional text.
pub(crate) fn element(view: &dyn View, tag: &str, class_name: &str, text: Option<&str>) -> Option<NodeRef> {
    let node = view.create_element(tag)?;
    if !class_name.is_empty() {
        view.set_class_name(node, class_name);
    }
    if let Some(text) = text {
        view.set_text(node, text);
    }
    Some(node)
}
