//! Keyed table behind the `NodeRef` handles a live `View` hands out.
//!
//! Each entry is reachable by its handle in constant time. Callers stamp the
//! handle onto the underlying element (see `BrowserView`) and pass it back as
//! the lookup key, so re-interning an element never scans the table. Entries
//! are released when their element leaves the document, which keeps the table
//! bounded by the number of live elements the header has touched.

#[cfg(test)]
#[path = "handles_test.rs"]
mod handles_test;

use std::collections::HashMap;

use super::NodeRef;

#[derive(Debug)]
pub struct HandleTable<T> {
    entries: HashMap<usize, T>,
    next: usize,
}

impl<T> Default for HandleTable<T> {
    fn default() -> Self {
        Self { entries: HashMap::new(), next: 0 }
    }
}

impl<T: PartialEq> HandleTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `item` to a handle.
    ///
    /// `key` is the handle previously stamped on the item, if any. It is
    /// reused only while it still maps to an equal item; otherwise a fresh
    /// handle is issued. Returns the handle and whether it is new.
    pub fn intern(&mut self, key: Option<NodeRef>, item: T) -> (NodeRef, bool) {
        if let Some(node) = key
            && self.entries.get(&node.0) == Some(&item)
        {
            return (node, false);
        }
        let node = NodeRef(self.next);
        self.next += 1;
        self.entries.insert(node.0, item);
        (node, true)
    }

    pub fn get(&self, node: NodeRef) -> Option<&T> {
        self.entries.get(&node.0)
    }

    /// Forget `node`. Later lookups of the handle return `None`.
    pub fn release(&mut self, node: NodeRef) -> Option<T> {
        self.entries.remove(&node.0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
