//! Page navigation: follow a route or reload the current page.

use std::cell::RefCell;

pub trait Navigator {
    fn navigate(&self, route: &str);
    fn reload(&self);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    Route(String),
    Reload,
}

/// Records requests instead of acting on them.
#[derive(Default)]
pub struct RecordingNavigator {
    history: RefCell<Vec<Navigation>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<Navigation> {
        self.history.borrow().clone()
    }

    pub fn last(&self) -> Option<Navigation> {
        self.history.borrow().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        self.history.borrow_mut().push(Navigation::Route(route.to_owned()));
    }

    fn reload(&self) {
        self.history.borrow_mut().push(Navigation::Reload);
    }
}

/// `window.location` backed navigator.
#[cfg(feature = "hydrate")]
pub struct LocationNavigator {
    window: web_sys::Window,
}

#[cfg(feature = "hydrate")]
impl LocationNavigator {
    pub fn new(window: web_sys::Window) -> Self {
        Self { window }
    }
}

#[cfg(feature = "hydrate")]
impl Navigator for LocationNavigator {
    fn navigate(&self, route: &str) {
        let _ = self.window.location().set_href(route);
    }

    fn reload(&self) {
        let _ = self.window.location().reload();
    }
}
