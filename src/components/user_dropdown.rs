//! Hover menu around the header's user-info element.
//!
//! `setup_user_dropdown` restructures
//!
//! ```text
//! <div class="user-info"><span class="user-name">..</span></div>
//! ```
//!
//! into
//!
//! ```text
//! <div class="user-dropdown">
//!   <div class="user-info">..</div>
//!   <div class="dropdown-menu">links.. <button>Logout</button></div>
//! </div>
//! ```
//!
//! in place. The menu gets `show` while the pointer is over the wrapper.

#[cfg(test)]
#[path = "user_dropdown_test.rs"]
mod user_dropdown_test;

use std::rc::Rc;

use crate::app::HeaderContext;
use crate::components::logout::logout;
use crate::config::Routes;
use crate::dom::{NodeRef, UiEvent, element};

pub const WRAPPER_CLASS: &str = "user-dropdown";
pub const MENU_CLASS: &str = "dropdown-menu";
const ITEM_CLASS: &str = "dropdown-item";
const SHOW_CLASS: &str = "show";

/// Link entries in menu order; the Logout action follows them.
pub fn menu_links(routes: &Routes) -> [(&'static str, &str); 4] {
    [
        ("Dashboard", routes.dashboard.as_str()),
        ("Profile", routes.profile.as_str()),
        ("My Quizzes", routes.my_quizzes.as_str()),
        ("Browse All Quizzes", routes.browse_quizzes.as_str()),
    ]
}

/// Wrap `.user-info` in a hover dropdown. Returns the wrapper.
///
/// No-op when `.user-info` or `.user-name` is missing, when `.user-info` is
/// detached, or when it is already wrapped.
pub fn setup_user_dropdown(ctx: &HeaderContext) -> Option<NodeRef> {
    let view = ctx.view.as_ref();
    view.query(".user-name")?;
    let user_section = view.query(".user-info")?;
    let parent = view.parent(user_section)?;
    if view.has_class(parent, WRAPPER_CLASS) {
        return None;
    }

    let menu = element(view, "div", MENU_CLASS, None)?;
    for (label, href) in menu_links(&ctx.config.routes) {
        if let Some(link) = element(view, "a", ITEM_CLASS, Some(label)) {
            view.set_attribute(link, "href", href);
            view.append_child(menu, link);
        }
    }
    if let Some(button) = element(view, "button", ITEM_CLASS, Some("Logout")) {
        let logout_ctx = ctx.clone();
        view.listen(button, UiEvent::Click, Rc::new(move || logout(&logout_ctx)));
        view.append_child(menu, button);
    }

    let wrapper = element(view, "div", WRAPPER_CLASS, None)?;
    view.insert_before(user_section, wrapper);
    view.append_child(wrapper, user_section);
    view.append_child(wrapper, menu);

    let enter_view = ctx.view.clone();
    view.listen(
        wrapper,
        UiEvent::MouseEnter,
        Rc::new(move || enter_view.add_class(menu, SHOW_CLASS)),
    );
    let leave_view = ctx.view.clone();
    view.listen(
        wrapper,
        UiEvent::MouseLeave,
        Rc::new(move || leave_view.remove_class(menu, SHOW_CLASS)),
    );
    Some(wrapper)
}

/// Retrofit the dropdown on pages that skipped the full page-load reflection.
///
/// Acts only for a logged-in session whose name is not already displayed;
/// touches nothing but the user name and the dropdown.
pub fn initialize_dropdown(ctx: &HeaderContext) {
    let session = ctx.session();
    let Some(full_name) = session.display_name() else {
        return;
    };
    let view = ctx.view.as_ref();
    let Some(user_name) = view.query(".user-name") else {
        return;
    };
    if view.text(user_name) == full_name {
        return;
    }
    view.set_text(user_name, full_name);
    view.set_style(user_name, "display", "inline");
    setup_user_dropdown(ctx);
}
