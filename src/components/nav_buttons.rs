//! Click-to-navigate bindings for the page's call-to-action buttons.
//!
//! Header groups (`.btn-primary`, `.btn-secondary`, `.login-btn`) leave alone
//! any button with a non-empty inline `onclick`. Footer groups bind every
//! button unconditionally.

#[cfg(test)]
#[path = "nav_buttons_test.rs"]
mod nav_buttons_test;

use std::rc::Rc;

use crate::app::HeaderContext;
use crate::config::Routes;
use crate::dom::{NodeRef, UiEvent, View};
use crate::state::session::Session;

pub const PRIMARY_SELECTOR: &str = ".btn-primary";
pub const SECONDARY_SELECTOR: &str = ".btn-secondary, .login-btn";
pub const FOOTER_PRIMARY_SELECTOR: &str = ".btn-footer-primary";
pub const FOOTER_SECONDARY_SELECTOR: &str = ".btn-footer-secondary";

struct ButtonGroup<'a> {
    selector: &'static str,
    route: &'a str,
    respect_inline: bool,
}

/// Destination of header primary buttons.
pub fn primary_route(routes: &Routes, has_token: bool) -> &str {
    if has_token { &routes.dashboard } else { &routes.register }
}

fn has_inline_handler(view: &dyn View, node: NodeRef) -> bool {
    view.attribute(node, "onclick").is_some_and(|h| !h.is_empty())
}

/// Bind every button group. The primary destination is fixed from the
/// session snapshot taken at bind time. Returns the number of bindings made.
pub fn bind_navigation(ctx: &HeaderContext, session: &Session) -> usize {
    let routes = &ctx.config.routes;
    let groups = [
        ButtonGroup {
            selector: PRIMARY_SELECTOR,
            route: primary_route(routes, session.has_token()),
            respect_inline: true,
        },
        ButtonGroup { selector: SECONDARY_SELECTOR, route: &routes.login, respect_inline: true },
        ButtonGroup { selector: FOOTER_PRIMARY_SELECTOR, route: &routes.register, respect_inline: false },
        ButtonGroup { selector: FOOTER_SECONDARY_SELECTOR, route: &routes.dashboard, respect_inline: false },
    ];

    let view = ctx.view.as_ref();
    let mut bound = 0;
    for group in groups {
        for button in view.query_all(group.selector) {
            if group.respect_inline && has_inline_handler(view, button) {
                continue;
            }
            bind_route(ctx, button, group.route);
            bound += 1;
        }
    }
    bound
}

fn bind_route(ctx: &HeaderContext, button: NodeRef, route: &str) {
    let navigator = ctx.navigator.clone();
    let route = route.to_owned();
    ctx.view
        .listen(button, UiEvent::Click, Rc::new(move || navigator.navigate(&route)));
}
