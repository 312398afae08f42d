//! Reflect the stored session into the header and hero.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs on every page load against a fresh session read. Logged in means a
//! non-empty token plus a non-empty `full_name`; anything else renders the
//! guest header. Each element is looked up on its own, so a page missing one
//! of them still gets the rest.

#[cfg(test)]
#[path = "auth_ui_test.rs"]
mod auth_ui_test;

use crate::app::HeaderContext;
use crate::components::user_dropdown::setup_user_dropdown;
use crate::dom::element;
use crate::state::session::Session;

pub const GUEST_LABEL: &str = "Guest";
pub const HERO_TITLE_ID: &str = "heroTitle";
pub const HERO_DESCRIPTION_ID: &str = "heroDescription";
pub const HERO_BUTTONS_ID: &str = "heroButtons";
pub const HERO_DESCRIPTION: &str =
    "Ready to create new quizzes or take on some challenges? Your learning journey continues here.";

/// What the header should show for a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthView {
    LoggedIn { full_name: String, greeting: String },
    Guest,
}

impl AuthView {
    pub fn from_session(session: &Session) -> Self {
        match (session.display_name(), session.greeting_name()) {
            (Some(full_name), Some(greeting)) => AuthView::LoggedIn {
                full_name: full_name.to_owned(),
                greeting: greeting.to_owned(),
            },
            _ => AuthView::Guest,
        }
    }
}

pub fn update_auth_ui(ctx: &HeaderContext, session: &Session) {
    let view = ctx.view.as_ref();
    let login_btn = view.query(".login-btn");
    let user_section = view.query(".user-info");
    let user_name = view.query(".user-name");

    match AuthView::from_session(session) {
        AuthView::LoggedIn { full_name, greeting } => {
            if let Some(btn) = login_btn {
                view.set_style(btn, "display", "none");
            }
            if let Some(section) = user_section {
                view.set_style(section, "display", "flex");
            }
            if let Some(name) = user_name {
                view.set_text(name, &full_name);
                view.set_style(name, "display", "inline");
            }
            setup_user_dropdown(ctx);
            update_hero_for_logged_in_user(ctx, &greeting);
        }
        AuthView::Guest => {
            if let Some(btn) = login_btn {
                view.set_style(btn, "display", "block");
            }
            if let Some(section) = user_section {
                view.set_style(section, "display", "flex");
            }
            if let Some(name) = user_name {
                view.set_text(name, GUEST_LABEL);
                view.set_style(name, "display", "inline");
                view.set_style(name, "visibility", "visible");
            }
        }
    }
}

/// Swap the hero to its "welcome back" variant. Needs all three hero
/// elements; returns whether the hero was rewritten.
///
/// The new buttons carry inline `onclick` handlers, which keeps the
/// navigation binder off them.
pub fn update_hero_for_logged_in_user(ctx: &HeaderContext, first_name: &str) -> bool {
    let view = ctx.view.as_ref();
    let (Some(title), Some(description), Some(buttons)) = (
        view.by_id(HERO_TITLE_ID),
        view.by_id(HERO_DESCRIPTION_ID),
        view.by_id(HERO_BUTTONS_ID),
    ) else {
        return false;
    };

    view.set_text(title, &format!("Welcome back, {first_name}!"));
    view.set_text(description, HERO_DESCRIPTION);

    let routes = &ctx.config.routes;
    view.set_text(buttons, "");
    for (label, class_name, route) in [
        ("Go to Dashboard", "btn-primary", routes.dashboard.as_str()),
        ("Create Quiz", "btn-secondary", routes.create_quiz.as_str()),
    ] {
        if let Some(button) = element(view, "button", class_name, Some(label)) {
            view.set_attribute(button, "onclick", &inline_navigation(route));
            view.append_child(buttons, button);
        }
    }
    true
}

/// JS snippet that navigates to `route`, with quotes escaped.
pub fn inline_navigation(route: &str) -> String {
    let escaped = route.replace('\\', "\\\\").replace('\'', "\\'");
    format!("window.location.href='{escaped}'")
}
