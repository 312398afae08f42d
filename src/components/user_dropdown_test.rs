use super::*;
use crate::dom::View;
use crate::testing::Fixture;
use crate::util::navigator::Navigation;

#[test]
fn wraps_user_info_in_place_with_menu() {
    let fx = Fixture::logged_in();
    let page = fx.page();
    let header = fx.doc.parent(page.user_info).expect("header");

    let wrapper = setup_user_dropdown(&fx.ctx).expect("wrapped");

    assert_eq!(fx.doc.children(header), vec![page.login_btn, wrapper]);
    let menu = fx.doc.query(".dropdown-menu").expect("menu");
    assert_eq!(fx.doc.children(wrapper), vec![page.user_info, menu]);

    let items = fx.doc.query_all(".dropdown-item");
    let labels: Vec<String> = items.iter().map(|n| fx.doc.text(*n)).collect();
    assert_eq!(labels, ["Dashboard", "Profile", "My Quizzes", "Browse All Quizzes", "Logout"]);
    let hrefs: Vec<Option<String>> = items[..4].iter().map(|n| fx.doc.attribute(*n, "href")).collect();
    assert_eq!(
        hrefs,
        [
            Some("/dashboard".to_owned()),
            Some("/profile".to_owned()),
            Some("/my-quizzes".to_owned()),
            Some("/browse-quizzes".to_owned()),
        ]
    );
    assert_eq!(fx.doc.tag(items[4]).as_deref(), Some("button"));
}

#[test]
fn hover_toggles_show_class() {
    let fx = Fixture::logged_in();
    fx.page();
    let wrapper = setup_user_dropdown(&fx.ctx).expect("wrapped");
    let menu = fx.doc.query(".dropdown-menu").expect("menu");

    fx.doc.dispatch(wrapper, UiEvent::MouseEnter);
    assert!(fx.doc.has_class(menu, "show"));
    fx.doc.dispatch(wrapper, UiEvent::MouseLeave);
    assert!(!fx.doc.has_class(menu, "show"));

    // Hover is the only trigger.
    fx.doc.click(wrapper);
    assert!(!fx.doc.has_class(menu, "show"));
}

#[test]
fn logout_entry_runs_logout() {
    let fx = Fixture::logged_in();
    fx.page();
    setup_user_dropdown(&fx.ctx);
    let logout_btn = fx.doc.query("button.dropdown-item").expect("logout button");

    fx.doc.click(logout_btn);
    assert!(!fx.store.contains("auth_token"));
    fx.clock.advance(crate::components::logout::RELOAD_DELAY);
    assert_eq!(fx.nav.last(), Some(Navigation::Reload));
}

#[test]
fn second_call_does_not_wrap_again() {
    let fx = Fixture::logged_in();
    fx.page();
    assert!(setup_user_dropdown(&fx.ctx).is_some());
    assert!(setup_user_dropdown(&fx.ctx).is_none());
    assert_eq!(fx.doc.query_all(".user-dropdown").len(), 1);
    assert_eq!(fx.doc.query_all(".dropdown-menu").len(), 1);
}

#[test]
fn missing_elements_make_builder_a_noop() {
    let fx = Fixture::logged_in();
    assert!(setup_user_dropdown(&fx.ctx).is_none());

    fx.doc.add(fx.doc.root(), "div", "user-info");
    assert!(setup_user_dropdown(&fx.ctx).is_none());
    assert!(fx.doc.query(".user-dropdown").is_none());
}

#[test]
fn initialize_dropdown_updates_name_and_wraps() {
    let fx = Fixture::logged_in();
    let page = fx.page();
    fx.doc.set_text(page.user_name, "Guest");

    initialize_dropdown(&fx.ctx);

    assert_eq!(fx.doc.text(page.user_name), "Jane Doe");
    assert_eq!(fx.doc.style(page.user_name, "display").as_deref(), Some("inline"));
    assert!(fx.doc.query(".user-dropdown").is_some());
    // Nothing else is touched.
    assert_eq!(fx.doc.style(page.login_btn, "display"), None);
    assert_eq!(fx.doc.text(page.hero_title), "");
}

#[test]
fn initialize_dropdown_skips_when_name_already_shown() {
    let fx = Fixture::logged_in();
    let page = fx.page();
    fx.doc.set_text(page.user_name, "Jane Doe");

    initialize_dropdown(&fx.ctx);
    assert!(fx.doc.query(".user-dropdown").is_none());
}

#[test]
fn initialize_dropdown_ignores_anonymous_session() {
    let fx = Fixture::anonymous();
    let page = fx.page();
    initialize_dropdown(&fx.ctx);
    assert_eq!(fx.doc.text(page.user_name), "");
    assert!(fx.doc.query(".user-dropdown").is_none());
}
