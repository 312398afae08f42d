use std::cell::Cell;

use super::*;
use crate::testing::Fixture;
use crate::util::navigator::Navigation;

#[test]
fn page_load_renders_icons_and_reflects_session() {
    let fx = Fixture::logged_in();
    let page = fx.page();
    let rendered = Rc::new(Cell::new(0));
    let counter = rendered.clone();
    let ctx = fx.ctx.clone().with_icons(Rc::new(move || counter.set(counter.get() + 1)));

    on_page_load(&ctx);

    assert_eq!(rendered.get(), 1);
    assert_eq!(fx.doc.text(page.user_name), "Jane Doe");
    assert_eq!(fx.doc.text(page.hero_title), "Welcome back, Jane!");
}

#[test]
fn rewritten_hero_buttons_are_not_rebound() {
    let fx = Fixture::logged_in();
    let page = fx.page();
    on_page_load(&fx.ctx);

    for button in fx.doc.children(page.hero_buttons) {
        fx.doc.click(button);
    }
    assert!(fx.nav.history().is_empty());

    fx.doc.click(page.login_btn);
    assert_eq!(fx.nav.last(), Some(Navigation::Route("/login".to_owned())));
}

#[test]
fn guest_page_load_binds_default_hero_buttons() {
    let fx = Fixture::anonymous();
    let page = fx.page();
    on_page_load(&fx.ctx);

    fx.doc.click(page.primary);
    fx.doc.click(page.secondary);
    assert_eq!(
        fx.nav.history(),
        vec![Navigation::Route("/register".to_owned()), Navigation::Route("/login".to_owned())]
    );
}

#[test]
fn session_is_reread_on_each_load() {
    use crate::util::storage::SessionStore;

    let fx = Fixture::anonymous();
    let page = fx.page();
    on_page_load(&fx.ctx);
    assert_eq!(fx.doc.text(page.user_name), "Guest");
    assert_eq!(fx.doc.style(page.login_btn, "display").as_deref(), Some("block"));

    fx.store.set_item("auth_token", "abc").unwrap();
    fx.store.set_item("user_info", r#"{"full_name":"Jane Doe","first_name":"Jane"}"#).unwrap();
    on_page_load(&fx.ctx);

    assert_eq!(fx.doc.text(page.user_name), "Jane Doe");
    assert_eq!(fx.doc.style(page.login_btn, "display").as_deref(), Some("none"));
    assert_eq!(fx.doc.query_all(".user-dropdown").len(), 1);
    assert_eq!(fx.doc.text(page.hero_title), "Welcome back, Jane!");
}
