//! Headless fixture shared by unit tests.

use std::rc::Rc;

use crate::app::HeaderContext;
use crate::config::HeaderConfig;
use crate::dom::NodeRef;
use crate::dom::headless::HeadlessDocument;
use crate::util::navigator::RecordingNavigator;
use crate::util::scheduler::ManualScheduler;
use crate::util::storage::MemoryStorage;

pub(crate) struct Fixture {
    pub doc: Rc<HeadlessDocument>,
    pub store: Rc<MemoryStorage>,
    pub clock: Rc<ManualScheduler>,
    pub nav: Rc<RecordingNavigator>,
    pub ctx: HeaderContext,
}

/// Element handles of the standard header page.
pub(crate) struct Page {
    pub login_btn: NodeRef,
    pub user_info: NodeRef,
    pub user_name: NodeRef,
    pub hero_title: NodeRef,
    pub hero_description: NodeRef,
    pub hero_buttons: NodeRef,
    pub primary: NodeRef,
    pub secondary: NodeRef,
}

impl Fixture {
    pub fn new(store: MemoryStorage) -> Self {
        let doc = Rc::new(HeadlessDocument::new());
        let store = Rc::new(store);
        let clock = Rc::new(ManualScheduler::new());
        let nav = Rc::new(RecordingNavigator::new());
        let ctx = HeaderContext::new(
            doc.clone(),
            store.clone(),
            clock.clone(),
            nav.clone(),
            HeaderConfig::default(),
        );
        Self { doc, store, clock, nav, ctx }
    }

    pub fn logged_in() -> Self {
        Self::new(MemoryStorage::with_items([
            ("auth_token", "abc"),
            ("user_info", r#"{"full_name":"Jane Doe","first_name":"Jane"}"#),
        ]))
    }

    pub fn anonymous() -> Self {
        Self::new(MemoryStorage::new())
    }

    /// Build the header + hero markup the site's pages share.
    pub fn page(&self) -> Page {
        let doc = &self.doc;
        let header = doc.add(doc.root(), "header", "site-header");
        let login_btn = doc.add(header, "button", "login-btn");
        let user_info = doc.add(header, "div", "user-info");
        let user_name = doc.add(user_info, "span", "user-name");

        let hero = doc.add(doc.root(), "section", "hero");
        let hero_title = doc.add_with_id(hero, "h1", "heroTitle");
        let hero_description = doc.add_with_id(hero, "p", "heroDescription");
        let hero_buttons = doc.add_with_id(hero, "div", "heroButtons");
        let primary = doc.add(hero_buttons, "button", "btn-primary");
        let secondary = doc.add(hero_buttons, "button", "btn-secondary");

        Page {
            login_btn,
            user_info,
            user_name,
            hero_title,
            hero_description,
            hero_buttons,
            primary,
            secondary,
        }
    }
}
