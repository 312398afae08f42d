//! Page bootstrap: shared context and the page-load sequence.
//!
//! ARCHITECTURE
//! ============
//! `HeaderContext` bundles every boundary (document, storage, timers,
//! navigation, icon hook, config) behind `Rc` trait objects. It is cheap to
//! clone, and event handlers capture their own clone. The browser entry point
//! builds one over the live page; tests build one over headless stand-ins.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::rc::Rc;

use crate::components::{auth_ui, nav_buttons};
use crate::config::HeaderConfig;
use crate::dom::View;
use crate::state::session::{Session, read_session};
use crate::util::navigator::Navigator;
use crate::util::scheduler::Scheduler;
use crate::util::storage::SessionStore;

#[derive(Clone)]
pub struct HeaderContext {
    pub view: Rc<dyn View>,
    pub store: Rc<dyn SessionStore>,
    pub scheduler: Rc<dyn Scheduler>,
    pub navigator: Rc<dyn Navigator>,
    pub icons: Rc<dyn Fn()>,
    pub config: Rc<HeaderConfig>,
}

impl HeaderContext {
    pub fn new(
        view: Rc<dyn View>,
        store: Rc<dyn SessionStore>,
        scheduler: Rc<dyn Scheduler>,
        navigator: Rc<dyn Navigator>,
        config: HeaderConfig,
    ) -> Self {
        Self {
            view,
            store,
            scheduler,
            navigator,
            icons: Rc::new(|| {}),
            config: Rc::new(config),
        }
    }

    #[must_use]
    pub fn with_icons(mut self, icons: Rc<dyn Fn()>) -> Self {
        self.icons = icons;
        self
    }

    /// Fresh read of the persisted session.
    pub fn session(&self) -> Session {
        read_session(self.store.as_ref(), &self.config.storage)
    }
}

/// Run once the document is parsed.
///
/// The session is read once and that snapshot drives both the reflected UI
/// and the primary-button destination.
pub fn on_page_load(ctx: &HeaderContext) {
    (ctx.icons)();

    let session = ctx.session();
    log::debug!(
        "page load: token={} logged_in={}",
        session.has_token(),
        session.is_logged_in()
    );

    auth_ui::update_auth_ui(ctx, &session);
    let bound = nav_buttons::bind_navigation(ctx, &session);
    log::debug!("bound {bound} navigation buttons");
}

#[cfg(feature = "hydrate")]
pub(crate) mod browser {
    //! Browser entry: context over `window`, page-load hook, JS globals.

    use std::rc::Rc;

    use wasm_bindgen::{JsCast, JsValue, closure::Closure};

    use super::{HeaderContext, on_page_load};
    use crate::components::{logout, toast, user_dropdown};
    use crate::config::{CONFIG_ATTRIBUTE, HeaderConfig};
    use crate::dom::View;
    use crate::dom::browser::BrowserView;
    use crate::util::navigator::LocationNavigator;
    use crate::util::scheduler::TimeoutScheduler;
    use crate::util::storage::LocalStorage;

    pub fn start() {
        console_error_panic_hook::set_once();

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if document.ready_state() == "loading" {
            let cb = Closure::once_into_js(boot);
            let _ = document.add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref());
        } else {
            boot();
        }
    }

    fn boot() {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let view: Rc<dyn View> = Rc::new(BrowserView::new(document));
        let (config, rejected) = match HeaderConfig::from_page(view.as_ref()) {
            Ok(config) => (config, None),
            Err(e) => (HeaderConfig::default(), Some(e)),
        };
        let _ = console_log::init_with_level(config.log_level.as_level());
        if let Some(e) = rejected {
            log::warn!("ignoring {CONFIG_ATTRIBUTE}: {e}");
        }

        let ctx = HeaderContext::new(
            view,
            Rc::new(LocalStorage),
            Rc::new(TimeoutScheduler),
            Rc::new(LocationNavigator::new(window.clone())),
            config,
        )
        .with_icons(Rc::new(render_icons));

        install_globals(&window, &ctx);
        on_page_load(&ctx);
    }

    /// `lucide.createIcons()` when the icon library is on the page.
    fn render_icons() {
        let global = js_sys::global();
        let Ok(lucide) = js_sys::Reflect::get(&global, &JsValue::from_str("lucide")) else {
            return;
        };
        if lucide.is_undefined() || lucide.is_null() {
            return;
        }
        if let Ok(create) = js_sys::Reflect::get(&lucide, &JsValue::from_str("createIcons"))
            && let Some(create) = create.dyn_ref::<js_sys::Function>()
        {
            let _ = create.call0(&lucide);
        }
    }

    /// Expose `logout`, `showNotification` and `initializeDropdown` for inline
    /// `onclick` attributes on host pages.
    fn install_globals(window: &web_sys::Window, ctx: &HeaderContext) {
        let c = ctx.clone();
        let logout_fn = Closure::<dyn Fn()>::new(move || logout::logout(&c));
        set_global(window, "logout", logout_fn.as_ref());
        logout_fn.forget();

        let c = ctx.clone();
        let notify_fn = Closure::<dyn Fn(JsValue, JsValue, JsValue)>::new(
            move |title: JsValue, message: JsValue, kind: JsValue| {
                let title = title.as_string().unwrap_or_default();
                let message = message.as_string().unwrap_or_default();
                let kind = kind.as_string().unwrap_or_default();
                toast::show_notification(&c, &title, &message, kind.as_str().into());
            },
        );
        set_global(window, "showNotification", notify_fn.as_ref());
        notify_fn.forget();

        let c = ctx.clone();
        let dropdown_fn = Closure::<dyn Fn()>::new(move || user_dropdown::initialize_dropdown(&c));
        set_global(window, "initializeDropdown", dropdown_fn.as_ref());
        dropdown_fn.forget();
    }

    fn set_global(window: &web_sys::Window, name: &str, value: &JsValue) {
        if js_sys::Reflect::set(window, &JsValue::from_str(name), value).is_err() {
            log::warn!("could not publish window.{name}");
        }
    }
}
