//! Client-side logout: forget the stored session, tell the user, reload.
//!
//! The token is not revoked server-side; the reload lets the auth reflector
//! run again against the now-empty session.

#[cfg(test)]
#[path = "logout_test.rs"]
mod logout_test;

use std::time::Duration;

use crate::app::HeaderContext;
use crate::components::toast::show_notification;
use crate::state::notification::Severity;
use crate::state::session::clear_session;

pub const RELOAD_DELAY: Duration = Duration::from_millis(1500);

pub fn logout(ctx: &HeaderContext) {
    if let Err(e) = clear_session(ctx.store.as_ref(), &ctx.config.storage) {
        log::warn!("logout: {e}");
    }
    log::info!("session cleared, reloading in {}ms", RELOAD_DELAY.as_millis());

    show_notification(ctx, "Logged out successfully", "You have been logged out.", Severity::Success);

    let navigator = ctx.navigator.clone();
    ctx.scheduler.schedule(RELOAD_DELAY, Box::new(move || navigator.reload()));
}
