//! Transient toast notifications.
//!
//! At most one toast is in the document: showing a new one detaches every
//! existing `.notification` first. Title and message are set as text, never
//! parsed as markup.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::app::HeaderContext;
use crate::dom::{NodeRef, element};
use crate::state::notification::{HIDE_DELAY, REMOVE_DELAY, SHOW_DELAY, Severity, ToastPhase};

const TOAST_SELECTOR: &str = ".notification";
const SHOW_CLASS: &str = "show";

/// Handle to a displayed toast.
#[derive(Clone, Debug)]
pub struct Toast {
    pub node: NodeRef,
    phase: Rc<Cell<ToastPhase>>,
}

impl Toast {
    pub fn phase(&self) -> ToastPhase {
        self.phase.get()
    }
}

/// Show a toast and schedule its show/hide/remove steps.
///
/// Returns `None` when the page has no body to attach to.
pub fn show_notification(ctx: &HeaderContext, title: &str, message: &str, severity: Severity) -> Option<Toast> {
    let view = ctx.view.as_ref();
    for existing in view.query_all(TOAST_SELECTOR) {
        view.remove(existing);
    }

    let body = view.body()?;
    let node = element(view, "div", &severity.class_name(), None)?;
    if let Some(title_el) = element(view, "div", "notification-title", Some(title)) {
        view.append_child(node, title_el);
    }
    if let Some(message_el) = element(view, "div", "notification-message", Some(message)) {
        view.append_child(node, message_el);
    }
    view.append_child(body, node);
    log::debug!("toast shown: [{}] {title}", severity.as_str());

    let toast = Toast { node, phase: Rc::new(Cell::new(ToastPhase::Created)) };
    schedule_step(ctx, &toast, SHOW_DELAY, ToastPhase::Visible);
    schedule_step(ctx, &toast, HIDE_DELAY, ToastPhase::Hidden);
    Some(toast)
}

fn schedule_step(ctx: &HeaderContext, toast: &Toast, delay: Duration, next: ToastPhase) {
    let step_ctx = ctx.clone();
    let toast = toast.clone();
    ctx.scheduler
        .schedule(delay, Box::new(move || apply_step(&step_ctx, &toast, next)));
}

fn apply_step(ctx: &HeaderContext, toast: &Toast, next: ToastPhase) {
    if !toast.phase.get().is_in_document() {
        return;
    }
    let view = ctx.view.as_ref();
    // Detached by a newer toast (or by the page): the lifecycle is over.
    if view.parent(toast.node).is_none() {
        toast.phase.set(ToastPhase::Removed);
        return;
    }
    let Some(phase) = toast.phase.get().advance_to(next) else {
        return;
    };
    toast.phase.set(phase);
    match phase {
        ToastPhase::Created => {}
        ToastPhase::Visible => view.add_class(toast.node, SHOW_CLASS),
        ToastPhase::Hidden => {
            view.remove_class(toast.node, SHOW_CLASS);
            schedule_step(ctx, toast, REMOVE_DELAY, ToastPhase::Removed);
        }
        ToastPhase::Removed => {
            view.remove(toast.node);
            log::debug!("toast removed");
        }
    }
}
