//! Client state the header derives its UI from.

pub mod notification;
pub mod session;
