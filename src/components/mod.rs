//! Header behaviors, each driven through `HeaderContext`.

pub mod auth_ui;
pub mod logout;
pub mod nav_buttons;
pub mod toast;
pub mod user_dropdown;
