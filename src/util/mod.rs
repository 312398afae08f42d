//! Environment boundaries: timers, navigation and key/value storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each boundary is a small trait with a browser implementation behind the
//! `hydrate` feature and an in-memory one for tests, so component logic never
//! depends on a live page.

pub mod navigator;
pub mod scheduler;
pub mod storage;
