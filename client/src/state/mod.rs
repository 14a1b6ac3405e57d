//! Client state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain Rust state machines and content tables. Components hold them in
//! `RwSignal`s; nothing here touches the browser.

pub mod catalog;
pub mod heat;
pub mod lazy_image;
pub mod order;
pub mod ui;
