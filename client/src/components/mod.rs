//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `lazy_image` and `reveal_section` are the two viewport-driven primitives;
//! the remaining modules are page sections composed by `pages::landing`, plus
//! the order modal they share through context.

pub mod accessories;
pub mod benefits;
pub mod catalog;
pub mod contact;
pub mod footer;
pub mod gallery;
pub mod header;
pub mod hero;
pub mod lazy_image;
pub mod order_modal;
pub mod process;
pub mod reveal_section;
pub mod testimonials;
