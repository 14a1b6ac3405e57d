//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (viewport observation, motion
//! styling) from component logic so the state machines test natively.

pub mod motion;
pub mod viewport;
