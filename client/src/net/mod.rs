//! Network layer: lead wire types and the HTTP call that submits them.

pub mod api;
pub mod types;
