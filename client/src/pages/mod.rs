//! Page-level route components.

pub mod landing;
