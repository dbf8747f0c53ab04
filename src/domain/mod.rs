//! Domain types for semantic versioning

pub mod version;

pub use version::{bump, BumpMode, Version};
