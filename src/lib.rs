pub mod cli;
pub mod config;
pub mod detect;
pub mod domain;
pub mod error;
pub mod rewriter;
pub mod ui;

pub use error::{BumperError, Result};
