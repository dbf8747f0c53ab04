//! CLI-facing orchestration, decoupled from argument parsing

pub mod orchestration;

pub use orchestration::{build_plan, execute_plan, BumpRecord, BumpRequest, PlanArgs};
