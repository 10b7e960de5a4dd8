//! Command implementations behind the `smalltext` binary.
//!
//! Each command loads the workspace from a [`Context`](crate::interface::Context)
//! and writes its report to the given writer.

pub mod blocks;
pub mod check;
pub mod export;
pub mod links;

pub use blocks::blocks;
pub use check::{check, CheckSummary};
pub use export::{export, ExportOptions};
pub use links::links;
