//! High-level interface: loading a note workspace from disk.

mod context;
mod workspace;

pub use context::Context;
pub use workspace::{load_workspace, lookup};
