//! Blocks command: dump a document's parsed blocks as JSON.

use std::io::Write;

use crate::errors::Result;
use crate::interface::{load_workspace, lookup, Context};

/// Writes the block sequence of the document titled `title` as pretty JSON.
pub fn blocks(ctx: &Context, title: &str, out: &mut impl Write) -> Result<()> {
    let set = load_workspace(ctx)?;
    let doc = lookup(&set, title)?;
    serde_json::to_writer_pretty(&mut *out, doc.text_blocks())?;
    writeln!(out)?;
    Ok(())
}
