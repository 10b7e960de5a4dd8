//! Links command: show what a document mentions and what mentions it.

use std::collections::BTreeSet;
use std::io::Write;

use crate::errors::Result;
use crate::graph::DocumentSet;
use crate::interface::{load_workspace, lookup, Context};
use crate::model::DocumentId;

/// Prints the forward and backward links of the document titled `title`.
pub fn links(ctx: &Context, title: &str, out: &mut impl Write) -> Result<()> {
    let set = load_workspace(ctx)?;
    let doc = lookup(&set, title)?;

    writeln!(out, "Forward links of '{}':", doc.title())?;
    write_titles(&set, doc.forward_links(), out)?;
    writeln!(out, "Backward links of '{}':", doc.title())?;
    write_titles(&set, doc.backward_links(), out)?;
    Ok(())
}

fn write_titles(set: &DocumentSet, ids: &BTreeSet<DocumentId>, out: &mut impl Write) -> Result<()> {
    if ids.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for id in ids {
        if let Some(doc) = set.get(*id) {
            writeln!(out, "  {}", doc.title())?;
        }
    }
    Ok(())
}
