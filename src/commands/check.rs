//! Check command: verify the link graph and report dangling mentions.

use std::io::Write;

use crate::errors::Result;
use crate::interface::{load_workspace, Context};

/// What a check found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckSummary {
    pub documents: usize,
    pub links: usize,
    pub unresolved: usize,
}

impl CheckSummary {
    /// Returns true if every mention resolved.
    pub fn is_clean(&self) -> bool {
        self.unresolved == 0
    }
}

/// Loads the workspace, verifies link symmetry and lists every mention
/// that names no document.
pub fn check(ctx: &Context, out: &mut impl Write) -> Result<CheckSummary> {
    let set = load_workspace(ctx)?;
    set.check_consistency()?;

    let unresolved = set.unresolved_mentions();
    for (id, mention) in &unresolved {
        let title = set.get(*id).map(|d| d.title().as_str()).unwrap_or("?");
        writeln!(
            out,
            "{}: {}: unresolved mention of '{}'",
            title, mention.location, mention.title
        )?;
    }

    let summary = CheckSummary {
        documents: set.len(),
        links: set.iter().map(|d| d.forward_links().len()).sum(),
        unresolved: unresolved.len(),
    };
    writeln!(
        out,
        "{} document(s), {} link(s), {} unresolved mention(s)",
        summary.documents, summary.links, summary.unresolved
    )?;
    Ok(summary)
}
