//! Destination conflict resolution.

use crate::prompt::Prompter;
use log::debug;
use std::path::Path;

/// What to do with a destination file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictDecision {
    /// Write the file, replacing anything already there
    Overwrite,
    /// Leave the existing file untouched
    Skip,
    /// Stop the whole run
    Abort,
}

impl ConflictDecision {
    /// Parses an answer to the conflict prompt.
    pub fn parse(answer: &str) -> Option<Self> {
        match answer.trim().to_lowercase().as_str() {
            "override" | "o" => Some(Self::Overwrite),
            "skip" | "s" => Some(Self::Skip),
            "abort" | "a" => Some(Self::Abort),
            _ => None,
        }
    }
}

/// Decides whether `destination` may be written.
///
/// A missing destination is always written. An existing one is overwritten
/// without asking when `force` is set; otherwise the user is asked until a
/// recognized answer is given. An unreadable answer aborts.
pub fn resolve_conflict(destination: &Path, force: bool, prompter: &dyn Prompter) -> ConflictDecision {
    if !destination.exists() || force {
        return ConflictDecision::Overwrite;
    }

    loop {
        let Some(answer) = prompter.ask_conflict(destination) else {
            debug!("No answer for {}, aborting", destination.display());
            return ConflictDecision::Abort;
        };
        if let Some(decision) = ConflictDecision::parse(&answer) {
            return decision;
        }
    }
}
