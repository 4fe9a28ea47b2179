//! Parser for the machine-oriented `git log --pretty=raw` format.
//!
//! Each commit is reported as a block of header lines followed by the message,
//! every message line indented by four spaces:
//!
//! ```text
//! commit <id>
//! tree <id>
//! parent <id>          (zero or more)
//! author <name> <<email>> <epoch> <tz>
//! committer <name> <<email>> <epoch> <tz>
//!
//!     <subject>
//!
//!     <body>
//! ```

use crate::error::GitError;
use crate::models::{Commit, Signature};
use crate::types::{ObjectId, Result};
use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

// A segment starts at every line beginning with `commit <hex>`.
static SEGMENT_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^commit [0-9a-fA-F]+\b").expect("Invalid static commit line regex")
});

const MESSAGE_INDENT: &str = "    ";

/// Splits raw log output into one text segment per commit, in input order.
///
/// Text before the first `commit` line belongs to no segment. Output that
/// contains no `commit` line at all yields no segments, which is how callers
/// can tell an empty history apart from a populated one.
pub fn split_commit_segments(raw_log: &str) -> Vec<&str> {
    let starts: Vec<usize> = SEGMENT_START.find_iter(raw_log).map(|m| m.start()).collect();

    if let Some(&first) = starts.first() {
        if !raw_log[..first].trim().is_empty() {
            trace!("Ignoring {} bytes before the first commit line", first);
        }
    }

    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(raw_log.len());
            &raw_log[start..end]
        })
        .collect()
}

/// Parses `git log --pretty=raw` output into commits, preserving input order.
///
/// # Arguments
/// * `raw_log` - The captured standard output of the log command.
///
/// # Returns
/// One `Commit` per `commit` segment; an empty vector when there are none.
///
/// # Errors
/// Returns `GitError::MalformedCommit` for the first segment that lacks a
/// `tree`, `author` or `committer` line, or whose ids or identity lines cannot
/// be decoded. Segments are never skipped.
pub fn parse_commits(raw_log: &str) -> Result<Vec<Commit>> {
    let segments = split_commit_segments(raw_log);
    debug!("Parsing {} commit segments", segments.len());

    segments
        .iter()
        .enumerate()
        .map(|(index, segment)| parse_segment(index, segment))
        .collect()
}

fn parse_segment(index: usize, segment: &str) -> Result<Commit> {
    let malformed = |reason: String| GitError::MalformedCommit {
        segment: index,
        reason,
    };

    let mut lines = segment.lines();
    let id_token = lines
        .next()
        .and_then(|line| line.strip_prefix("commit "))
        .and_then(|rest| rest.split_whitespace().next())
        .ok_or_else(|| malformed("missing commit line".to_string()))?;
    let id = ObjectId::from_str(id_token).map_err(|e| malformed(e.to_string()))?;

    let mut tree = None;
    let mut parents = Vec::new();
    let mut author = None;
    let mut committer = None;

    // Header fields end at the blank line that precedes the message.
    for line in lines.take_while(|line| !line.is_empty()) {
        if let Some(value) = line.strip_prefix("tree ") {
            if tree.is_none() {
                tree = Some(
                    ObjectId::from_str(value.trim())
                        .map_err(|e| malformed(format!("tree: {}", e)))?,
                );
            }
        } else if let Some(value) = line.strip_prefix("parent ") {
            parents.push(
                ObjectId::from_str(value.trim())
                    .map_err(|e| malformed(format!("parent: {}", e)))?,
            );
        } else if let Some(value) = line.strip_prefix("author ") {
            if author.is_none() {
                author = Some(
                    Signature::from_str(value).map_err(|e| malformed(format!("author: {}", e)))?,
                );
            }
        } else if let Some(value) = line.strip_prefix("committer ") {
            if committer.is_none() {
                committer = Some(
                    Signature::from_str(value)
                        .map_err(|e| malformed(format!("committer: {}", e)))?,
                );
            }
        }
        // encoding, gpgsig (and its continuation lines), mergetag: not modelled
    }

    let tree = tree.ok_or_else(|| malformed(format!("commit {} has no tree line", id)))?;
    let author = author.ok_or_else(|| malformed(format!("commit {} has no author line", id)))?;
    let committer =
        committer.ok_or_else(|| malformed(format!("commit {} has no committer line", id)))?;

    let message = extract_message(segment);
    trace!("Parsed commit {} with {} parents", id, parents.len());

    Ok(Commit::new(id, tree, parents, author, committer, message))
}

/// Collects the four-space indented lines of a segment, de-indented and trimmed.
fn extract_message(segment: &str) -> String {
    segment
        .lines()
        .filter_map(|line| line.strip_prefix(MESSAGE_INDENT))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
