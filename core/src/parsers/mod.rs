//! Parsers turning captured git command output into structured values.
//!
//! Every parser works on text that has already been captured; none of them
//! runs git.

pub mod branch;
pub mod log;

pub use branch::{extract_branch_strings, parse_branches, BranchFilter};
pub use self::log::{parse_commits, split_commit_segments};
