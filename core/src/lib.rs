//! A Rust library that turns the textual output of the `git` command-line tool
//! into structured data.
//!
//! It provides three pure parsers:
//!
//! * [`tokenize`] splits a shell-style command string into argument tokens.
//! * [`parse_commits`] reads `git log --pretty=raw` output into [`Commit`] records.
//! * [`parse_branches`] reads `git branch` / `git branch --all` output into branch names.
//!
//! Running git, locating its binary and validating repositories are left to the
//! caller; this crate only consumes text that has already been captured.
//!
//! ```
//! use gitparse_core::{parse_branches, tokenize};
//!
//! let args = tokenize("branch --all").unwrap();
//! assert_eq!(args, ["branch", "--all"]);
//!
//! let names = parse_branches("* master\n  remotes/origin/HEAD -> origin/master\n  remotes/origin/master\n");
//! assert_eq!(names, ["master", "remotes/origin/master"]);
//! ```

pub mod error;
pub mod models;
pub mod parsers;
pub mod tokenizer;
pub mod types;

// Re-export key types
pub use crate::error::GitError;
pub use crate::models::{Commit, Signature};
pub use crate::parsers::{
    extract_branch_strings, parse_branches, parse_commits, split_commit_segments, BranchFilter,
};
pub use crate::tokenizer::tokenize;
pub use crate::types::{ObjectId, Result};

pub mod prelude {
    //! Convenient import for common GitParse types and functions.
    pub use crate::error::GitError;
    pub use crate::models::*;
    pub use crate::parsers::{
        extract_branch_strings, parse_branches, parse_commits, split_commit_segments, BranchFilter,
    };
    pub use crate::tokenizer::tokenize;
    pub use crate::types::{ObjectId, Result};
}
