//! Parsers for `git branch` listings.

use crate::error::GitError;
use crate::types::Result;
use log::{debug, trace};
use regex::Regex;

/// Returns every non-blank line of a branch listing, unchanged.
///
/// Markers, indentation and `->` alias lines are all kept; this is the raw
/// view of the listing, one entry per line.
pub fn extract_branch_strings(raw_branches: &str) -> Vec<String> {
    raw_branches
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Extracts clean branch names from `git branch` / `git branch --all` output.
///
/// For every line the two-column marker (`* ` for the checked-out branch,
/// `+ ` for a branch checked out in another worktree, or two spaces) is
/// removed and the rest is trimmed. Alias lines such as
/// `remotes/origin/HEAD -> origin/master` and placeholders such as
/// `(HEAD detached at 3f2a1b0)` are skipped. Order is preserved.
pub fn parse_branches(raw_branches: &str) -> Vec<String> {
    let mut branches = Vec::new();

    for line in raw_branches.lines() {
        if line.contains(" -> ") {
            trace!("Skipping alias line {:?}", line);
            continue;
        }

        let name = strip_marker(line).trim();
        if name.is_empty() {
            continue;
        }
        if is_placeholder(name) {
            trace!("Skipping placeholder line {:?}", line);
            continue;
        }

        branches.push(name.to_string());
    }

    debug!("Parsed {} branch names", branches.len());
    branches
}

// Entries git prints for a HEAD that is not on any branch.
fn is_placeholder(name: &str) -> bool {
    name.starts_with("(HEAD detached ") || name.starts_with("(no branch")
}

fn strip_marker(line: &str) -> &str {
    let mut chars = line.chars();
    match (chars.next(), chars.next()) {
        (Some('*' | '+' | ' '), Some(' ')) => &line[2..],
        _ => line,
    }
}

/// Include / exclude filtering applied to parsed branch names.
///
/// Both patterns are unanchored regular expressions matched with
/// `Regex::is_match`. A name is kept when it matches `include` (or there is no
/// include pattern) and does not match `exclude`. The default filter keeps
/// every name.
#[derive(Debug, Clone, Default)]
pub struct BranchFilter {
    include: Option<Regex>,
    exclude: Option<Regex>,
}

impl BranchFilter {
    /// Compiles a filter from optional include and exclude patterns.
    ///
    /// # Errors
    /// Returns `GitError::InvalidPattern` if either pattern fails to compile.
    pub fn new(include: Option<&str>, exclude: Option<&str>) -> Result<Self> {
        Ok(BranchFilter {
            include: include.map(compile).transpose()?,
            exclude: exclude.map(compile).transpose()?,
        })
    }

    /// Returns true when `name` passes the filter.
    pub fn matches(&self, name: &str) -> bool {
        let included = self.include.as_ref().map_or(true, |re| re.is_match(name));
        let excluded = self.exclude.as_ref().map_or(false, |re| re.is_match(name));
        included && !excluded
    }

    /// Keeps the names that pass the filter, preserving order.
    pub fn apply<I, S>(&self, branches: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let kept: Vec<String> = branches
            .into_iter()
            .map(Into::into)
            .filter(|name| self.matches(name))
            .collect();
        debug!("Branch filter kept {} names", kept.len());
        kept
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| GitError::InvalidPattern(format!("{}: {}", pattern, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LOCAL: &str = "  branch/1/2019\n  branch/2/2019\n  branch/3/2019\n* master\n";
    const ALL: &str = "* master\n  remotes/origin/HEAD -> origin/master\n  remotes/origin/master\n";

    #[test]
    fn test_extract_branch_strings_keeps_lines_verbatim() {
        assert_eq!(
            extract_branch_strings(LOCAL),
            vec!["  branch/1/2019", "  branch/2/2019", "  branch/3/2019", "* master"]
        );
    }

    #[test]
    fn test_extract_branch_strings_skips_blank_lines() {
        assert_eq!(extract_branch_strings("\n* master\n   \n\n  dev"), vec!["* master", "  dev"]);
        assert!(extract_branch_strings("").is_empty());
    }

    #[test]
    fn test_parse_local_branches() {
        assert_eq!(
            parse_branches(LOCAL),
            vec!["branch/1/2019", "branch/2/2019", "branch/3/2019", "master"]
        );
    }

    #[test]
    fn test_parse_all_branches_skips_alias() {
        assert_eq!(parse_branches(ALL), vec!["master", "remotes/origin/master"]);
    }

    #[test]
    fn test_parse_empty_listing() {
        assert!(parse_branches("").is_empty());
        assert!(parse_branches("\n\n").is_empty());
    }

    #[test]
    fn test_parse_worktree_and_detached_markers() {
        let raw = "* (HEAD detached at 3f2a1b0)\n+ feature\n  master\n";
        assert_eq!(parse_branches(raw), vec!["feature", "master"]);
    }

    #[test]
    fn test_parse_no_branch_placeholders() {
        let raw = "* (no branch, rebasing feature)\n  feature\n* (HEAD detached from 3f2a1b0)\n";
        assert_eq!(parse_branches(raw), vec!["feature"]);
    }

    #[test]
    fn test_parenthesised_branch_names_are_kept() {
        assert_eq!(parse_branches("  (wip)\n* master\n"), vec!["(wip)", "master"]);
    }

    #[test]
    fn test_parse_unindented_names() {
        assert_eq!(parse_branches("main\r\ndev\r\n"), vec!["main", "dev"]);
    }

    #[test]
    fn test_default_filter_keeps_everything() {
        let filter = BranchFilter::default();
        let names = parse_branches(LOCAL);
        assert_eq!(filter.apply(names.clone()), names);
    }

    #[test]
    fn test_include_filter() {
        let filter = BranchFilter::new(Some(r"^branch/\d/"), None).unwrap();
        assert_eq!(
            filter.apply(parse_branches(LOCAL)),
            vec!["branch/1/2019", "branch/2/2019", "branch/3/2019"]
        );
    }

    #[test]
    fn test_exclude_filter() {
        let filter = BranchFilter::new(None, Some("^remotes/")).unwrap();
        assert_eq!(filter.apply(parse_branches(ALL)), vec!["master"]);
    }

    #[test]
    fn test_include_and_exclude_combined() {
        let filter = BranchFilter::new(Some("2019"), Some("/2/")).unwrap();
        assert!(filter.matches("branch/1/2019"));
        assert!(!filter.matches("branch/2/2019"));
        assert!(!filter.matches("master"));
        assert_eq!(filter.apply(["branch/1/2019", "branch/2/2019"]), vec!["branch/1/2019"]);
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(matches!(
            BranchFilter::new(Some("("), None),
            Err(GitError::InvalidPattern(_))
        ));
        assert!(matches!(
            BranchFilter::new(None, Some("[a-")),
            Err(GitError::InvalidPattern(_))
        ));
    }
}
