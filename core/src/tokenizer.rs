//! Shell-style splitting of a single command string into argument tokens.
//!
//! Git itself is never involved here; the tokens are meant to become the
//! argument vector of a process invocation, so quoting is resolved exactly
//! once and the result is passed to the process without a shell.

use crate::error::GitError;
use crate::types::Result;
use log::trace;

/// Splits `command` into argument tokens, resolving quotes and escapes.
///
/// Unquoted runs of whitespace separate tokens. Single and double quotes group
/// text (whitespace included) and are removed; quoted and unquoted pieces that
/// touch are concatenated into one token, so `"some'"thing` yields
/// `some'thing`. An empty quoted string (`""`) still produces an empty token.
///
/// Only spaces and tabs separate tokens; any other character, line breaks
/// included, is part of a token.
///
/// Backslash escapes follow the shell: outside quotes it makes the next
/// character literal, inside double quotes it escapes `"`, `'` and `\`, and
/// inside single quotes it has no special meaning.
///
/// # Examples
/// ```
/// use gitparse_core::tokenize;
///
/// let args = tokenize("log HEAD^..HEAD --format=raw").unwrap();
/// assert_eq!(args, ["log", "HEAD^..HEAD", "--format=raw"]);
///
/// let args = tokenize(r#"commit -m "first line""#).unwrap();
/// assert_eq!(args, ["commit", "-m", "first line"]);
/// ```
///
/// # Errors
/// Returns `GitError::UnclosedQuote` if the input ends inside a quoted section.
pub fn tokenize(command: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    // Distinguishes an empty-but-present token (`""`) from no token at all.
    let mut has_content = false;
    let mut in_single = false;
    let mut in_double = false;
    let mut quote_start = 0;

    let mut chars = command.char_indices().peekable();
    while let Some((position, c)) = chars.next() {
        match c {
            '\'' if !in_double => {
                if !in_single {
                    quote_start = position;
                }
                in_single = !in_single;
                has_content = true;
            }
            '"' if !in_single => {
                if !in_double {
                    quote_start = position;
                }
                in_double = !in_double;
                has_content = true;
            }
            '\\' if !in_single => {
                match chars.peek() {
                    Some(&(_, next)) if !in_double || matches!(next, '"' | '\'' | '\\') => {
                        current.push(next);
                        chars.next();
                    }
                    _ => current.push('\\'),
                }
                has_content = true;
            }
            ' ' | '\t' if !in_single && !in_double => {
                if has_content {
                    tokens.push(std::mem::take(&mut current));
                    has_content = false;
                }
            }
            c => {
                current.push(c);
                has_content = true;
            }
        }
    }

    if in_single || in_double {
        return Err(GitError::UnclosedQuote {
            quote: if in_single { '\'' } else { '"' },
            position: quote_start,
        });
    }

    if has_content {
        tokens.push(current);
    }

    trace!("Tokenized {:?} into {} arguments", command, tokens.len());
    Ok(tokens)
}
