//! Provides structured types representing parsed git data.

use crate::error::GitError;
use crate::types::{ObjectId, Result};
use chrono::{DateTime, FixedOffset, Utc};
use log::trace;
#[cfg(feature = "serde")]
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// An author or committer identity together with the moment it was recorded.
///
/// Parsed from the `<name> <<email>> <epoch> <tz>` tail of an `author` or
/// `committer` line. The instant is anchored to UTC. The timezone token is kept
/// verbatim and never shifts `date`; [`Signature::offset`] is only available
/// when the token is a well-formed `+HHMM` / `-HHMM` offset within a day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    name: String,
    email: String,
    date: DateTime<Utc>,
    timezone: String,
    offset: Option<FixedOffset>,
}

impl Signature {
    /// The identity name (everything before the last `<`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The email address found between `<` and `>`.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The recorded instant in UTC.
    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// The timezone token exactly as written, e.g. `+0200`. May be empty.
    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    /// The UTC offset the identity line was written with, if it is a valid one.
    pub fn offset(&self) -> Option<FixedOffset> {
        self.offset
    }

    /// The recorded instant expressed in the original offset.
    pub fn local_date(&self) -> Option<DateTime<FixedOffset>> {
        self.offset.map(|offset| self.date.with_timezone(&offset))
    }
}

impl FromStr for Signature {
    type Err = GitError;

    /// Parses `"Jane Doe <jane@example.com> 1554723161 +0200"`.
    ///
    /// Only the name/email layout and the epoch seconds are validated.
    fn from_str(line: &str) -> Result<Self> {
        let invalid = || GitError::InvalidSignature(line.to_string());

        let open = line.rfind('<').ok_or_else(invalid)?;
        let close = line[open..]
            .find('>')
            .map(|i| open + i)
            .ok_or_else(invalid)?;

        let name = line[..open].trim_end().to_string();
        let email = line[open + 1..close].to_string();

        let date_source = line[close + 1..].strip_prefix(' ').ok_or_else(invalid)?;
        let (timestamp, timezone) = date_source
            .split_once(' ')
            .unwrap_or((date_source, ""));
        let seconds = timestamp.parse::<i64>().map_err(|_| invalid())?;
        let date = DateTime::<Utc>::from_timestamp(seconds, 0).ok_or_else(invalid)?;
        let timezone = timezone.trim().to_string();
        let offset = parse_offset(&timezone);
        if offset.is_none() {
            trace!("Keeping unrecognised timezone {:?} of {:?}", timezone, name);
        }

        Ok(Signature {
            name,
            email,
            date,
            timezone,
            offset,
        })
    }
}

impl Display for Signature {
    /// Writes the signature back in raw log form.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}> {}", self.name, self.email, self.date.timestamp())?;
        if !self.timezone.is_empty() {
            write!(f, " {}", self.timezone)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl Serialize for Signature {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Signature", 4)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("email", &self.email)?;
        state.serialize_field("date", &self.date)?;
        state.serialize_field("offset", &self.timezone)?;
        state.end()
    }
}

/// Parses a `+HHMM` / `-HHMM` timezone token.
fn parse_offset(token: &str) -> Option<FixedOffset> {
    let (sign, digits) = match token.as_bytes().first()? {
        b'+' => (1, &token[1..]),
        b'-' => (-1, &token[1..]),
        _ => return None,
    };
    if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hours: i32 = digits[..2].parse().ok()?;
    let minutes: i32 = digits[2..].parse().ok()?;
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Represents one commit exactly as reported by `git log --pretty=raw`.
///
/// A `Commit` is only ever built by the log parser, in one step, once every
/// mandatory field has been found. It is immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Commit {
    id: ObjectId,
    tree: ObjectId,
    parents: Vec<ObjectId>,
    author: Signature,
    committer: Signature,
    message: String,
    message_subject: String,
    message_body: String,
}

impl Commit {
    /// Assembles a commit from fully parsed parts; subject and body are
    /// derived from `message`.
    pub(crate) fn new(
        id: ObjectId,
        tree: ObjectId,
        parents: Vec<ObjectId>,
        author: Signature,
        committer: Signature,
        message: String,
    ) -> Commit {
        let (message_subject, message_body) = split_message(&message);
        Commit {
            id,
            tree,
            parents,
            author,
            committer,
            message,
            message_subject,
            message_body,
        }
    }

    /// The commit object id.
    pub fn id(&self) -> &ObjectId {
        &self.id
    }

    /// The commit id abbreviated to seven characters.
    pub fn short_id(&self) -> &str {
        self.id.abbreviated(7)
    }

    /// The id of the tree this commit snapshots.
    pub fn tree(&self) -> &ObjectId {
        &self.tree
    }

    /// Parent ids in the order git reported them.
    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    /// True when the commit has two or more parents.
    pub fn is_merge(&self) -> bool {
        self.parents.len() >= 2
    }

    /// The author name.
    pub fn author(&self) -> &str {
        self.author.name()
    }

    pub fn author_email(&self) -> &str {
        self.author.email()
    }

    pub fn author_date(&self) -> DateTime<Utc> {
        self.author.date()
    }

    /// The full author identity, including its original offset.
    pub fn author_signature(&self) -> &Signature {
        &self.author
    }

    /// The committer name.
    pub fn committer(&self) -> &str {
        self.committer.name()
    }

    pub fn committer_email(&self) -> &str {
        self.committer.email()
    }

    pub fn committer_date(&self) -> DateTime<Utc> {
        self.committer.date()
    }

    /// The full committer identity, including its original offset.
    pub fn committer_signature(&self) -> &Signature {
        &self.committer
    }

    /// The de-indented message with surrounding blank lines removed.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The first line of the message.
    pub fn message_subject(&self) -> &str {
        &self.message_subject
    }

    /// Everything after the first line, without leading blank lines.
    /// Empty when the message is a single line.
    pub fn message_body(&self) -> &str {
        &self.message_body
    }
}

fn split_message(message: &str) -> (String, String) {
    match message.split_once('\n') {
        Some((subject, body)) => (subject.trim_start().to_string(), body.trim_start().to_string()),
        None => (message.trim_start().to_string(), String::new()),
    }
}
