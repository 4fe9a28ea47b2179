//! Defines core value types shared by the parsers.
use super::GitError;
#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use std::{
    ffi::OsStr,
    fmt,
    fmt::{Display, Formatter},
    result::Result as stdResult,
};

/// A specialized `Result` type for parsing operations.
pub type Result<A> = stdResult<A, GitError>;

/// Hex length of a SHA-1 object name.
const SHA1_HEX_LEN: usize = 40;
/// Hex length of a SHA-256 object name.
const SHA256_HEX_LEN: usize = 64;

/// A full hexadecimal git object id (commit, tree, ...).
///
/// Only complete object names are accepted: 40 hex digits for SHA-1
/// repositories, 64 for SHA-256 ones. The value is stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId {
    value: String,
}

impl ObjectId {
    /// Returns the first `len` characters of the id, as `git log --abbrev` would.
    pub fn abbreviated(&self, len: usize) -> &str {
        &self.value[..len.min(self.value.len())]
    }
}

impl FromStr for ObjectId {
    type Err = GitError;

    fn from_str(s: &str) -> Result<Self> {
        if is_full_object_id(s) {
            Ok(ObjectId {
                value: s.to_ascii_lowercase(),
            })
        } else {
            Err(GitError::InvalidObjectId(s.to_string()))
        }
    }
}

impl Display for ObjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl AsRef<OsStr> for ObjectId {
    fn as_ref(&self) -> &OsStr {
        self.value.as_ref()
    }
}

impl PartialEq<str> for ObjectId {
    fn eq(&self, other: &str) -> bool {
        self.value.eq_ignore_ascii_case(other)
    }
}

impl PartialEq<&str> for ObjectId {
    fn eq(&self, other: &&str) -> bool {
        self.value.eq_ignore_ascii_case(other)
    }
}

#[cfg(feature = "serde")]
impl Serialize for ObjectId {
    fn serialize<S>(&self, serializer: S) -> stdResult<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.value)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for ObjectId {
    /// Deserializes a string into an `ObjectId`, validating the format.
    fn deserialize<D>(deserializer: D) -> stdResult<ObjectId, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ObjectId::from_str(&s).map_err(de::Error::custom)
    }
}

// --- Internal validation logic ---

fn is_full_object_id(s: &str) -> bool {
    (s.len() == SHA1_HEX_LEN || s.len() == SHA256_HEX_LEN)
        && s.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHA1: &str = "0bd8ba4a4f2b5ba1e7ee7d4ae8f1b0b0c9b0c5d1";

    #[test]
    fn test_valid_object_ids() {
        assert!(ObjectId::from_str(SHA1).is_ok());
        assert!(ObjectId::from_str(&"a".repeat(64)).is_ok());
        assert_eq!(
            ObjectId::from_str(&SHA1.to_ascii_uppercase()).unwrap().to_string(),
            SHA1 // Ensure lowercase storage
        );
    }

    #[test]
    fn test_invalid_object_ids() {
        assert!(ObjectId::from_str("").is_err());
        assert!(ObjectId::from_str("deadbeef").is_err()); // Abbreviated
        assert!(ObjectId::from_str(&"g".repeat(40)).is_err()); // Not hex
        assert!(ObjectId::from_str(&"a".repeat(41)).is_err());
        assert!(matches!(
            ObjectId::from_str("xyz"),
            Err(GitError::InvalidObjectId(value)) if value == "xyz"
        ));
    }

    #[test]
    fn test_abbreviated() {
        let id = ObjectId::from_str(SHA1).unwrap();
        assert_eq!(id.abbreviated(7), "0bd8ba4");
        assert_eq!(id.abbreviated(100), SHA1);
    }

    #[test]
    fn test_compare_with_str() {
        let id = ObjectId::from_str(SHA1).unwrap();
        assert!(id == SHA1);
        assert!(id == *SHA1.to_ascii_uppercase().as_str());
    }
}
