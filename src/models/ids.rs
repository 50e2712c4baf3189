//! Strongly-typed ID wrappers
//!
//! Ids are opaque strings. Fresh ids are UUID v4, but any stored string is
//! accepted so that records created elsewhere (seeded shortcuts use `"1"`,
//! `"2"`, ...) load unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Wrap an existing identifier string
            pub fn from_raw(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            /// Get the underlying string
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// First eight characters, for compact listings
            pub fn short(&self) -> &str {
                match self.0.char_indices().nth(8) {
                    Some((idx, _)) => &self.0[..idx],
                    None => &self.0,
                }
            }

            /// Whether `prefix` is a non-empty prefix of this id
            pub fn matches_prefix(&self, prefix: &str) -> bool {
                !prefix.is_empty() && self.0.starts_with(prefix)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self(raw.to_string())
            }
        }
    };
}

define_id!(TransactionId);
define_id!(ShortcutId);
