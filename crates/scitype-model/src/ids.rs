//! Identifiers for conventions and trait tags.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of a classification ruleset.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConventionName(Cow<'static, str>);

impl ConventionName {
    /// The convention active before anything is activated.
    pub const UNSPECIFIED: Self = Self(Cow::Borrowed("unspecified"));

    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    pub fn unspecified() -> Self {
        Self::UNSPECIFIED
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_unspecified(&self) -> bool {
        *self == Self::UNSPECIFIED
    }
}

impl Default for ConventionName {
    fn default() -> Self {
        Self::UNSPECIFIED
    }
}

impl fmt::Display for ConventionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ConventionName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ConventionName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// Structural capability of a value, as decided by registered predicates.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraitTag(Cow<'static, str>);

impl TraitTag {
    /// No predicate matched.
    pub const OTHER: Self = Self(Cow::Borrowed("other"));
    /// The value is table-like: it has named, ordered columns.
    pub const TABLE: Self = Self(Cow::Borrowed("table"));

    pub const fn from_static(tag: &'static str) -> Self {
        Self(Cow::Borrowed(tag))
    }

    pub fn new(tag: impl Into<String>) -> Self {
        Self(Cow::Owned(tag.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TraitTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
