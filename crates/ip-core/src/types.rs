//! Shared identifier types

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Server-assigned, opaque project identifier
///
/// The client never interprets the value; it only echoes it back in request
/// paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Allocate a fresh identifier (service side only)
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for ProjectId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ProjectId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_unique() {
        let a = ProjectId::generate();
        let b = ProjectId::generate();
        assert_ne!(a, b);
        assert!(!a.as_str().is_empty());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = ProjectId::from("p1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"p1\"");
        let back: ProjectId = serde_json::from_str("\"p1\"").unwrap();
        assert_eq!(back, id);
        assert_eq!(id.to_string(), "p1");
    }
}
