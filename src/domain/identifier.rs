//! Repository identifiers: parsing, formatting and generation.

use crate::error::AppError;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;
use uuid::Uuid;

/// Hyphenated RFC-4122 textual form (versions 1-5) or the nil UUID.
static UUID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:[0-9a-f]{8}-[0-9a-f]{4}-[1-5][0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}|00000000-0000-0000-0000-000000000000)$",
    )
    .unwrap()
});

/// Unique identifier of a repository record.
///
/// Serializes as the lower-case hyphenated UUID string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RepositoryId(Uuid);

impl RepositoryId {
    /// Parses a caller-supplied identifier.
    ///
    /// Only the hyphenated form is accepted; braced, URN and simple forms that
    /// [`Uuid::parse_str`] would otherwise allow are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidIdentifier`] if the input is not well-formed.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        if !UUID_REGEX.is_match(raw) {
            return Err(AppError::InvalidIdentifier);
        }

        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| AppError::InvalidIdentifier)
    }
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

/// Source of fresh identifiers for newly created records.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> RepositoryId;
}

/// Random (version 4) UUID generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidV4Generator;

impl IdGenerator for UuidV4Generator {
    fn generate(&self) -> RepositoryId {
        RepositoryId(Uuid::new_v4())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_parse_valid() {
        let id = RepositoryId::parse("6f1c2b9e-3a4d-4c8b-9e2f-1a2b3c4d5e6f").unwrap();
        assert_eq!(id.to_string(), "6f1c2b9e-3a4d-4c8b-9e2f-1a2b3c4d5e6f");
    }

    #[test]
    fn test_parse_uppercase_normalizes() {
        let id = RepositoryId::parse("6F1C2B9E-3A4D-4C8B-9E2F-1A2B3C4D5E6F").unwrap();
        assert_eq!(id.to_string(), "6f1c2b9e-3a4d-4c8b-9e2f-1a2b3c4d5e6f");
    }

    #[test]
    fn test_parse_nil() {
        let id = RepositoryId::parse("00000000-0000-0000-0000-000000000000").unwrap();
        assert_eq!(id.to_string(), "00000000-0000-0000-0000-000000000000");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        let cases = [
            "",
            "123",
            "not-a-uuid",
            "6f1c2b9e3a4d4c8b9e2f1a2b3c4d5e6f",
            "{6f1c2b9e-3a4d-4c8b-9e2f-1a2b3c4d5e6f}",
            "urn:uuid:6f1c2b9e-3a4d-4c8b-9e2f-1a2b3c4d5e6f",
            "6f1c2b9e-3a4d-4c8b-9e2f-1a2b3c4d5e6",
            "6f1c2b9e-3a4d-4c8b-9e2f-1a2b3c4d5e6f0",
            "6f1c2b9e-3a4d-4c8b-9e2f-1a2b3c4d5e6g",
            // version nibble out of range
            "6f1c2b9e-3a4d-7c8b-9e2f-1a2b3c4d5e6f",
            // variant nibble out of range
            "6f1c2b9e-3a4d-4c8b-1e2f-1a2b3c4d5e6f",
        ];

        for case in cases {
            assert_eq!(
                RepositoryId::parse(case),
                Err(AppError::InvalidIdentifier),
                "expected {case:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_generated_ids_are_well_formed_and_unique() {
        let generator = UuidV4Generator;
        let mut seen = HashSet::new();

        for _ in 0..100 {
            let id = generator.generate();
            assert_eq!(RepositoryId::parse(&id.to_string()), Ok(id));
            assert!(seen.insert(id));
        }
    }

    #[test]
    fn test_serializes_as_string() {
        let id = RepositoryId::parse("6f1c2b9e-3a4d-4c8b-9e2f-1a2b3c4d5e6f").unwrap();
        let json = serde_json::to_value(id).unwrap();
        assert_eq!(json, "6f1c2b9e-3a4d-4c8b-9e2f-1a2b3c4d5e6f");
    }
}
