//! RecordId value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifier assigned to a stored contact or lead.
///
/// Generated on insert and serialized as a hyphenated UUID string.
///
/// # Example
///
/// ```
/// use curem::domain::RecordId;
///
/// let id = RecordId::generate();
/// let parsed: RecordId = id.to_string().parse().unwrap();
/// assert_eq!(id, parsed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Generate a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an id from its stored form.
    ///
    /// Only the exact lowercase hyphenated form produced by `Display` is
    /// accepted; braced, simple, URN, uppercase or padded input is rejected.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidId` if the input is not a stored id.
    pub fn parse(id: &str) -> Result<Self, ValidationError> {
        match Uuid::try_parse(id) {
            Ok(uuid) if uuid.hyphenated().to_string() == id => Ok(Self(uuid)),
            _ => Err(ValidationError::InvalidId(id.to_string())),
        }
    }

    /// Get the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl FromStr for RecordId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// Serde support - serialize as string
impl Serialize for RecordId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.0)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        RecordId::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_generate_is_unique() {
        assert_ne!(RecordId::generate(), RecordId::generate());
    }

    #[test]
    fn test_record_id_parse() {
        let id = RecordId::parse("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
        assert_eq!(id.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
        assert_eq!(id.as_uuid().get_version_num(), 4);
    }

    #[test]
    fn test_record_id_rejects_other_uuid_forms() {
        let id = "67e55044-10b1-426f-9247-bb680e5fe0c8";
        assert!(RecordId::parse(id).is_ok());
        assert!(RecordId::parse(&format!(" {} ", id)).is_err());
        assert!(RecordId::parse(&format!("{{{}}}", id)).is_err());
        assert!(RecordId::parse(&format!("urn:uuid:{}", id)).is_err());
        assert!(RecordId::parse("67e5504410b1426f9247bb680e5fe0c8").is_err());
        assert!(RecordId::parse(&id.to_uppercase()).is_err());
    }

    #[test]
    fn test_record_id_rejects_malformed() {
        assert!(RecordId::parse("").is_err());
        assert!(RecordId::parse("53b112bde3bdea2642000002").is_err());
        assert!("not-an-id".parse::<RecordId>().is_err());
    }

    #[test]
    fn test_record_id_serialization() {
        let id = RecordId::parse("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"67e55044-10b1-426f-9247-bb680e5fe0c8\"");
    }

    #[test]
    fn test_record_id_deserialization_invalid_fails() {
        let result: Result<RecordId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
