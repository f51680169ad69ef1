//! Record types for finished games.

use serde::{Deserialize, Serialize};

/// Opaque record identifier: 32 random hex characters.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(String);

impl RecordId {
    /// Generate a fresh random id.
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("{:032x}", rand::random::<u128>()))
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored result for one completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HanoiRecord {
    /// Store-assigned id.
    pub id: RecordId,

    /// Player identifier.
    pub player_id: String,

    /// Player display name.
    pub player_name: String,

    /// Disk count of the solved game.
    pub disks: u8,

    /// Moves used.
    pub moves: u32,

    /// Seconds taken.
    pub seconds: u64,

    /// Creation time, milliseconds since the Unix epoch.
    pub created_at_ms: u64,
}

/// Insert form: what the engine's completion snapshot carries. The store
/// assigns id and creation time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewHanoiRecord {
    /// Player identifier.
    pub player_id: String,

    /// Player display name.
    pub player_name: String,

    /// Disk count of the solved game.
    pub disks: u8,

    /// Moves used.
    pub moves: u32,

    /// Seconds taken.
    pub seconds: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_distinct() {
        let a = RecordId::generate();
        let b = RecordId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 32);
    }

    #[test]
    fn test_record_serialization() {
        let record = HanoiRecord {
            id: RecordId::generate(),
            player_id: "s-07".to_string(),
            player_name: "Grace".to_string(),
            disks: 4,
            moves: 15,
            seconds: 92,
            created_at_ms: 1_700_000_000_000,
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: HanoiRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
