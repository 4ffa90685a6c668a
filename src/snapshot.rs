//! A ready-made snapshot payload for rich text editors.
//!
//! The store core is generic over any `S: PartialEq`; this module provides
//! the payload shape a host editor typically records: serialized content,
//! selection/display metadata, and entity states captured alongside the
//! content.

use serde::{Deserialize, Serialize};

/// State of one embedded entity at the time the snapshot was taken.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityState {
    /// Application-defined entity type.
    pub entity_type: String,

    /// Entity identifier, unique within the document.
    pub id: String,

    /// Serialized entity state.
    pub state: String,
}

/// One recorded editor state.
///
/// Equality is deep structural equality, which is exactly what the store's
/// duplicate-add check uses: a snapshot with the same content but different
/// metadata, or one carrying entity states, is a distinct entry and gets
/// appended rather than de-duplicated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EditorSnapshot {
    /// Serialized document content.
    pub html: String,

    /// Opaque metadata needed to restore the snapshot (selection paths,
    /// dark mode flags, and so on). The store never looks inside.
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,

    /// Colors already registered with the host's color handler when the
    /// snapshot was taken.
    #[serde(default)]
    pub known_colors: Vec<String>,

    /// Entity states captured with this snapshot, if any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entity_states: Vec<EntityState>,
}

impl EditorSnapshot {
    /// Snapshot with content only.
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            metadata: None,
            known_colors: Vec::new(),
            entity_states: Vec::new(),
        }
    }

    /// Attach restore metadata.
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Attach entity states.
    pub fn with_entity_states(mut self, states: Vec<EntityState>) -> Self {
        self.entity_states = states;
        self
    }

    /// Size to report to the store's budget accounting.
    ///
    /// The content length drives the budget; metadata and entity states are
    /// small relative to the serialized document and are not counted.
    pub fn size_in_bytes(&self) -> u64 {
        self.html.len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_size_tracks_content() {
        let snapshot = EditorSnapshot::new("test");
        assert_eq!(snapshot.size_in_bytes(), 4);

        let snapshot = EditorSnapshot::new("test").with_metadata(json!({"isDarkMode": false}));
        assert_eq!(snapshot.size_in_bytes(), 4);
    }

    #[test]
    fn test_metadata_affects_equality() {
        let plain = EditorSnapshot::new("test");
        let with_meta = EditorSnapshot::new("test").with_metadata(json!({"selection": [0, 2]}));
        assert_ne!(plain, with_meta);
        assert_eq!(plain, EditorSnapshot::new("test"));
    }

    #[test]
    fn test_entity_states_affect_equality() {
        let plain = EditorSnapshot::new("test");
        let with_entities = EditorSnapshot::new("test").with_entity_states(vec![EntityState {
            entity_type: "sampleEntity".into(),
            id: "e1".into(),
            state: "{}".into(),
        }]);
        assert_ne!(plain, with_entities);
    }

    #[test]
    fn test_serde_roundtrip_skips_empty_entity_states() {
        let snapshot = EditorSnapshot::new("hello");
        let json = serde_json::to_value(&snapshot).unwrap();
        assert!(json.get("entity_states").is_none());

        let parsed: EditorSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, snapshot);
    }
}
