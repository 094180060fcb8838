use deck_types::DeckSpec;
use serde::Serialize;

use crate::metadata::ProjectMetadata;

/// Current file format version.
pub const FORMAT_VERSION: u32 = 1;

/// The top-level file structure.
#[derive(Debug, Clone, Serialize)]
pub struct DeckFile {
    /// Format identifier.
    pub format: String,
    /// Format version number.
    pub version: u32,
    /// Project metadata.
    pub project: ProjectMetadata,
    /// The full deck specification.
    pub deck: DeckSpec,
}

/// Serialize a project to a pretty-printed JSON string.
pub fn save_project(spec: &DeckSpec, metadata: &ProjectMetadata) -> String {
    let file = DeckFile {
        format: "deckforge".to_string(),
        version: FORMAT_VERSION,
        project: metadata.clone(),
        deck: spec.clone(),
    };
    serde_json::to_string_pretty(&file).expect("DeckSpec serialization should never fail")
}
