use deck_types::DeckSpec;
use serde::Deserialize;

use crate::errors::LoadError;
use crate::metadata::ProjectMetadata;
use crate::save::FORMAT_VERSION;

/// The top-level file structure for deserialization.
///
/// `DeckSpec` fields default individually during deserialization, so a
/// document missing fields (or from an older hand-edited file) loads
/// with defaults filled in before validation runs.
#[derive(Debug, Clone, Deserialize)]
pub struct DeckFileRaw {
    pub format: String,
    pub version: u32,
    pub project: ProjectMetadata,
    pub deck: DeckSpec,
}

/// Deserialize a project from a JSON string.
///
/// Validates the format identifier, version, and the spec's own
/// invariants. A document carrying out-of-range values is rejected
/// rather than silently accepted.
pub fn load_project(json: &str) -> Result<(DeckSpec, ProjectMetadata), LoadError> {
    let raw: DeckFileRaw =
        serde_json::from_str(json).map_err(|e| LoadError::ParseError(e.to_string()))?;

    if raw.format != "deckforge" {
        return Err(LoadError::UnknownFormat(raw.format));
    }

    if raw.version > FORMAT_VERSION {
        return Err(LoadError::FutureVersion {
            file_version: raw.version,
            supported_version: FORMAT_VERSION,
        });
    }

    let spec = if raw.version < FORMAT_VERSION {
        crate::migrate::migrate(raw.deck, raw.version, FORMAT_VERSION)?
    } else {
        raw.deck
    };

    spec.check().map_err(|issues| {
        LoadError::InvalidSpec(
            issues
                .iter()
                .map(|i| i.to_string())
                .collect::<Vec<_>>()
                .join("; "),
        )
    })?;

    Ok((spec, raw.project))
}
