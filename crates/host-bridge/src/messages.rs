use serde::{Deserialize, Serialize};

use deck_types::{DeckSpec, MaterialTally, Primitive};

/// Messages from the host UI to the engine.
/// Serialized as tagged JSON for transport.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiToEngine {
    // -- Spec editing --
    /// Replace the spec wholesale (the UI composes the full spec from
    /// its form state on every edit).
    UpdateSpec { spec: DeckSpec },
    /// Rebuild without a spec change (e.g. after the initial handshake).
    Rebuild,

    // -- History --
    Undo,
    Redo,

    // -- File operations --
    SaveProject,
    LoadProject { data: String },
    SetProjectName { name: String },
}

/// Messages from the engine to the host UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EngineToUi {
    /// The model has been rebuilt. The host replaces its entire scene
    /// with this primitive list.
    ModelUpdated {
        primitives: Vec<Primitive>,
        tally: MaterialTally,
        square_footage: f64,
        total_cost: f64,
        /// Per-section planner failures; geometry from sections that
        /// succeeded is still present.
        errors: Vec<String>,
    },

    /// Save project is ready; the host writes the JSON to disk.
    SaveReady { json_data: String },

    /// A project document was loaded and built.
    ProjectLoaded { name: String, deck: DeckSpec },

    /// The project was renamed.
    ProjectRenamed { name: String },

    /// An error occurred; the host keeps its last good scene.
    Error { message: String },
}
