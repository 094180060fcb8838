//! DeckSession, a scripting wrapper for bridge-driven tests.
//!
//! Wraps `host_bridge::dispatch()` so workflow tests exercise the real
//! message path, not the engine directly. Every method turns an
//! `EngineToUi::Error` response into a [`HarnessError`].

use deck_types::{DeckSpec, MaterialTally, Primitive};
use host_bridge::{dispatch, EngineState, EngineToUi, UiToEngine};

use crate::helpers::HarnessError;

/// The scene payload of a `ModelUpdated` response.
#[derive(Debug, Clone)]
pub struct SceneUpdate {
    pub primitives: Vec<Primitive>,
    pub tally: MaterialTally,
    pub square_footage: f64,
    pub total_cost: f64,
    pub errors: Vec<String>,
}

/// A scripted editing session driven entirely through bridge messages.
pub struct DeckSession {
    pub state: EngineState,
}

impl DeckSession {
    pub fn new() -> Self {
        Self {
            state: EngineState::new(),
        }
    }

    /// Replace the spec and rebuild, as the UI does on every edit.
    pub fn update_spec(&mut self, spec: DeckSpec) -> Result<SceneUpdate, HarnessError> {
        self.expect_scene(UiToEngine::UpdateSpec { spec }, "UpdateSpec")
    }

    /// Rebuild without a spec change.
    pub fn rebuild(&mut self) -> Result<SceneUpdate, HarnessError> {
        self.expect_scene(UiToEngine::Rebuild, "Rebuild")
    }

    pub fn undo(&mut self) -> Result<SceneUpdate, HarnessError> {
        self.expect_scene(UiToEngine::Undo, "Undo")
    }

    pub fn redo(&mut self) -> Result<SceneUpdate, HarnessError> {
        self.expect_scene(UiToEngine::Redo, "Redo")
    }

    /// Save the project and return the document JSON.
    pub fn save(&mut self) -> Result<String, HarnessError> {
        match dispatch(&mut self.state, UiToEngine::SaveProject) {
            EngineToUi::SaveReady { json_data } => Ok(json_data),
            EngineToUi::Error { message } => Err(HarnessError::Engine(message)),
            other => Err(unexpected("SaveProject", &other)),
        }
    }

    /// Load a project document, replacing the session's spec and metadata.
    pub fn load(&mut self, json: &str) -> Result<DeckSpec, HarnessError> {
        let msg = UiToEngine::LoadProject {
            data: json.to_string(),
        };
        match dispatch(&mut self.state, msg) {
            EngineToUi::ProjectLoaded { deck, .. } => Ok(deck),
            EngineToUi::Error { message } => Err(HarnessError::Engine(message)),
            other => Err(unexpected("LoadProject", &other)),
        }
    }

    pub fn rename(&mut self, name: &str) -> Result<(), HarnessError> {
        let msg = UiToEngine::SetProjectName {
            name: name.to_string(),
        };
        match dispatch(&mut self.state, msg) {
            EngineToUi::ProjectRenamed { .. } => Ok(()),
            EngineToUi::Error { message } => Err(HarnessError::Engine(message)),
            other => Err(unexpected("SetProjectName", &other)),
        }
    }

    pub fn project_name(&self) -> &str {
        &self.state.project.name
    }

    fn expect_scene(
        &mut self,
        msg: UiToEngine,
        msg_type: &str,
    ) -> Result<SceneUpdate, HarnessError> {
        match dispatch(&mut self.state, msg) {
            EngineToUi::ModelUpdated {
                primitives,
                tally,
                square_footage,
                total_cost,
                errors,
            } => Ok(SceneUpdate {
                primitives,
                tally,
                square_footage,
                total_cost,
                errors,
            }),
            EngineToUi::Error { message } => Err(HarnessError::Engine(message)),
            other => Err(unexpected(msg_type, &other)),
        }
    }
}

impl Default for DeckSession {
    fn default() -> Self {
        Self::new()
    }
}

fn unexpected(msg_type: &str, response: &EngineToUi) -> HarnessError {
    HarnessError::AssertionFailed {
        detail: format!("{msg_type}: unexpected response {response:?}"),
    }
}
