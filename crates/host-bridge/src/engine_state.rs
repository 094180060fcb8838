use build_engine::types::EngineError;
use build_engine::Engine;
use file_format::{LoadError, ProjectMetadata};

/// Engine plus the open project's metadata, owned by the bridge for the
/// lifetime of the session.
pub struct EngineState {
    pub engine: Engine,
    pub project: ProjectMetadata,
}

impl EngineState {
    pub fn new() -> Self {
        Self {
            engine: Engine::new(),
            project: ProjectMetadata::new("Untitled deck"),
        }
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors surfaced across the bridge boundary.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Load(#[from] LoadError),
}
