use build_engine::rebuild::BuildOutput;
use file_format::{load_project, save_project};
use tracing::debug;

use crate::engine_state::{BridgeError, EngineState};
use crate::messages::{EngineToUi, UiToEngine};

/// Dispatch a UI message to the engine and return a response.
///
/// This is the single entry point for the host: every message is
/// handled here, and any error comes back as [`EngineToUi::Error`]
/// rather than a transport failure.
pub fn dispatch(state: &mut EngineState, msg: UiToEngine) -> EngineToUi {
    match handle_message(state, msg) {
        Ok(response) => response,
        Err(e) => EngineToUi::Error {
            message: e.to_string(),
        },
    }
}

fn handle_message(state: &mut EngineState, msg: UiToEngine) -> Result<EngineToUi, BridgeError> {
    match msg {
        // -- Spec editing --
        UiToEngine::UpdateSpec { spec } => {
            let build = state.engine.apply_spec(spec)?;
            Ok(model_updated_response(build))
        }

        UiToEngine::Rebuild => {
            let build = state.engine.rebuild();
            Ok(model_updated_response(build))
        }

        // -- History --
        UiToEngine::Undo => {
            let build = state.engine.undo()?;
            Ok(model_updated_response(build))
        }

        UiToEngine::Redo => {
            let build = state.engine.redo()?;
            Ok(model_updated_response(build))
        }

        // -- File operations --
        UiToEngine::SaveProject => {
            state.project.touch();
            let json_data = save_project(state.engine.spec(), &state.project);
            debug!(project = %state.project.name, "project serialized");
            Ok(EngineToUi::SaveReady { json_data })
        }

        UiToEngine::LoadProject { data } => {
            let (spec, metadata) = load_project(&data)?;
            state.engine.apply_spec(spec.clone())?;
            state.project = metadata;
            Ok(EngineToUi::ProjectLoaded {
                name: state.project.name.clone(),
                deck: spec,
            })
        }

        UiToEngine::SetProjectName { name } => {
            state.project.name = name.clone();
            state.project.touch();
            Ok(EngineToUi::ProjectRenamed { name })
        }
    }
}

/// Build a ModelUpdated response from a finished build.
fn model_updated_response(build: &BuildOutput) -> EngineToUi {
    EngineToUi::ModelUpdated {
        primitives: build.primitives.clone(),
        tally: build.tally,
        square_footage: build.square_footage,
        total_cost: build.total_cost,
        errors: build
            .errors
            .iter()
            .map(|(section, message)| format!("{section}: {message}"))
            .collect(),
    }
}
