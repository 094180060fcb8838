//! Message-based boundary between the engine and a host UI.
//!
//! The host (a web front end or native shell) talks to the engine
//! exclusively through [`UiToEngine`] messages and receives
//! [`EngineToUi`] responses, both serialized as tagged JSON. The bridge
//! owns the engine and the open project's metadata.

pub mod debounce;
pub mod dispatch;
pub mod engine_state;
pub mod messages;

pub use debounce::RebuildDebouncer;
pub use dispatch::dispatch;
pub use engine_state::{BridgeError, EngineState};
pub use messages::{EngineToUi, UiToEngine};
