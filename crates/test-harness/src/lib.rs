//! Test harness for the deck geometry engine.
//!
//! Provides spec builders, primitive measurement helpers, and rich
//! Result-returning assertions so scenario tests can report expected vs
//! actual values instead of a bare panic.

pub mod assertions;
pub mod helpers;
pub mod workflow;

pub use helpers::HarnessError;
pub use workflow::DeckSession;
