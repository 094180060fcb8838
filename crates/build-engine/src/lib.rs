pub mod history;
pub mod rebuild;
pub mod sections;
pub mod types;

use deck_types::{CostTable, DeckSpec};

use crate::history::SpecHistory;
use crate::rebuild::BuildOutput;
use crate::types::EngineError;

pub use crate::rebuild::rebuild;
pub use crate::sections::{compose_sections, ComposedSection};

/// The deck geometry engine.
///
/// Owns the current spec, the cost table, the undo history, and the
/// output of the last build. Every spec change goes through
/// [`Engine::apply_spec`] so history and rebuilds stay in lockstep.
pub struct Engine {
    spec: DeckSpec,
    costs: CostTable,
    history: SpecHistory,
    last_build: Option<BuildOutput>,
}

impl Engine {
    /// An engine seeded with the default spec and cost table. No build
    /// has run yet; call [`Engine::rebuild`] for the initial geometry.
    pub fn new() -> Self {
        let spec = DeckSpec::default();
        Self {
            history: SpecHistory::new(spec.clone()),
            spec,
            costs: CostTable::default(),
            last_build: None,
        }
    }

    pub fn with_costs(costs: CostTable) -> Self {
        Self {
            costs,
            ..Self::new()
        }
    }

    pub fn spec(&self) -> &DeckSpec {
        &self.spec
    }

    pub fn costs(&self) -> &CostTable {
        &self.costs
    }

    pub fn last_build(&self) -> Option<&BuildOutput> {
        self.last_build.as_ref()
    }

    /// Validate and adopt a new spec, snapshot it, and rebuild.
    ///
    /// A rejected spec changes nothing: no history entry, and the last
    /// successful build stays on screen.
    pub fn apply_spec(&mut self, spec: DeckSpec) -> Result<&BuildOutput, EngineError> {
        spec.check()
            .map_err(|issues| EngineError::InvalidSpec { issues })?;
        self.history.push(spec.clone());
        self.spec = spec;
        Ok(self.rebuild())
    }

    /// Run a build pass over the current spec.
    pub fn rebuild(&mut self) -> &BuildOutput {
        self.last_build
            .insert(rebuild::rebuild(&self.spec, &self.costs))
    }

    /// Restore the previous spec snapshot and rebuild.
    pub fn undo(&mut self) -> Result<&BuildOutput, EngineError> {
        let spec = self.history.undo().ok_or(EngineError::NothingToUndo)?;
        self.spec = spec.clone();
        Ok(self.rebuild())
    }

    /// Restore the next spec snapshot and rebuild.
    pub fn redo(&mut self) -> Result<&BuildOutput, EngineError> {
        let spec = self.history.redo().ok_or(EngineError::NothingToRedo)?;
        self.spec = spec.clone();
        Ok(self.rebuild())
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
