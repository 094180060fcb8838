use deck_types::SpecIssue;

/// Errors surfaced by the engine facade.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EngineError {
    /// The spec failed validation before any geometry was attempted.
    #[error("invalid spec: {}", format_issues(.issues))]
    InvalidSpec { issues: Vec<SpecIssue> },

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("nothing to redo")]
    NothingToRedo,
}

fn format_issues(issues: &[SpecIssue]) -> String {
    issues
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
