use deck_types::DeckSpec;

/// Linear undo/redo over immutable spec snapshots.
///
/// The cursor points at the current snapshot. Pushing a new snapshot
/// after an undo truncates the forward history; a rewound cursor never
/// keeps stale redo entries past a new edit.
#[derive(Debug, Clone)]
pub struct SpecHistory {
    snapshots: Vec<DeckSpec>,
    cursor: usize,
}

impl SpecHistory {
    /// A history seeded with the initial spec.
    pub fn new(initial: DeckSpec) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
        }
    }

    /// Record a new snapshot, discarding any redo entries.
    pub fn push(&mut self, spec: DeckSpec) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(spec);
        self.cursor = self.snapshots.len() - 1;
    }

    /// Step the cursor back and return the snapshot there.
    pub fn undo(&mut self) -> Option<&DeckSpec> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.snapshots[self.cursor])
    }

    /// Step the cursor forward and return the snapshot there.
    pub fn redo(&mut self) -> Option<&DeckSpec> {
        if self.cursor + 1 >= self.snapshots.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.snapshots[self.cursor])
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    pub fn current(&self) -> &DeckSpec {
        &self.snapshots[self.cursor]
    }
}
