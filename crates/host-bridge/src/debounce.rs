use std::time::{Duration, Instant};

/// Coalesces rapid spec edits into a single rebuild.
///
/// The host notes every edit; the rebuild fires once the edit stream
/// has been quiet for the window. Purely a timing gate, the debouncer
/// never touches the engine itself.
#[derive(Debug)]
pub struct RebuildDebouncer {
    window: Duration,
    last_edit: Option<Instant>,
}

impl RebuildDebouncer {
    pub const DEFAULT_WINDOW: Duration = Duration::from_millis(350);

    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_edit: None,
        }
    }

    /// Record an edit; restarts the quiet period.
    pub fn note_edit(&mut self, now: Instant) {
        self.last_edit = Some(now);
    }

    /// True once the quiet period has elapsed since the last edit.
    /// Consumes the pending edit, so each burst fires exactly once.
    pub fn ready(&mut self, now: Instant) -> bool {
        match self.last_edit {
            Some(at) if now.duration_since(at) >= self.window => {
                self.last_edit = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.last_edit.is_some()
    }
}

impl Default for RebuildDebouncer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_after_the_quiet_window() {
        let mut debouncer = RebuildDebouncer::new(Duration::from_millis(100));
        let start = Instant::now();

        debouncer.note_edit(start);
        assert!(!debouncer.ready(start));
        assert!(!debouncer.ready(start + Duration::from_millis(50)));

        assert!(debouncer.ready(start + Duration::from_millis(100)));
        // Consumed; no second fire for the same burst.
        assert!(!debouncer.ready(start + Duration::from_millis(200)));
    }

    #[test]
    fn a_new_edit_restarts_the_window() {
        let mut debouncer = RebuildDebouncer::new(Duration::from_millis(100));
        let start = Instant::now();

        debouncer.note_edit(start);
        debouncer.note_edit(start + Duration::from_millis(80));
        assert!(!debouncer.ready(start + Duration::from_millis(120)));
        assert!(debouncer.ready(start + Duration::from_millis(180)));
    }

    #[test]
    fn idle_debouncer_never_fires() {
        let mut debouncer = RebuildDebouncer::default();
        assert!(!debouncer.is_pending());
        assert!(!debouncer.ready(Instant::now()));
    }
}
