/// What to do with a priority-queue entry whose cost is worse than the best
/// cost already recorded for its node
///
/// The queue has no decrease-key, so an improved node is pushed again and the
/// older entry stays behind. Neither policy relaxes neighbors from such an entry,
/// so distances and paths are the same either way. Only the iteration count differs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StaleEntries {
    /// Every pop is an iteration, stale ones included
    #[default]
    Count,
    /// Stale pops are dropped before they are counted
    Discard,
}

/// Options shared by every search run through a `Navigator`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchConfig {
    pub stale_entries: StaleEntries,
}

impl SearchConfig {

    pub fn new(stale_entries: StaleEntries) -> Self {
        Self { stale_entries }
    }

    /// Returns true if a stale pop should still count as an iteration
    pub(crate) fn counts_stale(&self) -> bool {
        self.stale_entries == StaleEntries::Count
    }
}
