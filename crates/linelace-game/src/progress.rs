//! Per-tier progression.

use std::collections::BTreeMap;

use crate::PuzzleId;

/// Remembers how far a player has advanced in each tier.
pub trait ProgressStore {
    /// Returns the furthest unlocked 1-based index in `tier`.
    ///
    /// Tiers with no recorded progress start at 1.
    fn furthest_unlocked(&self, tier: &str) -> usize;

    /// Records that `id` was completed, unlocking the entry after it.
    ///
    /// Progress never moves backwards: replaying an earlier puzzle keeps
    /// the stored value.
    fn record_completed(&mut self, id: &PuzzleId);
}

/// In-memory progress, serializable as a JSON object of tier to index.
///
/// # Examples
///
/// ```
/// use linelace_game::{MemoryProgress, ProgressStore, PuzzleId};
///
/// let mut progress = MemoryProgress::default();
/// assert_eq!(progress.furthest_unlocked("easy"), 1);
///
/// progress.record_completed(&PuzzleId::new("easy", 4));
/// progress.record_completed(&PuzzleId::new("easy", 2));
/// assert_eq!(progress.furthest_unlocked("easy"), 5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct MemoryProgress {
    unlocked: BTreeMap<String, usize>,
}

impl ProgressStore for MemoryProgress {
    fn furthest_unlocked(&self, tier: &str) -> usize {
        self.unlocked.get(tier).copied().unwrap_or(1).max(1)
    }

    fn record_completed(&mut self, id: &PuzzleId) {
        let next = id.index() + 1;
        let stored = self.unlocked.entry(id.tier().to_owned()).or_insert(1);
        if next > *stored {
            log::info!("unlocked {}.{next}", id.tier());
            *stored = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers_are_independent() {
        let mut progress = MemoryProgress::default();
        progress.record_completed(&PuzzleId::new("easy", 1));
        assert_eq!(progress.furthest_unlocked("easy"), 2);
        assert_eq!(progress.furthest_unlocked("hard"), 1);
    }

    #[test]
    fn test_progress_never_decreases() {
        let mut progress = MemoryProgress::default();
        progress.record_completed(&PuzzleId::new("medium", 7));
        progress.record_completed(&PuzzleId::new("medium", 3));
        assert_eq!(progress.furthest_unlocked("medium"), 8);
    }

    #[test]
    fn test_json_shape() {
        let mut progress = MemoryProgress::default();
        progress.record_completed(&PuzzleId::new("easy", 2));
        let json = serde_json::to_string(&progress).expect("serializable");
        assert_eq!(json, r#"{"easy":3}"#);

        let loaded: MemoryProgress =
            serde_json::from_str(r#"{"easy":3,"hard":0}"#).expect("valid json");
        assert_eq!(loaded.furthest_unlocked("easy"), 3);
        assert_eq!(loaded.furthest_unlocked("hard"), 1);
    }
}
