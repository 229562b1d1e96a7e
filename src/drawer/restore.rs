//! Deferred scroll restoration.
//!
//! Restoring an offset before the restored drawer's content is laid out
//! clamps it to zero, so going back schedules the restore and the host
//! applies it after the next layout pass. The restore remembers which
//! drawer instance it was meant for; if that instance is gone by then the
//! restore is dropped.

use super::viewport::ScrollViewport;

/// A one-shot restore targeting one drawer generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRestore {
    pub generation: u64,
    pub scroll_top: u16,
}

impl PendingRestore {
    pub fn new(generation: u64, scroll_top: u16) -> Self {
        Self {
            generation,
            scroll_top,
        }
    }

    /// Apply to `viewport` if `current_generation` is still the target.
    ///
    /// Returns true if the restore was applied.
    pub fn apply(self, current_generation: Option<u64>, viewport: &mut ScrollViewport) -> bool {
        if current_generation != Some(self.generation) {
            tracing::debug!(
                target_generation = self.generation,
                ?current_generation,
                "stale scroll restore dropped"
            );
            return false;
        }
        viewport.set_offset(self.scroll_top);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_applies_to_matching_generation() {
        let mut vp = ScrollViewport::new();
        vp.set_layout(100, 10);
        assert!(PendingRestore::new(4, 35).apply(Some(4), &mut vp));
        assert_eq!(vp.offset(), 35);
    }

    #[test]
    fn test_stale_restore_is_noop() {
        let mut vp = ScrollViewport::new();
        vp.set_layout(100, 10);
        assert!(!PendingRestore::new(4, 35).apply(Some(5), &mut vp));
        assert!(!PendingRestore::new(4, 35).apply(None, &mut vp));
        assert_eq!(vp.offset(), 0);
    }
}
