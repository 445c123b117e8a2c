/*!
 * The single "current track" slot.
 *
 * The slot owns an `Arc` to an immutable [`Resolver`]. Loading a file
 * swaps the `Arc` under a short write lock; readers clone the `Arc` under
 * a read lock and resolve without holding it, so a reader always sees
 * either the old track or the new one.
 */

use std::sync::Arc;
use parking_lot::RwLock;

use crate::resolver::Resolver;
use crate::subtitle_processor::Cue;

/// Holder of the current cue track
#[derive(Debug, Default)]
pub struct TrackSlot {
    current: RwLock<Arc<Resolver>>,
}

impl TrackSlot {
    /// Create a slot holding the empty track
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current track
    pub fn current(&self) -> Arc<Resolver> {
        Arc::clone(&self.current.read())
    }

    /// Replace the current track, returning the previous one
    pub fn replace(&self, resolver: Resolver) -> Arc<Resolver> {
        let next = Arc::new(resolver);
        std::mem::replace(&mut *self.current.write(), next)
    }

    /// Drop the current track in favour of the empty one
    pub fn clear(&self) {
        self.replace(Resolver::empty());
    }

    /// Number of cues in the current track
    pub fn cue_count(&self) -> usize {
        self.current.read().track().len()
    }

    /// Active cue at `time` in the current track, cloned out of the snapshot
    pub fn active_cue(&self, time: f64) -> Option<Cue> {
        self.current().active_cue(time).cloned()
    }
}
