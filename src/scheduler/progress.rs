use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts jobs that were dispatched but not settled yet
///
/// Only the edges matter to a progress indicator: [`ProgressTracker::begin`]
/// reports the step from idle to busy and [`ProgressTracker::finish`] the step
/// back, each exactly once per busy period.
#[derive(Debug, Default)]
pub struct ProgressTracker {
    outstanding: AtomicUsize,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a dispatched job, `true` if the tracker was idle before
    pub fn begin(&self) -> bool {
        self.outstanding.fetch_add(1, Ordering::AcqRel) == 0
    }

    /// Count a settled job, `true` if it was the last outstanding one
    pub fn finish(&self) -> bool {
        self.outstanding
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1))
            .map(|previous| previous == 1)
            .unwrap_or(false)
    }

    pub fn outstanding(&self) -> usize {
        self.outstanding.load(Ordering::Acquire)
    }

    pub fn is_idle(&self) -> bool {
        self.outstanding() == 0
    }
}
