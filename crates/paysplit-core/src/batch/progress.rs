//! Progress reporting and cancellation primitives.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Receiver for batch progress updates in percent (0 to 100).
///
/// The orchestrator guarantees the reported values never decrease and that
/// the final value is 100. It makes no guarantee about how many updates
/// arrive in between.
pub trait ProgressSink {
    /// Called with the current progress percentage.
    fn report(&mut self, percent: f64);
}

/// Sink that discards all updates.
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&mut self, _percent: f64) {}
}

/// Adapter turning a closure into a [`ProgressSink`].
pub struct ProgressFn<F: FnMut(f64)>(pub F);

impl<F: FnMut(f64)> ProgressSink for ProgressFn<F> {
    fn report(&mut self, percent: f64) {
        (self.0)(percent)
    }
}

/// Cooperative cancellation flag, checked between page iterations.
///
/// Clones share the flag, so a token handed to a batch can be cancelled
/// from another thread.
#[derive(Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// A fresh, uncancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Monotonic wrapper around a sink: clamps to [0, 100] and drops any
/// update that would move backwards.
pub(crate) struct ProgressTracker<'a> {
    sink: &'a mut dyn ProgressSink,
    last: f64,
}

impl<'a> ProgressTracker<'a> {
    pub(crate) fn new(sink: &'a mut dyn ProgressSink) -> Self {
        Self { sink, last: -1.0 }
    }

    pub(crate) fn emit(&mut self, percent: f64) {
        let percent = percent.clamp(0.0, 100.0);
        if percent > self.last {
            self.last = percent;
            self.sink.report(percent);
        }
    }

    pub(crate) fn finish(&mut self) {
        self.emit(100.0);
    }
}
