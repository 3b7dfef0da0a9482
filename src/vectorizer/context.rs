use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::{Duration, Instant},
};

use crate::error::VsmError;

/// Cancellation signal and optional deadline for a training run.
///
/// Cheap to clone; clones observe the same cancellation flag.
///
/// ```
/// use std::time::Duration;
/// use vsm_classifier::Context;
///
/// let (ctx, cancel) = Context::background().with_timeout(Duration::from_secs(5)).with_cancel();
/// assert!(ctx.err().is_none());
/// cancel.cancel();
/// assert!(ctx.err().is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// own flag last, ancestors' flags before it
    cancelled: Vec<Arc<AtomicBool>>,
    deadline: Option<Instant>,
}

/// Cancels every [`Context`] derived from the `with_cancel` call that made it.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    flag: Arc<AtomicBool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }
}

impl Context {
    /// never cancelled, no deadline
    pub fn background() -> Self {
        Self::default()
    }

    /// Adds a deadline. An earlier existing deadline is kept.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(current) => current.min(deadline),
            None => deadline,
        });
        self
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        let now = Instant::now();
        // an unrepresentable deadline is as good as none
        match now.checked_add(timeout) {
            Some(deadline) => self.with_deadline(deadline),
            None => self,
        }
    }

    /// Derives a cancellable context. Cancelling the parent still cancels it;
    /// the returned handle does not reach the parent.
    pub fn with_cancel(mut self) -> (Self, CancelHandle) {
        let flag = Arc::new(AtomicBool::new(false));
        self.cancelled.push(Arc::clone(&flag));
        (self, CancelHandle { flag })
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Why this context is done, or `None` while it is still live.
    /// Explicit cancellation takes precedence over an elapsed deadline.
    pub fn err(&self) -> Option<VsmError> {
        if self.cancelled.iter().any(|flag| flag.load(Ordering::Acquire)) {
            return Some(VsmError::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(VsmError::DeadlineExceeded),
            _ => None,
        }
    }

    /// Time left before the deadline, `None` without one.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(Instant::now()))
    }
}
