//! Background execution of a packing run.
//!
//! Packers are bounded greedy passes and are never interrupted midway. A
//! [`PlanTask`] runs one on a worker thread so an interactive caller stays
//! responsive; cancelling only means the result is discarded when the
//! worker finishes, instead of being handed back.

use crate::{Error, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

/// A packing run executing on a worker thread.
pub struct PlanTask<T> {
    handle: JoinHandle<Result<T>>,
    cancelled: Arc<AtomicBool>,
}

impl<T: Send + 'static> PlanTask<T> {
    /// Starts `job` on a new worker thread.
    pub fn spawn<F>(job: F) -> Self
    where
        F: FnOnce() -> Result<T> + Send + 'static,
    {
        Self {
            handle: std::thread::spawn(job),
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Marks the run as cancelled. Its result will be discarded.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Returns true if [`cancel`](Self::cancel) has been called.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Returns true once the worker has finished.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Returns a handle that can cancel this run from another thread.
    pub fn cancel_token(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancelled)
    }

    /// Blocks until the worker finishes and commits its result.
    ///
    /// Returns [`Error::Cancelled`] if the run was cancelled at any point
    /// before this call commits, even if the worker produced a result.
    pub fn wait(self) -> Result<T> {
        let outcome = self
            .handle
            .join()
            .map_err(|_| Error::Internal("packing worker panicked".into()))?;
        if self.cancelled.load(Ordering::Relaxed) {
            log::debug!("discarding result of cancelled packing run");
            return Err(Error::Cancelled);
        }
        outcome
    }
}
