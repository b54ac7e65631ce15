use crate::crypto::cipher_error::{CipherError, CipherResult};
use futures::FutureExt;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::task::JoinHandle;

/// Shared state of one bulk transform: block counters and the cancel flag.
#[derive(Debug, Default)]
pub struct EncryptionProgress {
    processed: AtomicU64,
    total: AtomicU64,
    cancelled: AtomicBool,
}

impl EncryptionProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    pub fn processed(&self) -> u64 {
        self.processed.load(Ordering::Acquire)
    }

    pub fn total(&self) -> u64 {
        self.total.load(Ordering::Acquire)
    }

    /// Percentage of processed blocks, 0 until the block count is known.
    pub fn percent(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        (self.processed() as f64 / total as f64 * 100.0).min(100.0)
    }

    pub(crate) fn start(&self, total: usize) {
        self.processed.store(0, Ordering::Release);
        self.total.store(total as u64, Ordering::Release);
    }

    pub(crate) fn checkpoint(&self) -> CipherResult<()> {
        if self.is_cancelled() {
            return Err(CipherError::Cancelled);
        }
        Ok(())
    }

    pub(crate) fn advance(&self) {
        self.processed.fetch_add(1, Ordering::AcqRel);
    }
}

/// Handle to a transform running on the blocking pool.
///
/// Cancellation is cooperative: workers look at the flag once per block, so
/// the task stops shortly after [`CipherTask::cancel`] and then resolves to
/// [`CipherError::Cancelled`].
pub struct CipherTask<T> {
    handle: JoinHandle<CipherResult<T>>,
    progress: Arc<EncryptionProgress>,
}

impl<T> CipherTask<T> {
    pub(crate) fn new(handle: JoinHandle<CipherResult<T>>, progress: Arc<EncryptionProgress>) -> Self {
        Self { handle, progress }
    }

    /// Has no effect once the task has finished.
    pub fn cancel(&self) {
        if !self.handle.is_finished() {
            self.progress.cancel();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.progress.is_cancelled()
    }

    pub fn is_done(&self) -> bool {
        self.handle.is_finished()
    }

    pub fn progress_percent(&self) -> f64 {
        self.progress.percent()
    }

    pub fn progress(&self) -> Arc<EncryptionProgress> {
        Arc::clone(&self.progress)
    }

    pub async fn join(self) -> CipherResult<T> {
        self.await
    }
}

/// A dropped handle stops its detached worker.
impl<T> Drop for CipherTask<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl<T> Future for CipherTask<T> {
    type Output = CipherResult<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.handle.poll_unpin(cx).map(|joined| match joined {
            Ok(result) => result,
            Err(err) if err.is_cancelled() => Err(CipherError::Cancelled),
            Err(err) => Err(CipherError::TaskFailed(err.to_string())),
        })
    }
}
