use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use crate::pool::PoolInner;
use crate::{Factory, PoolError, PoolResult};

const POOLED_WORKER_SHOULD_HAVE_WORKER: &str = "Pooled worker should hold a worker";

/// A worker checked out of a [`crate::Pool`]. Will be released back to the
/// pool when dropped. Can be dereferenced to the inner worker type.
pub struct PooledWorker<F: Factory> {
    worker: Option<F::Worker>,
    pool: Arc<PoolInner<F>>,
}

impl<F: Factory> PooledWorker<F> {
    pub(crate) fn new(worker: F::Worker, pool: Arc<PoolInner<F>>) -> Self {
        Self {
            worker: Some(worker),
            pool,
        }
    }

    /// Release the worker back to the pool. If the pool already holds as
    /// many idle workers as its capacity allows, the worker is terminated
    /// instead and any termination error is returned.
    ///
    /// Dropping a pooled worker releases it the same way, but termination
    /// errors can only be logged.
    pub fn release(mut self) -> PoolResult<(), F> {
        let worker = self.take();
        self.pool.release(worker).map_err(PoolError::Terminate)
    }

    /// Take the worker out of the pool. It will never be returned to the
    /// pool and the caller becomes responsible for terminating it.
    pub fn detach(mut self) -> F::Worker {
        self.take()
    }

    fn take(&mut self) -> F::Worker {
        self.worker
            .take()
            .expect(POOLED_WORKER_SHOULD_HAVE_WORKER)
    }
}

impl<F: Factory> Drop for PooledWorker<F> {
    fn drop(&mut self) {
        if let Some(worker) = self.worker.take() {
            if let Err(error) = self.pool.release(worker) {
                tracing::warn!(?error, "Failed to terminate worker released over capacity");
            }
        }
    }
}

impl<F: Factory> Deref for PooledWorker<F> {
    type Target = F::Worker;

    fn deref(&self) -> &Self::Target {
        self.worker
            .as_ref()
            .expect(POOLED_WORKER_SHOULD_HAVE_WORKER)
    }
}

impl<F: Factory> DerefMut for PooledWorker<F> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.worker
            .as_mut()
            .expect(POOLED_WORKER_SHOULD_HAVE_WORKER)
    }
}

impl<F: Factory> std::fmt::Debug for PooledWorker<F>
where
    F::Worker: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PooledWorker {{ worker: {:?} }}", self.worker)
    }
}
