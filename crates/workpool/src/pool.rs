mod config;
mod error;
mod pooled;

use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use crate::{Factory, Worker, idle::IdleWorkers};

pub use config::PoolConfig;
pub use error::{PoolError, PoolResult};
pub use pooled::PooledWorker;

const POISONED_MUTEX_ERROR: &str = "Pool idle workers mutex should not be poisoned";

/// Pool of workers created by a [`Factory`].
///
/// Idle workers are handed out oldest first. When none are idle a new one
/// is created. Released workers are kept idle up to the configured
/// capacity and terminated beyond it. The number of workers checked out
/// at the same time is not bounded.
///
/// # Examples
/// ```
/// use std::convert::Infallible;
/// use workpool::{Pool, PoolConfig, Worker};
///
/// #[derive(Debug)]
/// struct Interpreter;
///
/// impl Worker for Interpreter {
///     type Error = Infallible;
/// }
///
/// let config = PoolConfig::default().with_initial_count(1).with_capacity(1);
/// let pool = Pool::new(|| Ok::<_, Infallible>(Interpreter), config).unwrap();
///
/// // Takes the worker created with the pool.
/// let worker_1 = pool.acquire().unwrap();
/// // Nothing is idle, so a new worker is created.
/// let worker_2 = pool.acquire().unwrap();
///
/// // Kept idle for the next acquire.
/// worker_1.release().unwrap();
/// // The pool is at capacity, so this one is terminated.
/// worker_2.release().unwrap();
///
/// assert_eq!(pool.idle_count(), 1);
/// ```
pub struct Pool<F: Factory> {
    inner: Arc<PoolInner<F>>,
}

pub(crate) struct PoolInner<F: Factory> {
    factory: F,
    idle: Mutex<IdleWorkers<F::Worker>>,
    config: PoolConfig,
}

impl<F: Factory> Pool<F> {
    /// Create a new pool with a [`Factory`] and a [`PoolConfig`]. The
    /// factory is called `initial_count` times before returning and each
    /// worker is released to the pool, so workers beyond `capacity` are
    /// terminated right away. If any factory call fails the workers already
    /// created are terminated and the error is returned.
    pub fn new(factory: F, config: PoolConfig) -> PoolResult<Self, F> {
        let inner = Arc::new(PoolInner {
            factory,
            idle: Mutex::new(IdleWorkers::new(config.capacity)),
            config,
        });

        for _ in 0..inner.config.initial_count {
            let worker = inner.create_worker()?;
            inner.release(worker).map_err(PoolError::Terminate)?;
        }

        Ok(Self { inner })
    }

    /// Acquire a worker from the pool. Returns the worker that has been
    /// idle the longest, or creates a new one if no worker is idle.
    /// Never waits; the only error is the factory's.
    pub fn acquire(&self) -> PoolResult<PooledWorker<F>, F> {
        let idle_worker = self.inner.lock_idle().try_acquire();
        let worker = match idle_worker {
            Some(worker) => {
                tracing::debug!("Reusing idle worker");
                worker
            }
            None => self.inner.create_worker()?,
        };
        Ok(PooledWorker::new(worker, self.inner.clone()))
    }

    /// Terminate every idle worker. Workers currently checked out are not
    /// affected and the pool stays usable. All idle workers are terminated
    /// even if some fail; the first error is returned.
    pub fn clear(&self) -> PoolResult<(), F> {
        let workers = self.inner.lock_idle().drain();
        tracing::debug!(count = workers.len(), "Terminating idle workers");

        let mut result = Ok(());
        for worker in workers {
            if let Err(error) = worker.terminate() {
                if result.is_ok() {
                    result = Err(PoolError::Terminate(error));
                }
            }
        }
        result
    }

    /// The number of workers currently idle in the pool.
    pub fn idle_count(&self) -> usize {
        self.inner.lock_idle().len()
    }

    /// The maximum number of idle workers kept by the pool, `None` if
    /// unbounded.
    pub fn capacity(&self) -> Option<usize> {
        self.inner.config.capacity
    }
}

impl<F: Factory> PoolInner<F> {
    fn lock_idle(&self) -> MutexGuard<'_, IdleWorkers<F::Worker>> {
        self.idle.lock().expect(POISONED_MUTEX_ERROR)
    }

    fn create_worker(&self) -> PoolResult<F::Worker, F> {
        tracing::debug!("Creating worker");
        self.factory.create().map_err(PoolError::Factory)
    }

    /// Keep the worker idle if there is room, otherwise terminate it. The
    /// worker is never in the idle set while it is being terminated.
    pub(crate) fn release(
        &self,
        worker: F::Worker,
    ) -> Result<(), <F::Worker as Worker>::Error> {
        let rejected = {
            let mut idle = self.lock_idle();
            let rejected = idle.try_release(worker);
            if rejected.is_none() {
                tracing::debug!(idle = idle.len(), "Worker released to the pool");
            }
            rejected
        };

        match rejected {
            None => Ok(()),
            Some(worker) => {
                tracing::debug!(
                    capacity = self.config.capacity,
                    "Idle capacity reached, terminating worker"
                );
                worker.terminate()
            }
        }
    }
}

impl<F: Factory> Clone for Pool<F> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<F: Factory> fmt::Debug for Pool<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pool")
            .field("idle", &self.idle_count())
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl<F: Factory> Drop for PoolInner<F> {
    fn drop(&mut self) {
        let workers = self
            .idle
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .drain();
        for worker in workers {
            if let Err(error) = worker.terminate() {
                tracing::warn!(?error, "Failed to terminate idle worker when dropping the pool");
            }
        }
    }
}
