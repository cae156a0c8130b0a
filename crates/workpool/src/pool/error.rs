use crate::{Factory, Worker};

/// Result of a [`crate::Pool`] operation for a pool using the factory `F`.
pub type PoolResult<T, F> = Result<
    T,
    PoolError<<F as Factory>::Error, <<F as Factory>::Worker as Worker>::Error>,
>;

/// Errors that can occur when using a [`crate::Pool`].
#[derive(Debug, thiserror::Error)]
pub enum PoolError<C, T> {
    /// Error from the [`Factory`] while creating a worker.
    #[error("Factory error: {0}")]
    Factory(C),
    /// Error from a [`Worker`] while terminating it.
    #[error("Worker termination error: {0}")]
    Terminate(T),
}
