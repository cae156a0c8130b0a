use crate::Worker;

/// Factory of the workers in the pool. Called eagerly when the pool is
/// created and lazily whenever a worker is acquired from an empty pool.
///
/// Implemented for every `Fn() -> Result<W, E>` closure where `W` is a
/// [`Worker`].
pub trait Factory {
    /// The type of the workers in the pool.
    type Worker: Worker;
    /// The type of the errors the factory can return.
    type Error;

    /// Create a new worker to be used in the pool.
    fn create(&self) -> Result<Self::Worker, Self::Error>;
}

impl<F, W, E> Factory for F
where
    F: Fn() -> Result<W, E>,
    W: Worker,
{
    type Worker = W;
    type Error = E;

    fn create(&self) -> Result<W, E> {
        self()
    }
}
