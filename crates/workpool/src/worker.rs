use std::{convert::Infallible, fmt::Debug};

/// A concurrent-execution handle that can be kept in a [`crate::Pool`].
///
/// The pool never looks inside a worker. It only stores it, hands it out
/// and terminates it once the pool has no room left to keep it idle.
pub trait Worker: Sized {
    /// The type of the errors terminating the worker can return.
    type Error: Debug;

    /// Terminate the worker, releasing whatever it holds. If not
    /// implemented the worker is just dropped.
    fn terminate(self) -> Result<(), Self::Error> {
        drop(self);
        Ok(())
    }
}

/// Terminating a task handle aborts the task.
impl<T> Worker for tokio::task::JoinHandle<T> {
    type Error = Infallible;

    fn terminate(self) -> Result<(), Self::Error> {
        self.abort();
        Ok(())
    }
}

impl Worker for tokio::task::AbortHandle {
    type Error = Infallible;

    fn terminate(self) -> Result<(), Self::Error> {
        self.abort();
        Ok(())
    }
}
