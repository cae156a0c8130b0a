/// Configuration for the pool.
///
/// ```
/// # use workpool::PoolConfig;
/// let config = PoolConfig::default()
///     .with_initial_count(2)
///     .with_capacity(4);
/// assert_eq!(config.capacity, Some(4));
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct PoolConfig {
    /// The number of workers created when creating the pool. Those beyond
    /// `capacity` are terminated as soon as they are created.
    pub initial_count: usize,
    /// The maximum number of idle workers kept by the pool. Workers
    /// released while the pool holds this many idle workers are
    /// terminated. `None` keeps every released worker.
    pub capacity: Option<usize>,
}

impl PoolConfig {
    /// Set the number of workers created when creating the pool.
    pub fn with_initial_count(mut self, initial_count: usize) -> Self {
        self.initial_count = initial_count;
        self
    }

    /// Bound the number of idle workers kept by the pool.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    #[googletest::test]
    fn default_config_is_empty_and_unbounded() {
        let config = PoolConfig::default();

        expect_that!(config.initial_count, eq(0));
        expect_that!(config.capacity, none());
    }

    #[googletest::test]
    fn setters_override_the_defaults() {
        let config = PoolConfig::default()
            .with_initial_count(3)
            .with_capacity(1);

        expect_that!(config.initial_count, eq(3));
        expect_that!(config.capacity, some(eq(1)));
    }
}
