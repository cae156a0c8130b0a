use std::collections::VecDeque;

/// Workers waiting to be reused, oldest first. Holds at most `capacity`
/// workers, unbounded when there is no capacity.
pub struct IdleWorkers<W> {
    workers: VecDeque<W>,
    capacity: Option<usize>,
}

impl<W> IdleWorkers<W> {
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            workers: VecDeque::new(),
            capacity,
        }
    }

    /// Take the worker that has been idle the longest.
    pub fn try_acquire(&mut self) -> Option<W> {
        self.workers.pop_front()
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_full(&self) -> bool {
        self.capacity
            .is_some_and(|capacity| self.workers.len() >= capacity)
    }

    /// Store a worker for reuse. If the idle workers are at capacity the
    /// worker is returned and the caller is responsible for terminating it.
    #[must_use]
    pub fn try_release(&mut self, worker: W) -> Option<W> {
        if self.is_full() {
            Some(worker)
        } else {
            self.workers.push_back(worker);
            None
        }
    }

    #[must_use]
    pub fn drain(&mut self) -> VecDeque<W> {
        std::mem::take(&mut self.workers)
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    #[googletest::test]
    fn empty_idle_workers_have_nothing_to_acquire() {
        let mut idle: IdleWorkers<usize> = IdleWorkers::new(None);

        expect_that!(idle.try_acquire(), none());
        expect_that!(idle.len(), eq(0));
    }

    #[googletest::test]
    fn idle_workers_are_acquired_oldest_first() {
        let mut idle = IdleWorkers::new(None);
        expect_that!(idle.try_release(1), none());
        expect_that!(idle.try_release(2), none());
        expect_that!(idle.try_release(3), none());

        expect_that!(idle.try_acquire(), some(eq(1)));
        expect_that!(idle.try_release(4), none());
        expect_that!(idle.try_acquire(), some(eq(2)));
        expect_that!(idle.try_acquire(), some(eq(3)));
        expect_that!(idle.try_acquire(), some(eq(4)));
        expect_that!(idle.try_acquire(), none());
    }

    #[googletest::test]
    fn idle_workers_at_capacity_return_the_released_worker() {
        let mut idle = IdleWorkers::new(Some(2));
        expect_that!(idle.try_release(1), none());
        expect_that!(idle.try_release(2), none());

        expect_that!(idle.is_full(), eq(true));
        expect_that!(idle.try_release(3), some(eq(3)));
        expect_that!(idle.len(), eq(2));

        expect_that!(idle.try_acquire(), some(eq(1)));
        expect_that!(idle.is_full(), eq(false));
        expect_that!(idle.try_release(3), none());
    }

    #[googletest::test]
    fn idle_workers_with_zero_capacity_never_store() {
        let mut idle = IdleWorkers::new(Some(0));

        expect_that!(idle.is_full(), eq(true));
        expect_that!(idle.try_release(1), some(eq(1)));
        expect_that!(idle.len(), eq(0));
    }

    #[googletest::test]
    fn unbounded_idle_workers_are_never_full() {
        let mut idle = IdleWorkers::new(None);
        for worker in 0..1000 {
            expect_that!(idle.try_release(worker), none());
        }

        expect_that!(idle.is_full(), eq(false));
        expect_that!(idle.len(), eq(1000));
    }

    #[googletest::test]
    fn drain_returns_all_idle_workers_in_order() {
        let mut idle = IdleWorkers::new(Some(3));
        expect_that!(idle.try_release(42), none());
        expect_that!(idle.try_release(43), none());

        expect_that!(idle.drain(), elements_are![eq(&42), eq(&43)]);
        expect_that!(idle.len(), eq(0));
        expect_that!(idle.try_acquire(), none());
    }
}
