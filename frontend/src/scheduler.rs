//! Deadline bookkeeping for every delayed action in the crate.
//!
//! State machines in this crate never own a real timer. They push
//! `(deadline, action)` pairs into a [`Scheduler`] and the browser layer
//! (see `utils::driver`) arms a single timeout for [`Scheduler::next_deadline`],
//! then hands due actions back through [`Clocked::advance`] and drains the
//! resulting events with [`Clocked::take_events`]. Tests do the same with
//! plain numbers.

/// Something whose pending timers can be driven by an external clock.
pub trait Clocked {
    type Event: std::fmt::Debug;

    /// Fire every action due at or before `now_ms`.
    fn advance(&mut self, now_ms: f64);
    /// Events produced since the last call. Callers drain after every
    /// mutation so the queue never outlives one update.
    fn take_events(&mut self) -> Vec<Self::Event>;
    fn next_deadline(&self) -> Option<f64>;
    /// Drop every pending action and queued event. Nothing scheduled before
    /// this call may mutate state afterwards.
    fn teardown(&mut self);
}

#[derive(Debug, Clone)]
struct Entry<A> {
    due: f64,
    action: A,
}

/// Ordered queue of pending actions. Entries with equal deadlines keep their
/// insertion order.
#[derive(Debug, Clone)]
pub struct Scheduler<A> {
    entries: Vec<Entry<A>>,
}

impl<A> Default for Scheduler<A> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<A> Scheduler<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now_ms: f64, delay_ms: f64, action: A) {
        let due = now_ms + delay_ms.max(0.0);
        let at = self.entries.partition_point(|entry| entry.due <= due);
        self.entries.insert(at, Entry { due, action });
    }

    /// Remove and return every action due at or before `now_ms`, paired with
    /// the deadline it was scheduled for.
    pub fn drain_due(&mut self, now_ms: f64) -> Vec<(f64, A)> {
        let split = self.entries.partition_point(|entry| entry.due <= now_ms);
        self.entries
            .drain(..split)
            .map(|entry| (entry.due, entry.action))
            .collect()
    }

    pub fn cancel_where(&mut self, mut pred: impl FnMut(&A) -> bool) {
        self.entries.retain(|entry| !pred(&entry.action));
    }

    pub fn next_deadline(&self) -> Option<f64> {
        self.entries.first().map(|entry| entry.due)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
