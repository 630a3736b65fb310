//! Per-frame event queue
//!
//! Producers record what happened during a step; the frame loop takes the
//! whole batch once, in the order it was recorded.

pub struct EventBus<E> {
    pending: Vec<E>,
}

impl<E> EventBus<E> {
    pub const fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    pub fn push(&mut self, event: E) {
        self.pending.push(event);
    }

    /// Take everything recorded since the last drain
    pub fn drain(&mut self) -> Vec<E> {
        std::mem::take(&mut self.pending)
    }
}
