// File: crates/chartie-core/src/animation.rs
// Summary: Frame-callback scheduling contract and a manually clocked scheduler for headless hosts.

use std::collections::VecDeque;

/// Opaque id of one requested frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Host-provided animation clock.
///
/// The host calls [`crate::Chart::on_frame`] with each handle returned by
/// `request_frame` once that frame is due, unless it was cancelled first.
pub trait FrameScheduler {
    /// Monotonic time in milliseconds.
    fn now(&self) -> f64;
    fn request_frame(&mut self) -> FrameHandle;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Controller animation state. There is no paused state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimationState {
    #[default]
    Idle,
    Animating,
}

/// Scheduler whose clock only moves when told to.
///
/// Frame requests queue up in order; the host drains them with
/// [`ManualScheduler::next_frame`] after advancing the clock.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: f64,
    next_id: u64,
    pending: VecDeque<FrameHandle>,
    requested: usize,
    cancelled: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the clock at `now` ms.
    pub fn starting_at(now: f64) -> Self {
        Self { now, ..Self::default() }
    }

    pub fn advance(&mut self, ms: f64) {
        self.now += ms.max(0.0);
    }

    pub fn set_now(&mut self, now: f64) {
        self.now = now;
    }

    /// Oldest outstanding request, removed from the queue.
    pub fn next_frame(&mut self) -> Option<FrameHandle> {
        self.pending.pop_front()
    }

    pub fn pending(&self) -> impl Iterator<Item = &FrameHandle> {
        self.pending.iter()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Total frames requested since creation.
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Total outstanding requests withdrawn via `cancel_frame`.
    pub fn cancelled(&self) -> usize {
        self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    fn now(&self) -> f64 {
        self.now
    }

    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending.push_back(handle);
        self.requested += 1;
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let before = self.pending.len();
        self.pending.retain(|h| *h != handle);
        if self.pending.len() != before {
            self.cancelled += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_queue_in_request_order() {
        let mut s = ManualScheduler::new();
        let a = s.request_frame();
        let b = s.request_frame();
        assert_ne!(a, b);
        assert_eq!(s.next_frame(), Some(a));
        assert_eq!(s.next_frame(), Some(b));
        assert_eq!(s.next_frame(), None);
        assert_eq!(s.requested(), 2);
    }

    #[test]
    fn cancel_removes_only_outstanding_requests() {
        let mut s = ManualScheduler::new();
        let a = s.request_frame();
        s.cancel_frame(a);
        s.cancel_frame(a);
        assert!(!s.has_pending());
        assert_eq!(s.cancelled(), 1);
    }

    #[test]
    fn clock_never_runs_backwards_on_advance() {
        let mut s = ManualScheduler::starting_at(100.0);
        s.advance(16.0);
        s.advance(-50.0);
        assert_eq!(s.now(), 116.0);
    }
}
