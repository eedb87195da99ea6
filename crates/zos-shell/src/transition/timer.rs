//! Cancellable deferred tasks driven by an explicit clock

use crate::window::WindowId;

/// Handle returned by [`TimerQueue::schedule`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// Registry mutation to apply when an animation ends
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeferredTask {
    FinishOpen,
    FinishMinimize,
    FinishClose,
}

/// Timer that came due during [`TimerQueue::drain_due`]
#[derive(Clone, Debug, PartialEq)]
pub struct FiredTimer {
    pub handle: TimerHandle,
    pub window_id: WindowId,
    pub task: DeferredTask,
}

#[derive(Clone, Debug)]
struct PendingTimer {
    handle: TimerHandle,
    window_id: WindowId,
    task: DeferredTask,
    due_ms: f64,
}

/// Pending timers, fired in due-time order
#[derive(Debug, Default)]
pub struct TimerQueue {
    pending: Vec<PendingTimer>,
    next_handle: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` for `window_id` at `due_ms`
    pub fn schedule(&mut self, window_id: &str, task: DeferredTask, due_ms: f64) -> TimerHandle {
        self.next_handle += 1;
        let handle = TimerHandle(self.next_handle);
        self.pending.push(PendingTimer {
            handle,
            window_id: window_id.to_string(),
            task,
            due_ms,
        });
        handle
    }

    /// Cancel one timer; false if it already fired or never existed
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.handle != handle);
        self.pending.len() != before
    }

    /// Cancel every timer of a window, returning how many were dropped
    pub fn cancel_window(&mut self, window_id: &str) -> usize {
        let before = self.pending.len();
        self.pending.retain(|t| t.window_id != window_id);
        before - self.pending.len()
    }

    /// Remove and return all timers due at `now_ms`
    ///
    /// Ties on due time fire in scheduling order.
    pub fn drain_due(&mut self, now_ms: f64) -> Vec<FiredTimer> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|t| t.due_ms <= now_ms);
        self.pending = pending;

        due.sort_by(|a, b| a.due_ms.total_cmp(&b.due_ms).then(a.handle.cmp(&b.handle)));
        due.into_iter()
            .map(|t| FiredTimer {
                handle: t.handle,
                window_id: t.window_id,
                task: t.task,
            })
            .collect()
    }

    /// Number of timers still waiting
    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_in_due_order() {
        let mut timers = TimerQueue::new();
        timers.schedule("a", DeferredTask::FinishMinimize, 500.0);
        timers.schedule("b", DeferredTask::FinishClose, 200.0);
        timers.schedule("c", DeferredTask::FinishOpen, 900.0);

        let fired = timers.drain_due(600.0);
        let ids: Vec<&str> = fired.iter().map(|t| t.window_id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
        assert_eq!(timers.len(), 1);
    }

    #[test]
    fn test_nothing_due_yet() {
        let mut timers = TimerQueue::new();
        timers.schedule("a", DeferredTask::FinishClose, 200.0);
        assert!(timers.drain_due(199.0).is_empty());
        assert_eq!(timers.drain_due(200.0).len(), 1);
        assert!(timers.is_empty());
    }

    #[test]
    fn test_cancelled_timer_never_fires() {
        let mut timers = TimerQueue::new();
        let handle = timers.schedule("a", DeferredTask::FinishClose, 200.0);

        assert!(timers.cancel(handle));
        assert!(!timers.cancel(handle));
        assert!(timers.drain_due(1000.0).is_empty());
    }

    #[test]
    fn test_cancel_window() {
        let mut timers = TimerQueue::new();
        timers.schedule("a", DeferredTask::FinishOpen, 100.0);
        timers.schedule("a", DeferredTask::FinishClose, 300.0);
        timers.schedule("b", DeferredTask::FinishClose, 300.0);

        assert_eq!(timers.cancel_window("a"), 2);
        assert_eq!(timers.len(), 1);
    }
}
