//! Cancellable one-shot deadlines.
//!
//! The gallery never sleeps or spawns timers. Instead it records deadlines
//! here, the presenter asks for [`Scheduler::next_deadline`] to arm its own
//! timer, and calls back into the gallery with the current time. At most one
//! task of each kind is pending: scheduling a kind again replaces the
//! earlier deadline, which is what makes resize handling a debounce.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    /// Apply the last viewport width after resize events go quiet.
    ResizeSettle,
    /// Emit `Shown` after the open transition.
    ShownNotify,
    /// Emit `Closed` after the close transition.
    ClosedNotify,
    /// Reveal the delayed caption.
    CaptionReveal,
}

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    pending: Vec<(TaskKind, Instant)>,
}

impl Scheduler {
    /// Schedule `kind` to fire `delay` after `now`, replacing any pending one.
    pub fn schedule(&mut self, kind: TaskKind, now: Instant, delay: Duration) -> Instant {
        self.cancel(kind);
        let deadline = now + delay;
        self.pending.push((kind, deadline));
        deadline
    }

    /// Drop a pending task. Returns whether one was pending.
    pub fn cancel(&mut self, kind: TaskKind) -> bool {
        let before = self.pending.len();
        self.pending.retain(|(k, _)| *k != kind);
        self.pending.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn is_pending(&self, kind: TaskKind) -> bool {
        self.pending.iter().any(|(k, _)| *k == kind)
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|(_, deadline)| *deadline).min()
    }

    /// Remove and return every task due at `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<TaskKind> {
        let mut due: Vec<(TaskKind, Instant)> = Vec::new();
        self.pending.retain(|&(kind, deadline)| {
            if deadline <= now {
                due.push((kind, deadline));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|(_, deadline)| *deadline);
        due.into_iter().map(|(kind, _)| kind).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn task_fires_at_deadline() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::default();
        scheduler.schedule(TaskKind::ResizeSettle, t0, 100 * MS);

        assert!(scheduler.take_due(t0 + 99 * MS).is_empty());
        assert_eq!(scheduler.take_due(t0 + 100 * MS), vec![TaskKind::ResizeSettle]);
        assert!(!scheduler.is_pending(TaskKind::ResizeSettle));
    }

    #[test]
    fn rescheduling_replaces_pending_task() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::default();
        scheduler.schedule(TaskKind::ResizeSettle, t0, 100 * MS);
        scheduler.schedule(TaskKind::ResizeSettle, t0 + 60 * MS, 100 * MS);

        // The first deadline no longer fires
        assert!(scheduler.take_due(t0 + 120 * MS).is_empty());
        assert_eq!(scheduler.take_due(t0 + 160 * MS), vec![TaskKind::ResizeSettle]);
    }

    #[test]
    fn due_tasks_come_out_earliest_first() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::default();
        scheduler.schedule(TaskKind::ShownNotify, t0, 150 * MS);
        scheduler.schedule(TaskKind::CaptionReveal, t0, 50 * MS);

        assert_eq!(scheduler.next_deadline(), Some(t0 + 50 * MS));
        assert_eq!(
            scheduler.take_due(t0 + 200 * MS),
            vec![TaskKind::CaptionReveal, TaskKind::ShownNotify]
        );
        assert_eq!(scheduler.next_deadline(), None);
    }

    #[test]
    fn cancel_reports_pending() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::default();
        assert!(!scheduler.cancel(TaskKind::ClosedNotify));
        scheduler.schedule(TaskKind::ClosedNotify, t0, 150 * MS);
        assert!(scheduler.cancel(TaskKind::ClosedNotify));
        assert!(scheduler.take_due(t0 + 1000 * MS).is_empty());
    }

    #[test]
    fn cancel_all_clears_everything() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::default();
        scheduler.schedule(TaskKind::ShownNotify, t0, MS);
        scheduler.schedule(TaskKind::ResizeSettle, t0, MS);
        scheduler.cancel_all();
        assert_eq!(scheduler.next_deadline(), None);
    }
}
