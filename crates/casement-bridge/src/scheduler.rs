//! Deferred invocation queue backing the `after` builtin.
//!
//! `after(delayMs, funcName, ...args)` acknowledges synchronously and
//! enqueues a one-shot deadline here; the host event loop drains due
//! entries and fires them (user registry first, builtin fallback),
//! discarding the result. No response envelope is produced and there is no
//! cancellation: once scheduled, an entry always fires unless the process
//! exits first.

use std::time::{Duration, Instant};

use serde_json::{json, Value};
use tracing::debug;

/// A scheduled call, returned by [`DeferredQueue::take_due`].
#[derive(Debug, Clone)]
pub struct DeferredCall {
    pub func_name: String,
    pub args: Vec<Value>,
}

#[derive(Debug)]
struct Entry {
    due: Instant,
    call: DeferredCall,
}

/// One-shot timers on the host's single-threaded event loop.
#[derive(Debug, Default)]
pub struct DeferredQueue {
    entries: Vec<Entry>,
}

impl DeferredQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `func_name(args)` to fire after `delay`. Returns the
    /// synchronous acknowledgment object sent back to the page.
    pub fn schedule(&mut self, delay: Duration, func_name: &str, args: Vec<Value>) -> Value {
        let due = Instant::now() + delay;
        debug!(func = %func_name, delay_ms = delay.as_millis() as u64, "deferred call scheduled");
        self.entries.push(Entry {
            due,
            call: DeferredCall {
                func_name: func_name.to_string(),
                args,
            },
        });
        json!({
            "status": "success",
            "timeout": delay.as_millis() as u64,
            "function": func_name,
        })
    }

    /// Earliest pending deadline, for driving the event loop's wait.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|e| e.due).min()
    }

    /// Remove and return every entry due at or before `now`, in deadline
    /// order.
    pub fn take_due(&mut self, now: Instant) -> Vec<DeferredCall> {
        let mut due: Vec<Entry> = Vec::new();
        let mut rest: Vec<Entry> = Vec::new();
        for entry in self.entries.drain(..) {
            if entry.due <= now {
                due.push(entry);
            } else {
                rest.push(entry);
            }
        }
        self.entries = rest;
        due.sort_by_key(|e| e.due);
        due.into_iter().map(|e| e.call).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn schedule_acknowledges_synchronously() {
        let mut queue = DeferredQueue::new();
        let ack = queue.schedule(Duration::from_millis(250), "hello", vec![json!(1)]);
        assert_eq!(
            ack,
            json!({"status": "success", "timeout": 250, "function": "hello"})
        );
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn zero_delay_is_immediately_due() {
        let mut queue = DeferredQueue::new();
        queue.schedule(Duration::ZERO, "now", vec![]);
        let due = queue.take_due(Instant::now());
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].func_name, "now");
        assert!(queue.is_empty());
    }

    #[test]
    fn future_entries_stay_queued() {
        let mut queue = DeferredQueue::new();
        queue.schedule(Duration::from_secs(60), "later", vec![]);
        assert!(queue.take_due(Instant::now()).is_empty());
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn due_entries_come_back_in_deadline_order() {
        let mut queue = DeferredQueue::new();
        queue.schedule(Duration::from_millis(20), "second", vec![]);
        queue.schedule(Duration::from_millis(10), "first", vec![]);
        let due = queue.take_due(Instant::now() + Duration::from_secs(1));
        let names: Vec<&str> = due.iter().map(|c| c.func_name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn next_deadline_is_the_minimum() {
        let mut queue = DeferredQueue::new();
        assert!(queue.next_deadline().is_none());
        queue.schedule(Duration::from_secs(30), "a", vec![]);
        queue.schedule(Duration::from_secs(10), "b", vec![]);
        let deadline = queue.next_deadline().unwrap();
        assert!(deadline <= Instant::now() + Duration::from_secs(10));
    }

    #[test]
    fn args_are_captured() {
        let mut queue = DeferredQueue::new();
        queue.schedule(Duration::ZERO, "f", vec![json!("x"), json!(2)]);
        let due = queue.take_due(Instant::now());
        assert_eq!(due[0].args, vec![json!("x"), json!(2)]);
    }
}
