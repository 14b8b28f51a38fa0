//! Notification bus: a bounded, insertion-ordered queue of toasts.
//!
//! DESIGN
//! ======
//! The queue is owned by one signal provided at the app root. Producers push
//! through a [`Notifier`] handle; the single `Toaster` surface renders the
//! queue and expires entries. A pushed message is moved into the queue, so
//! no producer keeps a handle to it afterwards.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::collections::VecDeque;

use leptos::prelude::*;

use crate::config;
use crate::util::time::now_ms;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
}

/// One transient notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub text: String,
    pub kind: ToastKind,
    pub created_at_ms: f64,
}

/// Toast queue with a fixed capacity and display duration.
#[derive(Clone, Debug, PartialEq)]
pub struct ToastQueue {
    entries: VecDeque<Toast>,
    next_id: u64,
    capacity: usize,
    ttl_ms: f64,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(config::TOAST_CAPACITY, config::TOAST_TTL_MS)
    }
}

impl ToastQueue {
    pub fn new(capacity: usize, ttl_ms: f64) -> Self {
        Self { entries: VecDeque::new(), next_id: 1, capacity: capacity.max(1), ttl_ms }
    }

    pub fn ttl_ms(&self) -> f64 {
        self.ttl_ms
    }

    /// Append a toast, evicting the oldest one when full. Returns its id.
    pub fn push(&mut self, text: impl Into<String>, kind: ToastKind, now_ms: f64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(Toast { id, text: text.into(), kind, created_at_ms: now_ms });
        id
    }

    /// Drop every toast whose display time has elapsed. Returns how many were removed.
    pub fn expire(&mut self, now_ms: f64) -> usize {
        let before = self.entries.len();
        let ttl_ms = self.ttl_ms;
        self.entries.retain(|toast| now_ms - toast.created_at_ms < ttl_ms);
        before - self.entries.len()
    }

    /// Remove a single toast by id.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|toast| toast.id != id);
        before != self.entries.len()
    }

    /// Toasts in display order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Producer handle for the notification bus.
#[derive(Clone, Copy)]
pub struct Notifier(RwSignal<ToastQueue>);

impl Notifier {
    pub fn new(queue: RwSignal<ToastQueue>) -> Self {
        Self(queue)
    }

    pub fn queue(&self) -> RwSignal<ToastQueue> {
        self.0
    }

    pub fn push(&self, text: impl Into<String>, kind: ToastKind) -> Option<u64> {
        let text = text.into();
        self.0.try_update(|q| q.push(text, kind, now_ms()))
    }

    pub fn success(&self, text: impl Into<String>) -> Option<u64> {
        self.push(text, ToastKind::Success)
    }

    pub fn error(&self, text: impl Into<String>) -> Option<u64> {
        self.push(text, ToastKind::Error)
    }

    pub fn dismiss(&self, id: u64) {
        self.0.try_update(|q| q.dismiss(id));
    }

    /// Sweep every toast whose display time has elapsed.
    pub fn expire_due(&self) {
        self.0.try_update(|q| q.expire(now_ms()));
    }
}

/// Create the toast queue and provide a [`Notifier`] as context.
pub fn provide_notifier() -> Notifier {
    let notifier = Notifier::new(RwSignal::new(ToastQueue::default()));
    provide_context(notifier);
    notifier
}

pub fn use_notifier() -> Notifier {
    expect_context::<Notifier>()
}
