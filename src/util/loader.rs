//! Reactive glue for [`LoadMachine`]: fetch on mount, refetch on key change,
//! and drop results once the owning page is gone.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call [`use_loader`] once per backend-sourced section. Each call gets
//! its own machine and task, so sibling sections load concurrently and a
//! failure in one never blocks another.
//!
//! TRADE-OFFS
//! ==========
//! Unmount is detected twice: the [`CancelToken`] flipped in `on_cleanup`, and
//! `try_update`, which yields `None` once the page's signals are disposed.
//! Cleanup ordering between the two is not relied on.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::state::loader::{LoadMachine, Ticket};

/// Shared "owner still mounted" flag.
#[derive(Clone, Debug)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(false)))
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Cancel token tied to the current reactive owner.
pub fn use_cancel_token() -> CancelToken {
    let token = CancelToken::new();
    let on_unmount = token.clone();
    on_cleanup(move || on_unmount.cancel());
    token
}

/// Apply a finished fetch to `machine` unless the page is gone.
///
/// Returns `true` when the result was applied.
pub fn deliver<T>(
    machine: RwSignal<LoadMachine<T>>,
    alive: &CancelToken,
    ticket: Ticket,
    result: Result<T, ApiError>,
) -> bool
where
    T: Send + Sync + 'static,
{
    if alive.is_cancelled() {
        return false;
    }
    machine.try_update(|m| m.resolve(ticket, result)).unwrap_or(false)
}

/// Run `task` on the browser event loop; no-op in native builds.
pub fn spawn_task<Fut>(task: Fut)
where
    Fut: Future<Output = ()> + 'static,
{
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(task);
    #[cfg(not(feature = "csr"))]
    drop(task);
}

/// Create a loader that fetches `fetch(key())` on mount and again whenever
/// the signals read by `key` change, resetting to `Loading` each time.
pub fn use_loader<K, T, F, Fut>(key: impl Fn() -> K + 'static, fetch: F) -> RwSignal<LoadMachine<T>>
where
    K: 'static,
    T: Send + Sync + 'static,
    F: Fn(K) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let machine = RwSignal::new(LoadMachine::new());
    let alive = use_cancel_token();
    on_cleanup(move || {
        machine.try_update(LoadMachine::cancel);
    });

    // The Effect only tracks `key`; every run goes through `restart`.
    Effect::new(move || {
        restart(machine, &alive, &fetch, key());
    });

    machine
}

/// Reset `machine` to `Loading` and spawn the fetch for `key`.
///
/// Returns the ticket of the new fetch, or `None` once the machine was
/// cancelled. Results of earlier tickets are discarded on arrival.
pub fn restart<K, T, F, Fut>(machine: RwSignal<LoadMachine<T>>, alive: &CancelToken, fetch: &F, key: K) -> Option<Ticket>
where
    T: Send + Sync + 'static,
    F: Fn(K) -> Fut,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let ticket = machine.try_update(LoadMachine::begin).flatten()?;
    let request = fetch(key);
    let alive = alive.clone();
    spawn_task(async move {
        let result = request.await;
        if !deliver(machine, &alive, ticket, result) {
            leptos::logging::log!("discarded stale or orphaned load result");
        }
    });
    Some(ticket)
}

/// Fetch one further page into a paged loader ("show more").
pub fn load_more<T, Fut>(
    machine: RwSignal<LoadMachine<crate::state::loader::Paged<T>>>,
    alive: CancelToken,
    page_size: usize,
    request: Fut,
) where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    let Some(ticket) = machine.try_with_untracked(LoadMachine::current_ticket).flatten() else {
        return;
    };
    spawn_task(async move {
        match request.await {
            Ok(page) if !alive.is_cancelled() => {
                machine.try_update(|m| m.extend_page(ticket, page, page_size));
            }
            Ok(_) => {}
            Err(e) => leptos::logging::warn!("show more failed: {e}"),
        }
    });
}
