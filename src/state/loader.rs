//! Page data-loading state machine.
//!
//! DESIGN
//! ======
//! Every backend-sourced section of a page owns one [`LoadMachine`]. It moves
//! strictly `Idle -> Loading -> Loaded | Failed`, and each `begin` hands out a
//! [`Ticket`]. A result is applied only if its ticket is still the newest and
//! the machine has not been cancelled, so a response for a previous route
//! parameter, or one that lands after the page unmounted, is dropped.
//!
//! The machine is plain data; `util::loader` wires it to signals and tasks.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

use crate::net::api::ApiError;

/// Load status of one page section.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(ApiError),
}

impl<T> LoadState<T> {
    /// Idle and Loading both render as "in progress".
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Idle | Self::Loading)
    }

    /// Payload, only when loaded.
    pub fn payload(&self) -> Option<&T> {
        match self {
            Self::Loaded(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&ApiError> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }
}

/// Text rendered for a failed section.
///
/// The reason stays opaque to the page: backend messages only reach the log,
/// the reader always sees `notice`.
pub fn failure_notice(error: &ApiError, notice: &'static str) -> &'static str {
    leptos::logging::warn!("section failed to load: {error}");
    notice
}

/// Identifies one fetch issued by a [`LoadMachine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Loader state plus the bookkeeping needed to discard stale results.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoadMachine<T> {
    state: LoadState<T>,
    generation: u64,
    cancelled: bool,
}

impl<T> LoadMachine<T> {
    pub fn new() -> Self {
        Self { state: LoadState::Idle, generation: 0, cancelled: false }
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Start a fetch: drop whatever was shown and enter `Loading`.
    ///
    /// Returns `None` once the machine is cancelled.
    pub fn begin(&mut self) -> Option<Ticket> {
        if self.cancelled {
            return None;
        }
        self.generation += 1;
        self.state = LoadState::Loading;
        Some(Ticket(self.generation))
    }

    /// Ticket of the newest fetch, if the machine is still live.
    pub fn current_ticket(&self) -> Option<Ticket> {
        (!self.cancelled && self.generation > 0).then_some(Ticket(self.generation))
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.current_ticket() == Some(ticket)
    }

    /// Apply a fetch result. Returns `false` (and changes nothing) when the
    /// ticket is stale, the result already arrived, or the machine is cancelled.
    pub fn resolve(&mut self, ticket: Ticket, result: Result<T, ApiError>) -> bool {
        if !self.is_current(ticket) || !matches!(self.state, LoadState::Loading) {
            return false;
        }
        self.state = match result {
            Ok(payload) => LoadState::Loaded(payload),
            Err(error) => LoadState::Failed(error),
        };
        true
    }

    /// Edit a loaded payload in place (e.g. after a local create/delete).
    pub fn map_loaded(&mut self, f: impl FnOnce(&mut T)) -> bool {
        match &mut self.state {
            LoadState::Loaded(payload) if !self.cancelled => {
                f(payload);
                true
            }
            _ => false,
        }
    }

    /// Owner went away; ignore everything from now on.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }
}

/// A list payload that can grow with "show more" pages.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Paged<T> {
    pub items: Vec<T>,
    /// A full page came back, so another page may exist.
    pub show_more: bool,
}

impl<T> Paged<T> {
    pub fn first(items: Vec<T>, page_size: usize) -> Self {
        let show_more = page_size > 0 && items.len() >= page_size;
        Self { items, show_more }
    }

    /// Start index for the next page request.
    pub fn next_start(&self) -> usize {
        self.items.len()
    }
}

impl<T> LoadMachine<Paged<T>> {
    /// Append a further page fetched while `ticket` was current.
    pub fn extend_page(&mut self, ticket: Ticket, page: Vec<T>, page_size: usize) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.map_loaded(|paged| {
            paged.show_more = page_size > 0 && page.len() >= page_size;
            paged.items.extend(page);
        })
    }
}
