//! Fetch state for one piece of remote data.
//!
//! `idle → loading → (loaded | failed)`, re-entering `loading` on every
//! refresh. Each fetch is issued a [`FetchTicket`]; only the completion that
//! carries the newest ticket is applied, so a slow response can never
//! overwrite the result of a later request.

use log::{debug, warn};

use crate::api::ApiError;
use crate::model::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Generation number handed out for every request a view starts: fetches,
/// saves and deletes. A completion is applied only if its ticket is still
/// the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

impl FetchTicket {
    /// Bumps `counter` and returns the ticket for the new generation.
    pub(crate) fn issue(counter: &mut u64) -> Self {
        *counter += 1;
        FetchTicket(*counter)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Loadable<T> {
    data: T,
    state: LoadState,
    error: Option<String>,
    generation: u64,
    subject: &'static str,
    not_found_message: Option<&'static str>,
}

impl<T: Default> Loadable<T> {
    /// `subject` names the data in log lines and in the error message
    /// ("Failed to fetch {subject}. Please try again.").
    pub fn new(subject: &'static str) -> Self {
        Self {
            data: T::default(),
            state: LoadState::Idle,
            error: None,
            generation: 0,
            subject,
            not_found_message: None,
        }
    }
}

impl<T> Loadable<T> {
    /// Message shown instead of the generic one when the backend answers 404.
    pub fn with_not_found_message(mut self, message: &'static str) -> Self {
        self.not_found_message = Some(message);
        self
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.state = LoadState::Loading;
        self.error = None;
        FetchTicket::issue(&mut self.generation)
    }

    /// Applies a completed fetch. Returns `false` (and changes nothing) when
    /// the ticket has been superseded by a newer fetch.
    ///
    /// On failure the previous data stays in place.
    pub fn finish_fetch(&mut self, ticket: FetchTicket, result: Result<T, ApiError>) -> bool {
        if ticket.0 != self.generation {
            debug!(
                "discarding stale {} response (ticket {}, current {})",
                self.subject, ticket.0, self.generation
            );
            return false;
        }

        match result {
            Ok(data) => {
                self.data = data;
                self.state = LoadState::Loaded;
                self.error = None;
            }
            Err(err) => {
                warn!("failed to fetch {}: {}", self.subject, err);
                self.state = LoadState::Failed;
                self.error = Some(match self.not_found_message {
                    Some(message) if err.is_not_found() => message.to_string(),
                    _ => format!("Failed to fetch {}. Please try again.", self.subject),
                });
            }
        }
        true
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }
}

/// A fetched collection of records.
pub type ListView<R> = Loadable<Vec<R>>;

impl<R: Record> Loadable<Vec<R>> {
    pub fn for_records() -> Self {
        Self::new(R::KIND.plural())
    }

    pub fn items(&self) -> &[R] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
