//! Fetch lifecycle state and latest-wins request gating.
//!
//! Pages own their fetched content explicitly as a [`LoadState`]. When a page
//! issues a new fetch (navigation, refresh) the previous one may still
//! complete; [`RequestGate`] makes sure only the most recently issued request
//! is allowed to update the state.

use std::sync::atomic::{AtomicU64, Ordering};

/// Lifecycle of one piece of fetched content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState<T> {
    /// Request in flight; nothing to show yet.
    #[default]
    Pending,
    /// Content arrived.
    Ready(T),
    /// Fetch failed and a fallback value is shown instead.
    Degraded {
        /// Fallback content
        value: T,
        /// Why the fetch failed
        reason: String,
    },
    /// Fetch failed with no fallback.
    Failed(String),
}

impl<T> LoadState<T> {
    /// Content to render, if any.
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Ready(value) | Self::Degraded { value, .. } => Some(value),
            Self::Pending | Self::Failed(_) => None,
        }
    }

    /// Consume the state, returning content if any.
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Ready(value) | Self::Degraded { value, .. } => Some(value),
            Self::Pending | Self::Failed(_) => None,
        }
    }

    /// Whether the request has completed, successfully or not.
    pub const fn is_settled(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Failure reason for `Degraded` and `Failed` states.
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Degraded { reason, .. } | Self::Failed(reason) => Some(reason.as_str()),
            Self::Pending | Self::Ready(_) => None,
        }
    }

    /// Transform the contained value.
    pub fn map<U, F>(self, f: F) -> LoadState<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Pending => LoadState::Pending,
            Self::Ready(value) => LoadState::Ready(f(value)),
            Self::Degraded { value, reason } => LoadState::Degraded {
                value: f(value),
                reason,
            },
            Self::Failed(reason) => LoadState::Failed(reason),
        }
    }

    /// `Ready` on success, `Degraded` with `fallback` on failure.
    pub fn from_result_or<E: std::fmt::Display>(result: Result<T, E>, fallback: T) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Degraded {
                value: fallback,
                reason: err.to_string(),
            },
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for LoadState<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Failed(err.to_string()),
        }
    }
}

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Issues tickets and accepts outcomes only for the latest one.
#[derive(Debug, Default)]
pub struct RequestGate {
    latest: AtomicU64,
}

impl RequestGate {
    /// Create a gate with no requests issued.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            latest: AtomicU64::new(0),
        }
    }

    /// Issue a ticket for a new request, superseding all earlier tickets.
    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `ticket` belongs to the most recently issued request.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Apply `outcome` to `state` if `ticket` is current.
    ///
    /// Returns `false` and leaves `state` untouched for superseded tickets.
    pub fn settle<T>(
        &self,
        ticket: Ticket,
        state: &mut LoadState<T>,
        outcome: LoadState<T>,
    ) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(?ticket, "discarding superseded fetch result");
            return false;
        }
        *state = outcome;
        true
    }
}
