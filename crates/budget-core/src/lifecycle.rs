//! Request Lifecycle
//!
//! One-shot fetches keyed by the resource they load (a token for `/me`, an id
//! for a budget). A key is fetched at most once until `reset`, and responses
//! for superseded requests are dropped.

use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub enum RequestStatus<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(ApiError),
}

/// Proof of which request a response belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequestState<K, T> {
    key: Option<K>,
    status: RequestStatus<T>,
    generation: u64,
}

impl<K, T> Default for RequestState<K, T> {
    fn default() -> Self {
        Self { key: None, status: RequestStatus::Idle, generation: 0 }
    }
}

impl<K: PartialEq, T> RequestState<K, T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request for `key`.
    ///
    /// Returns `None` when that key was already requested (loading, loaded or
    /// failed). A different key supersedes whatever was in flight.
    pub fn begin(&mut self, key: K) -> Option<Ticket> {
        if self.key.as_ref() == Some(&key) && !matches!(self.status, RequestStatus::Idle) {
            return None;
        }
        self.generation += 1;
        self.key = Some(key);
        self.status = RequestStatus::Loading;
        Some(Ticket { generation: self.generation })
    }

    /// Apply a response. Returns `false` (and changes nothing) for stale tickets.
    pub fn resolve(&mut self, ticket: Ticket, result: Result<T, ApiError>) -> bool {
        if ticket.generation != self.generation || !self.is_loading() {
            return false;
        }
        self.status = match result {
            Ok(value) => RequestStatus::Loaded(value),
            Err(err) => RequestStatus::Failed(err),
        };
        true
    }

    /// Back to idle; any in-flight response becomes stale
    pub fn reset(&mut self) {
        self.generation += 1;
        self.key = None;
        self.status = RequestStatus::Idle;
    }

    pub fn status(&self) -> &RequestStatus<T> {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, RequestStatus::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let mut state = RequestState::<String, u32>::new();
        let ticket = state.begin("42".to_string()).expect("first begin");
        assert!(state.is_loading());

        assert!(state.resolve(ticket, Ok(7)));
        assert_eq!(state.status(), &RequestStatus::Loaded(7));
    }

    #[test]
    fn test_same_key_is_not_refetched() {
        let mut state = RequestState::<String, u32>::new();
        let ticket = state.begin("42".to_string()).unwrap();
        assert!(state.begin("42".to_string()).is_none());

        state.resolve(ticket, Err(ApiError::Unauthorized));
        assert!(state.begin("42".to_string()).is_none());
        assert_eq!(state.status(), &RequestStatus::Failed(ApiError::Unauthorized));
    }

    #[test]
    fn test_new_key_supersedes_and_stale_response_is_dropped() {
        let mut state = RequestState::<String, u32>::new();
        let old = state.begin("a".to_string()).unwrap();
        let new = state.begin("b".to_string()).unwrap();

        assert!(!state.resolve(old, Ok(1)));
        assert!(state.is_loading());

        assert!(state.resolve(new, Ok(2)));
        assert_eq!(state.status(), &RequestStatus::Loaded(2));
        assert!(state.begin("b".to_string()).is_none());
    }

    #[test]
    fn test_reset_allows_retry_and_discards_in_flight() {
        let mut state = RequestState::<u8, u32>::new();
        let ticket = state.begin(1).unwrap();
        state.reset();

        assert!(!state.resolve(ticket, Ok(5)));
        assert_eq!(state.status(), &RequestStatus::Idle);
        assert!(state.begin(1).is_some());
    }

    #[test]
    fn test_resolve_twice_is_ignored() {
        let mut state = RequestState::<u8, u32>::new();
        let ticket = state.begin(1).unwrap();
        assert!(state.resolve(ticket.clone(), Ok(1)));
        assert!(!state.resolve(ticket, Ok(2)));
        assert_eq!(state.status(), &RequestStatus::Loaded(1));
    }
}
