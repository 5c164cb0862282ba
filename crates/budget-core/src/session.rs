//! Session
//!
//! Token and profile of the signed-in user. Plain value; the UI wraps it in
//! reactive context.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::models::User;

/// Key of the persisted session in browser storage
pub const STORAGE_KEY: &str = "budget-admin.session";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: Some(token.into()), user: None }
    }

    /// Blank tokens count as signed out
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// A new token invalidates the previous user
    pub fn set_token(&mut self, token: String) {
        if self.token.as_deref() != Some(token.as_str()) {
            self.user = None;
        }
        self.token = Some(token);
    }

    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Sign out
    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
    }

    pub fn to_json(&self) -> Option<String> {
        serde_json::to_string(self)
            .map_err(|e| warn!("[session] Failed to serialize session: {}", e))
            .ok()
    }

    /// Restore a persisted session; unreadable data counts as signed out
    pub fn from_json(raw: &str) -> Session {
        serde_json::from_str(raw).unwrap_or_else(|e| {
            warn!("[session] Discarding unreadable session: {}", e);
            Session::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_and_out() {
        let mut session = Session::new();
        assert!(!session.is_authenticated());

        session.set_token("abc".to_string());
        session.set_user(User { username: Some("maria".to_string()), ..Default::default() });
        assert!(session.is_authenticated());

        session.clear();
        assert_eq!(session, Session::default());
    }

    #[test]
    fn test_blank_token_is_signed_out() {
        assert!(!Session::with_token("").is_authenticated());
    }

    #[test]
    fn test_new_token_drops_user() {
        let mut session = Session::with_token("abc");
        session.set_user(User::default());

        session.set_token("abc".to_string());
        assert!(session.user.is_some());

        session.set_token("def".to_string());
        assert!(session.user.is_none());
    }

    #[test]
    fn test_json_round_trip() {
        let mut session = Session::with_token("abc");
        session.set_user(User { full_name: Some("Maria".to_string()), ..Default::default() });

        let raw = session.to_json().expect("serializes");
        assert_eq!(Session::from_json(&raw), session);
    }

    #[test]
    fn test_corrupt_json_is_signed_out() {
        assert_eq!(Session::from_json("{not json"), Session::default());
        assert_eq!(Session::from_json("{}"), Session::default());
    }
}
