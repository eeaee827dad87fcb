// src/auth.rs
use std::sync::Mutex;

/// Auth token context injected into the API client.
///
/// Calls carry `Authorization: Bearer <token>` when a token is present. The
/// client clears this context on a 401 so a stale token is never retried.
#[derive(Debug, Default)]
pub struct AuthTokens {
    access: Mutex<Option<String>>,
}

impl AuthTokens {
    pub fn new(access: Option<String>) -> Self {
        Self {
            access: Mutex::new(access),
        }
    }

    pub fn set(&self, token: String) {
        *self.access.lock().expect("token lock poisoned") = Some(token);
    }

    /// Current bearer token, if any.
    pub fn bearer(&self) -> Option<String> {
        self.access.lock().expect("token lock poisoned").clone()
    }

    /// Drop all stored credentials.
    pub fn clear(&self) {
        *self.access.lock().expect("token lock poisoned") = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.access
            .lock()
            .expect("token lock poisoned")
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_drops_token() {
        let tokens = AuthTokens::new(Some("abc".to_string()));
        assert!(tokens.is_authenticated());
        tokens.clear();
        assert!(!tokens.is_authenticated());
        assert_eq!(tokens.bearer(), None);
    }

    #[test]
    fn test_set_replaces_token() {
        let tokens = AuthTokens::default();
        tokens.set("first".to_string());
        tokens.set("second".to_string());
        assert_eq!(tokens.bearer(), Some("second".to_string()));
    }
}
