use serde::{Deserialize, Serialize};

/// Credentials handed out by the auth endpoint and kept on the device.
///
/// The token is opaque: it is only checked for presence and attached to
/// prediction requests, never decoded or refreshed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
}

impl Session {
    pub fn new(token: impl Into<String>, user_name: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            user_name: Some(user_name.into()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.bearer_token().is_some()
    }

    /// Token suitable for an `Authorization: Bearer` header, if any.
    pub fn bearer_token(&self) -> Option<&str> {
        self.token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }

    pub fn display_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.user_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(fallback)
    }

    pub fn clear(&mut self) {
        self.token = None;
        self.user_name = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_session_is_not_authenticated() {
        assert!(!Session::default().is_authenticated());
    }

    #[test]
    fn blank_token_does_not_count() {
        let session = Session {
            token: Some("   ".into()),
            user_name: Some("Ana".into()),
        };
        assert!(!session.is_authenticated());
        assert_eq!(session.bearer_token(), None);
    }

    #[test]
    fn display_name_falls_back_when_missing_or_blank() {
        let mut session = Session::new("tok", "  ");
        assert_eq!(session.display_name("Operator"), "Operator");

        session.user_name = Some("Captain Reyes".into());
        assert_eq!(session.display_name("Operator"), "Captain Reyes");

        session.user_name = None;
        assert_eq!(session.display_name("Captain"), "Captain");
    }

    #[test]
    fn clear_drops_token_and_name() {
        let mut session = Session::new("abc", "Ana");
        assert!(session.is_authenticated());
        session.clear();
        assert_eq!(session, Session::default());
    }

    #[test]
    fn decodes_partial_json() {
        let session: Session = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
        assert_eq!(session.bearer_token(), Some("abc"));
        assert_eq!(session.user_name, None);
    }
}
