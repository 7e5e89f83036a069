use std::fmt;

/// Opaque admin credential issued by the backend login endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(***)")
    }
}

/// Admin session lifecycle.
///
/// Every authenticated request takes a `&Session`; only `Valid` sessions
/// produce an `Authorization` header. A 401 from the backend moves the
/// session to `Expired`, logout moves it back to `Absent`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Absent,
    Valid(BearerToken),
    Expired,
}

impl Session {
    /// Restore a session from a persisted token. Blank tokens count as absent.
    pub fn from_stored(token: Option<&str>) -> Self {
        match token.map(str::trim) {
            Some(t) if !t.is_empty() => Session::Valid(BearerToken::new(t)),
            _ => Session::Absent,
        }
    }

    pub fn token(&self) -> Option<&BearerToken> {
        match self {
            Session::Valid(token) => Some(token),
            _ => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Session::Valid(_))
    }

    pub fn is_expired(&self) -> bool {
        matches!(self, Session::Expired)
    }

    /// The backend rejected the token.
    pub fn expire(&mut self) {
        if self.is_valid() {
            *self = Session::Expired;
        }
    }

    pub fn clear(&mut self) {
        *self = Session::Absent;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_stored() {
        assert_eq!(Session::from_stored(None), Session::Absent);
        assert_eq!(Session::from_stored(Some("  ")), Session::Absent);
        let session = Session::from_stored(Some("abc"));
        assert_eq!(session.token().map(BearerToken::as_str), Some("abc"));
    }

    #[test]
    fn test_expire_only_affects_valid_sessions() {
        let mut absent = Session::Absent;
        absent.expire();
        assert_eq!(absent, Session::Absent);

        let mut valid = Session::Valid(BearerToken::new("abc"));
        valid.expire();
        assert!(valid.is_expired());
        assert!(valid.token().is_none());

        valid.clear();
        assert_eq!(valid, Session::Absent);
    }

    #[test]
    fn test_token_debug_is_redacted() {
        let token = BearerToken::new("super-secret");
        assert!(!format!("{token:?}").contains("super-secret"));
    }
}
