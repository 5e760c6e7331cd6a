#[cfg(test)]
pub mod fixtures {
    use std::sync::Arc;

    use secrecy::SecretString;

    use crate::{
        auth::Audience,
        http::{transport::MockTransport, ApiClient},
        session::SessionStore,
    };

    /// In-memory session holding the given tokens.
    pub fn session_with(admin: Option<&str>, student: Option<&str>) -> SessionStore {
        let session = SessionStore::in_memory();
        if let Some(token) = admin {
            session
                .set_token(Audience::Admin, &SecretString::from(token.to_string()))
                .expect("memory storage accepts writes");
        }
        if let Some(token) = student {
            session
                .set_token(Audience::Student, &SecretString::from(token.to_string()))
                .expect("memory storage accepts writes");
        }
        session
    }

    pub fn api_client(transport: MockTransport, session: SessionStore) -> ApiClient {
        init_logging();
        ApiClient::new(Arc::new(transport), session)
    }

    pub fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::auth::Audience;

    #[test]
    fn test_session_with_tokens() {
        let session = session_with(Some("a"), None);
        assert!(session.has_token(Audience::Admin));
        assert!(!session.has_token(Audience::Student));
    }

    #[test]
    fn test_session_with_nothing() {
        let session = session_with(None, None);
        assert!(!session.has_token(Audience::Admin));
        assert!(!session.has_token(Audience::Student));
    }
}
