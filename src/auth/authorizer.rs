use secrecy::SecretString;

use crate::{auth::Audience, http::ApiRequest, session::SessionStore};

/// Picks the credential for an outbound call: the admin token if present,
/// else the student token, else none.
///
/// A session holding both tokens therefore authenticates every call as admin,
/// including calls to student endpoints.
pub fn select_bearer(session: &SessionStore) -> Option<(Audience, SecretString)> {
    Audience::PRECEDENCE
        .into_iter()
        .find_map(|audience| session.token(audience).map(|token| (audience, token)))
}

/// Attaches the selected bearer token to `request`. Without any token the
/// request goes out unauthenticated and the backend decides.
pub fn authorize(mut request: ApiRequest, session: &SessionStore) -> ApiRequest {
    request.bearer = match select_bearer(session) {
        Some((audience, token)) => {
            log::trace!("{} {} as {}", request.method, request.path, audience);
            Some(token)
        }
        None => {
            log::trace!("{} {} unauthenticated", request.method, request.path);
            None
        }
    };
    request
}
