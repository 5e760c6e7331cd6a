use secrecy::SecretString;

use crate::{
    auth::Audience,
    errors::ApiResult,
    http::ApiClient,
    models::{AdminCredentials, AdminLoginResponse, Credentials, LoginResponse},
    session::SessionStore,
};

/// Logs each audience in and out.
///
/// Logging into one audience leaves the other audience's token in place, so a
/// session can hold both at once (and then acts as admin on every call).
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    fn session(&self) -> &SessionStore {
        self.api.session()
    }

    /// `POST /api/login`. On success the student token and the user id are
    /// stored in the session.
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<LoginResponse> {
        let response: LoginResponse = self.api.post_json_as("/api/login", credentials).await?;

        self.session().set_token(
            Audience::Student,
            &SecretString::from(response.token.clone()),
        )?;
        if let Some(uid) = response.uid {
            self.session().set_user_id(&uid.to_string())?;
        }

        log::info!("Student '{}' logged in", credentials.username);
        Ok(response)
    }

    /// `POST /api/admin`. On success the admin token is stored in the session.
    pub async fn admin_login(
        &self,
        credentials: &AdminCredentials,
    ) -> ApiResult<AdminLoginResponse> {
        let response: AdminLoginResponse = self.api.post_json_as("/api/admin", credentials).await?;

        self.session().set_token(
            Audience::Admin,
            &SecretString::from(response.token.clone()),
        )?;

        log::info!("Admin '{}' logged in", credentials.username);
        Ok(response)
    }

    /// Forgets the token of `audience`. A student logout also forgets the
    /// active user id.
    pub fn logout(&self, audience: Audience) -> ApiResult<()> {
        self.session().clear_token(audience)?;
        if audience == Audience::Student {
            self.session().clear_user_id()?;
        }
        log::info!("{} logged out", audience);
        Ok(())
    }

    pub fn logout_all(&self) -> ApiResult<()> {
        self.session().clear()?;
        log::info!("All sessions logged out");
        Ok(())
    }
}
