use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub token: String,
    #[serde(default)]
    pub fullname: Option<String>,
    #[serde(default)]
    pub uid: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AdminLoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub token: String,
}

/// Answer to a profile edit. `new_token` is set when the username changed,
/// since the old token names the old user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProfileUpdateResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub new_token: Option<String>,
}
