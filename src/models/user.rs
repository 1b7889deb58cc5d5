use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried by the auth provider's access token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,           // user ID
    pub email: Option<String>, // account email
    pub aud: String,           // "authenticated"
    pub exp: usize,            // expiration time
}

/// A verified, signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: Uuid,
    pub email: Option<String>,
    pub access_token: String,
}

/// Tokens handed back by the auth provider after sign-in.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub access_token: String,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    SignUp,
    /// Also taken for unrecognised values.
    #[default]
    #[serde(other)]
    SignIn,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub mode: AuthMode,
}
