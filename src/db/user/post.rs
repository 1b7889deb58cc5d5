use serde::Deserialize;
use serde_json::json;

use crate::{
    db::client::{SupabaseClient, check_status},
    errors::AppError,
    models::AuthSession,
};

#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    user: Option<TokenUser>,
    // Sign-up without a session returns the bare user object.
    email: Option<String>,
}

#[derive(Deserialize)]
struct TokenUser {
    email: Option<String>,
}

impl TokenResponse {
    fn into_session(self) -> Option<AuthSession> {
        let access_token = self.access_token?;
        Some(AuthSession {
            access_token,
            email: self.user.and_then(|u| u.email).or(self.email),
        })
    }
}

pub async fn sign_in(
    client: &SupabaseClient,
    email: &str,
    password: &str,
) -> Result<AuthSession, AppError> {
    let url = client.auth_url("token");

    let res = client
        .post(&url)
        .query(&[("grant_type", "password")])
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await?;

    let res = check_status(res).await.map_err(|e| match e {
        AppError::Remote(msg) => AppError::Unauthorized(msg),
        other => other,
    })?;

    let token: TokenResponse = res
        .json()
        .await
        .map_err(|e| AppError::Deserialization(format!("Invalid token response: {}", e)))?;

    token
        .into_session()
        .ok_or_else(|| AppError::Deserialization("Token response without access token".into()))
}

/// Returns `None` when the account still needs email confirmation.
pub async fn sign_up(
    client: &SupabaseClient,
    email: &str,
    password: &str,
) -> Result<Option<AuthSession>, AppError> {
    let url = client.auth_url("signup");

    let res = client
        .post(&url)
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await?;

    let token: TokenResponse = check_status(res)
        .await?
        .json()
        .await
        .map_err(|e| AppError::Deserialization(format!("Invalid sign-up response: {}", e)))?;

    Ok(token.into_session())
}

pub async fn sign_out(client: &SupabaseClient, access_token: &str) -> Result<(), AppError> {
    let url = client.auth_url("logout");

    let res = client.post_as(&url, access_token).send().await?;
    check_status(res).await?;

    Ok(())
}
