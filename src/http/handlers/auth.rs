use axum::{
    Form,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::{
    auth::{CurrentSession, removal_cookie, session_cookie},
    errors::AppError,
    http::views::{AuthTemplate, Toast},
    models::{AuthForm, AuthMode, AuthSession},
    state::AppState,
};

#[derive(Debug, Default, Deserialize)]
pub struct AuthQuery {
    #[serde(default)]
    pub mode: AuthMode,
}

pub async fn auth_page_handler(
    CurrentSession(session): CurrentSession,
    Query(query): Query<AuthQuery>,
) -> Response {
    if session.is_some() {
        return Redirect::to("/dashboard").into_response();
    }

    AuthTemplate::new(&query.mode, "", None).into_response()
}

pub async fn auth_submit_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<AuthForm>,
) -> Response {
    let email = form.email.trim();

    if email.is_empty() || form.password.is_empty() {
        let err = AppError::Validation("Email and password are required.".into());
        return auth_error(&form.mode, email, "Please fill in required fields", &err);
    }

    match form.mode {
        AuthMode::SignIn => match state.auth.sign_in(email, &form.password).await {
            Ok(session) => signed_in(jar, &session, state.cookie_secure),
            Err(err) => {
                tracing::warn!("Sign-in failed for {}: {}", email, err);
                auth_error(&form.mode, email, "Error signing in", &err)
            }
        },
        AuthMode::SignUp => match state.auth.sign_up(email, &form.password).await {
            Ok(Some(session)) => signed_in(jar, &session, state.cookie_secure),
            Ok(None) => {
                tracing::info!("Account created for {}, awaiting email confirmation", email);
                AuthTemplate::confirm_email(email).into_response()
            }
            Err(err) => {
                tracing::warn!("Sign-up failed for {}: {}", email, err);
                auth_error(&form.mode, email, "Error signing up", &err)
            }
        },
    }
}

pub async fn sign_out_handler(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    jar: CookieJar,
) -> Response {
    if let Some(session) = session {
        if let Err(e) = state.auth.sign_out(&session.access_token).await {
            tracing::warn!("Sign-out call failed for user {}: {}", session.user_id, e);
        }
    }

    (jar.remove(removal_cookie()), Redirect::to("/")).into_response()
}

fn signed_in(jar: CookieJar, session: &AuthSession, secure: bool) -> Response {
    tracing::info!(
        "Signed in {}",
        session.email.as_deref().unwrap_or("user without email")
    );
    (
        jar.add(session_cookie(session, secure)),
        Redirect::to("/dashboard"),
    )
        .into_response()
}

fn auth_error(mode: &AuthMode, email: &str, title: &str, err: &AppError) -> Response {
    let (status, message): (StatusCode, String) = err.to_response();
    let toast = Toast::error(title, message);
    (status, AuthTemplate::new(mode, email, Some(toast))).into_response()
}
