use std::{convert::Infallible, sync::Arc};

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    TypedHeader,
    extract::cookie::{Cookie, CookieJar, SameSite},
};
use headers::{Authorization, authorization::Bearer};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::{AuthSession, Claims, Session},
    state::AppState,
};

pub const SESSION_COOKIE: &str = "sb-access-token";
const AUDIENCE: &str = "authenticated";

/// Verifies access tokens issued by the auth provider.
#[derive(Clone)]
pub struct SessionVerifier {
    key: Arc<DecodingKey>,
    validation: Arc<Validation>,
}

impl SessionVerifier {
    pub fn new(jwt_secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[AUDIENCE]);

        Self {
            key: Arc::new(DecodingKey::from_secret(jwt_secret.as_bytes())),
            validation: Arc::new(validation),
        }
    }

    pub fn verify(&self, token: &str) -> Result<Session, AppError> {
        let token_data = decode::<Claims>(token, &self.key, &self.validation)
            .map_err(|e| AppError::Unauthorized(format!("Invalid or expired token: {e}")))?;

        let user_id = Uuid::parse_str(&token_data.claims.sub)
            .map_err(|_| AppError::Unauthorized("Invalid user ID in token".into()))?;

        Ok(Session {
            user_id,
            email: token_data.claims.email,
            access_token: token.to_string(),
        })
    }
}

/// The signed-in user, if any. Never rejects: a missing, expired or forged
/// token resolves to `None`.
pub struct CurrentSession(pub Option<Session>);

impl<S> FromRequestParts<S> for CurrentSession
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);

        let jar = CookieJar::from_headers(&parts.headers);
        let cookie = jar.get(SESSION_COOKIE).map(|c| c.value().to_string());
        let bearer = TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, &state)
            .await
            .ok()
            .map(|TypedHeader(Authorization(bearer))| bearer.token().to_string());

        // First candidate that verifies wins: cookie, then bearer header.
        let session = cookie
            .into_iter()
            .chain(bearer)
            .find_map(|token| match state.sessions.verify(&token) {
                Ok(session) => Some(session),
                Err(e) => {
                    tracing::debug!("Ignoring session token: {}", e);
                    None
                }
            });

        Ok(CurrentSession(session))
    }
}

/// Browser-session cookie; token expiry is enforced by `SessionVerifier`.
pub fn session_cookie(session: &AuthSession, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, session.access_token.clone()))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .build()
}

pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE).path("/").build()
}
