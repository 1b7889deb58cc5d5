#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, header},
};
use chrono::{DateTime, Duration, Utc};
use feedback_collector::{
    auth::SessionVerifier,
    create_app,
    db::{AuthProvider, FeedbackStore},
    errors::AppError,
    models::{AuthSession, Claims, FeedbackEntry, NewFeedback, Rating},
    state::AppState,
};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

pub const JWT_SECRET: &str = "integration-test-secret";
pub const USER_ID: &str = "1d5f0a34-5a1f-4a57-8a3b-8d7b6a2f0c11";

/// Records every call and answers from canned data.
#[derive(Default)]
pub struct FakeStore {
    pub rows: Mutex<Vec<FeedbackEntry>>,
    pub inserts: Mutex<Vec<NewFeedback>>,
    pub list_calls: Mutex<usize>,
    pub list_tokens: Mutex<Vec<String>>,
    pub fail_with: Option<String>,
}

impl FakeStore {
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn with_rows(rows: Vec<FeedbackEntry>) -> Self {
        Self {
            rows: Mutex::new(rows),
            ..Default::default()
        }
    }

    pub fn inserts(&self) -> Vec<NewFeedback> {
        self.inserts.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> usize {
        *self.list_calls.lock().unwrap()
    }

    /// Access tokens the listing was requested with, in call order.
    pub fn list_tokens(&self) -> Vec<String> {
        self.list_tokens.lock().unwrap().clone()
    }
}

#[async_trait]
impl FeedbackStore for FakeStore {
    async fn insert_feedback(&self, new: NewFeedback) -> Result<(), AppError> {
        self.inserts.lock().unwrap().push(new.clone());
        if let Some(message) = &self.fail_with {
            return Err(AppError::Remote(message.clone()));
        }

        self.rows.lock().unwrap().push(FeedbackEntry {
            id: Uuid::new_v4(),
            name: new.name,
            rating: new.rating,
            comment: new.comment,
            created_at: Utc::now(),
        });
        Ok(())
    }

    async fn list_feedback_desc(&self, access_token: &str) -> Result<Vec<FeedbackEntry>, AppError> {
        *self.list_calls.lock().unwrap() += 1;
        self.list_tokens
            .lock()
            .unwrap()
            .push(access_token.to_string());
        if let Some(message) = &self.fail_with {
            return Err(AppError::Remote(message.clone()));
        }

        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }
}

#[derive(Default)]
pub struct FakeAuth {
    pub sign_outs: Mutex<Vec<String>>,
    pub require_confirmation: bool,
    pub fail_sign_out: bool,
}

#[async_trait]
impl AuthProvider for FakeAuth {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AppError> {
        if password != "correct-horse" {
            return Err(AppError::Unauthorized("Invalid login credentials".into()));
        }
        Ok(AuthSession {
            access_token: token_for(email),
            email: Some(email.to_string()),
        })
    }

    async fn sign_up(&self, email: &str, _password: &str) -> Result<Option<AuthSession>, AppError> {
        if self.require_confirmation {
            return Ok(None);
        }
        Ok(Some(AuthSession {
            access_token: token_for(email),
            email: Some(email.to_string()),
        }))
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AppError> {
        self.sign_outs.lock().unwrap().push(access_token.to_string());
        if self.fail_sign_out {
            return Err(AppError::Remote("Auth service unavailable".into()));
        }
        Ok(())
    }
}

pub fn token_with_expiry(email: &str, expires_in: Duration, secret: &str) -> String {
    let claims = Claims {
        sub: USER_ID.into(),
        email: Some(email.into()),
        aud: "authenticated".into(),
        exp: (Utc::now() + expires_in).timestamp() as usize,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

pub fn token_for(email: &str) -> String {
    token_with_expiry(email, Duration::hours(1), JWT_SECRET)
}

pub fn app(store: Arc<FakeStore>, auth: Arc<FakeAuth>) -> Router {
    create_app(AppState {
        feedback: store,
        auth,
        sessions: SessionVerifier::new(JWT_SECRET),
        cookie_secure: false,
    })
}

pub fn entry(name: Option<&str>, rating: u8, comment: &str, created_at: DateTime<Utc>) -> FeedbackEntry {
    FeedbackEntry {
        id: Uuid::new_v4(),
        name: name.map(str::to_string),
        rating: Rating::new(rating).unwrap(),
        comment: comment.to_string(),
        created_at,
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn get_with_session(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::COOKIE, format!("sb-access-token={token}"))
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
