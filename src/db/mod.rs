pub mod client;
pub mod feedback;
pub mod user;

use async_trait::async_trait;

use crate::{
    errors::AppError,
    models::{AuthSession, FeedbackEntry, NewFeedback},
};

pub use client::SupabaseClient;

/// Write and read access to the remote `feedback` collection.
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    async fn insert_feedback(&self, new: NewFeedback) -> Result<(), AppError>;

    /// All entries, newest `created_at` first, read as the signed-in user.
    async fn list_feedback_desc(&self, access_token: &str) -> Result<Vec<FeedbackEntry>, AppError>;
}

#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AppError>;

    async fn sign_up(&self, email: &str, password: &str) -> Result<Option<AuthSession>, AppError>;

    async fn sign_out(&self, access_token: &str) -> Result<(), AppError>;
}
