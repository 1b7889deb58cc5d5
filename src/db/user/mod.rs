pub mod post;

use async_trait::async_trait;

use crate::{
    db::{AuthProvider, client::SupabaseClient},
    errors::AppError,
    models::AuthSession,
};

pub use post::{sign_in, sign_out, sign_up};

#[async_trait]
impl AuthProvider for SupabaseClient {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AppError> {
        sign_in(self, email, password).await
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<Option<AuthSession>, AppError> {
        sign_up(self, email, password).await
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AppError> {
        sign_out(self, access_token).await
    }
}
