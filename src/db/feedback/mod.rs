pub mod get;
pub mod post;

use async_trait::async_trait;

use crate::{
    db::{FeedbackStore, client::SupabaseClient},
    errors::AppError,
    models::{FeedbackEntry, NewFeedback},
};

pub use get::list_feedback_desc;
pub use post::insert_feedback;

#[async_trait]
impl FeedbackStore for SupabaseClient {
    async fn insert_feedback(&self, new: NewFeedback) -> Result<(), AppError> {
        insert_feedback(self, &new).await
    }

    async fn list_feedback_desc(&self, access_token: &str) -> Result<Vec<FeedbackEntry>, AppError> {
        list_feedback_desc(self, access_token).await
    }
}
