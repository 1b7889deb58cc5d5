use reqwest::RequestBuilder;

use crate::{
    db::client::{SupabaseClient, check_status},
    errors::AppError,
    models::{FeedbackEntry, feedback::FEEDBACK_TABLE},
};

fn list_request(client: &SupabaseClient, access_token: &str) -> RequestBuilder {
    client
        .get_as(&client.rest_url(FEEDBACK_TABLE), access_token)
        .query(&[("select", "*"), ("order", "created_at.desc")])
}

pub async fn list_feedback_desc(
    client: &SupabaseClient,
    access_token: &str,
) -> Result<Vec<FeedbackEntry>, AppError> {
    let res = list_request(client, access_token).send().await?;

    let entries: Vec<FeedbackEntry> = check_status(res)
        .await?
        .json()
        .await
        .map_err(|e| AppError::Deserialization(format!("Invalid feedback rows: {}", e)))?;

    tracing::debug!("Fetched {} feedback entries", entries.len());
    Ok(entries)
}
