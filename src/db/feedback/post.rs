use reqwest::RequestBuilder;

use crate::{
    db::client::{SupabaseClient, check_status},
    errors::AppError,
    models::{NewFeedback, feedback::FEEDBACK_TABLE},
};

fn insert_request(client: &SupabaseClient, new: &NewFeedback) -> RequestBuilder {
    client
        .post(&client.rest_url(FEEDBACK_TABLE))
        .header("Prefer", "return=minimal")
        .json(&[new])
}

pub async fn insert_feedback(client: &SupabaseClient, new: &NewFeedback) -> Result<(), AppError> {
    let res = insert_request(client, new).send().await?;
    check_status(res).await?;

    tracing::info!("Inserted feedback with rating {}", new.rating.value());
    Ok(())
}
