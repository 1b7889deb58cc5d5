use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    http::views::{ConfirmationTemplate, FeedbackFormTemplate, Toast},
    models::FeedbackForm,
    state::AppState,
};

pub async fn feedback_form_handler() -> FeedbackFormTemplate {
    FeedbackFormTemplate::empty()
}

pub async fn submit_feedback_handler(
    State(state): State<AppState>,
    Form(form): Form<FeedbackForm>,
) -> Response {
    let new = match form.validate() {
        Ok(new) => new,
        Err(err) => {
            tracing::warn!("Rejected feedback submission: {}", err);
            let toast = Toast::error("Please fill in required fields", err.user_message());
            let (status, _) = err.to_response();
            return (status, FeedbackFormTemplate::from_form(&form, Some(toast))).into_response();
        }
    };

    match state.feedback.insert_feedback(new).await {
        Ok(()) => ConfirmationTemplate::new().into_response(),
        Err(err) => {
            tracing::error!("Error submitting feedback: {}", err);
            let (status, message) = err.to_response();
            let message = if message.is_empty() {
                "Something went wrong. Please try again.".to_string()
            } else {
                message
            };
            let toast = Toast::error("Error submitting feedback", message);
            (status, FeedbackFormTemplate::from_form(&form, Some(toast))).into_response()
        }
    }
}
