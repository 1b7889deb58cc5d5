use askama::Template;
use axum::{
    body::Body,
    extract::State,
    http::header,
    response::{IntoResponse, Redirect, Response},
};
use futures::{StreamExt, stream};

use crate::{
    auth::CurrentSession,
    http::views::{DashboardBodyTemplate, DashboardHeadTemplate},
    state::AppState,
};

/// Streams the page in two chunks: the header with a loading indicator, then
/// the listing once the store answers.
pub async fn dashboard_handler(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> Response {
    let Some(session) = session else {
        tracing::debug!("No session, redirecting dashboard request to sign-in");
        return Redirect::to("/auth").into_response();
    };

    let head = DashboardHeadTemplate {
        email: session.email.clone(),
    };
    let store = state.feedback.clone();

    // The read runs as the signed-in user so row-level policies apply.
    let listing = async move {
        let result = store.list_feedback_desc(&session.access_token).await;
        match &result {
            Ok(entries) => tracing::info!(
                "Listed {} feedback entries for user {}",
                entries.len(),
                session.user_id
            ),
            Err(e) => tracing::error!("Error fetching feedback: {}", e),
        }
        DashboardBodyTemplate::from_result(&result).render()
    };

    let body = stream::once(async move { head.render() }).chain(stream::once(listing));

    (
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8"),
            (header::CACHE_CONTROL, "no-store"),
        ],
        Body::from_stream(body),
    )
        .into_response()
}
