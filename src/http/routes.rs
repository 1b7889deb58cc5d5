use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    http::handlers::{
        auth_page_handler, auth_submit_handler, dashboard_handler, feedback_form_handler,
        landing_handler, sign_out_handler, submit_feedback_handler,
    },
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(landing_handler))
        .route(
            "/feedback",
            get(feedback_form_handler).post(submit_feedback_handler),
        )
        .route("/dashboard", get(dashboard_handler))
        .route("/auth", get(auth_page_handler).post(auth_submit_handler))
        .route("/signout", post(sign_out_handler))
        .with_state(state)
}
