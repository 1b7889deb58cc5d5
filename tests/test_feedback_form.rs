mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{FakeAuth, FakeStore, app, body_text, get, get_with_session, post_form, token_for};
use feedback_collector::models::Rating;
use tower::ServiceExt;

#[tokio::test]
async fn test_valid_submission_inserts_once_and_confirms() {
    let store = Arc::new(FakeStore::default());
    let app = app(store.clone(), Arc::new(FakeAuth::default()));

    let response = app
        .oneshot(post_form(
            "/feedback",
            "name=Alice&rating=5&comment=Great%21",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Thank You!"));
    assert!(html.contains("Submit Another Feedback"));

    let inserts = store.inserts();
    assert_eq!(inserts.len(), 1);
    assert_eq!(inserts[0].name.as_deref(), Some("Alice"));
    assert_eq!(inserts[0].rating, Rating::new(5).unwrap());
    assert_eq!(inserts[0].comment, "Great!");
}

#[tokio::test]
async fn test_missing_rating_never_writes() {
    let store = Arc::new(FakeStore::default());
    let app = app(store.clone(), Arc::new(FakeAuth::default()));

    let response = app
        .oneshot(post_form("/feedback", "name=Bob&rating=&comment=Fine"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_text(response).await;
    assert!(html.contains("Please fill in required fields"));
    assert!(html.contains("Rating and comment are required."));
    // input is kept for the retry
    assert!(html.contains(r#"value="Bob""#));
    assert!(html.contains(">Fine</textarea>"));
    assert!(store.inserts().is_empty());
}

#[tokio::test]
async fn test_blank_comment_never_writes() {
    let store = Arc::new(FakeStore::default());

    for body in [
        "rating=4&comment=",
        "rating=4&comment=%20%20%0A%09",
        "rating=4",
        "rating=9&comment=hello",
    ] {
        let response = app(store.clone(), Arc::new(FakeAuth::default()))
            .oneshot(post_form("/feedback", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "{body}");
        assert!(body_text(response).await.contains("Please fill in required fields"));
    }

    assert!(store.inserts().is_empty());
}

#[tokio::test]
async fn test_remote_failure_keeps_form_state() {
    let store = Arc::new(FakeStore::failing("new row violates row-level security policy"));
    let app = app(store.clone(), Arc::new(FakeAuth::default()));

    let response = app
        .oneshot(post_form("/feedback", "name=Carol&rating=2&comment=Too+slow"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let html = body_text(response).await;
    assert!(html.contains("Error submitting feedback"));
    assert!(html.contains("new row violates row-level security policy"));
    assert!(html.contains(r#"value="Carol""#));
    assert!(html.contains(r#"value="2" checked"#));
    assert!(html.contains(">Too slow</textarea>"));
    assert!(!html.contains("Thank You!"));
    assert_eq!(store.inserts().len(), 1);
}

#[tokio::test]
async fn test_empty_name_is_stored_null_and_shown_anonymous() {
    let store = Arc::new(FakeStore::default());
    let auth = Arc::new(FakeAuth::default());

    let response = app(store.clone(), auth.clone())
        .oneshot(post_form("/feedback", "name=%20&rating=3&comment=Okay"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(store.inserts()[0].name, None);

    let response = app(store.clone(), auth)
        .oneshot(get_with_session("/dashboard", &token_for("owner@example.com")))
        .await
        .unwrap();
    let html = body_text(response).await;
    assert!(html.contains("<h3>Anonymous</h3>"));
}

#[tokio::test]
async fn test_submit_another_returns_empty_form() {
    let store = Arc::new(FakeStore::default());

    let response = app(store.clone(), Arc::new(FakeAuth::default()))
        .oneshot(post_form("/feedback", "name=Dana&rating=4&comment=Nice"))
        .await
        .unwrap();
    let html = body_text(response).await;
    assert!(html.contains(r#"<a class="btn btn-block" href="/feedback">Submit Another Feedback</a>"#));

    let response = app(store, Arc::new(FakeAuth::default()))
        .oneshot(get("/feedback"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Feedback Form"));
    assert!(!html.contains("Dana"));
    assert!(!html.contains(" checked"));
    assert!(html.contains("></textarea>"));
}
