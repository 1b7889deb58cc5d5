use askama::Template;
use chrono::{DateTime, Utc};

use crate::{errors::AppError, http::views::Toast, models::FeedbackEntry};

/// en-US style, e.g. `Jan 5, 2025, 03:04 PM`.
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y, %I:%M %p").to_string()
}

pub struct FeedbackCard {
    pub name: String,
    pub badge: &'static str,
    pub rating: u8,
    pub created: String,
    pub comment: String,
}

impl From<&FeedbackEntry> for FeedbackCard {
    fn from(entry: &FeedbackEntry) -> Self {
        Self {
            name: entry.display_name().to_string(),
            badge: entry.rating.tier().css_class(),
            rating: entry.rating.value(),
            created: format_timestamp(&entry.created_at),
            comment: entry.comment.clone(),
        }
    }
}

/// Everything up to and including the loading indicator. Sent before the
/// listing query resolves.
#[derive(Template)]
#[template(path = "dashboard_head.html")]
pub struct DashboardHeadTemplate {
    pub email: Option<String>,
}

/// Hides the loading indicator and renders the outcome of the listing query.
#[derive(Template)]
#[template(path = "dashboard_body.html")]
pub struct DashboardBodyTemplate {
    pub cards: Vec<FeedbackCard>,
    pub toast: Option<Toast>,
}

impl DashboardBodyTemplate {
    /// A failed query renders an empty list.
    pub fn from_result(result: &Result<Vec<FeedbackEntry>, AppError>) -> Self {
        match result {
            Ok(entries) => Self {
                cards: entries.iter().map(FeedbackCard::from).collect(),
                toast: None,
            },
            Err(e) => Self {
                cards: Vec::new(),
                toast: Some(Toast::error("Error fetching feedback", e.user_message())),
            },
        }
    }
}
