use askama::Template;
use askama_web::WebTemplate;

use crate::http::views::Toast;

const FEATURES: [(&str, &str); 3] = [
    (
        "Easy Feedback Collection",
        "Simple form for customers to share their thoughts and experiences",
    ),
    (
        "Rating System",
        "5-star rating system to quickly gauge customer satisfaction",
    ),
    (
        "Dashboard Analytics",
        "View and analyze all feedback in a comprehensive dashboard",
    ),
];

/// `GET /`. Navigation depends on whether a session is present.
#[derive(Template, WebTemplate)]
#[template(path = "landing.html")]
pub struct LandingTemplate {
    pub signed_in: bool,
    pub features: [(&'static str, &'static str); 3],
    pub toast: Option<Toast>,
}

impl LandingTemplate {
    pub fn new(signed_in: bool) -> Self {
        Self {
            signed_in,
            features: FEATURES,
            toast: None,
        }
    }
}
