use crate::{auth::CurrentSession, http::views::LandingTemplate};

pub async fn landing_handler(CurrentSession(session): CurrentSession) -> LandingTemplate {
    LandingTemplate::new(session.is_some())
}
