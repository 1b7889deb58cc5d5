use std::sync::Arc;

use crate::{
    auth::SessionVerifier,
    db::{AuthProvider, FeedbackStore},
};

#[derive(Clone)]
pub struct AppState {
    pub feedback: Arc<dyn FeedbackStore>,
    pub auth: Arc<dyn AuthProvider>,
    pub sessions: SessionVerifier,
    pub cookie_secure: bool,
}
