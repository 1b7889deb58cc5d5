pub mod feedback;
pub mod user;

pub use feedback::{FeedbackEntry, FeedbackForm, NewFeedback, Rating, RatingTier};
pub use user::{AuthForm, AuthMode, AuthSession, Claims, Session};
