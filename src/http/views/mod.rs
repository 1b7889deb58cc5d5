pub mod auth;
pub mod dashboard;
pub mod feedback;
pub mod landing;
pub mod toast;

pub use auth::AuthTemplate;
pub use dashboard::{DashboardBodyTemplate, DashboardHeadTemplate};
pub use feedback::{ConfirmationTemplate, FeedbackFormTemplate};
pub use landing::LandingTemplate;
pub use toast::Toast;
