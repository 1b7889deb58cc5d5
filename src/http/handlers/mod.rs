pub mod auth;
pub mod dashboard;
pub mod feedback;
pub mod landing;

pub use auth::{auth_page_handler, auth_submit_handler, sign_out_handler};
pub use dashboard::dashboard_handler;
pub use feedback::{feedback_form_handler, submit_feedback_handler};
pub use landing::landing_handler;
