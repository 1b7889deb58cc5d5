use askama::Template;
use askama_web::WebTemplate;

use crate::{http::views::Toast, models::AuthMode};

#[derive(Template, WebTemplate)]
#[template(path = "auth.html")]
pub struct AuthTemplate {
    pub title: &'static str,
    pub submit: &'static str,
    pub mode_value: &'static str,
    pub signing_up: bool,
    pub email: String,
    pub toast: Option<Toast>,
}

impl AuthTemplate {
    pub fn new(mode: &AuthMode, email: &str, toast: Option<Toast>) -> Self {
        let (title, submit, mode_value, signing_up) = match mode {
            AuthMode::SignIn => ("Sign In", "Sign In", "signin", false),
            AuthMode::SignUp => ("Create Account", "Sign Up", "signup", true),
        };

        Self {
            title,
            submit,
            mode_value,
            signing_up,
            email: email.to_string(),
            toast,
        }
    }

    pub fn confirm_email(email: &str) -> Self {
        let toast = Toast::success(
            "Check your email to confirm your account",
            format!("We sent a confirmation link to {email}."),
        );
        Self::new(&AuthMode::SignIn, email, Some(toast))
    }
}
