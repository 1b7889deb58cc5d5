use askama::Template;
use askama_web::WebTemplate;

use crate::{
    http::views::Toast,
    models::{FeedbackForm, Rating},
};

pub struct StarOption {
    pub value: u8,
    pub checked: bool,
}

#[derive(Template, WebTemplate)]
#[template(path = "feedback_form.html")]
pub struct FeedbackFormTemplate {
    pub name: String,
    pub comment: String,
    pub stars: Vec<StarOption>,
    pub toast: Option<Toast>,
}

impl FeedbackFormTemplate {
    pub fn empty() -> Self {
        Self::from_form(&FeedbackForm::default(), None)
    }

    /// Re-renders the user's input, e.g. after a rejected submit.
    pub fn from_form(form: &FeedbackForm, toast: Option<Toast>) -> Self {
        let selected = Rating::parse_token(&form.rating);

        Self {
            name: form.name.clone(),
            comment: form.comment.clone(),
            stars: Rating::all()
                .map(|rating| StarOption {
                    value: rating.value(),
                    checked: selected == Some(rating),
                })
                .collect(),
            toast,
        }
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "feedback_confirmation.html")]
pub struct ConfirmationTemplate {
    pub toast: Option<Toast>,
}

impl ConfirmationTemplate {
    pub fn new() -> Self {
        Self {
            toast: Some(Toast::success(
                "Thank you for your feedback!",
                "Your feedback has been submitted successfully.",
            )),
        }
    }
}

impl Default for ConfirmationTemplate {
    fn default() -> Self {
        Self::new()
    }
}
