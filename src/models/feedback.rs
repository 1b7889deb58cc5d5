use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

pub const FEEDBACK_TABLE: &str = "feedback";

/// A star rating, always within `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn tier(self) -> RatingTier {
        match self.0 {
            4.. => RatingTier::High,
            3 => RatingTier::Medium,
            _ => RatingTier::Low,
        }
    }

    pub fn all() -> impl Iterator<Item = Rating> {
        (Self::MIN..=Self::MAX).map(Rating)
    }

    /// Parses the token posted by one of the five rating radio buttons.
    pub fn parse_token(token: &str) -> Option<Self> {
        token.trim().parse::<u8>().ok().and_then(Self::new)
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Rating::new(value)
            .ok_or_else(|| serde::de::Error::custom(format!("rating out of range: {value}")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingTier {
    High,
    Medium,
    Low,
}

impl RatingTier {
    pub fn css_class(self) -> &'static str {
        match self {
            RatingTier::High => "badge-green",
            RatingTier::Medium => "badge-amber",
            RatingTier::Low => "badge-red",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub id: Uuid,
    #[serde(default, deserialize_with = "deserialize_name")]
    pub name: Option<String>,
    pub rating: Rating,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl FeedbackEntry {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Anonymous")
    }
}

fn deserialize_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let name: Option<String> = Option::deserialize(deserializer)?;
    Ok(normalize_name(name.as_deref().unwrap_or_default()))
}

fn normalize_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Insert payload for the `feedback` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewFeedback {
    pub name: Option<String>,
    pub rating: Rating,
    pub comment: String,
}

/// Raw form fields as posted by the browser.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedbackForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub comment: String,
}

impl FeedbackForm {
    pub fn validate(&self) -> Result<NewFeedback, AppError> {
        let rating = Rating::parse_token(&self.rating);
        let comment = self.comment.trim();

        match rating {
            Some(rating) if !comment.is_empty() => Ok(NewFeedback {
                name: normalize_name(&self.name),
                rating,
                comment: comment.to_string(),
            }),
            _ => Err(AppError::Validation(
                "Rating and comment are required.".into(),
            )),
        }
    }
}
