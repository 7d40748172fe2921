// src/models/review.rs
use serde::{Deserialize, Serialize};

pub const SATISFACTION_MIN: u8 = 1;
pub const SATISFACTION_MAX: u8 = 5;
pub const SATISFACTION_DEFAULT: u8 = 3;

// Column names of the persisted file, in header order.
pub const COLUMN_NAME: &str = "Name";
pub const COLUMN_PRODUCT: &str = "Product";
pub const COLUMN_SATISFACTION: &str = "Satisfaction";
pub const COLUMN_FEEDBACK: &str = "Feedback";
pub const COLUMNS: [&str; 4] = [COLUMN_NAME, COLUMN_PRODUCT, COLUMN_SATISFACTION, COLUMN_FEEDBACK];

pub const UNKNOWN_PRODUCT: &str = "Unknown Product";
pub const NO_SATISFACTION: &str = "N/A";
pub const NO_FEEDBACK: &str = "No feedback provided.";

/// A single customer review.
///
/// Every field is optional: `None` marks a value the backing file never had
/// (a column added after the row was written, or a short row), while
/// `Some(String::new())` is a value the customer left blank.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Review {
    pub name: Option<String>,
    pub product: Option<String>,
    pub satisfaction: Option<u8>,
    pub feedback: Option<String>,
}

impl Review {
    pub fn new(
        name: impl Into<String>,
        product: impl Into<String>,
        satisfaction: u8,
        feedback: impl Into<String>,
    ) -> Self {
        Review {
            name: Some(name.into()),
            product: Some(product.into()),
            satisfaction: Some(satisfaction),
            feedback: Some(feedback.into()),
        }
    }

    /// Display strings for this review, with placeholders for missing fields.
    /// The review itself is left untouched.
    pub fn view(&self) -> ReviewView<'_> {
        ReviewView {
            name: self.name.as_deref().unwrap_or_default(),
            product: self.product.as_deref().unwrap_or(UNKNOWN_PRODUCT),
            satisfaction: self
                .satisfaction
                .map(|score| score.to_string())
                .unwrap_or_else(|| NO_SATISFACTION.to_string()),
            feedback: self.feedback.as_deref().unwrap_or(NO_FEEDBACK),
        }
    }
}

/// Render-ready projection of a [`Review`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewView<'a> {
    pub name: &'a str,
    pub product: &'a str,
    pub satisfaction: String,
    pub feedback: &'a str,
}

/// Payload submitted by the review form.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewReview {
    pub name: String,
    pub product: String,
    #[serde(default = "default_satisfaction")]
    pub satisfaction: u8,
    pub feedback: String,
}

fn default_satisfaction() -> u8 {
    SATISFACTION_DEFAULT
}

impl NewReview {
    // The slider cannot leave [1, 5]; clamp anything else that reaches us.
    pub fn into_review(self) -> Review {
        Review::new(
            self.name,
            self.product,
            self.satisfaction.clamp(SATISFACTION_MIN, SATISFACTION_MAX),
            self.feedback,
        )
    }
}
