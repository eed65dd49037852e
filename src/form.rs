//! JSON form binding and validation for resource payloads. Every resource
//! accepts the same two fields; messages name the resource so clients see
//! e.g. "Please enter the product title".

use crate::error::AppError;
use crate::resource::Resource;
use serde::Deserialize;
use serde_json::Value;

pub const TITLE_MIN: usize = 3;
pub const TITLE_MAX: usize = 100;
pub const CONTENT_MIN: usize = 3;
pub const CONTENT_MAX: usize = 1000;

/// Create/update payload shared by all five resources. Missing fields
/// deserialize as empty strings so the required check owns the message.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl ResourceForm {
    /// Bind a JSON body. Anything that does not deserialize into the form
    /// (e.g. a numeric title, or a non-object body) is an invalid request.
    pub fn from_body(body: Value) -> Result<Self, AppError> {
        serde_json::from_value(body)
            .map_err(|_| AppError::NotAcceptable("Invalid request".into()))
    }

    /// Field-specific validation; the first failing field decides the
    /// message. Lengths count characters, not bytes.
    pub fn validate(&self, resource: &Resource) -> Result<(), AppError> {
        if self.title.is_empty() {
            return Err(AppError::NotAcceptable(format!(
                "Please enter the {} title",
                resource.label_lower()
            )));
        }
        let title_len = self.title.chars().count();
        if !(TITLE_MIN..=TITLE_MAX).contains(&title_len) {
            return Err(AppError::NotAcceptable(format!(
                "Title should be between {} to {} characters",
                TITLE_MIN, TITLE_MAX
            )));
        }
        if self.content.is_empty() {
            return Err(AppError::NotAcceptable(format!(
                "Please enter the {} content",
                resource.label_lower()
            )));
        }
        let content_len = self.content.chars().count();
        if !(CONTENT_MIN..=CONTENT_MAX).contains(&content_len) {
            return Err(AppError::NotAcceptable(format!(
                "Content should be between {} to {} characters",
                CONTENT_MIN, CONTENT_MAX
            )));
        }
        Ok(())
    }
}
