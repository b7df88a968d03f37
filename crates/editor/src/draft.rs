//! Post draft owned by the write/edit form.
//!
//! The draft owns the controlled content value: it stores every
//! [`ContentChanged`] payload and produces the API-facing request bodies on
//! submission. The post API itself is an external collaborator; the only
//! contract here is "sanitized HTML string in, request payload out".

use serde::Serialize;
use thiserror::Error;

use crate::controller::ContentChanged;

/// Draft validation errors shown on the form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("title is required")]
    MissingTitle,
    #[error("content is required")]
    EmptyContent,
}

/// Working state of the write/edit form.
///
/// `content` is deliberately private: it is only ever replaced wholesale
/// from an editor notification, never mutated in place.
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub title: String,
    content: String,
    pub excerpt: String,
    pub cover_image: String,
    /// Comma-separated, matching the form field.
    pub tags: String,
}

impl PostDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current controlled content value.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Store an editor notification as the new controlled value.
    pub fn apply(&mut self, change: ContentChanged) {
        self.content = change.html;
    }

    /// Validate and produce the create-post request body.
    pub fn submit(&self) -> Result<CreatePost, DraftError> {
        self.validate()?;
        Ok(CreatePost {
            title: self.title.trim().to_string(),
            content: self.content.clone(),
            excerpt: none_if_empty(&self.excerpt),
            cover_image: none_if_empty(&self.cover_image),
            tags: parse_tags(&self.tags),
        })
    }

    /// Validate and produce the update-post request body for the edit form.
    pub fn changes(&self) -> Result<UpdatePost, DraftError> {
        self.validate()?;
        Ok(UpdatePost {
            title: Some(self.title.trim().to_string()),
            content: Some(self.content.clone()),
            excerpt: none_if_empty(&self.excerpt),
            cover_image: none_if_empty(&self.cover_image),
            tags: parse_tags(&self.tags),
        })
    }

    fn validate(&self) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::MissingTitle);
        }
        if self.content.trim().is_empty() {
            return Err(DraftError::EmptyContent);
        }
        Ok(())
    }
}

/// `POST /posts` request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePost {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// `PUT /posts/{id}` request body; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePost {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

fn none_if_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_tags(value: &str) -> Option<Vec<String>> {
    let tags: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect();
    (!tags.is_empty()).then_some(tags)
}
