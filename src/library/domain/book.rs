use crate::shared::error::ShelfError;
use crate::shared::Result;
use serde::{Deserialize, Deserializer, Serialize};

/// Availability of a catalog book's text
///
/// Books imported from the external archive start as `Imported`, move to
/// `Processing` once a download was triggered and end up `Ready`. Books
/// written on the platform carry no status at all, which reads as `Local`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookStatus {
    Imported,
    Processing,
    Ready,
    #[default]
    #[serde(other)]
    Local,
}

/// One chapter of a catalog book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub order: u32,
}

impl Chapter {
    pub fn new(title: impl Into<String>, content: Option<String>, order: u32) -> Self {
        Self {
            title: title.into(),
            content,
            order,
        }
    }
}

/// Book - an entry of the local catalog as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub chapters: Vec<Chapter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<BookStatus>,
}

impl Book {
    pub fn new(id: impl Into<String>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            image: None,
            biography: None,
            chapters: Vec::new(),
            status: None,
        }
    }

    pub fn with_status(mut self, status: BookStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_chapters(mut self, chapters: Vec<Chapter>) -> Self {
        self.chapters = chapters;
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Status with a missing or null field read as `Local`
    pub fn status(&self) -> BookStatus {
        self.status.unwrap_or_default()
    }

    pub fn set_status(&mut self, status: BookStatus) {
        self.status = Some(status);
    }

    pub fn has_chapters(&self) -> bool {
        !self.chapters.is_empty()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// BookDraft - a new book an author is about to publish
///
/// Chapter orders are assigned in insertion order starting at 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookDraft {
    title: String,
    author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    biography: Option<String>,
    chapters: Vec<Chapter>,
}

impl BookDraft {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Result<Self> {
        let title = title.into();
        let author = author.into();
        if title.trim().is_empty() {
            return Err(ShelfError::Validation {
                message: "A book needs a title".to_string(),
            }
            .into());
        }
        if author.trim().is_empty() {
            return Err(ShelfError::Validation {
                message: "A book needs an author".to_string(),
            }
            .into());
        }
        Ok(Self {
            title,
            author,
            image: None,
            biography: None,
            chapters: Vec::new(),
        })
    }

    pub fn with_image(mut self, image: Option<String>) -> Self {
        self.image = image.filter(|s| !s.trim().is_empty());
        self
    }

    pub fn with_biography(mut self, biography: Option<String>) -> Self {
        self.biography = biography.filter(|s| !s.trim().is_empty());
        self
    }

    /// Appends a chapter; both title and content are required.
    pub fn add_chapter(&mut self, title: &str, content: &str) -> Result<()> {
        if title.trim().is_empty() || content.trim().is_empty() {
            return Err(ShelfError::Validation {
                message: format!(
                    "Chapter {} needs both a title and content",
                    self.chapters.len() + 1
                ),
            }
            .into());
        }
        let order = self.chapters.len() as u32 + 1;
        self.chapters
            .push(Chapter::new(title, Some(content.to_string()), order));
        Ok(())
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }
}

/// Partial update of a catalog book; only present fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BookUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,
}

impl BookUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.image.is_none() && self.biography.is_none()
    }
}

/// Receipt of `POST /books/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedBook {
    pub id: String,
    #[serde(default)]
    pub status: String,
}

/// Receipt of `POST /books/import/{md5}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportReceipt {
    pub id: String,
    #[serde(default)]
    pub status: String,
}

/// Receipt of `POST /books/{id}/download`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadReceipt {
    #[serde(default)]
    pub job_id: Option<String>,
    #[serde(default)]
    pub status: String,
}
