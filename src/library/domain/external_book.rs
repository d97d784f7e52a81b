use serde::{Deserialize, Deserializer, Serialize};

/// Source marker for an external lookup that resolved to the local catalog
pub const LOCAL_SOURCE: &str = "local";

/// ExternalBook - a search hit or detail record from the external archive
///
/// Every field except the title is optional; the archive's metadata is
/// scraped and frequently incomplete. Detail lookups for items that were
/// already imported come back in catalog shape (`author`, `image`,
/// `biography`, `md5`), sometimes next to the archive names. Both spellings
/// are kept; `DisplayDefaults` picks the one to show.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalBook {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default)]
    pub hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md5: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ExternalBook {
    pub fn new(title: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            hash: hash.into(),
            ..Default::default()
        }
    }

    /// Archive hash under either of its wire names
    pub fn archive_hash(&self) -> &str {
        if !self.hash.is_empty() {
            return &self.hash;
        }
        self.md5.as_deref().unwrap_or("")
    }
}

/// Response of `GET /books/external-search`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ExternalSearchPayload {
    #[serde(default)]
    pub books: Vec<ExternalBook>,
    #[serde(default)]
    pub source: Option<String>,
}

/// Response of `GET /books/external/{md5}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ExternalBookDetails {
    #[serde(default)]
    pub book: Option<ExternalBook>,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub local_id: Option<String>,
}

impl ExternalBookDetails {
    /// The local catalog id when the archive item was already imported
    pub fn local_redirect(&self) -> Option<&str> {
        if self.source != LOCAL_SOURCE {
            return None;
        }
        self.local_id.as_deref().filter(|id| !id.is_empty())
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
