use crate::library::domain::Book;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Author profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,
    #[serde(default)]
    pub book_list: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Partial update of an author profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuthorUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

/// Response of `GET /authors/{id}/books`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AuthorBooks {
    #[serde(default)]
    pub books: Vec<Book>,
    #[serde(default)]
    pub author: String,
}

/// Response of `GET /authors/search`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AuthorSearchPayload {
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub authors: Vec<Author>,
}

/// Reader profile with its three reading lists of book ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reader {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub favorites: Vec<String>,
    #[serde(default)]
    pub in_progress: Vec<String>,
    #[serde(default)]
    pub finished: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl Reader {
    pub fn list(&self, list: ReadingList) -> &[String] {
        match list {
            ReadingList::Favorites => &self.favorites,
            ReadingList::InProgress => &self.in_progress,
            ReadingList::Finished => &self.finished,
        }
    }
}

/// The reading lists a reader can file a book under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingList {
    Favorites,
    InProgress,
    Finished,
}

impl ReadingList {
    pub const ALL: [ReadingList; 3] = [
        ReadingList::Favorites,
        ReadingList::InProgress,
        ReadingList::Finished,
    ];

    /// Wire name used in the `list_name` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingList::Favorites => "favorites",
            ReadingList::InProgress => "in_progress",
            ReadingList::Finished => "finished",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReadingList::Favorites => "Favorites",
            ReadingList::InProgress => "Currently Reading",
            ReadingList::Finished => "Finished",
        }
    }
}

impl fmt::Display for ReadingList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReadingList {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "favorites" | "favourites" => Ok(ReadingList::Favorites),
            "in_progress" | "reading" => Ok(ReadingList::InProgress),
            "finished" | "done" => Ok(ReadingList::Finished),
            _ => Err(format!(
                "Invalid list: {}. Please specify 'favorites', 'in_progress' or 'finished'",
                s
            )),
        }
    }
}

/// Account registration form for `POST /auth/register`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub roles: Vec<String>,
}

impl Registration {
    /// Every account is a reader; authors additionally get the author role.
    pub fn new(username: &str, email: &str, password: &str, as_author: bool) -> Self {
        let mut roles = vec!["reader".to_string()];
        if as_author {
            roles.push(super::credential::AUTHOR_ROLE.to_string());
        }
        Self {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            roles,
        }
    }
}

/// Response of `POST /auth/login`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
}
