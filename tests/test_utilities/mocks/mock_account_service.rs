use async_trait::async_trait;
use shelfwise::library::domain::{AccessToken, AuthorBooks, AuthorUpdate, Registration};
use shelfwise::prelude::*;
use shelfwise::shared::error::ShelfError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock for the account side of the API: auth, readers and authors
#[derive(Default, Clone)]
pub struct MockAccountService {
    pub issued_token: Option<String>,
    pub reader: Option<Reader>,
    pub authors: HashMap<String, Author>,
    pub author_books: HashMap<String, Vec<Book>>,
    pub current_author: Option<String>,
    pub fail_add_book: bool,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockAccountService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issuing(mut self, token: &str) -> Self {
        self.issued_token = Some(token.to_string());
        self
    }

    pub fn with_reader(mut self, reader: Reader) -> Self {
        self.reader = Some(reader);
        self
    }

    pub fn with_author(mut self, author: Author, books: Vec<Book>) -> Self {
        self.author_books.insert(author.id.clone(), books);
        self.authors.insert(author.id.clone(), author);
        self
    }

    pub fn logged_in_as_author(mut self, author_id: &str) -> Self {
        self.current_author = Some(author_id.to_string());
        self
    }

    pub fn with_failing_add_book(mut self) -> Self {
        self.fail_add_book = true;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, prefix: &str) -> usize {
        self.calls().iter().filter(|c| c.starts_with(prefix)).count()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn api_error(status: u16, message: &str) -> anyhow::Error {
        ShelfError::Api {
            status,
            message: message.to_string(),
        }
        .into()
    }
}

#[async_trait]
impl AuthGateway for MockAccountService {
    async fn register(&self, registration: &Registration) -> Result<()> {
        self.record(format!(
            "register {} [{}]",
            registration.username,
            registration.roles.join(",")
        ));
        Ok(())
    }

    async fn login(&self, username: &str, _password: &str) -> Result<AccessToken> {
        self.record(format!("login {}", username));
        match &self.issued_token {
            Some(token) => Ok(AccessToken {
                access_token: token.clone(),
                token_type: "bearer".to_string(),
            }),
            None => Err(Self::api_error(401, "Incorrect username or password")),
        }
    }
}

#[async_trait]
impl ReaderRepository for MockAccountService {
    async fn me(&self) -> Result<Reader> {
        self.record("readers/me".to_string());
        self.reader
            .clone()
            .ok_or_else(|| Self::api_error(404, "Reader not found"))
    }

    async fn add_book(&self, reader_id: &str, book_id: &str, list: ReadingList) -> Result<()> {
        self.record(format!("add_book {} {} {}", reader_id, book_id, list.as_str()));
        if self.fail_add_book {
            return Err(Self::api_error(400, "Book already in list"));
        }
        Ok(())
    }
}

#[async_trait]
impl AuthorRepository for MockAccountService {
    async fn get(&self, author_id: &str) -> Result<Author> {
        self.record(format!("authors/get {}", author_id));
        self.authors
            .get(author_id)
            .cloned()
            .ok_or_else(|| Self::api_error(404, "Author not found"))
    }

    async fn me(&self) -> Result<Author> {
        self.record("authors/me".to_string());
        self.current_author
            .as_ref()
            .and_then(|id| self.authors.get(id))
            .cloned()
            .ok_or_else(|| Self::api_error(404, "Author not found"))
    }

    async fn books(&self, author_id: &str) -> Result<AuthorBooks> {
        self.record(format!("authors/books {}", author_id));
        Ok(AuthorBooks {
            books: self.author_books.get(author_id).cloned().unwrap_or_default(),
            author: author_id.to_string(),
        })
    }

    async fn search(&self, name: &str) -> Result<Vec<Author>> {
        self.record(format!("authors/search {}", name));
        let needle = name.to_lowercase();
        Ok(self
            .authors
            .values()
            .filter(|a| a.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn update(&self, author_id: &str, update: &AuthorUpdate) -> Result<Author> {
        self.record(format!("authors/update {}", author_id));
        let mut author = AuthorRepository::get(self, author_id).await?;
        if let Some(name) = &update.name {
            author.name = name.clone();
        }
        if let Some(biography) = &update.biography {
            author.biography = Some(biography.clone());
        }
        Ok(author)
    }
}
