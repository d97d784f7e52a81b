use crate::application::dto::{
    AuthorProfile, BookDetailView, ExternalBookView, Lookup, SearchState, SessionSummary,
};
use crate::library::domain::{Author, Book, Chapter, ExternalBook, ReadingList};
use crate::library::policies::{DisplayDefaults, DownloadState};
use crate::library::services::ReadingShelf;
use std::fmt::Write;

/// TerminalRenderer turns view DTOs into plain text for stdout
///
/// Output is uncoloured so it can be piped. Every method returns the full
/// text; writing it is up to the OutputPresenter.
pub struct TerminalRenderer;

// Writing into a String cannot fail, so `writeln!` results are dropped
// throughout.
impl TerminalRenderer {
    pub fn whoami(summary: &SessionSummary) -> String {
        let Some(username) = summary.username.as_deref() else {
            return "Not logged in.\n".to_string();
        };
        let roles = if summary.roles.is_empty() {
            "none".to_string()
        } else {
            summary.roles.join(", ")
        };
        let mut out = format!("Logged in as {}\nRoles: {}\n", username, roles);
        if let Some(expires_at) = summary.expires_at {
            let _ = writeln!(out, "Session expires: {}", expires_at.format("%Y-%m-%d %H:%M UTC"));
        }
        out
    }

    pub fn book_list(heading: &str, books: &[Book]) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} ({})", heading, books.len());
        if books.is_empty() {
            let _ = writeln!(out, "  (none)");
        }
        for book in books {
            let _ = writeln!(
                out,
                "  {}  by {}  [{}]",
                book.title,
                DisplayDefaults::book_author(book),
                book.id
            );
        }
        out
    }

    fn external_line(out: &mut String, book: &ExternalBook) {
        let mut facts = Vec::new();
        if let Some(year) = book.year.as_deref() {
            facts.push(year);
        }
        if let Some(format) = book.format.as_deref() {
            facts.push(format);
        }
        if let Some(size) = book.size.as_deref() {
            facts.push(size);
        }
        let facts = if facts.is_empty() {
            String::new()
        } else {
            format!("  ({})", facts.join(", "))
        };
        let _ = writeln!(
            out,
            "  {}  by {}{}  [md5 {}]",
            book.title,
            DisplayDefaults::external_author(book),
            facts,
            book.archive_hash()
        );
    }

    pub fn search(state: &SearchState) -> String {
        let mut out = String::new();
        match state {
            SearchState::Idle => {
                let _ = writeln!(out, "Enter a query to search.");
            }
            SearchState::Loading { query } => {
                let _ = writeln!(out, "Searching for \"{}\"...", query);
            }
            SearchState::Failed { query, message } => {
                let _ = writeln!(out, "Search for \"{}\" failed: {}", query, message);
            }
            SearchState::Empty { results } if results.query().is_empty() => {
                let _ = writeln!(out, "Enter a query to search.");
            }
            SearchState::Empty { results } => {
                let _ = writeln!(out, "No books found for \"{}\".", results.query());
            }
            SearchState::Populated { results } => {
                let _ = writeln!(out, "Results for \"{}\"\n", results.query());
                out.push_str(&Self::book_list("In the library", results.local_matches()));
                let _ = writeln!(out);
                let _ = writeln!(out, "From the archive ({})", results.external_matches().len());
                if results.external_matches().is_empty() {
                    let _ = writeln!(out, "  (none)");
                }
                for book in results.external_matches() {
                    Self::external_line(&mut out, book);
                }
            }
        }
        out
    }

    pub fn book_detail(view: &Lookup<BookDetailView>) -> String {
        let view = match view {
            Lookup::Found(view) => view,
            Lookup::NotFound => return "Book not found.\n".to_string(),
        };
        let book = &view.book;

        let mut out = String::new();
        let _ = writeln!(out, "{}", book.title);
        let _ = writeln!(out, "by {}", DisplayDefaults::book_author(book));
        let _ = writeln!(out, "Cover: {}", DisplayDefaults::detail_cover(book));
        if let Some(biography) = book.biography.as_deref().filter(|b| !b.trim().is_empty()) {
            let _ = writeln!(out, "\n{}", biography);
        }
        if view.download == DownloadState::Available {
            let _ = writeln!(out, "\nDownload & Read: shelfwise download {}", book.id);
        }

        let _ = writeln!(out, "\nChapters");
        match view.message() {
            Some(message) => {
                let _ = writeln!(out, "  {}", message);
            }
            None => {
                let mut chapters: Vec<&Chapter> = book.chapters.iter().collect();
                chapters.sort_by_key(|c| c.order);
                for chapter in chapters {
                    let _ = writeln!(out, "  {}. {}", chapter.order, chapter.title);
                }
            }
        }

        if view.reader_id.is_some() {
            let lists: Vec<&str> = ReadingList::ALL.iter().map(|l| l.as_str()).collect();
            let _ = writeln!(
                out,
                "\nAdd to a list: shelfwise add-to-list {} <{}>",
                book.id,
                lists.join("|")
            );
        }
        out
    }

    pub fn external_book(view: &ExternalBookView) -> String {
        let mut out = String::new();
        match view {
            ExternalBookView::NotFound => {
                let _ = writeln!(out, "Book not found in the archive.");
            }
            ExternalBookView::RedirectToLocal { local_id } => {
                let _ = writeln!(
                    out,
                    "Already in the library: shelfwise book {}",
                    local_id
                );
            }
            ExternalBookView::Details { book } => {
                let _ = writeln!(out, "{}", book.title);
                let _ = writeln!(out, "by {}", DisplayDefaults::external_author(book));
                let _ = writeln!(
                    out,
                    "Cover: {}",
                    DisplayDefaults::external_cover(book).unwrap_or("(no cover)")
                );
                let fields = [
                    ("Year", &book.year),
                    ("Publisher", &book.publisher),
                    ("Language", &book.language),
                    ("Format", &book.format),
                    ("Size", &book.size),
                    ("ISBN", &book.isbn),
                ];
                for (label, value) in fields {
                    if let Some(value) = value.as_deref().filter(|v| !v.trim().is_empty()) {
                        let _ = writeln!(out, "{}: {}", label, value);
                    }
                }
                let description = DisplayDefaults::external_description(book);
                if !description.is_empty() {
                    let _ = writeln!(out, "\n{}", description);
                }
                let _ = writeln!(out, "\nImport: shelfwise import {}", book.archive_hash());
            }
        }
        out
    }

    pub fn chapter(chapter: &Lookup<Chapter>) -> String {
        match chapter {
            Lookup::NotFound => "Chapter not found.\n".to_string(),
            Lookup::Found(chapter) => format!(
                "Chapter {}: {}\n\n{}\n",
                chapter.order,
                chapter.title,
                chapter.content.as_deref().unwrap_or("")
            ),
        }
    }

    pub fn shelf(shelf: &ReadingShelf) -> String {
        let mut out = String::new();
        for (index, list) in ReadingList::ALL.iter().enumerate() {
            if index > 0 {
                let _ = writeln!(out);
            }
            out.push_str(&Self::book_list(list.label(), shelf.list(*list)));
        }
        out
    }

    pub fn authors(authors: &[Author]) -> String {
        let mut out = String::new();
        if authors.is_empty() {
            let _ = writeln!(out, "No authors found.");
        }
        for author in authors {
            let _ = writeln!(
                out,
                "  {}  ({} book(s))  [{}]",
                author.name,
                author.book_list.len(),
                author.id
            );
        }
        out
    }

    pub fn author_profile(profile: &Lookup<AuthorProfile>) -> String {
        let profile = match profile {
            Lookup::Found(profile) => profile,
            Lookup::NotFound => return "Author not found.\n".to_string(),
        };

        let mut out = String::new();
        let _ = writeln!(out, "{}", profile.author.name);
        if let Some(biography) = profile
            .author
            .biography
            .as_deref()
            .filter(|b| !b.trim().is_empty())
        {
            let _ = writeln!(out, "{}", biography);
        }
        let _ = writeln!(out);
        out.push_str(&Self::book_list("Books", &profile.books));
        out
    }
}
