/// Domain models of the reading platform client
mod book;
mod credential;
mod external_book;
mod people;
mod search_result;

pub use book::{
    Book, BookDraft, BookStatus, BookUpdate, Chapter, CreatedBook, DownloadReceipt, ImportReceipt,
};
pub use credential::{Claims, Credential, AUTHOR_ROLE};
pub use external_book::{ExternalBook, ExternalBookDetails, ExternalSearchPayload, LOCAL_SOURCE};
pub use people::{
    AccessToken, Author, AuthorBooks, AuthorSearchPayload, AuthorUpdate, Reader, ReadingList,
    Registration,
};
pub use search_result::{CombinedSearchPayload, SearchResultSet};
