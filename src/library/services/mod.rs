/// Domain services - stateless operations over domain models
mod reading_lists;
mod token_decoder;

pub use reading_lists::{ReadingListAssembler, ReadingShelf};
pub use token_decoder::{TokenDecodeError, TokenDecoder};
