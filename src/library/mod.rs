/// Library domain - books, credentials and the rules around them
///
/// Nothing in here performs I/O. Network and storage access go through
/// the ports in `crate::ports`.
pub mod domain;
pub mod policies;
pub mod services;
