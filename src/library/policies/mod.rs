/// Presentation rules that are pure functions of domain data
mod chapter_availability;
mod display_defaults;

pub use chapter_availability::{ChapterAvailability, ChapterListing, DownloadState};
pub use display_defaults::DisplayDefaults;
