/// Filesystem adapters: the token file and stdout
mod file_token_storage;
mod stdout_presenter;

pub use file_token_storage::FileTokenStorage;
pub use stdout_presenter::StdoutPresenter;
