use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// The command needs a logged-in user (or an author) and there is none
    AccessDenied = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (API error, network error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code matching an error returned by a command.
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<ShelfError>() {
            Some(ShelfError::AuthenticationRequired) | Some(ShelfError::AuthorRoleRequired) => {
                ExitCode::AccessDenied
            }
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::AccessDenied => write!(f, "Access Denied (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the reading platform client.
///
/// Messages are shown to the user as-is; most carry a hint line.
#[derive(Debug, Error)]
pub enum ShelfError {
    /// The API answered with a non-2xx status
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Could not reach the reading platform API: {details}\n\n💡 Hint: Check that the API is running and that api_url points at it")]
    Network { details: String },

    #[error("You must be logged in to do that.\n\n💡 Hint: Run `shelfwise login -u <username>` first")]
    AuthenticationRequired,

    #[error("You must be an author to do that.\n\n💡 Hint: Register with `shelfwise register --author` to publish books")]
    AuthorRoleRequired,

    #[error("Failed to access token file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have read/write permissions")]
    TokenStorage { path: PathBuf, details: String },

    /// The token file exists but cannot hold a token
    #[error("Unreadable token file: {path}\nDetails: {details}")]
    UnreadableToken { path: PathBuf, details: String },

    #[error("Invalid config: {reason}\n\n💡 Hint: {hint}")]
    InvalidConfig { reason: String, hint: String },

    /// Validation error for user input and drafts
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {component}\nReason: {reason}")]
    SecurityError { component: String, reason: String },
}

impl ShelfError {
    /// Returns true for API responses with HTTP 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ShelfError::Api { status: 404, .. })
    }
}

/// Returns true when an error chain carries an API 404.
pub fn is_not_found(error: &anyhow::Error) -> bool {
    error
        .downcast_ref::<ShelfError>()
        .is_some_and(ShelfError::is_not_found)
}

/// Returns true when a stored token could not be read as text.
pub fn is_unreadable_token(error: &anyhow::Error) -> bool {
    matches!(
        error.downcast_ref::<ShelfError>(),
        Some(ShelfError::UnreadableToken { .. })
    )
}
