use thiserror::Error;

/// Errors that can occur during a single upload attempt.
///
/// Every variant is terminal for the attempt; nothing is retried. The display
/// strings are the user-facing status messages.
#[derive(Error, Debug)]
pub enum UploadError {
    /// No file was selected before the upload was triggered
    #[error("Please choose a .txt file first.")]
    NoFileSelected,

    /// The selected file does not carry a .txt extension
    #[error("Error: Uploaded file must be a .txt file.")]
    NotATextFile,

    /// Reading the file content failed. Parsing itself cannot fail, so any
    /// fault between validation and the save attempt collapses into this one
    /// generic message.
    #[error("Error: Failed to read/parse/save the file.")]
    ReadFailed(#[source] std::io::Error),

    /// The store rejected the save under the non-overwrite policy, even after
    /// the collision rename
    #[error("Upload failed: a recipe with that title already exists. Please rename and try again.")]
    AlreadyExists,
}

/// Errors from the community recipe feed.
#[derive(Error, Debug)]
pub enum FeedError {
    /// HTTP request failed
    #[error("Failed to fetch recipes: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("Recipe API returned HTTP status {0}")]
    BadStatus(u16),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
