use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(#[from] crate::validation::ValidationError),

    /// A delete selection that should be re-entered by the user.
    #[error("{0}")]
    Selection(String),

    #[error("Invalid format. Use 'json' or 'txt'.")]
    Format(String),

    #[error("Input closed")]
    InputClosed,

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LibraryError>;
