use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unknown filter: {name}")]
    UnknownFilterError { name: String },
}

pub type Result<T> = std::result::Result<T, FilterError>;

impl FilterError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            FilterError::IoError(_) => "Failed to read input".to_string(),
            FilterError::JsonError(_) => "Input is not valid JSON".to_string(),
            FilterError::UnknownFilterError { name } => {
                format!("No filter named '{}'", name)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            FilterError::IoError(_) => {
                "Check that stdin is readable or pass text as arguments".to_string()
            }
            FilterError::JsonError(_) => {
                "Pass one JSON value per line, or drop --json to treat input as plain text"
                    .to_string()
            }
            FilterError::UnknownFilterError { .. } => {
                "Run with --list to see the available filters".to_string()
            }
        }
    }
}
