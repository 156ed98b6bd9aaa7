use thiserror::Error;

/// Errors that make a whole scene unusable.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed scene: {0}")]
    MalformedScene(String),
}

/// A single entity that could not be turned into an element.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ElementError {
    #[error("Entity {index}: missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("Entity {index}: {message}")]
    Invalid { index: usize, message: String },
}

impl ElementError {
    /// Position of the offending record in the `entities` array.
    pub fn index(&self) -> usize {
        match self {
            ElementError::MissingField { index, .. } => *index,
            ElementError::Invalid { index, .. } => *index,
        }
    }
}
