use std::fmt;

pub type Result<T> = std::result::Result<T, ClipshelfError>;

#[derive(Debug)]
pub enum ClipshelfError {
    Io(std::io::Error),
    Json(serde_json::Error),
    InvalidArgument(String),
    Generic(String),
}

impl fmt::Display for ClipshelfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipshelfError::Io(e) => write!(f, "IO error: {}", e),
            ClipshelfError::Json(e) => write!(f, "JSON error: {}", e),
            ClipshelfError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            ClipshelfError::Generic(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for ClipshelfError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClipshelfError::Io(e) => Some(e),
            ClipshelfError::Json(e) => Some(e),
            ClipshelfError::InvalidArgument(_) => None,
            ClipshelfError::Generic(_) => None,
        }
    }
}

impl From<std::io::Error> for ClipshelfError {
    fn from(error: std::io::Error) -> Self {
        ClipshelfError::Io(error)
    }
}

impl From<serde_json::Error> for ClipshelfError {
    fn from(error: serde_json::Error) -> Self {
        ClipshelfError::Json(error)
    }
}

impl From<String> for ClipshelfError {
    fn from(error: String) -> Self {
        ClipshelfError::Generic(error)
    }
}

impl From<&str> for ClipshelfError {
    fn from(error: &str) -> Self {
        ClipshelfError::Generic(error.to_string())
    }
}

impl From<Box<dyn std::error::Error>> for ClipshelfError {
    fn from(error: Box<dyn std::error::Error>) -> Self {
        ClipshelfError::Generic(error.to_string())
    }
}
