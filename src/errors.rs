use core::fmt;

#[derive(Debug)]
pub enum AppError {
    Csv(csv::Error),
    DuplicateName(String),
    Io(std::io::Error),
    Json(serde_json::Error),
    NotFound(String),
    Validation(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Csv(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Csv(e) => {
                write!(f, "CSV error: {}", e)
            }
            AppError::DuplicateName(name) => {
                write!(f, "{} is already in contacts.", name)
            }
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::Json(e) => {
                write!(f, "Invalid JSON data: {}", e)
            }
            AppError::NotFound(item) => {
                write!(f, "{} Not found", item)
            }
            AppError::Validation(msg) => {
                write!(f, "Validation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Csv(e) => Some(e),
            AppError::Io(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}
