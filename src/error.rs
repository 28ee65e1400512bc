/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Username already taken: {0}")]
    AlreadyExists(String),

    /// Deliberately the same for an unknown user and a wrong password
    #[error("Invalid username or password")]
    AuthFailed,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
