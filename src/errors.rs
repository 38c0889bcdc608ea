use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("Input error: {0}")]
    InputError(String),

    #[error("File write error: {0}")]
    FileWriteError(String),

    #[error("Console error: {0}")]
    ConsoleError(String),
}

impl ResolutionError {
    pub fn is_input_error(&self) -> bool {
        matches!(self, ResolutionError::InputError(_))
    }

    /// Failure to print to the terminal, kept apart from CSV file failures.
    pub fn console(err: std::io::Error) -> Self {
        ResolutionError::ConsoleError(err.to_string())
    }
}

impl From<std::io::Error> for ResolutionError {
    fn from(err: std::io::Error) -> Self {
        ResolutionError::FileWriteError(err.to_string())
    }
}

impl From<csv::Error> for ResolutionError {
    fn from(err: csv::Error) -> Self {
        ResolutionError::FileWriteError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ResolutionError>;
