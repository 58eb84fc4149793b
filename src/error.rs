use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid integer for {field} on line {line}: '{value}'")]
    InvalidInteger {
        field: &'static str,
        line: u64,
        value: String,
    },

    #[error("Invalid purchase date on line {line}: '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { line: u64, value: String },
}

impl IngestError {
    /// True when the failure came from the underlying reader rather than the data.
    pub fn is_io(&self) -> bool {
        match self {
            IngestError::Io(_) => true,
            IngestError::Csv(e) => matches!(e.kind(), csv::ErrorKind::Io(_)),
            _ => false,
        }
    }
}

pub type IngestResult<T> = Result<T, IngestError>;
