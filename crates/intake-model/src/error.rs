use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("file exceeds the {limit_mb} MB size limit")]
    FileTooLarge { limit_mb: u64 },
    #[error("unsupported file type: expected one of {accepted}")]
    UnsupportedExtension { accepted: String },
    #[error("file is empty or has no header row")]
    EmptyFile,
    #[error("operation not allowed in the {state} step")]
    InvalidState { state: &'static str },
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, IntakeError>;
