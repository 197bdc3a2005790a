use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Malformed JSON body: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Request body must be a JSON object")]
    NotAnObject,

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Field {field} must be a string, found {found}")]
    InvalidFieldType { field: String, found: String },

    #[error("Unable to parse phone number: {message}")]
    PhoneNumberError { message: String },

    #[error("Invalid request body: {message}")]
    InvalidBody { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

impl FormatError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FormatError::InvalidJson(_)
            | FormatError::NotAnObject
            | FormatError::MissingField { .. }
            | FormatError::InvalidFieldType { .. }
            | FormatError::PhoneNumberError { .. }
            | FormatError::InvalidBody { .. } => ErrorCategory::Input,
            FormatError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            FormatError::IoError(_) => ErrorCategory::System,
        }
    }

    /// 對應 CLI 的退出碼
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::System => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, FormatError>;
