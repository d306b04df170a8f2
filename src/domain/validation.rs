use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidPhoneNumber { input: String },
    InvalidDateFormat { input: String },
    InvalidEmail { input: String },
    InvalidCallbackUrl { input: String },
    ConflictingParameters { message: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::InvalidDateFormat { input } => {
                write!(f, "Invalid date format: {input}. Expected YYYY-MM-DD")
            }
            Self::InvalidEmail { input } => write!(f, "Invalid email address: {input}"),
            Self::InvalidCallbackUrl { input } => write!(f, "invalid callback url: {input}"),
            Self::ConflictingParameters { message } => f.write_str(message),
        }
    }
}

impl std::error::Error for ValidationError {}
