// Error handling utilities

use std::error::Error;
use std::fmt;

use crate::data::DataError;
use crate::encoders::EncodeError;
use crate::preprocessing::StageError;

/// Application error type
#[derive(Debug)]
pub enum AppError {
    Data(DataError),
    Encode(EncodeError),
    Stage(StageError),
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Data(err) => write!(f, "Data error: {}", err),
            AppError::Encode(err) => write!(f, "Encode error: {}", err),
            AppError::Stage(err) => write!(f, "Stage error: {}", err),
            AppError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl Error for AppError {}

impl From<DataError> for AppError {
    fn from(err: DataError) -> Self {
        AppError::Data(err)
    }
}

impl From<EncodeError> for AppError {
    fn from(err: EncodeError) -> Self {
        AppError::Encode(err)
    }
}

impl From<StageError> for AppError {
    fn from(err: StageError) -> Self {
        AppError::Stage(err)
    }
}

/// Result type alias for AppError
pub type AppResult<T> = Result<T, AppError>;
