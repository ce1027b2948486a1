// Encoders module for the statistical fitting primitives behind the pipeline stages

mod onehot;
mod ordinal;
mod scaler;

pub use onehot::*;
pub use ordinal::*;
pub use scaler::*;

use std::error::Error;
use std::fmt;

use crate::data::Value;

/// Represents an error in the encoders module
#[derive(Debug)]
pub enum EncodeError {
    NotFitted(String),
    UnseenCategory { column: String, category: String },
    NonCategorical { column: String, value: String },
    NonNumeric { column: String, value: String },
    EmptyColumn(String),
    LengthMismatch(String),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EncodeError::NotFitted(name) => {
                write!(f, "Encoder '{}' has not been fitted", name)
            }
            EncodeError::UnseenCategory { column, category } => {
                write!(f, "Unseen category '{}' in column '{}'", category, column)
            }
            EncodeError::NonCategorical { column, value } => {
                write!(f, "Non-categorical value '{}' in column '{}'", value, column)
            }
            EncodeError::NonNumeric { column, value } => {
                write!(f, "Non-numeric value '{}' in column '{}'", value, column)
            }
            EncodeError::EmptyColumn(column) => {
                write!(f, "Column '{}' has no values to fit", column)
            }
            EncodeError::LengthMismatch(msg) => write!(f, "Length mismatch: {}", msg),
        }
    }
}

impl Error for EncodeError {}

/// Derive the category key for a cell of a categorical column.
///
/// Boolean, integer and string cells are categorical; float and null cells
/// are not.
pub(crate) fn category_key(column: &str, value: &Value) -> Result<String, EncodeError> {
    match value {
        Value::Boolean(b) => Ok(b.to_string()),
        Value::Integer(i) => Ok(i.to_string()),
        Value::String(s) => Ok(s.clone()),
        Value::Null | Value::Float(_) => Err(EncodeError::NonCategorical {
            column: column.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Collect the sorted distinct category keys of a column
pub(crate) fn sorted_categories(column: &str, values: &[Value]) -> Result<Vec<String>, EncodeError> {
    if values.is_empty() {
        return Err(EncodeError::EmptyColumn(column.to_string()));
    }

    let mut categories: Vec<String> = values
        .iter()
        .map(|value| category_key(column, value))
        .collect::<Result<_, _>>()?;

    categories.sort();
    categories.dedup();

    Ok(categories)
}
