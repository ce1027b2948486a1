// Ordinal encoding of categorical columns

use crate::data::Value;

use super::{category_key, sorted_categories, EncodeError};

/// Categorical-to-integer encoder fitted jointly over a set of columns.
///
/// Each column gets its own category table; codes are consecutive integers
/// assigned in sorted category order.
pub struct OrdinalEncoder {
    fitted: Option<Vec<ColumnCategories>>,
}

struct ColumnCategories {
    column: String,
    categories: Vec<String>, // sorted
}

impl OrdinalEncoder {
    /// Create a new unfitted encoder
    pub fn new() -> Self {
        OrdinalEncoder { fitted: None }
    }

    /// Learn the category table of every column
    pub fn fit(&mut self, names: &[String], columns: &[Vec<Value>]) -> Result<(), EncodeError> {
        if names.len() != columns.len() {
            return Err(EncodeError::LengthMismatch(format!(
                "{} column names for {} columns",
                names.len(),
                columns.len()
            )));
        }

        let mut fitted = Vec::with_capacity(names.len());

        for (name, values) in names.iter().zip(columns) {
            fitted.push(ColumnCategories {
                column: name.clone(),
                categories: sorted_categories(name, values)?,
            });
        }

        self.fitted = Some(fitted);
        Ok(())
    }

    /// Map every column of values to its integer codes.
    ///
    /// Columns must be supplied in fit order. An unseen category is an error.
    pub fn transform(&self, columns: &[Vec<Value>]) -> Result<Vec<Vec<i64>>, EncodeError> {
        let fitted = self
            .fitted
            .as_ref()
            .ok_or_else(|| EncodeError::NotFitted("ordinal".to_string()))?;

        if columns.len() != fitted.len() {
            return Err(EncodeError::LengthMismatch(format!(
                "{} columns supplied, {} fitted",
                columns.len(),
                fitted.len()
            )));
        }

        let mut encoded = Vec::with_capacity(columns.len());

        for (spec, values) in fitted.iter().zip(columns) {
            let mut codes = Vec::with_capacity(values.len());

            for value in values {
                let key = category_key(&spec.column, value)?;
                let code = spec.categories.binary_search(&key).map_err(|_| {
                    EncodeError::UnseenCategory {
                        column: spec.column.clone(),
                        category: key.clone(),
                    }
                })?;

                codes.push(code as i64);
            }

            encoded.push(codes);
        }

        Ok(encoded)
    }

    /// Check whether the encoder has been fitted
    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }
}

impl Default for OrdinalEncoder {
    fn default() -> Self {
        Self::new()
    }
}
