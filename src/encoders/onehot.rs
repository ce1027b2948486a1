// One-hot indicator encoding of a single categorical column

use crate::data::Value;

use super::{category_key, sorted_categories, EncodeError};

/// Binary-indicator encoder for one categorical column.
///
/// `transform` produces a dense row-major indicator matrix with one column
/// per fit-time category, in sorted category order.
pub struct OneHotEncoder {
    column: String,
    categories: Option<Vec<String>>, // sorted
}

impl OneHotEncoder {
    /// Create a new unfitted encoder for the given column
    pub fn new(column: &str) -> Self {
        OneHotEncoder {
            column: column.to_string(),
            categories: None,
        }
    }

    /// Get the name of the encoded column
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Learn the category list from the column values
    pub fn fit(&mut self, values: &[Value]) -> Result<(), EncodeError> {
        self.categories = Some(sorted_categories(&self.column, values)?);
        Ok(())
    }

    /// Produce the indicator matrix for the column values.
    ///
    /// A category not seen during fit yields an all-zero row.
    pub fn transform(&self, values: &[Value]) -> Result<Vec<Vec<i64>>, EncodeError> {
        let categories = self.fitted_categories()?;
        let mut matrix = Vec::with_capacity(values.len());

        for value in values {
            let key = category_key(&self.column, value)?;
            let mut indicators = vec![0; categories.len()];

            if let Ok(index) = categories.binary_search(&key) {
                indicators[index] = 1;
            }

            matrix.push(indicators);
        }

        Ok(matrix)
    }

    /// Derive the generated column names from the source column and categories
    pub fn feature_names(&self) -> Result<Vec<String>, EncodeError> {
        let categories = self.fitted_categories()?;

        Ok(categories
            .iter()
            .map(|category| format!("{}_{}", self.column, category))
            .collect())
    }

    /// Get the fitted categories in sorted order
    pub fn categories(&self) -> Option<&[String]> {
        self.categories.as_deref()
    }

    fn fitted_categories(&self) -> Result<&[String], EncodeError> {
        self.categories
            .as_deref()
            .ok_or_else(|| EncodeError::NotFitted(self.column.clone()))
    }
}
