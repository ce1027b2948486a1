// Wrapping of raw numeric arrays into labeled tables

use ndarray::Array2;

use crate::data::{DataType, Field, Row, Schema, Table, Value};

use super::StageError;

/// Converts a homogeneous numeric 2-D array into a labeled table.
///
/// With a configured name list, the list length must match the array's column
/// count; without one, columns are labeled by position (`"0"`, `"1"`, ...).
/// This is the pipeline entry point, so it operates on arrays rather than
/// tables and exposes the fit/transform surface as inherent methods.
pub struct TabularWrapper {
    columns: Option<Vec<String>>,
}

impl TabularWrapper {
    /// Create a wrapper that labels columns positionally
    pub fn new() -> Self {
        TabularWrapper { columns: None }
    }

    /// Create a wrapper with the given column names
    pub fn with_columns(columns: Vec<String>) -> Self {
        TabularWrapper {
            columns: Some(columns),
        }
    }

    /// No learning: the wrapper is stateless
    pub fn fit(&mut self, _input: &Array2<f64>) -> Result<(), StageError> {
        Ok(())
    }

    /// Build a table from the array's rows
    pub fn transform(&self, input: &Array2<f64>) -> Result<Table, StageError> {
        let ncols = input.ncols();

        let names: Vec<String> = match &self.columns {
            Some(columns) => {
                if columns.len() != ncols {
                    return Err(StageError::ShapeMismatch(format!(
                        "{} column names for an array with {} columns",
                        columns.len(),
                        ncols
                    )));
                }
                columns.clone()
            }
            None => (0..ncols).map(|i| i.to_string()).collect(),
        };

        let fields = names
            .into_iter()
            .map(|name| Field::new(name, DataType::Float, false))
            .collect();

        let mut table = Table::new(Schema::new(fields))?;

        for row in input.rows() {
            let values = row.iter().map(|v| Value::Float(*v)).collect();
            table.add_row(Row::new(values))?;
        }

        Ok(table)
    }

    /// Fit and transform in one call
    pub fn fit_transform(&mut self, input: &Array2<f64>) -> Result<Table, StageError> {
        self.fit(input)?;
        self.transform(input)
    }

    /// Get the stage name
    pub fn name(&self) -> &str {
        "tabular_wrapper"
    }
}

impl Default for TabularWrapper {
    fn default() -> Self {
        Self::new()
    }
}
