// Column and null-row dropping stages

use crate::data::{DataError, Table};
use crate::utils::validate_columns_exist;

use super::{PipelineStage, StageError};

/// Removes a fixed set of named columns from a table
pub struct ColumnDropper {
    columns: Vec<String>,
}

impl ColumnDropper {
    /// Create a new dropper for the given column names
    pub fn new(columns: Vec<String>) -> Self {
        ColumnDropper { columns }
    }
}

impl PipelineStage for ColumnDropper {
    fn fit(&mut self, input: &Table) -> Result<(), StageError> {
        validate_columns_exist(input, &self.columns)?;
        Ok(())
    }

    fn transform(&self, mut input: Table) -> Result<Table, StageError> {
        for column in &self.columns {
            input.drop_column(column)?;
        }

        Ok(input)
    }

    fn name(&self) -> &str {
        "column_dropper"
    }
}

/// Removes every row holding a missing value in any of the configured columns
pub struct NullRowDropper {
    columns: Vec<String>,
}

impl NullRowDropper {
    /// Create a new dropper checking the given column names
    pub fn new(columns: Vec<String>) -> Self {
        NullRowDropper { columns }
    }
}

impl PipelineStage for NullRowDropper {
    fn fit(&mut self, input: &Table) -> Result<(), StageError> {
        validate_columns_exist(input, &self.columns)?;
        Ok(())
    }

    fn transform(&self, mut input: Table) -> Result<Table, StageError> {
        let indices: Vec<usize> = self
            .columns
            .iter()
            .map(|column| {
                input
                    .column_index(column)
                    .ok_or_else(|| DataError::ColumnNotFound(column.clone()))
            })
            .collect::<Result<_, _>>()?;

        input.retain_rows(|row| indices.iter().all(|&i| !row.values[i].is_null()));

        Ok(input)
    }

    fn name(&self) -> &str {
        "null_row_dropper"
    }
}
