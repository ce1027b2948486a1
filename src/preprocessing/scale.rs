// Standard scaling stage

use crate::data::{DataType, Table, Value};
use crate::encoders::StandardScaler;
use crate::utils::{validate_column_type, validate_columns_exist};

use super::{PipelineStage, StageError};

/// Standardizes the configured numeric columns to zero mean and unit
/// variance, one scaler per column in configuration order.
pub struct StandardScalerStage {
    columns: Vec<String>,
    scalers: Option<Vec<StandardScaler>>,
}

impl StandardScalerStage {
    /// Create a new stage for the given column names
    pub fn new(columns: Vec<String>) -> Self {
        StandardScalerStage {
            columns,
            scalers: None,
        }
    }
}

impl PipelineStage for StandardScalerStage {
    fn fit(&mut self, input: &Table) -> Result<(), StageError> {
        validate_columns_exist(input, &self.columns)?;

        let mut scalers = Vec::with_capacity(self.columns.len());

        for column in &self.columns {
            validate_column_type(input, column, &[DataType::Integer, DataType::Float])?;
            let values = input.column_values(column)?;

            let mut scaler = StandardScaler::new(column);
            scaler.fit(&values)?;
            scalers.push(scaler);
        }

        self.scalers = Some(scalers);
        Ok(())
    }

    fn transform(&self, mut input: Table) -> Result<Table, StageError> {
        let scalers = self
            .scalers
            .as_ref()
            .ok_or_else(|| StageError::NotFitted(self.name().to_string()))?;

        for scaler in scalers {
            let values = input.column_values(scaler.column())?;
            let scaled = scaler.transform(&values)?;

            let values = scaled.into_iter().map(Value::Float).collect();
            input.set_column(scaler.column(), DataType::Float, values)?;
        }

        Ok(input)
    }

    fn name(&self) -> &str {
        "standard_scaler"
    }
}
