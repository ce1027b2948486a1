// Ordinal encoding stage

use crate::data::{DataType, Table, Value};
use crate::encoders::OrdinalEncoder;
use crate::utils::validate_columns_exist;

use super::{PipelineStage, StageError};

/// Replaces the configured categorical columns with integer codes.
///
/// A single encoder is fitted jointly over all configured columns; each
/// column keeps its own category table.
pub struct OrdinalEncoderStage {
    columns: Vec<String>,
    encoder: Option<OrdinalEncoder>,
}

impl OrdinalEncoderStage {
    /// Create a new stage for the given column names
    pub fn new(columns: Vec<String>) -> Self {
        OrdinalEncoderStage {
            columns,
            encoder: None,
        }
    }

    fn gather_columns(&self, input: &Table) -> Result<Vec<Vec<Value>>, StageError> {
        self.columns
            .iter()
            .map(|column| input.column_values(column).map_err(StageError::from))
            .collect()
    }
}

impl PipelineStage for OrdinalEncoderStage {
    fn fit(&mut self, input: &Table) -> Result<(), StageError> {
        validate_columns_exist(input, &self.columns)?;

        let columns = self.gather_columns(input)?;

        let mut encoder = OrdinalEncoder::new();
        encoder.fit(&self.columns, &columns)?;
        self.encoder = Some(encoder);

        Ok(())
    }

    fn transform(&self, mut input: Table) -> Result<Table, StageError> {
        let encoder = self
            .encoder
            .as_ref()
            .ok_or_else(|| StageError::NotFitted(self.name().to_string()))?;

        let columns = self.gather_columns(&input)?;
        let encoded = encoder.transform(&columns)?;

        for (column, codes) in self.columns.iter().zip(encoded) {
            let values = codes.into_iter().map(Value::Integer).collect();
            input.set_column(column, DataType::Integer, values)?;
        }

        Ok(input)
    }

    fn name(&self) -> &str {
        "ordinal_encoder"
    }
}

#[cfg(test)]
mod tests {
    use crate::data::{Field, Row, Schema};

    use super::*;

    fn sample_table() -> Table {
        let schema = Schema::new(vec![
            Field::new("size".to_string(), DataType::String, false),
            Field::new("price".to_string(), DataType::Float, false),
        ]);

        let mut table = Table::new(schema).unwrap();

        for size in ["x", "z", "y", "x"] {
            table
                .add_row(Row::new(vec![
                    Value::String(size.to_string()),
                    Value::Float(1.0),
                ]))
                .unwrap();
        }

        table
    }

    #[test]
    fn test_column_replaced_by_consecutive_codes() {
        let mut stage = OrdinalEncoderStage::new(vec!["size".to_string()]);
        let result = stage.fit_transform(sample_table()).unwrap();

        let codes = result.column_values("size").unwrap();
        assert_eq!(
            codes,
            vec![
                Value::Integer(0),
                Value::Integer(2),
                Value::Integer(1),
                Value::Integer(0),
            ]
        );

        let field = result.schema.get_field_by_name("size").unwrap();
        assert_eq!(field.data_type, DataType::Integer);
    }

    #[test]
    fn test_fitted_stage_is_reusable_across_tables() {
        let mut stage = OrdinalEncoderStage::new(vec!["size".to_string()]);
        stage.fit(&sample_table()).unwrap();

        let first = stage.transform(sample_table()).unwrap();
        let second = stage.transform(sample_table()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_transform_before_fit_is_an_error() {
        let stage = OrdinalEncoderStage::new(vec!["size".to_string()]);
        let result = stage.transform(sample_table());

        assert!(matches!(result, Err(StageError::NotFitted(_))));
    }

    #[test]
    fn test_unseen_category_propagates_as_encode_error() {
        let mut stage = OrdinalEncoderStage::new(vec!["size".to_string()]);
        stage.fit(&sample_table()).unwrap();

        let schema = Schema::new(vec![
            Field::new("size".to_string(), DataType::String, false),
            Field::new("price".to_string(), DataType::Float, false),
        ]);
        let mut unseen = Table::new(schema).unwrap();
        unseen
            .add_row(Row::new(vec![
                Value::String("w".to_string()),
                Value::Float(1.0),
            ]))
            .unwrap();

        let result = stage.transform(unseen);
        assert!(matches!(result, Err(StageError::Encode(_))));
    }
}
