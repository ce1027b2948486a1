// One-hot encoding stage

use crate::data::{DataType, Field, Table, Value};
use crate::encoders::OneHotEncoder;
use crate::utils::validate_columns_exist;

use super::{PipelineStage, StageError};

/// Expands each configured categorical column into one 0/1 indicator column
/// per fit-time category, then removes the source columns.
///
/// One encoder is fitted per configured column, independently, in
/// configuration order. Generated columns are named `{column}_{category}`;
/// a name collision with an existing column is an error.
pub struct OneHotEncoderStage {
    columns: Vec<String>,
    encoders: Option<Vec<OneHotEncoder>>,
}

impl OneHotEncoderStage {
    /// Create a new stage for the given column names
    pub fn new(columns: Vec<String>) -> Self {
        OneHotEncoderStage {
            columns,
            encoders: None,
        }
    }
}

impl PipelineStage for OneHotEncoderStage {
    fn fit(&mut self, input: &Table) -> Result<(), StageError> {
        validate_columns_exist(input, &self.columns)?;

        let mut encoders = Vec::with_capacity(self.columns.len());

        for column in &self.columns {
            let values = input.column_values(column)?;

            let mut encoder = OneHotEncoder::new(column);
            encoder.fit(&values)?;
            encoders.push(encoder);
        }

        self.encoders = Some(encoders);
        Ok(())
    }

    fn transform(&self, mut input: Table) -> Result<Table, StageError> {
        let encoders = self
            .encoders
            .as_ref()
            .ok_or_else(|| StageError::NotFitted(self.name().to_string()))?;

        for encoder in encoders {
            let values = input.column_values(encoder.column())?;
            let matrix = encoder.transform(&values)?;
            let names = encoder.feature_names()?;

            for (j, name) in names.iter().enumerate() {
                let indicators = matrix.iter().map(|row| Value::Integer(row[j])).collect();
                let field = Field::new(name.clone(), DataType::Integer, false);
                input.add_column(field, indicators)?;
            }
        }

        // source columns go away only after every encoder has been applied
        for column in &self.columns {
            input.drop_column(column)?;
        }

        Ok(input)
    }

    fn name(&self) -> &str {
        "one_hot_encoder"
    }
}

#[cfg(test)]
mod tests {
    use crate::data::{Row, Schema};

    use super::*;

    fn sample_table() -> Table {
        let schema = Schema::new(vec![
            Field::new("color".to_string(), DataType::String, false),
            Field::new("price".to_string(), DataType::Float, false),
        ]);

        let mut table = Table::new(schema).unwrap();

        for (color, price) in [("red", 1.0), ("blue", 2.0), ("red", 3.0), ("green", 4.0)] {
            table
                .add_row(Row::new(vec![
                    Value::String(color.to_string()),
                    Value::Float(price),
                ]))
                .unwrap();
        }

        table
    }

    #[test]
    fn test_one_column_per_category_and_source_removed() {
        let mut stage = OneHotEncoderStage::new(vec!["color".to_string()]);
        let result = stage.fit_transform(sample_table()).unwrap();

        assert_eq!(
            result.schema.column_names(),
            vec!["price", "color_blue", "color_green", "color_red"]
        );

        // every seen row has exactly one indicator set
        for row in &result.data {
            let sum: i64 = row.values[1..]
                .iter()
                .map(|v| match v {
                    Value::Integer(i) => *i,
                    _ => panic!("indicator must be an integer"),
                })
                .sum();
            assert_eq!(sum, 1);
        }

        assert_eq!(result.data[0].values[3], Value::Integer(1)); // red
        assert_eq!(result.data[1].values[1], Value::Integer(1)); // blue
    }

    #[test]
    fn test_unseen_category_yields_all_zero_row() {
        let mut stage = OneHotEncoderStage::new(vec!["color".to_string()]);
        stage.fit(&sample_table()).unwrap();

        let schema = Schema::new(vec![
            Field::new("color".to_string(), DataType::String, false),
            Field::new("price".to_string(), DataType::Float, false),
        ]);
        let mut unseen = Table::new(schema).unwrap();
        unseen
            .add_row(Row::new(vec![
                Value::String("yellow".to_string()),
                Value::Float(1.0),
            ]))
            .unwrap();

        let result = stage.transform(unseen).unwrap();

        assert_eq!(
            result.data[0].values[1..],
            [Value::Integer(0), Value::Integer(0), Value::Integer(0)]
        );
    }

    #[test]
    fn test_generated_name_collision_is_an_error() {
        let schema = Schema::new(vec![
            Field::new("color".to_string(), DataType::String, false),
            Field::new("color_red".to_string(), DataType::Integer, false),
        ]);

        let mut table = Table::new(schema).unwrap();
        table
            .add_row(Row::new(vec![
                Value::String("red".to_string()),
                Value::Integer(7),
            ]))
            .unwrap();

        let mut stage = OneHotEncoderStage::new(vec!["color".to_string()]);
        let result = stage.fit_transform(table);

        assert!(matches!(result, Err(StageError::Data(_))));
    }

    #[test]
    fn test_transform_before_fit_is_an_error() {
        let stage = OneHotEncoderStage::new(vec!["color".to_string()]);
        let result = stage.transform(sample_table());

        assert!(matches!(result, Err(StageError::NotFitted(_))));
    }
}
