// Validation utilities

use crate::data::{DataError, DataType, Table};

/// Validate that every named column exists in the table
pub fn validate_columns_exist(table: &Table, columns: &[String]) -> Result<(), DataError> {
    for column in columns {
        if !table.has_column(column) {
            return Err(DataError::ColumnNotFound(column.clone()));
        }
    }

    Ok(())
}

/// Validate that a column is declared with one of the expected data types
pub fn validate_column_type(
    table: &Table,
    column: &str,
    expected: &[DataType],
) -> Result<(), DataError> {
    let field = table
        .schema
        .get_field_by_name(column)
        .ok_or_else(|| DataError::ColumnNotFound(column.to_string()))?;

    if !expected.contains(&field.data_type) {
        return Err(DataError::ValidationError(format!(
            "Column '{}' has type {:?}, expected one of {:?}",
            column, field.data_type, expected
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::data::{Field, Schema, Table};

    use super::*;

    fn empty_table() -> Table {
        let schema = Schema::new(vec![Field::new(
            "a".to_string(),
            DataType::Integer,
            false,
        )]);
        Table::new(schema).unwrap()
    }

    #[test]
    fn test_missing_column_is_reported_by_name() {
        let table = empty_table();
        let result = validate_columns_exist(&table, &["b".to_string()]);

        match result {
            Err(DataError::ColumnNotFound(name)) => assert_eq!(name, "b"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_column_type_check() {
        let table = empty_table();

        assert!(validate_column_type(&table, "a", &[DataType::Integer]).is_ok());
        assert!(validate_column_type(&table, "a", &[DataType::Float]).is_err());
    }
}
