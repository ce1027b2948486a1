// Data module for the labeled table structure and its schema

mod schema;

pub use schema::*;

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Represents a labeled table with schema and row data
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub schema: Schema,
    pub data: Vec<Row>,
    pub metadata: Metadata,
}

impl Table {
    /// Create a new empty table with the given schema
    pub fn new(schema: Schema) -> Result<Self, DataError> {
        schema.check_unique_names()?;

        Ok(Table {
            schema,
            data: Vec::new(),
            metadata: Metadata::new(),
        })
    }

    /// Add a row to the table
    pub fn add_row(&mut self, row: Row) -> Result<(), DataError> {
        if row.values.len() != self.schema.fields.len() {
            return Err(DataError::SchemaMismatch);
        }

        self.data.push(row);
        Ok(())
    }

    /// Get the number of rows in the table
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a reference to a row by index
    pub fn get_row(&self, index: usize) -> Option<&Row> {
        self.data.get(index)
    }

    /// Get the index of a column by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.schema.fields.iter().position(|f| f.name == name)
    }

    /// Check whether the table has a column with the given name
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Get the values of a column, in row order
    pub fn column_values(&self, name: &str) -> Result<Vec<Value>, DataError> {
        let index = self
            .column_index(name)
            .ok_or_else(|| DataError::ColumnNotFound(name.to_string()))?;

        Ok(self.data.iter().map(|row| row.values[index].clone()).collect())
    }

    /// Append a new column with one value per existing row
    pub fn add_column(&mut self, field: Field, values: Vec<Value>) -> Result<(), DataError> {
        if self.has_column(&field.name) {
            return Err(DataError::DuplicateColumn(field.name));
        }

        if values.len() != self.data.len() {
            return Err(DataError::SchemaMismatch);
        }

        self.schema.fields.push(field);

        for (row, value) in self.data.iter_mut().zip(values) {
            row.values.push(value);
        }

        Ok(())
    }

    /// Remove a column and its values from every row
    pub fn drop_column(&mut self, name: &str) -> Result<(), DataError> {
        let index = self
            .column_index(name)
            .ok_or_else(|| DataError::ColumnNotFound(name.to_string()))?;

        self.schema.fields.remove(index);

        for row in &mut self.data {
            row.values.remove(index);
        }

        Ok(())
    }

    /// Replace the values of an existing column and update its data type
    pub fn set_column(
        &mut self,
        name: &str,
        data_type: DataType,
        values: Vec<Value>,
    ) -> Result<(), DataError> {
        let index = self
            .column_index(name)
            .ok_or_else(|| DataError::ColumnNotFound(name.to_string()))?;

        if values.len() != self.data.len() {
            return Err(DataError::SchemaMismatch);
        }

        self.schema.fields[index].data_type = data_type;

        for (row, value) in self.data.iter_mut().zip(values) {
            row.values[index] = value;
        }

        Ok(())
    }

    /// Keep only the rows for which the predicate returns true
    pub fn retain_rows<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&Row) -> bool,
    {
        self.data.retain(|row| predicate(row));
    }

    /// Validate every row against the schema
    pub fn validate(&self) -> Result<(), DataError> {
        for row in &self.data {
            SchemaValidator::validate_row(row, &self.schema)?;
        }

        Ok(())
    }
}

/// Represents a row in a table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub values: Vec<Value>,
}

impl Row {
    /// Create a new row with the given values
    pub fn new(values: Vec<Value>) -> Self {
        Row { values }
    }

    /// Get a reference to a value by index
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }
}

/// Represents a scalar cell value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl Value {
    /// Check whether the value is the missing marker
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get the value as a float, converting integers
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(v) => write!(f, "{}", v),
            Value::String(s) => write!(f, "{}", s),
        }
    }
}

/// Represents a schema for a table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    pub fields: Vec<Field>,
}

impl Schema {
    /// Create a new schema with the given fields
    pub fn new(fields: Vec<Field>) -> Self {
        Schema { fields }
    }

    /// Get a reference to a field by name
    pub fn get_field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Get a reference to a field by index
    pub fn get_field(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    /// Get the column names in order
    pub fn column_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Check that no two fields share a name
    pub fn check_unique_names(&self) -> Result<(), DataError> {
        let mut seen = std::collections::HashSet::new();

        for field in &self.fields {
            if !seen.insert(&field.name) {
                return Err(DataError::DuplicateColumn(field.name.clone()));
            }
        }

        Ok(())
    }
}

/// Represents a field in a schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub data_type: DataType,
    pub nullable: bool,
}

impl Field {
    /// Create a new field
    pub fn new(name: String, data_type: DataType, nullable: bool) -> Self {
        Field {
            name,
            data_type,
            nullable,
        }
    }
}

/// Represents a data type for a field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DataType {
    Boolean,
    Integer,
    Float,
    String,
}

/// Represents metadata for a table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub properties: std::collections::HashMap<String, String>,
}

impl Metadata {
    /// Create new empty metadata
    pub fn new() -> Self {
        Metadata {
            properties: std::collections::HashMap::new(),
        }
    }

    /// Add a property to the metadata
    pub fn add(&mut self, key: String, value: String) {
        self.properties.insert(key, value);
    }

    /// Get a property from the metadata
    pub fn get(&self, key: &str) -> Option<&String> {
        self.properties.get(key)
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self::new()
    }
}

/// Represents an error in the data module
#[derive(Debug)]
pub enum DataError {
    ColumnNotFound(String),
    DuplicateColumn(String),
    SchemaMismatch,
    ValidationError(String),
    Other(String),
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DataError::ColumnNotFound(name) => write!(f, "Column '{}' not found", name),
            DataError::DuplicateColumn(name) => write!(f, "Duplicate column name '{}'", name),
            DataError::SchemaMismatch => write!(f, "Schema mismatch"),
            DataError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            DataError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl Error for DataError {}
