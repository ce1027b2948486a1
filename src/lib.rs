// Rust Preprocessing Pipeline

//! # Rust Preprocessing Pipeline
//!
//! A tabular data preprocessing pipeline written in Rust.
//!
//! ## Features
//!
//! - Wrapping raw numeric arrays into labeled tables
//! - Dropping columns and rows with missing values
//! - Ordinal and one-hot encoding of categorical columns
//! - Standardization of numeric columns
//! - Chaining stages into a fit/transform pipeline
//!
//! ## Example
//!
//! ```rust
//! use rust_preprocessing_pipeline::{
//!     data::{DataType, Field, Row, Schema, Table, Value},
//!     preprocessing::{ColumnDropper, OneHotEncoderStage, Pipeline, StandardScalerStage},
//! };
//!
//! // Create a table
//! let schema = Schema::new(vec![
//!     Field::new("id".to_string(), DataType::Integer, false),
//!     Field::new("color".to_string(), DataType::String, false),
//!     Field::new("price".to_string(), DataType::Float, false),
//! ]);
//!
//! let mut table = Table::new(schema).unwrap();
//!
//! table.add_row(Row::new(vec![
//!     Value::Integer(1),
//!     Value::String("red".to_string()),
//!     Value::Float(10.0),
//! ])).unwrap();
//!
//! table.add_row(Row::new(vec![
//!     Value::Integer(2),
//!     Value::String("blue".to_string()),
//!     Value::Float(20.0),
//! ])).unwrap();
//!
//! // Create a pipeline
//! let mut pipeline = Pipeline::new("example")
//!     .add(ColumnDropper::new(vec!["id".to_string()]))
//!     .add(OneHotEncoderStage::new(vec!["color".to_string()]))
//!     .add(StandardScalerStage::new(vec!["price".to_string()]));
//!
//! // Fit the pipeline and transform the table
//! let result = pipeline.fit_transform(table).unwrap();
//!
//! assert_eq!(
//!     result.schema.column_names(),
//!     vec!["price", "color_blue", "color_red"],
//! );
//! assert_eq!(result.data[0].values[2], Value::Integer(1));
//! ```

pub mod data;
pub mod encoders;
pub mod preprocessing;
pub mod utils;

// Re-export main types
pub use data::{DataType, Field, Row, Schema, Table, Value};
pub use preprocessing::{Pipeline, PipelineStage, StageError};
pub use utils::{init_logging, AppError, AppResult};
