// Simple preprocessing pipeline example

use log::{info, LevelFilter};

use rust_preprocessing_pipeline::{
    data::{DataType, Field, Row, Schema, Table, Value},
    preprocessing::{
        ColumnDropper, NullRowDropper, OneHotEncoderStage, Pipeline, StandardScalerStage,
    },
    utils::{init_logging, AppResult},
};

fn main() -> AppResult<()> {
    let _ = init_logging(LevelFilter::Info);

    // Create a table
    let schema = Schema::new(vec![
        Field::new("id".to_string(), DataType::Integer, false),
        Field::new("color".to_string(), DataType::String, true),
        Field::new("price".to_string(), DataType::Float, false),
    ]);

    let mut table = Table::new(schema)?;

    table.add_row(Row::new(vec![
        Value::Integer(1),
        Value::String("red".to_string()),
        Value::Float(75.0),
    ]))?;

    table.add_row(Row::new(vec![
        Value::Integer(2),
        Value::String("blue".to_string()),
        Value::Float(65.0),
    ]))?;

    table.add_row(Row::new(vec![
        Value::Integer(3),
        Value::Null,
        Value::Float(85.0),
    ]))?;

    table.add_row(Row::new(vec![
        Value::Integer(4),
        Value::String("green".to_string()),
        Value::Float(70.0),
    ]))?;

    // Print original table
    println!("Original table:");
    print_table(&table);

    // Create a pipeline
    let mut pipeline = Pipeline::new("example")
        // Drop rows with a missing color
        .add(NullRowDropper::new(vec!["color".to_string()]))
        // Drop the id column
        .add(ColumnDropper::new(vec!["id".to_string()]))
        // Expand color into indicator columns
        .add(OneHotEncoderStage::new(vec!["color".to_string()]))
        // Standardize the price column
        .add(StandardScalerStage::new(vec!["price".to_string()]));

    // Fit the pipeline and transform the table
    let result = pipeline.fit_transform(table)?;
    info!("Pipeline produced {} rows", result.len());

    // Print result
    println!("\nPreprocessed table:");
    print_table(&result);

    Ok(())
}

// Helper function to print a table
fn print_table(table: &Table) {
    // Print header
    for (i, field) in table.schema.fields.iter().enumerate() {
        if i > 0 {
            print!(" | ");
        }
        print!("{}", field.name);
    }
    println!();

    // Print separator
    for i in 0..table.schema.fields.len() {
        if i > 0 {
            print!("-+-");
        }
        print!("----");
    }
    println!();

    // Print rows
    for row in &table.data {
        for (i, value) in row.values.iter().enumerate() {
            if i > 0 {
                print!(" | ");
            }
            match value {
                Value::Null => print!("NULL"),
                Value::Boolean(b) => print!("{}", b),
                Value::Integer(n) => print!("{}", n),
                Value::Float(f) => print!("{:.2}", f),
                Value::String(s) => print!("{}", s),
            }
        }
        println!();
    }
}
