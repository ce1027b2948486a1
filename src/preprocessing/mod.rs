// Preprocessing module for fit/transform pipeline stages

mod drop;
mod onehot;
mod ordinal;
mod scale;
mod wrap;

pub use drop::*;
pub use onehot::*;
pub use ordinal::*;
pub use scale::*;
pub use wrap::*;

use std::error::Error;
use std::fmt;

use log::debug;

use crate::data::{DataError, Table};
use crate::encoders::EncodeError;

/// Represents a preprocessing stage with a two-phase fit/transform lifecycle.
///
/// `fit` learns any stage-specific parameters from a reference table; the
/// fitted state is immutable afterwards, so `transform` takes the stage by
/// shared reference and may be called repeatedly on different tables.
/// `transform` consumes its input and returns the transformed table, making
/// the ownership transfer at each stage boundary explicit.
pub trait PipelineStage {
    /// Learn stage parameters from the input table
    fn fit(&mut self, input: &Table) -> Result<(), StageError>;

    /// Apply the stage to the input table
    fn transform(&self, input: Table) -> Result<Table, StageError>;

    /// Fit on the input table and transform it in one call
    fn fit_transform(&mut self, input: Table) -> Result<Table, StageError> {
        self.fit(&input)?;
        self.transform(input)
    }

    /// Get the stage name
    fn name(&self) -> &str;
}

/// Represents an error in the preprocessing module
#[derive(Debug)]
pub enum StageError {
    Data(DataError),
    Encode(EncodeError),
    NotFitted(String),
    ShapeMismatch(String),
    InvalidArgument(String),
}

impl fmt::Display for StageError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StageError::Data(err) => write!(f, "Data error: {}", err),
            StageError::Encode(err) => write!(f, "Encode error: {}", err),
            StageError::NotFitted(name) => {
                write!(f, "Stage '{}' must be fitted before transform", name)
            }
            StageError::ShapeMismatch(msg) => write!(f, "Shape mismatch: {}", msg),
            StageError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl Error for StageError {}

impl From<DataError> for StageError {
    fn from(err: DataError) -> Self {
        StageError::Data(err)
    }
}

impl From<EncodeError> for StageError {
    fn from(err: EncodeError) -> Self {
        StageError::Encode(err)
    }
}

/// Pipeline for chaining multiple preprocessing stages
pub struct Pipeline {
    name: String,
    stages: Vec<Box<dyn PipelineStage>>,
}

impl Pipeline {
    /// Create a new pipeline with the given name
    pub fn new(name: &str) -> Self {
        Pipeline {
            name: name.to_string(),
            stages: Vec::new(),
        }
    }

    /// Add a stage to the pipeline
    pub fn add<S: PipelineStage + 'static>(mut self, stage: S) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Fit every stage in order, feeding each stage's output to the next
    pub fn fit(&mut self, input: &Table) -> Result<(), StageError> {
        let mut current = input.clone();

        for stage in &mut self.stages {
            debug!("Fitting stage '{}'", stage.name());
            stage.fit(&current)?;
            current = stage.transform(current)?;
        }

        Ok(())
    }

    /// Apply every fitted stage in order
    pub fn transform(&self, input: Table) -> Result<Table, StageError> {
        let mut current = input;

        for stage in &self.stages {
            debug!("Applying stage '{}'", stage.name());
            current = stage.transform(current)?;
        }

        Ok(current)
    }

    /// Fit the pipeline and transform the input in a single pass
    pub fn fit_transform(&mut self, input: Table) -> Result<Table, StageError> {
        let mut current = input;

        for stage in &mut self.stages {
            debug!("Fitting stage '{}'", stage.name());
            current = stage.fit_transform(current)?;
        }

        Ok(current)
    }
}

impl PipelineStage for Pipeline {
    fn fit(&mut self, input: &Table) -> Result<(), StageError> {
        Pipeline::fit(self, input)
    }

    fn transform(&self, input: Table) -> Result<Table, StageError> {
        Pipeline::transform(self, input)
    }

    fn fit_transform(&mut self, input: Table) -> Result<Table, StageError> {
        Pipeline::fit_transform(self, input)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
