// Utility module for errors, logging and validation

mod error;
mod logging;
mod validation;

pub use error::*;
pub use logging::*;
pub use validation::*;
