// Numeric standardization of a single column

use crate::data::Value;

use super::EncodeError;

/// Zero-mean, unit-variance standardizer for one numeric column.
///
/// The standard deviation is the population one (denominator n). A constant
/// column gets a scale of 1 so its values map to 0 instead of dividing by
/// zero.
pub struct StandardScaler {
    column: String,
    fitted: Option<(f64, f64)>, // (mean, scale)
}

impl StandardScaler {
    /// Create a new unfitted scaler for the given column
    pub fn new(column: &str) -> Self {
        StandardScaler {
            column: column.to_string(),
            fitted: None,
        }
    }

    /// Get the name of the scaled column
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Compute the column's mean and standard deviation
    pub fn fit(&mut self, values: &[Value]) -> Result<(), EncodeError> {
        let numeric = self.numeric_values(values)?;

        if numeric.is_empty() {
            return Err(EncodeError::EmptyColumn(self.column.clone()));
        }

        let n = numeric.len() as f64;
        let mean = numeric.iter().sum::<f64>() / n;
        let variance = numeric.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let std = variance.sqrt();

        let scale = if std == 0.0 { 1.0 } else { std };
        self.fitted = Some((mean, scale));

        Ok(())
    }

    /// Standardize the column values
    pub fn transform(&self, values: &[Value]) -> Result<Vec<f64>, EncodeError> {
        let (mean, scale) = self
            .fitted
            .ok_or_else(|| EncodeError::NotFitted(self.column.clone()))?;

        let numeric = self.numeric_values(values)?;
        Ok(numeric.iter().map(|v| (v - mean) / scale).collect())
    }

    /// Get the fitted mean
    pub fn mean(&self) -> Option<f64> {
        self.fitted.map(|(mean, _)| mean)
    }

    /// Get the fitted scale
    pub fn scale(&self) -> Option<f64> {
        self.fitted.map(|(_, scale)| scale)
    }

    fn numeric_values(&self, values: &[Value]) -> Result<Vec<f64>, EncodeError> {
        values
            .iter()
            .map(|value| {
                value.as_f64().ok_or_else(|| EncodeError::NonNumeric {
                    column: self.column.clone(),
                    value: value.to_string(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn float_column(values: &[f64]) -> Vec<Value> {
        values.iter().map(|v| Value::Float(*v)).collect()
    }

    #[test]
    fn test_standardized_column_has_zero_mean_unit_std() {
        let values = float_column(&[1.0, 2.0, 3.0, 4.0, 5.0]);

        let mut scaler = StandardScaler::new("x");
        scaler.fit(&values).unwrap();

        let scaled = scaler.transform(&values).unwrap();

        let n = scaled.len() as f64;
        let mean = scaled.iter().sum::<f64>() / n;
        let std = (scaled.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n).sqrt();

        assert!(mean.abs() < 1e-12);
        assert!((std - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_integer_values_are_scaled_as_floats() {
        let values = vec![Value::Integer(0), Value::Integer(10)];

        let mut scaler = StandardScaler::new("x");
        scaler.fit(&values).unwrap();

        assert_eq!(scaler.mean(), Some(5.0));
        assert_eq!(scaler.scale(), Some(5.0));

        let scaled = scaler.transform(&values).unwrap();
        assert_eq!(scaled, vec![-1.0, 1.0]);
    }

    #[test]
    fn test_constant_column_maps_to_zero() {
        let values = float_column(&[3.0, 3.0, 3.0]);

        let mut scaler = StandardScaler::new("x");
        scaler.fit(&values).unwrap();

        assert_eq!(scaler.scale(), Some(1.0));
        assert_eq!(scaler.transform(&values).unwrap(), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_null_value_is_an_error() {
        let mut scaler = StandardScaler::new("x");
        let result = scaler.fit(&[Value::Float(1.0), Value::Null]);

        assert!(matches!(result, Err(EncodeError::NonNumeric { .. })));
    }
}
