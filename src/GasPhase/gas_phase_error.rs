use thiserror::Error;

/// error types for the gas-phase model: parameter/grid setup, input validation and task-file loading
#[derive(Debug, Error)]
pub enum GasPhaseError {
    #[error("Numerical domain error: {quantity} = {value} in cell {cell} is outside its physical domain")]
    NumericalDomain {
        quantity: String,
        cell: usize,
        value: f64,
    },
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Dimension mismatch for {name}: expected length {expected}, found {found}")]
    DimensionMismatch {
        name: String,
        expected: usize,
        found: usize,
    },
    #[error("Missing data: {0}")]
    MissingData(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// every entry of `values` must be finite and strictly positive
pub fn check_positive(quantity: &str, values: &[f64]) -> Result<(), GasPhaseError> {
    for (cell, &value) in values.iter().enumerate() {
        if !(value > 0.0) || !value.is_finite() {
            return Err(GasPhaseError::NumericalDomain {
                quantity: quantity.to_string(),
                cell,
                value,
            });
        }
    }
    Ok(())
}

/// every entry of `values` must be finite and non-negative (species that are absent from the feed start at zero)
pub fn check_non_negative(quantity: &str, values: &[f64]) -> Result<(), GasPhaseError> {
    for (cell, &value) in values.iter().enumerate() {
        if !(value >= 0.0) || !value.is_finite() {
            return Err(GasPhaseError::NumericalDomain {
                quantity: quantity.to_string(),
                cell,
                value,
            });
        }
    }
    Ok(())
}

/// every entry of `values` must be finite (any sign)
pub fn check_finite(quantity: &str, values: &[f64]) -> Result<(), GasPhaseError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(cell) => Err(GasPhaseError::NumericalDomain {
            quantity: quantity.to_string(),
            cell,
            value: values[cell],
        }),
        None => Ok(()),
    }
}

pub fn check_len(name: &str, values: &[f64], expected: usize) -> Result<(), GasPhaseError> {
    if values.len() != expected {
        return Err(GasPhaseError::DimensionMismatch {
            name: name.to_string(),
            expected,
            found: values.len(),
        });
    }
    Ok(())
}
