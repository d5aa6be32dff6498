#[derive(thiserror::Error, Debug, PartialEq)]
pub enum EmissionsError {
    #[error("distance must be a finite, non-negative number of kilometers, found {0}")]
    InvalidDistance(f64),
    #[error("emissions factor for mode '{mode}' must be finite and non-negative, found {value}")]
    InvalidFactor { mode: String, value: f64 },
    #[error("emissions must be a finite number of grams, found {0}")]
    InvalidEmissions(f64),
    #[error("max emissions must be finite and greater than zero, found {0}")]
    InvalidMaxEmissions(f64),
}
