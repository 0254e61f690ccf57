use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("time step must be finite and non-negative, got {0}")]
    InvalidTimeStep(f32),
}
