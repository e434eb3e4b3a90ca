use thiserror::Error;

/// Simplified `Result` using [`EstimatorError`] as error type
pub type Result<T> = std::result::Result<T, EstimatorError>;

/// Error variants from hyperparameter checking, model estimation or prediction
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimatorError {
    /// The learning rate is NaN or infinite
    #[error("invalid learning rate {0}")]
    InvalidLearningRate(f32),
    #[error("expected {expected} features, got {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("the design matrix has {n_samples} samples but {n_targets} targets were given")]
    SampleMismatch { n_samples: usize, n_targets: usize },
    /// A target is neither `-1` nor `+1`
    #[error("invalid label {label} at index {index}, expected -1 or +1")]
    InvalidLabel { index: usize, label: f64 },
}
