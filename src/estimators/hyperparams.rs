use super::error::{EstimatorError, Result};
use super::param_guard::ParamGuard;
use crate::Float;

/// A verified hyperparameter set ready for the fitting of a Perceptron
#[derive(Debug, Clone, PartialEq)]
pub struct PerceptronValidParams<F> {
    eta: F,
    max_iter: usize,
    random_state: u64,
    verbose: bool,
}

impl<F: Float> PerceptronValidParams<F> {
    pub fn eta(&self) -> F {
        self.eta
    }

    pub fn max_iter(&self) -> usize {
        self.max_iter
    }

    pub fn random_state(&self) -> u64 {
        self.random_state
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

/// A hyper-parameter set during construction
///
/// Configures the classical Perceptron learning rule. For every sample `xi`
/// with target `yi` in `{-1, +1}`, each of the `max_iter` epochs applies:
/// ```ignore
/// update = eta * (yi - predict(xi))
/// w += update * xi
/// b += update
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PerceptronParams<F>(PerceptronValidParams<F>);

impl<F: Float> Default for PerceptronParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configure and fit a Perceptron model
impl<F: Float> PerceptronParams<F> {
    /// Create default Perceptron hyper parameters
    pub fn new() -> PerceptronParams<F> {
        Self(PerceptronValidParams {
            eta: F::cast(0.01),
            max_iter: 1000,
            random_state: 1,
            verbose: false,
        })
    }

    /// Set the learning rate scaling every weight and bias update.
    ///
    /// Defaults to `0.01` if not set.
    pub fn eta(mut self, eta: F) -> Self {
        self.0.eta = eta;
        self
    }

    /// Set the number of full passes over the training set. Training always
    /// runs this many epochs.
    /// Defaults to `1000` if not set.
    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.0.max_iter = max_iter;
        self
    }

    /// Set the seed of the generator drawing the initial weights.
    ///
    /// Defaults to `1` if not set.
    pub fn random_state(mut self, random_state: u64) -> Self {
        self.0.random_state = random_state;
        self
    }

    /// Prints the number of misclassified samples after every epoch.
    ///
    /// Defaults to `false` if not set.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.0.verbose = verbose;
        self
    }
}

impl<F: Float> ParamGuard for PerceptronParams<F> {
    type Checked = PerceptronValidParams<F>;
    type Error = EstimatorError;

    /// Validate the hyper parameters
    fn check_ref(&self) -> Result<&Self::Checked> {
        if !self.0.eta.is_finite() {
            Err(EstimatorError::InvalidLearningRate(
                self.0.eta.to_f32().unwrap_or(f32::NAN),
            ))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}
