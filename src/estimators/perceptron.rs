use ndarray::{Array1, ArrayBase, ArrayView1, Data, Ix1, Ix2};

use super::error::{EstimatorError, Result};
use super::hyperparams::{PerceptronParams, PerceptronValidParams};
use super::traits::{Fit, NetInput, Predict};
use crate::datasets::{DatasetBase, DesignMatrix, Targets};
use crate::helpers::linalg::{linear_score, linear_scores};
use crate::pla::{perceptron_learning, threshold};
use crate::Float;

/// The Perceptron classifier
///
/// A binary linear classifier separating samples labeled `-1` from samples
/// labeled `+1` with the hyperplane `w.x + b = 0`. The weights and bias are
/// learned with the classical, mistake-driven Perceptron rule.
///
/// An instance only exists once fitted: use [`Perceptron::params`] to
/// configure the training, then [`Fit::fit`] to obtain the model.
#[derive(Debug, Clone, PartialEq)]
pub struct Perceptron<F> {
    weights: Array1<F>,
    bias: F,
    errors: Vec<usize>,
    params: PerceptronValidParams<F>,
}

impl<F: Float> Perceptron<F> {
    /// This method instantiates the hyperparameters of a Perceptron with
    /// default values.
    pub fn params() -> PerceptronParams<F> {
        PerceptronParams::new()
    }

    /// This method is a getter for the weight vector.
    pub fn weights(&self) -> ArrayView1<F> {
        self.weights.view()
    }

    /// This method is a getter for the bias.
    pub fn bias(&self) -> F {
        self.bias
    }

    /// Number of misclassified samples in each epoch of the last training,
    /// in chronological order.
    pub fn errors(&self) -> &[usize] {
        &self.errors
    }

    /// The hyperparameters this model was trained with.
    pub fn hyperparams(&self) -> &PerceptronValidParams<F> {
        &self.params
    }

    pub fn n_features(&self) -> usize {
        self.weights.len()
    }

    /// This method trains the model again from scratch on `dataset`, with the
    /// same hyperparameters. The previous weights, bias and error history are
    /// discarded. On error the model is left untouched.
    pub fn refit<D, T>(&mut self, dataset: &DatasetBase<ArrayBase<D, Ix2>, T>) -> Result<&mut Self>
    where
        D: Data<Elem = F>,
        T: Targets<Elem = F>,
    {
        *self = self.params.fit(dataset)?;
        Ok(self)
    }

    fn check_n_features(&self, found: usize) -> Result<()> {
        if found != self.n_features() {
            return Err(EstimatorError::DimensionMismatch {
                expected: self.n_features(),
                found,
            });
        }
        Ok(())
    }
}

/// Checks that every sample has a target and that targets are `-1` or `+1`.
fn check_dataset<F, DM, T>(dataset: &DatasetBase<DM, T>) -> Result<()>
where
    F: Float,
    DM: DesignMatrix<Elem = F>,
    T: Targets<Elem = F>,
{
    let n_samples = dataset.design_matrix().n_samples();
    let n_targets = dataset.targets().n_samples();
    if n_samples != n_targets {
        return Err(EstimatorError::SampleMismatch {
            n_samples,
            n_targets,
        });
    }
    if let Some((index, label)) = dataset.targets().first_invalid_label() {
        return Err(EstimatorError::InvalidLabel {
            index,
            label: label.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(())
}

/// This implements the Perceptron learning rule for dense design matrices.
impl<F: Float, D: Data<Elem = F>, T: Targets<Elem = F>> Fit<ArrayBase<D, Ix2>, T, EstimatorError>
    for PerceptronValidParams<F>
{
    /// If successful, the output of the training loop is a [`Perceptron`]
    /// holding the learned weights, bias and per-epoch error counts.
    type Object = Perceptron<F>;

    /// This method fits a [`Perceptron`] instance to a dataset with a dense
    /// design matrix. The dataset is validated before any training starts.
    fn fit(&self, dataset: &DatasetBase<ArrayBase<D, Ix2>, T>) -> Result<Self::Object> {
        check_dataset(dataset)?;

        let (weights, bias, errors) = perceptron_learning(
            dataset.design_matrix().view(),
            dataset.targets().as_targets(),
            self.eta(),
            self.max_iter(),
            self.random_state(),
            self.verbose(),
        );
        Ok(Perceptron {
            weights,
            bias,
            errors,
            params: self.clone(),
        })
    }
}

impl<F: Float, S: Data<Elem = F>> NetInput<ArrayBase<S, Ix1>> for Perceptron<F> {
    type Output = F;

    /// Computes `w.x + b` for a single sample.
    fn net_input(&self, x: &ArrayBase<S, Ix1>) -> Result<F> {
        self.check_n_features(x.len())?;
        Ok(linear_score(x.view(), self.weights.view(), self.bias))
    }
}

impl<F: Float, S: Data<Elem = F>> NetInput<ArrayBase<S, Ix2>> for Perceptron<F> {
    type Output = Array1<F>;

    /// Computes `Xw + b`, one score per row of `X`.
    fn net_input(&self, X: &ArrayBase<S, Ix2>) -> Result<Array1<F>> {
        self.check_n_features(X.n_features())?;
        Ok(linear_scores(X.view(), self.weights.view(), self.bias))
    }
}

impl<F: Float, S: Data<Elem = F>> Predict<ArrayBase<S, Ix1>> for Perceptron<F> {
    type Output = F;

    fn predict(&self, x: &ArrayBase<S, Ix1>) -> Result<F> {
        Ok(threshold(self.net_input(x)?))
    }
}

impl<F: Float, S: Data<Elem = F>> Predict<ArrayBase<S, Ix2>> for Perceptron<F> {
    type Output = Array1<F>;

    fn predict(&self, X: &ArrayBase<S, Ix2>) -> Result<Array1<F>> {
        Ok(self.net_input(X)?.mapv(threshold))
    }
}
