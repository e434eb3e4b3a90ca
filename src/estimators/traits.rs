use super::error::Result;
use crate::datasets::{DatasetBase, DesignMatrix, Targets};

/// Fit trait
///
/// The fittable trait allows an estimator to be fitted to a dataset (a combination
/// of design matrix and targets). The output is a trained model holding the
/// learned parameters.
pub trait Fit<DM: DesignMatrix, T: Targets, E: std::error::Error> {
    type Object;

    fn fit(&self, dataset: &DatasetBase<DM, T>) -> std::result::Result<Self::Object, E>;
}

/// Raw, pre-threshold score of a trained linear model.
///
/// Implemented for single samples (one-dimensional arrays, scalar output) and
/// for batches (two-dimensional arrays, one score per row).
pub trait NetInput<X> {
    type Output;

    fn net_input(&self, x: &X) -> Result<Self::Output>;
}

/// Class labels predicted by a trained classifier, following the same
/// single-sample / batch convention as [`NetInput`].
pub trait Predict<X> {
    type Output;

    fn predict(&self, x: &X) -> Result<Self::Output>;
}
