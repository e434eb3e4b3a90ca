extern crate ndarray;

use ndarray::ArrayView1;

mod impl_datasets;
mod impl_design_matrix;
mod impl_targets;


/// A training set: a dense design matrix whose rows are samples and a vector
/// of binary targets, one per row.
pub struct DatasetBase<DM, T>
where
    DM: DesignMatrix,
{
    pub design_matrix: DM,
    pub targets: T,
}

pub trait DesignMatrix: Sized {
    type Elem;

    fn n_samples(&self) -> usize;
    fn n_features(&self) -> usize;
}

/// Binary targets encoded as `-1` and `+1`.
pub trait Targets: Sized {
    type Elem;

    fn n_samples(&self) -> usize;
    fn as_targets(&self) -> ArrayView1<Self::Elem>;

    /// Returns the position and value of the first target that is neither
    /// `-1` nor `+1`, if any.
    fn first_invalid_label(&self) -> Option<(usize, Self::Elem)>;
}
