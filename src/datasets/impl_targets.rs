use super::Targets;
use crate::Float;
use ndarray::{ArrayBase, ArrayView1, Axis, Data, Ix1};

impl<F: Float, S: Data<Elem = F>> Targets for ArrayBase<S, Ix1> {
    type Elem = F;

    fn n_samples(&self) -> usize {
        self.len_of(Axis(0))
    }

    fn as_targets(&self) -> ArrayView1<F> {
        self.view()
    }

    fn first_invalid_label(&self) -> Option<(usize, F)> {
        self.iter()
            .enumerate()
            .find(|&(_, &label)| label != F::one() && label != -F::one())
            .map(|(idx, &label)| (idx, label))
    }
}

impl<T: Targets> Targets for &T {
    type Elem = T::Elem;

    fn n_samples(&self) -> usize {
        (*self).n_samples()
    }

    fn as_targets(&self) -> ArrayView1<Self::Elem> {
        (*self).as_targets()
    }

    fn first_invalid_label(&self) -> Option<(usize, Self::Elem)> {
        (*self).first_invalid_label()
    }
}
