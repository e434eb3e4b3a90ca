//! The Perceptron Learning Algorithm (PLA): an online, mistake-driven update
//! rule fitting a separating hyperplane `w.x + b = 0` to binary targets in
//! `{-1, +1}`.

use ndarray::{Array1, ArrayView1, ArrayView2};

use crate::helpers::linalg::{linear_score, scaled_add};
use crate::helpers::random::{seeded_rng, standard_normal_vector};
use crate::Float;

#[cfg(test)]
mod tests;

/// Hard threshold applied to a net input: `+1` when the score is
/// non-negative, `-1` otherwise.
pub fn threshold<F: Float>(score: F) -> F {
    if score >= F::zero() {
        F::one()
    } else {
        -F::one()
    }
}

/// This function runs one full pass over the samples, in the order they are
/// stored, and applies the update `eta * (target - prediction)` to the
/// weights (scaled by the sample) and to the bias. It returns the number of
/// samples that produced a nonzero update.
pub fn perceptron_epoch<F: Float>(
    X: ArrayView2<F>,
    y: ArrayView1<F>,
    w: &mut Array1<F>,
    b: &mut F,
    eta: F,
) -> usize {
    let mut n_mistakes = 0;
    for (xi, &target) in X.rows().into_iter().zip(y.iter()) {
        let prediction = threshold(linear_score(xi, w.view(), *b));
        let update = eta * (target - prediction);

        scaled_add(w, update, xi);
        *b += update;

        if update != F::zero() {
            n_mistakes += 1;
        }
    }
    n_mistakes
}

/// Progress line printed after each epoch when training is verbose. `epoch`
/// is zero-based.
pub fn epoch_report(epoch: usize, n_mistakes: usize) -> String {
    format!("Epoch {}, {} misclassified samples.", epoch + 1, n_mistakes)
}

/// This is the training routine of the [`Perceptron`](crate::estimators::perceptron::Perceptron).
/// The weights are drawn from a standard normal distribution using a generator
/// seeded with `random_state`, the bias starts at zero, and exactly
/// `max_iter` epochs are run. There is no early stopping: the returned error
/// history always holds `max_iter` entries.
pub fn perceptron_learning<F: Float>(
    X: ArrayView2<F>,
    y: ArrayView1<F>,
    eta: F,
    max_iter: usize,
    random_state: u64,
    verbose: bool,
) -> (Array1<F>, F, Vec<usize>) {
    let mut rng = seeded_rng(random_state);
    let mut w = standard_normal_vector(X.ncols(), &mut rng);
    let mut b = F::zero();
    let mut errors = Vec::with_capacity(max_iter);

    for epoch in 0..max_iter {
        let n_mistakes = perceptron_epoch(X, y, &mut w, &mut b, eta);
        if verbose {
            println!("{}", epoch_report(epoch, n_mistakes));
        }
        errors.push(n_mistakes);
    }

    if verbose {
        let last = errors.last().copied().unwrap_or(0);
        println!(
            "Ran {} epochs over {} samples, {} mistakes in the last epoch.",
            max_iter,
            X.nrows(),
            last
        );
    }

    (w, b, errors)
}
