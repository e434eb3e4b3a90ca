use ndarray::{array, Array1};

use crate::helpers::random::{seeded_rng, standard_normal_vector};
use crate::helpers::test_helpers::*;
use crate::pla::*;

#[test]
fn test_threshold() {
    assert_eq!(threshold(0.), 1.);
    assert_eq!(threshold(3.2), 1.);
    assert_eq!(threshold(-1e-12), -1.);
    assert_eq!(threshold(-0.), 1.);
    assert_eq!(threshold(f64::NAN), -1.);
}

#[test]
fn test_perceptron_epoch_misclassified() {
    let X = array![[2., -1.]];
    let y = array![-1.];
    let mut w = array![1., 1.];
    let mut b: f64 = 0.;

    // w.x + b = 1 >= 0, so the sample is predicted +1 instead of -1.
    let n_mistakes = perceptron_epoch(X.view(), y.view(), &mut w, &mut b, 0.1);

    assert_eq!(n_mistakes, 1);
    assert_array_all_close(w.view(), array![0.6, 1.2].view(), 1e-12);
    assert!((b + 0.2).abs() < 1e-12);
}

#[test]
fn test_perceptron_epoch_correct() {
    let X = array![[2., -1.], [-3., 0.5]];
    let y = array![1., -1.];
    let mut w = array![1., 1.];
    let mut b: f64 = 0.;

    let n_mistakes = perceptron_epoch(X.view(), y.view(), &mut w, &mut b, 0.1);

    assert_eq!(n_mistakes, 0);
    assert_eq!(w, array![1., 1.]);
    assert_eq!(b, 0.);
}

#[test]
fn test_perceptron_epoch_processes_in_order() {
    // The first sample flips the bias, which changes the prediction of the
    // second one.
    let X = array![[0., 0.], [0., 0.]];
    let y = array![-1., -1.];
    let mut w = array![0., 0.];
    let mut b: f64 = 0.;

    let n_mistakes = perceptron_epoch(X.view(), y.view(), &mut w, &mut b, 0.5);

    assert_eq!(n_mistakes, 1);
    assert_eq!(b, -1.);
}

#[test]
fn test_perceptron_epoch_zero_eta() {
    let X = array![[1., 1.], [-1., -1.]];
    let y = array![-1., 1.];
    let mut w = array![1., 1.];
    let mut b: f64 = 0.;

    let n_mistakes = perceptron_epoch(X.view(), y.view(), &mut w, &mut b, 0.);

    assert_eq!(n_mistakes, 0);
    assert_eq!(w, array![1., 1.]);
}

#[test]
fn test_perceptron_learning_initialization() {
    let X = array![[1., 2., 3.], [4., 5., 6.]];
    let y = array![-1., 1.];

    let (w, b, errors) = perceptron_learning(X.view(), y.view(), 0.01, 0, 7, false);

    let mut rng = seeded_rng(7);
    let w0: Array1<f64> = standard_normal_vector(3, &mut rng);
    assert_eq!(w, w0);
    assert_eq!(b, 0.);
    assert!(errors.is_empty());
}

#[test]
fn test_perceptron_learning_history() {
    let (X, y) = generate_separable_data(20, 2, 3);

    let (w, _, errors) = perceptron_learning(X.view(), y.view(), 0.01, 25, 1, false);

    assert_eq!(w.len(), 2);
    assert_eq!(errors.len(), 25);
    assert!(errors.iter().all(|&e| e <= 20));
}

#[test]
fn test_epoch_report() {
    assert_eq!(epoch_report(0, 3), "Epoch 1, 3 misclassified samples.");
    assert_eq!(epoch_report(41, 0), "Epoch 42, 0 misclassified samples.");
}

#[test]
fn test_perceptron_learning_verbose_matches_quiet() {
    let (X, y) = generate_separable_data(10, 2, 4);

    let quiet = perceptron_learning(X.view(), y.view(), 0.1, 6, 2, false);
    let verbose = perceptron_learning(X.view(), y.view(), 0.1, 6, 2, true);

    assert_eq!(quiet.0, verbose.0);
    assert_eq!(quiet.1.to_bits(), verbose.1.to_bits());
    assert_eq!(quiet.2, verbose.2);
}
