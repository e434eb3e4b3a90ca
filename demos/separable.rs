extern crate perceptron;

use ndarray::array;
use perceptron::{
    datasets::DatasetBase,
    estimators::{
        perceptron::Perceptron,
        traits::{Fit, NetInput, Predict},
    },
};

fn main() {
    let x = array![[0., 0.], [1., 0.], [5., 5.], [6., 5.]];
    let y = array![-1., -1., 1., 1.];
    let dataset = DatasetBase::from((x, y));

    let mut model = Perceptron::params()
        .eta(0.1)
        .max_iter(50)
        .verbose(true)
        .fit(&dataset)
        .unwrap();

    println!("weights: {}", model.weights());
    println!("bias: {}", model.bias());
    println!("scores: {}", model.net_input(&array![[0.5, 0.5], [5.5, 5.]]).unwrap());
    println!("labels: {}", model.predict(&array![[0.5, 0.5], [5.5, 5.]]).unwrap());

    // Training again on a shifted dataset discards the previous parameters.
    let shifted = DatasetBase::from((array![[0., 0.], [4., 4.]], array![-1., 1.]));
    let n_epochs = model.refit(&shifted).unwrap().errors().len();
    assert_eq!(n_epochs, 50);
    assert_eq!(model.predict(&array![4., 4.]).unwrap(), 1.);
}
