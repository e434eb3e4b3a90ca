
pub mod error;
pub mod hyperparams;
pub mod param_guard;
pub mod perceptron;
pub mod traits;
