
/// This module gathers the few linear-algebra primitives the estimators rely
/// on, so that the training loop never talks to `ndarray` directly.
pub mod linalg {
    use crate::Float;
    use ndarray::{Array1, ArrayView1, ArrayView2};

    /// Inner product of a single sample with a weight vector.
    pub fn dot<F: 'static + Float>(x: ArrayView1<F>, w: ArrayView1<F>) -> F {
        x.dot(&w)
    }

    /// In-place `w += alpha * x`.
    pub fn scaled_add<F: 'static + Float>(w: &mut Array1<F>, alpha: F, x: ArrayView1<F>) {
        w.scaled_add(alpha, &x);
    }

    /// The affine score `w.x + b` of a single sample.
    pub fn linear_score<F: 'static + Float>(x: ArrayView1<F>, w: ArrayView1<F>, b: F) -> F {
        dot(x, w) + b
    }

    /// The affine scores `Xw + b` of a batch of samples, one per row of `X`.
    pub fn linear_scores<F: 'static + Float>(
        X: ArrayView2<F>,
        w: ArrayView1<F>,
        b: F,
    ) -> Array1<F> {
        X.dot(&w) + b
    }
}

/// This module owns the random number generation used to initialize model
/// parameters. Every generator is created from an explicit seed and handed
/// around by mutable reference: no process-wide state is involved.
pub mod random {
    use crate::Float;
    use ndarray::Array1;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rand_distr::{Distribution, StandardNormal};

    /// Creates a deterministic generator from an integer seed.
    pub fn seeded_rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    /// Draws `len` independent samples from a standard normal distribution
    /// (mean 0, variance 1).
    pub fn standard_normal_vector<F: Float, R: Rng + ?Sized>(len: usize, rng: &mut R) -> Array1<F> {
        Array1::from_iter((0..len).map(|_| {
            let sample: f64 = StandardNormal.sample(&mut *rng);
            F::cast(sample)
        }))
    }
}

/// This module contains helpers functions to efficiently write tests.
pub mod test_helpers {
    use crate::Float;
    use approx::AbsDiffEq;
    use ndarray::{Array1, Array2, ArrayView1};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_distr::{Distribution, Normal};

    pub fn assert_array_all_close<F>(x: ArrayView1<F>, y: ArrayView1<F>, delta: F)
    where
        F: Float + AbsDiffEq<Epsilon = F>,
    {
        assert_eq!(x.len(), y.len());
        for i in 0..x.len() {
            if x[i].abs_diff_ne(&y[i], delta) {
                panic!("x: {}, y: {} ; with precision level {}", x[i], y[i], delta);
            }
        }
    }

    /// Generates two well-separated gaussian blobs. Samples alternate between
    /// the negative class, centered at `-2` on every feature, and the positive
    /// class, centered at `+2`. The noise has a standard deviation of `0.5`.
    pub fn generate_separable_data(
        n_samples: usize,
        n_features: usize,
        seed: u64,
    ) -> (Array2<f64>, Array1<f64>) {
        let mut r = StdRng::seed_from_u64(seed);
        let noise = Normal::new(0., 0.5).unwrap();

        let y = Array1::from_iter((0..n_samples).map(|i| if i % 2 == 0 { -1. } else { 1. }));
        let X = Array2::from_shape_fn((n_samples, n_features), |(i, _)| {
            2. * y[i] + noise.sample(&mut r)
        });

        (X, y)
    }
}
