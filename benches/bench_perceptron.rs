use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use perceptron::datasets::DatasetBase;
use perceptron::estimators::{perceptron::Perceptron, traits::Fit};
use perceptron::helpers::test_helpers::generate_separable_data;

fn bench_perceptron(c: &mut Criterion) {
    let mut group = c.benchmark_group("perceptron");
    group.sample_size(10);

    for n_samples in [100, 1000] {
        for n_features in [10, 100] {
            for max_iter in [10, 100] {
                let (x, y) = generate_separable_data(n_samples, n_features, 0);
                let dataset = DatasetBase::from((x, y));

                let clf = Perceptron::params().eta(0.01).max_iter(max_iter);
                let config = (n_samples, n_features, max_iter);
                let config_string = format!("{}, {}, {}", n_samples, n_features, max_iter);

                group.bench_with_input(
                    BenchmarkId::new("fit", config_string),
                    &config,
                    |b, _| b.iter(|| clf.fit(&dataset).unwrap()),
                );
            }
        }
    }

    group.finish();
}

criterion_group!(benches, bench_perceptron);
criterion_main!(benches);
