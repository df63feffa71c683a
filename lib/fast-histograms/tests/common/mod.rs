#![allow(dead_code)]

use fast_histograms::{
    bins::{AxisConfiguration, BinType},
    create_fast_histogram,
    parallel::HistogramParallelization,
    search::BinSearchAlgorithm,
    FastHistogram,
};
use rand::{Rng as _, SeedableRng};
use rand_distr::{Distribution, Normal, Pareto};

pub const SEED: u64 = 0xC0FFEE;

/// Every parallelization scheme, with a spread of partition counts.
pub fn schemes() -> Vec<HistogramParallelization> {
    let mut schemes = vec![HistogramParallelization::NoParallelization];
    for partitions in [1, 2, 3, 7, 16] {
        schemes.push(HistogramParallelization::private_threads(partitions));
        schemes.push(HistogramParallelization::simd(partitions));
    }
    schemes.push(HistogramParallelization::PrivateThreads { partitions: None });
    schemes.push(HistogramParallelization::Simd { partitions: None });
    schemes
}

/// Installs a test subscriber so that histogram logs show up in failing test output.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Generates normally distributed points centered in `[0, 100]`, with a fair share falling outside of it.
pub fn make_points(size: usize, seed: u64) -> Vec<f64> {
    let distribution = Normal::new(50.0, 30.0).expect("normal distribution should be valid");
    let mut rng = rand::rngs::SmallRng::seed_from_u64(seed);
    distribution.sample_iter(&mut rng).take(size).collect()
}

/// Generates uniformly distributed bytes, like the channel of an 8-bit image.
pub fn make_bytes(size: usize, seed: u64) -> Vec<u8> {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random()).collect()
}

/// Generates words from a small vocabulary, with a long-tailed frequency distribution.
pub fn make_words(size: usize, seed: u64) -> Vec<String> {
    let distribution = Pareto::new(1.0, 1.5).expect("pareto distribution should be valid");
    let mut rng = rand::rngs::SmallRng::seed_from_u64(seed);
    distribution
        .sample_iter(&mut rng)
        .take(size)
        .map(|n: f64| format!("word-{}", (n as usize).min(64)))
        .collect()
}

pub fn fixed_width(parallelization: HistogramParallelization, axes: &[AxisConfiguration]) -> FastHistogram {
    create_fast_histogram(
        BinType::FixedWidth,
        BinSearchAlgorithm::Arithmetic,
        parallelization,
        axes.len(),
        axes,
    )
    .expect("fixed-width histogram should be valid")
}

pub fn variable_width(parallelization: HistogramParallelization, axes: &[AxisConfiguration]) -> FastHistogram {
    create_fast_histogram(
        BinType::VariableWidth,
        BinSearchAlgorithm::BinarySearch,
        parallelization,
        axes.len(),
        axes,
    )
    .expect("variable-width histogram should be valid")
}

pub fn unbounded_width(parallelization: HistogramParallelization) -> FastHistogram {
    create_fast_histogram(
        BinType::UnboundedWidth,
        BinSearchAlgorithm::HashFunction,
        parallelization,
        1,
        &[],
    )
    .expect("unbounded-width histogram should be valid")
}
