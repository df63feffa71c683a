//! Multi-dimensional histograms, specialized at construction time.
//!
//! A histogram is composed of three independent strategies:
//!
//! - a bin type ([`bins`]): fixed-width, variable-width, or unbounded-width (one bin per distinct string)
//! - a bin search algorithm ([`search`]): how the bin of a value is found
//! - a parallelization scheme ([`parallel`]): how bin updates are distributed over private partitions
//!
//! The typed histograms, [`NumericHistogram`] and [`TextHistogram`], fix the strategies in their type, so the update
//! loop is specialized for each combination. [`create_fast_histogram`] selects a combination at runtime instead,
//! rejecting incompatible selections, and returns a [`FastHistogram`].
//!
//! # Example
//!
//! ```
//! use fast_histograms::{
//!     bins::{AxisConfiguration, BinType},
//!     create_fast_histogram,
//!     parallel::HistogramParallelization,
//!     search::BinSearchAlgorithm,
//! };
//!
//! let mut histogram = create_fast_histogram(
//!     BinType::FixedWidth,
//!     BinSearchAlgorithm::Arithmetic,
//!     HistogramParallelization::private_threads(2),
//!     2,
//!     &[
//!         AxisConfiguration::fixed_width(0.0, 255.0, 4),
//!         AxisConfiguration::fixed_width(0.0, 255.0, 4),
//!     ],
//! )
//! .unwrap();
//!
//! let red: &[u8] = &[0, 0, 255, 100];
//! let green: &[u8] = &[0, 255, 255, 200];
//! histogram.increment_bins(&[red, green]).unwrap();
//!
//! assert_eq!(histogram.counts().total(), 4);
//! ```
#![deny(warnings)]
#![deny(missing_docs)]

pub mod bins;
pub mod collections;
pub mod config;
pub mod error;
pub mod hash;
pub mod histogram;
pub mod parallel;
pub mod sample;
pub mod search;
pub mod store;

pub use self::config::{ConfigurationLoader, HistogramConfiguration};
pub use self::error::HistogramError;
pub use self::histogram::{create_fast_histogram, Counts, FastHistogram, NumericHistogram, TextHistogram};
