//! Histogram configuration.
//!
//! [`HistogramConfiguration`] describes a runtime selection of strategies in a serializable form, and
//! [`ConfigurationLoader`] assembles one from YAML files and environment variables:
//!
//! ```yaml
//! bin_type: fixed_width
//! bin_search: arithmetic
//! parallelization:
//!   type: private_threads
//!   partitions: 4
//! dimensions: 2
//! axes:
//!   - { low: 0.0, high: 255.0, bins: 4 }
//!   - { low: 0.0, high: 255.0, bins: 16 }
//! ```

use std::path::Path;

use figment::{
    providers::{Env, Format as _, Yaml},
    Figment,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use snafu::ResultExt as _;
use tracing::debug;

use crate::{
    bins::{AxisConfiguration, BinType},
    error::{Configuration, HistogramError, ReadConfiguration},
    histogram::{create_fast_histogram, FastHistogram},
    parallel::HistogramParallelization,
    search::BinSearchAlgorithm,
};

const fn default_dimensions() -> usize {
    1
}

/// A runtime selection of histogram strategies, along with the axes to create the histogram with.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct HistogramConfiguration {
    /// The type of bins.
    pub bin_type: BinType,

    /// The bin search algorithm.
    ///
    /// Must be compatible with `bin_type`.
    pub bin_search: BinSearchAlgorithm,

    /// The parallelization scheme.
    ///
    /// Defaults to no parallelization.
    #[serde(default)]
    pub parallelization: HistogramParallelization,

    /// The number of dimensions.
    ///
    /// Defaults to 1.
    #[serde(default = "default_dimensions")]
    pub dimensions: usize,

    /// One axis per dimension. Must be empty for unbounded-width bins.
    #[serde(default)]
    pub axes: Vec<AxisConfiguration>,
}

impl HistogramConfiguration {
    /// Creates a histogram from this configuration.
    ///
    /// # Errors
    ///
    /// If the configuration does not describe a valid histogram, an error is returned. See [`create_fast_histogram`]
    /// for the checks performed.
    pub fn build(&self) -> Result<FastHistogram, HistogramError> {
        create_fast_histogram(
            self.bin_type,
            self.bin_search,
            self.parallelization,
            self.dimensions,
            &self.axes,
        )
    }
}

/// A configuration loader that layers YAML files and environment variables.
///
/// Sources added later take precedence over sources added earlier. Once every source has been added, the configuration
/// is extracted with [`into_typed`][Self::into_typed].
#[derive(Debug)]
pub struct ConfigurationLoader {
    figment: Figment,
}

impl ConfigurationLoader {
    /// Creates an empty loader.
    pub fn new() -> Self {
        Self { figment: Figment::new() }
    }

    /// Loads the given YAML configuration file.
    ///
    /// # Errors
    ///
    /// If the file could not be read, an error is returned. Malformed YAML is reported by
    /// [`into_typed`][Self::into_typed].
    pub fn from_yaml<P>(mut self, path: P) -> Result<Self, HistogramError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).context(ReadConfiguration { path })?;
        debug!(file_path = %path.display(), "Loaded YAML configuration file.");

        self.figment = self.figment.merge(Yaml::string(&contents));
        Ok(self)
    }

    /// Loads configuration from environment variables with the given prefix.
    ///
    /// The prefix is stripped, a trailing underscore is added if missing, and nested keys are separated by a double
    /// underscore: with a prefix of `HISTOGRAM`, `HISTOGRAM_PARALLELIZATION__TYPE=simd` sets `parallelization.type`.
    ///
    /// # Errors
    ///
    /// If the prefix is empty, an error is returned.
    pub fn from_environment(mut self, prefix: &str) -> Result<Self, HistogramError> {
        if prefix.is_empty() {
            return Err(HistogramError::EmptyPrefix);
        }

        let prefix = if prefix.ends_with('_') {
            prefix.to_string()
        } else {
            format!("{}_", prefix)
        };

        self.figment = self.figment.merge(Env::prefixed(&prefix).split("__"));
        Ok(self)
    }

    /// Consumes the loader and extracts a typed configuration from it.
    ///
    /// # Errors
    ///
    /// If the loaded data is malformed, or cannot be deserialized into `T`, an error is returned.
    pub fn into_typed<T>(self) -> Result<T, HistogramError>
    where
        T: DeserializeOwned,
    {
        self.figment.extract().context(Configuration)
    }
}

impl Default for ConfigurationLoader {
    fn default() -> Self {
        Self::new()
    }
}
