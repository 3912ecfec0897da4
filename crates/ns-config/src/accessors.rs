//! Lookup helpers and summaries over a loaded configuration.

use serde::Serialize;

use crate::error::{ConfigError, Result};
use crate::schema::{Configuration, Named, Region, Sample};

/// Return the region with the given name.
///
/// Duplicate names are reported but tolerated: the first match in configuration order wins.
pub fn get_region<'a>(config: &'a Configuration, region_name: &str) -> Result<&'a Region> {
    first_by_name(&config.regions, region_name, "region")
        .ok_or_else(|| ConfigError::RegionNotFound(region_name.to_string()))
}

/// Return the sample with the given name (first match, like [`get_region`]).
pub fn get_sample<'a>(config: &'a Configuration, sample_name: &str) -> Result<&'a Sample> {
    first_by_name(&config.samples, sample_name, "sample")
        .ok_or_else(|| ConfigError::SampleNotFound(sample_name.to_string()))
}

fn first_by_name<'a, T: Named>(items: &'a [T], name: &str, what: &str) -> Option<&'a T> {
    let mut matches = items.iter().filter(|item| item.name() == name);
    let first = matches.next()?;
    if matches.next().is_some() {
        tracing::error!("found more than one {what} with name {name}");
    }
    Some(first)
}

/// Entity counts of a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Overview {
    pub samples: usize,
    pub regions: usize,
    pub norm_factors: usize,
    pub systematics: usize,
}

impl Overview {
    pub fn of(config: &Configuration) -> Self {
        Overview {
            samples: config.samples.len(),
            regions: config.regions.len(),
            norm_factors: config.norm_factors.len(),
            systematics: config.systematics.len(),
        }
    }
}

/// Log a compact summary of a configuration.
pub fn print_overview(config: &Configuration) -> Overview {
    let overview = Overview::of(config);
    tracing::info!("the config contains:");
    tracing::info!("  {} Sample(s)", overview.samples);
    tracing::info!("  {} Region(s)", overview.regions);
    tracing::info!("  {} NormFactor(s)", overview.norm_factors);
    if overview.systematics > 0 {
        tracing::info!("  {} Systematic(s)", overview.systematics);
    }
    overview
}
