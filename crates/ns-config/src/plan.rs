//! Histogram production plan for a whole configuration.

use serde::Serialize;

use crate::error::Result;
use crate::necessity::histogram_is_needed;
use crate::schema::{Configuration, Template, Variation};

/// Identifies one histogram to produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistogramKey {
    pub region: String,
    pub sample: String,
    pub systematic: String,
    pub template: Template,
}

/// Collect every histogram the configuration needs, in configuration order.
///
/// Nominal is paired with the `Nominal` template only; each systematic with `Up` and `Down`.
pub fn required_histograms(config: &Configuration) -> Result<Vec<HistogramKey>> {
    const NOMINAL_ONLY: &[Template] = &[Template::Nominal];

    let variations: Vec<(Variation<'_>, &[Template])> =
        std::iter::once((Variation::Nominal, NOMINAL_ONLY))
            .chain(config.systematics.iter().map(|s| (Variation::from(s), Template::VARIATIONS)))
            .collect();

    let mut keys = Vec::new();
    for region in &config.regions {
        for sample in &config.samples {
            for (variation, templates) in &variations {
                for &template in *templates {
                    if histogram_is_needed(region, sample, *variation, template)? {
                        keys.push(HistogramKey {
                            region: region.name.clone(),
                            sample: sample.name.clone(),
                            systematic: variation.name().to_string(),
                            template,
                        });
                    }
                }
            }
        }
    }

    tracing::debug!(n_histograms = keys.len(), "histogram plan built");
    Ok(keys)
}
