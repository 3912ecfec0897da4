//! Decide which histograms an analysis needs.

use crate::error::Result;
use crate::membership::{region_contains_modifier, region_contains_sample, sample_contains_modifier};
use crate::schema::{Region, Sample, SystematicType, Template, Variation};

/// Determine whether a histogram is needed for a (region, sample, variation, template) tuple.
///
/// The decision, in order:
/// - no histogram if the region does not contain the sample;
/// - the nominal histogram is always needed otherwise;
/// - data only ever has a nominal histogram;
/// - `Normalization` systematics are applied as scale factors and need none;
/// - `NormPlusShape` systematics need one where both region and sample are affected,
///   unless the template is obtained by symmetrization.
///
/// # Errors
///
/// [`ConfigError::UnsupportedSystematicType`](crate::ConfigError::UnsupportedSystematicType)
/// when a non-nominal systematic on simulation has an unknown `Type`.
pub fn histogram_is_needed(
    region: &Region,
    sample: &Sample,
    variation: Variation<'_>,
    template: Template,
) -> Result<bool> {
    if !region_contains_sample(region, sample) {
        return Ok(false);
    }

    let systematic = match variation {
        Variation::Nominal => return Ok(true),
        Variation::Systematic(s) => s,
    };

    if sample.data {
        return Ok(false);
    }

    match systematic.kind()? {
        SystematicType::Normalization => Ok(false),
        SystematicType::NormPlusShape => {
            let affected = region_contains_modifier(region, systematic)
                && sample_contains_modifier(sample, systematic);
            let symmetrized = systematic.template(template).is_some_and(|t| t.symmetrize);
            Ok(affected && !symmetrized)
        }
    }
}
