//! Membership rules between regions, samples and modifiers.
//!
//! Every restriction list follows the same convention: absent or empty means
//! "applies everywhere", otherwise only the named entities are included.

use crate::schema::{Modifier, Named, Region, Sample, StringOrArray};

/// Normalize an optional single-or-list setting to a list of names.
pub fn normalize_setting(setting: Option<&StringOrArray>) -> Vec<String> {
    setting.map(StringOrArray::to_vec).unwrap_or_default()
}

/// Check if `container` is included by a member's `restriction` list.
pub fn contains(container: &impl Named, restriction: Option<&StringOrArray>) -> bool {
    match restriction {
        Some(list) if !list.is_empty() => list.contains(container.name()),
        _ => true,
    }
}

/// A sample enters all regions unless its `Regions` setting says otherwise.
pub fn region_contains_sample(region: &Region, sample: &Sample) -> bool {
    contains(region, sample.regions.as_ref())
}

/// A modifier affects all regions unless its `Regions` setting says otherwise.
///
/// Does not check whether the modifier only acts on samples absent from the region.
pub fn region_contains_modifier(region: &Region, modifier: &impl Modifier) -> bool {
    contains(region, modifier.regions())
}

/// A modifier affects all samples unless its `Samples` setting says otherwise.
pub fn sample_contains_modifier(sample: &Sample, modifier: &impl Modifier) -> bool {
    contains(sample, modifier.samples())
}
