//! Analysis configuration schema types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ConfigError, Result};

/// Name of the sentinel systematic standing for "no variation".
pub const NOMINAL: &str = "Nominal";

/// Top-level analysis configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Configuration {
    #[serde(default)]
    pub general: Option<General>,
    pub samples: Vec<Sample>,
    pub regions: Vec<Region>,
    pub norm_factors: Vec<NormFactor>,
    #[serde(default)]
    pub systematics: Vec<Systematic>,
}

impl Configuration {
    /// The sample flagged as data, if any.
    ///
    /// A validated configuration has exactly one.
    pub fn data_sample(&self) -> Option<&Sample> {
        self.samples.iter().find(|s| s.data)
    }
}

/// General measurement settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct General {
    #[serde(default)]
    pub measurement: String,
    #[serde(default, rename = "POI")]
    pub poi: String,
    #[serde(default)]
    pub input_path: String,
    #[serde(default)]
    pub histogram_folder: String,
    #[serde(default)]
    pub variation_path: String,
    #[serde(default)]
    pub fixed: Vec<FixedParam>,
}

/// A parameter held constant in the fit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FixedParam {
    pub name: String,
    pub value: f64,
}

/// A phase-space region (channel).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Region {
    pub name: String,
    #[serde(default)]
    pub variable: Option<String>,
    #[serde(default)]
    pub binning: Option<Vec<f64>>,
    #[serde(default)]
    pub filter: Option<String>,
    #[serde(default)]
    pub region_path: Option<String>,
}

/// A data or MC sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Sample {
    pub name: String,
    #[serde(default)]
    pub data: bool,
    /// Regions the sample enters; absent means all of them.
    #[serde(default)]
    pub regions: Option<StringOrArray>,
    #[serde(default)]
    pub tree: Option<String>,
    #[serde(default)]
    pub sample_path: Option<StringOrArray>,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub filter: Option<String>,
    #[serde(default)]
    pub disable_staterror: bool,
}

/// A normalization factor (free parameter).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NormFactor {
    pub name: String,
    #[serde(default)]
    pub regions: Option<StringOrArray>,
    #[serde(default)]
    pub samples: Option<StringOrArray>,
    #[serde(default)]
    pub nominal: Option<f64>,
    #[serde(default)]
    pub bounds: Option<[f64; 2]>,
}

/// A systematic uncertainty.
///
/// `Type` is kept as written in the document; [`Systematic::kind`] resolves it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Systematic {
    pub name: String,
    #[serde(rename = "Type")]
    pub type_name: String,
    #[serde(default)]
    pub up: Option<VariationTemplate>,
    #[serde(default)]
    pub down: Option<VariationTemplate>,
    #[serde(default)]
    pub regions: Option<StringOrArray>,
    #[serde(default)]
    pub samples: Option<StringOrArray>,
    #[serde(default)]
    pub modifier_name: Option<String>,
    #[serde(default)]
    pub smoothing: Option<SmoothingConfig>,
}

impl Systematic {
    /// Resolve the systematic type.
    pub fn kind(&self) -> Result<SystematicType> {
        self.type_name.parse()
    }

    /// Settings for one variation template; `Nominal` never has any.
    pub fn template(&self, template: Template) -> Option<&VariationTemplate> {
        match template {
            Template::Nominal => None,
            Template::Up => self.up.as_ref(),
            Template::Down => self.down.as_ref(),
        }
    }
}

/// Systematic type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystematicType {
    /// Pure normalization effect, applied as a scale factor.
    Normalization,
    /// Normalization and shape, built from varied templates.
    NormPlusShape,
}

impl FromStr for SystematicType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Normalization" => Ok(SystematicType::Normalization),
            "NormPlusShape" => Ok(SystematicType::NormPlusShape),
            other => Err(ConfigError::UnsupportedSystematicType(other.to_string())),
        }
    }
}

/// Variation template for up/down systematics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VariationTemplate {
    /// Obtain this template by mirroring the opposite one.
    #[serde(default)]
    pub symmetrize: bool,
    #[serde(default)]
    pub normalization: Option<f64>,
    #[serde(default)]
    pub tree: Option<String>,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub variable: Option<String>,
    #[serde(default)]
    pub filter: Option<String>,
    #[serde(default)]
    pub sample_path: Option<StringOrArray>,
    #[serde(default)]
    pub region_path: Option<String>,
    #[serde(default)]
    pub variation_path: Option<String>,
}

/// Smoothing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SmoothingConfig {
    pub algorithm: String,
    #[serde(default)]
    pub regions: Option<StringOrArray>,
    #[serde(default)]
    pub samples: Option<StringOrArray>,
}

/// A field that can be a single string or an array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringOrArray {
    Single(String),
    Array(Vec<String>),
}

impl StringOrArray {
    /// Convert to a list of strings.
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            StringOrArray::Single(s) => vec![s.clone()],
            StringOrArray::Array(v) => v.clone(),
        }
    }

    /// Check if a name is listed.
    pub fn contains(&self, name: &str) -> bool {
        match self {
            StringOrArray::Single(s) => s == name,
            StringOrArray::Array(v) => v.iter().any(|s| s == name),
        }
    }

    /// True for an empty array, which places no restriction.
    pub fn is_empty(&self) -> bool {
        matches!(self, StringOrArray::Array(v) if v.is_empty())
    }
}

impl From<&str> for StringOrArray {
    fn from(s: &str) -> Self {
        StringOrArray::Single(s.to_string())
    }
}

impl From<Vec<String>> for StringOrArray {
    fn from(v: Vec<String>) -> Self {
        StringOrArray::Array(v)
    }
}

/// Which variation of a histogram is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Template {
    Nominal,
    Up,
    Down,
}

impl Template {
    /// Templates built for a genuine systematic.
    pub const VARIATIONS: &'static [Template] = &[Template::Up, Template::Down];

    pub fn as_str(self) -> &'static str {
        match self {
            Template::Nominal => "Nominal",
            Template::Up => "Up",
            Template::Down => "Down",
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Template {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Nominal" => Ok(Template::Nominal),
            "Up" => Ok(Template::Up),
            "Down" => Ok(Template::Down),
            other => Err(ConfigError::UnknownTemplate(other.to_string())),
        }
    }
}

/// The systematic axis of a histogram: nominal or a configured systematic.
#[derive(Debug, Clone, Copy)]
pub enum Variation<'a> {
    Nominal,
    Systematic(&'a Systematic),
}

impl Variation<'_> {
    pub fn name(&self) -> &str {
        match self {
            Variation::Nominal => NOMINAL,
            Variation::Systematic(s) => &s.name,
        }
    }
}

impl<'a> From<&'a Systematic> for Variation<'a> {
    fn from(systematic: &'a Systematic) -> Self {
        if systematic.name == NOMINAL { Variation::Nominal } else { Variation::Systematic(systematic) }
    }
}

/// An entity identified by its `Name`.
pub trait Named {
    fn name(&self) -> &str;
}

/// A NormFactor or Systematic: something with optional region and sample restrictions.
pub trait Modifier: Named {
    fn regions(&self) -> Option<&StringOrArray>;
    fn samples(&self) -> Option<&StringOrArray>;
}

macro_rules! impl_named {
    ($($ty:ty),*) => {
        $(impl Named for $ty {
            fn name(&self) -> &str {
                &self.name
            }
        })*
    };
}

impl_named!(Region, Sample, NormFactor, Systematic);

impl Modifier for NormFactor {
    fn regions(&self) -> Option<&StringOrArray> {
        self.regions.as_ref()
    }

    fn samples(&self) -> Option<&StringOrArray> {
        self.samples.as_ref()
    }
}

impl Modifier for Systematic {
    fn regions(&self) -> Option<&StringOrArray> {
        self.regions.as_ref()
    }

    fn samples(&self) -> Option<&StringOrArray> {
        self.samples.as_ref()
    }
}
