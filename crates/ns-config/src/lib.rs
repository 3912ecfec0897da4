//! # ns-config
//!
//! Analysis configuration semantics for NextStat.
//!
//! Given a declarative configuration (regions, samples, norm factors, systematics) this
//! crate answers which entities apply to each other, which histograms must be produced,
//! and whether the configuration is consistent. Histogram production and model building
//! happen elsewhere; they consume these decisions.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ns_config::{Template, Variation, get_region, histogram_is_needed, load};
//!
//! let config = load("config.yml".as_ref()).unwrap();
//! let region = get_region(&config, "SR").unwrap();
//! for sample in &config.samples {
//!     let needed =
//!         histogram_is_needed(region, sample, Variation::Nominal, Template::Nominal).unwrap();
//!     println!("{}: {}", sample.name, needed);
//! }
//! ```
//!
//! All operations are pure and may be called concurrently. Callers validate once (done by
//! [`load`]) before relying on the structural invariants.

#![warn(clippy::all)]

pub mod accessors;
pub mod error;
pub mod load;
pub mod membership;
pub mod necessity;
pub mod plan;
pub mod schema;
pub mod validate;

pub use accessors::*;
pub use error::{ConfigError, Result};
pub use load::*;
pub use membership::*;
pub use necessity::*;
pub use plan::*;
pub use schema::*;
pub use validate::*;
