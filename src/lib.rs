//! GeoDescriber Rust Implementation
//!
//! Natural-language descriptions of geographic polygons from classified
//! bioclimate, landform, lithology and land cover layers.
//!
//! Crate layout:
//! - `analysis/`: percentages, significant classes, ordering, zones,
//!   correlations, elevation gradient, aspect
//! - `narrative/`: sentence templates, per-layer paragraphs, diversity remarks
//! - `naming`: proper name and generic noun of a polygon
//! - `data`: JSON input contract
//! - `pipeline`: per-polygon orchestration, retries, parallel batches
//!
//! ```no_run
//! use geo_describer_rust::{load_polygons, Describer, DescriberConfig};
//!
//! let polygons = load_polygons("polygons.json")?;
//! let describer = Describer::new(DescriberConfig::from_env());
//! for item in describer.describe_batch(&polygons) {
//!     println!("{}: {:?}", item.id, item.outcome);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod analysis;
pub mod config;
pub mod data;
pub mod error;
pub mod naming;
pub mod narrative;
pub mod pipeline;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use config::DescriberConfig;
pub use data::{load_polygons, parse_polygons, ClassInput, LayerInputs, PolygonInput};
pub use error::{DescribeError, Result};
pub use naming::{resolve_name, PolygonName};
pub use narrative::{Description, NarrativeSynthesizer, PARAGRAPH_BREAK, TOO_SMALL_SENTENCE};
pub use pipeline::{describe_with_retry, BatchItem, Describer, RetryOutcome};
pub use types::{ClassRecord, Layer, PolygonContext};
