//! Numeric analysis of classified layers
//!
//! Turns per-class cell counts and zonal statistics into the facts the
//! narrative is built from:
//! - Percentage: cell counts to shares of the layer
//! - Significance: lead class and rest classes per layer
//! - Ordering: paragraph order of lead classes with their rest classes
//! - Zones: majority zone of a class mask within the 3x3 grid
//! - Correlation: dominant co-occurring class of another layer
//! - Elevation: temperature drop with rising elevation across bioclimates
//! - Aspect: dominant facing direction of a landform

pub mod percentage;
pub mod significance;
pub mod ordering;
pub mod zones;
pub mod correlation;
pub mod elevation;
pub mod aspect;

pub use percentage::aggregate;
pub use significance::{select, SignificantClassSet};
pub use ordering::{order_units, NarrativeOrder, RankedClass};
pub use zones::{analyze_zones, ZoneSeverity};
pub use correlation::dominant_class;
pub use elevation::{analyze_gradient, ElevationGradient, Temperature};
pub use aspect::{classify_aspect, Facing};
