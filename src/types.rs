//! Shared data model for polygon description.
//!
//! Everything here is plain data: per-layer class distributions, zonal
//! statistics, the polygon-wide context and the per-class record that the
//! narrative sections consume. Records are built once per polygon by
//! [`crate::pipeline`] and never mutated afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::aspect::Facing;
use crate::naming::PolygonName;

// ============================================================================
// Layers and zones
// ============================================================================

/// Thematic layer identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Bioclimate,
    Landform,
    Lithology,
    Landcover,
}

impl Layer {
    /// Canonical layer order, also the tie-break order when ranking leads.
    pub const ALL: [Layer; 4] = [
        Layer::Bioclimate,
        Layer::Landform,
        Layer::Lithology,
        Layer::Landcover,
    ];

    pub fn index(self) -> usize {
        match self {
            Layer::Bioclimate => 0,
            Layer::Landform => 1,
            Layer::Lithology => 2,
            Layer::Landcover => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Layer::Bioclimate => "bioclimate",
            Layer::Landform => "landform",
            Layer::Lithology => "lithology",
            Layer::Landcover => "landcover",
        }
    }

    /// The three layers a class of this layer is correlated against.
    pub fn others(self) -> impl Iterator<Item = Layer> {
        Layer::ALL.into_iter().filter(move |l| *l != self)
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One cell of the 3x3 zone grid laid over a polygon's extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    SW,
    W,
    NW,
    S,
    C,
    N,
    SE,
    E,
    NE,
}

/// Cell counts per zone, keyed by the nine zone codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneCounts {
    #[serde(rename = "SW", default)]
    pub sw: u64,
    #[serde(rename = "W", default)]
    pub w: u64,
    #[serde(rename = "NW", default)]
    pub nw: u64,
    #[serde(rename = "S", default)]
    pub s: u64,
    #[serde(rename = "C", default)]
    pub c: u64,
    #[serde(rename = "N", default)]
    pub n: u64,
    #[serde(rename = "SE", default)]
    pub se: u64,
    #[serde(rename = "E", default)]
    pub e: u64,
    #[serde(rename = "NE", default)]
    pub ne: u64,
}

impl ZoneCounts {
    pub fn get(&self, zone: Zone) -> u64 {
        match zone {
            Zone::SW => self.sw,
            Zone::W => self.w,
            Zone::NW => self.nw,
            Zone::S => self.s,
            Zone::C => self.c,
            Zone::N => self.n,
            Zone::SE => self.se,
            Zone::E => self.e,
            Zone::NE => self.ne,
        }
    }

    /// Sum of the given zones.
    pub fn sum(&self, zones: &[Zone]) -> u64 {
        zones.iter().map(|z| self.get(*z)).sum()
    }
}

// ============================================================================
// Zonal statistics
// ============================================================================

/// Elevation statistics over a mask, in meters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ElevationStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    /// Mean minus one standard deviation.
    pub minus_one_sd: f64,
    /// Mean plus one standard deviation.
    pub plus_one_sd: f64,
}

/// ELU diversity statistics for the whole polygon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DiversityStats {
    pub mean: f64,
    #[serde(default)]
    pub minus_one_sd: f64,
    #[serde(default)]
    pub plus_one_sd: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SlopeStats {
    pub mean: f64,
    #[serde(default)]
    pub median: f64,
}

/// Aspect-index histogram: octant codes 1..=8 plus the undefined (flat) bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AspectHistogram {
    /// `octants[0]` holds code 1, `octants[7]` holds code 8.
    pub octants: [u64; 8],
    #[serde(default)]
    pub undefined: u64,
}

// ============================================================================
// Distributions
// ============================================================================

/// Per-layer table of (class label, cell count) for one polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDistribution {
    layer: Layer,
    classes: Vec<(String, u64)>,
}

impl ClassDistribution {
    pub fn new(layer: Layer, classes: Vec<(String, u64)>) -> Self {
        Self { layer, classes }
    }

    pub fn layer(&self) -> Layer {
        self.layer
    }

    pub fn classes(&self) -> &[(String, u64)] {
        &self.classes
    }

    pub fn total_cells(&self) -> u64 {
        self.classes.iter().map(|(_, count)| count).sum()
    }
}

/// A class with its share of the layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassShare {
    pub label: String,
    pub cell_count: u64,
    pub percent: f64,
}

// ============================================================================
// Derived per-class facts
// ============================================================================

/// Dominant co-occurring class of another layer within a class mask.
#[derive(Debug, Clone, PartialEq)]
pub struct Correlation {
    pub label: String,
    pub percent: f64,
}

/// A correlation whose label has been resolved to prose.
///
/// For land cover the prose is the short form ("forest"), which is how the
/// covering clause of a bioclimate sentence names it.
#[derive(Debug, Clone, PartialEq)]
pub struct CoOccurrence {
    pub label: String,
    pub percent: f64,
    pub prose: &'static str,
}

/// Co-occurrences indexed by layer; the record's own layer stays empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoOccurrences([Option<CoOccurrence>; 4]);

impl CoOccurrences {
    pub fn get(&self, layer: Layer) -> Option<&CoOccurrence> {
        self.0[layer.index()].as_ref()
    }

    pub fn set(&mut self, layer: Layer, value: CoOccurrence) {
        self.0[layer.index()] = Some(value);
    }
}

/// Majority zone of a class mask.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneLocation {
    pub cell_count: u64,
    pub zone_phrase: &'static str,
    /// Share of the class's cells inside the chosen aggregate, in `[0, 1]`.
    pub ratio: f64,
}

/// Layer-specific fields of a class record.
#[derive(Debug, Clone, PartialEq)]
pub enum LayerDetail {
    Bioclimate,
    Landform {
        slope: SlopeStats,
        facing: Option<Facing>,
    },
    Lithology,
    Landcover {
        /// Population sum, present for the urban class.
        population: Option<f64>,
        biomass_mean: Option<f64>,
    },
}

/// One significant class, fully annotated for narration.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassRecord {
    pub layer: Layer,
    pub label: String,
    /// Dictionary prose for the label, e.g. "warm and dry".
    pub prose: &'static str,
    pub cell_count: u64,
    pub percent: f64,
    /// 1 for the lead class of its layer.
    pub rank: usize,
    pub elevation: ElevationStats,
    pub diversity_mean: Option<f64>,
    pub co_occurrences: CoOccurrences,
    pub detail: LayerDetail,
    pub zones: ZoneCounts,
    pub location: ZoneLocation,
}

impl ClassRecord {
    pub fn is_lead(&self) -> bool {
        self.rank == 1
    }

    pub fn co_occurrence(&self, layer: Layer) -> Option<&CoOccurrence> {
        self.co_occurrences.get(layer)
    }
}

// ============================================================================
// Polygon context
// ============================================================================

/// Polygon-wide facts, built once before classification.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonContext {
    pub id: i64,
    pub name: PolygonName,
    pub cell_count: u64,
    pub cell_size: f64,
    pub elevation: ElevationStats,
    pub diversity: DiversityStats,
    pub water_30m_percent: f64,
    pub zones: ZoneCounts,
}

impl PolygonContext {
    /// Polygon area in the square units of `cell_size`.
    pub fn area(&self) -> f64 {
        self.cell_count as f64 * self.cell_size
    }
}
