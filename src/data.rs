//! Polygon Input Loading
//!
//! Deserializes the per-polygon statistics produced upstream (classified
//! distributions, zonal statistics, zone-grid tables, aspect histograms)
//! from JSON. A file holds either one polygon object or an array of them.
//!
//! Field presence is only checked loosely here: per-layer required fields
//! are validated when records are built, so that a missing statistic becomes
//! a retryable malformed record rather than a load failure.

use std::path::Path;

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::{
    AspectHistogram, ClassDistribution, DiversityStats, ElevationStats, Layer, SlopeStats,
    ZoneCounts,
};

/// One polygon's statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonInput {
    pub id: i64,
    /// Feature attributes; name fields are searched here.
    #[serde(default)]
    pub attributes: Map<String, Value>,
    pub cell_count: u64,
    /// Cell size in square units; the configured default applies when absent.
    #[serde(default)]
    pub cell_size: Option<f64>,
    pub elevation: ElevationStats,
    #[serde(default)]
    pub diversity: DiversityStats,
    /// Share of the polygon covered by the 30 m water-body layer.
    #[serde(default)]
    pub water_30m_percent: f64,
    #[serde(default)]
    pub zones: ZoneCounts,
    #[serde(default)]
    pub layers: LayerInputs,
}

/// Class rows of the four thematic layers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayerInputs {
    #[serde(default)]
    pub bioclimate: Vec<ClassInput>,
    #[serde(default)]
    pub landform: Vec<ClassInput>,
    #[serde(default)]
    pub lithology: Vec<ClassInput>,
    #[serde(default)]
    pub landcover: Vec<ClassInput>,
}

impl LayerInputs {
    pub fn get(&self, layer: Layer) -> &[ClassInput] {
        match layer {
            Layer::Bioclimate => &self.bioclimate,
            Layer::Landform => &self.landform,
            Layer::Lithology => &self.lithology,
            Layer::Landcover => &self.landcover,
        }
    }

    /// Cell-count distribution of one layer, in input order.
    pub fn distribution(&self, layer: Layer) -> ClassDistribution {
        ClassDistribution::new(
            layer,
            self.get(layer)
                .iter()
                .map(|row| (row.label.clone(), row.cell_count))
                .collect(),
        )
    }

    /// First row of a layer with the given label.
    pub fn find(&self, layer: Layer, label: &str) -> Option<&ClassInput> {
        self.get(layer).iter().find(|row| row.label == label)
    }
}

/// One class row with the zonal statistics of its mask.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassInput {
    pub label: String,
    pub cell_count: u64,
    #[serde(default)]
    pub elevation: Option<ElevationStats>,
    #[serde(default)]
    pub diversity_mean: Option<f64>,
    /// Zone-grid counts of the class mask.
    #[serde(default)]
    pub zones: Option<ZoneCounts>,
    /// Tabulations of the other layers within the class mask.
    #[serde(default)]
    pub cross: FxHashMap<Layer, Vec<(String, u64)>>,
    #[serde(default)]
    pub slope: Option<SlopeStats>,
    #[serde(default)]
    pub aspect: Option<AspectHistogram>,
    #[serde(default)]
    pub population: Option<f64>,
    #[serde(default)]
    pub biomass_mean: Option<f64>,
}

impl ClassInput {
    pub fn cross(&self, layer: Layer) -> &[(String, u64)] {
        self.cross.get(&layer).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Parse one polygon object or an array of polygons.
pub fn parse_polygons(json: &str) -> Result<Vec<PolygonInput>> {
    let value: Value = serde_json::from_str(json).context("Input is not valid JSON")?;
    match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(idx, item)| {
                serde_json::from_value(item)
                    .with_context(|| format!("Invalid polygon at index {}", idx))
            })
            .collect(),
        other => {
            let polygon = serde_json::from_value(other).context("Invalid polygon object")?;
            Ok(vec![polygon])
        }
    }
}

/// Load polygons from a JSON file.
pub fn load_polygons(path: impl AsRef<Path>) -> Result<Vec<PolygonInput>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input: {}", path.display()))?;
    parse_polygons(&json).with_context(|| format!("Failed to parse input: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE: &str = r#"{
        "id": 7,
        "attributes": { "NAME": "Sherwood Forest" },
        "cell_count": 2400,
        "elevation": { "min": 12, "max": 1840, "mean": 600, "median": 560, "minus_one_sd": 250, "plus_one_sd": 950 },
        "layers": {
            "bioclimate": [
                { "label": "Warm Dry", "cell_count": 1080,
                  "cross": { "landcover": [["Grassland", 700], ["Shrubland", 380]] } }
            ],
            "landform": [
                { "label": "High Hills", "cell_count": 2400, "slope": { "mean": 12.0 },
                  "aspect": { "octants": [1, 2, 3, 4, 5, 6, 7, 8] } }
            ]
        }
    }"#;

    #[test]
    fn test_parse_single_object() {
        let polygons = parse_polygons(ONE).unwrap();
        assert_eq!(polygons.len(), 1);
        let p = &polygons[0];
        assert_eq!(p.id, 7);
        assert_eq!(p.cell_size, None);
        assert_eq!(p.layers.bioclimate[0].cross(Layer::Landcover).len(), 2);
        assert!(p.layers.bioclimate[0].cross(Layer::Lithology).is_empty());
        assert_eq!(p.layers.landform[0].aspect.unwrap().undefined, 0);
        assert!(p.layers.lithology.is_empty());
    }

    #[test]
    fn test_parse_array() {
        let json = format!("[{}, {}]", ONE, ONE.replace("\"id\": 7", "\"id\": 8"));
        let polygons = parse_polygons(&json).unwrap();
        assert_eq!(polygons.iter().map(|p| p.id).collect::<Vec<_>>(), vec![7, 8]);
    }

    #[test]
    fn test_distribution_in_input_order() {
        let polygons = parse_polygons(ONE).unwrap();
        let dist = polygons[0].layers.distribution(Layer::Landform);
        assert_eq!(dist.total_cells(), 2400);
        assert_eq!(dist.classes()[0].0, "High Hills");
    }

    #[test]
    fn test_bad_polygon_reports_index() {
        let json = format!("[{}, {{\"id\": 9}}]", ONE);
        let err = parse_polygons(&json).unwrap_err();
        assert!(format!("{:#}", err).contains("index 1"));
    }
}
