//! Builders for hand-made polygons in unit tests.

use crate::analysis::zones::analyze_zones;
use crate::naming::PolygonName;
use crate::narrative::utils::lookup_tables::{prose, short_landcover};
use crate::types::{
    ClassRecord, CoOccurrence, CoOccurrences, DiversityStats, ElevationStats, Layer, LayerDetail,
    PolygonContext, SlopeStats, ZoneCounts,
};

pub(crate) const CELL_SIZE: f64 = 231.9156058;

pub(crate) fn elevation() -> ElevationStats {
    ElevationStats {
        min: 12.0,
        max: 1840.0,
        mean: 600.0,
        median: 560.0,
        minus_one_sd: 250.0,
        plus_one_sd: 950.0,
    }
}

pub(crate) fn uniform_zones(n: u64) -> ZoneCounts {
    ZoneCounts { sw: n, w: n, nw: n, s: n, c: n, n, se: n, e: n, ne: n }
}

/// Polygon of `cell_count` cells with middling diversity and no open water.
pub(crate) fn context(name: &str, cell_count: u64) -> PolygonContext {
    PolygonContext {
        id: 1,
        name: PolygonName::new(name),
        cell_count,
        cell_size: CELL_SIZE,
        elevation: elevation(),
        diversity: DiversityStats { mean: 0.8, minus_one_sd: 0.3, plus_one_sd: 1.3 },
        water_30m_percent: 0.0,
        zones: uniform_zones(cell_count / 9),
    }
}

/// Lead-ranked record at the polygon's mean elevation, spread evenly.
pub(crate) fn record(layer: Layer, label: &str, percent: f64) -> ClassRecord {
    let cell_count = (percent * 10.0).round() as u64;
    let zones = uniform_zones(cell_count / 9);
    let detail = match layer {
        Layer::Bioclimate => LayerDetail::Bioclimate,
        Layer::Landform => LayerDetail::Landform { slope: SlopeStats::default(), facing: None },
        Layer::Lithology => LayerDetail::Lithology,
        Layer::Landcover => LayerDetail::Landcover { population: None, biomass_mean: None },
    };
    ClassRecord {
        layer,
        label: label.to_string(),
        prose: prose(layer, label).unwrap_or("unknown class"),
        cell_count,
        percent,
        rank: 1,
        elevation: elevation(),
        diversity_mean: None,
        co_occurrences: CoOccurrences::default(),
        detail,
        location: analyze_zones(&zones, &uniform_zones(100), cell_count),
        zones,
    }
}

/// Record with an explicit rank.
pub(crate) fn ranked(layer: Layer, label: &str, percent: f64, rank: usize) -> ClassRecord {
    let mut r = record(layer, label, percent);
    r.rank = rank;
    r
}

/// Co-occurrence with its prose resolved the way the pipeline does.
pub(crate) fn co(layer: Layer, label: &str, percent: f64) -> CoOccurrence {
    let prose = match layer {
        Layer::Landcover => short_landcover(label),
        _ => prose(layer, label),
    };
    CoOccurrence {
        label: label.to_string(),
        percent,
        prose: prose.unwrap_or("unknown class"),
    }
}
