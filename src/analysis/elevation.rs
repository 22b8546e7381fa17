//! Elevation-temperature gradient across bioclimate classes.
//!
//! Bioclimate labels combine a temperature word with a moisture word
//! ("Cool Moist"). Records above the gradient threshold are bucketed by
//! temperature, each bucket averages the median elevation of its records,
//! and buckets are walked from lowest to highest. A gradient is claimed only
//! when every step upward is also a step colder.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::types::{ClassRecord, Layer};

/// Minimum bioclimate share for a record to join the gradient.
pub const GRADIENT_MIN_PERCENT: f64 = 10.0;
/// Elevation rise between buckets that counts as a temperature transition.
pub const TRANSITION_GAP: f64 = 300.0;

/// Temperature word of a bioclimate class, warmest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Temperature {
    VeryHot,
    Hot,
    Warm,
    Cool,
    Cold,
    VeryCold,
}

impl Temperature {
    /// Temperature word of a bioclimate label, if it carries one.
    ///
    /// "Arctic" and "None" carry no temperature word.
    pub fn from_label(label: &str) -> Option<Self> {
        let lower = label.trim().to_lowercase();
        let table = [
            ("very hot", Temperature::VeryHot),
            ("very cold", Temperature::VeryCold),
            ("hot", Temperature::Hot),
            ("warm", Temperature::Warm),
            ("cool", Temperature::Cool),
            ("cold", Temperature::Cold),
        ];
        table
            .iter()
            .find(|(word, _)| lower.starts_with(word))
            .map(|(_, temp)| *temp)
    }

    pub fn word(self) -> &'static str {
        match self {
            Temperature::VeryHot => "very hot",
            Temperature::Hot => "hot",
            Temperature::Warm => "warm",
            Temperature::Cool => "cool",
            Temperature::Cold => "cold",
            Temperature::VeryCold => "very cold",
        }
    }
}

/// Temperature bucket with its mean median elevation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureBucket {
    pub temperature: Temperature,
    pub elevation: f64,
}

/// Detected gradient: ordered transitions from warmer to colder.
#[derive(Debug, Clone, PartialEq)]
pub struct ElevationGradient {
    pub transitions: SmallVec<[(Temperature, Temperature); 4]>,
    /// The first transition is between the two lowest buckets; the
    /// description then introduces the polygon's elevation range.
    pub starts_at_lowest: bool,
}

/// Bucket qualifying bioclimate records by temperature, lowest bucket first.
pub fn temperature_buckets(records: &[ClassRecord]) -> Vec<TemperatureBucket> {
    let mut sums: FxHashMap<Temperature, (f64, usize)> = FxHashMap::default();
    for record in records {
        if record.layer != Layer::Bioclimate || record.percent <= GRADIENT_MIN_PERCENT {
            continue;
        }
        if let Some(temperature) = Temperature::from_label(&record.label) {
            let entry = sums.entry(temperature).or_insert((0.0, 0));
            entry.0 += record.elevation.median;
            entry.1 += 1;
        }
    }

    let mut buckets: Vec<TemperatureBucket> = sums
        .into_iter()
        .map(|(temperature, (sum, n))| TemperatureBucket {
            temperature,
            elevation: sum / n as f64,
        })
        .collect();
    buckets.sort_by(|a, b| {
        a.elevation
            .total_cmp(&b.elevation)
            .then(a.temperature.cmp(&b.temperature))
    });
    buckets
}

/// Detect an elevation-temperature gradient among bioclimate records.
///
/// Returns `None` when fewer than two buckets exist, when temperature does
/// not fall monotonically with elevation, or when no step exceeds
/// [`TRANSITION_GAP`].
pub fn analyze_gradient(records: &[ClassRecord]) -> Option<ElevationGradient> {
    let buckets = temperature_buckets(records);
    if buckets.len() < 2 {
        return None;
    }

    let monotonic = buckets
        .windows(2)
        .all(|pair| pair[1].temperature > pair[0].temperature);
    if !monotonic {
        return None;
    }

    let mut transitions = SmallVec::new();
    let mut starts_at_lowest = false;
    for (idx, pair) in buckets.windows(2).enumerate() {
        if pair[1].elevation - pair[0].elevation > TRANSITION_GAP {
            if transitions.is_empty() && idx == 0 {
                starts_at_lowest = true;
            }
            transitions.push((pair[0].temperature, pair[1].temperature));
        }
    }

    if transitions.is_empty() {
        None
    } else {
        Some(ElevationGradient {
            transitions,
            starts_at_lowest,
        })
    }
}
