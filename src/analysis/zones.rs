//! Majority-zone analysis over the 3x3 zone grid.
//!
//! Seventeen aggregates are scored: four quadrants, four sides and the nine
//! single zones. The aggregate holding the most class cells is the class's
//! location; ties go to the lexicographically greater phrase.

use crate::types::{Zone, ZoneCounts, ZoneLocation};

/// One candidate aggregate with its prose phrase.
struct ZoneAggregate {
    phrase: &'static str,
    zones: &'static [Zone],
}

static AGGREGATES: &[ZoneAggregate] = &[
    // Quadrants
    ZoneAggregate { phrase: "northeastern part", zones: &[Zone::C, Zone::N, Zone::E, Zone::NE] },
    ZoneAggregate { phrase: "southeastern part", zones: &[Zone::C, Zone::S, Zone::E, Zone::SE] },
    ZoneAggregate { phrase: "southwestern part", zones: &[Zone::SW, Zone::W, Zone::S, Zone::C] },
    ZoneAggregate { phrase: "northwestern part", zones: &[Zone::W, Zone::NW, Zone::C, Zone::N] },
    // Sides
    ZoneAggregate { phrase: "east side", zones: &[Zone::SE, Zone::E, Zone::NE] },
    ZoneAggregate { phrase: "west side", zones: &[Zone::SW, Zone::W, Zone::NW] },
    ZoneAggregate { phrase: "south side", zones: &[Zone::SW, Zone::S, Zone::SE] },
    ZoneAggregate { phrase: "north side", zones: &[Zone::NW, Zone::N, Zone::NE] },
    // Single zones
    ZoneAggregate { phrase: "southwesternmost portion", zones: &[Zone::SW] },
    ZoneAggregate { phrase: "westernmost portion", zones: &[Zone::W] },
    ZoneAggregate { phrase: "northwesternmost portion", zones: &[Zone::NW] },
    ZoneAggregate { phrase: "southernmost portion", zones: &[Zone::S] },
    ZoneAggregate { phrase: "most central portion", zones: &[Zone::C] },
    ZoneAggregate { phrase: "northernmost portion", zones: &[Zone::N] },
    ZoneAggregate { phrase: "southeasternmost portion", zones: &[Zone::SE] },
    ZoneAggregate { phrase: "easternmost portion", zones: &[Zone::E] },
    ZoneAggregate { phrase: "northeasternmost portion", zones: &[Zone::NE] },
];

pub const MOST_RATIO: f64 = 0.66;
pub const ALMOST_ALL_RATIO: f64 = 0.9;
pub const ALL_RATIO: f64 = 0.99;

/// How strongly a class concentrates in its majority zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneSeverity {
    Most,
    AlmostAll,
    All,
}

impl ZoneSeverity {
    /// Highest tier the ratio satisfies, if any.
    pub fn from_ratio(ratio: f64) -> Option<Self> {
        if ratio > ALL_RATIO {
            Some(ZoneSeverity::All)
        } else if ratio > ALMOST_ALL_RATIO {
            Some(ZoneSeverity::AlmostAll)
        } else if ratio > MOST_RATIO {
            Some(ZoneSeverity::Most)
        } else {
            None
        }
    }

    pub fn phrase(self) -> &'static str {
        match self {
            ZoneSeverity::Most => "most of",
            ZoneSeverity::AlmostAll => "almost all of",
            ZoneSeverity::All => "all of",
        }
    }
}

impl ZoneLocation {
    pub fn severity(&self) -> Option<ZoneSeverity> {
        ZoneSeverity::from_ratio(self.ratio)
    }
}

/// Find the majority zone of a class mask.
///
/// `class_cells` is the class's total cell count in the polygon. The ratio is
/// 0 when the polygon has no cells in the chosen aggregate or the class has
/// no cells, and never exceeds 1.
pub fn analyze_zones(class_zones: &ZoneCounts, polygon_zones: &ZoneCounts, class_cells: u64) -> ZoneLocation {
    let mut best: Option<(&ZoneAggregate, u64)> = None;
    for aggregate in AGGREGATES {
        let count = class_zones.sum(aggregate.zones);
        let better = match best {
            None => true,
            Some((current, current_count)) => {
                (count, aggregate.phrase) > (current_count, current.phrase)
            }
        };
        if better {
            best = Some((aggregate, count));
        }
    }

    let (aggregate, cell_count) = match best {
        Some(found) => found,
        None => {
            return ZoneLocation {
                cell_count: 0,
                zone_phrase: "",
                ratio: 0.0,
            }
        }
    };

    let polygon_count = polygon_zones.sum(aggregate.zones);
    let ratio = if polygon_count == 0 || class_cells == 0 {
        0.0
    } else {
        (cell_count as f64 / class_cells as f64).min(1.0)
    };

    ZoneLocation {
        cell_count,
        zone_phrase: aggregate.phrase,
        ratio,
    }
}
