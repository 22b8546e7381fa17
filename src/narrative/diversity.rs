//! Landscape diversity remarks
//!
//! Area and mean diversity index are bucketed into a fixed matrix of
//! remarks. A remark is either a statement that opens the description or a
//! fragment that prefixes the elevation introduction.

use crate::narrative::utils::text::capitalize_first;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiversityRemark {
    /// Prefix for the elevation introduction, e.g. "A uniform landscape, ".
    Fragment(&'static str),
    /// Sentence around the polygon subject.
    Statement {
        prefix: &'static str,
        suffix: &'static str,
    },
}

impl DiversityRemark {
    /// Render a statement for a subject; fragments render nothing.
    pub fn statement(&self, subject: &str) -> Option<String> {
        match self {
            DiversityRemark::Statement { prefix, suffix } => {
                Some(capitalize_first(&format!("{}{}{}", prefix, subject, suffix)))
            }
            DiversityRemark::Fragment(_) => None,
        }
    }

    pub fn fragment(&self) -> Option<&'static str> {
        match self {
            DiversityRemark::Fragment(text) => Some(*text),
            DiversityRemark::Statement { .. } => None,
        }
    }
}

/// Upper bounds (exclusive) of the area tiers; larger areas use the last row.
pub const AREA_TIERS: [f64; 4] = [53_000.0, 1e6, 1e7, 1e8];
/// Upper bounds (exclusive) of the diversity tiers; larger values use the last column.
pub const DIVERSITY_TIERS: [f64; 5] = [0.1, 0.5, 1.0, 2.0, 10.0];

use DiversityRemark::{Fragment as F, Statement as S};

const NONE: Option<DiversityRemark> = None;

static REMARKS: [[Option<DiversityRemark>; 6]; 5] = [
    // < 53,000
    [
        Some(F("An area with very uniform landscape, ")),
        Some(F("An area with uniform landscape, ")),
        NONE,
        Some(S { prefix: "", suffix: " has rather high landscape diversity. " }),
        Some(S { prefix: "For such a small area, ", suffix: " has very high landscape diversity. " }),
        Some(S { prefix: "For such a small area, ", suffix: " has extraordinarily high landscape diversity. " }),
    ],
    // 53,000 to 1e6
    [
        Some(F("A very uniform landscape, ")),
        Some(F("A uniform landscape, ")),
        NONE,
        NONE,
        Some(S { prefix: "For a small area, ", suffix: " has very high landscape diversity. " }),
        Some(S { prefix: "For a small area, ", suffix: " has extraordinarily high landscape diversity. " }),
    ],
    // 1e6 to 1e7
    [
        Some(S { prefix: "", suffix: " has extraordinarily low landscape diversity. " }),
        Some(S { prefix: "", suffix: " has very low landscape diversity. " }),
        NONE,
        NONE,
        Some(S { prefix: "", suffix: " is a highly diverse landscape. " }),
        Some(S { prefix: "", suffix: " has extraordinarily high diversity in its landscape. " }),
    ],
    // 1e7 to 1e8
    [
        Some(S { prefix: "For such a large area, ", suffix: " has extraordinarily low diversity in its landscapes. " }),
        Some(S { prefix: "For such a large area, ", suffix: " has very low diversity in its landscapes. " }),
        NONE,
        NONE,
        Some(F("A rather large area with very diverse landscapes, ")),
        Some(F("A rather large area with extraordinarily diverse landscapes, ")),
    ],
    // 1e8 and above
    [
        Some(S { prefix: "For such a large area, ", suffix: " has extraordinarily little diversity in its landscapes. " }),
        Some(S { prefix: "For such a large area, ", suffix: " has very low landscape diversity. " }),
        Some(S { prefix: "", suffix: " has rather low landscape diversity. " }),
        NONE,
        Some(F("A very diverse area, ")),
        Some(F("An extraordinarily diverse area, ")),
    ],
];

fn tier(value: f64, bounds: &[f64]) -> usize {
    bounds.iter().position(|bound| value < *bound).unwrap_or(bounds.len())
}

/// Diversity remark for a polygon's area and mean diversity index.
pub fn narrate(area: f64, diversity: f64) -> Option<DiversityRemark> {
    REMARKS[tier(area, &AREA_TIERS)][tier(diversity, &DIVERSITY_TIERS)]
}
