//! Threshold ladders for narrative phrasing.
//!
//! Breakpoints are exact prose thresholds; they are not derived from
//! anything and must not be rounded.

use crate::types::{ElevationStats, PolygonContext};

// ============================================================================
// Proportion ladder
// ============================================================================

/// Share of the polygon covered by a class, as a phrase tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Proportion {
    All,
    Most,
    Much,
    JustOverHalf,
    Half,
    JustUnderHalf,
    Third,
    Quarter,
    /// 20% or less: narrated in a fraction sentence.
    Fraction,
}

impl Proportion {
    pub fn from_percent(percent: f64) -> Self {
        if percent > 99.0 {
            Proportion::All
        } else if percent > 80.0 {
            Proportion::Most
        } else if percent > 60.0 {
            Proportion::Much
        } else if percent > 51.0 {
            Proportion::JustOverHalf
        } else if percent > 49.0 {
            Proportion::Half
        } else if percent > 40.0 {
            Proportion::JustUnderHalf
        } else if percent > 30.0 {
            Proportion::Third
        } else if percent > 20.0 {
            Proportion::Quarter
        } else {
            Proportion::Fraction
        }
    }

    /// Phrase placed before the subject, e.g. "most of ".
    ///
    /// Empty for the whole polygon and for fractions.
    pub fn phrase(self) -> &'static str {
        match self {
            Proportion::All => "",
            Proportion::Most => "most of ",
            Proportion::Much => "much of ",
            Proportion::JustOverHalf => "just over half of ",
            Proportion::Half => "half of ",
            Proportion::JustUnderHalf => "just under half of ",
            Proportion::Third => "about a third of ",
            Proportion::Quarter => "about a quarter of ",
            Proportion::Fraction => "",
        }
    }

    /// Share phrase inside a sentence; fractions read "a fraction of ".
    pub fn lead_in(self) -> &'static str {
        match self {
            Proportion::Fraction => "a fraction of ",
            other => other.phrase(),
        }
    }

    pub fn is_fraction(self) -> bool {
        self == Proportion::Fraction
    }
}

// ============================================================================
// Composition tiers (correlated class share)
// ============================================================================

/// How completely a correlated class covers a class mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composition {
    Mostly,
    AlmostAll,
    Completely,
}

/// Tier for composition clauses: >= 50, >= 89, >= 99.
pub fn composition_tier(percent: f64) -> Option<Composition> {
    if percent >= 99.0 {
        Some(Composition::Completely)
    } else if percent >= 89.0 {
        Some(Composition::AlmostAll)
    } else if percent >= 50.0 {
        Some(Composition::Mostly)
    } else {
        None
    }
}

/// Tier for land cover ground qualifiers: > 50, > 90, > 99.
pub fn ground_tier(percent: f64) -> Option<Composition> {
    if percent > 99.0 {
        Some(Composition::Completely)
    } else if percent > 90.0 {
        Some(Composition::AlmostAll)
    } else if percent > 50.0 {
        Some(Composition::Mostly)
    } else {
        None
    }
}

// ============================================================================
// Elevation position
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElevationBand {
    Higher,
    Lower,
}

/// Band of a class mean against the polygon's full one-sigma range.
pub fn elevation_band(class: &ElevationStats, ctx: &PolygonContext) -> Option<ElevationBand> {
    if class.mean > ctx.elevation.plus_one_sd {
        Some(ElevationBand::Higher)
    } else if class.mean < ctx.elevation.minus_one_sd {
        Some(ElevationBand::Lower)
    } else {
        None
    }
}

/// Band of a class mean against half the polygon's one-sigma range.
pub fn elevation_band_half_sigma(class: &ElevationStats, ctx: &PolygonContext) -> Option<ElevationBand> {
    let mean = ctx.elevation.mean;
    let upper = mean + (ctx.elevation.plus_one_sd - mean) / 2.0;
    let lower = mean - (mean - ctx.elevation.minus_one_sd) / 2.0;
    if class.mean > upper {
        Some(ElevationBand::Higher)
    } else if class.mean < lower {
        Some(ElevationBand::Lower)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::context;

    #[test]
    fn test_proportion_ladder_breakpoints() {
        assert_eq!(Proportion::from_percent(100.0), Proportion::All);
        assert_eq!(Proportion::from_percent(99.0), Proportion::Most);
        assert_eq!(Proportion::from_percent(80.5), Proportion::Most);
        assert_eq!(Proportion::from_percent(61.0), Proportion::Much);
        assert_eq!(Proportion::from_percent(51.5), Proportion::JustOverHalf);
        assert_eq!(Proportion::from_percent(50.0), Proportion::Half);
        assert_eq!(Proportion::from_percent(45.0), Proportion::JustUnderHalf);
        assert_eq!(Proportion::from_percent(35.0), Proportion::Third);
        assert_eq!(Proportion::from_percent(25.0), Proportion::Quarter);
        assert_eq!(Proportion::from_percent(20.0), Proportion::Fraction);
        assert_eq!(Proportion::JustUnderHalf.phrase(), "just under half of ");
        assert_eq!(Proportion::Third.phrase(), "about a third of ");
        assert_eq!(Proportion::Fraction.lead_in(), "a fraction of ");
        assert_eq!(Proportion::Most.lead_in(), "most of ");
    }

    #[test]
    fn test_proportion_thresholds_are_strict() {
        assert_eq!(Proportion::from_percent(30.0), Proportion::Quarter);
        assert_eq!(Proportion::from_percent(30.1), Proportion::Third);
        assert_eq!(Proportion::from_percent(40.0), Proportion::Third);
        assert_eq!(Proportion::from_percent(20.1), Proportion::Quarter);
    }

    #[test]
    fn test_composition_tiers() {
        assert_eq!(composition_tier(49.9), None);
        assert_eq!(composition_tier(50.0), Some(Composition::Mostly));
        assert_eq!(composition_tier(89.0), Some(Composition::AlmostAll));
        assert_eq!(composition_tier(99.0), Some(Composition::Completely));
        assert_eq!(ground_tier(50.0), None);
        assert_eq!(ground_tier(90.0), Some(Composition::Mostly));
        assert_eq!(ground_tier(99.5), Some(Composition::Completely));
    }

    #[test]
    fn test_elevation_bands() {
        let ctx = context("Test Range", 1000);
        // polygon mean 600, -1sd 250, +1sd 950
        let mut stats = ctx.elevation;
        stats.mean = 800.0;
        assert_eq!(elevation_band(&stats, &ctx), None);
        assert_eq!(elevation_band_half_sigma(&stats, &ctx), Some(ElevationBand::Higher));
        stats.mean = 1000.0;
        assert_eq!(elevation_band(&stats, &ctx), Some(ElevationBand::Higher));
        stats.mean = 200.0;
        assert_eq!(elevation_band(&stats, &ctx), Some(ElevationBand::Lower));
        stats.mean = 400.0;
        assert_eq!(elevation_band_half_sigma(&stats, &ctx), Some(ElevationBand::Lower));
    }
}
