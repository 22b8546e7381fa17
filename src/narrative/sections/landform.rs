//! Landform paragraph
//!
//! "{elevation}{share}{subject} is {slope}{landform}{facing}{bedrock}. "
//! Fractions read "a fraction of the {noun} is|are ..." with the noun's verb.
//! Hills and mountains may be called extremely steep and carry a facing
//! clause. Surface water is never narrated as a landform; it only marks
//! water as mentioned.

use smallvec::SmallVec;

use crate::narrative::sections::{
    fraction_group, is_grouped, is_water_label, location_opener, subject, SynthesisState,
};
use crate::narrative::utils::classify::{
    composition_tier, elevation_band, Composition, ElevationBand, Proportion,
};
use crate::narrative::utils::text::capitalize_first;
use crate::types::{ClassRecord, Layer, LayerDetail, PolygonContext};

/// Mean slope (percent) above which hills and mountains are extremely steep.
pub const STEEP_SLOPE: f64 = 40.0;

/// Generate the landform paragraph.
pub fn generate(ctx: &PolygonContext, units: &[&ClassRecord], state: &mut SynthesisState) -> String {
    let mut paragraph = String::new();
    let mut fractions: SmallVec<[&ClassRecord; 4]> = SmallVec::new();

    for unit in units {
        if is_water_label(&unit.label) {
            state.observe(unit);
            continue;
        }
        if is_grouped(unit) {
            fractions.push(*unit);
            continue;
        }
        paragraph.push_str(&sentence(ctx, unit, state));
        if !Proportion::from_percent(unit.percent).is_fraction() {
            paragraph.push_str(&location(ctx, unit));
        }
        state.observe(unit);
    }

    paragraph.push_str(&fraction_group(
        ctx,
        &fractions,
        "form",
        "",
        state,
        |unit, state| sentence(ctx, unit, state),
    ));
    paragraph
}

fn is_relief(unit: &ClassRecord) -> bool {
    unit.prose.contains("hills") || unit.prose.contains("mountains")
}

fn sentence(ctx: &PolygonContext, unit: &ClassRecord, state: &SynthesisState) -> String {
    let elevation = match elevation_band(&unit.elevation, ctx) {
        Some(ElevationBand::Higher) => "at higher elevations, ",
        Some(ElevationBand::Lower) => "at lower elevations, ",
        None => "",
    };

    let (mut slope, mut facing) = ("", String::new());
    if let LayerDetail::Landform { slope: stats, facing: dir } = &unit.detail {
        if is_relief(unit) {
            if stats.mean > STEEP_SLOPE {
                slope = "extremely steep ";
            }
            if let Some(dir) = dir {
                facing = dir.clause();
            }
        }
    }

    // fractions take the noun's own verb form: "a fraction of the hills are"
    let share = Proportion::from_percent(unit.percent);
    let opening = if share.is_fraction() {
        format!("a fraction of the {}", ctx.name.singular)
    } else {
        format!("{}{} is", share.lead_in(), subject(ctx, unit))
    };

    capitalize_first(&format!(
        "{}{} {}{}{}{}. ",
        elevation,
        opening,
        slope,
        unit.prose,
        facing,
        bedrock_clause(unit, state)
    ))
}

/// ", mostly composed of granite" and stronger forms.
fn bedrock_clause(unit: &ClassRecord, state: &SynthesisState) -> String {
    let Some(bedrock) = unit.co_occurrence(Layer::Lithology) else {
        return String::new();
    };
    if !state.allows(&bedrock.label) {
        return String::new();
    }
    match composition_tier(bedrock.percent) {
        Some(Composition::Completely) => format!(", completely composed of {}", bedrock.prose),
        Some(Composition::AlmostAll) => format!(", almost all composed of {}", bedrock.prose),
        Some(Composition::Mostly) => format!(", mostly composed of {}", bedrock.prose),
        None => String::new(),
    }
}

fn location(ctx: &PolygonContext, unit: &ClassRecord) -> String {
    match unit.location.severity() {
        Some(severity) => format!(
            "{}{} are on the {} of the {}. ",
            location_opener(severity, true),
            unit.prose,
            unit.location.zone_phrase,
            ctx.name.noun
        ),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::aspect::Facing;
    use crate::test_support::{co, context, ranked, record};
    use crate::types::SlopeStats;

    fn with_slope(mut unit: ClassRecord, mean: f64, facing: Option<Facing>) -> ClassRecord {
        unit.detail = LayerDetail::Landform {
            slope: SlopeStats { mean, median: mean },
            facing,
        };
        unit
    }

    #[test]
    fn test_steep_mountains_facing_and_bedrock() {
        let ctx = context("Sierra Blanca", 1000);
        let mut unit = with_slope(
            record(Layer::Landform, "High Mountains", 85.0),
            45.0,
            Some(Facing::North),
        );
        unit.co_occurrences.set(Layer::Lithology, co(Layer::Lithology, "Metamorphics", 92.0));
        let text = generate(&ctx, &[&unit], &mut SynthesisState::default());
        assert_eq!(
            text,
            "Most of Sierra Blanca is extremely steep high mountains, generally facing north, \
             almost all composed of metamorphics. "
        );
    }

    #[test]
    fn test_hills_get_facing_clause_too() {
        let ctx = context("study area", 1000);
        let unit = with_slope(record(Layer::Landform, "Moderate Hills", 100.0), 12.0, Some(Facing::Southeast));
        let text = generate(&ctx, &[&unit], &mut SynthesisState::default());
        assert!(text.contains("moderate hills, generally facing southeast. "));
        assert!(!text.contains("steep"));
    }

    #[test]
    fn test_plains_never_steep() {
        let ctx = context("study area", 1000);
        let unit = with_slope(
            record(Layer::Landform, "Flat or Nearly Flat Plains", 100.0),
            55.0,
            Some(Facing::West),
        );
        let text = generate(&ctx, &[&unit], &mut SynthesisState::default());
        assert_eq!(text, "The study area is flat or nearly flat plains. ");
    }

    #[test]
    fn test_surface_water_not_narrated() {
        let ctx = context("study area", 1000);
        let lead = record(Layer::Landform, "Surface Water", 60.0);
        let rest = ranked(Layer::Landform, "Low Mountains", 45.0, 2);
        let mut state = SynthesisState::default();
        let text = generate(&ctx, &[&lead, &rest], &mut state);
        assert!(!text.contains("surface water"));
        assert!(text.contains("Just under half of the study area is low mountains. "));
        assert!(state.water_mentioned());
    }

    #[test]
    fn test_lower_elevation_full_sigma() {
        let ctx = context("study area", 1000);
        let mut unit = ranked(Layer::Landform, "Smooth Plains with some local relief", 30.0, 2);
        unit.elevation.mean = 200.0;
        let lead = record(Layer::Landform, "High Hills", 70.0);
        let text = generate(&ctx, &[&lead, &unit], &mut SynthesisState::default());
        assert!(text.contains("At lower elevations, about a quarter of the study area is smooth plains"));
    }

    #[test]
    fn test_single_fraction_uses_noun_verb_form() {
        let ctx = context("Black Hills", 1000);
        let lead = record(Layer::Landform, "High Hills", 85.0);
        let rest = ranked(Layer::Landform, "Low Mountains", 15.0, 2);
        let text = generate(&ctx, &[&lead, &rest], &mut SynthesisState::default());
        assert!(text.starts_with("Most of Black Hills is high hills. "));
        assert!(text.ends_with("A fraction of the hills are low mountains. "));
    }

    #[test]
    fn test_fraction_group_form() {
        let ctx = context("study area", 1000);
        let lead = record(Layer::Landform, "High Hills", 70.0);
        let a = ranked(Layer::Landform, "Low Mountains", 16.0, 2);
        let b = ranked(Layer::Landform, "Tablelands with High Relief", 14.0, 3);
        let text = generate(&ctx, &[&lead, &a, &b], &mut SynthesisState::default());
        assert!(text.ends_with(
            "Fractions of the study area form low mountains and tablelands with high relief. "
        ));
    }
}
