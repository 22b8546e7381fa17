//! Land cover paragraph
//!
//! "{population}{elevation}{dense}{cover} covers {share}{subject}. "
//!
//! Bare and sparsely vegetated classes name the bedrock beneath them. Open
//! water with a meaningful 30 m water share is reported from that finer
//! layer instead: "Bodies of water cover about N% of the {noun}. "

use smallvec::SmallVec;

use crate::narrative::sections::{
    fraction_group, is_grouped, location_opener, subject, SynthesisState,
};
use crate::narrative::utils::classify::{
    elevation_band, ground_tier, Composition, ElevationBand, Proportion,
};
use crate::narrative::utils::text::{capitalize_first, format_thousands, round_to_thousands};
use crate::types::{ClassRecord, Layer, LayerDetail, PolygonContext};

/// Mean biomass above which tree cover is called dense.
pub const DENSE_BIOMASS: f64 = 7250.0;
/// Open 30 m water share (exclusive bounds) that overrides the water sentence.
pub const WATER_OVERRIDE_RANGE: (f64, f64) = (12.0, 100.0);

pub const URBAN: &str = "Urban areas";
pub const WATER_BODIES: &str = "Water bodies";

static BARE_CLASSES: &[&str] = &["Bare areas", "Consolidated bare areas", "Unconsolidated bare areas"];

static SPARSE_CLASSES: &[&str] = &[
    "Sparse shrub (<15%)",
    "Sparse herbaceous cover (<15%)",
    "Sparse vegetation (tree, shrub, herbaceous cover) (<15%)",
    "Lichens and mosses",
];

/// Classes whose prose is plural.
static PLURAL_CLASSES: &[&str] = &[URBAN, "Lichens and mosses"];

/// Generate the land cover paragraph.
pub fn generate(ctx: &PolygonContext, units: &[&ClassRecord], state: &mut SynthesisState) -> String {
    let mut paragraph = String::new();
    let mut fractions: SmallVec<[&ClassRecord; 4]> = SmallVec::new();

    for unit in units {
        if let Some(text) = water_override(ctx, unit) {
            paragraph.push_str(&text);
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
        "are covered by",
        "",
        state,
        |unit, state| sentence(ctx, unit, state),
    ));
    paragraph
}

fn water_override(ctx: &PolygonContext, unit: &ClassRecord) -> Option<String> {
    let (low, high) = WATER_OVERRIDE_RANGE;
    let water = ctx.water_30m_percent;
    if unit.label == WATER_BODIES && water > low && water < high {
        Some(format!(
            "Bodies of water cover about {}% of the {}. ",
            water.round_ties_even() as i64,
            ctx.name.noun
        ))
    } else {
        None
    }
}

fn sentence(ctx: &PolygonContext, unit: &ClassRecord, state: &SynthesisState) -> String {
    let (population, biomass) = match &unit.detail {
        LayerDetail::Landcover {
            population,
            biomass_mean,
        } => (*population, *biomass_mean),
        _ => (None, None),
    };

    let population = match population {
        Some(pop) if unit.label == URBAN => format!(
            "with an estimated population of {}, ",
            format_thousands(round_to_thousands(pop))
        ),
        _ => String::new(),
    };
    let elevation = match elevation_band(&unit.elevation, ctx) {
        Some(ElevationBand::Higher) => "at the higher elevations, ",
        Some(ElevationBand::Lower) => "at the lower elevations, ",
        None => "",
    };
    let dense = match biomass {
        Some(b) if unit.label.contains("Tree cover") && b > DENSE_BIOMASS => "dense, ",
        _ => "",
    };
    let verb = if PLURAL_CLASSES.contains(&unit.label.as_str()) {
        "cover"
    } else {
        "covers"
    };

    capitalize_first(&format!(
        "{}{}{}{} {} {}{}. ",
        population,
        elevation,
        dense,
        cover_phrase(unit, state),
        verb,
        Proportion::from_percent(unit.percent).lead_in(),
        subject(ctx, unit)
    ))
}

/// Cover prose, qualified by the ground beneath bare and sparse classes.
fn cover_phrase(unit: &ClassRecord, state: &SynthesisState) -> String {
    let ground = unit
        .co_occurrence(Layer::Lithology)
        .filter(|g| state.allows(&g.label))
        .and_then(|g| ground_tier(g.percent).map(|tier| (tier, g.prose)));
    let Some((tier, rock)) = ground else {
        return unit.prose.to_string();
    };

    let label = unit.label.as_str();
    if BARE_CLASSES.contains(&label) {
        match tier {
            Composition::Mostly => format!("{}, mostly {},", unit.prose, rock),
            Composition::AlmostAll => format!("{}, almost all {},", unit.prose, rock),
            Composition::Completely => format!("{}, composed of {},", unit.prose, rock),
        }
    } else if SPARSE_CLASSES.contains(&label) {
        match tier {
            Composition::Mostly => format!("{}, mostly on {},", unit.prose, rock),
            Composition::AlmostAll => format!("{}, almost all of it on {},", unit.prose, rock),
            Composition::Completely => format!("{} on {}", unit.prose, rock),
        }
    } else {
        unit.prose.to_string()
    }
}

fn location(ctx: &PolygonContext, unit: &ClassRecord) -> String {
    let Some(severity) = unit.location.severity() else {
        return String::new();
    };
    let plural = unit.label == URBAN;
    let verb = if plural { "are" } else { "is" };
    format!(
        "{}{} {} in the {} of the {}. ",
        location_opener(severity, plural),
        unit.prose,
        verb,
        unit.location.zone_phrase,
        ctx.name.noun
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{co, context, ranked, record};
    use crate::types::ZoneLocation;

    fn with_detail(mut unit: ClassRecord, population: Option<f64>, biomass: Option<f64>) -> ClassRecord {
        unit.detail = LayerDetail::Landcover {
            population,
            biomass_mean: biomass,
        };
        unit
    }

    #[test]
    fn test_water_override() {
        let mut ctx = context("study area", 1000);
        ctx.water_30m_percent = 52.3;
        let unit = record(Layer::Landcover, WATER_BODIES, 45.0);
        let mut state = SynthesisState::default();
        let text = generate(&ctx, &[&unit], &mut state);
        assert_eq!(text, "Bodies of water cover about 52% of the study area. ");
        assert!(state.water_mentioned());
    }

    #[test]
    fn test_water_override_rounds_half_to_even() {
        let unit = record(Layer::Landcover, WATER_BODIES, 45.0);
        for (water, shown) in [(52.5, "52%"), (53.5, "54%"), (52.51, "53%")] {
            let mut ctx = context("study area", 1000);
            ctx.water_30m_percent = water;
            let text = generate(&ctx, &[&unit], &mut SynthesisState::default());
            assert_eq!(text, format!("Bodies of water cover about {} of the study area. ", shown));
        }
    }

    #[test]
    fn test_water_without_override_is_plain_sentence() {
        let ctx = context("study area", 1000);
        let unit = record(Layer::Landcover, WATER_BODIES, 45.0);
        let text = generate(&ctx, &[&unit], &mut SynthesisState::default());
        assert_eq!(text, "Bodies of water covers just under half of the study area. ");
    }

    #[test]
    fn test_urban_population_and_plural_location() {
        let ctx = context("study area", 1000);
        let mut unit = with_detail(record(Layer::Landcover, URBAN, 65.0), Some(1_234_567.0), None);
        unit.location = ZoneLocation {
            cell_count: 600,
            zone_phrase: "east side",
            ratio: 0.995,
        };
        let text = generate(&ctx, &[&unit], &mut SynthesisState::default());
        assert_eq!(
            text,
            "With an estimated population of 1,235,000, urban areas cover much of the study area. \
             These urban areas are in the east side of the study area. "
        );
    }

    #[test]
    fn test_dense_tree_cover() {
        let ctx = context("Sherwood Forest", 1000);
        let label = "Tree cover, broadleaved, deciduous, closed to open (>15%)";
        let unit = with_detail(record(Layer::Landcover, label, 90.0), None, Some(8000.0));
        let text = generate(&ctx, &[&unit], &mut SynthesisState::default());
        assert_eq!(text, "Dense, broadleaved deciduous forest covers most of Sherwood Forest. ");
    }

    #[test]
    fn test_bare_ground_names_bedrock() {
        let ctx = context("study area", 1000);
        let mut unit = record(Layer::Landcover, "Bare areas", 55.0);
        unit.co_occurrences.set(Layer::Lithology, co(Layer::Lithology, "Evaporite", 95.0));
        let text = generate(&ctx, &[&unit], &mut SynthesisState::default());
        assert_eq!(
            text,
            "Bare ground, almost all areas of evaporite, covers just over half of the study area. "
        );
    }

    #[test]
    fn test_sparse_cover_on_bedrock() {
        let ctx = context("study area", 1000);
        let mut unit = record(Layer::Landcover, "Lichens and mosses", 100.0);
        unit.co_occurrences.set(Layer::Lithology, co(Layer::Lithology, "Metamorphics", 100.0));
        let text = generate(&ctx, &[&unit], &mut SynthesisState::default());
        assert_eq!(text, "Lichens and mosses on metamorphics cover the study area. ");
    }

    #[test]
    fn test_higher_elevation_and_fraction_group() {
        let ctx = context("study area", 1000);
        let lead = record(Layer::Landcover, "Grassland", 60.0);
        let mut high = ranked(Layer::Landcover, "Shrubland", 25.0, 2);
        high.elevation.mean = 990.0;
        let a = ranked(Layer::Landcover, "Urban areas", 12.0, 3);
        let b = ranked(Layer::Landcover, "Cropland, rainfed", 11.0, 4);
        let text = generate(&ctx, &[&lead, &high, &a, &b], &mut SynthesisState::default());
        assert!(text.contains("At the higher elevations, shrubland covers about a quarter of the study area. "));
        assert!(text.ends_with("Fractions of the study area are covered by urban areas and rainfed cropland. "));
    }
}
