//! Bioclimate paragraph
//!
//! One sentence per bioclimate class:
//! "{elevation}{share}{subject} has a {bioclimate} bioclimate{cover}. "
//! followed by a location sentence when the class concentrates in one zone.
//! The elevation gradient sentence, when there is one, opens the paragraph
//! ahead of the lead class.

use smallvec::SmallVec;

use crate::narrative::sections::{
    fraction_group, is_grouped, location_opener, subject, SynthesisState,
};
use crate::narrative::utils::classify::{
    composition_tier, elevation_band_half_sigma, Composition, ElevationBand, Proportion,
};
use crate::narrative::utils::text::capitalize_first;
use crate::types::{ClassRecord, Layer, PolygonContext};

/// Generate the bioclimate paragraph.
pub fn generate(
    ctx: &PolygonContext,
    units: &[&ClassRecord],
    gradient: &str,
    state: &mut SynthesisState,
) -> String {
    let mut paragraph = String::new();
    let mut fractions: SmallVec<[&ClassRecord; 4]> = SmallVec::new();

    for unit in units {
        if unit.is_lead() {
            paragraph.push_str(gradient);
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
        "have",
        " bioclimates",
        state,
        |unit, state| sentence(ctx, unit, state),
    ));
    paragraph
}

fn sentence(ctx: &PolygonContext, unit: &ClassRecord, state: &SynthesisState) -> String {
    let elevation = match elevation_band_half_sigma(&unit.elevation, ctx) {
        Some(ElevationBand::Higher) => "at the higher elevations, ",
        Some(ElevationBand::Lower) => "at the lower elevations, ",
        None => "",
    };
    let share = Proportion::from_percent(unit.percent).lead_in();
    capitalize_first(&format!(
        "{}{}{} has a {} bioclimate{}. ",
        elevation,
        share,
        subject(ctx, unit),
        unit.prose,
        cover_clause(unit, state)
    ))
}

/// ", which is mostly covered by forest" and stronger forms.
fn cover_clause(unit: &ClassRecord, state: &SynthesisState) -> String {
    let Some(cover) = unit.co_occurrence(Layer::Landcover) else {
        return String::new();
    };
    if !state.allows(&cover.label) {
        return String::new();
    }
    match composition_tier(cover.percent) {
        Some(Composition::Completely) => format!(", which is completely covered by {}", cover.prose),
        Some(Composition::AlmostAll) => {
            format!(", which is almost completely covered by {}", cover.prose)
        }
        Some(Composition::Mostly) => format!(", which is mostly covered by {}", cover.prose),
        None => String::new(),
    }
}

fn location(ctx: &PolygonContext, unit: &ClassRecord) -> String {
    match unit.location.severity() {
        Some(severity) => format!(
            "{}{} bioclimate zone is in the {} of the {}. ",
            location_opener(severity, false),
            unit.prose,
            unit.location.zone_phrase,
            ctx.name.noun
        ),
        None => String::new(),
    }
}
