//! Lithology paragraph
//!
//! "{lithology}{landform} underlie {share}{subject}. "
//!
//! Bedrock is only worth a sentence of its own when it shapes the relief.
//! When no major lithology (over 20%) mostly forms one landform, the whole
//! paragraph collapses into a single mixed-bedrock sentence.

use smallvec::SmallVec;

use crate::narrative::sections::{
    fraction_group, is_grouped, location_opener, subject, SynthesisState,
};
use crate::narrative::utils::classify::{composition_tier, Composition, Proportion};
use crate::narrative::utils::text::{capitalize_first, join_list};
use crate::types::{ClassRecord, Layer, PolygonContext};

/// Share above which a lithology counts as major in the mixed-bedrock sentence.
pub const MAJOR_PERCENT: f64 = 20.0;

/// Generate the lithology paragraph.
pub fn generate(ctx: &PolygonContext, units: &[&ClassRecord], state: &mut SynthesisState) -> String {
    if !units.iter().any(|unit| forms_relief(unit, state)) {
        let text = mixed_bedrock(ctx, units);
        for unit in units {
            state.observe(unit);
        }
        return text;
    }

    let mut paragraph = String::new();
    let mut fractions: SmallVec<[&ClassRecord; 4]> = SmallVec::new();

    for unit in units {
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
        "are",
        "",
        state,
        |unit, state| sentence(ctx, unit, state),
    ));
    paragraph
}

/// A major lithology that mostly forms a single narratable landform.
fn forms_relief(unit: &ClassRecord, state: &SynthesisState) -> bool {
    unit.percent > MAJOR_PERCENT
        && unit
            .co_occurrence(Layer::Landform)
            .is_some_and(|lf| state.allows(&lf.label) && composition_tier(lf.percent).is_some())
}

fn mixed_bedrock(ctx: &PolygonContext, units: &[&ClassRecord]) -> String {
    let (major, minor): (Vec<&ClassRecord>, Vec<&ClassRecord>) =
        units.iter().copied().partition(|unit| unit.percent > MAJOR_PERCENT);
    let major: SmallVec<[&str; 4]> = major.iter().map(|u| u.prose).collect();
    let minor: SmallVec<[&str; 4]> = minor.iter().map(|u| u.prose).collect();

    // majors chain with "and"; minors read as a fraction list
    let mut text = if major.is_empty() {
        format!(
            "A mix with no dominant lithology characterizes the landforms of {}",
            ctx.name.subject()
        )
    } else {
        format!(
            "A mix of {} predominate throughout the landforms of {}",
            major.join(" and "),
            ctx.name.subject()
        )
    };
    if minor.is_empty() {
        text.push_str(". ");
    } else {
        text.push_str(&format!(", along with small amounts of {}. ", join_list(&minor)));
    }
    text
}

fn sentence(ctx: &PolygonContext, unit: &ClassRecord, state: &SynthesisState) -> String {
    capitalize_first(&format!(
        "{}{} underlie {}{}. ",
        unit.prose,
        landform_clause(unit, state),
        Proportion::from_percent(unit.percent).lead_in(),
        subject(ctx, unit)
    ))
}

/// ", mostly forming high hills," and stronger forms.
fn landform_clause(unit: &ClassRecord, state: &SynthesisState) -> String {
    let Some(landform) = unit.co_occurrence(Layer::Landform) else {
        return String::new();
    };
    if !state.allows(&landform.label) {
        return String::new();
    }
    match composition_tier(landform.percent) {
        Some(Composition::Completely) => format!(", forming {},", landform.prose),
        Some(Composition::AlmostAll) => format!(", almost all of which form {},", landform.prose),
        Some(Composition::Mostly) => format!(", mostly forming {},", landform.prose),
        None => String::new(),
    }
}

fn location(ctx: &PolygonContext, unit: &ClassRecord) -> String {
    match unit.location.severity() {
        Some(severity) => format!(
            "{}{} are in the {} of the {}. ",
            location_opener(severity, true),
            unit.prose,
            unit.location.zone_phrase,
            ctx.name.noun
        ),
        None => String::new(),
    }
}
