//! Per-layer paragraph generators
//!
//! Each module renders one layer's paragraph from its ordered units (the lead
//! class followed by the layer's rest classes):
//! - bioclimate: climate sentences, preceded by the elevation gradient
//! - landform: relief sentences with slope, facing and bedrock clauses
//! - landcover: cover sentences with population, density and ground clauses
//! - lithology: bedrock sentences, or a mixed-bedrock summary
//!
//! Rest classes at 20% or less are collected into a fraction group that
//! closes the paragraph.

pub mod bioclimate;
pub mod landcover;
pub mod landform;
pub mod lithology;

use smallvec::SmallVec;

use crate::analysis::zones::ZoneSeverity;
use crate::narrative::utils::classify::Proportion;
use crate::narrative::utils::text::{capitalize_first, join_list};
use crate::types::{ClassRecord, Layer, PolygonContext};

/// Labels that name open water in any layer.
static WATER_LABELS: &[&str] = &["Water bodies", "Surface Water"];

pub fn is_water_label(label: &str) -> bool {
    WATER_LABELS.contains(&label)
}

/// State carried across paragraphs while one polygon is narrated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynthesisState {
    water_mentioned: bool,
}

impl SynthesisState {
    pub fn water_mentioned(&self) -> bool {
        self.water_mentioned
    }

    /// Whether a composition clause may name this correlated class.
    ///
    /// Once water has been narrated, clauses naming water are dropped.
    pub fn allows(&self, label: &str) -> bool {
        !(self.water_mentioned && is_water_label(label))
    }

    /// Record a rendered unit.
    pub fn observe(&mut self, unit: &ClassRecord) {
        let water_unit = match unit.layer {
            Layer::Landform | Layer::Landcover => is_water_label(&unit.label),
            _ => false,
        };
        let water_neighbour = [Layer::Landform, Layer::Landcover]
            .into_iter()
            .filter_map(|layer| unit.co_occurrence(layer))
            .any(|co| is_water_label(&co.label));
        if water_unit || water_neighbour {
            self.water_mentioned = true;
        }
    }
}

/// Subject of a unit's sentence: the proper name for the lead class, the
/// generic noun otherwise.
pub(crate) fn subject(ctx: &PolygonContext, unit: &ClassRecord) -> String {
    if unit.is_lead() {
        ctx.name.subject()
    } else {
        ctx.name.short_subject()
    }
}

/// Whether a unit goes to the fraction group instead of its own sentence.
pub(crate) fn is_grouped(unit: &ClassRecord) -> bool {
    !unit.is_lead() && Proportion::from_percent(unit.percent).is_fraction()
}

/// Sentence opener of a location sentence, "Most of this " through "This ".
pub(crate) fn location_opener(severity: ZoneSeverity, plural: bool) -> &'static str {
    match (severity, plural) {
        (ZoneSeverity::Most, false) => "Most of this ",
        (ZoneSeverity::AlmostAll, false) => "Almost all of this ",
        (ZoneSeverity::All, false) => "This ",
        (ZoneSeverity::Most, true) => "Most of these ",
        (ZoneSeverity::AlmostAll, true) => "Almost all of these ",
        (ZoneSeverity::All, true) => "These ",
    }
}

/// Closing text for a paragraph's fraction group.
///
/// A single member is narrated by `single`; several are listed as
/// "fractions of the {noun} {verb} a, b, and c{tail}. ".
pub(crate) fn fraction_group<F>(
    ctx: &PolygonContext,
    members: &[&ClassRecord],
    verb: &str,
    tail: &str,
    state: &mut SynthesisState,
    mut single: F,
) -> String
where
    F: FnMut(&ClassRecord, &SynthesisState) -> String,
{
    match members {
        [] => String::new(),
        [only] => {
            let text = single(*only, state);
            state.observe(*only);
            text
        }
        _ => {
            let names: SmallVec<[&str; 4]> = members.iter().map(|m| m.prose).collect();
            for member in members {
                state.observe(member);
            }
            capitalize_first(&format!(
                "fractions of the {} {} {}{}. ",
                ctx.name.noun,
                verb,
                join_list(&names),
                tail
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::record;
    use crate::types::CoOccurrence;

    #[test]
    fn test_water_state_from_landform_unit() {
        let mut state = SynthesisState::default();
        assert!(state.allows("Water bodies"));
        state.observe(&record(Layer::Landform, "Surface Water", 30.0));
        assert!(state.water_mentioned());
        assert!(!state.allows("Water bodies"));
        assert!(!state.allows("Surface Water"));
        assert!(state.allows("Grassland"));
    }

    #[test]
    fn test_water_state_from_correlated_landform() {
        let mut state = SynthesisState::default();
        let mut unit = record(Layer::Lithology, "Unconsolidated Sediment", 40.0);
        unit.co_occurrences.set(
            Layer::Landform,
            CoOccurrence {
                label: "Surface Water".to_string(),
                percent: 95.0,
                prose: "bodies of surface water",
            },
        );
        state.observe(&unit);
        assert!(state.water_mentioned());
    }

    #[test]
    fn test_bioclimate_unit_does_not_set_water() {
        let mut state = SynthesisState::default();
        state.observe(&record(Layer::Bioclimate, "Warm Dry", 60.0));
        assert!(!state.water_mentioned());
    }

    #[test]
    fn test_location_openers() {
        assert_eq!(location_opener(ZoneSeverity::Most, false), "Most of this ");
        assert_eq!(location_opener(ZoneSeverity::All, true), "These ");
    }
}
