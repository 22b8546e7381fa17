//! Narrative Synthesizer
//!
//! Main entry point for turning a polygon's ordered class records into its
//! description. Orchestrates the four layer paragraphs, the diversity remark,
//! the elevation gradient and the optional summaries paragraph.
//!
//! Public API (consumed by pipeline.rs and the describe_polygons binary):
//! - NarrativeSynthesizer::new() -> Self
//! - NarrativeSynthesizer::synthesize(ctx, units) -> Description

use std::fmt;

use serde::Serialize;

use crate::analysis::elevation::analyze_gradient;
use crate::narrative::sections::{bioclimate, landcover, landform, lithology, SynthesisState};
use crate::narrative::{diversity, gradient, summary};
use crate::types::{ClassRecord, Layer, PolygonContext};

/// Output for polygons below the cell minimum.
pub const TOO_SMALL_SENTENCE: &str = "This area is too small to meaningfully describe.";
/// Marker between paragraphs.
pub const PARAGRAPH_BREAK: &str = "</p><p>";
/// Default cell minimum for a narrative.
pub const DEFAULT_MIN_CELLS: u64 = 16;

/// Result of synthesis for one polygon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Description {
    TooSmall,
    Narrative { paragraphs: Vec<String> },
}

impl Description {
    pub fn is_too_small(&self) -> bool {
        matches!(self, Description::TooSmall)
    }

    pub fn paragraphs(&self) -> &[String] {
        match self {
            Description::TooSmall => &[],
            Description::Narrative { paragraphs } => paragraphs,
        }
    }

    /// Paragraphs joined with the paragraph marker.
    pub fn text(&self) -> String {
        match self {
            Description::TooSmall => TOO_SMALL_SENTENCE.to_string(),
            Description::Narrative { paragraphs } => paragraphs.join(PARAGRAPH_BREAK),
        }
    }

    /// Text wrapped as HTML paragraphs.
    pub fn to_html(&self) -> String {
        format!("<p>{}</p>", self.text())
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// Sentence-template engine; stateless between polygons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NarrativeSynthesizer {
    min_cells: u64,
    include_summaries: bool,
}

impl NarrativeSynthesizer {
    pub fn new() -> Self {
        Self {
            min_cells: DEFAULT_MIN_CELLS,
            include_summaries: false,
        }
    }

    pub fn with_min_cells(mut self, min_cells: u64) -> Self {
        self.min_cells = min_cells;
        self
    }

    pub fn with_summaries(mut self, include: bool) -> Self {
        self.include_summaries = include;
        self
    }

    pub fn min_cells(&self) -> u64 {
        self.min_cells
    }

    /// Synthesize the description of one polygon.
    ///
    /// `units` must be in narrative order: layers contiguous, each lead
    /// followed by its rest classes. Output is a pure function of the inputs.
    pub fn synthesize(&self, ctx: &PolygonContext, units: &[ClassRecord]) -> Description {
        if ctx.cell_count < self.min_cells {
            return Description::TooSmall;
        }

        let remark = diversity::narrate(ctx.area(), ctx.diversity.mean);
        let gradient_text = analyze_gradient(units)
            .map(|g| gradient::render(ctx, &g, remark.and_then(|r| r.fragment())))
            .unwrap_or_default();

        let groups = group_by_layer(units);
        let mut state = SynthesisState::default();
        let mut paragraphs: Vec<String> = Vec::with_capacity(groups.len() + 1);

        for (layer, group) in &groups {
            let text = match layer {
                Layer::Bioclimate => bioclimate::generate(ctx, group, &gradient_text, &mut state),
                Layer::Landform => landform::generate(ctx, group, &mut state),
                Layer::Landcover => landcover::generate(ctx, group, &mut state),
                Layer::Lithology => lithology::generate(ctx, group, &mut state),
            };
            let text = text.trim_end();
            if !text.is_empty() {
                paragraphs.push(text.to_string());
            }
        }

        if let Some(statement) = remark.and_then(|r| r.statement(&ctx.name.subject())) {
            match paragraphs.first_mut() {
                Some(first) => first.insert_str(0, &statement),
                None => paragraphs.push(statement.trim_end().to_string()),
            }
        }

        if self.include_summaries {
            let summaries: String = groups
                .iter()
                .map(|(_, group)| summary::layer_summary(ctx, group))
                .collect();
            let summaries = summaries.trim_end();
            if !summaries.is_empty() {
                paragraphs.push(summaries.to_string());
            }
        }

        Description::Narrative { paragraphs }
    }
}

impl Default for NarrativeSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Split ordered units into per-layer runs, keeping first-appearance order.
fn group_by_layer(units: &[ClassRecord]) -> Vec<(Layer, Vec<&ClassRecord>)> {
    let mut groups: Vec<(Layer, Vec<&ClassRecord>)> = Vec::with_capacity(4);
    for unit in units {
        match groups.iter_mut().find(|(layer, _)| *layer == unit.layer) {
            Some((_, group)) => group.push(unit),
            None => groups.push((unit.layer, vec![unit])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{context, ranked, record};

    fn sample_units() -> Vec<ClassRecord> {
        vec![
            record(Layer::Bioclimate, "Warm Dry", 45.0),
            ranked(Layer::Bioclimate, "Cool Moist", 30.0, 2),
            ranked(Layer::Bioclimate, "Hot Dry", 15.0, 3),
            record(Layer::Landform, "High Hills", 40.0),
            record(Layer::Landcover, "Grassland", 35.0),
            record(Layer::Lithology, "Metamorphics", 30.0),
        ]
    }

    #[test]
    fn test_too_small() {
        let ctx = context("study area", 15);
        let desc = NarrativeSynthesizer::new().synthesize(&ctx, &sample_units());
        assert!(desc.is_too_small());
        assert_eq!(desc.text(), TOO_SMALL_SENTENCE);
        assert!(desc.paragraphs().is_empty());
    }

    #[test]
    fn test_min_cells_is_inclusive() {
        let ctx = context("study area", 16);
        let desc = NarrativeSynthesizer::new().synthesize(&ctx, &sample_units());
        assert!(!desc.is_too_small());
    }

    #[test]
    fn test_one_paragraph_per_layer() {
        let ctx = context("study area", 1000);
        let desc = NarrativeSynthesizer::new().synthesize(&ctx, &sample_units());
        assert_eq!(desc.paragraphs().len(), 4);
        assert!(desc.paragraphs()[0].starts_with("Just under half of the study area has a warm and dry bioclimate."));
        let text = desc.text();
        assert_eq!(text.matches(PARAGRAPH_BREAK).count(), 3);
        assert!(!text.ends_with(PARAGRAPH_BREAK));
        assert!(!text.ends_with(' '));
    }

    #[test]
    fn test_html_wrapping() {
        let ctx = context("study area", 1000);
        let desc = NarrativeSynthesizer::new().synthesize(&ctx, &sample_units());
        let html = desc.to_html();
        assert!(html.starts_with("<p>Just under half"));
        assert!(html.ends_with("</p>"));
        assert_eq!(html.matches("</p><p>").count(), 3);
    }

    #[test]
    fn test_diversity_statement_opens_first_paragraph() {
        let mut ctx = context("study area", 1000);
        // 1000 cells of ~231.9 square units fall in the 53,000 to 1e6 tier
        ctx.diversity.mean = 4.0;
        let desc = NarrativeSynthesizer::new().synthesize(&ctx, &sample_units());
        assert!(desc.paragraphs()[0].starts_with(
            "For a small area, the study area has very high landscape diversity. Just under half"
        ));
    }

    #[test]
    fn test_summaries_paragraph() {
        let ctx = context("study area", 1000);
        let desc = NarrativeSynthesizer::new()
            .with_summaries(true)
            .synthesize(&ctx, &sample_units());
        let last = desc.paragraphs().last().unwrap();
        assert!(last.starts_with(
            "45% of the study area is warm and dry, while 30% is cool and moist, and 15% is hot and dry. "
        ));
        assert!(last.ends_with("30% of the study area is metamorphics."));
    }

    #[test]
    fn test_synthesis_is_idempotent() {
        let ctx = context("Sherwood Forest", 1000);
        let synth = NarrativeSynthesizer::new().with_summaries(true);
        let units = sample_units();
        assert_eq!(synth.synthesize(&ctx, &units).text(), synth.synthesize(&ctx, &units).text());
    }

    #[test]
    fn test_description_serializes_with_kind() {
        let json = serde_json::to_string(&Description::TooSmall).unwrap();
        assert_eq!(json, r#"{"kind":"too_small"}"#);
    }
}
