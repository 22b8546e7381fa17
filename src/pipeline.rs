//! Describe Pipeline
//!
//! Per-polygon orchestration:
//! 1. Resolve the name and build the polygon context
//! 2. Short-circuit polygons below the cell minimum
//! 3. Percentages and significant classes per layer
//! 4. Narrative order of lead and rest classes
//! 5. Class records: prose, correlations, zones, aspect, layer fields
//! 6. Narrative synthesis
//!
//! A malformed record aborts the attempt. `describe_with_retry` fetches a
//! fresh input and tries again, up to the configured attempt limit, then
//! skips the polygon. Batches run polygons in parallel with rayon.

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::analysis::{
    aggregate, analyze_zones, classify_aspect, dominant_class, order_units, select, RankedClass,
    SignificantClassSet,
};
use crate::config::DescriberConfig;
use crate::data::PolygonInput;
use crate::error::{DescribeError, Result};
use crate::naming::resolve_name;
use crate::narrative::sections::landcover::URBAN;
use crate::narrative::utils::lookup_tables::{require_prose, require_short_landcover};
use crate::narrative::{Description, NarrativeSynthesizer};
use crate::types::{
    ClassRecord, CoOccurrence, CoOccurrences, Layer, LayerDetail, PolygonContext,
};

/// Outcome of describing one polygon with retries.
#[derive(Debug, Clone, PartialEq)]
pub enum RetryOutcome {
    Described {
        description: Description,
        attempts: u32,
    },
    /// Every attempt hit a malformed record.
    Skipped {
        attempts: u32,
        last_error: DescribeError,
    },
}

impl RetryOutcome {
    pub fn attempts(&self) -> u32 {
        match self {
            RetryOutcome::Described { attempts, .. } | RetryOutcome::Skipped { attempts, .. } => {
                *attempts
            }
        }
    }

    pub fn description(&self) -> Option<&Description> {
        match self {
            RetryOutcome::Described { description, .. } => Some(description),
            RetryOutcome::Skipped { .. } => None,
        }
    }
}

/// Result for one polygon of a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchItem {
    pub id: i64,
    pub outcome: Result<RetryOutcome>,
}

/// Describes polygons with a fixed configuration.
#[derive(Debug, Clone)]
pub struct Describer {
    config: DescriberConfig,
    synthesizer: NarrativeSynthesizer,
}

impl Describer {
    pub fn new(config: DescriberConfig) -> Self {
        let synthesizer = NarrativeSynthesizer::new()
            .with_min_cells(config.min_cells)
            .with_summaries(config.include_summaries);
        Self {
            config,
            synthesizer,
        }
    }

    pub fn config(&self) -> &DescriberConfig {
        &self.config
    }

    /// Polygon-wide context of an input.
    pub fn context(&self, input: &PolygonInput) -> PolygonContext {
        PolygonContext {
            id: input.id,
            name: resolve_name(&input.attributes),
            cell_count: input.cell_count,
            cell_size: input.cell_size.unwrap_or(self.config.cell_size),
            elevation: input.elevation,
            diversity: input.diversity,
            water_30m_percent: input.water_30m_percent,
            zones: input.zones,
        }
    }

    /// Describe one polygon in a single attempt.
    pub fn describe(&self, input: &PolygonInput) -> Result<Description> {
        let ctx = self.context(input);
        if ctx.cell_count < self.synthesizer.min_cells() {
            debug!(id = ctx.id, cells = ctx.cell_count, "polygon too small to describe");
            return Ok(Description::TooSmall);
        }

        let mut sets: Vec<SignificantClassSet> = Vec::with_capacity(Layer::ALL.len());
        for layer in Layer::ALL {
            let shares = aggregate(&input.layers.distribution(layer))?;
            let set = select(layer, &shares)?;
            if !set.is_significant() {
                debug!(id = ctx.id, %layer, lead = %set.lead.label, "no class above the rest threshold");
            }
            sets.push(set);
        }

        let order = order_units(&sets);
        debug!(id = ctx.id, leads = ?order.leads, units = order.units.len(), "ordered narrative units");

        let records = order
            .units
            .iter()
            .map(|unit| build_record(&ctx, input, unit))
            .collect::<Result<Vec<_>>>()?;

        let description = self.synthesizer.synthesize(&ctx, &records);
        debug!(id = ctx.id, paragraphs = description.paragraphs().len(), "synthesized description");
        Ok(description)
    }

    /// Describe a polygon, re-fetching its input after malformed records.
    ///
    /// `fetch` receives the 1-based attempt number. Errors other than
    /// malformed records end the polygon immediately.
    pub fn describe_with_retry<F>(&self, mut fetch: F) -> Result<RetryOutcome>
    where
        F: FnMut(u32) -> Result<PolygonInput>,
    {
        let max_attempts = self.config.max_attempts.max(1);
        let mut last_error = None;

        for attempt in 1..=max_attempts {
            let result = fetch(attempt).and_then(|input| self.describe(&input));
            match result {
                Ok(description) => {
                    return Ok(RetryOutcome::Described {
                        description,
                        attempts: attempt,
                    })
                }
                Err(err) if err.is_retryable() => {
                    warn!(attempt, max_attempts, error = %err, "malformed record, retrying");
                    last_error = Some(err);
                }
                Err(err) => return Err(err),
            }
        }

        let last_error = last_error.unwrap_or_else(|| {
            DescribeError::InvalidInput("no attempt was made".to_string())
        });
        warn!(attempts = max_attempts, error = %last_error, "skipping polygon after repeated failures");
        Ok(RetryOutcome::Skipped {
            attempts: max_attempts,
            last_error,
        })
    }

    /// Describe many polygons in parallel; output order follows input order.
    pub fn describe_batch(&self, inputs: &[PolygonInput]) -> Vec<BatchItem> {
        info!(polygons = inputs.len(), "describing batch");
        let items: Vec<BatchItem> = inputs
            .par_iter()
            .map(|input| BatchItem {
                id: input.id,
                outcome: self.describe_with_retry(|_| Ok(input.clone())),
            })
            .collect();
        let described = items
            .iter()
            .filter(|item| matches!(item.outcome, Ok(RetryOutcome::Described { .. })))
            .count();
        info!(described, total = items.len(), "batch complete");
        items
    }
}

impl Default for Describer {
    fn default() -> Self {
        Self::new(DescriberConfig::default())
    }
}

/// Describe a polygon with retries under the given configuration.
pub fn describe_with_retry<F>(config: &DescriberConfig, fetch: F) -> Result<RetryOutcome>
where
    F: FnMut(u32) -> Result<PolygonInput>,
{
    Describer::new(config.clone()).describe_with_retry(fetch)
}

/// Build the annotated record of one ordered class.
fn build_record(ctx: &PolygonContext, input: &PolygonInput, unit: &RankedClass) -> Result<ClassRecord> {
    let layer = unit.layer;
    let label = unit.label.as_str();
    let missing = |what: &str| DescribeError::malformed(layer, label, format!("missing {}", what));

    let row = input
        .layers
        .find(layer, label)
        .ok_or_else(|| missing("class row"))?;
    let prose = require_prose(layer, label)?;
    let elevation = row.elevation.ok_or_else(|| missing("elevation statistics"))?;
    let zones = row.zones.ok_or_else(|| missing("zone counts"))?;

    let mut co_occurrences = CoOccurrences::default();
    for other in layer.others() {
        if let Some(corr) = dominant_class(row.cross(other)) {
            let prose = match other {
                Layer::Landcover => require_short_landcover(&corr.label)?,
                _ => require_prose(other, &corr.label)?,
            };
            co_occurrences.set(
                other,
                CoOccurrence {
                    label: corr.label,
                    percent: corr.percent,
                    prose,
                },
            );
        }
    }

    let detail = match layer {
        Layer::Bioclimate => LayerDetail::Bioclimate,
        Layer::Lithology => LayerDetail::Lithology,
        Layer::Landform => LayerDetail::Landform {
            slope: row.slope.ok_or_else(|| missing("slope statistics"))?,
            facing: row.aspect.as_ref().and_then(classify_aspect),
        },
        Layer::Landcover => {
            if label == URBAN && row.population.is_none() {
                return Err(missing("population"));
            }
            LayerDetail::Landcover {
                population: row.population,
                biomass_mean: row.biomass_mean,
            }
        }
    };

    Ok(ClassRecord {
        layer,
        label: unit.label.clone(),
        prose,
        cell_count: unit.cell_count,
        percent: unit.percent,
        rank: unit.rank,
        elevation,
        diversity_mean: row.diversity_mean,
        co_occurrences,
        detail,
        location: analyze_zones(&zones, &ctx.zones, unit.cell_count),
        zones,
    })
}
