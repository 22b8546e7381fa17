//! Paragraph order of narrative units.
//!
//! Leads are ranked by share. Lithology's lead then goes last and land
//! cover's lead goes third whenever they rank earlier, so descriptions open
//! on bioclimate or landform. Each lead is followed by its layer's rest
//! classes, largest first.

use crate::analysis::significance::SignificantClassSet;
use crate::types::Layer;

/// Lithology's lead may not sit before this index.
pub const LITHOLOGY_MIN_POSITION: usize = 3;
/// Land cover's lead may not sit before this index.
pub const LANDCOVER_MIN_POSITION: usize = 2;

/// One class slot in narrative order.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedClass {
    pub layer: Layer,
    pub label: String,
    pub cell_count: u64,
    pub percent: f64,
    /// 1 for the lead, then 2.. for rest classes by descending share.
    pub rank: usize,
}

/// Lead ordering plus the flattened unit sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct NarrativeOrder {
    pub leads: Vec<Layer>,
    pub units: Vec<RankedClass>,
}

impl NarrativeOrder {
    /// Position of a layer's lead among the leads.
    pub fn lead_position(&self, layer: Layer) -> Option<usize> {
        self.leads.iter().position(|l| *l == layer)
    }
}

/// Order significant class sets into narrative units.
///
/// Sets are expected in [`Layer::ALL`] order; ties in lead share keep that order.
pub fn order_units(sets: &[SignificantClassSet]) -> NarrativeOrder {
    let mut leads: Vec<&SignificantClassSet> = sets.iter().collect();
    leads.sort_by(|a, b| b.lead.percent.total_cmp(&a.lead.percent));

    move_back(&mut leads, Layer::Lithology, LITHOLOGY_MIN_POSITION);
    move_back(&mut leads, Layer::Landcover, LANDCOVER_MIN_POSITION);

    let mut units = Vec::new();
    for set in &leads {
        units.push(RankedClass {
            layer: set.layer,
            label: set.lead.label.clone(),
            cell_count: set.lead.cell_count,
            percent: set.lead.percent,
            rank: 1,
        });
        for (idx, rest) in set.rest_descending().into_iter().enumerate() {
            units.push(RankedClass {
                layer: set.layer,
                label: rest.label.clone(),
                cell_count: rest.cell_count,
                percent: rest.percent,
                rank: idx + 2,
            });
        }
    }

    NarrativeOrder {
        leads: leads.iter().map(|s| s.layer).collect(),
        units,
    }
}

/// Extract a layer's lead and reinsert it at `min_position` when it sits before it.
fn move_back(leads: &mut Vec<&SignificantClassSet>, layer: Layer, min_position: usize) {
    if let Some(pos) = leads.iter().position(|s| s.layer == layer) {
        if pos < min_position {
            let set = leads.remove(pos);
            leads.insert(min_position.min(leads.len()), set);
        }
    }
}
