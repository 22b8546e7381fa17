//! Lead and rest class selection.
//!
//! The lead is the class with the greatest share (first occurrence wins on
//! ties). Rest classes are every other class above [`REST_THRESHOLD`].
//! Exact duplicate `(label, percent)` rows are removed first.

use crate::error::{DescribeError, Result};
use crate::types::{ClassShare, Layer};

/// Percentage a non-lead class must exceed to be narrated.
pub const REST_THRESHOLD: f64 = 10.0;

/// Lead plus rest classes of one layer.
#[derive(Debug, Clone, PartialEq)]
pub struct SignificantClassSet {
    pub layer: Layer,
    pub lead: ClassShare,
    /// Rest classes in input order.
    pub rest: Vec<ClassShare>,
}

impl SignificantClassSet {
    /// Whether the lead itself clears the rest threshold.
    pub fn is_significant(&self) -> bool {
        self.lead.percent > REST_THRESHOLD
    }

    /// Rest classes, largest first.
    pub fn rest_descending(&self) -> Vec<&ClassShare> {
        let mut rest: Vec<&ClassShare> = self.rest.iter().collect();
        rest.sort_by(|a, b| b.percent.total_cmp(&a.percent));
        rest
    }
}

/// Select the significant classes of one layer.
pub fn select(layer: Layer, shares: &[ClassShare]) -> Result<SignificantClassSet> {
    let mut unique: Vec<&ClassShare> = Vec::with_capacity(shares.len());
    for share in shares {
        let seen = unique
            .iter()
            .any(|u| u.label == share.label && u.percent.to_bits() == share.percent.to_bits());
        if !seen {
            unique.push(share);
        }
    }

    let mut lead_idx: Option<usize> = None;
    for (idx, share) in unique.iter().enumerate() {
        match lead_idx {
            Some(best) if unique[best].percent >= share.percent => {}
            _ => lead_idx = Some(idx),
        }
    }
    let lead_idx = lead_idx.ok_or(DescribeError::NoSignificantClass { layer })?;

    let rest = unique
        .iter()
        .enumerate()
        .filter(|(idx, share)| *idx != lead_idx && share.percent > REST_THRESHOLD)
        .map(|(_, share)| (*share).clone())
        .collect();

    Ok(SignificantClassSet {
        layer,
        lead: unique[lead_idx].clone(),
        rest,
    })
}
