//! Dominant co-occurring class within a class mask.

use rustc_hash::FxHashMap;

use crate::types::Correlation;

/// Pick the class with the most cells in a tabulation restricted to a mask.
///
/// Repeated labels are summed. Ties go to the greater label. Returns `None`
/// when the mask holds no cells.
pub fn dominant_class(tabulation: &[(String, u64)]) -> Option<Correlation> {
    let mut counts: FxHashMap<&str, u64> = FxHashMap::default();
    for (label, count) in tabulation {
        *counts.entry(label.as_str()).or_insert(0) += count;
    }

    let total: u64 = counts.values().sum();
    if total == 0 {
        return None;
    }

    counts
        .into_iter()
        .max_by(|a, b| (a.1, a.0).cmp(&(b.1, b.0)))
        .map(|(label, count)| Correlation {
            label: label.to_string(),
            percent: count as f64 * 100.0 / total as f64,
        })
}
