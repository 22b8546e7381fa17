//! Cell counts to percentages of the layer total.

use crate::error::{DescribeError, Result};
use crate::types::{ClassDistribution, ClassShare};

/// Convert a layer's cell counts into percentages of the layer total.
///
/// Classes with zero cells are dropped; input order is kept.
pub fn aggregate(distribution: &ClassDistribution) -> Result<Vec<ClassShare>> {
    let total = distribution.total_cells();
    if total == 0 {
        return Err(DescribeError::EmptyDistribution {
            layer: distribution.layer(),
        });
    }

    Ok(distribution
        .classes()
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|(label, count)| ClassShare {
            label: label.clone(),
            cell_count: *count,
            percent: (*count as f64 * 100.0) / total as f64,
        })
        .collect())
}
