//! Per-layer share summaries
//!
//! Compact one-sentence digests of each layer: the lead share followed by a
//! rest clause, e.g. "45% of the study area is warm and dry, while 30% is
//! cool and moist, and 15% is hot and dry. "

use crate::narrative::utils::text::capitalize_first;
use crate::types::{ClassRecord, PolygonContext};

fn share(unit: &ClassRecord) -> String {
    format!("{}% is {}", unit.percent.trunc() as i64, unit.prose)
}

/// Rest clause for a layer's non-lead classes, largest first.
///
/// One class reads "but X. ", several read "while a, b, and c. ".
pub fn rest_clause(rest: &[&ClassRecord]) -> String {
    let mut sorted: Vec<&ClassRecord> = rest.to_vec();
    sorted.sort_by(|a, b| b.percent.total_cmp(&a.percent));
    let items: Vec<String> = sorted.iter().map(|u| share(u)).collect();
    match items.as_slice() {
        [] => String::new(),
        [only] => format!("but {}. ", only),
        [init @ .., last] => format!("while {}, and {}. ", init.join(", "), last),
    }
}

/// Summary sentence for one layer's units (lead first).
pub fn layer_summary(ctx: &PolygonContext, units: &[&ClassRecord]) -> String {
    let Some(lead) = units.iter().find(|u| u.is_lead()) else {
        return String::new();
    };
    let rest: Vec<&ClassRecord> = units.iter().copied().filter(|u| !u.is_lead()).collect();
    let opening = format!(
        "{}% of {} is {}",
        lead.percent.trunc() as i64,
        ctx.name.subject(),
        lead.prose
    );
    if rest.is_empty() {
        capitalize_first(&format!("{}. ", opening))
    } else {
        capitalize_first(&format!("{}, {}", opening, rest_clause(&rest)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{context, ranked, record};
    use crate::types::Layer;

    #[test]
    fn test_rest_clause_several() {
        let a = ranked(Layer::Bioclimate, "Hot Dry", 15.0, 3);
        let b = ranked(Layer::Bioclimate, "Cool Moist", 30.0, 2);
        assert_eq!(
            rest_clause(&[&a, &b]),
            "while 30% is cool and moist, and 15% is hot and dry. "
        );
    }

    #[test]
    fn test_rest_clause_single() {
        let a = ranked(Layer::Landcover, "Grassland", 22.7, 2);
        assert_eq!(rest_clause(&[&a]), "but 22% is grassland. ");
        assert_eq!(rest_clause(&[]), "");
    }

    #[test]
    fn test_layer_summary() {
        let ctx = context("study area", 1000);
        let lead = record(Layer::Bioclimate, "Warm Dry", 45.0);
        let b = ranked(Layer::Bioclimate, "Cool Moist", 30.0, 2);
        let c = ranked(Layer::Bioclimate, "Hot Dry", 15.0, 3);
        assert_eq!(
            layer_summary(&ctx, &[&lead, &b, &c]),
            "45% of the study area is warm and dry, while 30% is cool and moist, and 15% is hot and dry. "
        );
        assert_eq!(layer_summary(&ctx, &[&lead]), "45% of the study area is warm and dry. ");
    }
}
