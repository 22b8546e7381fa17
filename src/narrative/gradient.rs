//! Elevation gradient sentence.

use crate::analysis::elevation::ElevationGradient;
use crate::narrative::utils::text::{capitalize_first, format_thousands};
use crate::types::PolygonContext;

/// Lowest elevation as read in the introduction.
fn lowest_point(min: f64) -> String {
    let meters = min.round() as i64;
    match meters {
        0 => "sea level".to_string(),
        -4..=3 => "about sea level".to_string(),
        _ => format_thousands(meters),
    }
}

/// "{fragment}{subject} rises in elevation from {min} to {max} meters. "
pub fn introduction(ctx: &PolygonContext, fragment: &str) -> String {
    capitalize_first(&format!(
        "{}{} rises in elevation from {} to {} meters. ",
        fragment,
        ctx.name.subject(),
        lowest_point(ctx.elevation.min),
        format_thousands(ctx.elevation.max.round() as i64)
    ))
}

/// Render the gradient, with the elevation introduction when the gradient
/// starts at the lowest temperature bucket.
pub fn render(ctx: &PolygonContext, gradient: &ElevationGradient, fragment: Option<&str>) -> String {
    let steps: Vec<String> = gradient
        .transitions
        .iter()
        .map(|(warmer, colder)| format!("from {} to {}", warmer.word(), colder.word()))
        .collect();
    let drops = match steps.as_slice() {
        [] => return String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{}, and {}", init.join(", "), last),
    };

    let mut text = String::new();
    if gradient.starts_at_lowest {
        text.push_str(&introduction(ctx, fragment.unwrap_or("")));
    }
    text.push_str(&format!("As the elevation increases, temperatures drop {}. ", drops));
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::elevation::Temperature;
    use crate::test_support::context;
    use smallvec::smallvec;

    #[test]
    fn test_single_transition_with_introduction() {
        let ctx = context("study area", 1000);
        let gradient = ElevationGradient {
            transitions: smallvec![(Temperature::Warm, Temperature::Cool)],
            starts_at_lowest: true,
        };
        assert_eq!(
            render(&ctx, &gradient, Some("A uniform landscape, ")),
            "A uniform landscape, the study area rises in elevation from 12 to 1,840 meters. \
             As the elevation increases, temperatures drop from warm to cool. "
        );
    }

    #[test]
    fn test_three_transitions_without_introduction() {
        let ctx = context("study area", 1000);
        let gradient = ElevationGradient {
            transitions: smallvec![
                (Temperature::Hot, Temperature::Warm),
                (Temperature::Warm, Temperature::Cool),
                (Temperature::Cool, Temperature::Cold),
            ],
            starts_at_lowest: false,
        };
        assert_eq!(
            render(&ctx, &gradient, None),
            "As the elevation increases, temperatures drop from hot to warm, from warm to cool, \
             and from cool to cold. "
        );
    }

    #[test]
    fn test_sea_level_readings() {
        let mut ctx = context("Mount Olympus", 1000);
        ctx.elevation.min = 0.0;
        assert!(introduction(&ctx, "").starts_with("Mount Olympus rises in elevation from sea level to"));
        ctx.elevation.min = -3.0;
        assert!(introduction(&ctx, "").contains("from about sea level to 1,840 meters"));
        ctx.elevation.min = 2400.0;
        assert!(introduction(&ctx, "").contains("from 2,400 to"));
    }
}
