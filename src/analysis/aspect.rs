//! Dominant facing direction of a landform.
//!
//! Each compass direction is scored by the four aspect octants centred on
//! it. A direction is reported only when its window holds more than
//! [`FACING_THRESHOLD`] of all cells, flat cells included.

use crate::types::AspectHistogram;

pub const FACING_THRESHOLD: f64 = 0.583;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
}

impl Facing {
    pub fn name(self) -> &'static str {
        match self {
            Facing::North => "north",
            Facing::Northeast => "northeast",
            Facing::East => "east",
            Facing::Southeast => "southeast",
            Facing::South => "south",
            Facing::Southwest => "southwest",
            Facing::West => "west",
            Facing::Northwest => "northwest",
        }
    }

    /// Clause appended to a landform sentence.
    pub fn clause(self) -> String {
        format!(", generally facing {}", self.name())
    }
}

/// Octant codes (1..=8) in each direction's window, listed in tie priority.
static WINDOWS: &[(Facing, [usize; 4])] = &[
    (Facing::North, [7, 8, 1, 2]),
    (Facing::Northwest, [6, 7, 8, 1]),
    (Facing::Northeast, [8, 1, 2, 3]),
    (Facing::Southeast, [2, 3, 4, 5]),
    (Facing::South, [3, 4, 5, 6]),
    (Facing::Southwest, [4, 5, 6, 7]),
    (Facing::West, [5, 6, 7, 8]),
    (Facing::East, [1, 2, 3, 4]),
];

/// Classify an aspect histogram into a facing direction, if one dominates.
pub fn classify_aspect(histogram: &AspectHistogram) -> Option<Facing> {
    let all_cells: u64 = histogram.octants.iter().sum::<u64>() + histogram.undefined;
    if all_cells == 0 {
        return None;
    }

    let window_sum = |codes: &[usize; 4]| -> u64 {
        codes.iter().map(|code| histogram.octants[code - 1]).sum()
    };

    let mut best: Option<(Facing, u64)> = None;
    for (facing, codes) in WINDOWS {
        let sum = window_sum(codes);
        if best.map_or(true, |(_, current)| sum > current) {
            best = Some((*facing, sum));
        }
    }

    best.filter(|(_, sum)| *sum as f64 / all_cells as f64 > FACING_THRESHOLD)
        .map(|(facing, _)| facing)
}
