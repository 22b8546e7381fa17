//! Small text helpers shared by the narrative sections.

/// Uppercase the first character.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Join items as "a", "a and b", or "a, b, and c".
pub fn join_list<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(|s| s.as_ref()).collect();
            format!("{}, and {}", head.join(", "), last.as_ref())
        }
    }
}

/// Format an integer with comma thousands separators.
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if value < 0 {
        format!("-{}", out)
    } else {
        out
    }
}

/// Round to the nearest thousand.
pub fn round_to_thousands(value: f64) -> i64 {
    ((value / 1000.0).round() * 1000.0) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("most of the forest"), "Most of the forest");
        assert_eq!(capitalize_first("Sherwood"), "Sherwood");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_join_list() {
        assert_eq!(join_list::<&str>(&[]), "");
        assert_eq!(join_list(&["grassland"]), "grassland");
        assert_eq!(join_list(&["grassland", "shrubland"]), "grassland and shrubland");
        assert_eq!(
            join_list(&["grassland", "shrubland", "bare ground"]),
            "grassland, shrubland, and bare ground"
        );
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
        assert_eq!(format_thousands(-4500), "-4,500");
    }

    #[test]
    fn test_round_to_thousands() {
        assert_eq!(round_to_thousands(12345.6), 12000);
        assert_eq!(round_to_thousands(12500.0), 13000);
        assert_eq!(round_to_thousands(499.0), 0);
    }
}
