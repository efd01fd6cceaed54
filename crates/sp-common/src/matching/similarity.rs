use std::collections::HashSet;

/// Jaccard index of two tag sets (|A ∩ B| / |A ∪ B|).
///
/// Two empty sets count as a perfect match: neither side said anything, so
/// there is nothing to disagree on. One empty side scores 0.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return 1.0,
        (true, false) | (false, true) => return 0.0,
        (false, false) => {}
    }

    let intersection = a.intersection(b).count();
    let union = a.union(b).count();

    intersection as f64 / union as f64
}

/// All-or-nothing match for single choice preferences. Both sides must have
/// picked something and picked the same thing.
pub fn preference_match(a: &str, b: &str) -> bool {
    !a.is_empty() && !b.is_empty() && a == b
}
