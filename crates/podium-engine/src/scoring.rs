//! Distance → relevance mapping.
//!
//! This is the only place distances are interpreted. The mapping assumes the
//! index reports distances in roughly `[0, 2]` (cosine distance, or L2
//! between unit vectors); an index with a different range must be rescaled
//! here.

/// Convert an index distance into a relevance score in `[0.0, 1.0]`.
///
/// A negative distance is treated as an already-computed similarity and its
/// absolute value is used. Otherwise `1 - distance / 2`, floored at zero.
pub fn relevance_from_distance(distance: f64) -> f64 {
    let raw = if distance < 0.0 {
        distance.abs()
    } else {
        (1.0 - distance / 2.0).max(0.0)
    };
    // f64::max/min drop NaN, so a NaN distance lands on 0.0.
    raw.max(0.0).min(1.0)
}

/// Round a score to three decimal places.
pub fn round_score(score: f64) -> f64 {
    (score * 1000.0).round() / 1000.0
}
