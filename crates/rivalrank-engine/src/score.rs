//! Composite candidate score.
//!
//! The weights are the ranking policy and are preserved exactly: rating
//! dominates, review volume helps with diminishing returns, proximity is a
//! linear per-kilometer penalty. The output is intentionally unclamped.

const RATING_WEIGHT: f64 = 20.0;
const REVIEW_WEIGHT: f64 = 3.0;
const DISTANCE_PENALTY_PER_KM: f64 = 1.2;

/// `rating × 20 + ln(1 + reviews) × 3 − km × 1.2`.
#[must_use]
pub fn score(rating: f64, review_count: u32, distance_meters: f64) -> f64 {
    rating * RATING_WEIGHT + (1.0 + f64::from(review_count)).ln() * REVIEW_WEIGHT
        - (distance_meters / 1000.0) * DISTANCE_PENALTY_PER_KM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worked_example_target() {
        // rating 4.5, 120 reviews, at the center
        let s = score(4.5, 120, 0.0);
        let expected = 4.5 * 20.0 + 121.0_f64.ln() * 3.0;
        assert!((s - expected).abs() < 1e-9);
        assert!((s - 104.39).abs() < 0.05, "got {s}");
    }

    #[test]
    fn worked_example_competitor_outranks_target() {
        let target = score(4.5, 120, 0.0);
        let competitor = score(4.8, 50, 800.0);
        assert!((competitor - 106.81).abs() < 0.05, "got {competitor}");
        assert!(competitor > target);
    }

    #[test]
    fn monotonically_non_decreasing_in_rating() {
        let lower = score(4.0, 50, 500.0);
        let higher = score(4.1, 50, 500.0);
        assert!(higher > lower);
    }

    #[test]
    fn monotonically_non_decreasing_in_reviews() {
        let lower = score(4.0, 50, 500.0);
        let higher = score(4.0, 51, 500.0);
        assert!(higher > lower);
    }

    #[test]
    fn non_increasing_in_distance() {
        let near = score(4.0, 50, 100.0);
        let far = score(4.0, 50, 5_000.0);
        assert!(far < near);
    }

    #[test]
    fn zero_everything_scores_zero() {
        assert_eq!(score(0.0, 0, 0.0), 0.0);
    }
}
