/// Popularity ceiling for the hidden-gem heuristic.
const HIDDEN_GEM_MAX_POPULARITY: f64 = 50.0;
/// Rating floor for the hidden-gem heuristic.
const HIDDEN_GEM_MIN_RATING: f64 = 7.0;

/// Policy heuristic: obscure but well-rated.
///
/// Thresholds are fixed policy constants, not user-configurable.
pub fn is_hidden_gem(popularity: f64, rating_average: f64) -> bool {
    popularity < HIDDEN_GEM_MAX_POPULARITY && rating_average > HIDDEN_GEM_MIN_RATING
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_both_low_popularity_and_high_rating() {
        assert!(is_hidden_gem(10.0, 8.5));
        assert!(!is_hidden_gem(80.0, 9.0)); // too popular
        assert!(!is_hidden_gem(5.0, 6.0)); // rated too low
    }

    #[test]
    fn thresholds_are_exclusive() {
        assert!(!is_hidden_gem(50.0, 8.0));
        assert!(!is_hidden_gem(10.0, 7.0));
    }
}
