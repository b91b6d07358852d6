use std::collections::HashSet;
use std::hash::Hash;

/// Stable first-occurrence de-duplication over an ordered sequence.
///
/// The first element for each key survives in its original position;
/// later duplicates are dropped. Applying the function twice returns the
/// same sequence (idempotent).
pub fn dedup_by_key<T, K, F>(items: Vec<T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key(item)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_occurrence_in_order() {
        let items = vec![("a", 1), ("b", 2), ("a", 3), ("c", 4), ("b", 5)];
        let deduped = dedup_by_key(items, |item| item.0);
        assert_eq!(deduped, vec![("a", 1), ("b", 2), ("c", 4)]);
    }

    #[test]
    fn deduplication_is_idempotent() {
        let items = vec![("x", 1), ("y", 2), ("x", 3)];
        let once = dedup_by_key(items, |item| item.0);
        let twice = dedup_by_key(once.clone(), |item| item.0);
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_input_stays_empty() {
        let items: Vec<(&str, i32)> = Vec::new();
        assert!(dedup_by_key(items, |item| item.0).is_empty());
    }
}
