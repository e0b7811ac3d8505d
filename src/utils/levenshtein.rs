//! Edit distance for typo-tolerant matching.
//!
//! Classic dynamic-programming Levenshtein distance with unit costs for
//! insert, delete and substitute. Distances are measured in chars, not
//! bytes, so accented names behave like their ASCII spellings.

/// Edit distance between `a` and `b`.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let b_chars: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a.chars().count();
    }

    // Two rolling rows of the DP matrix
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, ac) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_chars.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

/// Are `a` and `b` within `max` edits of each other?
///
/// Gives the same answer as `levenshtein_distance(a, b) <= max` but stops as
/// soon as a whole DP row exceeds `max`, since row minima never decrease.
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    let a_len = a.chars().count();
    let b_chars: Vec<char> = b.chars().collect();

    // Length difference is a lower bound on edit distance
    if a_len.abs_diff(b_chars.len()) > max {
        return false;
    }

    let mut row: Vec<usize> = (0..=b_chars.len()).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;
        let mut row_min = row[0];

        for (j, &bc) in b_chars.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(ac != bc);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diag + cost);
            diag = above;
            row_min = row_min.min(row[j + 1]);
        }

        if row_min > max {
            return false;
        }
    }

    row[b_chars.len()] <= max
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_substitution() {
        assert_eq!(levenshtein_distance("smith", "smyth"), 1);
    }

    #[test]
    fn test_insert_and_delete() {
        assert_eq!(levenshtein_distance("jon", "john"), 1);
        assert_eq!(levenshtein_distance("john", "jon"), 1);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
    }

    #[test]
    fn test_empty_strings() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("abc", ""), 3);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(levenshtein_distance("josé", "jose"), 1);
        assert!(levenshtein_within("müller", "muller", 1));
    }

    #[test]
    fn test_within_early_exit() {
        assert!(!levenshtein_within("jo", "johnathan", 2));
        assert!(levenshtein_within("johnson", "jonson", 2));
        assert!(!levenshtein_within("smith", "jones", 2));
    }

    proptest! {
        #[test]
        fn prop_distance_is_symmetric(a in "[a-z]{0,8}", b in "[a-z]{0,8}") {
            prop_assert_eq!(levenshtein_distance(&a, &b), levenshtein_distance(&b, &a));
        }

        #[test]
        fn prop_distance_bounded_by_longer_len(a in "[a-z]{0,8}", b in "[a-z]{0,8}") {
            let d = levenshtein_distance(&a, &b);
            prop_assert!(d >= a.len().abs_diff(b.len()));
            prop_assert!(d <= a.len().max(b.len()));
        }

        #[test]
        fn prop_within_agrees_with_distance(a in "[a-d]{0,7}", b in "[a-d]{0,7}", max in 0usize..4) {
            prop_assert_eq!(levenshtein_within(&a, &b, max), levenshtein_distance(&a, &b) <= max);
        }
    }
}
