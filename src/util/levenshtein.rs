//! Levenshtein distance algorithms.
//!
//! Distances are measured in Unicode scalar values, so Cyrillic and Latin
//! words are compared character by character rather than byte by byte. The
//! fuzzy matcher only ever needs to know whether a candidate is within a
//! bound, so the distance is computed row by row and abandoned as soon as the
//! bound is exceeded.

use std::cmp::min;

/// Levenshtein distance between `s1` and `s2`, if it is at most `threshold`.
///
/// Returns `None` as soon as every cell of a row exceeds the threshold.
#[allow(clippy::needless_range_loop)]
pub fn levenshtein_distance_threshold(s1: &str, s2: &str, threshold: usize) -> Option<usize> {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let len1 = s1_chars.len();
    let len2 = s2_chars.len();

    if len1.abs_diff(len2) > threshold {
        return None;
    }

    if len1 == 0 {
        return (len2 <= threshold).then_some(len2);
    }
    if len2 == 0 {
        return (len1 <= threshold).then_some(len1);
    }

    // Two rows are enough
    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for i in 1..=len1 {
        curr_row[0] = i;
        let mut min_in_row = i;

        for j in 1..=len2 {
            let cost = if s1_chars[i - 1] == s2_chars[j - 1] {
                0
            } else {
                1
            };

            curr_row[j] = min(
                min(
                    prev_row[j] + 1,     // deletion
                    curr_row[j - 1] + 1, // insertion
                ),
                prev_row[j - 1] + cost, // substitution
            );

            min_in_row = min(min_in_row, curr_row[j]);
        }

        if min_in_row > threshold {
            return None;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[len2];
    (distance <= threshold).then_some(distance)
}

/// Normalized similarity in `[0.0, 1.0]`: `(max_len - distance) / max_len`.
///
/// Two empty strings are considered identical.
pub fn levenshtein_similarity(s1: &str, s2: &str, distance: usize) -> f64 {
    let max_len = s1.chars().count().max(s2.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    (max_len.saturating_sub(distance) as f64 / max_len as f64).max(0.0)
}
