use std::cmp::Ordering;
use std::ops::{Add, AddAssign};

use crate::distance::unit_distance;

/// A fuzzy sub-token match is discarded once more than a third of the longer
/// string would need editing.
const FUZZY_CUTOFF: f64 = 1.0 / 3.0;

/// Match strength for one document against one query (or any piece of one).
///
/// Kept as two accumulators rather than a scalar: `exact` counts
/// whole-string and substring evidence, `fuzzy` counts edit-distance
/// similarity. Ranking compares `exact` first, so any exact evidence
/// outranks approximate evidence of whatever magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Score {
    pub exact: f64,
    pub fuzzy: f64,
}

impl Score {
    pub const ZERO: Self = Self { exact: 0.0, fuzzy: 0.0 };

    /// Score of a whole-string equality match.
    pub const HIT: Self = Self { exact: 1.0, fuzzy: 0.0 };

    /// Score of a substring match.
    pub const PARTIAL: Self = Self { exact: 0.0, fuzzy: 1.0 };

    /// A `(0,0)` score is "no match" everywhere in the engine.
    pub fn is_zero(self) -> bool {
        self.exact == 0.0 && self.fuzzy == 0.0
    }

    /// Explicit ranking order: `exact` first, `fuzzy` as tie-break.
    /// Ascending; callers reverse it to sort best-first.
    pub fn cmp_rank(self, other: Self) -> Ordering {
        self.exact
            .total_cmp(&other.exact)
            .then(self.fuzzy.total_cmp(&other.fuzzy))
    }
}

impl Add for Score {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self { exact: self.exact + rhs.exact, fuzzy: self.fuzzy + rhs.fuzzy }
    }
}

impl AddAssign for Score {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::iter::Sum for Score {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// Score one query token against one target string.
///
/// Matching is case-insensitive. Whole-string equality scores `(1, 0)`;
/// with `exact_only` set nothing weaker is attempted. A contiguous
/// substring scores `(0, 1)`. Otherwise the target is split on whitespace
/// and each sub-token contributes its edit-distance similarity to the fuzzy
/// component; a target without whitespace degenerates to a single
/// whole-string fuzzy comparison.
pub fn match_token(token: &str, target: &str, exact_only: bool) -> Score {
    let token = token.to_lowercase();
    let target = target.to_lowercase();

    if token == target {
        return Score::HIT;
    }
    if exact_only {
        return Score::ZERO;
    }
    if target.contains(&token) {
        return Score::PARTIAL;
    }

    let fuzzy: f64 = target
        .split_whitespace()
        .map(|word| similarity(&token, word))
        .sum();
    Score { exact: 0.0, fuzzy }
}

/// Score one token against every value of a multi-valued field,
/// componentwise-summed. Additive on purpose: two co-authors each partially
/// matching accumulate more than a single match would.
pub fn match_field<S: AsRef<str>>(
    token: &str,
    targets: impl IntoIterator<Item = S>,
    exact_only: bool,
) -> Score {
    targets
        .into_iter()
        .map(|t| match_token(token, t.as_ref(), exact_only))
        .sum()
}

/// `1 - normalized distance` when within [`FUZZY_CUTOFF`], else 0.
/// Both inputs are already lowercased; lengths are in chars.
fn similarity(token: &str, word: &str) -> f64 {
    let longest = token.chars().count().max(word.chars().count());
    if longest == 0 {
        return 0.0;
    }
    let normalized = unit_distance(token, word) as f64 / longest as f64;
    if normalized <= FUZZY_CUTOFF { 1.0 - normalized } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_token_scores_exact_hit() {
        assert_eq!(match_token("rust", "rust", false), Score::HIT);
        // Regardless of exact_only.
        assert_eq!(match_token("rust", "rust", true), Score::HIT);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(match_token("RUST", "rust", false), Score::HIT);
        assert_eq!(match_token("go", "Effective Go", false), Score::PARTIAL);
    }

    #[test]
    fn exact_only_suppresses_weaker_matches() {
        assert_eq!(match_token("go", "Effective Go", true), Score::ZERO);
        assert_eq!(match_token("cat", "cast", true), Score::ZERO);
    }

    #[test]
    fn substring_scores_partial() {
        assert_eq!(match_token("go", "The Go Programming Language", false), Score::PARTIAL);
    }

    #[test]
    fn fuzzy_boundary_just_inside_cutoff() {
        // distance("cat","cast") = 1, longest = 4, normalized 0.25 <= 1/3.
        let score = match_token("cat", "cast", false);
        assert_eq!(score.exact, 0.0);
        assert!((score.fuzzy - 0.75).abs() < 1e-9);
    }

    #[test]
    fn fuzzy_boundary_just_outside_cutoff() {
        // distance("cat","cstx") = 2, longest = 4, normalized 0.5 > 1/3.
        assert_eq!(match_token("cat", "cstx", false), Score::ZERO);
    }

    #[test]
    fn fuzzy_sums_over_whitespace_subtokens() {
        // Both words sit within the cutoff against the token.
        let score = match_token("cat", "cast cart", false);
        assert_eq!(score.exact, 0.0);
        assert!((score.fuzzy - 1.5).abs() < 1e-9);
    }

    #[test]
    fn target_without_whitespace_is_one_comparison() {
        let whole = match_token("kitten", "mitten", false);
        assert_eq!(whole.exact, 0.0);
        assert!((whole.fuzzy - (1.0 - 1.0 / 6.0)).abs() < 1e-9);
    }

    #[test]
    fn match_field_accumulates_across_values() {
        let authors = ["Alan Donovan", "Brian Kernighan"];
        let single = match_token("an", authors[0], false);
        let both = match_field("an", authors, false);
        assert_eq!(single, Score::PARTIAL);
        assert_eq!(both, Score { exact: 0.0, fuzzy: 2.0 });
    }

    #[test]
    fn match_field_empty_targets_is_zero() {
        let none: [&str; 0] = [];
        assert_eq!(match_field("x", none, false), Score::ZERO);
    }

    #[test]
    fn rank_ordering_prefers_exact_over_fuzzy() {
        let exact = Score { exact: 1.0, fuzzy: 0.0 };
        let very_fuzzy = Score { exact: 0.0, fuzzy: 10.0 };
        assert_eq!(exact.cmp_rank(very_fuzzy), std::cmp::Ordering::Greater);
    }

    #[test]
    fn rank_ordering_breaks_ties_on_fuzzy() {
        let a = Score { exact: 1.0, fuzzy: 2.0 };
        let b = Score { exact: 1.0, fuzzy: 1.0 };
        assert_eq!(a.cmp_rank(b), std::cmp::Ordering::Greater);
        assert_eq!(b.cmp_rank(a), std::cmp::Ordering::Less);
        assert_eq!(a.cmp_rank(a), std::cmp::Ordering::Equal);
    }
}
