//! Rule quality measures.
//!
//! Every formula works on the counts accumulated by a scoring pass:
//!
//! - `n`: number of sequences in the database
//! - `m`: rule match count
//! - `a`: antecedent support
//! - `c`: consequent support (rule-relative under the default policy)
//!
//! No formula guards against zero denominators beyond the branches listed
//! below. A degenerate input yields `inf` or `NaN`, exactly as plain IEEE
//! division does.
//!
//! | Measure | Formula |
//! |---|---|
//! | relative support | `m / n` |
//! | confidence | `m / a` |
//! | lift | `(m/n) / ((c/n) * (a/n))` |
//! | certainty factor | `(conf - c/n) / (1 - c/n)` if `conf > c/n`, `(conf - c/n) / (c/n)` if `conf < c/n`, else `0` |
//! | conviction | `1` if `c/n == 1` or `a/n == 0`, else `(a/n * (1 - c/n)) / (a/n - m/n)` |
//!
//! # References
//!
//! - Brin et al. (1997), "Dynamic Itemset Counting and Implication Rules"
//! - Shortliffe & Buchanan (1975), "A Model of Inexact Reasoning in Medicine"

/// All measures of one scored rule.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleMeasures {
    /// Absolute support (match count).
    pub support: usize,
    /// `support / sequence_count`.
    pub relative_support: f64,
    pub confidence: f64,
    pub lift: f64,
    pub certainty_factor: f64,
    pub conviction: f64,
}

impl RuleMeasures {
    /// Computes every measure from the raw counts.
    pub fn compute(
        match_count: usize,
        antecedent_support: usize,
        consequent_support: usize,
        sequence_count: usize,
    ) -> Self {
        Self {
            support: match_count,
            relative_support: relative_support(match_count, sequence_count),
            confidence: confidence(match_count, antecedent_support),
            lift: lift(
                match_count,
                antecedent_support,
                consequent_support,
                sequence_count,
            ),
            certainty_factor: certainty_factor(
                match_count,
                antecedent_support,
                consequent_support,
                sequence_count,
            ),
            conviction: conviction(
                match_count,
                antecedent_support,
                consequent_support,
                sequence_count,
            ),
        }
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    numerator as f64 / denominator as f64
}

/// `match_count / sequence_count`.
pub fn relative_support(match_count: usize, sequence_count: usize) -> f64 {
    ratio(match_count, sequence_count)
}

/// `match_count / antecedent_support`.
///
/// Returns `NaN` when both are zero.
pub fn confidence(match_count: usize, antecedent_support: usize) -> f64 {
    ratio(match_count, antecedent_support)
}

/// Observed joint support over the support expected under independence.
pub fn lift(
    match_count: usize,
    antecedent_support: usize,
    consequent_support: usize,
    sequence_count: usize,
) -> f64 {
    let sup = ratio(match_count, sequence_count);
    let sup_c = ratio(consequent_support, sequence_count);
    let sup_a = ratio(antecedent_support, sequence_count);
    sup / (sup_c * sup_a)
}

/// Deviation of confidence from the consequent's base rate, normalized
/// into `[-1, 1]`.
///
/// A `NaN` confidence falls through to the equality branch and yields `0`.
pub fn certainty_factor(
    match_count: usize,
    antecedent_support: usize,
    consequent_support: usize,
    sequence_count: usize,
) -> f64 {
    let conf = confidence(match_count, antecedent_support);
    let sup_c = ratio(consequent_support, sequence_count);
    if conf > sup_c {
        (conf - sup_c) / (1.0 - sup_c)
    } else if conf < sup_c {
        (conf - sup_c) / sup_c
    } else {
        0.0
    }
}

/// Implication strength, sensitive to rule direction.
///
/// Short-circuits to exactly `1.0` when the consequent is supported by every
/// sequence or the antecedent by none. `a/n == m/n` otherwise divides by zero.
pub fn conviction(
    match_count: usize,
    antecedent_support: usize,
    consequent_support: usize,
    sequence_count: usize,
) -> f64 {
    let sup_a = ratio(antecedent_support, sequence_count);
    let sup_c = ratio(consequent_support, sequence_count);
    let sup = ratio(match_count, sequence_count);
    if sup_c == 1.0 || sup_a == 0.0 {
        return 1.0;
    }
    (sup_a * (1.0 - sup_c)) / (sup_a - sup)
}
