//! Sequential rule container.

use super::types::Itemset;
use crate::measures::{self, RuleMeasures};
use std::fmt;

/// A sequential rule `antecedent ⇒ consequent`.
///
/// A rule is built from parsed itemsets, passed once through
/// [`RuleScorer`](crate::scoring::RuleScorer), and read afterwards.
/// `match_count` is the number of sequences the rule was judged to hold in.
///
/// # Examples
///
/// ```
/// use u_seqrules::model::{Itemset, SequentialRule};
///
/// let rule = SequentialRule::new(Itemset::new([1, 2]), Itemset::new([3]));
/// assert_eq!(rule.to_string(), "1,2 ==> 3");
/// assert_eq!(rule.match_count(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SequentialRule {
    antecedent: Itemset,
    consequent: Itemset,
    match_count: usize,
}

impl SequentialRule {
    /// Creates an unscored rule.
    pub fn new(antecedent: Itemset, consequent: Itemset) -> Self {
        Self {
            antecedent,
            consequent,
            match_count: 0,
        }
    }

    /// Left-hand side.
    pub fn antecedent(&self) -> &Itemset {
        &self.antecedent
    }

    /// Right-hand side.
    pub fn consequent(&self) -> &Itemset {
        &self.consequent
    }

    /// Number of sequences the rule matched (absolute support).
    pub fn match_count(&self) -> usize {
        self.match_count
    }

    /// Sequences recorded for the antecedent.
    pub fn antecedent_support(&self) -> usize {
        self.antecedent.support()
    }

    /// Sequences recorded for the consequent.
    ///
    /// Under the default policy this is rule-relative: only sequences where
    /// the consequent follows an antecedent occurrence are counted.
    pub fn consequent_support(&self) -> usize {
        self.consequent.support()
    }

    /// `match_count / sequence_count`.
    pub fn relative_support(&self, sequence_count: usize) -> f64 {
        measures::relative_support(self.match_count, sequence_count)
    }

    /// `match_count / antecedent_support`.
    pub fn confidence(&self) -> f64 {
        measures::confidence(self.match_count, self.antecedent_support())
    }

    /// Lift of the rule.
    pub fn lift(&self, sequence_count: usize) -> f64 {
        measures::lift(
            self.match_count,
            self.antecedent_support(),
            self.consequent_support(),
            sequence_count,
        )
    }

    /// Certainty factor of the rule.
    pub fn certainty_factor(&self, sequence_count: usize) -> f64 {
        measures::certainty_factor(
            self.match_count,
            self.antecedent_support(),
            self.consequent_support(),
            sequence_count,
        )
    }

    /// Conviction of the rule.
    pub fn conviction(&self, sequence_count: usize) -> f64 {
        measures::conviction(
            self.match_count,
            self.antecedent_support(),
            self.consequent_support(),
            sequence_count,
        )
    }

    /// All five measures at once.
    pub fn measures(&self, sequence_count: usize) -> RuleMeasures {
        RuleMeasures::compute(
            self.match_count,
            self.antecedent_support(),
            self.consequent_support(),
            sequence_count,
        )
    }

    pub(crate) fn antecedent_mut(&mut self) -> &mut Itemset {
        &mut self.antecedent
    }

    pub(crate) fn consequent_mut(&mut self) -> &mut Itemset {
        &mut self.consequent
    }

    pub(crate) fn increment_match_count(&mut self) {
        self.match_count += 1;
    }

    /// Clears the match count and both itemsets' recorded sequence ids.
    pub fn reset(&mut self) {
        self.match_count = 0;
        self.antecedent.clear_matches();
        self.consequent.clear_matches();
    }
}

impl fmt::Display for SequentialRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ==> {}", self.antecedent, self.consequent)
    }
}
