//! Scoring pass execution.
//!
//! [`RuleScorer`] walks every sequence of the database against every rule,
//! records occurrences into the rules' itemsets and bumps the rule match
//! counts. Measures are read from the rules afterwards.

use super::config::{MatchPolicy, ScoreConfig};
use crate::error::{Result, SeqRuleError};
use crate::model::{Item, Itemset, Sequence, SequenceDatabase, SequentialRule};
use tracing::{debug, trace};

/// Outcome of one scoring pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreSummary {
    /// Sequences in the database (denominator of relative measures).
    pub sequence_count: usize,

    /// Rules scored.
    pub rule_count: usize,

    /// Rules that matched at least one sequence.
    pub matched_rules: usize,
}

/// Executes scoring passes.
///
/// # Usage
///
/// ```
/// use u_seqrules::model::{Itemset, SequenceDatabase, SequentialRule};
/// use u_seqrules::scoring::RuleScorer;
///
/// let db: SequenceDatabase = vec![
///     vec![vec![1, 2], vec![3]],
///     vec![vec![3], vec![1, 2]],
/// ]
/// .into_iter()
/// .collect();
///
/// let rules = vec![SequentialRule::new(Itemset::new([1, 2]), Itemset::new([3]))];
/// let rules = RuleScorer::score(&db, rules);
///
/// assert_eq!(rules[0].match_count(), 1);
/// assert_eq!(rules[0].antecedent_support(), 2);
/// assert_eq!(rules[0].consequent_support(), 1);
/// ```
pub struct RuleScorer;

impl RuleScorer {
    /// Scores `rules` with the default configuration and returns them.
    pub fn score(
        database: &SequenceDatabase,
        mut rules: Vec<SequentialRule>,
    ) -> Vec<SequentialRule> {
        run_pass(database, &mut rules, &ScoreConfig::default());
        rules
    }

    /// Scores `rules` in place.
    ///
    /// # Errors
    /// Returns [`SeqRuleError::InvalidConfig`] if `config` does not validate.
    pub fn score_in_place(
        database: &SequenceDatabase,
        rules: &mut [SequentialRule],
        config: &ScoreConfig,
    ) -> Result<ScoreSummary> {
        config.validate().map_err(SeqRuleError::InvalidConfig)?;
        Ok(run_pass(database, rules, config))
    }

    /// Builds and scores a single rule with the default configuration.
    pub fn score_rule(
        database: &SequenceDatabase,
        antecedent: Itemset,
        consequent: Itemset,
    ) -> SequentialRule {
        let mut rules = [SequentialRule::new(antecedent, consequent)];
        run_pass(database, &mut rules, &ScoreConfig::default());
        let [rule] = rules;
        rule
    }
}

fn run_pass(
    database: &SequenceDatabase,
    rules: &mut [SequentialRule],
    config: &ScoreConfig,
) -> ScoreSummary {
    debug!(
        sequences = database.len(),
        rules = rules.len(),
        policy = %config.policy,
        "scoring pass"
    );

    if config.reset_before_scoring {
        rules.iter_mut().for_each(SequentialRule::reset);
    }

    for sequence in database {
        for rule in rules.iter_mut() {
            let matched = match config.policy {
                MatchPolicy::Positional => match_positional(sequence, rule),
                MatchPolicy::Scattered => match_scattered(sequence, rule),
            };
            if matched {
                trace!(sequence = sequence.id(), rule = %rule, "rule matched");
                rule.increment_match_count();
            }
        }
    }

    let summary = ScoreSummary {
        sequence_count: database.len(),
        rule_count: rules.len(),
        matched_rules: rules.iter().filter(|r| r.match_count() > 0).count(),
    };
    debug!(matched_rules = summary.matched_rules, "scoring pass done");
    summary
}

/// Single-position containment with the consequent at or after an
/// antecedent position. Returns whether the rule holds in `sequence`.
fn match_positional(sequence: &Sequence, rule: &mut SequentialRule) -> bool {
    let id = sequence.id();
    let mut antecedent_seen = false;
    let mut rule_matched = false;

    for position in sequence.itemsets() {
        let contains_antecedent = rule.antecedent().is_contained_in(position);
        let contains_consequent = rule.consequent().is_contained_in(position);

        if contains_antecedent {
            rule.antecedent_mut().record(id);
            antecedent_seen = true;
        }
        // An antecedent at this very position already counts as seen.
        if contains_consequent && antecedent_seen {
            rule.consequent_mut().record(id);
            rule_matched = true;
        }
    }

    rule_matched
}

/// Per-item first occurrences, consequent searched from the last antecedent
/// position inclusive, consequent support recorded anywhere in the sequence.
fn match_scattered(sequence: &Sequence, rule: &mut SequentialRule) -> bool {
    let id = sequence.id();
    let positions = sequence.itemsets();

    let antecedent_range = find_scattered(rule.antecedent().items(), positions, 0);
    let mut after_antecedent = false;
    if let Some((_, last)) = antecedent_range {
        after_antecedent =
            find_scattered(rule.consequent().items(), positions, last).is_some();
        rule.antecedent_mut().record(id);
    }

    let contains_consequent = after_antecedent
        || find_scattered(rule.consequent().items(), positions, 0).is_some();
    if contains_consequent {
        rule.consequent_mut().record(id);
    }

    antecedent_range.is_some() && after_antecedent
}

/// Range `(first, last)` of positions spanned by the first occurrence of
/// each item at or after `from`. `None` if an item is missing or `items`
/// is empty.
fn find_scattered(
    items: &[Item],
    positions: &[Vec<Item>],
    from: usize,
) -> Option<(usize, usize)> {
    let mut range: Option<(usize, usize)> = None;
    for item in items {
        let found = positions
            .iter()
            .enumerate()
            .skip(from)
            .find(|(_, position)| position.contains(item))
            .map(|(index, _)| index)?;
        range = Some(match range {
            None => (found, found),
            Some((lo, hi)) => (lo.min(found), hi.max(found)),
        });
    }
    range
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn db(sequences: Vec<Vec<Vec<Item>>>) -> SequenceDatabase {
        sequences.into_iter().collect()
    }

    fn rule(antecedent: &[Item], consequent: &[Item]) -> SequentialRule {
        SequentialRule::new(
            Itemset::new(antecedent.iter().copied()),
            Itemset::new(consequent.iter().copied()),
        )
    }

    fn scattered() -> ScoreConfig {
        ScoreConfig::default().with_policy(MatchPolicy::Scattered)
    }

    // ---- Positional policy ----

    #[test]
    fn test_antecedent_then_consequent_matches() {
        let db = db(vec![vec![vec![1, 2], vec![3]]]);
        let rules = RuleScorer::score(&db, vec![rule(&[1, 2], &[3])]);
        assert_eq!(rules[0].match_count(), 1);
        assert_eq!(rules[0].antecedent_support(), 1);
        assert_eq!(rules[0].consequent_support(), 1);
    }

    #[test]
    fn test_consequent_before_antecedent_does_not_match() {
        let db = db(vec![vec![vec![3], vec![1, 2]]]);
        let rules = RuleScorer::score(&db, vec![rule(&[1, 2], &[3])]);
        assert_eq!(rules[0].match_count(), 0);
        assert_eq!(rules[0].antecedent_support(), 1);
        assert_eq!(rules[0].consequent_support(), 0);
    }

    #[test]
    fn test_antecedent_items_must_share_a_position() {
        let db = db(vec![vec![vec![1], vec![2], vec![3]]]);
        let rules = RuleScorer::score(&db, vec![rule(&[1, 2], &[3])]);
        assert_eq!(rules[0].match_count(), 0);
        assert_eq!(rules[0].antecedent_support(), 0);
    }

    #[test]
    fn test_shared_position_counts_as_seen() {
        let db = db(vec![vec![vec![1, 3]]]);
        let rules = RuleScorer::score(&db, vec![rule(&[1], &[3])]);
        assert_eq!(rules[0].match_count(), 1);
        assert_eq!(rules[0].consequent_support(), 1);
    }

    #[test]
    fn test_shared_position_after_earlier_antecedent_matches() {
        let db = db(vec![vec![vec![1], vec![1, 3]]]);
        let rules = RuleScorer::score(&db, vec![rule(&[1], &[3])]);
        assert_eq!(rules[0].match_count(), 1);
    }

    #[test]
    fn test_at_most_one_match_per_sequence() {
        let db = db(vec![vec![vec![1], vec![2], vec![1], vec![2], vec![2]]]);
        let rules = RuleScorer::score(&db, vec![rule(&[1], &[2])]);
        assert_eq!(rules[0].match_count(), 1);
        assert_eq!(rules[0].antecedent_support(), 1);
        assert_eq!(rules[0].consequent_support(), 1);
    }

    #[test]
    fn test_consequent_support_is_rule_relative() {
        // Consequent appears in every sequence but follows the antecedent
        // in only one.
        let db = db(vec![
            vec![vec![1], vec![2]],
            vec![vec![2]],
            vec![vec![2], vec![1]],
        ]);
        let rules = RuleScorer::score(&db, vec![rule(&[1], &[2])]);
        assert_eq!(rules[0].consequent_support(), 1);
        assert_eq!(rules[0].antecedent_support(), 2);
        assert_eq!(rules[0].match_count(), 1);
    }

    #[test]
    fn test_four_sequence_measures() {
        let db = db(vec![
            vec![vec![1], vec![2]],
            vec![vec![1], vec![5], vec![2]],
            vec![vec![4]],
            vec![vec![2], vec![4]],
        ]);
        let rules = RuleScorer::score(&db, vec![rule(&[1], &[2])]);
        let r = &rules[0];
        assert_eq!(r.match_count(), 2);
        assert!((r.confidence() - 1.0).abs() < 1e-12);
        assert!((r.relative_support(db.len()) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_empty_itemsets_are_vacuous() {
        let db = db(vec![vec![vec![7], vec![8]], vec![vec![9]]]);
        let rules = RuleScorer::score(&db, vec![rule(&[], &[])]);
        // Every position contains the empty set, so any non-empty sequence matches.
        assert_eq!(rules[0].antecedent_support(), 2);
        assert_eq!(rules[0].consequent_support(), 2);
        assert_eq!(rules[0].match_count(), 2);
    }

    #[test]
    fn test_rescoring_resets_by_default() {
        let db = db(vec![vec![vec![1], vec![2]], vec![vec![1], vec![2]]]);
        let rules = RuleScorer::score(&db, vec![rule(&[1], &[2])]);
        let rules = RuleScorer::score(&db, rules);
        assert_eq!(rules[0].match_count(), 2);
        assert_eq!(rules[0].antecedent_support(), 2);
    }

    #[test]
    fn test_rescoring_without_reset_accumulates() {
        let db = db(vec![vec![vec![1], vec![2]]]);
        let config = ScoreConfig::default().with_reset_before_scoring(false);
        let mut rules = vec![rule(&[1], &[2])];
        RuleScorer::score_in_place(&db, &mut rules, &config).unwrap();
        RuleScorer::score_in_place(&db, &mut rules, &config).unwrap();
        assert_eq!(rules[0].match_count(), 2);
        // Ids are a set, so supports do not grow.
        assert_eq!(rules[0].antecedent_support(), 1);
    }

    #[test]
    fn test_summary_counts() {
        let db = db(vec![vec![vec![1], vec![2]], vec![vec![3]]]);
        let mut rules = vec![rule(&[1], &[2]), rule(&[2], &[1]), rule(&[3], &[4])];
        let summary =
            RuleScorer::score_in_place(&db, &mut rules, &ScoreConfig::default()).unwrap();
        assert_eq!(
            summary,
            ScoreSummary {
                sequence_count: 2,
                rule_count: 3,
                matched_rules: 1,
            }
        );
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let db = db(vec![]);
        let config = scattered().with_reset_before_scoring(false);
        let err = RuleScorer::score_in_place(&db, &mut [], &config).unwrap_err();
        assert!(matches!(err, SeqRuleError::InvalidConfig(_)));
    }

    #[test]
    fn test_score_rule() {
        let db = db(vec![vec![vec![1, 2], vec![3]], vec![vec![1, 2]]]);
        let r = RuleScorer::score_rule(&db, Itemset::new([1, 2]), Itemset::new([3]));
        assert_eq!(r.match_count(), 1);
        assert_eq!(r.antecedent_support(), 2);
        assert!((r.confidence() - 0.5).abs() < 1e-12);
    }

    // ---- Scattered policy ----

    #[test]
    fn test_find_scattered_range() {
        let positions = vec![vec![1], vec![5], vec![2, 1]];
        assert_eq!(find_scattered(&[1, 2], &positions, 0), Some((0, 2)));
        assert_eq!(find_scattered(&[1, 2], &positions, 1), Some((2, 2)));
        assert_eq!(find_scattered(&[9], &positions, 0), None);
        assert_eq!(find_scattered(&[], &positions, 0), None);
    }

    #[test]
    fn test_scattered_items_may_spread() {
        let db = db(vec![vec![vec![1], vec![2], vec![3]]]);
        let mut rules = vec![rule(&[1, 2], &[3])];
        RuleScorer::score_in_place(&db, &mut rules, &scattered()).unwrap();
        assert_eq!(rules[0].match_count(), 1);
    }

    #[test]
    fn test_scattered_consequent_search_is_inclusive() {
        let db = db(vec![vec![vec![1, 3]]]);
        let mut rules = vec![rule(&[1], &[3])];
        RuleScorer::score_in_place(&db, &mut rules, &scattered()).unwrap();
        assert_eq!(rules[0].match_count(), 1);
    }

    #[test]
    fn test_scattered_consequent_support_is_absolute() {
        let db = db(vec![
            vec![vec![1], vec![2]],
            vec![vec![2]],
            vec![vec![2], vec![1]],
        ]);
        let mut rules = vec![rule(&[1], &[2])];
        RuleScorer::score_in_place(&db, &mut rules, &scattered()).unwrap();
        assert_eq!(rules[0].consequent_support(), 3);
        assert_eq!(rules[0].antecedent_support(), 2);
        assert_eq!(rules[0].match_count(), 1);
    }

    #[test]
    fn test_scattered_empty_itemset_never_occurs() {
        let db = db(vec![vec![vec![1], vec![2]]]);
        let mut rules = vec![rule(&[], &[2])];
        RuleScorer::score_in_place(&db, &mut rules, &scattered()).unwrap();
        assert_eq!(rules[0].antecedent_support(), 0);
        assert_eq!(rules[0].match_count(), 0);
        assert_eq!(rules[0].consequent_support(), 1);
    }
}
