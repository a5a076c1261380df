//! File-to-file measure calculation.
//!
//! [`MeasureCalculator`] wires the loaders, the scorer and the report
//! writer together: read a sequence database and a rule file, score every
//! rule, write the report.

use crate::error::{Result, SeqRuleError};
use crate::io;
use crate::model::{Itemset, SequenceDatabase, SequentialRule};
use crate::scoring::{RuleScorer, ScoreConfig, ScoreSummary};
use std::path::Path;
use tracing::info;

/// Loads inputs, scores rules and writes reports.
///
/// # Usage
///
/// ```ignore
/// let calculator = MeasureCalculator::new(ScoreConfig::default())?;
/// let summary = calculator.calculate("db.txt", "rules.txt", "out.txt")?;
/// println!("{} of {} rules matched", summary.matched_rules, summary.rule_count);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MeasureCalculator {
    config: ScoreConfig,
}

impl MeasureCalculator {
    /// Creates a calculator.
    ///
    /// # Errors
    /// [`SeqRuleError::InvalidConfig`] if `config` does not validate.
    pub fn new(config: ScoreConfig) -> Result<Self> {
        config.validate().map_err(SeqRuleError::InvalidConfig)?;
        Ok(Self { config })
    }

    /// The scoring configuration in use.
    pub fn config(&self) -> &ScoreConfig {
        &self.config
    }

    /// Reads `db_path` and `rules_path`, scores the rules and writes one
    /// report line per rule to `output_path`.
    pub fn calculate(
        &self,
        db_path: impl AsRef<Path>,
        rules_path: impl AsRef<Path>,
        output_path: impl AsRef<Path>,
    ) -> Result<ScoreSummary> {
        let db_path = db_path.as_ref();
        let rules_path = rules_path.as_ref();
        let output_path = output_path.as_ref();

        let database = io::load_database_file(db_path)?;
        info!(path = %db_path.display(), sequences = database.len(), "database loaded");

        let mut rules = io::load_rules_file(rules_path)?;
        info!(path = %rules_path.display(), rules = rules.len(), "rules parsed");

        let summary = self.score(&database, &mut rules)?;
        info!(
            matched = summary.matched_rules,
            rules = summary.rule_count,
            "rules scored"
        );

        io::write_report_file(output_path, &rules, summary.sequence_count)?;
        info!(path = %output_path.display(), "report written");

        Ok(summary)
    }

    /// Scores `rules` against an in-memory database.
    pub fn score(
        &self,
        database: &SequenceDatabase,
        rules: &mut [SequentialRule],
    ) -> Result<ScoreSummary> {
        RuleScorer::score_in_place(database, rules, &self.config)
    }

    /// Scores a single rule against an in-memory database.
    pub fn calculate_for_rule(
        &self,
        database: &SequenceDatabase,
        antecedent: Itemset,
        consequent: Itemset,
    ) -> Result<SequentialRule> {
        let mut rules = [SequentialRule::new(antecedent, consequent)];
        self.score(database, &mut rules)?;
        let [rule] = rules;
        Ok(rule)
    }

    /// Loads the database at `db_path`, then scores a single rule against it.
    pub fn calculate_for_rule_file(
        &self,
        db_path: impl AsRef<Path>,
        antecedent: Itemset,
        consequent: Itemset,
    ) -> Result<SequentialRule> {
        let database = io::load_database_file(db_path)?;
        self.calculate_for_rule(&database, antecedent, consequent)
    }
}
