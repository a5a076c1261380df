//! Rule scoring engine.
//!
//! One pass over the database scores every rule: for each (sequence, rule)
//! pair the scorer decides whether the antecedent occurs, whether the
//! consequent follows it, and records the outcome into the rule.
//!
//! # Key Types
//!
//! - [`RuleScorer`]: executes the pass
//! - [`ScoreConfig`]: match policy and reset behaviour
//! - [`MatchPolicy`]: occurrence semantics
//! - [`ScoreSummary`]: counts reported by a pass
//!
//! # Occurrence semantics
//!
//! Under [`MatchPolicy::Positional`] an itemset occurs at a position when the
//! position is a superset of it. A rule holds in a sequence when a consequent
//! position is reached after (or at) an antecedent position; it is counted at
//! most once per sequence. The consequent's recorded support only includes
//! sequences where it follows the antecedent.

mod config;
mod runner;

pub use config::{MatchPolicy, ScoreConfig};
pub use runner::{RuleScorer, ScoreSummary};
