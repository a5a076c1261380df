//! Quality measures for mined sequential rules.
//!
//! Given a sequence database and a set of sequential rules
//! (antecedent ⇒ consequent), one scoring pass decides for every
//! (sequence, rule) pair whether the rule holds, then derives per rule:
//!
//! - **Support**: sequences the rule holds in (absolute and relative)
//! - **Confidence**: match rate of the consequent given the antecedent
//! - **Lift**: joint support over the support expected under independence
//! - **Certainty factor**: deviation of confidence from the consequent base rate
//! - **Conviction**: direction-sensitive implication strength
//!
//! # Modules
//!
//! - [`model`]: itemsets, sequences, the database and rules
//! - [`scoring`]: the matching pass
//! - [`measures`]: measure formulas
//! - [`io`]: SPMF database loader, rule parser, report writer
//! - [`calculator`]: file-to-file pipeline
//!
//! # Example
//!
//! ```
//! use u_seqrules::io::{format_rule, parse_database, parse_rules};
//! use u_seqrules::scoring::RuleScorer;
//!
//! let db = parse_database("1 2 -1 3 -1 -2\n3 -1 1 2 -1 -2\n").unwrap();
//! let rules = RuleScorer::score(&db, parse_rules("1,2 ==> 3 #SUP: 7"));
//!
//! assert_eq!(
//!     format_rule(&rules[0], db.len()),
//!     "1,2 ==> 3 #SUP: 1 #CONF: 0.5 #LIFT: 1.0 #CF: 0.0 #CONV: 1.0"
//! );
//! ```

pub mod calculator;
pub mod error;
pub mod io;
pub mod measures;
pub mod model;
pub mod scoring;

pub use calculator::MeasureCalculator;
pub use error::{Result, SeqRuleError};
