//! Text formats around the scoring core.
//!
//! - [`database`]: SPMF sequence-database loader
//! - [`rules`]: rule-file parser (`1,2 ==> 3 #SUP: 5 ...`)
//! - [`report`]: scored-rule report writer
//!
//! The core never touches these; callers may build a
//! [`SequenceDatabase`](crate::model::SequenceDatabase) or rules by hand.

pub mod database;
pub mod report;
pub mod rules;

pub use database::{load_database, load_database_file, parse_database};
pub use report::{format_measure, format_rule, write_report, write_report_file};
pub use rules::{load_rules, load_rules_file, parse_rule_line, parse_rules};
