//! Rule-file parser.
//!
//! Each non-empty line holds one rule:
//!
//! ```text
//! 1,2,3 ==> 4,5 #SUP: 5193 #CONF: 0.7291491154170177
//! ```
//!
//! Annotations starting with `#` are ignored; measures are always
//! recomputed. Tokens that are not integers are dropped silently, so the
//! parser only fails on I/O.

use crate::error::{Result, SeqRuleError};
use crate::model::{Item, Itemset, SequentialRule};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Parses one line. Returns `None` if the line never reaches a consequent.
///
/// # Examples
///
/// ```
/// use u_seqrules::io::parse_rule_line;
///
/// let rule = parse_rule_line("1,2 ==> 3 #SUP: 4").unwrap();
/// assert_eq!(rule.antecedent().items(), &[1, 2]);
/// assert_eq!(rule.consequent().items(), &[3]);
/// assert!(parse_rule_line("1,2 #SUP: 4").is_none());
/// ```
pub fn parse_rule_line(line: &str) -> Option<SequentialRule> {
    let mut antecedent: Option<Itemset> = None;
    for token in line.split_whitespace() {
        if token.starts_with('#') {
            break;
        }
        if token.contains("=>") {
            continue;
        }
        let itemset = parse_items(token);
        match antecedent.take() {
            None => antecedent = Some(itemset),
            Some(lhs) => return Some(SequentialRule::new(lhs, itemset)),
        }
    }
    None
}

fn parse_items(token: &str) -> Itemset {
    token
        .split(',')
        .filter_map(|piece| piece.parse::<Item>().ok())
        .collect()
}

/// Parses every rule in `text`, in line order.
pub fn parse_rules(text: &str) -> Vec<SequentialRule> {
    text.lines().filter_map(parse_rule_line).collect()
}

/// Reads rules from any buffered reader.
pub fn load_rules<R: BufRead>(reader: R) -> Result<Vec<SequentialRule>> {
    let mut rules = Vec::new();
    for line in reader.lines() {
        if let Some(rule) = parse_rule_line(&line?) {
            rules.push(rule);
        }
    }
    Ok(rules)
}

/// Reads rules from a file.
pub fn load_rules_file(path: impl AsRef<Path>) -> Result<Vec<SequentialRule>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| SeqRuleError::io(path, e))?;
    let rules = load_rules(BufReader::new(file)).map_err(|e| match e {
        SeqRuleError::Stream(source) => SeqRuleError::io(path, source),
        other => other,
    })?;
    debug!(path = %path.display(), rules = rules.len(), "loaded rules");
    Ok(rules)
}
