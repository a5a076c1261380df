//! SPMF sequence-database loader.
//!
//! One sequence per line, items separated by whitespace, `-1` closing an
//! itemset and `-2` closing the sequence:
//!
//! ```text
//! 1 2 -1 3 -1 -2
//! 3 -1 1 2 -1 -2
//! ```
//!
//! Empty lines and lines starting with `#`, `%` or `@` are skipped.
//! Tokens of the form `<n>` are timestamps and are ignored.

use crate::error::{Result, SeqRuleError};
use crate::model::{Item, SequenceDatabase};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

const ITEMSET_END: &str = "-1";
const SEQUENCE_END: &str = "-2";

/// Parses a database held in memory.
///
/// # Examples
///
/// ```
/// use u_seqrules::io::parse_database;
///
/// let db = parse_database("1 2 -1 3 -1 -2\n# comment\n3 -1 1 2 -1 -2\n").unwrap();
/// assert_eq!(db.len(), 2);
/// assert_eq!(db.sequences()[1].itemsets(), &[vec![3], vec![1, 2]]);
/// ```
pub fn parse_database(text: &str) -> Result<SequenceDatabase> {
    load_database(text.as_bytes())
}

/// Reads a database from a file.
pub fn load_database_file(path: impl AsRef<Path>) -> Result<SequenceDatabase> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| SeqRuleError::io(path, e))?;
    let db = load_database(BufReader::new(file)).map_err(|e| match e {
        SeqRuleError::Stream(source) => SeqRuleError::io(path, source),
        other => other,
    })?;
    debug!(path = %path.display(), sequences = db.len(), "loaded sequence database");
    Ok(db)
}

/// Reads a database from any buffered reader.
///
/// # Errors
/// [`SeqRuleError::Parse`] when a token is neither a separator, a timestamp
/// nor an integer item.
pub fn load_database<R: BufRead>(reader: R) -> Result<SequenceDatabase> {
    let mut db = SequenceDatabase::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if is_skipped(trimmed) {
            continue;
        }
        let itemsets = parse_sequence(trimmed, index + 1)?;
        db.push(itemsets);
    }
    Ok(db)
}

fn is_skipped(line: &str) -> bool {
    line.is_empty() || line.starts_with(['#', '%', '@'])
}

fn parse_sequence(line: &str, line_number: usize) -> Result<Vec<Vec<Item>>> {
    let mut itemsets = Vec::new();
    let mut current: Vec<Item> = Vec::new();

    for token in line.split_whitespace() {
        match token {
            ITEMSET_END => {
                if !current.is_empty() {
                    itemsets.push(std::mem::take(&mut current));
                }
            }
            SEQUENCE_END => break,
            t if t.starts_with('<') => {}
            t => {
                let item = t.parse::<Item>().map_err(|_| SeqRuleError::Parse {
                    line: line_number,
                    message: format!("item `{t}` is not an integer"),
                })?;
                current.push(item);
            }
        }
    }
    if !current.is_empty() {
        itemsets.push(current);
    }
    Ok(itemsets)
}
