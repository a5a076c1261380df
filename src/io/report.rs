//! Scored-rule report writer.
//!
//! One line per rule:
//!
//! ```text
//! 1,2 ==> 3 #SUP: 2 #CONF: 1.0 #LIFT: 2.0 #CF: 1.0 #CONV: Infinity
//! ```

use crate::error::{Result, SeqRuleError};
use crate::model::SequentialRule;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Renders a measure value.
///
/// Integral values keep one decimal (`1.0`), others use the shortest
/// decimal that round-trips. Non-finite values print as `Infinity`,
/// `-Infinity` and `NaN`.
///
/// # Examples
///
/// ```
/// use u_seqrules::io::format_measure;
///
/// assert_eq!(format_measure(1.0), "1.0");
/// assert_eq!(format_measure(0.75), "0.75");
/// assert_eq!(format_measure(f64::INFINITY), "Infinity");
/// assert_eq!(format_measure(f64::NAN), "NaN");
/// ```
pub fn format_measure(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Renders one scored rule as a report line (without newline).
pub fn format_rule(rule: &SequentialRule, sequence_count: usize) -> String {
    let m = rule.measures(sequence_count);
    format!(
        "{rule} #SUP: {} #CONF: {} #LIFT: {} #CF: {} #CONV: {}",
        m.support,
        format_measure(m.confidence),
        format_measure(m.lift),
        format_measure(m.certainty_factor),
        format_measure(m.conviction),
    )
}

/// Writes one line per rule to `writer`.
pub fn write_report<W: Write>(
    mut writer: W,
    rules: &[SequentialRule],
    sequence_count: usize,
) -> Result<()> {
    for rule in rules {
        writeln!(writer, "{}", format_rule(rule, sequence_count))?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the report to a file, replacing any existing content.
pub fn write_report_file(
    path: impl AsRef<Path>,
    rules: &[SequentialRule],
    sequence_count: usize,
) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| SeqRuleError::io(path, e))?;
    write_report(BufWriter::new(file), rules, sequence_count).map_err(|e| match e {
        SeqRuleError::Stream(source) => SeqRuleError::io(path, source),
        other => other,
    })?;
    debug!(path = %path.display(), rules = rules.len(), "wrote report");
    Ok(())
}
