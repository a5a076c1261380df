//! Scoring configuration.
//!
//! [`ScoreConfig`] selects the occurrence semantics and how prior rule
//! state is handled.

use std::fmt;
use std::str::FromStr;

/// How a rule is judged to occur in a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchPolicy {
    /// Every item of an itemset must co-occur at one position. The rule
    /// matches when a consequent position is reached once an antecedent
    /// position has been seen (the same position included).
    ///
    /// Consequent support is rule-relative: only sequences where the
    /// consequent follows the antecedent are recorded.
    #[default]
    Positional,

    /// Items of an itemset may be scattered across positions (each item's
    /// first occurrence counts). The consequent is searched from the last
    /// antecedent position onward, inclusive.
    ///
    /// Consequent support is absolute: any sequence containing the
    /// consequent is recorded.
    Scattered,
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchPolicy::Positional => f.write_str("positional"),
            MatchPolicy::Scattered => f.write_str("scattered"),
        }
    }
}

impl FromStr for MatchPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "positional" => Ok(MatchPolicy::Positional),
            "scattered" => Ok(MatchPolicy::Scattered),
            other => Err(format!(
                "unknown match policy `{other}` (expected `positional` or `scattered`)"
            )),
        }
    }
}

/// Configuration for a scoring pass.
///
/// # Defaults
///
/// ```
/// use u_seqrules::scoring::{MatchPolicy, ScoreConfig};
///
/// let config = ScoreConfig::default();
/// assert_eq!(config.policy, MatchPolicy::Positional);
/// assert!(config.reset_before_scoring);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_seqrules::scoring::{MatchPolicy, ScoreConfig};
///
/// let config = ScoreConfig::default()
///     .with_policy(MatchPolicy::Scattered)
///     .with_reset_before_scoring(false);
/// assert_eq!(config.policy, MatchPolicy::Scattered);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreConfig {
    /// Occurrence semantics.
    pub policy: MatchPolicy,

    /// Clear each rule's match count and recorded sequence ids before the
    /// pass.
    ///
    /// With `false`, counts accumulate on top of whatever a previous pass
    /// left behind, so scoring the same rules twice double-counts.
    pub reset_before_scoring: bool,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            policy: MatchPolicy::default(),
            reset_before_scoring: true,
        }
    }
}

impl ScoreConfig {
    /// Sets the match policy.
    pub fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Enables or disables the pre-pass reset.
    pub fn with_reset_before_scoring(mut self, reset: bool) -> Self {
        self.reset_before_scoring = reset;
        self
    }

    /// Validates the configuration.
    ///
    /// Accumulating [`MatchPolicy::Scattered`] results onto stale state is
    /// rejected: the two policies record consequent support differently and
    /// the mixture has no meaning.
    pub fn validate(&self) -> Result<(), String> {
        if self.policy == MatchPolicy::Scattered && !self.reset_before_scoring {
            return Err("scattered policy requires reset_before_scoring".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScoreConfig::default();
        assert_eq!(config.policy, MatchPolicy::Positional);
        assert!(config.reset_before_scoring);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = ScoreConfig::default()
            .with_policy(MatchPolicy::Scattered)
            .with_reset_before_scoring(true);
        assert_eq!(config.policy, MatchPolicy::Scattered);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_scattered_without_reset() {
        let config = ScoreConfig::default()
            .with_policy(MatchPolicy::Scattered)
            .with_reset_before_scoring(false);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_positional_without_reset_is_valid() {
        let config = ScoreConfig::default().with_reset_before_scoring(false);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("positional".parse::<MatchPolicy>(), Ok(MatchPolicy::Positional));
        assert_eq!("Scattered".parse::<MatchPolicy>(), Ok(MatchPolicy::Scattered));
        assert!("range".parse::<MatchPolicy>().is_err());
    }

    #[test]
    fn test_policy_display_round_trips() {
        for policy in [MatchPolicy::Positional, MatchPolicy::Scattered] {
            assert_eq!(policy.to_string().parse::<MatchPolicy>(), Ok(policy));
        }
    }
}
