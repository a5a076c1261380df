//! Data containers for sequence databases and sequential rules.
//!
//! # Key Types
//!
//! - [`Itemset`]: a set of items plus the ids of the sequences it was
//!   observed in during scoring
//! - [`Sequence`]: an ordered list of item positions with a unique id
//! - [`SequenceDatabase`]: the ordered collection of sequences scored against
//! - [`SequentialRule`]: antecedent ⇒ consequent with its match count
//!
//! Everything here is plain data. Matching lives in [`crate::scoring`],
//! measure formulas in [`crate::measures`].

mod rule;
mod types;

pub use rule::SequentialRule;
pub use types::{Item, Itemset, Sequence, SequenceDatabase, SequenceId};
