//! Items, itemsets, sequences and the sequence database.

use std::collections::BTreeSet;
use std::fmt;

/// An item identifier. Carries no meaning beyond equality.
pub type Item = i32;

/// Identifier of a sequence inside a [`SequenceDatabase`].
pub type SequenceId = usize;

/// A set of items, as used on either side of a [`SequentialRule`](super::SequentialRule).
///
/// Items are unique but keep their insertion order, which is the order
/// used when the itemset is displayed. Matching ignores order.
///
/// `matched_sequence_ids` is accumulation state written by the scorer;
/// after one full pass its size is the itemset's support.
///
/// # Examples
///
/// ```
/// use u_seqrules::model::Itemset;
///
/// let itemset = Itemset::new([3, 1, 3, 2]);
/// assert_eq!(itemset.items(), &[3, 1, 2]);
/// assert_eq!(itemset.to_string(), "3,1,2");
/// assert!(itemset.is_contained_in(&[1, 2, 3, 4]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Itemset {
    items: Vec<Item>,
    matched_sequence_ids: BTreeSet<SequenceId>,
}

impl Itemset {
    /// Creates an itemset, dropping repeated items.
    pub fn new(items: impl IntoIterator<Item = Item>) -> Self {
        let mut unique = Vec::new();
        for item in items {
            if !unique.contains(&item) {
                unique.push(item);
            }
        }
        Self {
            items: unique,
            matched_sequence_ids: BTreeSet::new(),
        }
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the itemset has no items.
    ///
    /// An empty itemset is contained in every position.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if `item` belongs to this itemset.
    pub fn contains(&self, item: Item) -> bool {
        self.items.contains(&item)
    }

    /// Returns `true` if every item of this itemset is present in `position`.
    pub fn is_contained_in(&self, position: &[Item]) -> bool {
        self.items.iter().all(|item| position.contains(item))
    }

    /// Ids of the sequences this itemset was recorded in.
    pub fn matched_sequence_ids(&self) -> &BTreeSet<SequenceId> {
        &self.matched_sequence_ids
    }

    /// Absolute support: how many distinct sequences recorded this itemset.
    pub fn support(&self) -> usize {
        self.matched_sequence_ids.len()
    }

    pub(crate) fn record(&mut self, id: SequenceId) {
        self.matched_sequence_ids.insert(id);
    }

    pub(crate) fn clear_matches(&mut self) {
        self.matched_sequence_ids.clear();
    }
}

impl fmt::Display for Itemset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

impl FromIterator<Item> for Itemset {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        Self::new(iter)
    }
}

/// One record of the database: time-ordered item positions.
///
/// Position `p` holds the set of items that occurred together at that
/// point. Sequences are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sequence {
    id: SequenceId,
    itemsets: Vec<Vec<Item>>,
}

impl Sequence {
    /// Creates a sequence. Repeated items within a position are dropped.
    pub fn new(id: SequenceId, itemsets: Vec<Vec<Item>>) -> Self {
        let itemsets = itemsets
            .into_iter()
            .map(|position| {
                let mut unique = Vec::with_capacity(position.len());
                for item in position {
                    if !unique.contains(&item) {
                        unique.push(item);
                    }
                }
                unique
            })
            .collect();
        Self { id, itemsets }
    }

    /// The sequence identifier.
    pub fn id(&self) -> SequenceId {
        self.id
    }

    /// Positions in time order.
    pub fn itemsets(&self) -> &[Vec<Item>] {
        &self.itemsets
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.itemsets.len()
    }

    /// Returns `true` if the sequence has no positions.
    pub fn is_empty(&self) -> bool {
        self.itemsets.is_empty()
    }
}

/// An ordered collection of [`Sequence`]s.
///
/// Its length is the denominator of every relative measure.
///
/// # Examples
///
/// ```
/// use u_seqrules::model::SequenceDatabase;
///
/// let mut db = SequenceDatabase::new();
/// let first = db.push(vec![vec![1, 2], vec![3]]);
/// let second = db.push(vec![vec![3], vec![1, 2]]);
/// assert_eq!((first, second), (0, 1));
/// assert_eq!(db.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SequenceDatabase {
    sequences: Vec<Sequence>,
}

impl SequenceDatabase {
    /// Creates an empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a sequence, assigning it the next id (its index).
    pub fn push(&mut self, itemsets: Vec<Vec<Item>>) -> SequenceId {
        let id = self.sequences.len();
        self.sequences.push(Sequence::new(id, itemsets));
        id
    }

    /// Appends a sequence that already carries its own id.
    pub fn add_sequence(&mut self, sequence: Sequence) {
        self.sequences.push(sequence);
    }

    /// All sequences in load order.
    pub fn sequences(&self) -> &[Sequence] {
        &self.sequences
    }

    /// Iterates over the sequences in load order.
    pub fn iter(&self) -> std::slice::Iter<'_, Sequence> {
        self.sequences.iter()
    }

    /// Total number of sequences.
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    /// Returns `true` if the database holds no sequences.
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}

impl FromIterator<Vec<Vec<Item>>> for SequenceDatabase {
    fn from_iter<T: IntoIterator<Item = Vec<Vec<Item>>>>(iter: T) -> Self {
        let mut db = Self::new();
        for itemsets in iter {
            db.push(itemsets);
        }
        db
    }
}

impl<'a> IntoIterator for &'a SequenceDatabase {
    type Item = &'a Sequence;
    type IntoIter = std::slice::Iter<'a, Sequence>;

    fn into_iter(self) -> Self::IntoIter {
        self.sequences.iter()
    }
}
