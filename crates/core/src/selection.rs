//! Operator selections over the displayed command list.

use std::collections::BTreeSet;

use crate::error::{Error, Result};

/// Positions in the displayed command list chosen by the operator.
///
/// Iterates in ascending order. Indexes are not checked against the list
/// length when parsed; see [`SelectionSet::split_by_range`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    indexes: BTreeSet<usize>,
}

impl SelectionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.indexes.contains(&index)
    }

    pub fn insert(&mut self, index: usize) -> bool {
        self.indexes.insert(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indexes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indexes.iter().copied()
    }

    /// Splits into indexes below `len` and those at or past it.
    #[must_use]
    pub fn split_by_range(&self, len: usize) -> (Vec<usize>, Vec<usize>) {
        self.iter().partition(|&index| index < len)
    }
}

impl FromIterator<usize> for SelectionSet {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        Self {
            indexes: iter.into_iter().collect(),
        }
    }
}

/// Parses a comma-separated list of indexes such as `"1, 3,5"`.
///
/// Whitespace around tokens and empty tokens are ignored, so an empty line
/// selects nothing.
///
/// # Errors
///
/// Returns [`Error::InvalidSelection`] naming the first token that is not a
/// non-negative integer.
///
/// # Examples
///
/// ```
/// use history_cuts_core::selection::read_selection;
///
/// let selection = read_selection("1, 3,5").unwrap();
/// assert_eq!(selection.iter().collect::<Vec<_>>(), vec![1, 3, 5]);
/// ```
pub fn read_selection(raw_input: &str) -> Result<SelectionSet> {
    raw_input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<usize>()
                .map_err(|_| Error::invalid_selection(token))
        })
        .collect()
}
