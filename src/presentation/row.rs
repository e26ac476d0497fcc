//! Ordered display rows.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Blank cell: a single space, not an empty string, so table columns keep
/// their width even when every row misses the value.
pub(crate) const BLANK: &str = " ";

/// An ordered column-label → display-string mapping for one table row.
/// Column order is significant and fixed per record kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayRow {
    cells: Vec<(&'static str, String)>,
}

impl DisplayRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, label: &'static str, value: impl Into<String>) {
        self.cells.push((label, value.into()));
    }

    /// Value under a column label, if the row has that column.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(cell_label, _)| *cell_label == label)
            .map(|(_, value)| value.as_str())
    }

    /// Column labels in display order.
    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.cells.iter().map(|(label, _)| *label)
    }

    /// Cell values in display order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Serializes as a JSON object with keys in column order, for host shells
/// with an `--output json` mode.
impl Serialize for DisplayRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (label, value) in &self.cells {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

/// Composite sort key: a tie-break digit prefixed to the secondary field,
/// so a single lexicographic sort groups first and alphabetizes within
/// each group. Ordinal comparison, case-sensitive.
pub(crate) fn composite_sort_key(in_first_group: bool, secondary: &str) -> String {
    let mut key = String::with_capacity(secondary.len() + 1);
    key.push(if in_first_group { '0' } else { '1' });
    key.push_str(secondary);
    key
}
