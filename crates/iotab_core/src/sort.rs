//! Column sort controller for the analysis tables.
//!
//! The frontend tables sort over a closed set of numeric columns. A column
//! key is a small enum implementing [`SortKey`]; the controller tracks which
//! key (if any) is active and in which direction, toggling direction when
//! the same key is selected again.

use crate::dataset::MultiplierRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Arrow glyph for table headers.
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// A numeric column of a record type `R`.
///
/// Implementors are closed enums, so there is no invalid-key path: any value
/// of the key type names a real column.
pub trait SortKey<R> {
    fn field(&self, row: &R) -> f64;
}

/// Active sort column and direction for one table.
///
/// Starts with no active column (rows keep their input order).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig<K> {
    pub key: Option<K>,
    pub direction: SortDirection,
}

// Manual impl: the no-active-sort state needs no `K: Default`, and the key
// enums have no meaningful default variant.
impl<K> Default for SortConfig<K> {
    fn default() -> Self {
        Self {
            key: None,
            direction: SortDirection::default(),
        }
    }
}

impl<K: Copy + PartialEq> SortConfig<K> {
    /// Select a column: a new column sorts ascending, re-selecting the
    /// active column flips the direction.
    pub fn toggle(&mut self, key: K) {
        if self.key == Some(key) {
            self.direction = self.direction.flip();
        } else {
            self.key = Some(key);
            self.direction = SortDirection::Ascending;
        }
    }

    /// Return to the no-active-sort state.
    pub fn clear(&mut self) {
        self.key = None;
        self.direction = SortDirection::Ascending;
    }

    pub fn is_active(&self, key: K) -> bool {
        self.key == Some(key)
    }

    /// Produce a freshly ordered copy of `rows`; the input is never mutated.
    ///
    /// Uses a stable sort over `f64::total_cmp`, so tied rows keep their
    /// input order. With no active column the input order is returned.
    pub fn apply<R: Clone>(&self, rows: &[R]) -> Vec<R>
    where
        K: SortKey<R>,
    {
        let mut sorted: Vec<R> = rows.to_vec();
        if let Some(key) = self.key {
            sorted.sort_by(|a, b| {
                let ord = key.field(a).total_cmp(&key.field(b));
                match self.direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            });
        }
        sorted
    }
}

/// Sortable columns of the multiplier-effect table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiplierColumn {
    Direct,
    Indirect,
    Total,
}

impl SortKey<MultiplierRecord> for MultiplierColumn {
    fn field(&self, row: &MultiplierRecord) -> f64 {
        match self {
            MultiplierColumn::Direct => row.direct,
            MultiplierColumn::Indirect => row.indirect,
            MultiplierColumn::Total => row.total,
        }
    }
}
