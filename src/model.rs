use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DataError, Result};

// ---------------------------------------------------------------------------
// Number – a boxed numeric value
// ---------------------------------------------------------------------------

/// A dynamically-typed numeric value, the generic representation produced by
/// the boxing conversions in [`crate::aggregate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Interpret the value as an `f64` regardless of variant.
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(v) => *v,
        }
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number::Float(v)
    }
}

impl From<i64> for Number {
    fn from(i: i64) -> Self {
        Number::Integer(i)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{i}"),
            Number::Float(v) => write!(f, "{v}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Table – read-only 2D numeric data source
// ---------------------------------------------------------------------------

/// Read-only view of a 2D grid of numeric cells.
///
/// `value_at` returns `None` for coordinates outside the bounds reported by
/// `row_count` / `column_count`; the aggregation functions turn that into a
/// [`DataError::CellOutOfBounds`].  Implementations may store the grid or
/// compute cells on demand.
pub trait Table {
    /// Number of rows in the grid.
    fn row_count(&self) -> usize;

    /// Number of columns in the grid.
    fn column_count(&self) -> usize;

    /// The cell at `(row, column)`, or `None` if either index is out of
    /// bounds.
    fn value_at(&self, row: usize, column: usize) -> Option<f64>;
}

// ---------------------------------------------------------------------------
// KeyedValues – ordered (key, value) sequence
// ---------------------------------------------------------------------------

/// Read-only view of an ordered sequence of `(key, value)` pairs.
///
/// Keys need not be unique; index order is the significant order.
pub trait KeyedValues {
    /// Number of items in the sequence.
    fn item_count(&self) -> usize;

    /// The key at `index`, or `None` if out of bounds.
    fn key_at(&self, index: usize) -> Option<&str>;

    /// The value at `index`, or `None` if out of bounds.
    fn value_at(&self, index: usize) -> Option<f64>;
}

// ---------------------------------------------------------------------------
// DenseTable – rectangular in-memory Table
// ---------------------------------------------------------------------------

/// A rectangular in-memory [`Table`] backed by row-major `Vec`s.
///
/// Serialized as a bare 2D array; deserialization re-checks that every row
/// has the same width.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct DenseTable {
    rows: Vec<Vec<f64>>,
}

impl DenseTable {
    /// Build a table from row-major data.  Every row must have the same
    /// width; the first row fixes the column count.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let expected = rows.first().map_or(0, Vec::len);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != expected {
                return Err(DataError::RaggedRows {
                    row,
                    expected,
                    actual: values.len(),
                });
            }
        }
        Ok(DenseTable { rows })
    }
}

impl Table for DenseTable {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    fn value_at(&self, row: usize, column: usize) -> Option<f64> {
        self.rows.get(row)?.get(column).copied()
    }
}

impl TryFrom<Vec<Vec<f64>>> for DenseTable {
    type Error = DataError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        DenseTable::from_rows(rows)
    }
}

impl From<DenseTable> for Vec<Vec<f64>> {
    fn from(table: DenseTable) -> Self {
        table.rows
    }
}

// ---------------------------------------------------------------------------
// KeyedValueList – in-memory KeyedValues
// ---------------------------------------------------------------------------

/// An ordered in-memory [`KeyedValues`] sequence.
///
/// Duplicate keys are permitted and kept as-is; items stay in insertion
/// order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyedValueList {
    items: Vec<(String, f64)>,
}

impl KeyedValueList {
    /// An empty sequence.
    pub fn new() -> Self {
        KeyedValueList::default()
    }

    /// Append an item at the end of the sequence.
    pub fn push(&mut self, key: impl Into<String>, value: f64) {
        self.items.push((key.into(), value));
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the sequence has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over `(key, value)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.items.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl KeyedValues for KeyedValueList {
    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn key_at(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(|(k, _)| k.as_str())
    }

    fn value_at(&self, index: usize) -> Option<f64> {
        self.items.get(index).map(|(_, v)| *v)
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for KeyedValueList {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        KeyedValueList {
            items: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
