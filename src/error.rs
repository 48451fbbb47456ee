use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, DataError>;

// ---------------------------------------------------------------------------
// DataError – everything the data layer can refuse to do
// ---------------------------------------------------------------------------

/// Errors raised by aggregation functions and value-type constructors.
///
/// Every error is terminal for the call that produced it: no partial totals,
/// no partially-constructed ranges.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    /// An aggregation touched a cell outside the bounds the table reported.
    #[error("cell ({row}, {column}) is outside the {rows}x{columns} table")]
    CellOutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    /// A keyed-sequence access fell outside the reported item count.
    #[error("item {index} is outside the sequence of {count} items")]
    ItemOutOfBounds { index: usize, count: usize },

    /// Rows of a dense table must all share one width.
    #[error("row {row} has {actual} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Range bounds arrived in the wrong order.
    #[error("lower bound {lower} exceeds upper bound {upper}")]
    InvertedBounds { lower: f64, upper: f64 },

    /// Cumulative percentages were requested for values summing to zero.
    #[error("values sum to zero, cumulative percentages are undefined")]
    ZeroTotal,

    /// A negative factor would invert the bounds of a scaled range.
    #[error("scale factor {factor} is negative")]
    NegativeScale { factor: f64 },
}
