//! Data layer for charting applications: tabular aggregation and axis
//! ranges.
//!
//! Architecture:
//! ```text
//!   caller-supplied data source
//!        │
//!        ▼
//!   ┌───────────┐
//!   │   model    │  Table / KeyedValues contracts, in-memory carriers
//!   └───────────┘
//!        │
//!        ▼
//!   ┌───────────┐
//!   │ aggregate  │  column/row totals, boxing, cumulative percentages
//!   └───────────┘
//!
//!   ┌───────────┐
//!   │   range    │  closed axis interval and its combinators
//!   └───────────┘
//! ```
//!
//! Everything is a pure, synchronous computation over read-only inputs;
//! failures surface as [`DataError`] and abort the whole call.

pub mod aggregate;
pub mod error;
pub mod model;
pub mod range;

pub use aggregate::{
    column_total, cumulative_percentages, number_array, number_array_2d, row_total,
};
pub use error::{DataError, Result};
pub use model::{DenseTable, KeyedValueList, KeyedValues, Number, Table};
pub use range::Range;
