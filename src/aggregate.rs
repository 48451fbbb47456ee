use crate::error::{DataError, Result};
use crate::model::{KeyedValueList, KeyedValues, Number, Table};

// ---------------------------------------------------------------------------
// Column / row totals
// ---------------------------------------------------------------------------

/// Sum of one column across every row of `table`.
///
/// An empty table yields `0.0`.  The first cell outside the table's reported
/// bounds aborts the whole call with [`DataError::CellOutOfBounds`]; no
/// partial total is returned.
pub fn column_total<T: Table + ?Sized>(table: &T, column: usize) -> Result<f64> {
    let mut total = 0.0;
    for row in 0..table.row_count() {
        total += cell(table, row, column)?;
    }
    Ok(total)
}

/// Sum of one row across every column of `table`.  Symmetric to
/// [`column_total`].
pub fn row_total<T: Table + ?Sized>(table: &T, row: usize) -> Result<f64> {
    let mut total = 0.0;
    for column in 0..table.column_count() {
        total += cell(table, row, column)?;
    }
    Ok(total)
}

fn cell<T: Table + ?Sized>(table: &T, row: usize, column: usize) -> Result<f64> {
    table
        .value_at(row, column)
        .ok_or(DataError::CellOutOfBounds {
            row,
            column,
            rows: table.row_count(),
            columns: table.column_count(),
        })
}

// ---------------------------------------------------------------------------
// Boxing conversions
// ---------------------------------------------------------------------------

/// Box a slice of raw floats into [`Number`]s, preserving length and order.
pub fn number_array(values: &[f64]) -> Vec<Number> {
    values.iter().copied().map(Number::Float).collect()
}

/// Row-wise [`number_array`]; jagged input keeps its exact shape.
pub fn number_array_2d(values: &[Vec<f64>]) -> Vec<Vec<Number>> {
    values.iter().map(|row| number_array(row)).collect()
}

// ---------------------------------------------------------------------------
// Cumulative percentages
// ---------------------------------------------------------------------------

/// For each item, the running sum of values up to and including it divided
/// by the grand total.  Keys are copied verbatim in index order, duplicates
/// included; the final item is always exactly `1.0`.
///
/// Negative values are summed arithmetically, so individual percentages can
/// be negative or exceed `1.0` along the way.  A grand total of exactly
/// `0.0` (which includes the empty sequence) has no meaningful percentages
/// and fails with [`DataError::ZeroTotal`] instead of emitting NaN.
pub fn cumulative_percentages<K: KeyedValues + ?Sized>(data: &K) -> Result<KeyedValueList> {
    let count = data.item_count();

    let mut total = 0.0;
    for index in 0..count {
        total += item(data, index)?;
    }
    if total == 0.0 {
        log::warn!("cumulative percentages requested for values summing to zero");
        return Err(DataError::ZeroTotal);
    }

    let mut result = KeyedValueList::new();
    let mut running = 0.0;
    for index in 0..count {
        let key = data
            .key_at(index)
            .ok_or(DataError::ItemOutOfBounds { index, count })?;
        running += item(data, index)?;
        result.push(key, running / total);
    }
    Ok(result)
}

fn item<K: KeyedValues + ?Sized>(data: &K, index: usize) -> Result<f64> {
    data.value_at(index).ok_or(DataError::ItemOutOfBounds {
        index,
        count: data.item_count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DenseTable;

    fn table(rows: Vec<Vec<f64>>) -> DenseTable {
        DenseTable::from_rows(rows).unwrap()
    }

    // -- column_total --

    #[test]
    fn test_column_total_normal_values() {
        let t = table(vec![vec![7.5], vec![2.5]]);
        let result = column_total(&t, 0).unwrap();
        assert!((result - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_column_total_all_zeros() {
        let t = table(vec![vec![1.0, 0.0], vec![2.0, 0.0], vec![3.0, 0.0]]);
        let result = column_total(&t, 1).unwrap();
        assert!(result.abs() < 1e-9);
    }

    #[test]
    fn test_column_total_with_negatives() {
        let t = table(vec![vec![-2.0], vec![5.0], vec![-1.0]]);
        let result = column_total(&t, 0).unwrap();
        assert!((result - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_column_total_empty_table_is_zero() {
        let t = table(Vec::new());
        // No rows means no cell access, even with a nonsense column index.
        assert_eq!(column_total(&t, 7).unwrap(), 0.0);
    }

    #[test]
    fn test_column_total_out_of_range_column() {
        let t = table(vec![vec![7.5], vec![2.5]]);
        let err = column_total(&t, 5).unwrap_err();
        assert_eq!(
            err,
            DataError::CellOutOfBounds {
                row: 0,
                column: 5,
                rows: 2,
                columns: 1
            }
        );
    }

    // -- row_total --

    #[test]
    fn test_row_total_normal_values() {
        let t = table(vec![vec![1.0, 2.0]]);
        let result = row_total(&t, 0).unwrap();
        assert!((result - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_row_total_mixed_values() {
        let t = table(vec![vec![0.0, 0.0, 0.0], vec![-1.0, 4.0, 2.0]]);
        let result = row_total(&t, 1).unwrap();
        assert!((result - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_row_total_all_zeros() {
        let t = table(vec![vec![1.0, 1.0], vec![1.0, 1.0], vec![0.0, 0.0]]);
        let result = row_total(&t, 2).unwrap();
        assert!(result.abs() < 1e-9);
    }

    #[test]
    fn test_row_total_out_of_range_row() {
        let t = table(vec![vec![1.0, 2.0]]);
        let err = row_total(&t, 3).unwrap_err();
        assert_eq!(
            err,
            DataError::CellOutOfBounds {
                row: 3,
                column: 0,
                rows: 1,
                columns: 2
            }
        );
    }

    // -- totals through a computed (storage-free) source --

    struct Squares {
        rows: usize,
        columns: usize,
    }

    impl Table for Squares {
        fn row_count(&self) -> usize {
            self.rows
        }

        fn column_count(&self) -> usize {
            self.columns
        }

        fn value_at(&self, row: usize, column: usize) -> Option<f64> {
            (row < self.rows && column < self.columns)
                .then(|| ((row + column) * (row + column)) as f64)
        }
    }

    #[test]
    fn test_totals_over_computed_source() {
        let lazy = Squares { rows: 3, columns: 2 };
        // Column 1: 1 + 4 + 9
        assert!((column_total(&lazy, 1).unwrap() - 14.0).abs() < 1e-9);
        // Row 2: 4 + 9
        assert!((row_total(&lazy, 2).unwrap() - 13.0).abs() < 1e-9);

        let dense = table(vec![vec![0.0, 1.0], vec![1.0, 4.0], vec![4.0, 9.0]]);
        assert_eq!(
            column_total(&lazy, 0).unwrap(),
            column_total(&dense, 0).unwrap()
        );
    }

    // -- number_array / number_array_2d --

    #[test]
    fn test_number_array_normal() {
        let result = number_array(&[1.0, 2.5, 3.0]);
        assert_eq!(
            result,
            vec![Number::Float(1.0), Number::Float(2.5), Number::Float(3.0)]
        );
    }

    #[test]
    fn test_number_array_empty() {
        assert!(number_array(&[]).is_empty());
    }

    #[test]
    fn test_number_array_single_element() {
        assert_eq!(number_array(&[7.25]), vec![Number::Float(7.25)]);
    }

    #[test]
    fn test_number_array_with_negatives() {
        let result = number_array(&[-1.0, 0.0, 2.0]);
        assert_eq!(
            result,
            vec![Number::Float(-1.0), Number::Float(0.0), Number::Float(2.0)]
        );
    }

    #[test]
    fn test_number_array_2d_rectangular() {
        let result = number_array_2d(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(
            result,
            vec![
                vec![Number::Float(1.0), Number::Float(2.0)],
                vec![Number::Float(3.0), Number::Float(4.0)],
            ]
        );
    }

    #[test]
    fn test_number_array_2d_empty() {
        assert!(number_array_2d(&[]).is_empty());
    }

    #[test]
    fn test_number_array_2d_jagged() {
        let result = number_array_2d(&[vec![1.0, 2.0, 3.0], vec![4.0]]);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].len(), 3);
        assert_eq!(result[1], vec![Number::Float(4.0)]);
    }

    #[test]
    fn test_number_array_2d_with_negatives() {
        let result = number_array_2d(&[vec![-1.0, 2.0], vec![0.0, -3.0]]);
        assert_eq!(
            result,
            vec![
                vec![Number::Float(-1.0), Number::Float(2.0)],
                vec![Number::Float(0.0), Number::Float(-3.0)],
            ]
        );
    }

    // -- cumulative_percentages --

    fn keyed(items: &[(&str, f64)]) -> KeyedValueList {
        items.iter().map(|&(k, v)| (k, v)).collect()
    }

    #[test]
    fn test_cumulative_percentages_two_items() {
        let kv = keyed(&[("A", 1.0), ("B", 3.0)]);
        let result = cumulative_percentages(&kv).unwrap();

        assert_eq!(result.len(), 2);
        assert!((result.value_at(0).unwrap() - 0.25).abs() < 1e-9);
        assert!((result.value_at(1).unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cumulative_percentages_single_item() {
        let kv = keyed(&[("Only", 5.0)]);
        let result = cumulative_percentages(&kv).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result.key_at(0), Some("Only"));
        assert_eq!(result.value_at(0), Some(1.0));
    }

    #[test]
    fn test_cumulative_percentages_duplicate_keys() {
        let kv = keyed(&[("A", 1.0), ("A", 1.0), ("B", 2.0)]);
        let result = cumulative_percentages(&kv).unwrap();

        let collected: Vec<(&str, f64)> = result.iter().collect();
        assert_eq!(collected.len(), 3);
        assert_eq!(collected[0].0, "A");
        assert_eq!(collected[1].0, "A");
        assert_eq!(collected[2].0, "B");
        assert!((collected[0].1 - 0.25).abs() < 1e-9);
        assert!((collected[1].1 - 0.50).abs() < 1e-9);
        assert!((collected[2].1 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cumulative_percentages_with_negative_values() {
        let kv = keyed(&[("A", -1.0), ("B", 2.0), ("C", 3.0)]);
        let result = cumulative_percentages(&kv).unwrap();

        assert!((result.value_at(0).unwrap() + 0.25).abs() < 1e-9);
        assert!((result.value_at(1).unwrap() - 0.25).abs() < 1e-9);
        assert!((result.value_at(2).unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cumulative_percentages_zero_total() {
        let kv = keyed(&[("A", 1.0), ("B", -1.0)]);
        assert_eq!(cumulative_percentages(&kv).unwrap_err(), DataError::ZeroTotal);
    }

    #[test]
    fn test_cumulative_percentages_empty_sequence() {
        let kv = KeyedValueList::new();
        assert_eq!(cumulative_percentages(&kv).unwrap_err(), DataError::ZeroTotal);
    }

    // A sequence that reports more items than it can deliver, to drive the
    // out-of-range item path.
    struct Clipped {
        inner: KeyedValueList,
        claimed: usize,
    }

    impl KeyedValues for Clipped {
        fn item_count(&self) -> usize {
            self.claimed
        }

        fn key_at(&self, index: usize) -> Option<&str> {
            self.inner.key_at(index)
        }

        fn value_at(&self, index: usize) -> Option<f64> {
            self.inner.value_at(index)
        }
    }

    #[test]
    fn test_cumulative_percentages_out_of_range_item() {
        let short = Clipped {
            inner: keyed(&[("A", 1.0), ("B", 3.0)]),
            claimed: 3,
        };
        let err = cumulative_percentages(&short).unwrap_err();
        assert_eq!(err, DataError::ItemOutOfBounds { index: 2, count: 3 });
    }
}
