use crate::Matrix;

/// Returns the `(row, col)` position of the largest value in the matrix.
///
/// Values are scanned in row-major order and only a strictly greater value
/// replaces the running maximum, so ties resolve to the first occurrence.
///
/// # Example
///
/// ```
/// use numerics_core::{Matrix, find_max_index};
///
/// let matrix = Matrix::from_rows(vec![
///     vec![1.0, 2.0],
///     vec![3.0, 9.0],
///     vec![4.0, 0.0],
/// ])
/// .unwrap();
///
/// assert_eq!(find_max_index(&matrix), (1, 1));
/// ```
#[must_use]
pub fn find_max_index(matrix: &Matrix) -> (usize, usize) {
    let mut values = matrix.iter().enumerate();

    // A matrix always holds at least one value.
    let (mut best_flat, mut best_value) = values.next().unwrap_or((0, f64::NEG_INFINITY));

    for (flat, value) in values {
        if value > best_value {
            best_flat = flat;
            best_value = value;
        }
    }

    let index = unravel_index(best_flat, matrix.ncols());
    log::trace!("max {best_value} at {index:?} in {:?} matrix", matrix.shape());
    index
}

/// Converts a row-major flat index into a `(row, col)` pair.
///
/// # Panics
///
/// Panics if `ncols` is zero.
#[must_use]
pub fn unravel_index(flat: usize, ncols: usize) -> (usize, usize) {
    (flat / ncols, flat % ncols)
}
