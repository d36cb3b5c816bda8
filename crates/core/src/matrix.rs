//! A validated, rectangular matrix of real numbers.
//!
//! [`Matrix`] is the only way to hand a 2D array to the lookups in this crate.
//! Every constructor checks the input once, so code that receives a `Matrix`
//! can trust that it:
//!
//! - has exactly two dimensions,
//! - has at least one row and at least one column,
//! - is rectangular (every row has the same length),
//! - contains no NaN values.
//!
//! Infinite values are allowed; they order like any other `f64`.

use ndarray::{Array2, ArrayD, ArrayView2, Ix2};
use thiserror::Error;

use crate::max_index::unravel_index;

/// Errors returned when input cannot be turned into a [`Matrix`].
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum InvalidInputError {
    #[error("input must be a 2D array, got {ndim} dimension(s)")]
    NotTwoDimensional { ndim: usize },

    #[error("input must be a non-empty 2D array, got shape ({nrows}, {ncols})")]
    Empty { nrows: usize, ncols: usize },

    #[error(
        "input must be a rectangular 2D array: row {row} has {found} column(s), expected {expected}"
    )]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("input of length {len} does not match shape ({nrows}, {ncols})")]
    ShapeMismatch {
        nrows: usize,
        ncols: usize,
        len: usize,
    },

    #[error("input must contain real numbers: NaN at ({row}, {col})")]
    NotANumber { row: usize, col: usize },
}

/// A non-empty, rectangular 2D array of `f64` stored in row-major order.
///
/// # Example
///
/// ```
/// use numerics_core::Matrix;
///
/// let matrix = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 9.0]]).unwrap();
/// assert_eq!(matrix.shape(), (2, 2));
/// assert_eq!(matrix.get(1, 1), Some(9.0));
///
/// assert!(Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")
)]
pub struct Matrix {
    nrows: usize,
    ncols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates a matrix from a list of rows.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows, the rows are empty, the rows
    /// differ in length, or any value is NaN.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, InvalidInputError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != ncols)
        {
            return Err(rejected(InvalidInputError::Ragged {
                row,
                expected: ncols,
                found,
            }));
        }

        let data = rows.into_iter().flatten().collect();
        Self::validated(nrows, ncols, data)
    }

    /// Creates a matrix from row-major data and a declared shape.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero, `data.len()` does not
    /// equal `nrows * ncols`, or any value is NaN.
    pub fn from_shape_vec(
        (nrows, ncols): (usize, usize),
        data: Vec<f64>,
    ) -> Result<Self, InvalidInputError> {
        if nrows.checked_mul(ncols) != Some(data.len()) {
            return Err(rejected(InvalidInputError::ShapeMismatch {
                nrows,
                ncols,
                len: data.len(),
            }));
        }

        Self::validated(nrows, ncols, data)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Returns the shape as `(nrows, ncols)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Returns the total number of elements, which is never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`; kept for parity with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the value at `(row, col)`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.nrows && col < self.ncols {
            self.data.get(row * self.ncols + col).copied()
        } else {
            None
        }
    }

    /// Returns the values in row-major order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Iterates over the values in row-major order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.data.iter().copied()
    }

    /// Iterates over the rows as slices.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        self.data.chunks_exact(self.ncols)
    }

    /// Checks the remaining invariants for data already known to hold
    /// `nrows * ncols` values.
    fn validated(nrows: usize, ncols: usize, data: Vec<f64>) -> Result<Self, InvalidInputError> {
        if nrows == 0 || ncols == 0 {
            return Err(rejected(InvalidInputError::Empty { nrows, ncols }));
        }

        if let Some(flat) = data.iter().position(|value| value.is_nan()) {
            let (row, col) = unravel_index(flat, ncols);
            return Err(rejected(InvalidInputError::NotANumber { row, col }));
        }

        Ok(Self { nrows, ncols, data })
    }
}

fn rejected(error: InvalidInputError) -> InvalidInputError {
    log::debug!("rejected matrix input: {error}");
    error
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = InvalidInputError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

/// Copies the view in logical row-major order, whatever its memory layout.
impl TryFrom<ArrayView2<'_, f64>> for Matrix {
    type Error = InvalidInputError;

    fn try_from(view: ArrayView2<'_, f64>) -> Result<Self, Self::Error> {
        let (nrows, ncols) = view.dim();
        Self::validated(nrows, ncols, view.iter().copied().collect())
    }
}

impl TryFrom<Array2<f64>> for Matrix {
    type Error = InvalidInputError;

    fn try_from(array: Array2<f64>) -> Result<Self, Self::Error> {
        Self::try_from(array.view())
    }
}

/// Accepts only arrays with exactly two dimensions.
impl TryFrom<ArrayD<f64>> for Matrix {
    type Error = InvalidInputError;

    fn try_from(array: ArrayD<f64>) -> Result<Self, Self::Error> {
        let ndim = array.ndim();
        let array = array
            .into_dimensionality::<Ix2>()
            .map_err(|_| rejected(InvalidInputError::NotTwoDimensional { ndim }))?;
        Self::try_from(array)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(matrix: Matrix) -> Self {
        matrix.rows().map(<[f64]>::to_vec).collect()
    }
}

impl From<Matrix> for Array2<f64> {
    fn from(matrix: Matrix) -> Self {
        let ncols = matrix.ncols;
        Array2::from_shape_fn(matrix.shape(), |(row, col)| matrix.data[row * ncols + col])
    }
}
