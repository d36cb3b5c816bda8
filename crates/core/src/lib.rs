//! Small numeric utilities.
//!
//! - [`find_max_index`] — the `(row, col)` position of the largest value in a
//!   [`Matrix`], with ties going to the first value in row-major order
//! - [`wallis_product`] — an estimate of pi from a truncated Wallis product
//!
//! Shape checks happen once, when a [`Matrix`] is built. Anything that is not
//! a non-empty, rectangular 2D array of real numbers is rejected there with an
//! [`InvalidInputError`], so the lookups themselves cannot fail.

mod matrix;
mod max_index;
pub mod wallis;

pub use matrix::{InvalidInputError, Matrix};
pub use max_index::{find_max_index, unravel_index};
pub use wallis::{wallis_factor, wallis_product};
