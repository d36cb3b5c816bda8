//! Estimates of pi from the Wallis product.
//!
//! The Wallis product
//!
//! ```text
//!   ∏ (2k / (2k - 1)) · (2k / (2k + 1))    for k = 1, 2, 3, ...
//! ```
//!
//! converges to pi/2, so twice a truncated product approximates pi. Every
//! factor is greater than one and the partial products approach pi/2 from
//! below, so the estimates grow toward pi as terms are added. Convergence is
//! slow: the error after `n` terms is roughly `pi / (4n)`.

/// Returns the `k`-th factor of the Wallis product.
///
/// Factors are numbered from one. For `k = 0` the formula degenerates to
/// zero, which is not a Wallis factor.
#[must_use]
pub fn wallis_factor(k: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let two_k = 2.0 * k as f64;
    (two_k / (two_k - 1.0)) * (two_k / (two_k + 1.0))
}

/// Approximates pi using the first `n_terms` factors of the Wallis product.
///
/// With zero terms the product is empty and taken to be one, so the estimate
/// is exactly `2.0`.
///
/// # Example
///
/// ```
/// use numerics_core::wallis_product;
///
/// assert_eq!(wallis_product(0), 2.0);
///
/// let pi = wallis_product(100_000);
/// assert!((pi - std::f64::consts::PI).abs() < 1e-4);
/// ```
#[must_use]
pub fn wallis_product(n_terms: usize) -> f64 {
    let product: f64 = (1..=n_terms).map(wallis_factor).product();
    let estimate = 2.0 * product;
    log::trace!("wallis product with {n_terms} term(s): {estimate}");
    estimate
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    #[allow(clippy::float_cmp)]
    fn zero_terms_is_exactly_two() {
        assert_eq!(wallis_product(0), 2.0);
    }

    #[test]
    fn first_terms_match_hand_computation() {
        // 2 · (2/1 · 2/3) = 8/3
        assert_relative_eq!(wallis_product(1), 8.0 / 3.0, epsilon = 1e-12);
        // 8/3 · (4/3 · 4/5) = 128/45
        assert_relative_eq!(wallis_product(2), 128.0 / 45.0, epsilon = 1e-12);
    }

    #[test]
    fn factors_exceed_one() {
        assert_relative_eq!(wallis_factor(1), 4.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(wallis_factor(2), 16.0 / 15.0, epsilon = 1e-12);
        assert!((1..1000).map(wallis_factor).all(|factor| factor > 1.0));
    }

    #[test]
    fn estimates_stay_in_sanity_bounds() {
        for n in [1_000, 5_000, 20_000] {
            let pi = wallis_product(n);
            assert!(3.0 < pi && pi < 3.2, "n = {n}: {pi}");
        }
    }

    #[test]
    fn approaches_pi_from_below() {
        let mut previous = wallis_product(0);
        for n in [1, 10, 100, 1_000, 10_000] {
            let estimate = wallis_product(n);
            assert!(estimate > previous, "n = {n}: {estimate} <= {previous}");
            assert!(estimate < PI, "n = {n}: {estimate} >= pi");
            previous = estimate;
        }
    }

    #[test]
    fn error_shrinks_as_terms_double() {
        for n in [1_000, 10_000, 100_000] {
            let coarse = (wallis_product(n / 2) - PI).abs();
            let fine = (wallis_product(n) - PI).abs();
            assert!(fine < coarse, "n = {n}: {fine} >= {coarse}");
        }
    }

    #[test]
    fn converges_to_pi() {
        assert_relative_eq!(wallis_product(1_000_000), PI, epsilon = 1e-5);
    }
}
