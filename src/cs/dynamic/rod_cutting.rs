//! Rod cutting (CLRS 15.1).
//!
//! `prices[k]` is what a piece of length `k` sells for; `prices[0]` is never
//! read. Every variant answers the same question, the best revenue for a rod
//! of `rod_length`, and they differ only in how subproblems are ordered.
//! Selling nothing is always allowed, so revenue never drops below zero even
//! when prices are negative.

use std::collections::HashMap;

use num_traits::Num;

use crate::error::{Error, Result};

/// Best revenue together with the piece lengths that realise it.
#[derive(Debug, Clone, PartialEq)]
pub struct RodCut<T> {
    pub revenue: T,
    /// Lengths of the pieces sold, in cutting order. They sum to at most the
    /// rod length; whatever remains earns nothing and is left unsold.
    pub pieces: Vec<usize>,
}

fn validate<T>(rod_length: usize, prices: &[T]) -> Result<()> {
    if rod_length > 0 && rod_length >= prices.len() {
        return Err(Error::invalid_argument(format!(
            "no price for a rod of length {} (table covers lengths up to {})",
            rod_length,
            prices.len().saturating_sub(1)
        )));
    }
    Ok(())
}

fn larger<T: PartialOrd>(a: T, b: T) -> T {
    if b > a {
        b
    } else {
        a
    }
}

/// Tries every first cut recursively without remembering anything.
///
/// Runs in O(2^n); kept as the reference the other variants are checked
/// against.
///
/// # Errors
///
/// * [`Error::InvalidArgument`] if `prices` has no entry for `rod_length`.
pub fn max_revenue_brute_force<T>(rod_length: usize, prices: &[T]) -> Result<T>
where
    T: Num + Copy + PartialOrd,
{
    validate(rod_length, prices)?;
    Ok(brute_force(rod_length, prices))
}

fn brute_force<T>(rod_length: usize, prices: &[T]) -> T
where
    T: Num + Copy + PartialOrd,
{
    (1..=rod_length)
        .map(|cut| prices[cut] + brute_force(rod_length - cut, prices))
        .fold(T::zero(), larger)
}

/// Top-down evaluation with a memo keyed by rod length.
///
/// Lengths still waiting on shorter ones are kept on a heap-allocated stack
/// rather than the call stack.
///
/// # Errors
///
/// * [`Error::InvalidArgument`] if `prices` has no entry for `rod_length`.
///
/// # Examples
///
/// ```
/// use dynprog::cs::dynamic::rod_cutting::max_revenue_memoized;
///
/// let prices = [0, 1, 5, 8, 9, 10, 17, 17, 20, 24, 30];
/// assert_eq!(max_revenue_memoized(7, &prices).unwrap(), 18);
/// ```
pub fn max_revenue_memoized<T>(rod_length: usize, prices: &[T]) -> Result<T>
where
    T: Num + Copy + PartialOrd,
{
    validate(rod_length, prices)?;

    let mut memo = HashMap::new();
    memo.insert(0, T::zero());

    let mut pending = vec![rod_length];
    while let Some(&current) = pending.last() {
        if memo.contains_key(&current) {
            pending.pop();
            continue;
        }

        let unsolved = (1..=current)
            .map(|cut| current - cut)
            .find(|rest| !memo.contains_key(rest));
        if let Some(rest) = unsolved {
            pending.push(rest);
            continue;
        }

        let best = (1..=current)
            .filter_map(|cut| memo.get(&(current - cut)).map(|&rest| prices[cut] + rest))
            .fold(T::zero(), larger);
        memo.insert(current, best);
        pending.pop();
    }

    Ok(memo.get(&rod_length).copied().unwrap_or_else(T::zero))
}

/// Solves every shorter rod first, so each length is computed once without
/// recursion.
///
/// # Errors
///
/// * [`Error::InvalidArgument`] if `prices` has no entry for `rod_length`.
pub fn max_revenue_bottom_up<T>(rod_length: usize, prices: &[T]) -> Result<T>
where
    T: Num + Copy + PartialOrd,
{
    cut_rod(rod_length, prices).map(|cut| cut.revenue)
}

/// Bottom-up solve that also records the first piece of each optimal cut, so
/// the full list of pieces can be read back.
///
/// A piece is only cut off if it strictly beats selling nothing, and when
/// several first pieces tie the shortest one is kept. If no cut earns more
/// than zero, `pieces` is empty and the revenue is zero.
///
/// # Errors
///
/// * [`Error::InvalidArgument`] if `prices` has no entry for `rod_length`.
///
/// # Examples
///
/// ```
/// use dynprog::cs::dynamic::rod_cutting::cut_rod;
///
/// let prices = [0, 1, 5, 8, 9, 10, 17, 17, 20, 24, 30];
/// let cut = cut_rod(4, &prices).unwrap();
/// assert_eq!(cut.revenue, 10);
/// assert_eq!(cut.pieces, vec![2, 2]);
/// ```
pub fn cut_rod<T>(rod_length: usize, prices: &[T]) -> Result<RodCut<T>>
where
    T: Num + Copy + PartialOrd,
{
    validate(rod_length, prices)?;

    log::debug!("cut_rod: rod of length {}", rod_length);

    let mut revenue = vec![T::zero(); rod_length + 1];
    let mut first_piece = vec![0; rod_length + 1];

    for length in 1..=rod_length {
        for cut in 1..=length {
            let candidate = prices[cut] + revenue[length - cut];
            if candidate > revenue[length] {
                revenue[length] = candidate;
                first_piece[length] = cut;
            }
        }
    }

    // A first piece of 0 marks a length that is left unsold.
    let mut pieces = Vec::new();
    let mut left = rod_length;
    while first_piece[left] > 0 {
        pieces.push(first_piece[left]);
        left -= first_piece[left];
    }

    Ok(RodCut {
        revenue: revenue[rod_length],
        pieces,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRICES: [u32; 11] = [0, 1, 5, 8, 9, 10, 17, 17, 20, 24, 30];

    #[test]
    fn test_nothing_to_cut() {
        assert_eq!(max_revenue_brute_force(0, &PRICES).unwrap(), 0);
        assert_eq!(max_revenue_memoized(0, &PRICES).unwrap(), 0);
        let cut = cut_rod(0, &PRICES).unwrap();
        assert_eq!(cut.revenue, 0);
        assert!(cut.pieces.is_empty());
    }

    #[test]
    fn test_price_large_enough_means_no_cut() {
        assert_eq!(max_revenue_brute_force(2, &PRICES).unwrap(), 5);
        assert_eq!(cut_rod(2, &PRICES).unwrap().pieces, vec![2]);
        assert_eq!(cut_rod(10, &PRICES).unwrap().pieces, vec![10]);
    }

    #[test]
    fn test_known_revenues() {
        assert_eq!(max_revenue_brute_force(4, &PRICES).unwrap(), 10);
        assert_eq!(max_revenue_brute_force(7, &PRICES).unwrap(), 18);
        assert_eq!(max_revenue_brute_force(10, &PRICES).unwrap(), 30);
    }

    #[test]
    fn test_variants_agree() {
        for length in 0..PRICES.len() {
            let brute = max_revenue_brute_force(length, &PRICES).unwrap();
            assert_eq!(brute, max_revenue_memoized(length, &PRICES).unwrap());
            assert_eq!(brute, max_revenue_bottom_up(length, &PRICES).unwrap());
        }
    }

    #[test]
    fn test_pieces_realise_revenue() {
        for length in 0..PRICES.len() {
            let cut = cut_rod(length, &PRICES).unwrap();
            assert_eq!(cut.pieces.iter().sum::<usize>(), length);
            let revenue: u32 = cut.pieces.iter().map(|&p| PRICES[p]).sum();
            assert_eq!(revenue, cut.revenue);
        }
    }

    #[test]
    fn test_memoized_long_rod() {
        // Far too slow for the brute force.
        let prices: Vec<u64> = (0..=35).collect();
        assert_eq!(max_revenue_memoized(35, &prices).unwrap(), 35);
    }

    #[test]
    fn test_float_prices() {
        let prices = [0.0, 1.5, 3.5, 4.0];
        let cut = cut_rod(3, &prices).unwrap();
        assert_eq!(cut.pieces, vec![1, 2]);
        approx::assert_relative_eq!(cut.revenue, 5.0);
    }

    #[test]
    fn test_negative_prices_sell_nothing() {
        let prices = [0i64, -3, -5];
        assert_eq!(max_revenue_brute_force(2, &prices).unwrap(), 0);
        assert_eq!(max_revenue_memoized(2, &prices).unwrap(), 0);
        assert_eq!(max_revenue_bottom_up(2, &prices).unwrap(), 0);
        let cut = cut_rod(2, &prices).unwrap();
        assert_eq!(cut.revenue, 0);
        assert!(cut.pieces.is_empty());
    }

    #[test]
    fn test_mixed_sign_prices_leave_scrap() {
        // Selling the length-2 piece and keeping the last inch beats every
        // full cut.
        let prices = [0i64, -1, 4, -2];
        assert_eq!(max_revenue_brute_force(3, &prices).unwrap(), 4);
        assert_eq!(max_revenue_memoized(3, &prices).unwrap(), 4);
        let cut = cut_rod(3, &prices).unwrap();
        assert_eq!(cut.revenue, 4);
        assert_eq!(cut.pieces, vec![2]);
    }

    #[test]
    fn test_memoized_very_long_rod() {
        let prices: Vec<u64> = (0..=3_000).map(|len| len + len / 2).collect();
        let expected = max_revenue_bottom_up(3_000, &prices).unwrap();
        assert_eq!(max_revenue_memoized(3_000, &prices).unwrap(), expected);
    }

    #[test]
    fn test_missing_price() {
        assert!(matches!(
            max_revenue_memoized(11, &PRICES),
            Err(Error::InvalidArgument(_))
        ));
        assert!(cut_rod::<u32>(1, &[]).is_err());
    }
}
