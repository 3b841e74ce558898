//! 0/1 knapsack with reconstruction of the chosen items.
//!
//! The solver tabulates `M[i][w]`, the best value reachable with the first `i`
//! items and a weight budget of `w`, next to a choice table `K[i][w]` that
//! records whether item `i - 1` is part of that optimum. Only the choice table
//! is kept in full (one bit per cell); the value table is rolled over two rows
//! because each row reads nothing but the previous one.

use bitvec::prelude::*;
use num_traits::Num;

use crate::error::{Error, Result};

/// Numeric type usable as an item value.
#[cfg(not(feature = "parallel"))]
pub trait KnapsackValue: Num + Copy + PartialOrd {}

#[cfg(not(feature = "parallel"))]
impl<T: Num + Copy + PartialOrd> KnapsackValue for T {}

/// Numeric type usable as an item value.
#[cfg(feature = "parallel")]
pub trait KnapsackValue: Num + Copy + PartialOrd + Send + Sync {}

#[cfg(feature = "parallel")]
impl<T: Num + Copy + PartialOrd + Send + Sync> KnapsackValue for T {}

/// An optimal packing.
#[derive(Debug, Clone, PartialEq)]
pub struct KnapsackSolution<T> {
    /// Indices of the packed items, strictly increasing.
    pub items: Vec<usize>,
    /// Total value of the packed items, `M[n][capacity]`.
    pub value: T,
    /// Total weight of the packed items, never above the capacity.
    pub weight: usize,
}

/// Bits per word of the choice table.
const WORD: usize = usize::BITS as usize;

/// Bit-packed `K` table. Each row is padded to whole words so a row can be
/// handed out as a plain `&mut [usize]`.
struct ChoiceTable {
    bits: BitVec,
    words_per_row: usize,
}

impl ChoiceTable {
    /// Number of bits a table of `rows x cols` flags occupies, if it can be
    /// addressed at all.
    fn bit_len(rows: usize, cols: usize) -> Option<usize> {
        cols.div_ceil(WORD)
            .checked_mul(WORD)?
            .checked_mul(rows)
            .filter(|&bits| bits <= BitSlice::<usize, Lsb0>::MAX_BITS)
    }

    fn new(bit_len: usize, cols: usize) -> Self {
        Self {
            bits: bitvec![0; bit_len],
            words_per_row: cols.div_ceil(WORD),
        }
    }

    fn row_mut(&mut self, row: usize) -> &mut [usize] {
        let start = row * self.words_per_row;
        &mut self.bits.as_raw_mut_slice()[start..start + self.words_per_row]
    }

    fn get(&self, row: usize, col: usize) -> bool {
        self.bits[row * self.words_per_row * WORD + col]
    }
}

/// Returns the indices of the items that maximise the packed value without
/// exceeding `capacity`.
///
/// `weights[i]` and `values[i]` describe item `i`. When several subsets reach
/// the same optimum, an item is only taken if it strictly improves on leaving
/// it out, so the returned subset is fully determined by the input.
///
/// # Errors
///
/// * [`Error::InvalidArgument`] if `weights` and `values` differ in length.
/// * [`Error::TableTooLarge`] if the `(n + 1) x (capacity + 1)` tables cannot
///   be addressed.
///
/// # Panics
///
/// Sums of values are not checked: with an integer `T` too narrow for the
/// total of the packed values, this panics in debug builds and wraps in
/// release builds.
///
/// # Examples
///
/// ```
/// use dynprog::cs::dynamic::knapsack::solve;
///
/// let items = solve(26, &[12, 7, 11, 8, 9], &[24, 13, 23, 15, 16]).unwrap();
/// assert_eq!(items, vec![1, 2, 3]);
/// ```
///
/// # Complexity
/// * Time: O(n * capacity)
/// * Space: O(n * capacity) bits for the choice table, O(capacity) values
pub fn solve<T: KnapsackValue>(
    capacity: usize,
    weights: &[usize],
    values: &[T],
) -> Result<Vec<usize>> {
    solve_with_value(capacity, weights, values).map(|solution| solution.items)
}

/// Same as [`solve`], but also reports the optimum value and the packed
/// weight.
///
/// # Examples
///
/// ```
/// use dynprog::cs::dynamic::knapsack::solve_with_value;
///
/// let solution = solve_with_value(26, &[12, 7, 11, 8, 9], &[24, 13, 23, 15, 16]).unwrap();
/// assert_eq!(solution.value, 51);
/// assert_eq!(solution.weight, 26);
/// ```
pub fn solve_with_value<T: KnapsackValue>(
    capacity: usize,
    weights: &[usize],
    values: &[T],
) -> Result<KnapsackSolution<T>> {
    let n = weights.len();
    if values.len() != n {
        return Err(Error::invalid_argument(format!(
            "got {} weights but {} values",
            n,
            values.len()
        )));
    }

    let rows = n + 1;
    let cols = capacity
        .checked_add(1)
        .ok_or(Error::TableTooLarge {
            rows,
            cols: usize::MAX,
        })?;
    let row_bytes = cols.checked_mul(std::mem::size_of::<T>().max(1));
    let bit_len = match (ChoiceTable::bit_len(rows, cols), row_bytes) {
        (Some(bit_len), Some(bytes)) if bytes <= isize::MAX as usize => bit_len,
        _ => return Err(Error::TableTooLarge { rows, cols }),
    };

    log::debug!("knapsack: {} items, capacity {}", n, capacity);

    let mut choices = ChoiceTable::new(bit_len, cols);
    let mut prev = vec![T::zero(); cols];
    let mut cur = vec![T::zero(); cols];

    for row in 1..rows {
        fill_row(
            &prev,
            &mut cur,
            choices.row_mut(row),
            weights[row - 1],
            values[row - 1],
        );
        std::mem::swap(&mut prev, &mut cur);
        log::trace!("knapsack: row {}/{} filled", row, n);
    }
    let value = prev[capacity];

    // Walk back from the last row; whenever an item was taken, continue from
    // the budget that remained before taking it.
    let mut items = Vec::new();
    let mut remaining = capacity;
    for row in (1..rows).rev() {
        if choices.get(row, remaining) {
            items.push(row - 1);
            remaining -= weights[row - 1];
        }
    }
    items.reverse();

    log::debug!("knapsack: packed {} of {} items", items.len(), n);

    Ok(KnapsackSolution {
        items,
        value,
        weight: capacity - remaining,
    })
}

/// Computes row `i` of the value table from row `i - 1` and flags the cells
/// where the item is taken.
#[cfg(not(feature = "parallel"))]
fn fill_row<T: KnapsackValue>(
    prev: &[T],
    cur: &mut [T],
    taken: &mut [usize],
    weight: usize,
    value: T,
) {
    let taken = BitSlice::<usize, Lsb0>::from_slice_mut(taken);
    for (c, cell) in cur.iter_mut().enumerate() {
        match take_item(prev, c, weight, value) {
            Some(with_item) => {
                *cell = with_item;
                taken.set(c, true);
            }
            None => *cell = prev[c],
        }
    }
}

/// Each task owns one word of flags and the `WORD` cells it covers.
#[cfg(feature = "parallel")]
fn fill_row<T: KnapsackValue>(
    prev: &[T],
    cur: &mut [T],
    taken: &mut [usize],
    weight: usize,
    value: T,
) {
    use rayon::prelude::*;

    cur.par_chunks_mut(WORD)
        .zip(taken.par_iter_mut())
        .enumerate()
        .for_each(|(chunk, (cells, word))| {
            let base = chunk * WORD;
            for (offset, cell) in cells.iter_mut().enumerate() {
                let c = base + offset;
                match take_item(prev, c, weight, value) {
                    Some(with_item) => {
                        *cell = with_item;
                        *word |= 1 << offset;
                    }
                    None => *cell = prev[c],
                }
            }
        });
}

/// Value of taking the item at budget `c`, if that strictly beats skipping it.
#[inline]
fn take_item<T: KnapsackValue>(prev: &[T], c: usize, weight: usize, value: T) -> Option<T> {
    if weight > c {
        return None;
    }
    let with_item = value + prev[c - weight];
    if with_item > prev[c] {
        Some(with_item)
    } else {
        None
    }
}

/// Largest number of items [`max_value_brute_force`] will enumerate.
pub const BRUTE_FORCE_MAX_ITEMS: usize = 24;

/// Best packed value found by trying every subset of items.
///
/// Exponential in the number of items; useful as a reference for small
/// instances.
///
/// # Errors
///
/// * [`Error::InvalidArgument`] if `weights` and `values` differ in length or
///   there are more than [`BRUTE_FORCE_MAX_ITEMS`] items.
///
/// # Panics
///
/// Like [`solve`], if the sum of a subset's values overflows `T`.
pub fn max_value_brute_force<T: KnapsackValue>(
    capacity: usize,
    weights: &[usize],
    values: &[T],
) -> Result<T> {
    let n = weights.len();
    if values.len() != n {
        return Err(Error::invalid_argument(format!(
            "got {} weights but {} values",
            n,
            values.len()
        )));
    }
    if n > BRUTE_FORCE_MAX_ITEMS {
        return Err(Error::invalid_argument(format!(
            "brute force is limited to {} items, got {}",
            BRUTE_FORCE_MAX_ITEMS, n
        )));
    }

    let mut best = T::zero();
    for mask in 0u32..(1u32 << n) {
        let mut weight = 0usize;
        let mut value = T::zero();
        let mut fits = true;
        for i in (0..n).filter(|&i| mask & (1 << i) != 0) {
            match weight.checked_add(weights[i]) {
                Some(w) if w <= capacity => weight = w,
                _ => {
                    fits = false;
                    break;
                }
            }
            value = value + values[i];
        }
        if fits && value > best {
            best = value;
        }
    }

    Ok(best)
}
