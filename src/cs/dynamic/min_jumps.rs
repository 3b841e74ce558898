use crate::error::{Error, Result};

/// Returns the fewest jumps needed to get from the first to the last element
/// of `path`, where `path[j]` is the longest jump allowed from position `j`.
///
/// An element of `0` cannot be moved through. Returns `Ok(None)` when the last
/// element is unreachable and `Ok(Some(0))` for a single-element path.
///
/// # Errors
///
/// * [`Error::InvalidArgument`] if `path` is empty.
///
/// # Examples
///
/// ```
/// use dynprog::cs::dynamic::min_jumps::min_jumps;
///
/// // 1 -> 3 -> 8 -> 9
/// assert_eq!(min_jumps(&[1, 3, 5, 8, 9, 2, 6, 7, 6, 8, 9]).unwrap(), Some(3));
/// assert_eq!(min_jumps(&[1, 0, 2]).unwrap(), None);
/// ```
///
/// # Complexity
/// * Time: O(n^2)
/// * Space: O(n)
pub fn min_jumps(path: &[usize]) -> Result<Option<usize>> {
    if path.is_empty() {
        return Err(Error::invalid_argument("path must not be empty"));
    }

    log::debug!("min_jumps: path of {} elements", path.len());

    // jumps[i] = fewest jumps to land on i, None while unreachable
    let mut jumps: Vec<Option<usize>> = vec![None; path.len()];
    jumps[0] = Some(0);

    for i in 1..path.len() {
        jumps[i] = (0..i)
            .filter(|&j| i - j <= path[j])
            .filter_map(|j| jumps[j])
            .min()
            .map(|fewest| fewest + 1);
    }

    Ok(jumps[path.len() - 1])
}
