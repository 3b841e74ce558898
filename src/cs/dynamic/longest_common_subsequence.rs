/// Fills the `(a.len() + 1) x (b.len() + 1)` table of LCS lengths of prefixes.
fn lcs_table<T: PartialEq>(a: &[T], b: &[T]) -> Vec<Vec<usize>> {
    let mut table = vec![vec![0; b.len() + 1]; a.len() + 1];

    for (i, x) in a.iter().enumerate() {
        for (j, y) in b.iter().enumerate() {
            table[i + 1][j + 1] = if x == y {
                table[i][j] + 1
            } else {
                table[i][j + 1].max(table[i + 1][j])
            };
        }
    }

    table
}

/// Returns the length of the longest common subsequence of `a` and `b`.
///
/// # Examples
///
/// ```
/// use dynprog::cs::dynamic::longest_common_subsequence::lcs_length;
///
/// let x = [1, 2, 3, 2, 4, 1, 2];
/// let y = [2, 4, 3, 1, 2, 1];
/// assert_eq!(lcs_length(&x, &y), 4);
/// ```
pub fn lcs_length<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    lcs_table(a, b)[a.len()][b.len()]
}

/// Reconstructs one longest common subsequence of `a` and `b`.
///
/// When both directions keep the same length the walk moves left (drops an
/// element of `b`), so the result is deterministic.
pub fn lcs_sequence<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let table = lcs_table(a, b);
    let mut i = a.len();
    let mut j = b.len();
    let mut subsequence = Vec::with_capacity(table[i][j]);

    while i > 0 && j > 0 {
        if a[i - 1] == b[j - 1] {
            subsequence.push(a[i - 1].clone());
            i -= 1;
            j -= 1;
        } else if table[i - 1][j] > table[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    subsequence.reverse();
    subsequence
}

/// Character-level [`lcs_length`].
///
/// ```
/// use dynprog::cs::dynamic::longest_common_subsequence::lcs_str_length;
///
/// assert_eq!(lcs_str_length("ABCBDAB", "BDCABA"), 4);
/// ```
pub fn lcs_str_length(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    lcs_length(&a, &b)
}

/// Character-level [`lcs_sequence`].
pub fn lcs_string(a: &str, b: &str) -> String {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    lcs_sequence(&a, &b).into_iter().collect()
}
