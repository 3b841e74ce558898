pub mod coin_change;
pub mod knapsack;
pub mod longest_common_subsequence;
pub mod min_jumps;
pub mod rod_cutting;


// Re-export dynamic programming algorithms with descriptive names
pub use coin_change::{make_change, make_change_memoized, Change};
pub use knapsack::{
    max_value_brute_force as knapsack_brute_force, solve as knapsack_solve,
    solve_with_value as knapsack_solve_with_value, KnapsackSolution, KnapsackValue,
};
pub use longest_common_subsequence::{lcs_length, lcs_sequence, lcs_str_length, lcs_string};
pub use min_jumps::min_jumps;
pub use rod_cutting::{
    cut_rod, max_revenue_bottom_up, max_revenue_brute_force, max_revenue_memoized, RodCut,
};
