use std::collections::HashMap;

use crate::error::{Error, Result};

/// Change handed out for an amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    /// Number of coins used.
    pub count: usize,
    /// Coin values, in the order they were added to the table.
    pub coins: Vec<usize>,
}

fn validate_coins(coins: &[usize]) -> Result<()> {
    if coins.contains(&0) {
        return Err(Error::invalid_argument("coin values must be positive"));
    }
    Ok(())
}

/// Makes change for `amount` with the fewest coins, each denomination usable
/// any number of times.
///
/// Two tables are filled bottom-up over every amount up to `amount`: the
/// fewest coins needed and the coin that achieves it. For each amount the
/// denominations are tried in the order given and one replaces the current
/// best only if it needs strictly fewer coins. The coin list is read back by
/// repeatedly subtracting the recorded coin, then reversed.
///
/// Returns `Ok(None)` if `amount` cannot be formed.
///
/// # Errors
///
/// * [`Error::InvalidArgument`] if a coin value is zero.
/// * [`Error::TableTooLarge`] if `amount + 1` overflows.
///
/// # Examples
///
/// ```
/// use dynprog::cs::dynamic::coin_change::make_change;
///
/// let change = make_change(63, &[1, 5, 10, 21, 25]).unwrap().unwrap();
/// assert_eq!(change.count, 3);
/// assert_eq!(change.coins, vec![21, 21, 21]);
/// ```
pub fn make_change(amount: usize, coins: &[usize]) -> Result<Option<Change>> {
    validate_coins(coins)?;
    let cols = amount
        .checked_add(1)
        .ok_or(Error::TableTooLarge { rows: 1, cols: usize::MAX })?;

    log::debug!("make_change: amount {} with {} denominations", amount, coins.len());

    let mut fewest = vec![usize::MAX; cols];
    let mut next_coin = vec![0; cols];
    fewest[0] = 0;

    for current in 1..cols {
        for &coin in coins.iter().filter(|&&coin| coin <= current) {
            let rest = fewest[current - coin];
            if rest != usize::MAX && rest + 1 < fewest[current] {
                fewest[current] = rest + 1;
                next_coin[current] = coin;
            }
        }
    }

    if fewest[amount] == usize::MAX {
        return Ok(None);
    }

    let mut change = Vec::with_capacity(fewest[amount]);
    let mut left = amount;
    while left > 0 {
        change.push(next_coin[left]);
        left -= next_coin[left];
    }
    change.reverse();

    Ok(Some(Change {
        count: fewest[amount],
        coins: change,
    }))
}

/// Makes change for `amount` top-down, returning how many coins of each
/// denomination are used (`result[i]` counts `coins[i]`).
///
/// Sub-amounts are memoised by value. Denominations are tried in order and a
/// later one only wins with strictly fewer coins. Pending sub-amounts are kept
/// on a heap-allocated stack, so large amounts do not exhaust the call stack.
///
/// Returns `Ok(None)` if `amount` cannot be formed.
///
/// # Errors
///
/// * [`Error::InvalidArgument`] if a coin value is zero.
///
/// # Examples
///
/// ```
/// use dynprog::cs::dynamic::coin_change::make_change_memoized;
///
/// assert_eq!(make_change_memoized(5, &[1, 2, 3]).unwrap(), Some(vec![0, 1, 1]));
/// ```
pub fn make_change_memoized(amount: usize, coins: &[usize]) -> Result<Option<Vec<usize>>> {
    validate_coins(coins)?;

    log::debug!(
        "make_change_memoized: amount {} with {} denominations",
        amount,
        coins.len()
    );

    let mut memo: HashMap<usize, Option<Vec<usize>>> = HashMap::new();
    memo.insert(0, Some(vec![0; coins.len()]));

    let mut pending = vec![amount];
    while let Some(&current) = pending.last() {
        if memo.contains_key(&current) {
            pending.pop();
            continue;
        }

        // Solve every smaller amount this one depends on first.
        let unsolved = coins
            .iter()
            .filter(|&&coin| coin <= current)
            .map(|&coin| current - coin)
            .find(|rest| !memo.contains_key(rest));
        if let Some(rest) = unsolved {
            pending.push(rest);
            continue;
        }

        let best = fewest_from_memo(current, coins, &memo);
        memo.insert(current, best);
        pending.pop();
    }

    Ok(memo.remove(&amount).flatten())
}

/// Best per-denomination counts for `amount`, given every smaller amount it
/// can reach is already in `memo`.
fn fewest_from_memo(
    amount: usize,
    coins: &[usize],
    memo: &HashMap<usize, Option<Vec<usize>>>,
) -> Option<Vec<usize>> {
    let mut best: Option<(usize, usize, &Vec<usize>)> = None;
    for (index, &coin) in coins.iter().enumerate() {
        if coin > amount {
            continue;
        }
        let Some(Some(counts)) = memo.get(&(amount - coin)) else {
            continue;
        };
        let used = counts.iter().sum::<usize>() + 1;
        if best.map_or(true, |(fewest, _, _)| used < fewest) {
            best = Some((used, index, counts));
        }
    }

    best.map(|(_, index, counts)| {
        let mut counts = counts.clone();
        counts[index] += 1;
        counts
    })
}
