/// Factorials up to 20! fit exactly in a u64
pub(crate) const FACTORIAL_LIMIT: usize = 21;
pub(crate) const FACTORIALS: [u64; FACTORIAL_LIMIT] = {
    let mut facts = [1u64; FACTORIAL_LIMIT];
    let mut i = 1;
    while i < FACTORIAL_LIMIT {
        facts[i] = facts[i - 1] * (i as u64);
        i += 1;
    }
    facts
};

pub(crate) fn factorial(n: usize) -> f64 {
    if n < FACTORIAL_LIMIT {
        FACTORIALS[n] as f64
    } else {
        (FACTORIAL_LIMIT..=n).fold(FACTORIALS[FACTORIAL_LIMIT - 1] as f64, |acc, i| {
            acc * i as f64
        })
    }
}

/// Probability that exactly the `coalition_size` players seated before a given player form
/// a specific coalition in a uniformly random ordering of `n_players`.
///
/// `coalition_size` must be strictly less than `n_players`.
pub(crate) fn shapley_weight(coalition_size: usize, n_players: usize) -> f64 {
    debug_assert!(coalition_size < n_players);
    factorial(coalition_size) * factorial(n_players - coalition_size - 1) / factorial(n_players)
}
