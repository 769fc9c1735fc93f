/// Number of unordered pairs drawn from `n` items.
#[inline]
pub fn choose_2(n: u64) -> u64 {
    if n < 2 {
        0
    } else {
        n * (n - 1) / 2
    }
}

/// Number of unordered triples drawn from `n` items.
#[inline]
pub fn choose_3(n: u64) -> u64 {
    if n < 3 {
        0
    } else {
        n * (n - 1) / 2 * (n - 2) / 3
    }
}
