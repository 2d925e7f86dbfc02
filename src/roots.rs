//! Integer roots, where the predicate is an equality oracle rather than a
//! threshold.

use std::cmp::Ordering;

use crate::binary_search::{binary_search_by, find_boundary, Direction};
use crate::error::{Error, Result};

/// `floor(sqrt(n))`, exact over the whole `u64` range.
pub fn isqrt(n: u64) -> u64 {
    // x <= n / x  <=>  x * x <= n, for x >= 1
    find_boundary(1, n, Direction::Rightmost, |x| x <= n / x).unwrap_or(0)
}

/// The integer `m`-th root of `n`, if `n` is a perfect `m`-th power.
pub fn nth_root(n: u64, m: u32) -> Result<Option<u64>> {
    if m == 0 {
        return Err(Error::ZeroCount("root degree"));
    }
    if n < 2 || m == 1 {
        return Ok(Some(n));
    }
    // for m >= 2 the root of n >= 2 lies in [1, n)
    let res = binary_search_by(1, n, |x| match x.checked_pow(m) {
        Some(p) => p.cmp(&n),
        None => Ordering::Greater,
    });
    Ok(res.ok())
}
