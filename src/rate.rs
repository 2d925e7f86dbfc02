use crate::binary_search::{find_boundary, Direction};
use crate::ceil_div::{min_max, CeilDiv};
use crate::error::{Error, Result};

/// Hours to finish every pile eating `speed` per hour, one pile per hour
/// at most.
pub fn hours_needed(piles: &[u32], speed: u32) -> u64 {
    debug_assert!(speed > 0);
    piles.iter().map(|&p| p.ceil_div(speed) as u64).sum()
}

/// Sum of `ceil(x / d)` over `nums`.
pub fn divided_sum(nums: &[u32], d: u32) -> u64 {
    hours_needed(nums, d)
}

/// Least eating speed that clears all piles within `hours`.
pub fn min_eating_speed(piles: &[u32], hours: u64) -> Result<u32> {
    let (_, max) = min_max(piles, "piles")?;
    if hours == 0 {
        return Err(Error::ZeroCount("hours"));
    }
    // even at full speed every non-empty pile costs an hour
    let busy = piles.iter().filter(|&&p| p > 0).count() as u64;
    if busy > hours {
        tracing::debug!(target: "bsearch", busy, hours, "not enough hours");
        return Err(Error::Infeasible("fewer hours than piles"));
    }

    let high = max.max(1);
    tracing::debug!(target: "bsearch", low = 1, high, hours, "eating speed bounds");
    let speed = find_boundary(1, high, Direction::Leftmost, |s| {
        hours_needed(piles, s) <= hours
    })
    .ok_or(Error::Infeasible("fewer hours than piles"))?;
    tracing::debug!(target: "bsearch", speed, "eating speed found");
    Ok(speed)
}

/// Least divisor `d` with `sum(ceil(x / d)) <= threshold`.
pub fn smallest_divisor(nums: &[u32], threshold: u64) -> Result<u32> {
    let (_, max) = min_max(nums, "nums")?;
    let high = max.max(1);
    if divided_sum(nums, high) > threshold {
        tracing::debug!(target: "bsearch", threshold, n = nums.len(), "threshold below floor");
        return Err(Error::Infeasible("threshold below element count"));
    }

    tracing::debug!(target: "bsearch", low = 1, high, threshold, "divisor bounds");
    let d = find_boundary(1, high, Direction::Leftmost, |d| {
        divided_sum(nums, d) <= threshold
    })
    .ok_or(Error::Infeasible("threshold below element count"))?;
    tracing::debug!(target: "bsearch", d, "divisor found");
    Ok(d)
}
