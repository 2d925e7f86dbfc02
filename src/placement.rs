//! Greedy left-to-right placement under a spacing or grouping rule.

use crate::binary_search::{find_boundary, partition_point_f64, Direction};
use crate::ceil_div::min_max;
use crate::config::RealSearch;
use crate::error::{Error, Result};

/// Whether `cows` fit into sorted `stalls` at least `dist` apart.
///
/// `stalls` must ascend. Out-of-order input gives a meaningless answer but
/// never panics.
pub fn can_place(stalls: &[u32], cows: u32, dist: u32) -> bool {
    let Some((&first, rest)) = stalls.split_first() else {
        return cows == 0;
    };
    let mut placed = 1;
    let mut last = first;
    for &s in rest {
        if placed >= cows {
            break;
        }
        if s.saturating_sub(last) >= dist {
            placed += 1;
            last = s;
        }
    }
    placed >= cows
}

/// Largest minimum distance achievable between `cows` placed on `stalls`.
///
/// `stalls` need not be sorted; a sorted copy is searched and the caller's
/// slice is left as is.
pub fn aggressive_cows(stalls: &[u32], cows: u32) -> Result<u32> {
    if stalls.is_empty() {
        return Err(Error::Empty("stalls"));
    }
    if cows < 2 {
        return Err(Error::InvalidCount {
            name: "cows",
            value: cows as u64,
        });
    }
    if cows as usize > stalls.len() {
        return Err(Error::Infeasible("more cows than stalls"));
    }

    let mut xs = stalls.to_vec();
    xs.sort_unstable();
    let high = (xs[xs.len() - 1] - xs[0]) / (cows - 1);
    tracing::debug!(target: "bsearch", cows, low = 1, high, "cow distance bounds");

    // distance 0 always fits; it is only the answer for stacked stalls
    let dist = find_boundary(1, high, Direction::Rightmost, |d| can_place(&xs, cows, d)).unwrap_or(0);
    tracing::debug!(target: "bsearch", dist, "cow distance found");
    Ok(dist)
}

/// Bouquets of `k` adjacent flowers that have bloomed by `day`.
pub fn bouquets_possible(bloom: &[u32], day: u32, k: u32) -> u64 {
    debug_assert!(k > 0);
    let mut run = 0;
    let mut bouquets = 0;
    for &b in bloom {
        if b <= day {
            run += 1;
            if run == k {
                bouquets += 1;
                run = 0;
            }
        } else {
            run = 0;
        }
    }
    bouquets
}

/// First day on which `m` bouquets of `k` adjacent flowers can be made.
pub fn min_days_bouquets(bloom: &[u32], m: u32, k: u32) -> Result<u32> {
    if m == 0 {
        return Err(Error::ZeroCount("m"));
    }
    if k == 0 {
        return Err(Error::ZeroCount("k"));
    }
    if m as u64 * k as u64 > bloom.len() as u64 {
        tracing::debug!(target: "bsearch", m, k, n = bloom.len(), "not enough flowers");
        return Err(Error::Infeasible("fewer flowers than m * k"));
    }

    let (low, high) = min_max(bloom, "bloom days")?;
    tracing::debug!(target: "bsearch", low, high, "bloom day bounds");
    let day = find_boundary(low, high, Direction::Leftmost, |d| {
        bouquets_possible(bloom, d, k) >= m as u64
    })
    .ok_or(Error::Infeasible("fewer flowers than m * k"))?;
    tracing::debug!(target: "bsearch", day, "bloom day found");
    Ok(day)
}

/// New stations required so no gap in sorted `stations` exceeds `dist`.
pub fn stations_needed(stations: &[i64], dist: f64) -> u64 {
    debug_assert!(dist > 0.0);
    stations
        .windows(2)
        .map(|w| {
            let gap = w[1].abs_diff(w[0]) as f64;
            // a gap of exactly n * dist needs n - 1 stations, not n
            ((gap / dist).ceil() as u64).saturating_sub(1)
        })
        .sum()
}

/// Smallest achievable maximum gap after adding `k` stations, to the
/// default precision of `1e-6`.
pub fn min_max_gas_distance(stations: &[i64], k: u32) -> Result<f64> {
    min_max_gas_distance_with(stations, k, &RealSearch::default())
}

pub fn min_max_gas_distance_with(stations: &[i64], k: u32, config: &RealSearch) -> Result<f64> {
    config.validate().map_err(Error::InvalidConfig)?;
    if stations.len() < 2 {
        return Err(Error::Empty("station gaps"));
    }
    if stations.windows(2).any(|w| w[0] > w[1]) {
        return Err(Error::Unsorted("stations"));
    }

    let high = stations
        .windows(2)
        .map(|w| w[1].abs_diff(w[0]) as f64)
        .fold(0.0, f64::max);
    if high == 0.0 {
        return Ok(0.0);
    }

    tracing::debug!(target: "bsearch", k, high, eps = config.eps, "gas distance bounds");
    let dist = partition_point_f64(0.0, high, config, |d| stations_needed(stations, d) > k as u64);
    tracing::debug!(target: "bsearch", dist, "gas distance found");
    Ok(dist)
}
