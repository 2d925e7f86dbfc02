//! Contiguous partitioning under a load cap: shipping, book allocation,
//! painter partition and split-array-largest-sum are one problem with
//! different names for the bucket.

use crate::binary_search::{find_boundary, Direction};
use crate::ceil_div::{min_max, sum_u64};
use crate::error::{Error, Result};

/// Greedy count of contiguous buckets needed so none exceeds `cap`.
///
/// An element larger than `cap` still occupies a single bucket of its own.
/// Callers keep `cap >= max(xs)` so that never happens.
pub fn buckets_needed(xs: &[u32], cap: u64) -> u64 {
    let mut buckets = 1;
    let mut load = 0u64;
    for &x in xs {
        let x = x as u64;
        if load + x > cap {
            buckets += 1;
            load = x;
        } else {
            load += x;
        }
    }
    buckets
}

fn min_max_load(xs: &[u32], buckets: u64, what: &'static str) -> Result<u64> {
    let (_, max) = min_max(xs, what)?;
    let (low, high) = (max as u64, sum_u64(xs));
    tracing::debug!(target: "bsearch", what, buckets, low, high, "capacity bounds");

    // one bucket always suffices at cap = sum
    let cap = find_boundary(low, high, Direction::Leftmost, |cap| {
        buckets_needed(xs, cap) <= buckets
    })
    .ok_or(Error::Infeasible("no capacity fits the bucket count"))?;
    tracing::debug!(target: "bsearch", what, cap, "capacity found");
    Ok(cap)
}

/// Least ship capacity that delivers every package, in order, in `days`.
pub fn ship_within_days(weights: &[u32], days: u32) -> Result<u64> {
    if days == 0 {
        return Err(Error::ZeroCount("days"));
    }
    min_max_load(weights, days as u64, "weights")
}

/// Smallest possible maximum of pages read by one student, where each
/// student takes a non-empty contiguous run of books.
pub fn allocate_books(pages: &[u32], students: u32) -> Result<u64> {
    if students == 0 {
        return Err(Error::ZeroCount("students"));
    }
    if students as usize > pages.len() && !pages.is_empty() {
        tracing::debug!(target: "bsearch", students, books = pages.len(), "too many students");
        return Err(Error::Infeasible("more students than books"));
    }
    min_max_load(pages, students as u64, "pages")
}

/// Least time to paint all boards with `painters` working on contiguous
/// runs. Surplus painters stay idle.
pub fn painter_partition(boards: &[u32], painters: u32) -> Result<u64> {
    if painters == 0 {
        return Err(Error::ZeroCount("painters"));
    }
    min_max_load(boards, painters as u64, "boards")
}

/// Smallest largest sum over splits of `nums` into `k` non-empty
/// contiguous subarrays.
pub fn split_array_largest_sum(nums: &[u32], k: u32) -> Result<u64> {
    if k == 0 {
        return Err(Error::ZeroCount("k"));
    }
    if k as usize > nums.len() && !nums.is_empty() {
        return Err(Error::Infeasible("more subarrays than elements"));
    }
    min_max_load(nums, k as u64, "nums")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    // best split into at most k contiguous parts, by exhaustion
    fn min_max_naive(xs: &[u32], k: usize) -> u64 {
        let total = sum_u64(xs);
        if k == 1 || xs.len() <= 1 {
            return total;
        }
        let mut best = total;
        let mut head = 0u64;
        for j in 1..xs.len() {
            head += xs[j - 1] as u64;
            best = best.min(head.max(min_max_naive(&xs[j..], k - 1)));
        }
        best
    }

    #[test]
    fn ship_examples() {
        assert_eq!(ship_within_days(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10], 5), Ok(15));
        assert_eq!(ship_within_days(&[3, 2, 2, 4, 1, 4], 3), Ok(6));
        assert_eq!(ship_within_days(&[1, 2, 3, 1, 1], 4), Ok(3));
        assert_eq!(ship_within_days(&[7], 10), Ok(7));
    }

    #[test]
    fn ship_sum_does_not_overflow() {
        assert_eq!(ship_within_days(&vec![500; 50_000], 1), Ok(25_000_000));
        let heavy = vec![1_000_000_000; 100_000];
        assert_eq!(ship_within_days(&heavy, 1), Ok(100_000_000_000_000));
        assert_eq!(ship_within_days(&heavy, 100_000), Ok(1_000_000_000));
    }

    #[test]
    fn books_examples() {
        assert_eq!(allocate_books(&[12, 34, 67, 90], 2), Ok(113));
        assert_eq!(allocate_books(&[25, 46, 28, 49, 24], 4), Ok(71));
        assert_eq!(allocate_books(&[15, 17, 20], 3), Ok(20));
    }

    #[test]
    fn books_infeasible_and_malformed() {
        assert_eq!(
            allocate_books(&[10, 20], 3),
            Err(Error::Infeasible("more students than books"))
        );
        assert_eq!(allocate_books(&[], 1), Err(Error::Empty("pages")));
        assert_eq!(allocate_books(&[1], 0), Err(Error::ZeroCount("students")));
    }

    #[test]
    fn painters_allow_idle_workers() {
        assert_eq!(painter_partition(&[10, 20, 30, 40], 2), Ok(60));
        assert_eq!(painter_partition(&[5, 5, 5, 5], 2), Ok(10));
        assert_eq!(painter_partition(&[10, 20], 5), Ok(20));
        assert_eq!(painter_partition(&[], 2), Err(Error::Empty("boards")));
    }

    #[test]
    fn split_examples() {
        assert_eq!(split_array_largest_sum(&[7, 2, 5, 10, 8], 2), Ok(18));
        assert_eq!(split_array_largest_sum(&[1, 2, 3, 4, 5], 2), Ok(9));
        assert_eq!(split_array_largest_sum(&[1, 4, 4], 3), Ok(4));
        assert_eq!(
            split_array_largest_sum(&[1, 4, 4], 4),
            Err(Error::Infeasible("more subarrays than elements"))
        );
        assert_eq!(ship_within_days(&[1, 2], 0), Err(Error::ZeroCount("days")));
    }

    #[test]
    fn agrees_with_exhaustive_split() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..300 {
            let n = rng.gen_range(1..=8);
            let xs: Vec<u32> = (0..n).map(|_| rng.gen_range(0..=30)).collect();
            let k = rng.gen_range(1..=n as u32);
            let expected = min_max_naive(&xs, k as usize);
            assert_eq!(painter_partition(&xs, k), Ok(expected), "{:?}", (&xs, k));
            assert_eq!(allocate_books(&xs, k), Ok(expected), "{:?}", (&xs, k));
        }
    }

    #[test]
    fn bucket_count_is_monotone_and_tight() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..100 {
            let n = rng.gen_range(1..=20);
            let xs: Vec<u32> = (0..n).map(|_| rng.gen_range(1..=50)).collect();
            let (lo, hi) = (*xs.iter().max().unwrap() as u64, sum_u64(&xs));
            let counts: Vec<u64> = (lo..=hi).map(|c| buckets_needed(&xs, c)).collect();
            assert!(counts.windows(2).all(|w| w[0] >= w[1]), "{:?}", xs);

            let days = rng.gen_range(1..=n as u32);
            let t = ship_within_days(&xs, days).unwrap();
            assert!(buckets_needed(&xs, t) <= days as u64);
            if t > lo {
                assert!(buckets_needed(&xs, t - 1) > days as u64);
            }
        }
    }

    #[test]
    fn repeated_calls_agree() {
        let xs = [9, 1, 8, 2, 7, 3];
        assert_eq!(ship_within_days(&xs, 3), ship_within_days(&xs, 3));
    }
}
