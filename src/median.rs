//! Order statistics of two sorted arrays without merging them.
//!
//! Both searches pick a cut `i` in the shorter array and the complementary
//! cut `take - i` in the longer one, then bisect on `i` until the left
//! side of both cuts lies below the right side of both.

use std::cmp::Ordering;

use crate::binary_search::binary_search_by;
use crate::error::{Error, Result};

/// Border values around a valid cut: the largest element taken and the
/// smallest element left over, with infinities standing in for none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cut {
    max_left: i64,
    min_right: i64,
}

fn left_of(xs: &[i32], i: usize) -> i64 {
    if i == 0 {
        i64::MIN
    } else {
        xs[i - 1] as i64
    }
}

fn right_of(xs: &[i32], i: usize) -> i64 {
    xs.get(i).map_or(i64::MAX, |&x| x as i64)
}

/// Finds the cut putting exactly `take` elements on the left.
///
/// Requires `a.len() <= b.len()` and `take <= a.len() + b.len()`.
fn partition(a: &[i32], b: &[i32], take: usize) -> Result<Cut> {
    let (m, n) = (a.len(), b.len());
    debug_assert!(m <= n && take <= m + n);

    let low = take.saturating_sub(n);
    let high = take.min(m);
    let i = binary_search_by(low, high + 1, |i| {
        let j = take - i;
        if left_of(a, i) > right_of(b, j) {
            // took too many from a
            Ordering::Greater
        } else if left_of(b, j) > right_of(a, i) {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    })
    // only reachable when an input is out of order
    .map_err(|_| Error::Unsorted("arrays"))?;

    let j = take - i;
    tracing::trace!(target: "bsearch", i, j, take, "partition found");
    Ok(Cut {
        max_left: left_of(a, i).max(left_of(b, j)),
        min_right: right_of(a, i).min(right_of(b, j)),
    })
}

fn shorter_first<'a>(a: &'a [i32], b: &'a [i32]) -> (&'a [i32], &'a [i32]) {
    if a.len() <= b.len() {
        (a, b)
    } else {
        (b, a)
    }
}

/// Median of the merge of two ascending arrays, in `O(log(min(m, n)))`.
pub fn median_of_two_sorted(a: &[i32], b: &[i32]) -> Result<f64> {
    let (a, b) = shorter_first(a, b);
    let total = a.len() + b.len();
    if total == 0 {
        return Err(Error::Empty("arrays"));
    }

    let cut = partition(a, b, (total + 1) / 2)?;
    let median = if total % 2 == 1 {
        cut.max_left as f64
    } else {
        (cut.max_left + cut.min_right) as f64 / 2.0
    };
    tracing::debug!(target: "bsearch", m = a.len(), n = b.len(), median, "median found");
    Ok(median)
}

/// The `k`-th smallest element (1-based) of the merge of two ascending
/// arrays.
pub fn kth_of_two_sorted(a: &[i32], b: &[i32], k: usize) -> Result<i32> {
    let (a, b) = shorter_first(a, b);
    if k == 0 || k > a.len() + b.len() {
        return Err(Error::InvalidCount {
            name: "k",
            value: k as u64,
        });
    }
    let cut = partition(a, b, k)?;
    Ok(cut.max_left as i32)
}
