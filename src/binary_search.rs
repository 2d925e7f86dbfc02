//! Binary search over integer and real intervals, driven by a predicate
//! rather than a slice.
//!
//! Every solver in this crate derives an interval from its input and hands
//! a feasibility check to one of the routines here. Predicates must be
//! monotone on the interval. That is assumed, never verified.

use std::cmp::Ordering;

use crate::config::RealSearch;

mod sealed {
    pub trait Sealed {}
}

/// Primitive integers usable as a search domain.
pub trait Integer: sealed::Sealed + Copy + Ord + std::fmt::Debug {
    /// `low + (high - low) / 2` without overflow, for any `low <= high`.
    fn mid(low: Self, high: Self) -> Self;
    fn checked_inc(self) -> Option<Self>;
    fn checked_dec(self) -> Option<Self>;
}

macro_rules! impl_integer {
    ($($t:ty => $u:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Integer for $t {
                #[inline]
                fn mid(low: Self, high: Self) -> Self {
                    debug_assert!(low <= high);
                    // the distance always fits in the unsigned twin
                    let half = (high as $u).wrapping_sub(low as $u) / 2;
                    low.wrapping_add(half as $t)
                }

                #[inline]
                fn checked_inc(self) -> Option<Self> {
                    self.checked_add(1)
                }

                #[inline]
                fn checked_dec(self) -> Option<Self> {
                    self.checked_sub(1)
                }
            }
        )*
    };
}

impl_integer!(
    i32 => u32,
    i64 => u64,
    u32 => u32,
    u64 => u64,
    usize => usize
);

/// Which end of the satisfying region [`find_boundary`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Predicate is false then true; find the first true. Minimization.
    Leftmost,
    /// Predicate is true then false; find the last true. Maximization.
    Rightmost,
}

/// First point of `[left, right)` where `pred` turns false, or `right`.
pub fn partition_point<T, P>(mut left: T, mut right: T, mut pred: P) -> T
where
    T: Integer,
    P: FnMut(T) -> bool,
{
    while left < right {
        let mid = T::mid(left, right);
        if pred(mid) {
            // mid < right, so this cannot overflow
            left = mid.checked_inc().unwrap_or(right);
        } else {
            right = mid;
        }
    }
    left
}

/// Boundary of the region of `[low, high]` where `pred` holds.
///
/// Returns `None` if no probed value satisfied `pred`, which for a
/// monotone predicate means none in the interval does. An empty interval
/// (`low > high`) also yields `None`.
pub fn find_boundary<T, P>(mut low: T, mut high: T, direction: Direction, mut pred: P) -> Option<T>
where
    T: Integer,
    P: FnMut(T) -> bool,
{
    let mut found = None;
    while low <= high {
        let mid = T::mid(low, high);
        let hit = pred(mid);
        if hit {
            found = Some(mid);
        }
        if hit == (direction == Direction::Leftmost) {
            match mid.checked_dec() {
                Some(h) => high = h,
                None => break,
            }
        } else {
            match mid.checked_inc() {
                Some(l) => low = l,
                None => break,
            }
        }
    }
    found
}

/// Three-way search over `[left, right)`.
///
/// `f(x)` reports how `x` compares to the target. Exits on the first
/// `Equal`; otherwise returns the insertion point as `Err`.
pub fn binary_search_by<T, F>(mut left: T, mut right: T, mut f: F) -> Result<T, T>
where
    T: Integer,
    F: FnMut(T) -> Ordering,
{
    while left < right {
        let mid = T::mid(left, right);
        match f(mid) {
            Ordering::Less => {
                left = mid.checked_inc().unwrap_or(right);
            }
            Ordering::Greater => {
                right = mid;
            }
            Ordering::Equal => {
                return Ok(mid);
            }
        }
    }
    Err(left)
}

/// Bisects `[left, right]` while `pred` holds on the left part.
///
/// Returns the right end of the final bracket: the smallest probed value
/// where `pred` failed, or the initial `right` if it never failed.
pub fn partition_point_f64<P>(mut left: f64, mut right: f64, config: &RealSearch, mut pred: P) -> f64
where
    P: FnMut(f64) -> bool,
{
    let mut iter = 0;
    while right - left > config.eps && iter < config.max_iter {
        let mid = left + (right - left) / 2.0;
        if pred(mid) {
            left = mid;
        } else {
            right = mid;
        }
        iter += 1;
        tracing::trace!(target: "bsearch", iter, left, right);
    }
    right
}
