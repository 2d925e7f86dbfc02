use crate::error::{Error, Result};

/// Ceiling division for unsigned integers.
///
/// Computed as quotient plus one on a non-zero remainder, so it cannot
/// overflow the way `(a + b - 1) / b` can near the top of the type.
pub trait CeilDiv: Sized {
    /// Panics if `rhs` is zero.
    fn ceil_div(self, rhs: Self) -> Self;

    fn checked_ceil_div(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_ceil_div {
    ($($t:ty),*) => {
        $(
            impl CeilDiv for $t {
                #[inline]
                fn ceil_div(self, rhs: Self) -> Self {
                    self / rhs + (self % rhs != 0) as $t
                }

                #[inline]
                fn checked_ceil_div(self, rhs: Self) -> Option<Self> {
                    let q = self.checked_div(rhs)?;
                    let r = self.checked_rem(rhs)?;
                    Some(q + (r != 0) as $t)
                }
            }
        )*
    };
}

impl_ceil_div!(u32, u64, usize);

/// Sum widened to 64 bits. 10^5 values of 10^9 do not fit in 32.
pub fn sum_u64(xs: &[u32]) -> u64 {
    xs.iter().map(|&x| x as u64).sum()
}

/// Smallest and largest element; the usual source of a search interval.
pub fn min_max<T: Copy + Ord>(xs: &[T], what: &'static str) -> Result<(T, T)> {
    let (&first, rest) = xs.split_first().ok_or(Error::Empty(what))?;
    Ok(rest
        .iter()
        .fold((first, first), |(lo, hi), &x| (lo.min(x), hi.max(x))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceil_div_small() {
        for a in 0u32..50 {
            for b in 1u32..12 {
                let expected = (a as f64 / b as f64).ceil() as u32;
                assert_eq!(a.ceil_div(b), expected, "{:?}", (a, b));
            }
        }
    }

    #[test]
    fn ceil_div_near_max() {
        assert_eq!(u32::MAX.ceil_div(2), 1 << 31);
        assert_eq!(u64::MAX.ceil_div(u64::MAX), 1);
        assert_eq!((u64::MAX - 1).ceil_div(u64::MAX), 1);
        assert_eq!(usize::MAX.ceil_div(1), usize::MAX);
    }

    #[test]
    fn checked_rejects_zero() {
        assert_eq!(7u32.checked_ceil_div(0), None);
        assert_eq!(7u32.checked_ceil_div(3), Some(3));
        assert_eq!(0u64.checked_ceil_div(3), Some(0));
    }

    #[test]
    fn wide_sum() {
        let xs = vec![1_000_000_000u32; 100_000];
        assert_eq!(sum_u64(&xs), 100_000_000_000_000);
        assert_eq!(sum_u64(&[]), 0);
    }

    #[test]
    fn min_max_of_slice() {
        assert_eq!(min_max(&[3, -1, 8, 2], "xs"), Ok((-1, 8)));
        assert_eq!(min_max(&[5u32], "xs"), Ok((5, 5)));
        assert_eq!(min_max::<u32>(&[], "xs"), Err(Error::Empty("xs")));
    }
}
