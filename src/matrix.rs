//! Searches over grids whose rows (and sometimes columns) are sorted.
//!
//! A matrix is any slice of rows, `&[Vec<i32>]` or `&[[i32; N]]` alike.
//! All entry points reject empty and ragged matrices.

use crate::binary_search::{binary_search_by, find_boundary, partition_point, Direction};
use crate::error::{Error, Result};

/// `(rows, cols)` of a non-empty rectangular matrix.
pub fn dims<R: AsRef<[i32]>>(matrix: &[R]) -> Result<(usize, usize)> {
    let first = matrix.first().ok_or(Error::Empty("matrix"))?;
    let cols = first.as_ref().len();
    if cols == 0 {
        return Err(Error::Empty("matrix row"));
    }
    if let Some(row) = matrix.iter().position(|r| r.as_ref().len() != cols) {
        return Err(Error::Ragged {
            row,
            expected: cols,
            found: matrix[row].as_ref().len(),
        });
    }
    Ok((matrix.len(), cols))
}

/// Looks up `target` in a matrix that is sorted when read row by row.
pub fn search_sorted<R: AsRef<[i32]>>(matrix: &[R], target: i32) -> Result<bool> {
    let (rows, cols) = dims(matrix)?;
    let found = binary_search_by(0, rows * cols, |idx| {
        matrix[idx / cols].as_ref()[idx % cols].cmp(&target)
    });
    Ok(found.is_ok())
}

/// Looks up `target` in a matrix whose rows and columns both ascend.
///
/// Walks from the top-right corner, dropping a column when the value is
/// too large and a row when it is too small.
pub fn search_staircase<R: AsRef<[i32]>>(matrix: &[R], target: i32) -> Result<bool> {
    let (rows, cols) = dims(matrix)?;
    let (mut r, mut c) = (0, cols);
    while r < rows && c > 0 {
        let x = matrix[r].as_ref()[c - 1];
        if x == target {
            return Ok(true);
        }
        if x > target {
            c -= 1;
        } else {
            r += 1;
        }
    }
    Ok(false)
}

/// Number of entries `<= x` in a row-sorted matrix.
pub fn count_le<R: AsRef<[i32]>>(matrix: &[R], x: i32) -> u64 {
    matrix
        .iter()
        .map(|row| {
            let row = row.as_ref();
            partition_point(0, row.len(), |j| row[j] <= x) as u64
        })
        .sum()
}

/// Median of a row-sorted matrix with an odd number of entries.
///
/// Searches the value range for the least `v` with more than half of the
/// entries `<= v`.
pub fn median_row_sorted<R: AsRef<[i32]>>(matrix: &[R]) -> Result<i32> {
    let (rows, cols) = dims(matrix)?;
    let total = rows * cols;
    if total % 2 == 0 {
        return Err(Error::EvenCount(total));
    }

    let low = matrix.iter().map(|r| r.as_ref()[0]).min().unwrap_or(i32::MIN);
    let high = matrix.iter().map(|r| r.as_ref()[cols - 1]).max().unwrap_or(i32::MAX);
    let need = (total / 2 + 1) as u64;
    tracing::debug!(target: "bsearch", rows, cols, low, high, "matrix median bounds");

    let median = find_boundary(low, high, Direction::Leftmost, |v| count_le(matrix, v) >= need)
        .ok_or(Error::Unsorted("matrix rows"))?;
    tracing::debug!(target: "bsearch", median, "matrix median found");
    Ok(median)
}

/// Index of an entry not smaller than its neighbors, scanning for the
/// first rise from the left.
///
/// Any `i` with `xs[i - 1] < xs[i] >= xs[i + 1]` qualifies, with the ends
/// compared against negative infinity.
pub fn find_peak(xs: &[i32]) -> Result<usize> {
    if xs.is_empty() {
        return Err(Error::Empty("xs"));
    }
    // the search only keeps "xs[left - 1] rises" and "xs[right] falls"
    Ok(partition_point(0, xs.len() - 1, |i| xs[i] < xs[i + 1]))
}

/// `(row, col)` of an entry not smaller than any of its four neighbors,
/// in `O(rows * log(cols))`.
pub fn find_peak_2d<R: AsRef<[i32]>>(matrix: &[R]) -> Result<(usize, usize)> {
    let (_, cols) = dims(matrix)?;
    let at = |r: usize, c: usize| matrix[r].as_ref()[c] as i64;

    let (mut low, mut high) = (0, cols - 1);
    loop {
        let mid = low + (high - low) / 2;
        let mut row = 0;
        for r in 1..matrix.len() {
            if at(r, mid) > at(row, mid) {
                row = r;
            }
        }

        let cur = at(row, mid);
        let left = if mid > 0 { at(row, mid - 1) } else { i64::MIN };
        let right = if mid + 1 < cols { at(row, mid + 1) } else { i64::MIN };
        if cur >= left && cur >= right {
            tracing::debug!(target: "bsearch", row, col = mid, "peak found");
            return Ok((row, mid));
        }
        // a strictly larger neighbor means the larger half holds a peak
        if left > cur {
            high = mid - 1;
        } else {
            low = mid + 1;
        }
    }
}
