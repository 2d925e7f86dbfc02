//! # bsearch-answer
//!
//! Binary search on the answer: solvers that derive an interval from their
//! input and bisect it with a monotone feasibility check.
//!
//! ## Modules
//!
//! - `binary_search` – the generic searches every solver is built on
//! - `ceil_div` – ceiling division, wide sums, interval bounds
//! - `roots` – integer square and n-th roots
//! - `capacity` – ship capacity, book allocation, painters, split array
//! - `rate` – Koko eating bananas, smallest divisor
//! - `placement` – aggressive cows, bouquets, gas stations
//! - `median` – median and k-th element of two sorted arrays
//! - `matrix` – sorted-matrix search, matrix median, peaks
//!
//! ---
//!
//! ## Usage Example
//!
//! ```rust
//! use bsearch_answer::capacity::ship_within_days;
//!
//! let cap = ship_within_days(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10], 5).unwrap();
//! assert_eq!(cap, 15);
//! ```
//!
//! Every solver returns [`Result`]: malformed input and infeasible
//! requests come back as [`Error`] variants rather than sentinels.
//! Progress is reported through `tracing` under the `bsearch` target.

pub mod binary_search;
pub mod capacity;
pub mod ceil_div;
pub mod config;
pub mod error;
pub mod matrix;
pub mod median;
pub mod placement;
pub mod rate;
pub mod roots;

pub use binary_search::{find_boundary, partition_point, Direction};
pub use config::RealSearch;
pub use error::{Error, Result};
