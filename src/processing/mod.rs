//! Address-range arithmetic.
//!
//! The four engine operations. All are pure functions of their arguments:
//! - [`convert`] - CIDR block to range and back
//! - [`partition`] - equal and custom-demand subnet splits
//! - [`overlap`] - pairwise intersection report
//! - [`summarize`] - contiguous ranges to one covering block

mod convert;
mod overlap;
mod partition;
mod summarize;

// Re-export public functions
pub use convert::{
    cidr_to_range, describe_cidr, describe_range, range_to_cidr, range_to_cidr_set,
};
pub use overlap::{detect_cidr_overlaps, detect_overlaps, find_overlaps, NO_OVERLAPS};
pub use partition::{partition_custom, partition_equal};
pub use summarize::{summarize, summarize_cidrs};
