//! Overlapping range detection.
//!
//! Every unordered pair of input ranges is tested with a closed-interval
//! intersection. Pairs are reported by input index, `i < j`.

use crate::error::CalcError;
use crate::models::{AddressRange, CidrBlock};
use itertools::Itertools;

/// Message used by renderers when no pair intersects.
pub const NO_OVERLAPS: &str = "No overlaps detected";

/// Index pairs `(i, j)` with `i < j` whose ranges intersect, in enumeration order.
pub fn find_overlaps(ranges: &[AddressRange]) -> Result<Vec<(usize, usize)>, CalcError> {
    if ranges.len() < 2 {
        return Err(CalcError::InvalidInput(
            "At least two ranges are required".to_string(),
        ));
    }

    let pairs: Vec<(usize, usize)> = ranges
        .iter()
        .enumerate()
        .tuple_combinations()
        .filter(|((_, a), (_, b))| a.overlaps(b))
        .map(|((i, _), (j, _))| (i, j))
        .collect();

    log::debug!(
        "find_overlaps: {} ranges, {} overlapping pairs",
        ranges.len(),
        pairs.len()
    );
    Ok(pairs)
}

/// One `"<a> overlaps with <b>"` line per intersecting pair.
///
/// An empty result means no overlaps, not a failure.
pub fn detect_overlaps(
    ranges: &[AddressRange],
    labels: &[String],
) -> Result<Vec<String>, CalcError> {
    if labels.len() != ranges.len() {
        return Err(CalcError::InvalidInput(format!(
            "Expected {} labels, got {}",
            ranges.len(),
            labels.len()
        )));
    }
    let lines = find_overlaps(ranges)?
        .into_iter()
        .map(|(i, j)| format!("{} overlaps with {}", labels[i], labels[j]))
        .collect();
    Ok(lines)
}

/// [`detect_overlaps`] over CIDR blocks, labelled by their own notation.
pub fn detect_cidr_overlaps(blocks: &[CidrBlock]) -> Result<Vec<String>, CalcError> {
    let ranges = blocks
        .iter()
        .map(|block| AddressRange::try_from(*block))
        .collect::<Result<Vec<_>, _>>()?;
    let labels: Vec<String> = blocks.iter().map(|block| block.to_string()).collect();
    detect_overlaps(&ranges, &labels)
}
