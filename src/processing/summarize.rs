//! Summarizing contiguous ranges into one CIDR block.

use crate::error::CalcError;
use crate::models::{
    address_from_decimal, ceil_log2, cidr_mask, AddressRange, CidrBlock, RouteSummary, MAX_LENGTH,
};

/// Single block exactly covering the given ranges.
///
/// Ranges are sorted by start and must then be strictly adjacent. The lowest
/// start must also lie on the boundary of the computed prefix, otherwise the
/// block would not begin where the ranges do.
///
/// # Returns
/// * `Err(NotContiguous)` - on a gap, an overlap or a misaligned start
pub fn summarize(ranges: &[AddressRange]) -> Result<CidrBlock, CalcError> {
    if ranges.len() < 2 {
        return Err(CalcError::InvalidInput(
            "At least two CIDRs are required".to_string(),
        ));
    }

    let mut sorted = ranges.to_vec();
    sorted.sort_by_key(|r| r.start);

    for pair in sorted.windows(2) {
        if pair[1].start_decimal() != pair[0].end_decimal() + 1 {
            log::debug!("summarize: {} does not follow {}", pair[1], pair[0]);
            return Err(CalcError::NotContiguous("not contiguous".to_string()));
        }
    }

    let min_start = sorted[0].start_decimal();
    let max_end = sorted
        .iter()
        .map(AddressRange::end_decimal)
        .max()
        .ok_or_else(|| CalcError::Internal("empty range list after check".to_string()))?;
    let total_hosts = max_end - min_start + 1;
    let summary_prefix = MAX_LENGTH - ceil_log2(total_hosts) as u8;

    let mask = cidr_mask(summary_prefix)?;
    let start = address_from_decimal(min_start)?;
    if u32::from(start) & !mask != 0 {
        log::debug!("summarize: {start} is not on a /{summary_prefix} boundary");
        return Err(CalcError::NotContiguous(format!(
            "{start} is not aligned to /{summary_prefix}"
        )));
    }

    CidrBlock::from_parts(start, summary_prefix)
}

/// [`summarize`] over CIDR blocks, with the netmask and size of the result.
pub fn summarize_cidrs(blocks: &[CidrBlock]) -> Result<RouteSummary, CalcError> {
    let ranges = blocks
        .iter()
        .map(|block| AddressRange::try_from(*block))
        .collect::<Result<Vec<_>, _>>()?;
    let summary = summarize(&ranges)?;
    Ok(RouteSummary {
        original_cidrs: blocks.to_vec(),
        summarized_cidr: summary,
        netmask: summary.netmask()?,
        total_hosts: summary.size(),
    })
}
