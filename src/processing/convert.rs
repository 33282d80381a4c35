//! Conversion between CIDR blocks and address ranges.

use crate::error::CalcError;
use crate::models::{
    address_from_decimal, ceil_log2, wildcard_for, AddressRange, CidrBlock, CidrDetails,
    RangeCidr, MAX_LENGTH,
};
use std::net::Ipv4Addr;

/// Inclusive range covered by a block, counted forward from its base.
///
/// # Returns
/// * `Err(AddressOverflow)` - when an unaligned base pushes the end past 255.255.255.255
pub fn cidr_to_range(block: CidrBlock) -> Result<AddressRange, CalcError> {
    AddressRange::try_from(block)
}

/// Block of the smallest power-of-two size that covers `start..=end`.
///
/// The block keeps `start` as its base and is not realigned, so for ranges
/// whose size is not a power of two it declares more addresses than the range
/// holds. Use [`range_to_cidr_set`] for an exact cover.
pub fn range_to_cidr(start: Ipv4Addr, end: Ipv4Addr) -> Result<CidrBlock, CalcError> {
    let range = AddressRange::new(start, end)?;
    let exponent = ceil_log2(range.size());
    let prefix_len = MAX_LENGTH - exponent as u8;
    log::trace!("range_to_cidr({range}) size={} -> /{prefix_len}", range.size());
    CidrBlock::from_parts(start, prefix_len)
}

/// Minimal list of aligned blocks that exactly cover `start..=end`.
pub fn range_to_cidr_set(start: Ipv4Addr, end: Ipv4Addr) -> Result<Vec<CidrBlock>, CalcError> {
    let range = AddressRange::new(start, end)?;
    let mut blocks = Vec::new();
    let mut next = range.start_decimal();
    let last = range.end_decimal();

    while next <= last {
        // Largest block aligned on `next` that does not run past `last`.
        let align_bits = if next == 0 {
            u32::from(MAX_LENGTH)
        } else {
            next.trailing_zeros().min(u32::from(MAX_LENGTH))
        };
        let fit_bits = u64::BITS - 1 - (last - next + 1).leading_zeros();
        let bits = align_bits.min(fit_bits);

        let block = CidrBlock::from_parts(address_from_decimal(next)?, MAX_LENGTH - bits as u8)?;
        blocks.push(block);
        next += 1u64 << bits;
    }

    log::trace!("range_to_cidr_set({range}) -> {} blocks", blocks.len());
    Ok(blocks)
}

/// Full description of a block: masks, bounds and size.
pub fn describe_cidr(block: CidrBlock) -> Result<CidrDetails, CalcError> {
    let range = cidr_to_range(block)?;
    let netmask = block.netmask()?;
    Ok(CidrDetails {
        cidr_range: block,
        netmask,
        wildcard_bits: wildcard_for(netmask),
        first_ip: range.start,
        first_ip_decimal: u32::from(range.start),
        last_ip: range.end,
        last_ip_decimal: u32::from(range.end),
        total_hosts: block.size(),
    })
}

/// [`range_to_cidr`] plus the netmask and the exact number of addresses in the range.
pub fn describe_range(start: Ipv4Addr, end: Ipv4Addr) -> Result<RangeCidr, CalcError> {
    let cidr = range_to_cidr(start, end)?;
    let range = AddressRange::new(start, end)?;
    Ok(RangeCidr {
        ip_range: range.to_string(),
        cidr_notation: cidr,
        netmask: cidr.netmask()?,
        total_hosts: range.size(),
    })
}
