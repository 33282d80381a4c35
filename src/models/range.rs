//! Inclusive range of IPv4 addresses.

use super::CidrBlock;
use crate::error::CalcError;
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

/// Closed interval `[start, end]` of addresses, `start <= end`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddressRange {
    pub start: Ipv4Addr,
    pub end: Ipv4Addr,
}

impl AddressRange {
    pub fn new(start: Ipv4Addr, end: Ipv4Addr) -> Result<AddressRange, CalcError> {
        if start > end {
            return Err(CalcError::OutOfOrder {
                first: start,
                last: end,
            });
        }
        Ok(AddressRange { start, end })
    }

    /// Number of addresses, `end - start + 1`.
    pub fn size(&self) -> u64 {
        self.end_decimal() - self.start_decimal() + 1
    }

    pub fn start_decimal(&self) -> u64 {
        u64::from(u32::from(self.start))
    }

    pub fn end_decimal(&self) -> u64 {
        u64::from(u32::from(self.end))
    }

    /// Closed-interval intersection test.
    pub fn overlaps(&self, other: &AddressRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        self.start <= addr && addr <= self.end
    }
}

impl TryFrom<CidrBlock> for AddressRange {
    type Error = CalcError;

    fn try_from(block: CidrBlock) -> Result<Self, Self::Error> {
        Ok(AddressRange {
            start: block.first(),
            end: block.last()?,
        })
    }
}

impl fmt::Display for AddressRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}
