//! IPv4 address codec and CIDR notation.
//!
//! Provides the [`CidrBlock`] struct plus free functions for converting
//! addresses between text, integers and octets, and for building netmasks.

use crate::error::CalcError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Parse dotted-quad text into an address.
///
/// # Examples
/// ```
/// use cidr_calculator::models::parse_address;
/// assert_eq!(u32::from(parse_address("10.0.0.1").unwrap()), 0x0A000001);
/// assert!(parse_address("10.0.0").is_err());
/// ```
pub fn parse_address(text: &str) -> Result<Ipv4Addr, CalcError> {
    Ipv4Addr::from_str(text).map_err(|_| CalcError::InvalidAddress(text.to_string()))
}

/// Format an address as four octets without leading zeros.
pub fn format_address(addr: Ipv4Addr) -> String {
    addr.to_string()
}

pub fn address_to_octets(addr: Ipv4Addr) -> [u8; 4] {
    addr.octets()
}

pub fn address_from_octets(octets: [u8; 4]) -> Ipv4Addr {
    Ipv4Addr::from(octets)
}

/// Convert a wide integer back into an address, failing past 255.255.255.255.
pub fn address_from_decimal(value: u64) -> Result<Ipv4Addr, CalcError> {
    u32::try_from(value)
        .map(Ipv4Addr::from)
        .map_err(|_| CalcError::AddressOverflow(format!("{value} is not an IPv4 address")))
}

/// Smallest `e` with `2^e >= n`. `n` must be at least 1.
pub fn ceil_log2(n: u64) -> u32 {
    if n <= 1 {
        0
    } else {
        u64::BITS - (n - 1).leading_zeros()
    }
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use cidr_calculator::models::cidr_mask;
/// assert_eq!(cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn cidr_mask(len: u8) -> Result<u32, CalcError> {
    if len > MAX_LENGTH {
        Err(CalcError::InvalidCidr(format!("prefix /{len} is longer than 32")))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Build the dotted netmask for a prefix length, one octet at a time.
///
/// Each octet consumes up to 8 of the remaining prefix bits.
pub fn netmask_for(prefix_len: u8) -> Result<Ipv4Addr, CalcError> {
    if prefix_len > MAX_LENGTH {
        return Err(CalcError::InvalidCidr(format!(
            "prefix /{prefix_len} is longer than 32"
        )));
    }
    let mut remaining = u32::from(prefix_len);
    let mut octets = [0u8; 4];
    for octet in octets.iter_mut() {
        let taken = remaining.min(8);
        *octet = (256 - (1u32 << (8 - taken))) as u8;
        remaining -= taken;
    }
    Ok(address_from_octets(octets))
}

/// Inverted netmask as used by router ACL syntax.
pub fn wildcard_for(netmask: Ipv4Addr) -> Ipv4Addr {
    let octets = address_to_octets(netmask).map(|octet| 255 - octet);
    address_from_octets(octets)
}

/// An address with a prefix length. The base is not forced onto the prefix boundary.
#[derive(Eq, Ord, Debug, Copy, Clone, Hash)]
pub struct CidrBlock {
    /// First address of the block as given by the caller.
    pub base: Ipv4Addr,
    /// Prefix length (0-32).
    pub prefix_len: u8,
}

impl Serialize for CidrBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CidrBlock {
    fn deserialize<D>(deserializer: D) -> Result<CidrBlock, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CidrBlock::new(&s).map_err(de::Error::custom)
    }
}

impl CidrBlock {
    /// Create a new [`CidrBlock`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<CidrBlock, CalcError> {
        let invalid = || CalcError::InvalidCidr(addr_cidr.to_string());
        let (addr, mask) = addr_cidr.trim().split_once('/').ok_or_else(invalid)?;
        if mask.is_empty() || !mask.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let base = Ipv4Addr::from_str(addr).map_err(|_| invalid())?;
        let prefix_len: u8 = mask.parse().map_err(|_| invalid())?;
        CidrBlock::from_parts(base, prefix_len).map_err(|_| invalid())
    }

    pub fn from_parts(base: Ipv4Addr, prefix_len: u8) -> Result<CidrBlock, CalcError> {
        if prefix_len > MAX_LENGTH {
            return Err(CalcError::InvalidCidr(format!("{base}/{prefix_len}")));
        }
        Ok(CidrBlock { base, prefix_len })
    }

    /// Number of addresses the prefix declares, 2^(32-prefix).
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.prefix_len)
    }

    pub fn first(&self) -> Ipv4Addr {
        self.base
    }

    /// Last address counted forward from the base.
    pub fn last(&self) -> Result<Ipv4Addr, CalcError> {
        let last = u64::from(u32::from(self.base)) + self.size() - 1;
        address_from_decimal(last)
            .map_err(|_| CalcError::AddressOverflow(format!("{self} ends past the address space")))
    }

    pub fn netmask(&self) -> Result<Ipv4Addr, CalcError> {
        netmask_for(self.prefix_len)
    }

    /// True when the base has no bits set below the prefix.
    pub fn is_aligned(&self) -> bool {
        match cidr_mask(self.prefix_len) {
            Ok(mask) => u32::from(self.base) & !mask == 0,
            Err(_) => false,
        }
    }
}

impl FromStr for CidrBlock {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CidrBlock::new(s)
    }
}

impl std::fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.base, self.prefix_len)
    }
}

impl PartialEq for CidrBlock {
    fn eq(&self, other: &CidrBlock) -> bool {
        self.base == other.base && self.prefix_len == other.prefix_len
    }
}

impl PartialOrd for CidrBlock {
    fn partial_cmp(&self, other: &CidrBlock) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
