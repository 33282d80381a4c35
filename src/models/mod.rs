//! Domain models for the CIDR calculator.
//!
//! This module contains the value types used throughout the engine:
//! - [`CidrBlock`] - address with prefix length, plus the address codec functions
//! - [`AddressRange`] - inclusive range of addresses
//! - [`SubnetDescriptor`] - one subnet of a partitioned block
//! - [`CidrDetails`], [`RangeCidr`] and [`RouteSummary`] - conversion results

mod ipv4;
mod range;
mod report;
mod subnet;

// Re-export public types
pub use ipv4::{
    address_from_decimal, address_from_octets, address_to_octets, ceil_log2, cidr_mask,
    format_address, netmask_for, parse_address, wildcard_for, CidrBlock, MAX_LENGTH,
};
pub use range::AddressRange;
pub use report::{CidrDetails, RangeCidr, RouteSummary};
pub use subnet::SubnetDescriptor;
