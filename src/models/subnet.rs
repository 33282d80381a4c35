//! Subnet descriptor produced by the partitioner.

use super::{address_from_decimal, wildcard_for, CidrBlock};
use crate::error::CalcError;
use serde::Serialize;
use std::net::Ipv4Addr;

/// One subnet of a partitioned block.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubnetDescriptor {
    /// Display name, only set in custom-demand mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// First address and subnet prefix.
    pub cidr_range: CidrBlock,
    pub netmask: Ipv4Addr,
    /// Inverted netmask.
    pub wildcard_bits: Ipv4Addr,
    pub first_ip: Ipv4Addr,
    pub first_ip_decimal: u32,
    pub last_ip: Ipv4Addr,
    pub last_ip_decimal: u32,
    /// Addresses in the subnet, 2^(32-prefix).
    pub total_hosts: u64,
    /// `total_hosts` minus the reserved addresses.
    pub usable_hosts: u64,
    pub reserved_hosts: u32,
}

impl SubnetDescriptor {
    /// Describe the subnet of `prefix_len` starting at the integer address `first`.
    pub fn new(
        first: u64,
        prefix_len: u8,
        reserved: u32,
        name: Option<String>,
    ) -> Result<SubnetDescriptor, CalcError> {
        let first_ip = address_from_decimal(first)?;
        let cidr_range = CidrBlock::from_parts(first_ip, prefix_len)?;
        let total_hosts = cidr_range.size();
        let last_ip = address_from_decimal(first + total_hosts - 1).map_err(|_| {
            CalcError::AddressOverflow(format!("subnet {cidr_range} ends past the address space"))
        })?;
        let netmask = cidr_range.netmask()?;

        Ok(SubnetDescriptor {
            name,
            cidr_range,
            netmask,
            wildcard_bits: wildcard_for(netmask),
            first_ip,
            first_ip_decimal: u32::from(first_ip),
            last_ip,
            last_ip_decimal: u32::from(last_ip),
            total_hosts,
            usable_hosts: total_hosts.saturating_sub(u64::from(reserved)),
            reserved_hosts: reserved,
        })
    }
}
