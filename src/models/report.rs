//! Result records for conversion and summarization.

use super::CidrBlock;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Everything known about a single CIDR block.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CidrDetails {
    pub cidr_range: CidrBlock,
    pub netmask: Ipv4Addr,
    pub wildcard_bits: Ipv4Addr,
    pub first_ip: Ipv4Addr,
    pub first_ip_decimal: u32,
    pub last_ip: Ipv4Addr,
    pub last_ip_decimal: u32,
    pub total_hosts: u64,
}

/// Best-effort CIDR for an arbitrary address range.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RangeCidr {
    /// `"first - last"` as given.
    pub ip_range: String,
    pub cidr_notation: CidrBlock,
    pub netmask: Ipv4Addr,
    /// Addresses in the input range, not in the returned block.
    pub total_hosts: u64,
}

/// A set of contiguous blocks replaced by one covering block.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    pub original_cidrs: Vec<CidrBlock>,
    pub summarized_cidr: CidrBlock,
    pub netmask: Ipv4Addr,
    /// Size of the summarized block, 2^(32-prefix).
    pub total_hosts: u64,
}
