//! Error taxonomy for the calculator.
//!
//! Every variant except [`CalcError::Internal`] is an expected, caller-correctable
//! outcome. None of them are retried.

use std::net::Ipv4Addr;

/// Failure returned by every engine operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    /// Text that is not four dot-separated decimal octets.
    #[error("Invalid IP address format: {0}")]
    InvalidAddress(String),

    /// Text that is not `address/prefix` with a prefix in 0..=32.
    #[error("Invalid CIDR format: {0}")]
    InvalidCidr(String),

    /// Missing, oversized or otherwise unusable input field.
    #[error("{0}")]
    InvalidInput(String),

    /// First address is greater than the last one.
    #[error("First address {first} must not exceed last address {last}")]
    OutOfOrder { first: Ipv4Addr, last: Ipv4Addr },

    /// Equal split would produce subnets smaller than the minimum size.
    #[error("Too many subnets for the given CIDR range: {count} subnets in {cidr}")]
    TooManySubnets { cidr: String, count: u32 },

    /// Custom demand ran out of address space at subnet `index` (1-based).
    #[error("Subnet {index} (requesting {hosts} hosts) exceeds available address space")]
    Exceeded { index: usize, hosts: u32 },

    /// Ranges have a gap, overlap, or do not start on the summary boundary.
    #[error("CIDRs cannot be summarized into a single range ({0})")]
    NotContiguous(String),

    /// A computed address would pass 255.255.255.255.
    #[error("Address range extends past 255.255.255.255: {0}")]
    AddressOverflow(String),

    /// Arithmetic inconsistency inside the engine.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CalcError {
    /// Stable machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidAddress(_) => "invalid_address",
            Self::InvalidCidr(_) => "invalid_cidr",
            Self::InvalidInput(_) => "invalid_input",
            Self::OutOfOrder { .. } => "out_of_order",
            Self::TooManySubnets { .. } => "too_many_subnets",
            Self::Exceeded { .. } => "exceeded",
            Self::NotContiguous(_) => "not_contiguous",
            Self::AddressOverflow(_) => "address_overflow",
            Self::Internal(_) => "internal",
        }
    }

    /// True only for engine faults; everything else is the caller's to fix.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Internal(_))
    }
}
