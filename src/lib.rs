//! IPv4 address-range arithmetic.
//!
//! Converts between CIDR notation and address ranges, partitions blocks into
//! subnets, detects overlaps and summarizes contiguous ranges. Every operation
//! is a pure function of its arguments.
//!
//! ```
//! use cidr_calculator::{processing, CidrBlock};
//!
//! let block: CidrBlock = "192.168.1.0/24".parse().unwrap();
//! let range = processing::cidr_to_range(block).unwrap();
//! assert_eq!(range.end.to_string(), "192.168.1.255");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use config::{ReservationModel, Settings};
pub use error::CalcError;
pub use models::{AddressRange, CidrBlock, SubnetDescriptor};
