//! Calculator constants and environment driven settings.
//!
//! Values are read from the process environment after `dotenv` has loaded any
//! `.env` file:
//! - `CIDR_CALC_RESERVATION` - `cloud` (default) or `classic`
//! - `CIDR_CALC_MAX_FIELD_LEN` - maximum length of a single text field
//! - `CIDR_CALC_MAX_LIST_LEN` - maximum number of entries in a list field
//! - `CIDR_CALC_MAX_SUBNETS` - largest subnet count an equal split may ask for

use crate::error::CalcError;
use std::fmt;
use std::str::FromStr;

/// Addresses a cloud provider keeps per subnet (network, router, DNS, future use, broadcast).
pub const CLOUD_RESERVED_ADDRESSES: u32 = 5;

/// Addresses reserved by plain networking (network + broadcast).
pub const CLASSIC_RESERVED_ADDRESSES: u32 = 2;

/// Smallest subnet an equal split may produce (a /29).
pub const MIN_SUBNET_SIZE: u64 = 8;

pub const DEFAULT_MAX_FIELD_LEN: usize = 23;
pub const DEFAULT_MAX_LIST_LEN: usize = 256;
/// A /8 split down to /28 blocks.
pub const DEFAULT_MAX_SUBNETS: usize = 1 << 20;

const ENV_RESERVATION: &str = "CIDR_CALC_RESERVATION";
const ENV_MAX_FIELD_LEN: &str = "CIDR_CALC_MAX_FIELD_LEN";
const ENV_MAX_LIST_LEN: &str = "CIDR_CALC_MAX_LIST_LEN";
const ENV_MAX_SUBNETS: &str = "CIDR_CALC_MAX_SUBNETS";

/// How many addresses of every partitioned subnet are unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReservationModel {
    /// Cloud style: 5 addresses per subnet.
    #[default]
    Cloud,
    /// Network and broadcast only: 2 addresses per subnet.
    Classic,
}

impl ReservationModel {
    /// Number of reserved addresses in each subnet.
    pub fn reserved_addresses(self) -> u32 {
        match self {
            Self::Cloud => CLOUD_RESERVED_ADDRESSES,
            Self::Classic => CLASSIC_RESERVED_ADDRESSES,
        }
    }
}

impl FromStr for ReservationModel {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cloud" | "aws" => Ok(Self::Cloud),
            "classic" => Ok(Self::Classic),
            other => Err(CalcError::InvalidInput(format!(
                "Unknown reservation model: {other}"
            ))),
        }
    }
}

impl fmt::Display for ReservationModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cloud => write!(f, "cloud"),
            Self::Classic => write!(f, "classic"),
        }
    }
}

/// Runtime settings for the input pipeline and partitioner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub reservation: ReservationModel,
    pub max_field_len: usize,
    pub max_list_len: usize,
    pub max_subnets: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            reservation: ReservationModel::default(),
            max_field_len: DEFAULT_MAX_FIELD_LEN,
            max_list_len: DEFAULT_MAX_LIST_LEN,
            max_subnets: DEFAULT_MAX_SUBNETS,
        }
    }
}

impl Settings {
    /// Build settings from the process environment, falling back to defaults.
    pub fn from_env() -> Result<Settings, CalcError> {
        Settings::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Settings, CalcError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(value) = lookup(ENV_RESERVATION) {
            settings.reservation = value.parse()?;
        }
        if let Some(value) = lookup(ENV_MAX_FIELD_LEN) {
            settings.max_field_len = parse_limit(ENV_MAX_FIELD_LEN, &value)?;
        }
        if let Some(value) = lookup(ENV_MAX_LIST_LEN) {
            settings.max_list_len = parse_limit(ENV_MAX_LIST_LEN, &value)?;
        }
        if let Some(value) = lookup(ENV_MAX_SUBNETS) {
            settings.max_subnets = parse_limit(ENV_MAX_SUBNETS, &value)?;
        }

        log::debug!("Settings loaded: {settings:?}");
        Ok(settings)
    }
}

fn parse_limit(key: &str, value: &str) -> Result<usize, CalcError> {
    match value.trim().parse::<usize>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(CalcError::InvalidInput(format!(
            "{key} must be a positive integer, got '{value}'"
        ))),
    }
}
