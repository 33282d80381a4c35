//! Splitting a block into subnets.
//!
//! Two modes share one sizing rule: a subnet that must offer `n` usable
//! addresses is the smallest power of two holding `n` plus the reserved
//! addresses of the [`ReservationModel`].

use crate::config::{ReservationModel, MIN_SUBNET_SIZE};
use crate::error::CalcError;
use crate::models::{ceil_log2, CidrBlock, SubnetDescriptor, MAX_LENGTH};

/// Split `base` into `count` equally sized subnets laid out back to back.
///
/// The subnet size is the smallest power of two not below `size / count`, so
/// when `count` is not a power of two the subnets extend past the end of
/// `base`; they are never packed or trimmed.
///
/// # Returns
/// * `Err(TooManySubnets)` - when each subnet would hold fewer than [`MIN_SUBNET_SIZE`] addresses
pub fn partition_equal(
    base: CidrBlock,
    count: u32,
    reservation: ReservationModel,
) -> Result<Vec<SubnetDescriptor>, CalcError> {
    if count == 0 {
        return Err(CalcError::InvalidInput(
            "Invalid number of subnets".to_string(),
        ));
    }
    let total_hosts = base.size();
    let count_wide = u64::from(count);
    if total_hosts < MIN_SUBNET_SIZE * count_wide {
        log::debug!("partition_equal({base}, {count}) rejected: subnets below /29");
        return Err(CalcError::TooManySubnets {
            cidr: base.to_string(),
            count,
        });
    }

    let exponent = ceil_log2(total_hosts.div_ceil(count_wide));
    let subnet_prefix = MAX_LENGTH - exponent as u8;
    let subnet_size = 1u64 << exponent;
    let reserved = reservation.reserved_addresses();
    log::debug!(
        "partition_equal({base}, {count}) -> /{subnet_prefix} x {count}, reserved={reserved}"
    );

    let start = u64::from(u32::from(base.base));
    (0..count_wide)
        .map(|i| SubnetDescriptor::new(start + i * subnet_size, subnet_prefix, reserved, None))
        .collect()
}

/// Place one subnet per host demand, in input order, right after the previous one.
///
/// Names default to `"Subnet {n}"` (1-based) when missing or blank.
///
/// # Returns
/// * `Err(Exceeded)` - naming the first subnet that no longer fits inside `base`
pub fn partition_custom(
    base: CidrBlock,
    demands: &[u32],
    names: &[String],
    reservation: ReservationModel,
) -> Result<Vec<SubnetDescriptor>, CalcError> {
    if demands.is_empty() {
        return Err(CalcError::InvalidInput(
            "At least one host count must be provided".to_string(),
        ));
    }
    if demands.iter().any(|&hosts| hosts == 0) {
        return Err(CalcError::InvalidInput(
            "All host counts must be positive integers".to_string(),
        ));
    }

    let total_available = base.size();
    let reserved = reservation.reserved_addresses();
    let mut current = u64::from(u32::from(base.base));
    let mut used = 0u64;
    let mut subnets = Vec::with_capacity(demands.len());

    for (i, &hosts) in demands.iter().enumerate() {
        let exponent = ceil_log2(u64::from(hosts) + u64::from(reserved));
        let subnet_size = 1u64 << exponent;

        if used + subnet_size > total_available {
            log::debug!(
                "partition_custom({base}) subnet {} needs {subnet_size}, only {} left",
                i + 1,
                total_available - used
            );
            return Err(CalcError::Exceeded {
                index: i + 1,
                hosts,
            });
        }

        let name = names
            .get(i)
            .filter(|name| !name.is_empty())
            .cloned()
            .unwrap_or_else(|| format!("Subnet {}", i + 1));
        let subnet_prefix = MAX_LENGTH - exponent as u8;
        subnets.push(SubnetDescriptor::new(
            current,
            subnet_prefix,
            reserved,
            Some(name),
        )?);

        current += subnet_size;
        used += subnet_size;
    }

    log::debug!(
        "partition_custom({base}) placed {} subnets using {used}/{total_available}",
        subnets.len()
    );
    Ok(subnets)
}
