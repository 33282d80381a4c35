//! Integration tests for cidr-calculator
//!
//! These tests drive the public API from raw text through the engine to rendered output.

use cidr_calculator::{
    input,
    models::{netmask_for, wildcard_for},
    output::{self, OutputFormat},
    processing::{
        cidr_to_range, describe_cidr, detect_cidr_overlaps, partition_custom, partition_equal,
        range_to_cidr, summarize, summarize_cidrs,
    },
    AddressRange, CalcError, CidrBlock, ReservationModel, Settings,
};
use std::net::Ipv4Addr;

fn cidr(s: &str) -> CidrBlock {
    CidrBlock::new(s).expect("valid CIDR in test")
}

fn ip(s: &str) -> Ipv4Addr {
    s.parse().expect("valid address in test")
}

#[test]
fn test_cidr_to_range_scenario() {
    let block = input::parse_cidr_field("192.168.1.0/24", "CIDR", &Settings::default()).unwrap();
    let details = describe_cidr(block).unwrap();
    assert_eq!(details.first_ip, ip("192.168.1.0"));
    assert_eq!(details.last_ip, ip("192.168.1.255"));
    assert_eq!(details.total_hosts, 256);
    assert_eq!(details.netmask, ip("255.255.255.0"));
    assert_eq!(details.wildcard_bits, ip("0.0.0.255"));
}

#[test]
fn test_range_to_cidr_scenario() {
    assert_eq!(
        range_to_cidr(ip("192.168.1.0"), ip("192.168.1.255")).unwrap(),
        cidr("192.168.1.0/24")
    );
}

#[test]
fn test_netmask_wildcard_complement_for_every_prefix() {
    for len in 0..=32u8 {
        let netmask = netmask_for(len).unwrap();
        let wildcard = wildcard_for(netmask);
        assert_eq!(u32::from(wildcard), !u32::from(netmask), "prefix /{len}");
    }
}

#[test]
fn test_range_round_trip_and_cover() {
    for len in 8..=32u8 {
        let block = CidrBlock::from_parts(ip("10.0.0.0"), len).unwrap();
        let range = cidr_to_range(block).unwrap();
        assert_eq!(range_to_cidr(range.start, range.end).unwrap(), block);
    }
    for size in [3u32, 5, 100, 1000, 65_537] {
        let start = ip("10.0.0.0");
        let end = Ipv4Addr::from(u32::from(start) + size - 1);
        let block = range_to_cidr(start, end).unwrap();
        assert!(block.size() >= u64::from(size));
        assert!(block.size() < 2 * u64::from(size));
    }
}

#[test]
fn test_partition_equal_scenario() {
    let subnets = partition_equal(cidr("10.0.0.0/16"), 4, ReservationModel::Cloud).unwrap();
    let names: Vec<String> = subnets.iter().map(|s| s.cidr_range.to_string()).collect();
    assert_eq!(
        names,
        vec!["10.0.0.0/18", "10.0.64.0/18", "10.0.128.0/18", "10.0.192.0/18"]
    );
    assert!(subnets.iter().all(|s| s.usable_hosts == 16379));
}

#[test]
fn test_partition_equal_tiles_from_base() {
    for count in 1..=20u32 {
        let base = cidr("172.20.0.0/22");
        let subnets = partition_equal(base, count, ReservationModel::Cloud).unwrap();
        assert_eq!(subnets.len(), count as usize);
        assert_eq!(subnets[0].first_ip, base.base);
        let size = subnets[0].total_hosts;
        for pair in subnets.windows(2) {
            assert_eq!(u64::from(pair[1].first_ip_decimal), u64::from(pair[0].last_ip_decimal) + 1);
            assert_eq!(pair[1].total_hosts, size);
        }
        let span = u64::from(subnets[subnets.len() - 1].last_ip_decimal)
            - u64::from(subnets[0].first_ip_decimal)
            + 1;
        assert_eq!(span, u64::from(count) * size);
    }
}

#[test]
fn test_partition_custom_meets_every_demand() {
    let demands = [500, 200, 100, 60, 30, 12, 3, 1];
    for model in [ReservationModel::Cloud, ReservationModel::Classic] {
        let subnets = partition_custom(cidr("10.10.0.0/20"), &demands, &[], model).unwrap();
        for (s, demand) in subnets.iter().zip(demands) {
            assert!(s.usable_hosts >= u64::from(demand));
            assert_eq!(s.reserved_hosts, model.reserved_addresses());
        }
    }
}

#[test]
fn test_partition_custom_exceeded() {
    let err = partition_custom(cidr("10.0.0.0/26"), &[30, 30], &[], ReservationModel::Cloud)
        .unwrap_err();
    assert_eq!(err, CalcError::Exceeded { index: 2, hosts: 30 });
    assert!(!err.is_internal());
}

#[test]
fn test_overlap_scenario() {
    let lines = detect_cidr_overlaps(&[cidr("192.168.1.0/24"), cidr("192.168.1.128/25")]).unwrap();
    assert_eq!(lines, vec!["192.168.1.0/24 overlaps with 192.168.1.128/25"]);
}

#[test]
fn test_identical_ranges_overlap() {
    let lines = detect_cidr_overlaps(&[cidr("10.0.0.0/24"), cidr("10.0.0.0/24")]).unwrap();
    assert_eq!(lines.len(), 1);
}

#[test]
fn test_summarize_scenarios() {
    let ok = summarize_cidrs(&[cidr("10.0.0.0/25"), cidr("10.0.0.128/25")]).unwrap();
    assert_eq!(ok.summarized_cidr, cidr("10.0.0.0/24"));

    let misaligned = summarize_cidrs(&[cidr("10.0.1.0/25"), cidr("10.0.0.128/25")]).unwrap_err();
    assert!(matches!(misaligned, CalcError::NotContiguous(_)));
}

#[test]
fn test_summarize_plain_ranges() {
    let ranges = [
        AddressRange::new(ip("10.0.0.64"), ip("10.0.0.127")).unwrap(),
        AddressRange::new(ip("10.0.0.0"), ip("10.0.0.63")).unwrap(),
    ];
    assert_eq!(summarize(&ranges).unwrap(), cidr("10.0.0.0/25"));
}

#[test]
fn test_rendered_outputs() {
    let subnets = partition_equal(cidr("10.0.0.0/24"), 2, ReservationModel::Cloud).unwrap();
    let json = output::render_subnets(&subnets, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["subnets"][1]["cidrRange"], "10.0.0.128/25");
    assert_eq!(value["subnets"][1]["usableHosts"], 123);

    let csv = output::render_overlaps(&[], OutputFormat::Csv).unwrap();
    assert!(csv.contains("No overlaps detected"));

    let err = output::render_error(
        &CalcError::NotContiguous("not contiguous".to_string()),
        OutputFormat::Json,
    );
    let value: serde_json::Value = serde_json::from_str(&err).unwrap();
    assert_eq!(value["kind"], "not_contiguous");
}
