//! CSV output formatting.

use crate::models::{CidrBlock, CidrDetails, RangeCidr, RouteSummary, SubnetDescriptor};
use crate::processing::NO_OVERLAPS;

const SUBNET_HEADER: &str = "name,cidr_range,netmask,wildcard_bits,first_ip,first_ip_decimal,last_ip,last_ip_decimal,total_hosts,usable_hosts,reserved_hosts";

/// Quote a field only when it contains a comma, quote or line break.
pub fn escape_field(input: &str) -> String {
    if input.contains(&[',', '"', '\n', '\r'][..]) {
        // Double any embedded quotes and wrap the whole field.
        let escaped = input.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        input.to_string()
    }
}

fn row(fields: &[String]) -> String {
    let escaped: Vec<String> = fields.iter().map(|f| escape_field(f)).collect();
    format!("{}\n", escaped.join(","))
}

fn key_value_rows(pairs: &[(&str, String)]) -> String {
    let mut out = row(&["field".to_string(), "value".to_string()]);
    for (key, value) in pairs {
        out.push_str(&row(&[key.to_string(), value.clone()]));
    }
    out
}

pub fn cidr_details(details: &CidrDetails) -> String {
    key_value_rows(&[
        ("cidr_range", details.cidr_range.to_string()),
        ("netmask", details.netmask.to_string()),
        ("wildcard_bits", details.wildcard_bits.to_string()),
        ("first_ip", details.first_ip.to_string()),
        ("first_ip_decimal", details.first_ip_decimal.to_string()),
        ("last_ip", details.last_ip.to_string()),
        ("last_ip_decimal", details.last_ip_decimal.to_string()),
        ("total_hosts", details.total_hosts.to_string()),
    ])
}

pub fn range_cidr(result: &RangeCidr) -> String {
    key_value_rows(&[
        ("ip_range", result.ip_range.clone()),
        ("cidr_notation", result.cidr_notation.to_string()),
        ("netmask", result.netmask.to_string()),
        ("total_hosts", result.total_hosts.to_string()),
    ])
}

pub fn cidr_set(blocks: &[CidrBlock]) -> String {
    let mut out = row(&["cidr".to_string(), "total_hosts".to_string()]);
    for block in blocks {
        out.push_str(&row(&[block.to_string(), block.size().to_string()]));
    }
    out
}

pub fn subnets(subnets: &[SubnetDescriptor]) -> String {
    let mut out = format!("{SUBNET_HEADER}\n");
    for s in subnets {
        out.push_str(&row(&[
            s.name.clone().unwrap_or_default(),
            s.cidr_range.to_string(),
            s.netmask.to_string(),
            s.wildcard_bits.to_string(),
            s.first_ip.to_string(),
            s.first_ip_decimal.to_string(),
            s.last_ip.to_string(),
            s.last_ip_decimal.to_string(),
            s.total_hosts.to_string(),
            s.usable_hosts.to_string(),
            s.reserved_hosts.to_string(),
        ]));
    }
    out
}

pub fn overlaps(lines: &[String]) -> String {
    let mut out = row(&["overlap".to_string()]);
    if lines.is_empty() {
        out.push_str(&row(&[NO_OVERLAPS.to_string()]));
    }
    for line in lines {
        out.push_str(&row(&[line.clone()]));
    }
    out
}

pub fn summary(summary: &RouteSummary) -> String {
    let originals: Vec<String> = summary
        .original_cidrs
        .iter()
        .map(|c| c.to_string())
        .collect();
    key_value_rows(&[
        ("original_cidrs", originals.join(" ")),
        ("summarized_cidr", summary.summarized_cidr.to_string()),
        ("netmask", summary.netmask.to_string()),
        ("total_hosts", summary.total_hosts.to_string()),
    ])
}
