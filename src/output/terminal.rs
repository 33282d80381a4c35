//! Human readable terminal output.
//!
//! Labels are padded before colouring so alignment survives the escape codes.

use crate::error::CalcError;
use crate::models::{CidrBlock, CidrDetails, RangeCidr, RouteSummary, SubnetDescriptor};
use crate::processing::NO_OVERLAPS;
use colored::Colorize;

const LABEL_WIDTH: usize = 16;

/// One `label  value` line with the label in bold.
pub fn format_line<T: ToString>(label: &str, value: T) -> String {
    format!(
        "{}{}\n",
        format!("{label:<LABEL_WIDTH$}").bold(),
        value.to_string()
    )
}

pub fn cidr_details(details: &CidrDetails) -> String {
    let mut out = String::new();
    out.push_str(&format_line("CIDR range", details.cidr_range));
    out.push_str(&format_line("Netmask", details.netmask));
    out.push_str(&format_line("Wildcard bits", details.wildcard_bits));
    out.push_str(&format_line(
        "First IP",
        format!("{} ({})", details.first_ip, details.first_ip_decimal),
    ));
    out.push_str(&format_line(
        "Last IP",
        format!("{} ({})", details.last_ip, details.last_ip_decimal),
    ));
    out.push_str(&format_line("Total hosts", details.total_hosts));
    out
}

pub fn range_cidr(result: &RangeCidr) -> String {
    let mut out = String::new();
    out.push_str(&format_line("IP range", &result.ip_range));
    out.push_str(&format_line("CIDR notation", result.cidr_notation));
    out.push_str(&format_line("Netmask", result.netmask));
    out.push_str(&format_line("Total hosts", result.total_hosts));
    if result.cidr_notation.size() != result.total_hosts {
        out.push_str(&format!(
            "{}\n",
            format!(
                "note: /{} declares {} addresses, the range holds {}",
                result.cidr_notation.prefix_len,
                result.cidr_notation.size(),
                result.total_hosts
            )
            .yellow()
        ));
    }
    out
}

pub fn cidr_set(blocks: &[CidrBlock]) -> String {
    let mut out = String::new();
    for block in blocks {
        out.push_str(&format_line(&format!("/{}", block.prefix_len), block));
    }
    out
}

pub fn subnets(subnets: &[SubnetDescriptor]) -> String {
    let mut out = String::new();
    for (i, s) in subnets.iter().enumerate() {
        let title = s.name.clone().unwrap_or_else(|| format!("#{}", i + 1));
        out.push_str(&format!(
            "{} {:<18} {:>15} - {:<15} {}/{} usable (reserved {}) mask {} wildcard {}\n",
            format!("{title:<12}").cyan(),
            s.cidr_range.to_string(),
            s.first_ip,
            s.last_ip,
            s.usable_hosts,
            s.total_hosts,
            s.reserved_hosts,
            s.netmask,
            s.wildcard_bits,
        ));
    }
    out
}

pub fn overlaps(lines: &[String]) -> String {
    if lines.is_empty() {
        return format!("{}\n", NO_OVERLAPS.green());
    }
    lines
        .iter()
        .map(|line| format!("{}\n", line.red()))
        .collect()
}

pub fn summary(summary: &RouteSummary) -> String {
    let originals: Vec<String> = summary
        .original_cidrs
        .iter()
        .map(|c| c.to_string())
        .collect();
    let mut out = String::new();
    out.push_str(&format_line("Original CIDRs", originals.join(", ")));
    out.push_str(&format_line("Summarized CIDR", summary.summarized_cidr));
    out.push_str(&format_line("Netmask", summary.netmask));
    out.push_str(&format_line("Total hosts", summary.total_hosts));
    out
}

pub fn error(err: &CalcError) -> String {
    format!("{} {}\n", "error:".on_red(), err)
}
