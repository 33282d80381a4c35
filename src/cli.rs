//! Command line front end.
//!
//! Parses arguments with `clap`, runs the raw text through the input pipeline,
//! calls the engine and renders the result.

use crate::config::{ReservationModel, Settings};
use crate::error::CalcError;
use crate::input;
use crate::output::{self, OutputFormat};
use crate::processing;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// IPv4 CIDR calculator.
#[derive(Parser, Debug)]
#[command(name = "cidr-calculator", version)]
pub struct Cli {
    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
    /// Reserved-address model for subnet splits (overrides CIDR_CALC_RESERVATION).
    #[arg(short, long, value_enum, global = true)]
    pub reservation: Option<ReservationModel>,
    /// log4rs configuration file.
    #[arg(long, default_value = "log4rs.yml", global = true)]
    pub log_config: PathBuf,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Show the address range of a CIDR block.
    CidrToIp { cidr: String },
    /// Find the CIDR block covering an address range.
    IpToCidr {
        first: String,
        last: String,
        /// List the exact set of aligned blocks instead of one rounded block.
        #[arg(long)]
        strict: bool,
    },
    /// Split a block into COUNT equal subnets.
    Subnets { cidr: String, count: String },
    /// Split a block by per-subnet usable host demand.
    SubnetsCustom {
        cidr: String,
        /// Usable hosts per subnet, comma separated.
        #[arg(long, value_delimiter = ',', required = true)]
        hosts: Vec<String>,
        /// Subnet names, comma separated.
        #[arg(long, value_delimiter = ',')]
        names: Vec<String>,
    },
    /// Report every pair of overlapping CIDRs.
    Overlap {
        #[arg(required = true)]
        cidrs: Vec<String>,
    },
    /// Summarize contiguous CIDRs into one block.
    Summarize {
        #[arg(required = true)]
        cidrs: Vec<String>,
    },
}

/// Run one command and return its rendered output.
pub fn run(cli: &Cli, settings: &Settings) -> Result<String, CalcError> {
    let reservation = cli.reservation.unwrap_or(settings.reservation);
    let format = cli.format;
    log::info!("run {:?} format={format:?} reservation={reservation}", cli.command);

    match &cli.command {
        Command::CidrToIp { cidr } => {
            let block = input::parse_cidr_field(cidr, "CIDR", settings)?;
            let details = processing::describe_cidr(block)?;
            output::render_cidr_details(&details, format)
        }
        Command::IpToCidr {
            first,
            last,
            strict,
        } => {
            let first = input::parse_address_field(first, "First IP", settings)?;
            let last = input::parse_address_field(last, "Last IP", settings)?;
            if *strict {
                let blocks = processing::range_to_cidr_set(first, last)?;
                output::render_cidr_set(&blocks, format)
            } else {
                let result = processing::describe_range(first, last)?;
                output::render_range_cidr(&result, format)
            }
        }
        Command::Subnets { cidr, count } => {
            let block = input::parse_cidr_field(cidr, "CIDR", settings)?;
            let count = input::parse_subnet_count(count, settings)?;
            let subnets = processing::partition_equal(block, count, reservation)?;
            output::render_subnets(&subnets, format)
        }
        Command::SubnetsCustom { cidr, hosts, names } => {
            let block = input::parse_cidr_field(cidr, "CIDR", settings)?;
            let hosts = input::parse_host_counts(hosts, settings)?;
            let names = input::sanitize_names(names, settings)?;
            let subnets = processing::partition_custom(block, &hosts, &names, reservation)?;
            output::render_subnets(&subnets, format)
        }
        Command::Overlap { cidrs } => {
            let blocks = input::parse_cidr_list(cidrs, settings)?;
            let lines = processing::detect_cidr_overlaps(&blocks)?;
            output::render_overlaps(&lines, format)
        }
        Command::Summarize { cidrs } => {
            let blocks = input::parse_cidr_list(cidrs, settings)?;
            let summary = processing::summarize_cidrs(&blocks)?;
            output::render_summary(&summary, format)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> Result<String, CalcError> {
        let cli = Cli::try_parse_from(args).expect("arguments should parse");
        run(&cli, &Settings::default())
    }

    #[test]
    fn test_parse_custom_lists() {
        let cli = Cli::try_parse_from([
            "cidr-calculator",
            "subnets-custom",
            "10.0.0.0/16",
            "--hosts",
            "100,50",
            "--names",
            "web,db",
            "-f",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(
            cli.command,
            Command::SubnetsCustom {
                cidr: "10.0.0.0/16".to_string(),
                hosts: vec!["100".to_string(), "50".to_string()],
                names: vec!["web".to_string(), "db".to_string()],
            }
        );
    }

    #[test]
    fn test_overlap_needs_arguments() {
        assert!(Cli::try_parse_from(["cidr-calculator", "overlap"]).is_err());
    }

    #[test]
    fn test_run_csv_subnets_classic() {
        let out = run_args(&[
            "cidr-calculator",
            "--format",
            "csv",
            "--reservation",
            "classic",
            "subnets",
            "10.0.0.0/24",
            "2",
        ])
        .unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].ends_with(",128,126,2"));
    }

    #[test]
    fn test_run_equal_split_beyond_list_limit() {
        let out = run_args(&[
            "cidr-calculator",
            "-f",
            "csv",
            "subnets",
            "10.0.0.0/8",
            "1024",
        ])
        .unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 1025);
        assert!(lines[1].starts_with(",10.0.0.0/18,"));
        assert!(lines[1024].starts_with(",10.255.192.0/18,"));
    }

    #[test]
    fn test_run_strict_range() {
        let out = run_args(&[
            "cidr-calculator",
            "-f",
            "csv",
            "ip-to-cidr",
            "10.0.0.0",
            "10.0.0.2",
            "--strict",
        ])
        .unwrap();
        assert_eq!(out, "cidr,total_hosts\n10.0.0.0/31,2\n10.0.0.2/32,1\n");
    }

    #[test]
    fn test_run_reports_typed_errors() {
        let err = run_args(&["cidr-calculator", "cidr-to-ip", "10.0.0.0"]).unwrap_err();
        assert!(matches!(err, CalcError::InvalidCidr(_)));

        let err = run_args(&["cidr-calculator", "ip-to-cidr", "10.0.0.9", "10.0.0.1"]).unwrap_err();
        assert!(matches!(err, CalcError::OutOfOrder { .. }));

        let err = run_args(&["cidr-calculator", "summarize", "10.0.0.0/24"]).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput(_)));
    }
}
