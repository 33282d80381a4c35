//! Output formatting for calculator results.
//!
//! This module turns engine results into text:
//! - [`terminal`] - coloured human readable output
//! - [`csv`] - CSV rows
//! - [`json`] - JSON envelopes

pub mod csv;
pub mod json;
pub mod terminal;

use crate::error::CalcError;
use crate::models::{CidrBlock, CidrDetails, RangeCidr, RouteSummary, SubnetDescriptor};

/// Selected rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

pub fn render_cidr_details(details: &CidrDetails, format: OutputFormat) -> Result<String, CalcError> {
    match format {
        OutputFormat::Text => Ok(terminal::cidr_details(details)),
        OutputFormat::Json => json::result(details),
        OutputFormat::Csv => Ok(csv::cidr_details(details)),
    }
}

pub fn render_range_cidr(result: &RangeCidr, format: OutputFormat) -> Result<String, CalcError> {
    match format {
        OutputFormat::Text => Ok(terminal::range_cidr(result)),
        OutputFormat::Json => json::result(result),
        OutputFormat::Csv => Ok(csv::range_cidr(result)),
    }
}

pub fn render_cidr_set(blocks: &[CidrBlock], format: OutputFormat) -> Result<String, CalcError> {
    match format {
        OutputFormat::Text => Ok(terminal::cidr_set(blocks)),
        OutputFormat::Json => json::result(&blocks),
        OutputFormat::Csv => Ok(csv::cidr_set(blocks)),
    }
}

pub fn render_subnets(
    subnets: &[SubnetDescriptor],
    format: OutputFormat,
) -> Result<String, CalcError> {
    match format {
        OutputFormat::Text => Ok(terminal::subnets(subnets)),
        OutputFormat::Json => json::subnets(subnets),
        OutputFormat::Csv => Ok(csv::subnets(subnets)),
    }
}

pub fn render_overlaps(lines: &[String], format: OutputFormat) -> Result<String, CalcError> {
    match format {
        OutputFormat::Text => Ok(terminal::overlaps(lines)),
        OutputFormat::Json => json::overlaps(lines),
        OutputFormat::Csv => Ok(csv::overlaps(lines)),
    }
}

pub fn render_summary(summary: &RouteSummary, format: OutputFormat) -> Result<String, CalcError> {
    match format {
        OutputFormat::Text => Ok(terminal::summary(summary)),
        OutputFormat::Json => json::summary(summary),
        OutputFormat::Csv => Ok(csv::summary(summary)),
    }
}

/// Errors are rendered in the same format as results; CSV falls back to text.
pub fn render_error(err: &CalcError, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::error(err),
        OutputFormat::Text | OutputFormat::Csv => terminal::error(err),
    }
}
