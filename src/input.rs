//! Text input pipeline.
//!
//! Every raw field passes through the same steps before it reaches the
//! engine: trim, reject empty, strip markup, enforce the length limit, parse.
//! Each step returns a [`CalcError`] instead of panicking.

use crate::config::Settings;
use crate::error::CalcError;
use crate::models::{parse_address, CidrBlock};
use regex::Regex;
use std::net::Ipv4Addr;
use std::sync::OnceLock;

/// Matches `<script>` elements including their body.
static SCRIPT_REGEX: OnceLock<Regex> = OnceLock::new();
/// Matches any remaining markup tag.
static TAG_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_script_regex() -> &'static Regex {
    SCRIPT_REGEX
        .get_or_init(|| Regex::new(r"(?is)<script[^>]*>.*?</script\s*>").expect("Invalid Regex"))
}

fn get_tag_regex() -> &'static Regex {
    TAG_REGEX.get_or_init(|| Regex::new(r"<[^>]*>").expect("Invalid Regex"))
}

/// Remove markup from a value and decode the escaped slash.
pub fn strip_markup(value: &str) -> String {
    let without_scripts = get_script_regex().replace_all(value, "");
    let without_tags = get_tag_regex().replace_all(&without_scripts, "");
    without_tags.replace("&#x2F;", "/").trim().to_string()
}

/// Trim, strip and length-check one required text field.
pub fn sanitize_field(raw: &str, field: &str, max_len: usize) -> Result<String, CalcError> {
    let cleaned = strip_markup(raw.trim());
    if cleaned.is_empty() {
        return Err(CalcError::InvalidInput(format!("{field} is required")));
    }
    if cleaned.chars().count() > max_len {
        return Err(CalcError::InvalidInput(format!(
            "{field} must be at most {max_len} characters long"
        )));
    }
    Ok(cleaned)
}

pub fn parse_cidr_field(raw: &str, field: &str, settings: &Settings) -> Result<CidrBlock, CalcError> {
    let cleaned = sanitize_field(raw, field, settings.max_field_len)?;
    CidrBlock::new(&cleaned)
}

pub fn parse_address_field(
    raw: &str,
    field: &str,
    settings: &Settings,
) -> Result<Ipv4Addr, CalcError> {
    let cleaned = sanitize_field(raw, field, settings.max_field_len)?;
    parse_address(&cleaned)
}

/// Parse a list of at least two CIDRs, as used by overlap and summarize.
pub fn parse_cidr_list(raws: &[String], settings: &Settings) -> Result<Vec<CidrBlock>, CalcError> {
    if raws.len() < 2 {
        return Err(CalcError::InvalidInput(
            "At least two CIDRs are required".to_string(),
        ));
    }
    check_list_len(raws.len(), "CIDRs", settings)?;
    raws.iter()
        .map(|raw| parse_cidr_field(raw, "CIDR", settings))
        .collect()
}

/// Number of subnets for an equal split, 1..=`max_subnets`.
pub fn parse_subnet_count(raw: &str, settings: &Settings) -> Result<u32, CalcError> {
    let cleaned = sanitize_field(raw, "Number of subnets", settings.max_field_len)?;
    match parse_positive(&cleaned) {
        Some(count) if count as usize <= settings.max_subnets => Ok(count),
        Some(count) => Err(CalcError::InvalidInput(format!(
            "Too many subnets: {count} (limit {})",
            settings.max_subnets
        ))),
        None => Err(CalcError::InvalidInput(
            "Invalid number of subnets".to_string(),
        )),
    }
}

/// Positive host counts for custom partitioning.
pub fn parse_host_counts(raws: &[String], settings: &Settings) -> Result<Vec<u32>, CalcError> {
    if raws.is_empty() {
        return Err(CalcError::InvalidInput(
            "At least one host count must be provided".to_string(),
        ));
    }
    check_list_len(raws.len(), "host counts", settings)?;
    raws.iter()
        .map(|raw| {
            let cleaned = sanitize_field(raw, "Host count", settings.max_field_len)?;
            parse_positive(&cleaned).ok_or_else(|| {
                CalcError::InvalidInput("All host counts must be positive integers".to_string())
            })
        })
        .collect()
}

/// Optional subnet names; blanks are kept so the partitioner can fill in defaults.
pub fn sanitize_names(raws: &[String], settings: &Settings) -> Result<Vec<String>, CalcError> {
    check_list_len(raws.len(), "names", settings)?;
    Ok(raws.iter().map(|raw| strip_markup(raw)).collect())
}

/// Plain decimal digits only, so signs and whitespace inside the number are rejected.
fn parse_positive(cleaned: &str) -> Option<u32> {
    if !cleaned.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    cleaned.parse::<u32>().ok().filter(|n| *n > 0)
}

fn check_list_len(len: usize, what: &str, settings: &Settings) -> Result<(), CalcError> {
    if len > settings.max_list_len {
        return Err(CalcError::InvalidInput(format!(
            "Too many {what}: {len} (limit {})",
            settings.max_list_len
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_strip_markup() {
        assert_eq!(strip_markup("<b>10.0.0.0</b>/8"), "10.0.0.0/8");
        assert_eq!(strip_markup("10.0.0.0&#x2F;8"), "10.0.0.0/8");
        assert_eq!(
            strip_markup("web<script>alert('x')</script> "),
            "web"
        );
    }

    #[test]
    fn test_sanitize_field_required_and_length() {
        assert_eq!(
            sanitize_field("   ", "CIDR", 23),
            Err(CalcError::InvalidInput("CIDR is required".to_string()))
        );
        assert_eq!(
            sanitize_field("<i></i>", "CIDR", 23),
            Err(CalcError::InvalidInput("CIDR is required".to_string()))
        );
        assert!(sanitize_field("255.255.255.255/32", "CIDR", 23).is_ok());
        assert_eq!(
            sanitize_field("123456789012345678901234", "CIDR", 23),
            Err(CalcError::InvalidInput(
                "CIDR must be at most 23 characters long".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_fields() {
        let settings = Settings::default();
        assert_eq!(
            parse_cidr_field(" 10.0.0.0/16 ", "CIDR", &settings).unwrap(),
            CidrBlock::new("10.0.0.0/16").unwrap()
        );
        assert!(matches!(
            parse_cidr_field("10.0.0.0", "CIDR", &settings),
            Err(CalcError::InvalidCidr(_))
        ));
        assert!(matches!(
            parse_address_field("10.0.0.256", "First IP", &settings),
            Err(CalcError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_parse_cidr_list() {
        let settings = Settings::default();
        assert!(parse_cidr_list(&strings(&["10.0.0.0/8"]), &settings).is_err());
        let list = parse_cidr_list(&strings(&["10.0.0.0/8", "10.0.0.0/9"]), &settings).unwrap();
        assert_eq!(list.len(), 2);

        let tight = Settings {
            max_list_len: 2,
            ..Settings::default()
        };
        assert!(parse_cidr_list(&strings(&["1.0.0.0/8", "2.0.0.0/8", "3.0.0.0/8"]), &tight).is_err());
    }

    #[test]
    fn test_parse_counts() {
        let settings = Settings::default();
        assert_eq!(parse_subnet_count("4", &settings).unwrap(), 4);
        assert!(parse_subnet_count("0", &settings).is_err());
        assert!(parse_subnet_count("-1", &settings).is_err());
        assert!(parse_subnet_count("+4", &settings).is_err());
        assert_eq!(parse_subnet_count("1024", &settings).unwrap(), 1024);

        let tight = Settings {
            max_subnets: 512,
            ..Settings::default()
        };
        assert_eq!(
            parse_subnet_count("1024", &tight),
            Err(CalcError::InvalidInput(
                "Too many subnets: 1024 (limit 512)".to_string()
            ))
        );

        assert_eq!(
            parse_host_counts(&strings(&["100", " 50"]), &settings).unwrap(),
            vec![100, 50]
        );
        assert!(parse_host_counts(&strings(&["100", "0"]), &settings).is_err());
        assert!(parse_host_counts(&strings(&["1.5"]), &settings).is_err());
        assert!(parse_host_counts(&[], &settings).is_err());
    }

    #[test]
    fn test_host_counts_use_field_pipeline() {
        let settings = Settings::default();
        assert_eq!(
            parse_host_counts(&strings(&["<b>5</b>", "7"]), &settings).unwrap(),
            vec![5, 7]
        );
        assert!(parse_host_counts(&strings(&["+5"]), &settings).is_err());
        assert_eq!(
            parse_host_counts(&strings(&["  "]), &settings),
            Err(CalcError::InvalidInput("Host count is required".to_string()))
        );
        let tight = Settings {
            max_field_len: 3,
            ..Settings::default()
        };
        assert!(parse_host_counts(&strings(&["1000"]), &tight).is_err());
    }

    #[test]
    fn test_sanitize_names() {
        let names = sanitize_names(&strings(&[" web ", "<b>db</b>", ""]), &Settings::default()).unwrap();
        assert_eq!(names, strings(&["web", "db", ""]));
    }
}
