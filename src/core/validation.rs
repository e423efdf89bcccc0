//! Per-field rules applied to a [`ParameterSet`] before it is sent.
//!
//! Every rule is evaluated and every failure is collected, so a caller gets
//! the complete diagnostic in one pass. Fields missing from the set are
//! skipped; absent-valued fields are skipped too, except `record`.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;

use regex::Regex;

use crate::core::params::{ParamValue, ParameterSet};
use crate::core::record::RecordType;

pub const TTLS: &[i64] = &[
    60, 300, 900, 1800, 3600, 21600, 43200, 86400, 172800, 259200, 604800, 1209600, 2592000,
];
pub const ALGORITHMS: &[&str] = &["RSA", "DSA", "ECDSA", "ED25519"];
pub const CAA_TYPES: &[&str] = &["issue", "issuewild", "iodef"];
/// SSHFP fingerprint types: 1 is SHA-1, 2 is SHA-256.
pub const FP_TYPES: &[i64] = &[1, 2];

static DOMAIN_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:xn--)?[a-z0-9]+(?:-[a-z0-9]+)*\.)+[a-z]{2,63}$")
        .expect("domain name pattern compiles")
});

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("email pattern compiles")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    Empty,
    NotInteger,
    NotString,
    NotInSet,
    OutOfRange { min: i64, max: i64 },
    InvalidDomainName,
    InvalidEmail,
    InvalidIpv4,
    InvalidIpv6,
}

/// One failed rule, naming the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub kind: ViolationKind,
}

impl FieldViolation {
    pub fn new(field: &'static str, kind: ViolationKind) -> Self {
        Self { field, kind }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = self.field;
        match &self.kind {
            ViolationKind::Empty => write!(f, "{field} cannot be empty"),
            ViolationKind::NotInteger => write!(f, "{field} must be an integer"),
            ViolationKind::NotString => write!(f, "{field} must be a string"),
            ViolationKind::NotInSet => write!(f, "{field} is not one of the allowed values"),
            ViolationKind::OutOfRange { min, max } => {
                write!(f, "{field} must be between {min} and {max}")
            }
            ViolationKind::InvalidDomainName => write!(f, "{field} is not a valid domain name"),
            ViolationKind::InvalidEmail => write!(f, "{field} is not a valid email address"),
            ViolationKind::InvalidIpv4 => write!(f, "{field} must be a valid IPv4 address"),
            ViolationKind::InvalidIpv6 => write!(f, "{field} must be a valid IPv6 address"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(Vec<FieldViolation>),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    pub fn messages(&self) -> Vec<String> {
        match self {
            ValidationOutcome::Valid => Vec::new(),
            ValidationOutcome::Invalid(v) => v.iter().map(ToString::to_string).collect(),
        }
    }

    pub fn into_result(self) -> Result<(), Vec<FieldViolation>> {
        match self {
            ValidationOutcome::Valid => Ok(()),
            ValidationOutcome::Invalid(v) => Err(v),
        }
    }
}

type Check = fn(&ParamValue, &ParameterSet) -> Result<(), ViolationKind>;

const RULES: &[(&str, Check)] = &[
    ("domain_name", domain_name),
    ("record_type", record_type),
    ("host", string),
    ("record", record),
    ("ttl", ttl),
    ("priority", integer),
    ("weight", integer),
    ("port", integer),
    ("frame", zero_or_one),
    ("frame_title", string),
    ("redirect_type", redirect_type),
    ("admin_email", email),
    ("txt", string),
    ("algorithm", algorithm),
    ("fptype", fptype),
    ("status", zero_or_one),
    ("geodns_code", string),
    ("caa_flag", caa_flag),
    ("caa_type", caa_type),
    ("caa_value", string),
    ("tlsa_usage", |v, _| int_range(v, 0, 3)),
    ("tlsa_selector", zero_or_one),
    ("tlsa_matching_type", |v, _| int_range(v, 0, 2)),
    ("refresh", |v, _| int_range(v, 1200, 43200)),
    ("retry", |v, _| int_range(v, 180, 2419200)),
    ("expiry", |v, _| int_range(v, 1209600, 2419200)),
    ("default_ttl", |v, _| int_range(v, 60, 2419200)),
    ("primary_ns", domain_name),
    ("lat_deg", |v, _| int_range(v, 0, 90)),
    ("lat_min", |v, _| int_range(v, 0, 59)),
    ("lat_dir", |v, _| one_of(v, &["N", "S"])),
    ("long_deg", |v, _| int_range(v, 0, 180)),
    ("long_min", |v, _| int_range(v, 0, 59)),
    ("long_dir", |v, _| one_of(v, &["E", "W"])),
];

/// Checks every present field that has a rule.
pub fn validate(params: &ParameterSet) -> ValidationOutcome {
    let mut violations = Vec::new();
    for (field, check) in RULES {
        let Some(value) = params.entry(field) else {
            continue;
        };
        let result = match value {
            Some(value) => check(value, params),
            None if *field == "record" => Err(ViolationKind::Empty),
            None => Ok(()),
        };
        if let Err(kind) = result {
            violations.push(FieldViolation::new(*field, kind));
        }
    }

    if violations.is_empty() {
        ValidationOutcome::Valid
    } else {
        ValidationOutcome::Invalid(violations)
    }
}

fn as_int(value: &ParamValue) -> Result<i64, ViolationKind> {
    value.as_int().ok_or(ViolationKind::NotInteger)
}

fn as_str(value: &ParamValue) -> Result<&str, ViolationKind> {
    value.as_str().ok_or(ViolationKind::NotString)
}

fn string(value: &ParamValue, _: &ParameterSet) -> Result<(), ViolationKind> {
    as_str(value).map(|_| ())
}

fn integer(value: &ParamValue, _: &ParameterSet) -> Result<(), ViolationKind> {
    as_int(value).map(|_| ())
}

fn int_in(value: &ParamValue, allowed: &[i64]) -> Result<(), ViolationKind> {
    if allowed.contains(&as_int(value)?) {
        Ok(())
    } else {
        Err(ViolationKind::NotInSet)
    }
}

fn int_range(value: &ParamValue, min: i64, max: i64) -> Result<(), ViolationKind> {
    if (min..=max).contains(&as_int(value)?) {
        Ok(())
    } else {
        Err(ViolationKind::OutOfRange { min, max })
    }
}

fn one_of(value: &ParamValue, allowed: &[&str]) -> Result<(), ViolationKind> {
    if allowed.contains(&as_str(value)?) {
        Ok(())
    } else {
        Err(ViolationKind::NotInSet)
    }
}

fn zero_or_one(value: &ParamValue, _: &ParameterSet) -> Result<(), ViolationKind> {
    int_in(value, &[0, 1])
}

fn ttl(value: &ParamValue, _: &ParameterSet) -> Result<(), ViolationKind> {
    int_in(value, TTLS)
}

fn redirect_type(value: &ParamValue, _: &ParameterSet) -> Result<(), ViolationKind> {
    int_in(value, &[301, 302])
}

fn fptype(value: &ParamValue, _: &ParameterSet) -> Result<(), ViolationKind> {
    int_in(value, FP_TYPES)
}

fn caa_flag(value: &ParamValue, _: &ParameterSet) -> Result<(), ViolationKind> {
    int_in(value, &[0, 128])
}

fn caa_type(value: &ParamValue, _: &ParameterSet) -> Result<(), ViolationKind> {
    one_of(value, CAA_TYPES)
}

fn algorithm(value: &ParamValue, _: &ParameterSet) -> Result<(), ViolationKind> {
    one_of(value, ALGORITHMS)
}

fn record_type(value: &ParamValue, _: &ParameterSet) -> Result<(), ViolationKind> {
    as_str(value)?
        .parse::<RecordType>()
        .map(|_| ())
        .map_err(|_| ViolationKind::NotInSet)
}

fn domain_name(value: &ParamValue, _: &ParameterSet) -> Result<(), ViolationKind> {
    let name = as_str(value)?;
    // The pattern cannot bound label length on its own.
    let labels_fit = name.split('.').all(|label| label.len() <= 63);
    if labels_fit && DOMAIN_NAME.is_match(name) {
        Ok(())
    } else {
        Err(ViolationKind::InvalidDomainName)
    }
}

fn email(value: &ParamValue, _: &ParameterSet) -> Result<(), ViolationKind> {
    if EMAIL.is_match(as_str(value)?) {
        Ok(())
    } else {
        Err(ViolationKind::InvalidEmail)
    }
}

fn record(value: &ParamValue, params: &ParameterSet) -> Result<(), ViolationKind> {
    let record = as_str(value)?;
    if record.is_empty() {
        return Err(ViolationKind::Empty);
    }
    match params.get("record_type").and_then(ParamValue::as_str) {
        Some("A") => record
            .parse::<Ipv4Addr>()
            .map(|_| ())
            .map_err(|_| ViolationKind::InvalidIpv4),
        Some("AAAA") => record
            .parse::<Ipv6Addr>()
            .map(|_| ())
            .map_err(|_| ViolationKind::InvalidIpv6),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violations(params: &ParameterSet) -> Vec<FieldViolation> {
        match validate(params) {
            ValidationOutcome::Valid => Vec::new(),
            ValidationOutcome::Invalid(v) => v,
        }
    }

    fn fields(params: &ParameterSet) -> Vec<&'static str> {
        violations(params).into_iter().map(|v| v.field).collect()
    }

    #[test]
    fn test_valid_a_record() {
        let params = ParameterSet::new()
            .with("domain_name", "example.com")
            .with("record_type", "A")
            .with("record", "1.1.1.1")
            .with("ttl", 3600u32);
        assert_eq!(validate(&params), ValidationOutcome::Valid);
    }

    #[test]
    fn test_collects_every_violation() {
        let params = ParameterSet::new()
            .with("domain_name", "bad_domain")
            .with("record_type", "A")
            .with("record", "not-an-ip")
            .with("ttl", 59u32);
        let found = violations(&params);
        assert_eq!(found.len(), 3);
        assert_eq!(found[0], FieldViolation::new("domain_name", ViolationKind::InvalidDomainName));
        assert_eq!(found[1], FieldViolation::new("record", ViolationKind::InvalidIpv4));
        assert_eq!(found[2], FieldViolation::new("ttl", ViolationKind::NotInSet));
    }

    #[test]
    fn test_two_independent_violations() {
        let params = ParameterSet::new().with("ttl", 7u32).with("status", 5u32);
        let outcome = validate(&params);
        assert!(!outcome.is_valid());
        assert_eq!(outcome.messages().len(), 2);
    }

    #[test]
    fn test_ttl_boundaries() {
        assert!(fields(&ParameterSet::new().with("ttl", 2592000u32)).is_empty());
        assert_eq!(fields(&ParameterSet::new().with("ttl", 2592001u32)), vec!["ttl"]);
        assert_eq!(fields(&ParameterSet::new().with("ttl", "3600")), vec!["ttl"]);
    }

    #[test]
    fn test_caa_and_tlsa_boundaries() {
        assert!(fields(&ParameterSet::new().with("caa_flag", 128u32)).is_empty());
        assert_eq!(fields(&ParameterSet::new().with("caa_flag", 64u32)), vec!["caa_flag"]);
        assert!(fields(&ParameterSet::new().with("tlsa_usage", 3u32)).is_empty());
        assert_eq!(fields(&ParameterSet::new().with("tlsa_usage", 4u32)), vec!["tlsa_usage"]);
        assert_eq!(
            violations(&ParameterSet::new().with("tlsa_matching_type", 3u32))[0].kind,
            ViolationKind::OutOfRange { min: 0, max: 2 }
        );
        assert_eq!(fields(&ParameterSet::new().with("tlsa_selector", 2u32)), vec!["tlsa_selector"]);
        assert_eq!(fields(&ParameterSet::new().with("caa_type", "issuekl")), vec!["caa_type"]);
    }

    #[test]
    fn test_domain_names() {
        for good in ["example.com", "a-b.example.co", "xn--bcher-kva.example", "1.168.192.in-addr.arpa"] {
            assert!(fields(&ParameterSet::new().with("domain_name", good)).is_empty(), "{good}");
        }
        let long_label = format!("{}.com", "a".repeat(64));
        for bad in ["example", "Example.com", "-lead.com", "trail-.com", "ex_ample.com", long_label.as_str()] {
            assert_eq!(fields(&ParameterSet::new().with("domain_name", bad)), vec!["domain_name"], "{bad}");
        }
        assert_eq!(fields(&ParameterSet::new().with("primary_ns", "ns1")), vec!["primary_ns"]);
    }

    #[test]
    fn test_record_shape_follows_record_type() {
        let aaaa = ParameterSet::new().with("record_type", "AAAA").with("record", "2001:db8::1");
        assert!(fields(&aaaa).is_empty());
        let aaaa_v4 = ParameterSet::new().with("record_type", "AAAA").with("record", "1.2.3.4");
        assert_eq!(violations(&aaaa_v4)[0].kind, ViolationKind::InvalidIpv6);
        let txt = ParameterSet::new().with("record_type", "TXT").with("record", "v=spf1 -all");
        assert!(fields(&txt).is_empty());
    }

    #[test]
    fn test_record_is_required_when_listed() {
        let mut params = ParameterSet::new();
        params.insert("record_type", "CNAME").set("record", None);
        assert_eq!(violations(&params)[0], FieldViolation::new("record", ViolationKind::Empty));
        let empty = ParameterSet::new().with("record", "");
        assert_eq!(violations(&empty)[0].kind, ViolationKind::Empty);
    }

    #[test]
    fn test_unknown_record_type() {
        let params = ParameterSet::new().with("record_type", "SOA");
        assert_eq!(fields(&params), vec!["record_type"]);
    }

    #[test]
    fn test_integer_only_fields() {
        let params = ParameterSet::new()
            .with("priority", "10")
            .with("weight", 5u32)
            .with("port", true);
        let found = violations(&params);
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|v| v.kind == ViolationKind::NotInteger));
    }

    #[test]
    fn test_fptype_uses_integer_codes() {
        assert!(fields(&ParameterSet::new().with("fptype", 2u32)).is_empty());
        assert_eq!(fields(&ParameterSet::new().with("fptype", "SHA-256")), vec!["fptype"]);
        assert_eq!(fields(&ParameterSet::new().with("fptype", 3u32)), vec!["fptype"]);
    }

    #[test]
    fn test_soa_ranges() {
        let params = ParameterSet::new()
            .with("primary_ns", "ns1.example.net")
            .with("admin_email", "hostmaster@example.com")
            .with("refresh", 1200u32)
            .with("retry", 2419200u32)
            .with("expiry", 1209600u32)
            .with("default_ttl", 60u32);
        assert!(validate(&params).is_valid());

        let params = ParameterSet::new()
            .with("admin_email", "hostmaster")
            .with("refresh", 1199u32)
            .with("retry", 179u32)
            .with("expiry", 2419201u32)
            .with("default_ttl", 59u32);
        assert_eq!(
            fields(&params),
            vec!["admin_email", "refresh", "retry", "expiry", "default_ttl"]
        );
    }

    #[test]
    fn test_absent_optional_fields_are_legal() {
        let mut params = ParameterSet::new();
        params.set("refresh", None).set("ttl", None).set("host", None);
        assert!(validate(&params).is_valid());
    }

    #[test]
    fn test_loc_fields() {
        let params = ParameterSet::new()
            .with("lat_deg", 91u32)
            .with("lat_dir", "E")
            .with("long_deg", 180u32)
            .with("long_dir", "W");
        assert_eq!(fields(&params), vec!["lat_deg", "lat_dir"]);
    }

    #[test]
    fn test_rule_table_cases() {
        let cases: Vec<(&'static str, ParamValue, Option<ViolationKind>)> = vec![
            ("algorithm", "RSA".into(), None),
            ("algorithm", "ED25519".into(), None),
            ("algorithm", "SHA1".into(), Some(ViolationKind::NotInSet)),
            ("algorithm", 1u32.into(), Some(ViolationKind::NotString)),
            ("frame", 0u32.into(), None),
            ("frame", 1u32.into(), None),
            ("frame", 2u32.into(), Some(ViolationKind::NotInSet)),
            ("redirect_type", 301u32.into(), None),
            ("redirect_type", 302u32.into(), None),
            ("host", 5u32.into(), Some(ViolationKind::NotString)),
            ("frame_title", 5u32.into(), Some(ViolationKind::NotString)),
            ("txt", 5u32.into(), Some(ViolationKind::NotString)),
            ("caa_value", 5u32.into(), Some(ViolationKind::NotString)),
            ("geodns_code", true.into(), Some(ViolationKind::NotString)),
            ("geodns_code", "EU".into(), None),
            ("lat_min", 59u32.into(), None),
            ("lat_min", 60u32.into(), Some(ViolationKind::OutOfRange { min: 0, max: 59 })),
            ("long_min", 0u32.into(), None),
            ("long_min", 60u32.into(), Some(ViolationKind::OutOfRange { min: 0, max: 59 })),
            ("long_deg", 180u32.into(), None),
            ("long_deg", 181u32.into(), Some(ViolationKind::OutOfRange { min: 0, max: 180 })),
            ("lat_deg", 90u32.into(), None),
            ("lat_dir", "S".into(), None),
            ("long_dir", "N".into(), Some(ViolationKind::NotInSet)),
        ];

        for (field, value, expected) in cases {
            let params = ParameterSet::new().with(field, value.clone());
            let found = violations(&params);
            match expected {
                None => assert!(found.is_empty(), "{field}={value:?} should pass, got {found:?}"),
                Some(kind) => {
                    assert_eq!(found, vec![FieldViolation::new(field, kind)], "{field}={value:?}")
                }
            }
        }
    }

    #[test]
    fn test_messages_name_the_field() {
        let outcome = validate(&ParameterSet::new().with("redirect_type", 303u32));
        assert_eq!(outcome.messages(), vec!["redirect_type is not one of the allowed values"]);
    }
}
