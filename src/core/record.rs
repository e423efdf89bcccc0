use std::fmt;
use std::str::FromStr;

use crate::core::params::ParamValue;

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    MX,
    CNAME,
    TXT,
    SPF,
    NS,
    SRV,
    WR,
    RP,
    SSHFP,
    ALIAS,
    CAA,
    TLSA,
    CERT,
    DS,
    PTR,
    NAPTR,
    HINFO,
    LOC,
    DNAME,
    SMIMEA,
    OPENPGPKEY,
}

impl RecordType {
    pub const ALL: [RecordType; 23] = [
        RecordType::A,
        RecordType::AAAA,
        RecordType::MX,
        RecordType::CNAME,
        RecordType::TXT,
        RecordType::SPF,
        RecordType::NS,
        RecordType::SRV,
        RecordType::WR,
        RecordType::RP,
        RecordType::SSHFP,
        RecordType::ALIAS,
        RecordType::CAA,
        RecordType::TLSA,
        RecordType::CERT,
        RecordType::DS,
        RecordType::PTR,
        RecordType::NAPTR,
        RecordType::HINFO,
        RecordType::LOC,
        RecordType::DNAME,
        RecordType::SMIMEA,
        RecordType::OPENPGPKEY,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::MX => "MX",
            RecordType::CNAME => "CNAME",
            RecordType::TXT => "TXT",
            RecordType::SPF => "SPF",
            RecordType::NS => "NS",
            RecordType::SRV => "SRV",
            RecordType::WR => "WR",
            RecordType::RP => "RP",
            RecordType::SSHFP => "SSHFP",
            RecordType::ALIAS => "ALIAS",
            RecordType::CAA => "CAA",
            RecordType::TLSA => "TLSA",
            RecordType::CERT => "CERT",
            RecordType::DS => "DS",
            RecordType::PTR => "PTR",
            RecordType::NAPTR => "NAPTR",
            RecordType::HINFO => "HINFO",
            RecordType::LOC => "LOC",
            RecordType::DNAME => "DNAME",
            RecordType::SMIMEA => "SMIMEA",
            RecordType::OPENPGPKEY => "OPENPGPKEY",
        }
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordType::ALL
            .iter()
            .find(|t| t.as_str() == s)
            .copied()
            .ok_or_else(|| format!("unknown record type: {s}"))
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<RecordType> for ParamValue {
    fn from(value: RecordType) -> Self {
        ParamValue::Str(value.as_str().to_string())
    }
}

/// Zone kinds accepted by zone registration and record-type discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneType {
    Master,
    Slave,
    Parked,
    GeoDns,
    Domain,
    Reverse,
}

impl ZoneType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ZoneType::Master => "master",
            ZoneType::Slave => "slave",
            ZoneType::Parked => "parked",
            ZoneType::GeoDns => "geodns",
            ZoneType::Domain => "domain",
            ZoneType::Reverse => "reverse",
        }
    }
}

impl FromStr for ZoneType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "master" => Ok(ZoneType::Master),
            "slave" => Ok(ZoneType::Slave),
            "parked" => Ok(ZoneType::Parked),
            "geodns" => Ok(ZoneType::GeoDns),
            "domain" => Ok(ZoneType::Domain),
            "reverse" => Ok(ZoneType::Reverse),
            _ => Err(format!(
                "invalid zone type: {s}, expected one of master, slave, parked, geodns, domain, reverse"
            )),
        }
    }
}

impl fmt::Display for ZoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ZoneType> for ParamValue {
    fn from(value: ZoneType) -> Self {
        ParamValue::Str(value.as_str().to_string())
    }
}
