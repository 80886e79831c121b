use super::RecordType;
use std::net::{Ipv4Addr, Ipv6Addr};

/// SOA payload. Names are root-label qualified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoaData {
    pub nameserver: String,
    pub mbox: String,
    pub serial: u32,
    pub refresh: i32,
    pub retry: i32,
    pub expire: i32,
    pub minimum: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    /// Root-label qualified target.
    CNAME(String),
    SOA(SoaData),
}

/// One resource record of class IN, independent of any wire library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsAnswer {
    pub name: String,
    pub ttl: u32,
    pub data: RecordData,
}

impl DnsAnswer {
    pub fn new(name: impl Into<String>, ttl: u32, data: RecordData) -> Self {
        Self {
            name: name.into(),
            ttl,
            data,
        }
    }

    pub fn record_type(&self) -> RecordType {
        match self.data {
            RecordData::A(_) => RecordType::A,
            RecordData::AAAA(_) => RecordType::AAAA,
            RecordData::CNAME(_) => RecordType::CNAME,
            RecordData::SOA(_) => RecordType::SOA,
        }
    }
}
