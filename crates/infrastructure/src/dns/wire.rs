//! Conversion between domain records and hickory wire types.

use dyndns_domain::zone::fqdn;
use dyndns_domain::{
    DnsAnswer, DnsQuestion, DomainError, QueryClass, RecordData, RecordType, ResponseCode, SoaData,
};
use hickory_proto::op::{Query, ResponseCode as WireResponseCode};
use hickory_proto::rr::rdata::{A, AAAA, CNAME, SOA};
use hickory_proto::rr::{DNSClass, Name, RData, Record, RecordType as WireRecordType};

pub struct WireMapper;

impl WireMapper {
    pub fn question_from_query(query: &Query) -> DnsQuestion {
        DnsQuestion::new(
            query.name().to_utf8(),
            Self::record_type_from_wire(query.query_type()),
            QueryClass::from_u16(u16::from(query.query_class())),
        )
    }

    pub fn record_type_from_wire(record_type: WireRecordType) -> RecordType {
        RecordType::from_u16(u16::from(record_type))
    }

    pub fn record_type_to_wire(record_type: RecordType) -> WireRecordType {
        WireRecordType::from(record_type.to_u16())
    }

    pub fn response_code_to_wire(code: ResponseCode) -> WireResponseCode {
        match code {
            ResponseCode::NoError => WireResponseCode::NoError,
            ResponseCode::FormErr => WireResponseCode::FormErr,
            ResponseCode::NxDomain => WireResponseCode::NXDomain,
            ResponseCode::NotImp => WireResponseCode::NotImp,
            ResponseCode::Refused => WireResponseCode::Refused,
        }
    }

    /// Class IN record for `answer`.
    pub fn answer_to_record(answer: &DnsAnswer) -> Result<Record, DomainError> {
        let name = parse_name(&answer.name)?;

        let rdata = match &answer.data {
            RecordData::A(ip) => RData::A(A(*ip)),
            RecordData::AAAA(ip) => RData::AAAA(AAAA(*ip)),
            RecordData::CNAME(target) => RData::CNAME(CNAME(parse_name(target)?)),
            RecordData::SOA(soa) => RData::SOA(SOA::new(
                parse_name(&soa.nameserver)?,
                parse_name(&soa.mbox)?,
                soa.serial,
                soa.refresh,
                soa.retry,
                soa.expire,
                soa.minimum,
            )),
        };

        let mut record = Record::from_rdata(name, answer.ttl, rdata);
        record.set_dns_class(DNSClass::IN);
        Ok(record)
    }

    /// Inverse of [`WireMapper::answer_to_record`]; `None` for record types
    /// this server never emits.
    pub fn record_to_answer(record: &Record) -> Option<DnsAnswer> {
        let data = match record.data() {
            RData::A(a) => RecordData::A(a.0),
            RData::AAAA(aaaa) => RecordData::AAAA(aaaa.0),
            RData::CNAME(cname) => RecordData::CNAME(cname.0.to_utf8()),
            RData::SOA(soa) => RecordData::SOA(SoaData {
                nameserver: soa.mname().to_utf8(),
                mbox: soa.rname().to_utf8(),
                serial: soa.serial(),
                refresh: soa.refresh(),
                retry: soa.retry(),
                expire: soa.expire(),
                minimum: soa.minimum(),
            }),
            _ => return None,
        };

        Some(DnsAnswer::new(record.name().to_utf8(), record.ttl(), data))
    }
}

fn parse_name(name: &str) -> Result<Name, DomainError> {
    Name::from_utf8(fqdn(name)).map_err(|e| DomainError::InvalidDomainName(format!("{}: {}", name, e)))
}
