use crate::dns_record::DnsAnswer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    NoError,
    FormErr,
    NxDomain,
    NotImp,
    Refused,
}

impl ResponseCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormErr => "FORMERR",
            ResponseCode::NxDomain => "NXDOMAIN",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
        }
    }
}

/// Sections of an authoritative reply, before wire encoding. The question
/// section and header echo are filled in by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsReply {
    pub response_code: ResponseCode,
    pub answers: Vec<DnsAnswer>,
    pub authority: Vec<DnsAnswer>,
}

impl DnsReply {
    pub fn no_error() -> Self {
        Self::with_code(ResponseCode::NoError)
    }

    pub fn with_code(response_code: ResponseCode) -> Self {
        Self {
            response_code,
            answers: Vec::new(),
            authority: Vec::new(),
        }
    }
}
