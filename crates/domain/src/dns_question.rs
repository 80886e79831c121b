use crate::dns_record::{QueryClass, RecordType};
use std::sync::Arc;

/// One entry of a message's question section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuestion {
    /// Queried name as received, usually root-label qualified.
    pub name: Arc<str>,
    pub record_type: RecordType,
    pub query_class: QueryClass,
}

impl DnsQuestion {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType, query_class: QueryClass) -> Self {
        Self {
            name: name.into(),
            record_type,
            query_class,
        }
    }

    pub fn inet(name: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self::new(name, record_type, QueryClass::In)
    }
}
