mod answer_builder;
mod record;
mod record_type;

pub use answer_builder::{
    classify_ip, AnswerBuilder, SOA_EXPIRE, SOA_MINIMUM, SOA_REFRESH, SOA_RETRY,
};
pub use record::{DnsAnswer, RecordData, SoaData};
pub use record_type::{QueryClass, RecordType};
