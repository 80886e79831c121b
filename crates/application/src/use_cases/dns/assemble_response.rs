use dyndns_domain::{DnsQuestion, DnsReply, DomainError, ResponseCode};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::RecordResolver;

/// Builds the single reply for one inbound message.
pub struct ResponseAssembler {
    resolver: Arc<RecordResolver>,
}

impl ResponseAssembler {
    pub fn new(resolver: Arc<RecordResolver>) -> Self {
        Self { resolver }
    }

    /// Questions are answered in order. The first name outside every zone
    /// turns the whole reply into REFUSED; the first question without records
    /// ends processing with NXDOMAIN and the zone SOA as authority.
    pub async fn assemble(&self, questions: &[DnsQuestion]) -> DnsReply {
        if questions.is_empty() {
            debug!("Message carries no question");
            return DnsReply::with_code(ResponseCode::FormErr);
        }

        let mut reply = DnsReply::no_error();

        for question in questions {
            info!(
                name = %question.name,
                class = %question.query_class,
                qtype = %question.record_type,
                "DNS question"
            );

            if !self.resolver.matcher().classify(&question.name).is_supported() {
                debug!(name = %question.name, "Name outside configured zones, refusing");
                return DnsReply::with_code(ResponseCode::Refused);
            }

            let answers = match self.resolver.resolve(question).await {
                Ok(answers) => answers,
                Err(e @ DomainError::DatabaseError(_)) => {
                    warn!(name = %question.name, error = %e, "Store lookup failed");
                    Vec::new()
                }
                Err(e) => {
                    debug!(name = %question.name, error = %e, "Resolution failed");
                    Vec::new()
                }
            };

            if answers.is_empty() {
                reply.response_code = ResponseCode::NxDomain;
                match self.resolver.resolve_soa(&question.name) {
                    Ok(soa) => reply.authority.push(soa),
                    Err(e) => debug!(name = %question.name, error = %e, "No SOA for negative answer"),
                }
                return reply;
            }

            reply.answers.extend(answers);
        }

        reply
    }
}
