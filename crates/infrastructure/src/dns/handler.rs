use dyndns_application::use_cases::ResponseAssembler;
use dyndns_domain::{DnsQuestion, DnsReply, ResponseCode};
use hickory_proto::op::{Message, MessageType, OpCode};
use hickory_proto::serialize::binary::BinEncodable;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, error, warn};

use super::wire::WireMapper;

/// Decodes one DNS message, runs it through the [`ResponseAssembler`] and
/// encodes the reply. Transport independent.
#[derive(Clone)]
pub struct DnsMessageHandler {
    assembler: Arc<ResponseAssembler>,
}

impl DnsMessageHandler {
    pub fn new(assembler: Arc<ResponseAssembler>) -> Self {
        Self { assembler }
    }

    /// `None` when no reply must be sent: undecodable input or a message
    /// that is itself a response.
    pub async fn handle(&self, bytes: &[u8], peer: SocketAddr) -> Option<Vec<u8>> {
        let request = match Message::from_vec(bytes) {
            Ok(message) => message,
            Err(e) => {
                debug!(%peer, error = %e, "Dropping undecodable DNS message");
                return None;
            }
        };

        if request.message_type() != MessageType::Query {
            debug!(%peer, id = request.id(), "Ignoring DNS message that is not a query");
            return None;
        }

        let reply = if request.op_code() != OpCode::Query {
            debug!(%peer, op_code = ?request.op_code(), "Unsupported opcode");
            DnsReply::with_code(ResponseCode::NotImp)
        } else {
            let questions: Vec<DnsQuestion> = request
                .queries()
                .iter()
                .map(WireMapper::question_from_query)
                .collect();
            self.assembler.assemble(&questions).await
        };

        let response = Self::build_response(&request, reply);
        match response.to_bytes() {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                error!(%peer, id = request.id(), error = %e, "Failed to encode DNS response");
                None
            }
        }
    }

    fn build_response(request: &Message, reply: DnsReply) -> Message {
        let mut response = Message::new();
        response.set_id(request.id());
        response.set_message_type(MessageType::Response);
        response.set_op_code(request.op_code());
        response.set_authoritative(true);
        response.set_recursion_desired(request.recursion_desired());
        response.set_recursion_available(false);
        response.set_response_code(WireMapper::response_code_to_wire(reply.response_code));
        response.add_queries(request.queries().iter().cloned());

        for answer in &reply.answers {
            match WireMapper::answer_to_record(answer) {
                Ok(record) => {
                    response.add_answer(record);
                }
                Err(e) => warn!(name = %answer.name, error = %e, "Skipping unencodable answer"),
            }
        }

        for authority in &reply.authority {
            match WireMapper::answer_to_record(authority) {
                Ok(record) => {
                    response.add_name_server(record);
                }
                Err(e) => warn!(name = %authority.name, error = %e, "Skipping unencodable authority"),
            }
        }

        response
    }
}
