mod assemble_response;
mod resolve_record;

pub use assemble_response::ResponseAssembler;
pub use resolve_record::{RecordResolver, ResolverSettings};
