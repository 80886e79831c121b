pub mod aliases;
pub mod dns;
pub mod hosts;
pub mod update;
pub mod update_logs;

pub use aliases::{CreateAliasUseCase, DeleteAliasUseCase, GetAliasesUseCase};
pub use dns::{RecordResolver, ResolverSettings, ResponseAssembler};
pub use hosts::{
    CreateHostCommand, CreateHostUseCase, DeleteHostUseCase, GetHostsUseCase, UpdateHostCommand,
    UpdateHostUseCase,
};
pub use update::{IpUpdateOutcome, IpUpdateRequest, UpdateHostIpUseCase};
pub use update_logs::{CleanupOldUpdateLogsUseCase, GetUpdateLogsUseCase};
