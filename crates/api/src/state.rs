use dyndns_application::use_cases::{
    CreateAliasUseCase, CreateHostUseCase, DeleteAliasUseCase, DeleteHostUseCase,
    GetAliasesUseCase, GetHostsUseCase, GetUpdateLogsUseCase, UpdateHostIpUseCase,
    UpdateHostUseCase,
};
use dyndns_domain::ZoneMatcher;
use std::sync::Arc;

#[derive(Clone)]
pub struct HostUseCases {
    pub get_hosts: Arc<GetHostsUseCase>,
    pub create_host: Arc<CreateHostUseCase>,
    pub update_host: Arc<UpdateHostUseCase>,
    pub delete_host: Arc<DeleteHostUseCase>,
}

#[derive(Clone)]
pub struct AliasUseCases {
    pub get_aliases: Arc<GetAliasesUseCase>,
    pub create_alias: Arc<CreateAliasUseCase>,
    pub delete_alias: Arc<DeleteAliasUseCase>,
}

#[derive(Clone)]
pub struct AppState {
    pub hosts: HostUseCases,
    pub aliases: AliasUseCases,
    pub get_update_logs: Arc<GetUpdateLogsUseCase>,
    pub update_ip: Arc<UpdateHostIpUseCase>,
    pub zones: Arc<ZoneMatcher>,
    /// TTL for hosts and aliases created without one.
    pub default_ttl: u32,
    pub api_key: Option<Arc<str>>,
}
