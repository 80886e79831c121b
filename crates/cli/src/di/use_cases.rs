use dyndns_application::services::SerialClock;
use dyndns_application::use_cases::{
    CleanupOldUpdateLogsUseCase, CreateAliasUseCase, CreateHostUseCase, DeleteAliasUseCase,
    DeleteHostUseCase, GetAliasesUseCase, GetHostsUseCase, GetUpdateLogsUseCase, RecordResolver,
    ResolverSettings, ResponseAssembler, UpdateHostIpUseCase, UpdateHostUseCase,
};
use dyndns_domain::ZoneMatcher;
use std::sync::Arc;

use super::Repositories;

pub struct UseCases {
    pub get_hosts: Arc<GetHostsUseCase>,
    pub create_host: Arc<CreateHostUseCase>,
    pub update_host: Arc<UpdateHostUseCase>,
    pub delete_host: Arc<DeleteHostUseCase>,
    pub get_aliases: Arc<GetAliasesUseCase>,
    pub create_alias: Arc<CreateAliasUseCase>,
    pub delete_alias: Arc<DeleteAliasUseCase>,
    pub get_update_logs: Arc<GetUpdateLogsUseCase>,
    pub cleanup_update_logs: Arc<CleanupOldUpdateLogsUseCase>,
    pub update_ip: Arc<UpdateHostIpUseCase>,
    pub assembler: Arc<ResponseAssembler>,
}

impl UseCases {
    pub fn new(repos: &Repositories, zones: Arc<ZoneMatcher>, settings: ResolverSettings) -> Self {
        let resolver = Arc::new(RecordResolver::new(
            zones.clone(),
            repos.host.clone(),
            repos.alias.clone(),
            settings,
            Arc::new(SerialClock::new()),
        ));

        Self {
            get_hosts: Arc::new(GetHostsUseCase::new(repos.host.clone())),
            create_host: Arc::new(CreateHostUseCase::new(
                repos.host.clone(),
                repos.alias.clone(),
                repos.hasher.clone(),
                zones.clone(),
            )),
            update_host: Arc::new(UpdateHostUseCase::new(
                repos.host.clone(),
                repos.hasher.clone(),
            )),
            delete_host: Arc::new(DeleteHostUseCase::new(repos.host.clone())),
            get_aliases: Arc::new(GetAliasesUseCase::new(repos.alias.clone())),
            create_alias: Arc::new(CreateAliasUseCase::new(
                repos.alias.clone(),
                repos.host.clone(),
            )),
            delete_alias: Arc::new(DeleteAliasUseCase::new(repos.alias.clone())),
            get_update_logs: Arc::new(GetUpdateLogsUseCase::new(
                repos.update_log.clone(),
                repos.host.clone(),
            )),
            cleanup_update_logs: Arc::new(CleanupOldUpdateLogsUseCase::new(
                repos.update_log.clone(),
            )),
            update_ip: Arc::new(UpdateHostIpUseCase::new(
                repos.host.clone(),
                repos.update_log.clone(),
                repos.hasher.clone(),
            )),
            assembler: Arc::new(ResponseAssembler::new(resolver)),
        }
    }
}
