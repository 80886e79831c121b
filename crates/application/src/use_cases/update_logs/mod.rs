mod cleanup_old_update_logs;
mod get_update_logs;

pub use cleanup_old_update_logs::CleanupOldUpdateLogsUseCase;
pub use get_update_logs::GetUpdateLogsUseCase;
