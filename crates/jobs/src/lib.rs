pub mod runner;
pub mod update_log_retention;

pub use runner::JobRunner;
pub use update_log_retention::UpdateLogRetentionJob;
