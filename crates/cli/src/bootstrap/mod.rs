mod config;
mod database;
mod external_ip;
mod logging;

pub use config::load_config;
pub use database::init_database;
pub use external_ip::resolve_apex_ip;
pub use logging::init_logging;
