pub mod aliases;
pub mod hosts;
pub mod logs;
pub mod ping;
pub mod update;
pub mod zones;

pub use ping::ping;
pub use zones::get_zones;
