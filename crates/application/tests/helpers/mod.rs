#![allow(dead_code)]
mod fixtures;
mod mock_repositories;

pub use fixtures::*;
pub use mock_repositories::*;
