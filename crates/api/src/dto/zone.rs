use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZonesResponse {
    pub zones: Vec<String>,
}
