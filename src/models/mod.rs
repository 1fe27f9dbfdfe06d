pub mod dashboard;
pub mod sheets;
pub mod shift;
pub mod time_record;
pub mod worker;

use serde::Deserialize;

/// Plain `{ "message": ... }` acknowledgement returned by delete endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}
