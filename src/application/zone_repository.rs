// Repository trait for priority-zone persistence
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Body of a create-or-update call. Point-click zones carry neither radius nor id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZonePayload {
    pub center_longitude: f64,
    pub center_latitude: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub radius_km: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<String>,
}

/// Whatever the store reports back. Nothing downstream branches on it yet.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ZoneAck {
    #[serde(default)]
    pub id: Option<String>,
}

#[async_trait]
pub trait ZoneRepository: Send + Sync {
    /// Create the zone, or update it when `payload.id` is already known to the store
    async fn create_or_update(&self, payload: &ZonePayload) -> anyhow::Result<ZoneAck>;
}
