use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type PlanId = String;

/// Literal token the model places between assets in a multi-asset reply.
pub const CARD_BREAK: &str = "[CARD_BREAK]";

/// Prefix of the heading line that titles an asset.
pub const TITLE_PREFIX: &str = "####";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub grade: String,
    pub topic: String,
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub output_types: Vec<String>,
    #[serde(default)]
    pub duration: Option<u32>,
}

impl GenerationRequest {
    /// Requested asset types, trimmed, with blank entries dropped.
    pub fn asset_types(&self) -> Vec<&str> {
        self.output_types
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .collect()
    }
}

/// One previously generated asset sent back for a remix or a deeper dive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRequest {
    pub grade: String,
    pub topic: String,
    #[serde(default)]
    pub location: String,
    pub card_title: String,
    pub card_content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentReplyRequest {
    pub grade: String,
    pub card_content: String,
    pub student_reply: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedPlan {
    pub id: PlanId,
    pub plan: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetResponse {
    pub assets: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareRequest {
    pub plan: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareResponse {
    pub share_id: PlanId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedPlanResponse {
    pub plan: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
