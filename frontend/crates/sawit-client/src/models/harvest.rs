use crate::models::wire_enum;

use serde::{Deserialize, Serialize};

wire_enum! {
    HarvestQuality {
        Premium => "PREMIUM",
        Standard => "STANDARD",
        Low => "LOW",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Harvest {
    pub id: i64,
    pub plantation_id: i64,
    pub harvest_date: String,
    /// Kilograms
    pub weight: f64,
    pub quality: HarvestQuality,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub harvester_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarvestRequest {
    pub plantation_id: i64,
    pub harvest_date: String,
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<HarvestQuality>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub harvester_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
