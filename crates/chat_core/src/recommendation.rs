//! Recommendation - the normalized outcome of one recommendation request
//!
//! `price_usd` is present only for records that represent an actual product
//! recommendation; general-chat and needs-info records omit the field on the
//! wire entirely.

use serde::{Deserialize, Serialize};

use crate::intent::Intent;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Recommendation {
    pub intent: Intent,

    /// A menu item id, or one of the sentinels `general_chat`, `needs_info`,
    /// `default_smoothie`.
    pub id: String,

    pub name: String,

    #[serde(rename = "type")]
    pub item_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_usd: Option<f64>,

    #[serde(rename = "requiresAddOn")]
    pub requires_add_on: bool,

    pub image_path: String,

    pub explanation: String,
}
