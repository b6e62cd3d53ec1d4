//! Intent - Conversational intent of a model reply

use serde::{Deserialize, Serialize};

/// What a model reply is trying to do.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    /// The customer wants a product recommendation
    #[serde(rename = "SMOOTHIE_REQUEST")]
    SmoothieRequest,

    /// The customer is asking about an item already under discussion
    #[serde(rename = "FOLLOW_UP")]
    FollowUp,

    /// Small talk, no product involved
    #[serde(rename = "GENERAL_CHAT")]
    GeneralChat,

    /// The model needs a clarifying answer before it can recommend
    #[serde(rename = "NEEDS_INFO")]
    NeedsInfo,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::SmoothieRequest => "SMOOTHIE_REQUEST",
            Intent::FollowUp => "FOLLOW_UP",
            Intent::GeneralChat => "GENERAL_CHAT",
            Intent::NeedsInfo => "NEEDS_INFO",
        }
    }

    /// Parse a wire value. Unknown or misspelled values return `None` so the
    /// caller can substitute its context-derived default.
    pub fn parse(value: &str) -> Option<Intent> {
        match value {
            "SMOOTHIE_REQUEST" => Some(Intent::SmoothieRequest),
            "FOLLOW_UP" => Some(Intent::FollowUp),
            "GENERAL_CHAT" => Some(Intent::GeneralChat),
            "NEEDS_INFO" => Some(Intent::NeedsInfo),
            _ => None,
        }
    }

    /// Whether records carrying this intent represent an actual product
    /// recommendation (and therefore carry a price).
    pub fn is_product(&self) -> bool {
        matches!(self, Intent::SmoothieRequest | Intent::FollowUp)
    }
}
