//! Sentinel ids, fallback fields, and normalization limits.
//!
//! Kept in one place so tests can assert against them by name.

pub const GENERAL_CHAT_ID: &str = "general_chat";
pub const GENERAL_CHAT_NAME: &str = "Friendly Chat";

pub const NEEDS_INFO_ID: &str = "needs_info";
pub const NEEDS_INFO_NAME: &str = "More Information Needed";

pub const DEFAULT_SMOOTHIE_ID: &str = "default_smoothie";
pub const DEFAULT_SMOOTHIE_NAME: &str = "Recommended Smoothie";

pub const GENERAL_TYPE: &str = "general";
pub const SMOOTHIE_TYPE: &str = "smoothie";

pub const AVATAR_IMAGE_PATH: &str = "/images/avatar-icon.png";
pub const DEFAULT_SMOOTHIE_IMAGE_PATH: &str = "/images/ChocolateSupreme.jpg";

/// Fixed price attached to the default-smoothie fallback record.
pub const DEFAULT_PRICE_USD: f64 = 12.95;

pub const GREETING_PREFIX: &str = "Hi there! Based on what you're looking for, ";

/// Used when the reply is empty or whitespace and we still owe the customer
/// a recommendation.
pub const CANNED_RECOMMENDATION: &str = "I recommend trying our signature Chocolate Supreme \
smoothie. It's packed with protein and delicious chocolate flavor.";

/// Explanation length caps, in Unicode scalar values.
pub const SENTINEL_EXPLANATION_MAX_CHARS: usize = 150;
pub const DEFAULT_EXPLANATION_MAX_CHARS: usize = 100;
