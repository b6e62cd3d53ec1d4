//! Fixed keyword table of known item names, and the intent markers the
//! cascade scans raw replies for.
//!
//! Uppercase markers are matched case-sensitively (they are wire-format
//! tokens); spelled-out phrases are matched case-insensitively.

/// Known item names mapped to catalog ids. First match wins, in this order.
pub const SMOOTHIE_KEYWORDS: [(&str, &str); 9] = [
    ("chocolate supreme", "chocolate_supreme"),
    ("blueberry bliss", "blueberry_bliss"),
    ("detox greens", "detox_greens"),
    ("blue moon", "blue_moon"),
    ("great breakfast", "great_breakfast"),
    ("muscle up", "muscle_up"),
    ("flax master", "flax_master"),
    ("power shred", "power_shred"),
    ("slim down", "slim_down"),
];

/// Catalog id of the first known item name mentioned in `text`.
pub fn match_known_keyword(text: &str) -> Option<&'static str> {
    let lowered = text.to_lowercase();
    SMOOTHIE_KEYWORDS
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, id)| *id)
}

pub fn has_general_chat_marker(text: &str) -> bool {
    text.contains("GENERAL_CHAT") || text.to_lowercase().contains("general chat")
}

pub fn has_follow_up_marker(text: &str) -> bool {
    text.contains("FOLLOW_UP") || text.to_lowercase().contains("follow up")
}

pub fn has_needs_info_marker(text: &str) -> bool {
    text.contains("NEEDS_INFO") || text.to_lowercase().contains("need more information")
}

pub fn has_smoothie_request_marker(text: &str) -> bool {
    text.contains("SMOOTHIE_REQUEST") || text.to_lowercase().contains("recommend")
}
