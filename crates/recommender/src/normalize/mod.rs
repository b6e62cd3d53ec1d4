//! Response normalization: an ordered cascade of parsing strategies.
//!
//! Each strategy is strictly more lenient and lower-fidelity than the one
//! before it; the first to produce a record wins. Recoverable anomalies are
//! absorbed by falling through to the next strategy; only true exhaustion
//! surfaces, and then as a single opaque error.

pub mod builder;
pub mod extract;
pub mod intent;
pub mod keywords;

use serde_json::Value;

use chat_core::{ChatTurn, Intent, MenuCatalog, Recommendation};

use crate::constants::{
    AVATAR_IMAGE_PATH, CANNED_RECOMMENDATION, DEFAULT_EXPLANATION_MAX_CHARS, DEFAULT_PRICE_USD,
    DEFAULT_SMOOTHIE_ID, DEFAULT_SMOOTHIE_IMAGE_PATH, DEFAULT_SMOOTHIE_NAME, GENERAL_CHAT_ID,
    GENERAL_CHAT_NAME, GENERAL_TYPE, GREETING_PREFIX, NEEDS_INFO_ID, NEEDS_INFO_NAME,
    SENTINEL_EXPLANATION_MAX_CHARS, SMOOTHIE_TYPE,
};
use crate::error::RecommenderError;

const SENTENCE_ENDINGS: &[char] = &['.', '!', '?'];

/// Convert a raw completion reply into exactly one record. History is used
/// only to derive the default intent when the reply omits or mis-states one.
pub fn normalize(
    raw: &str,
    history: &[ChatTurn],
    catalog: &MenuCatalog,
) -> Result<Recommendation, RecommenderError> {
    let fallback_intent = intent::history_default(history);

    let record = strict_json(raw, fallback_intent)
        .or_else(|| embedded_json(raw, fallback_intent))
        .or_else(|| keyword_match(raw, fallback_intent, catalog))
        .or_else(|| intent_signal(raw, fallback_intent));

    record.ok_or_else(|| {
        log::error!("All normalization strategies failed");
        RecommenderError::Processing
    })
}

/// Strategy 1: the entire reply is a JSON object of the record shape.
fn strict_json(raw: &str, fallback_intent: Intent) -> Option<Recommendation> {
    let value: Value = serde_json::from_str(raw).ok()?;
    let object = value.as_object()?;
    match builder::from_object(object, fallback_intent) {
        Ok(record) => Some(record),
        Err(err) => {
            log::debug!("Whole-reply JSON has an invalid shape: {err}");
            None
        }
    }
}

/// Strategy 2: JSON wrapped in commentary. Take the outermost brace span;
/// if it fails to parse, retry with single quotes replaced by double quotes.
fn embedded_json(raw: &str, fallback_intent: Intent) -> Option<Recommendation> {
    let span = extract::extract_json_span(raw)?;
    let value = serde_json::from_str::<Value>(span)
        .or_else(|_| serde_json::from_str::<Value>(&extract::fix_single_quotes(span)))
        .ok()?;
    let object = value.as_object()?;
    match builder::from_object(object, fallback_intent) {
        Ok(record) => Some(record),
        Err(err) => {
            log::debug!("Extracted JSON span has an invalid shape: {err}");
            None
        }
    }
}

/// Strategy 3: no JSON at all, but the reply names a known item. Build the
/// record from the catalog entry; the reply text becomes the explanation.
fn keyword_match(raw: &str, fallback_intent: Intent, catalog: &MenuCatalog) -> Option<Recommendation> {
    let id = keywords::match_known_keyword(raw)?;
    let Some(item) = catalog.find_item(id) else {
        log::warn!("Keyword matched '{id}' but the catalog has no such item");
        return None;
    };

    let mut intent = fallback_intent;
    if keywords::has_follow_up_marker(raw) {
        intent = Intent::FollowUp;
    }
    if keywords::has_smoothie_request_marker(raw) {
        intent = Intent::SmoothieRequest;
    }

    Some(Recommendation {
        intent,
        id: item.id.clone(),
        name: item.name.clone(),
        item_type: item.item_type.clone(),
        price_usd: Some(item.price_usd),
        requires_add_on: true,
        image_path: item.image_path.clone(),
        explanation: raw.to_string(),
    })
}

/// Strategy 4: derive an intent from explicit markers (or the history
/// default) and construct the matching sentinel record. Always succeeds.
fn intent_signal(raw: &str, fallback_intent: Intent) -> Option<Recommendation> {
    let intent = if keywords::has_general_chat_marker(raw) {
        Intent::GeneralChat
    } else if keywords::has_follow_up_marker(raw) {
        Intent::FollowUp
    } else if keywords::has_needs_info_marker(raw) {
        Intent::NeedsInfo
    } else {
        fallback_intent
    };

    Some(match intent {
        Intent::GeneralChat => general_chat_record(raw),
        Intent::NeedsInfo => needs_info_record(raw),
        product_intent => default_smoothie_record(raw, product_intent),
    })
}

fn general_chat_record(raw: &str) -> Recommendation {
    let explanation = truncate_chars(raw, SENTINEL_EXPLANATION_MAX_CHARS);
    Recommendation {
        intent: Intent::GeneralChat,
        id: GENERAL_CHAT_ID.to_string(),
        name: GENERAL_CHAT_NAME.to_string(),
        item_type: GENERAL_TYPE.to_string(),
        price_usd: None,
        requires_add_on: false,
        image_path: AVATAR_IMAGE_PATH.to_string(),
        explanation: force_ending(&explanation, SENTENCE_ENDINGS, '.'),
    }
}

fn needs_info_record(raw: &str) -> Recommendation {
    let explanation = truncate_chars(raw, SENTINEL_EXPLANATION_MAX_CHARS);
    Recommendation {
        intent: Intent::NeedsInfo,
        id: NEEDS_INFO_ID.to_string(),
        name: NEEDS_INFO_NAME.to_string(),
        item_type: GENERAL_TYPE.to_string(),
        price_usd: None,
        requires_add_on: false,
        image_path: AVATAR_IMAGE_PATH.to_string(),
        explanation: force_ending(&explanation, &['?'], '?'),
    }
}

fn default_smoothie_record(raw: &str, intent: Intent) -> Recommendation {
    let explanation = if raw.trim().is_empty() {
        format!("{GREETING_PREFIX}{CANNED_RECOMMENDATION}")
    } else {
        let additional = truncate_chars(raw, DEFAULT_EXPLANATION_MAX_CHARS);
        let additional = force_ending(additional.trim(), SENTENCE_ENDINGS, '.');
        format!("{GREETING_PREFIX}{additional}")
    };

    Recommendation {
        intent,
        id: DEFAULT_SMOOTHIE_ID.to_string(),
        name: DEFAULT_SMOOTHIE_NAME.to_string(),
        item_type: SMOOTHIE_TYPE.to_string(),
        price_usd: Some(DEFAULT_PRICE_USD),
        requires_add_on: true,
        image_path: DEFAULT_SMOOTHIE_IMAGE_PATH.to_string(),
        explanation,
    }
}

/// First `max_chars` Unicode scalar values, never a byte slice.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Keep `text` as-is when its right-trimmed form already ends with one of
/// `allowed`; otherwise append `terminator` to the right-trimmed text.
fn force_ending(text: &str, allowed: &[char], terminator: char) -> String {
    let trimmed = text.trim_end();
    if trimmed.ends_with(allowed) {
        text.to_string()
    } else {
        format!("{trimmed}{terminator}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        let text = "crème brûlée".repeat(20);
        let truncated = truncate_chars(&text, 150);
        assert_eq!(truncated.chars().count(), 150);
    }

    #[test]
    fn test_truncate_shorter_input_unchanged() {
        assert_eq!(truncate_chars("short", 150), "short");
    }

    #[test]
    fn test_force_ending_appends_after_trim() {
        assert_eq!(force_ending("hello  ", SENTENCE_ENDINGS, '.'), "hello.");
        assert_eq!(force_ending("really?  ", &['?'], '?'), "really?  ");
    }

    #[test]
    fn test_force_ending_keeps_existing_punctuation() {
        assert_eq!(force_ending("done!", SENTENCE_ENDINGS, '.'), "done!");
        assert_eq!(force_ending("sure thing", &['?'], '?'), "sure thing?");
    }
}
