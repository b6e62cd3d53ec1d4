//! Validated construction of a `Recommendation` from loosely-typed JSON.
//!
//! Model output parsed into a `serde_json` object goes through per-field
//! validation rather than implicit structural typing, so a half-right shape
//! fails with a distinct error and the cascade can fall through.

use serde_json::{Map, Value};
use thiserror::Error;

use chat_core::{Intent, Recommendation};

#[derive(Debug, Error, PartialEq)]
pub enum ShapeError {
    #[error("missing required field '{0}'")]
    Missing(&'static str),

    #[error("field '{0}' has the wrong type")]
    WrongType(&'static str),

    #[error("field '{0}' must be non-empty")]
    Empty(&'static str),
}

fn required_string(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<String, ShapeError> {
    let value = object.get(field).ok_or(ShapeError::Missing(field))?;
    value
        .as_str()
        .map(str::to_string)
        .ok_or(ShapeError::WrongType(field))
}

fn non_empty(value: String, field: &'static str) -> Result<String, ShapeError> {
    if value.trim().is_empty() {
        Err(ShapeError::Empty(field))
    } else {
        Ok(value)
    }
}

/// Build a record from a parsed JSON object. A missing or invalid `intent`
/// is replaced with `fallback_intent`; every other required field must be
/// present and well-typed. The price is dropped for non-product intents to
/// keep the presence invariant regardless of what the model emitted.
pub fn from_object(
    object: &Map<String, Value>,
    fallback_intent: Intent,
) -> Result<Recommendation, ShapeError> {
    let intent = object
        .get("intent")
        .and_then(Value::as_str)
        .and_then(Intent::parse)
        .unwrap_or(fallback_intent);

    let id = non_empty(required_string(object, "id")?, "id")?;
    let name = non_empty(required_string(object, "name")?, "name")?;
    let item_type = required_string(object, "type")?;
    let image_path = required_string(object, "image_path")?;
    let explanation = non_empty(required_string(object, "explanation")?, "explanation")?;

    let requires_add_on = object
        .get("requiresAddOn")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let price_usd = if intent.is_product() {
        object.get("price_usd").and_then(Value::as_f64)
    } else {
        None
    };

    Ok(Recommendation {
        intent,
        id,
        name,
        item_type,
        price_usd,
        requires_add_on,
        image_path,
        explanation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object_from(json: &str) -> Map<String, Value> {
        serde_json::from_str(json).unwrap()
    }

    const FULL: &str = r#"{
        "intent": "SMOOTHIE_REQUEST",
        "id": "blueberry_bliss",
        "name": "Blueberry Bliss",
        "type": "smoothie",
        "price_usd": 11.95,
        "requiresAddOn": true,
        "image_path": "/images/BlueberryBliss.jpg",
        "explanation": "A berry classic."
    }"#;

    #[test]
    fn test_full_shape_builds_as_is() {
        let rec = from_object(&object_from(FULL), Intent::GeneralChat).unwrap();
        assert_eq!(rec.intent, Intent::SmoothieRequest);
        assert_eq!(rec.id, "blueberry_bliss");
        assert_eq!(rec.price_usd, Some(11.95));
        assert!(rec.requires_add_on);
    }

    #[test]
    fn test_missing_intent_takes_fallback() {
        let mut object = object_from(FULL);
        object.remove("intent");
        let rec = from_object(&object, Intent::FollowUp).unwrap();
        assert_eq!(rec.intent, Intent::FollowUp);
    }

    #[test]
    fn test_invalid_intent_takes_fallback() {
        let mut object = object_from(FULL);
        object.insert("intent".to_string(), Value::String("BANANA".to_string()));
        let rec = from_object(&object, Intent::SmoothieRequest).unwrap();
        assert_eq!(rec.intent, Intent::SmoothieRequest);
    }

    #[test]
    fn test_missing_required_field_is_distinct_error() {
        let mut object = object_from(FULL);
        object.remove("name");
        assert_eq!(
            from_object(&object, Intent::SmoothieRequest),
            Err(ShapeError::Missing("name"))
        );
    }

    #[test]
    fn test_wrong_type_is_distinct_error() {
        let mut object = object_from(FULL);
        object.insert("explanation".to_string(), Value::Bool(true));
        assert_eq!(
            from_object(&object, Intent::SmoothieRequest),
            Err(ShapeError::WrongType("explanation"))
        );
    }

    #[test]
    fn test_empty_id_rejected() {
        let mut object = object_from(FULL);
        object.insert("id".to_string(), Value::String("  ".to_string()));
        assert_eq!(
            from_object(&object, Intent::SmoothieRequest),
            Err(ShapeError::Empty("id"))
        );
    }

    #[test]
    fn test_requires_add_on_defaults_to_false() {
        let mut object = object_from(FULL);
        object.remove("requiresAddOn");
        let rec = from_object(&object, Intent::SmoothieRequest).unwrap();
        assert!(!rec.requires_add_on);
    }

    #[test]
    fn test_integer_price_accepted() {
        let mut object = object_from(FULL);
        object.insert("price_usd".to_string(), Value::from(12));
        let rec = from_object(&object, Intent::SmoothieRequest).unwrap();
        assert_eq!(rec.price_usd, Some(12.0));
    }

    #[test]
    fn test_price_dropped_for_non_product_intent() {
        let mut object = object_from(FULL);
        object.insert(
            "intent".to_string(),
            Value::String("GENERAL_CHAT".to_string()),
        );
        let rec = from_object(&object, Intent::SmoothieRequest).unwrap();
        assert_eq!(rec.intent, Intent::GeneralChat);
        assert_eq!(rec.price_usd, None);
    }
}
