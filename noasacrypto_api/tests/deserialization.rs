use noasacrypto_api::types::{Category, ReasonResult};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_reason_full() {
    let json = load_fixture("reason.json");
    let reason: ReasonResult = serde_json::from_str(&json).unwrap();
    assert_eq!(
        reason.reason,
        "Their smart contract has more backdoors than a Pentagon server"
    );
    assert_eq!(reason.category, "Rug Check");
    assert_eq!(reason.category_id, "rug-check");
    assert_eq!(reason.emoji, "🚩");
    assert_eq!(reason.known_category(), Some(Category::RugCheck));
}

#[test]
fn deserialize_ignores_unknown_fields() {
    let json = load_fixture("reason_extra_fields.json");
    let reason: ReasonResult = serde_json::from_str(&json).unwrap();
    assert_eq!(reason.category_id, "gas-excuses");
    assert_eq!(reason.known_category(), Some(Category::GasExcuses));
}

#[test]
fn deserialize_missing_emoji_returns_error() {
    let json = load_fixture("reason_missing_emoji.json");
    let result = serde_json::from_str::<ReasonResult>(&json);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("emoji"));
}

#[test]
fn deserialize_null_field_returns_error() {
    let json = r#"{"reason":"x","category":null,"categoryId":"z","emoji":"🚩"}"#;
    assert!(serde_json::from_str::<ReasonResult>(json).is_err());
}

#[test]
fn unknown_category_id_is_kept_verbatim() {
    let json = r#"{"reason":"x","category":"y","categoryId":"brand-new","emoji":"🆕"}"#;
    let reason: ReasonResult = serde_json::from_str(json).unwrap();
    assert_eq!(reason.category_id, "brand-new");
    assert_eq!(reason.known_category(), None);
}

#[test]
fn serialize_uses_camel_case_keys() {
    let reason = ReasonResult {
        reason: "x".to_string(),
        category: "y".to_string(),
        category_id: "z".to_string(),
        emoji: "🚩".to_string(),
    };
    let value = serde_json::to_value(&reason).unwrap();
    assert_eq!(value["categoryId"], "z");
    assert!(value.get("category_id").is_none());
}
