//! Integration coverage for the externally tagged serde representation.

use linear_result::{Result, Void, err, err_void, ok};
use serde_json::json;

#[test]
fn carriers_serialize_with_side_keys() -> std::result::Result<(), serde_json::Error> {
    let success: Result<u32, String> = ok(10).into();
    let failure: Result<u32, String> = err(String::from("bad input")).into();
    let empty: Result<u32, Void> = err_void().into();

    assert_eq!(serde_json::to_value(&success)?, json!({ "ok": 10 }));
    assert_eq!(serde_json::to_value(&failure)?, json!({ "err": "bad input" }));
    assert_eq!(serde_json::to_value(&empty)?, json!({ "err": null }));

    Ok(())
}

#[test]
fn deserialization_selects_the_tagged_side() -> std::result::Result<(), serde_json::Error> {
    let parsed: Result<Vec<u8>, String> = serde_json::from_str(r#"{"err":"truncated"}"#)?;
    assert!(parsed.is_err());
    assert_eq!(parsed.err(), "truncated");

    let parsed: Result<Vec<u8>, String> = serde_json::from_str(r#"{"ok":[1,2]}"#)?;
    assert_eq!(parsed.ok_or(Vec::new()), vec![1, 2]);

    Ok(())
}

#[test]
fn deserialization_rejects_untagged_payloads() {
    let parsed = serde_json::from_str::<Result<u8, u8>>("7");
    assert!(parsed.is_err());

    let parsed = serde_json::from_str::<Result<u8, u8>>(r#"{"maybe":7}"#);
    assert!(parsed.is_err());
}
