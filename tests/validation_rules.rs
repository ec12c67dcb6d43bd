//! Validation Rule Tests
//!
//! Payload rules for clients and assets, checked through the public
//! model API:
//! - Required fields must be present
//! - Types are exact; `null` is never "absent"
//! - Name length and email syntax are enforced for clients
//! - `status` resolves to a concrete value

use clientfolio::model::{asset_schema, ClientRules, NewAsset, NewClient};
use clientfolio::schema::SchemaValidator;
use serde_json::json;

// =============================================================================
// Clients
// =============================================================================

/// Omitted status becomes active; explicit status is kept.
#[test]
fn test_status_resolution() {
    let rules = ClientRules::default();

    let omitted = NewClient::from_document(
        &json!({ "name": "Maria", "email": "maria@example.com" }),
        &rules,
    )
    .unwrap();
    assert!(omitted.status);

    let inactive = NewClient::from_document(
        &json!({ "name": "Maria", "email": "maria@example.com", "status": false }),
        &rules,
    )
    .unwrap();
    assert!(!inactive.status);
}

/// Emails without a valid address syntax fail on the email field only.
#[test]
fn test_email_syntax() {
    let rules = ClientRules::default();
    for email in [
        "not-an-email",
        "a@",
        "a@b",
        "user@localhost",
        "@example.com",
        "two@@example.com",
        "",
    ] {
        let err = NewClient::from_document(&json!({ "name": "Maria", "email": email }), &rules)
            .unwrap_err();
        assert_eq!(err.violations().len(), 1, "email {:?}", email);
        assert_eq!(err.violations()[0].field, "email");
    }

    for email in ["maria@example.com", "maria.silva+inv@banco.com.br"] {
        assert!(
            NewClient::from_document(&json!({ "name": "Maria", "email": email }), &rules).is_ok(),
            "email {:?}",
            email
        );
    }
}

/// Name length boundary follows the configured minimum.
#[test]
fn test_name_length_boundary() {
    let rules = ClientRules { name_min_length: 3 };
    let doc = |name: &str| json!({ "name": name, "email": "x@example.com" });

    assert!(NewClient::from_document(&doc("Ana"), &rules).is_ok());
    let err = NewClient::from_document(&doc("Al"), &rules).unwrap_err();
    assert_eq!(err.violations()[0].message, "Name must be at least 3 characters.");
}

/// Null status is rejected rather than defaulted.
#[test]
fn test_null_status_rejected() {
    let err = NewClient::from_document(
        &json!({ "name": "Maria", "email": "maria@example.com", "status": null }),
        &ClientRules::default(),
    )
    .unwrap_err();
    assert_eq!(err.violations()[0].field, "status");
}

// =============================================================================
// Assets
// =============================================================================

/// Integral values are accepted as money amounts; clientId must be integral.
#[test]
fn test_asset_numeric_rules() {
    let ok = NewAsset::from_document(&json!({ "name": "CDB", "value": 100, "clientId": 1 })).unwrap();
    assert_eq!(ok.value, 100.0);

    let err = NewAsset::from_document(&json!({ "name": "CDB", "value": 1.5, "clientId": 1.5 }))
        .unwrap_err();
    assert_eq!(err.violations().len(), 1);
    assert_eq!(err.violations()[0].field, "clientId");
}

/// Asset validation is deterministic.
#[test]
fn test_asset_validation_is_deterministic() {
    let schema = asset_schema();
    let validator = SchemaValidator::new(&schema);
    let doc = json!({ "value": null });

    let first = validator.validate_document(&doc).unwrap_err();
    for _ in 0..100 {
        assert_eq!(validator.validate_document(&doc).unwrap_err(), first);
    }
}
