//! Integration tests for search criteria assembly.
//!
//! Builds complete transaction-style searches through the public API and checks the request
//! body the gateway receives.

use gateway_sdk::{
    GatewayError, SearchField,
    search::{
        KeyValueNodeBuilder, MultipleValueNode, MultipleValueNodeBuilder, RangeNodeBuilder,
        SearchQuery, TextNode, TextNodeBuilder,
    },
};
use serde_json::json;

#[test]
fn test_full_search_request_body() {
    let statuses = MultipleValueNodeBuilder::with_whitelist(
        "status",
        ["authorized", "settled", "submitted_for_settlement", "voided"],
    );

    let query = SearchQuery::new()
        .with(&TextNodeBuilder::new("order_id").is_equal("order-1234"))
        .with(&TextNode::new("customer_email").starts_with("name").ends_with("@email.com"))
        .with(&RangeNodeBuilder::new("amount").between("10.00", "100.00"))
        .with(&RangeNodeBuilder::new("created_at").at_least("2026-10-01T00:00:00Z"))
        .with(&statuses.in_list(["settled", "voided"]).unwrap())
        .with(&KeyValueNodeBuilder::new("refund").is_not_equal(true));

    assert_eq!(
        query.to_request_body(),
        json!({"search": {
            "order_id": {"is": "order-1234"},
            "customer_email": {"starts_with": "name", "ends_with": "@email.com"},
            "amount": {"min": "10.00", "max": "100.00"},
            "created_at": {"min": "2026-10-01T00:00:00Z"},
            "status": ["settled", "voided"],
            "refund": false,
        }})
    );
}

#[test]
fn test_range_preserves_min_max_order_on_the_wire() {
    let body = SearchQuery::new()
        .with(&RangeNodeBuilder::new("amount").between(1, 2))
        .to_request_body();

    assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"search":{"amount":{"min":1,"max":2}}}"#);
}

#[test]
fn test_whitelist_rejection_reports_every_offender() {
    let payment_methods =
        MultipleValueNodeBuilder::with_whitelist("payment_methods", ["credit_card", "paypal"]);

    let err = payment_methods
        .in_list(["paypal", "fake_money", "venmo", "fake_money"])
        .unwrap_err();

    match err {
        GatewayError::InvalidArgument { field, values } => {
            assert_eq!(field, "payment_methods");
            assert_eq!(values, vec!["fake_money".to_owned(), "venmo".to_owned()]);
        }
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
}

#[test]
fn test_unrestricted_field_accepts_anything() {
    let node = MultipleValueNodeBuilder::new("merchant_account_id")
        .in_list(["any", "value", "at all"])
        .unwrap();

    assert_eq!(node.to_param(), json!(["any", "value", "at all"]));
}

#[test]
fn test_accumulating_fields_can_be_refined() {
    let base = TextNode::new("email").contains("example");
    let narrowed = base.ends_with(".org");

    let broad = SearchQuery::new().with(&base);
    let narrow = SearchQuery::new().with(&narrowed);

    assert_eq!(broad.get("email"), Some(&json!({"contains": "example"})));
    assert_eq!(narrow.get("email"), Some(&json!({"contains": "example", "ends_with": ".org"})));

    let sources = MultipleValueNode::with_whitelist("source", ["api", "control_panel", "recurring"]);
    let api_only = sources.in_list(["api"]).unwrap();
    let recurring_only = api_only.in_list(["recurring"]).unwrap();

    assert_eq!(api_only.to_param(), json!(["api"]));
    assert_eq!(recurring_only.to_param(), json!(["recurring"]));
    assert!(recurring_only.in_list(["unknown"]).is_err());
}

#[test]
fn test_fields_are_interchangeable_behind_trait_objects() {
    let fields: Vec<Box<dyn SearchField>> = vec![
        Box::new(KeyValueNodeBuilder::new("refund").equals(true)),
        Box::new(TextNode::new("first_name").is_equal("Ada")),
        Box::new(MultipleValueNode::new("type").is_equal("sale").unwrap()),
    ];

    let mut query = SearchQuery::new();
    for field in &fields {
        query.add(field.as_ref());
    }

    assert_eq!(
        query.to_params(),
        json!({"refund": true, "first_name": {"is": "Ada"}, "type": ["sale"]})
    );
}
