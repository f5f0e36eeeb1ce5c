//! Tests for native parameter pass-through.

use serde_json::json;

use facet_compiler::types::NativeParams;
use facet_compiler::{Collection, CompileError, SearchOptions};

use crate::common::{compile, create_compiler};

#[test]
fn test_paging_and_sorting() {
    let options = SearchOptions::new()
        .with("seller", 1)
        .with("offset", 40)
        .with("limit", 20)
        .with("sort", json!([{ "created_at": { "order": "desc" } }]))
        .with("fields", vec!["id", "price_cents"]);
    let body = compile(Collection::Transactions, &options).body();
    assert_eq!(body["from"], json!(40));
    assert_eq!(body["size"], json!(20));
    assert_eq!(body["sort"], json!([{ "created_at": { "order": "desc" } }]));
    assert_eq!(body["_source"], json!(["id", "price_cents"]));
    assert!(body.get("aggs").is_none());
    assert!(body.get("track_total_hits").is_none());
}

#[test]
fn test_aggregations_and_totals() {
    let aggs = json!({ "revenue": { "sum": { "field": "price_cents" } } });
    let options = SearchOptions::new()
        .with("aggregations", aggs.clone())
        .with("track_total_hits", true);
    let compiled = compile(Collection::Transactions, &options);
    assert_eq!(
        compiled.native(),
        &NativeParams {
            aggregations: Some(aggs.clone()),
            track_total_hits: Some(true),
            ..Default::default()
        }
    );
    assert_eq!(compiled.body()["aggs"], aggs);
}

#[test]
fn test_count_body() {
    let options = SearchOptions::new()
        .with("published", true)
        .with("offset", 10)
        .with("limit", 10)
        .with("sort", json!(["published_at"]))
        .with("fields", vec!["id"])
        .with("track_total_hits", false);
    let compiled = compile(Collection::Messages, &options);
    assert_eq!(
        compiled.count_body(),
        json!({
            "query": {
                "bool": {
                    "filter": [{ "exists": { "field": "published_at" } }]
                }
            },
            "size": 0,
            "track_total_hits": true
        })
    );
}

#[test]
fn test_negative_limit_rejected() {
    let err = create_compiler()
        .messages(&SearchOptions::new().with("limit", -1))
        .unwrap_err();
    assert!(matches!(err, CompileError::InvalidShape { .. }));
    assert_eq!(err.option(), Some("limit"));
}
