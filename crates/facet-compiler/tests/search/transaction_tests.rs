//! Tests for purchase search.

use chrono::{NaiveDate, TimeZone, Utc};
use serde_json::json;

use facet_compiler::types::{IdRef, Occur};
use facet_compiler::{Collection, CompileError, OptionValue, SearchOptions};

use crate::common::{
    assert_clauses, assert_has_clause, assert_no_clause_on, assert_only, compile, compile_one,
    create_compiler, entity,
};

const TX: Collection = Collection::Transactions;

// ============================================================================
// Identity Tests
// ============================================================================

#[test]
fn test_seller_accepts_raw_id_and_entity() {
    let raw = compile_one(TX, "seller", 42);
    let by_entity = compile_one(TX, "seller", entity(42));
    assert_eq!(raw, by_entity);
    assert_clauses(
        raw.query(),
        Occur::Filter,
        &[json!({ "terms": { "seller_id": [42] } })],
    );
    assert_only(raw.query(), Occur::Filter);
}

#[test]
fn test_seller_rejects_list() {
    let err = create_compiler()
        .transactions(&SearchOptions::new().with("seller", vec![1, 2]))
        .unwrap_err();
    assert!(matches!(err, CompileError::InvalidShape { .. }));
    assert_eq!(err.option(), Some("seller"));
}

#[test]
fn test_product_scalar_is_wrapped() {
    let compiled = compile_one(TX, "product", "prod_9");
    assert_clauses(
        compiled.query(),
        Occur::Filter,
        &[json!({ "terms": { "product_id": ["prod_9"] } })],
    );
}

#[test]
fn test_mixed_entities_and_ids_in_list() {
    let compiled = compile_one(
        TX,
        "variant",
        vec![entity(12), IdRef::from(4), entity(12)],
    );
    assert_clauses(
        compiled.query(),
        Occur::Filter,
        &[json!({ "terms": { "variant_ids": [4, 12] } })],
    );
}

#[test]
fn test_location_filters() {
    let options = SearchOptions::new()
        .with("country", vec!["US", "DE"])
        .with("state", "CA");
    let compiled = compile(TX, &options);
    assert_clauses(
        compiled.query(),
        Occur::Filter,
        &[
            json!({ "terms": { "country_or_ip_country": ["DE", "US"] } }),
            json!({ "terms": { "purchase_state": ["CA"] } }),
        ],
    );
}

#[test]
fn test_any_of_products_or_variants() {
    let options = SearchOptions::new()
        .with("any_of_products", vec![1, 2])
        .with("any_of_variants", vec![30]);
    let compiled = compile(TX, &options);
    assert_clauses(
        compiled.query(),
        Occur::Filter,
        &[json!({
            "bool": {
                "should": [
                    { "terms": { "product_id": [1, 2] } },
                    { "terms": { "variant_ids": [30] } }
                ],
                "minimum_should_match": 1
            }
        })],
    );
}

#[test]
fn test_any_of_single_alternative() {
    let compiled = compile_one(TX, "any_of_variants", vec![5]);
    assert_clauses(
        compiled.query(),
        Occur::Filter,
        &[json!({
            "bool": {
                "should": [{ "terms": { "variant_ids": [5] } }],
                "minimum_should_match": 1
            }
        })],
    );
}

// ============================================================================
// Exclusion Tests
// ============================================================================

#[test]
fn test_exclude_purchaser_per_id() {
    let compiled = compile_one(TX, "exclude_purchaser", vec![entity(8), IdRef::from(3)]);
    assert_clauses(
        compiled.query(),
        Occur::MustNot,
        &[
            json!({ "term": { "purchaser_id": 3 } }),
            json!({ "term": { "purchaser_id": 8 } }),
        ],
    );
    assert_only(compiled.query(), Occur::MustNot);
}

#[test]
fn test_include_and_exclude_same_field() {
    let options = SearchOptions::new()
        .with("product", vec![1, 2])
        .with("exclude_product", vec![2]);
    let compiled = compile(TX, &options);
    assert_clauses(
        compiled.query(),
        Occur::Filter,
        &[json!({ "terms": { "product_id": [1, 2] } })],
    );
    assert_clauses(
        compiled.query(),
        Occur::MustNot,
        &[json!({ "term": { "product_id": 2 } })],
    );
}

// ============================================================================
// Flag Tests
// ============================================================================

#[test]
fn test_marker_flags() {
    let options = SearchOptions::new()
        .with("refunded", true)
        .with("preorder", false);
    let compiled = compile(TX, &options);
    assert_clauses(
        compiled.query(),
        Occur::Filter,
        &[json!({ "term": { "flags": "refunded" } })],
    );
    assert_clauses(
        compiled.query(),
        Occur::MustNot,
        &[json!({ "term": { "flags": "preorder" } })],
    );
}

#[test]
fn test_chargedback_and_recommended() {
    let options = SearchOptions::new()
        .with("chargedback", true)
        .with("recommended", "false");
    let compiled = compile(TX, &options);
    assert_clauses(
        compiled.query(),
        Occur::Filter,
        &[json!({ "exists": { "field": "chargedback_at" } })],
    );
    assert_clauses(
        compiled.query(),
        Occur::MustNot,
        &[json!({ "term": { "is_recommended": true } })],
    );
}

#[test]
fn test_licensed_is_scored() {
    let compiled = compile_one(TX, "licensed", true);
    assert_clauses(
        compiled.query(),
        Occur::Must,
        &[json!({ "exists": { "field": "license_serial" } })],
    );
    assert_only(compiled.query(), Occur::Must);

    let compiled = compile_one(TX, "licensed", false);
    assert_clauses(
        compiled.query(),
        Occur::MustNot,
        &[json!({ "exists": { "field": "license_serial" } })],
    );
}

#[test]
fn test_flag_rejects_number() {
    let err = create_compiler()
        .transactions(&SearchOptions::new().with("archived", 1))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid value for search option 'archived': expected tri-state boolean, found integer"
    );
}

// ============================================================================
// Switch Tests
// ============================================================================

#[test]
fn test_all_switches_on() {
    let options = SearchOptions::new()
        .with("exclude_giftees", true)
        .with("exclude_bundle_items", true)
        .with("exclude_commission_completions", true);
    let compiled = compile(TX, &options);
    assert_clauses(
        compiled.query(),
        Occur::MustNot,
        &[
            json!({ "exists": { "field": "gift_giver_purchase_id" } }),
            json!({ "exists": { "field": "bundle_purchase_id" } }),
            json!({ "term": { "flags": "commission_completion" } }),
        ],
    );
    assert_only(compiled.query(), Occur::MustNot);
}

// ============================================================================
// Range Tests
// ============================================================================

#[test]
fn test_price_bounds() {
    let options = SearchOptions::new()
        .with("price_greater_than", 500)
        .with("price_less_than", 2500);
    let compiled = compile(TX, &options);
    assert_clauses(
        compiled.query(),
        Occur::Filter,
        &[
            json!({ "range": { "price_cents": { "gt": 500 } } }),
            json!({ "range": { "price_cents": { "lt": 2500 } } }),
        ],
    );
}

#[test]
fn test_price_rejects_text() {
    let err = create_compiler()
        .transactions(&SearchOptions::new().with("price_less_than", "cheap"))
        .unwrap_err();
    assert!(matches!(err, CompileError::InvalidShape { .. }));
}

#[test]
fn test_created_bounds_from_typed_dates() {
    let options = SearchOptions::new()
        .with(
            "created_on_or_after",
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        )
        .with(
            "created_on_or_before",
            Utc.with_ymd_and_hms(2024, 3, 31, 23, 59, 59).unwrap(),
        );
    let compiled = compile(TX, &options);
    assert_clauses(
        compiled.query(),
        Occur::Filter,
        &[
            json!({ "range": { "created_at": { "gte": "2024-03-01T00:00:00.000Z" } } }),
            json!({ "range": { "created_at": { "lte": "2024-03-31T23:59:59.000Z" } } }),
        ],
    );
}

#[test]
fn test_created_bound_offset_is_normalized() {
    let compiled = compile_one(TX, "created_before", "2024-06-01T02:00:00+02:00");
    assert_clauses(
        compiled.query(),
        Occur::Filter,
        &[json!({ "range": { "created_at": { "lt": "2024-06-01T00:00:00.000Z" } } })],
    );
}

#[test]
fn test_unparsable_date() {
    let err = create_compiler()
        .transactions(&SearchOptions::new().with("created_after", "last tuesday"))
        .unwrap_err();
    assert_eq!(
        err,
        CompileError::InvalidDate {
            option: "created_after".to_string(),
            value: "last tuesday".to_string(),
        }
    );
}

// ============================================================================
// Seller Query Tests
// ============================================================================

#[test]
fn test_seller_query_plain_text() {
    let compiled = compile_one(TX, "seller_query", "Blue Mug");
    assert_clauses(
        compiled.query(),
        Occur::Must,
        &[json!({
            "bool": {
                "should": [{
                    "multi_match": {
                        "query": "blue mug",
                        "fields": ["full_name", "product_name", "email"],
                        "fuzziness": "AUTO"
                    }
                }],
                "minimum_should_match": 1
            }
        })],
    );
    assert_only(compiled.query(), Occur::Must);
}

#[test]
fn test_seller_query_combined_with_filters() {
    let options = SearchOptions::new()
        .with("seller", 1)
        .with("seller_query", "\"Jane Doe\"")
        .with("licensed", true);
    let compiled = compile(TX, &options);
    assert_eq!(compiled.query().must.len(), 2);
    assert_has_clause(
        compiled.query(),
        Occur::Must,
        &json!({ "match": { "full_name": { "query": "jane doe", "operator": "and" } } }),
    );
    assert_has_clause(
        compiled.query(),
        Occur::Must,
        &json!({ "exists": { "field": "license_serial" } }),
    );
    assert_no_clause_on(compiled.query(), "email.raw");
}

#[test]
fn test_seller_query_empty_quotes_are_inert() {
    let options = SearchOptions::new()
        .with("seller", 1)
        .with("seller_query", " \"  \" ");
    assert_eq!(
        compile(TX, &options),
        compile(TX, &SearchOptions::new().with("seller", 1))
    );
}

#[test]
fn test_seller_query_several_quoted_segments() {
    let compiled = compile_one(TX, "seller_query", "\"Jane\" or \"John@X.com\"");
    let text = "\"jane\" or \"john@x.com\"";
    assert_clauses(
        compiled.query(),
        Occur::Must,
        &[json!({
            "bool": {
                "should": [
                    {
                        "multi_match": {
                            "query": text,
                            "fields": ["full_name", "product_name", "email"],
                            "fuzziness": "AUTO"
                        }
                    },
                    { "term": { "email.raw": text } },
                    { "term": { "paypal_email.raw": text } }
                ],
                "minimum_should_match": 1
            }
        })],
    );
}

#[test]
fn test_seller_query_rejects_number() {
    let err = create_compiler()
        .transactions(&SearchOptions::new().with("seller_query", 12))
        .unwrap_err();
    assert!(matches!(err, CompileError::InvalidShape { .. }));
}

// ============================================================================
// Schema Boundary Tests
// ============================================================================

#[test]
fn test_message_option_unknown_here() {
    let err = create_compiler()
        .transactions(&SearchOptions::new().with("published", true))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown search option 'published' for transactions"
    );
}

#[test]
fn test_explicit_null_matches_omission() {
    let options = SearchOptions::new()
        .with("seller", 5)
        .with("archived", OptionValue::Null);
    assert_eq!(
        compile(TX, &options),
        compile(TX, &SearchOptions::new().with("seller", 5))
    );
}
