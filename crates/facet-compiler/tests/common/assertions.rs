//! Assertion helpers for compiled queries.

use serde_json::Value;

use facet_compiler::types::{BoolQuery, Occur};

/// Renders every clause of one list.
pub fn rendered(query: &BoolQuery, occur: Occur) -> Vec<Value> {
    query.clauses(occur).iter().map(|c| c.to_value()).collect()
}

/// Asserts that a list holds exactly the expected rendered clauses, in order.
pub fn assert_clauses(query: &BoolQuery, occur: Occur, expected: &[Value]) {
    let actual = rendered(query, occur);
    assert_eq!(
        actual,
        expected,
        "Clause mismatch in '{}': expected {:?}, got {:?}",
        occur.as_str(),
        expected,
        actual
    );
}

/// Asserts that a list contains the expected rendered clause.
pub fn assert_has_clause(query: &BoolQuery, occur: Occur, expected: &Value) {
    let actual = rendered(query, occur);
    assert!(
        actual.contains(expected),
        "Expected '{}' to contain {}, got {:?}",
        occur.as_str(),
        expected,
        actual
    );
}

/// Asserts that no top-level clause targets the field.
pub fn assert_no_clause_on(query: &BoolQuery, field: &str) {
    for occur in [Occur::Filter, Occur::Must, Occur::MustNot, Occur::Should] {
        for clause in query.clauses(occur) {
            assert_ne!(
                clause.field(),
                Some(field),
                "Unexpected clause on '{}' in '{}': {:?}",
                field,
                occur.as_str(),
                clause
            );
        }
    }
}

/// Asserts that only the given list holds clauses.
pub fn assert_only(query: &BoolQuery, occur: Occur) {
    for other in [Occur::Filter, Occur::Must, Occur::MustNot, Occur::Should] {
        if other != occur {
            assert!(
                query.clauses(other).is_empty(),
                "Expected '{}' to be empty, got {:?}",
                other.as_str(),
                query.clauses(other)
            );
        }
    }
}
