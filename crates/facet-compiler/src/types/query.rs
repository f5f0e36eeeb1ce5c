//! Query DSL values produced by the compiler.
//!
//! Clauses are kept as typed values so compiled queries can be compared
//! structurally; [`CompiledQuery::body`] renders them into Elasticsearch
//! Query DSL JSON.

use std::fmt;

use serde_json::{Map, Value, json};

use crate::collections::Collection;

/// Bound operator of a range clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeOp {
    /// Strictly greater than.
    Gt,
    /// Greater than or equal.
    Gte,
    /// Strictly less than.
    Lt,
    /// Less than or equal.
    Lte,
}

impl RangeOp {
    /// Returns the Query DSL key for this bound.
    pub fn as_str(&self) -> &'static str {
        match self {
            RangeOp::Gt => "gt",
            RangeOp::Gte => "gte",
            RangeOp::Lt => "lt",
            RangeOp::Lte => "lte",
        }
    }

    /// Returns true if the bound value itself is included.
    pub fn is_inclusive(&self) -> bool {
        matches!(self, RangeOp::Gte | RangeOp::Lte)
    }
}

impl fmt::Display for RangeOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Operator of a single-field match clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchOperator {
    /// Every term must match.
    And,
    /// Any term may match.
    Or,
}

impl MatchOperator {
    /// Returns the Query DSL value.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchOperator::And => "and",
            MatchOperator::Or => "or",
        }
    }
}

/// Which list of a boolean query a clause belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occur {
    /// Required, does not affect scoring.
    Filter,
    /// Required and scored.
    Must,
    /// Must not match.
    MustNot,
    /// Optional and scored.
    Should,
}

impl Occur {
    /// Returns the Query DSL key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Occur::Filter => "filter",
            Occur::Must => "must",
            Occur::MustNot => "must_not",
            Occur::Should => "should",
        }
    }
}

/// One atomic constraint or scoring contributor.
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    /// Exact match of a single value.
    Term {
        /// Indexed field.
        field: &'static str,
        /// Value to match.
        value: Value,
    },
    /// Set membership.
    Terms {
        /// Indexed field.
        field: &'static str,
        /// Accepted values.
        values: Vec<Value>,
    },
    /// The field has a value.
    Exists {
        /// Indexed field.
        field: &'static str,
    },
    /// A single range bound.
    Range {
        /// Indexed field.
        field: &'static str,
        /// Bound operator.
        op: RangeOp,
        /// Bound value.
        value: Value,
    },
    /// Analyzed match on one field.
    Match {
        /// Indexed field.
        field: &'static str,
        /// Query text.
        query: String,
        /// Term operator.
        operator: MatchOperator,
    },
    /// Fuzzy analyzed match across several fields.
    MultiMatch {
        /// Indexed fields, in order.
        fields: Vec<&'static str>,
        /// Query text.
        query: String,
        /// Fuzziness setting.
        fuzziness: String,
    },
    /// A nested boolean query.
    Bool(BoolQuery),
}

impl Clause {
    /// Builds a `term` clause.
    pub fn term(field: &'static str, value: impl Into<Value>) -> Self {
        Clause::Term {
            field,
            value: value.into(),
        }
    }

    /// Builds a `range` clause with a single bound.
    pub fn range(field: &'static str, op: RangeOp, value: impl Into<Value>) -> Self {
        Clause::Range {
            field,
            op,
            value: value.into(),
        }
    }

    /// Returns the field this clause targets, if it targets exactly one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Clause::Term { field, .. }
            | Clause::Terms { field, .. }
            | Clause::Exists { field }
            | Clause::Range { field, .. }
            | Clause::Match { field, .. } => Some(*field),
            Clause::MultiMatch { .. } | Clause::Bool(_) => None,
        }
    }

    /// Renders the clause as Query DSL.
    pub fn to_value(&self) -> Value {
        match self {
            Clause::Term { field, value } => json!({ "term": { *field: value } }),
            Clause::Terms { field, values } => json!({ "terms": { *field: values } }),
            Clause::Exists { field } => json!({ "exists": { "field": field } }),
            Clause::Range { field, op, value } => json!({
                "range": { *field: { op.as_str(): value } }
            }),
            Clause::Match {
                field,
                query,
                operator,
            } => json!({
                "match": {
                    *field: {
                        "query": query,
                        "operator": operator.as_str()
                    }
                }
            }),
            Clause::MultiMatch {
                fields,
                query,
                fuzziness,
            } => json!({
                "multi_match": {
                    "query": query,
                    "fields": fields,
                    "fuzziness": fuzziness
                }
            }),
            Clause::Bool(query) => json!({ "bool": query.to_value() }),
        }
    }
}

/// A boolean query with four always-present clause lists.
///
/// Builders return one of these as their contribution; the assembler merges
/// contributions into the root query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoolQuery {
    /// Required, unscored.
    pub filter: Vec<Clause>,
    /// Excluded.
    pub must_not: Vec<Clause>,
    /// Required, scored.
    pub must: Vec<Clause>,
    /// Optional, scored.
    pub should: Vec<Clause>,
    /// Minimum number of `should` clauses that must match.
    pub minimum_should_match: Option<u32>,
}

impl BoolQuery {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a disjunction group requiring at least one alternative.
    ///
    /// Returns `None` when there are no alternatives.
    pub fn any_of(alternatives: Vec<Clause>) -> Option<Self> {
        if alternatives.is_empty() {
            return None;
        }
        Some(Self {
            should: alternatives,
            minimum_should_match: Some(1),
            ..Self::default()
        })
    }

    /// Appends a clause to the list selected by `occur`.
    pub fn push(&mut self, occur: Occur, clause: Clause) {
        self.clauses_mut(occur).push(clause);
    }

    /// Returns the list selected by `occur`.
    pub fn clauses(&self, occur: Occur) -> &[Clause] {
        match occur {
            Occur::Filter => &self.filter,
            Occur::Must => &self.must,
            Occur::MustNot => &self.must_not,
            Occur::Should => &self.should,
        }
    }

    fn clauses_mut(&mut self, occur: Occur) -> &mut Vec<Clause> {
        match occur {
            Occur::Filter => &mut self.filter,
            Occur::Must => &mut self.must,
            Occur::MustNot => &mut self.must_not,
            Occur::Should => &mut self.should,
        }
    }

    /// Appends every clause of `other`, preserving order.
    pub fn merge(&mut self, other: BoolQuery) {
        self.filter.extend(other.filter);
        self.must_not.extend(other.must_not);
        self.must.extend(other.must);
        self.should.extend(other.should);
        self.minimum_should_match = match (self.minimum_should_match, other.minimum_should_match)
        {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
    }

    /// Total number of top-level clauses.
    pub fn len(&self) -> usize {
        self.filter.len() + self.must_not.len() + self.must.len() + self.should.len()
    }

    /// Returns true if no list holds a clause.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Renders the inner object of a `bool` query. Empty lists are omitted.
    pub fn to_value(&self) -> Value {
        let mut body = Map::new();
        for occur in [Occur::Filter, Occur::Must, Occur::MustNot, Occur::Should] {
            let clauses = self.clauses(occur);
            if !clauses.is_empty() {
                body.insert(
                    occur.as_str().to_string(),
                    Value::Array(clauses.iter().map(Clause::to_value).collect()),
                );
            }
        }
        if let Some(minimum) = self.minimum_should_match {
            body.insert("minimum_should_match".to_string(), json!(minimum));
        }
        Value::Object(body)
    }
}

/// Backend execution controls copied verbatim from the options.
///
/// A slot is only filled when the caller supplied it; the backend's own
/// defaults apply otherwise.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NativeParams {
    /// Result offset (`from`).
    pub offset: Option<u64>,
    /// Page size (`size`).
    pub limit: Option<u64>,
    /// Sort specification (`sort`).
    pub sort: Option<Value>,
    /// Stored field selection (`_source`).
    pub fields: Option<Value>,
    /// Aggregation specification (`aggs`).
    pub aggregations: Option<Value>,
    /// Whether to compute exact totals (`track_total_hits`).
    pub track_total_hits: Option<bool>,
}

impl NativeParams {
    /// Returns true if no slot is filled.
    pub fn is_empty(&self) -> bool {
        *self == NativeParams::default()
    }

    fn write_into(&self, body: &mut Map<String, Value>) {
        if let Some(offset) = self.offset {
            body.insert("from".to_string(), json!(offset));
        }
        if let Some(limit) = self.limit {
            body.insert("size".to_string(), json!(limit));
        }
        if let Some(ref sort) = self.sort {
            body.insert("sort".to_string(), sort.clone());
        }
        if let Some(ref fields) = self.fields {
            body.insert("_source".to_string(), fields.clone());
        }
        if let Some(ref aggregations) = self.aggregations {
            body.insert("aggs".to_string(), aggregations.clone());
        }
        if let Some(track) = self.track_total_hits {
            body.insert("track_total_hits".to_string(), json!(track));
        }
    }
}

/// The final, immutable output of a compile call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledQuery {
    collection: Collection,
    index: String,
    query: BoolQuery,
    native: NativeParams,
}

impl CompiledQuery {
    pub(crate) fn new(
        collection: Collection,
        index: String,
        query: BoolQuery,
        native: NativeParams,
    ) -> Self {
        Self {
            collection,
            index,
            query,
            native,
        }
    }

    /// The collection that was searched.
    pub fn collection(&self) -> Collection {
        self.collection
    }

    /// The index to send the query to.
    pub fn index(&self) -> &str {
        &self.index
    }

    /// The root boolean query.
    pub fn query(&self) -> &BoolQuery {
        &self.query
    }

    /// The native parameter slots.
    pub fn native(&self) -> &NativeParams {
        &self.native
    }

    /// Renders the full search request body.
    pub fn body(&self) -> Value {
        let mut body = Map::new();
        body.insert("query".to_string(), json!({ "bool": self.query.to_value() }));
        self.native.write_into(&mut body);
        Value::Object(body)
    }

    /// Renders a body for counting matches only.
    ///
    /// Paging, sorting and field selection are dropped, `size` is zero and
    /// totals are tracked exactly. Aggregations are kept.
    pub fn count_body(&self) -> Value {
        let mut body = self.body();
        if let Some(obj) = body.as_object_mut() {
            obj.remove("from");
            obj.remove("sort");
            obj.remove("_source");
        }
        body["size"] = json!(0);
        body["track_total_hits"] = json!(true);
        body
    }
}
