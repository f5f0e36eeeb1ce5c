//! Numeric and temporal range filters.
//!
//! Every supplied bound becomes its own `range` clause in `filter`; a bound
//! that was not supplied is never synthesized.

use serde_json::json;

use crate::schema::{NormalizedOptions, OptionShape, OptionSpec};
use crate::types::{BoolQuery, Clause, Occur, RangeOp};

/// Strictly exclusive numeric bounds on one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericRange {
    /// Indexed field.
    pub field: &'static str,
    /// Option for the exclusive lower bound.
    pub greater_than: &'static str,
    /// Option for the exclusive upper bound.
    pub less_than: &'static str,
}

/// Four independently settable bounds on one temporal field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Indexed field.
    pub field: &'static str,
    /// Exclusive lower bound option.
    pub after: &'static str,
    /// Inclusive lower bound option.
    pub on_or_after: &'static str,
    /// Exclusive upper bound option.
    pub before: &'static str,
    /// Inclusive upper bound option.
    pub on_or_before: &'static str,
}

impl NumericRange {
    pub(crate) fn options(&self) -> Vec<OptionSpec> {
        vec![
            OptionSpec::new(self.greater_than, OptionShape::Number),
            OptionSpec::new(self.less_than, OptionShape::Number),
        ]
    }
}

impl DateRange {
    fn bounds(&self) -> [(&'static str, RangeOp); 4] {
        [
            (self.after, RangeOp::Gt),
            (self.on_or_after, RangeOp::Gte),
            (self.before, RangeOp::Lt),
            (self.on_or_before, RangeOp::Lte),
        ]
    }

    pub(crate) fn options(&self) -> Vec<OptionSpec> {
        self.bounds()
            .into_iter()
            .map(|(option, _)| OptionSpec::new(option, OptionShape::DateTime))
            .collect()
    }
}

/// Builds the contribution of a numeric range.
pub fn build_numeric(range: &NumericRange, options: &NormalizedOptions) -> BoolQuery {
    let mut contribution = BoolQuery::new();
    for (option, op) in [
        (range.greater_than, RangeOp::Gt),
        (range.less_than, RangeOp::Lt),
    ] {
        if let Some(bound) = options.number(option) {
            contribution.push(Occur::Filter, Clause::range(range.field, op, json!(bound)));
        }
    }
    contribution
}

/// Builds the contribution of a date range.
pub fn build_date(range: &DateRange, options: &NormalizedOptions) -> BoolQuery {
    let mut contribution = BoolQuery::new();
    for (option, op) in range.bounds() {
        if let Some(bound) = options.datetime(option) {
            contribution.push(Occur::Filter, Clause::range(range.field, op, bound));
        }
    }
    contribution
}
