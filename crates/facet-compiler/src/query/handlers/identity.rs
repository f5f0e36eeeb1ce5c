//! Identity and membership filters.

use crate::schema::{NormalizedOptions, OptionShape, OptionSpec};
use crate::types::{BoolQuery, Clause, Occur, SearchId};

/// Restricts a field to the identifiers supplied in one option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityFilter {
    /// Option name.
    pub option: &'static str,
    /// Declared option shape (`Ref` or `RefList`).
    pub shape: OptionShape,
    /// Indexed field.
    pub field: &'static str,
}

/// One alternative of an [`AnyOfFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alternative {
    /// Option name.
    pub option: &'static str,
    /// Indexed field.
    pub field: &'static str,
}

/// A union across several identity options: at least one must match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnyOfFilter {
    /// Alternatives, in order.
    pub alternatives: &'static [Alternative],
}

impl IdentityFilter {
    pub(crate) fn options(&self) -> Vec<OptionSpec> {
        vec![OptionSpec::new(self.option, self.shape)]
    }
}

impl AnyOfFilter {
    pub(crate) fn options(&self) -> Vec<OptionSpec> {
        self.alternatives
            .iter()
            .map(|alt| OptionSpec::new(alt.option, OptionShape::RefList))
            .collect()
    }
}

/// Builds a `terms` clause, or nothing for an empty list.
pub(crate) fn terms_clause(field: &'static str, ids: &[SearchId]) -> Option<Clause> {
    if ids.is_empty() {
        return None;
    }
    Some(Clause::Terms {
        field,
        values: ids.iter().map(SearchId::to_value).collect(),
    })
}

/// Builds the contribution of an identity filter.
pub fn build(filter: &IdentityFilter, options: &NormalizedOptions) -> BoolQuery {
    let mut contribution = BoolQuery::new();
    if let Some(clause) = terms_clause(filter.field, options.ids(filter.option)) {
        contribution.push(Occur::Filter, clause);
    }
    contribution
}

/// Builds the contribution of an any-of union.
///
/// The group is mandatory as a unit; inside it at least one alternative must
/// match.
pub fn build_any_of(filter: &AnyOfFilter, options: &NormalizedOptions) -> BoolQuery {
    let alternatives = filter
        .alternatives
        .iter()
        .filter_map(|alt| terms_clause(alt.field, options.ids(alt.option)))
        .collect();

    let mut contribution = BoolQuery::new();
    if let Some(group) = BoolQuery::any_of(alternatives) {
        contribution.push(Occur::Filter, Clause::Bool(group));
    }
    contribution
}
