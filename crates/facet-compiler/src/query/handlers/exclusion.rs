//! Exclusion filters.

use crate::schema::{NormalizedOptions, OptionShape, OptionSpec};
use crate::types::{BoolQuery, Clause, Occur};

/// Excludes records whose field matches any supplied identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExclusionFilter {
    /// Option name (`exclude_*`).
    pub option: &'static str,
    /// Indexed field.
    pub field: &'static str,
}

impl ExclusionFilter {
    pub(crate) fn options(&self) -> Vec<OptionSpec> {
        vec![OptionSpec::new(self.option, OptionShape::RefList)]
    }
}

/// Builds one `must_not` term clause per identifier.
pub fn build(filter: &ExclusionFilter, options: &NormalizedOptions) -> BoolQuery {
    let mut contribution = BoolQuery::new();
    for id in options.ids(filter.option) {
        contribution.push(Occur::MustNot, Clause::term(filter.field, id.to_value()));
    }
    contribution
}
