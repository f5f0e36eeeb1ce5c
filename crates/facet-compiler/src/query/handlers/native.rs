//! Native parameter pass-through.

use crate::schema::{NormalizedOptions, OptionShape, OptionSpec};
use crate::types::NativeParams;

/// Result offset.
pub const OFFSET: &str = "offset";
/// Page size.
pub const LIMIT: &str = "limit";
/// Sort specification.
pub const SORT: &str = "sort";
/// Stored field selection.
pub const FIELDS: &str = "fields";
/// Aggregation specification.
pub const AGGREGATIONS: &str = "aggregations";
/// Exact total count flag.
pub const TRACK_TOTAL_HITS: &str = "track_total_hits";

/// The whitelist of pass-through options shared by every collection.
pub const OPTIONS: [OptionSpec; 6] = [
    OptionSpec::new(OFFSET, OptionShape::Count),
    OptionSpec::new(LIMIT, OptionShape::Count),
    OptionSpec::new(SORT, OptionShape::Document),
    OptionSpec::new(FIELDS, OptionShape::Document),
    OptionSpec::new(AGGREGATIONS, OptionShape::Document),
    OptionSpec::new(TRACK_TOTAL_HITS, OptionShape::Flag),
];

/// Copies every supplied native option; unsupplied slots stay empty.
pub fn extract(options: &NormalizedOptions) -> NativeParams {
    NativeParams {
        offset: options.count(OFFSET),
        limit: options.count(LIMIT),
        sort: options.document(SORT).cloned(),
        fields: options.document(FIELDS).cloned(),
        aggregations: options.document(AGGREGATIONS).cloned(),
        track_total_hits: options.flag(TRACK_TOTAL_HITS),
    }
}
