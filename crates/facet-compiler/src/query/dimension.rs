//! Filter dimensions.
//!
//! A collection is described by an ordered list of dimensions. Each dimension
//! names the options it consumes and the builder that turns them into clauses.

use crate::config::CompilerConfig;
use crate::schema::{NormalizedOptions, OptionSpec};
use crate::types::BoolQuery;

use super::handlers::exclusion::{self, ExclusionFilter};
use super::handlers::flag::{self, FlagFilter, SwitchFilter};
use super::handlers::identity::{self, AnyOfFilter, IdentityFilter};
use super::handlers::range::{self, DateRange, NumericRange};
use super::handlers::text::{self, BuyerText, SellerText};

/// One logical filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// Field restricted to a set of identifiers.
    Identity(IdentityFilter),
    /// At least one of several identity restrictions.
    AnyOf(AnyOfFilter),
    /// Identifiers that must not match.
    Exclusion(ExclusionFilter),
    /// Tri-state flag.
    Flag(FlagFilter),
    /// Boolean switch.
    Switch(SwitchFilter),
    /// Exclusive numeric bounds.
    NumericRange(NumericRange),
    /// Temporal bounds.
    DateRange(DateRange),
    /// Seller-side relevance text.
    SellerText(SellerText),
    /// Buyer-facing fuzzy text.
    BuyerText(BuyerText),
}

impl Dimension {
    /// The options this dimension consumes.
    pub fn options(&self) -> Vec<OptionSpec> {
        match self {
            Dimension::Identity(f) => f.options(),
            Dimension::AnyOf(f) => f.options(),
            Dimension::Exclusion(f) => f.options(),
            Dimension::Flag(f) => f.options(),
            Dimension::Switch(f) => f.options(),
            Dimension::NumericRange(r) => r.options(),
            Dimension::DateRange(r) => r.options(),
            Dimension::SellerText(t) => t.options(),
            Dimension::BuyerText(t) => t.options(),
        }
    }

    /// Builds this dimension's contribution.
    pub fn build(&self, options: &NormalizedOptions, config: &CompilerConfig) -> BoolQuery {
        match self {
            Dimension::Identity(f) => identity::build(f, options),
            Dimension::AnyOf(f) => identity::build_any_of(f, options),
            Dimension::Exclusion(f) => exclusion::build(f, options),
            Dimension::Flag(f) => flag::build(f, options),
            Dimension::Switch(f) => flag::build_switch(f, options),
            Dimension::NumericRange(r) => range::build_numeric(r, options),
            Dimension::DateRange(r) => range::build_date(r, options),
            Dimension::SellerText(t) => text::build_seller(t, options, &config.fuzziness),
            Dimension::BuyerText(t) => text::build_buyer(t, options, &config.fuzziness),
        }
    }
}
