//! Free-text relevance builders.
//!
//! Two independent builders exist. The seller-side builder understands quoted
//! phrases and adds exact-match alternatives when the input looks like an
//! email address or a license serial. The buyer-facing builder always runs a
//! plain fuzzy match over its fields.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::schema::{NormalizedOptions, OptionShape, OptionSpec};
use crate::types::{BoolQuery, Clause, MatchOperator, Occur};

/// License keys are four hyphen-separated groups of eight hex digits.
static LICENSE_SERIAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{8}-[0-9a-f]{8}-[0-9a-f]{8}$")
        .expect("license serial pattern is valid")
});

/// Seller-side free text over transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SellerText {
    /// Option name.
    pub option: &'static str,
    /// Field matched by a quoted phrase.
    pub phrase_field: &'static str,
    /// Fields of the fuzzy match, in order.
    pub fuzzy_fields: &'static [&'static str],
    /// Raw email fields checked when the input contains `@`.
    pub email_fields: &'static [&'static str],
    /// License serial field.
    pub serial_field: &'static str,
}

/// Buyer-facing free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuyerText {
    /// Option name.
    pub option: &'static str,
    /// Fields of the fuzzy match, in order.
    pub fuzzy_fields: &'static [&'static str],
}

impl SellerText {
    pub(crate) fn options(&self) -> Vec<OptionSpec> {
        vec![OptionSpec::new(self.option, OptionShape::Text)]
    }
}

impl BuyerText {
    pub(crate) fn options(&self) -> Vec<OptionSpec> {
        vec![OptionSpec::new(self.option, OptionShape::Text)]
    }
}

/// Trims and lower-cases the input; blank input yields `None`.
fn prepare(raw: Option<&str>) -> Option<String> {
    let text = raw?.trim().to_lowercase();
    if text.is_empty() { None } else { Some(text) }
}

/// Returns the trimmed inner text if the whole input is one double-quoted
/// phrase. Input with further quotes inside is not a single phrase.
fn quoted_phrase(text: &str) -> Option<&str> {
    let inner = text.strip_prefix('"')?.strip_suffix('"')?;
    if inner.contains('"') {
        return None;
    }
    Some(inner.trim())
}

fn fuzzy_match(fields: &[&'static str], query: &str, fuzziness: &str) -> Clause {
    Clause::MultiMatch {
        fields: fields.to_vec(),
        query: query.to_string(),
        fuzziness: fuzziness.to_string(),
    }
}

/// Builds the seller-side free-text contribution.
pub fn build_seller(spec: &SellerText, options: &NormalizedOptions, fuzziness: &str) -> BoolQuery {
    let mut contribution = BoolQuery::new();
    let Some(text) = prepare(options.text(spec.option)) else {
        return contribution;
    };

    if let Some(phrase) = quoted_phrase(&text) {
        if phrase.is_empty() {
            tracing::trace!("Seller query is an empty quoted phrase");
            return contribution;
        }
        tracing::trace!("Seller query is a quoted phrase: '{}'", phrase);
        contribution.push(
            Occur::Must,
            Clause::Match {
                field: spec.phrase_field,
                query: phrase.to_string(),
                operator: MatchOperator::And,
            },
        );
        return contribution;
    }

    let mut alternatives = vec![fuzzy_match(spec.fuzzy_fields, &text, fuzziness)];

    if text.contains('@') {
        tracing::trace!("Seller query looks like an email address");
        for field in spec.email_fields.iter().copied() {
            alternatives.push(Clause::term(field, text.as_str()));
        }
    }

    if LICENSE_SERIAL.is_match(&text) {
        tracing::trace!("Seller query looks like a license serial");
        alternatives.push(Clause::term(spec.serial_field, text.to_uppercase()));
    }

    if let Some(group) = BoolQuery::any_of(alternatives) {
        contribution.push(Occur::Must, Clause::Bool(group));
    }
    contribution
}

/// Builds the buyer-facing free-text contribution.
pub fn build_buyer(spec: &BuyerText, options: &NormalizedOptions, fuzziness: &str) -> BoolQuery {
    let mut contribution = BoolQuery::new();
    let Some(text) = prepare(options.text(spec.option)) else {
        return contribution;
    };

    if let Some(group) = BoolQuery::any_of(vec![fuzzy_match(spec.fuzzy_fields, &text, fuzziness)])
    {
        contribution.push(Occur::Must, Clause::Bool(group));
    }
    contribution
}
