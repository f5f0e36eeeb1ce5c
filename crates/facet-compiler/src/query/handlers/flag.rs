//! Tri-state flags and boolean switches.

use serde_json::{Value, json};

use crate::schema::{NormalizedOptions, OptionShape, OptionSpec};
use crate::types::{BoolQuery, Clause, Occur};

/// A literal a flag condition compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literal {
    /// Boolean literal.
    Bool(bool),
    /// String literal (also a tag marker).
    Str(&'static str),
}

impl Literal {
    fn to_value(self) -> Value {
        match self {
            Literal::Bool(b) => json!(b),
            Literal::Str(s) => json!(s),
        }
    }
}

/// The condition a flag asserts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// The field has a value.
    Exists(&'static str),
    /// The field equals a literal. A marker among a record's tags is an
    /// equality on the tags field.
    Equals(&'static str, Literal),
}

impl Condition {
    /// The clause testing this condition.
    pub fn clause(&self) -> Clause {
        match *self {
            Condition::Exists(field) => Clause::Exists { field },
            Condition::Equals(field, literal) => Clause::term(field, literal.to_value()),
        }
    }
}

/// A tri-state flag.
///
/// `true` asserts the condition in `when_true`, `false` excludes it, absent
/// adds nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagFilter {
    /// Option name.
    pub option: &'static str,
    /// The underlying condition.
    pub condition: Condition,
    /// Where the positive clause goes (`Filter` or `Must`).
    pub when_true: Occur,
}

/// A boolean switch: `true` adds the clause to `occur`, anything else is inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchFilter {
    /// Option name.
    pub option: &'static str,
    /// The underlying condition.
    pub condition: Condition,
    /// Where the clause goes when switched on.
    pub occur: Occur,
}

impl FlagFilter {
    pub(crate) fn options(&self) -> Vec<OptionSpec> {
        vec![OptionSpec::new(self.option, OptionShape::Flag)]
    }
}

impl SwitchFilter {
    pub(crate) fn options(&self) -> Vec<OptionSpec> {
        vec![OptionSpec::new(self.option, OptionShape::Switch)]
    }
}

/// Builds the contribution of a tri-state flag.
pub fn build(filter: &FlagFilter, options: &NormalizedOptions) -> BoolQuery {
    let mut contribution = BoolQuery::new();
    match options.flag(filter.option) {
        Some(true) => contribution.push(filter.when_true, filter.condition.clause()),
        Some(false) => contribution.push(Occur::MustNot, filter.condition.clause()),
        None => {}
    }
    contribution
}

/// Builds the contribution of a switch.
pub fn build_switch(filter: &SwitchFilter, options: &NormalizedOptions) -> BoolQuery {
    let mut contribution = BoolQuery::new();
    if options.switch(filter.option) {
        contribution.push(filter.occur, filter.condition.clause());
    }
    contribution
}
