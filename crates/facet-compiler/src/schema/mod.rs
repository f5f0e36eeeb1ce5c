//! Option schema and normalizer.
//!
//! Every collection declares the full set of option names it recognizes, each
//! with an [`OptionShape`]. The schema holds the inert default for each name,
//! so normalization always produces a complete [`NormalizedOptions`]: every
//! recognized key has a value, and an omitted option is indistinguishable from
//! one explicitly set to its default.
//!
//! Unknown option names are rejected with [`CompileError::UnknownOption`].

mod temporal;

use std::collections::BTreeMap;
use std::fmt;

use serde_json::{Number, Value};

use crate::collections::Collection;
use crate::error::{CompileError, CompileResult};
use crate::types::{OptionValue, SearchId, SearchOptions};

pub use temporal::{canonical_timestamp, day_start, parse_timestamp};

/// The declared shape of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionShape {
    /// A single identifier or entity reference.
    Ref,
    /// One or more identifiers or entity references.
    RefList,
    /// Tri-state boolean: absent, true, or false.
    Flag,
    /// Plain boolean where only `true` has an effect.
    Switch,
    /// A finite number.
    Number,
    /// A point in time.
    DateTime,
    /// Free text.
    Text,
    /// A non-negative integer.
    Count,
    /// An opaque JSON document.
    Document,
}

impl OptionShape {
    /// The inert value for this shape.
    pub fn inert(&self) -> Normalized {
        match self {
            OptionShape::Ref | OptionShape::RefList => Normalized::Ids(Vec::new()),
            OptionShape::Flag => Normalized::Flag(None),
            OptionShape::Switch => Normalized::Switch(false),
            OptionShape::Number => Normalized::Number(None),
            OptionShape::DateTime => Normalized::DateTime(None),
            OptionShape::Text => Normalized::Text(None),
            OptionShape::Count => Normalized::Count(None),
            OptionShape::Document => Normalized::Document(None),
        }
    }
}

impl fmt::Display for OptionShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionShape::Ref => write!(f, "identifier or entity"),
            OptionShape::RefList => write!(f, "list of identifiers or entities"),
            OptionShape::Flag => write!(f, "tri-state boolean"),
            OptionShape::Switch => write!(f, "boolean"),
            OptionShape::Number => write!(f, "number"),
            OptionShape::DateTime => write!(f, "date/time"),
            OptionShape::Text => write!(f, "text"),
            OptionShape::Count => write!(f, "non-negative integer"),
            OptionShape::Document => write!(f, "document"),
        }
    }
}

/// A recognized option name and its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    /// Option name.
    pub name: &'static str,
    /// Declared shape.
    pub shape: OptionShape,
}

impl OptionSpec {
    /// Creates a spec.
    pub const fn new(name: &'static str, shape: OptionShape) -> Self {
        Self { name, shape }
    }
}

/// A normalized option value.
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized {
    /// Sorted, de-duplicated identifiers. Empty means unconstrained.
    Ids(Vec<SearchId>),
    /// Tri-state flag.
    Flag(Option<bool>),
    /// Boolean switch.
    Switch(bool),
    /// Number.
    Number(Option<Number>),
    /// Canonical UTC timestamp string.
    DateTime(Option<String>),
    /// Raw text.
    Text(Option<String>),
    /// Non-negative integer.
    Count(Option<u64>),
    /// Pass-through document.
    Document(Option<Value>),
}

/// The recognized options of one collection with their inert defaults.
///
/// Built once per collection and shared read-only.
#[derive(Debug, Clone)]
pub struct OptionSchema {
    collection: Collection,
    shapes: BTreeMap<&'static str, OptionShape>,
    defaults: BTreeMap<&'static str, Normalized>,
}

impl OptionSchema {
    /// Builds a schema from option specs. A repeated name keeps its last shape.
    pub fn new(collection: Collection, specs: impl IntoIterator<Item = OptionSpec>) -> Self {
        let shapes: BTreeMap<&'static str, OptionShape> =
            specs.into_iter().map(|spec| (spec.name, spec.shape)).collect();
        let defaults = shapes
            .iter()
            .map(|(name, shape)| (*name, shape.inert()))
            .collect();
        Self {
            collection,
            shapes,
            defaults,
        }
    }

    /// The collection this schema belongs to.
    pub fn collection(&self) -> Collection {
        self.collection
    }

    /// Returns the declared shape of an option.
    pub fn shape(&self, name: &str) -> Option<OptionShape> {
        self.shapes.get(name).copied()
    }

    /// Returns true if the option name is recognized.
    pub fn recognizes(&self, name: &str) -> bool {
        self.shapes.contains_key(name)
    }

    /// Recognized option names in order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.shapes.keys().copied()
    }

    /// Number of recognized options.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns true if the schema recognizes no option.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// The inert default table.
    pub fn defaults(&self) -> &BTreeMap<&'static str, Normalized> {
        &self.defaults
    }

    /// Merges caller options over the defaults.
    ///
    /// Fails on the first unknown name, shape mismatch or unparsable date.
    pub fn normalize(&self, options: &SearchOptions) -> CompileResult<NormalizedOptions> {
        let mut values = self.defaults.clone();

        for (name, value) in options.iter() {
            let Some((key, shape)) = self.shapes.get_key_value(name) else {
                tracing::debug!(
                    "Rejected unknown search option '{}' for {}",
                    name,
                    self.collection
                );
                return Err(CompileError::UnknownOption {
                    collection: self.collection,
                    option: name.to_string(),
                });
            };
            values.insert(*key, coerce(name, *shape, value)?);
        }

        Ok(NormalizedOptions { values })
    }
}

/// A complete option map: every recognized key has a value.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedOptions {
    values: BTreeMap<&'static str, Normalized>,
}

impl NormalizedOptions {
    /// Returns the normalized value of an option.
    pub fn get(&self, name: &str) -> Option<&Normalized> {
        self.values.get(name)
    }

    /// Identifiers of an identity-shaped option. Empty when unconstrained.
    pub fn ids(&self, name: &str) -> &[SearchId] {
        match self.values.get(name) {
            Some(Normalized::Ids(ids)) => ids,
            _ => &[],
        }
    }

    /// State of a tri-state flag.
    pub fn flag(&self, name: &str) -> Option<bool> {
        match self.values.get(name) {
            Some(Normalized::Flag(state)) => *state,
            _ => None,
        }
    }

    /// Whether a switch is on.
    pub fn switch(&self, name: &str) -> bool {
        matches!(self.values.get(name), Some(Normalized::Switch(true)))
    }

    /// A numeric option.
    pub fn number(&self, name: &str) -> Option<&Number> {
        match self.values.get(name) {
            Some(Normalized::Number(n)) => n.as_ref(),
            _ => None,
        }
    }

    /// A date option in canonical wire format.
    pub fn datetime(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(Normalized::DateTime(dt)) => dt.as_deref(),
            _ => None,
        }
    }

    /// A text option.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(Normalized::Text(text)) => text.as_deref(),
            _ => None,
        }
    }

    /// A count option.
    pub fn count(&self, name: &str) -> Option<u64> {
        match self.values.get(name) {
            Some(Normalized::Count(count)) => *count,
            _ => None,
        }
    }

    /// A pass-through document option.
    pub fn document(&self, name: &str) -> Option<&Value> {
        match self.values.get(name) {
            Some(Normalized::Document(doc)) => doc.as_ref(),
            _ => None,
        }
    }
}

/// Coerces one caller value into its declared shape.
fn coerce(name: &str, shape: OptionShape, value: &OptionValue) -> CompileResult<Normalized> {
    if value.is_null() {
        return Ok(shape.inert());
    }

    let mismatch = || CompileError::InvalidShape {
        option: name.to_string(),
        expected: shape,
        found: value.kind(),
    };

    match shape {
        OptionShape::Ref => {
            let id = scalar_id(value).ok_or_else(mismatch)?;
            let ids = if is_blank(&id) { Vec::new() } else { vec![id] };
            Ok(Normalized::Ids(ids))
        }
        OptionShape::RefList => {
            let mut ids = match value {
                OptionValue::List(items) => items
                    .iter()
                    .filter(|item| !item.is_null())
                    .map(|item| scalar_id(item).ok_or_else(mismatch))
                    .collect::<CompileResult<Vec<_>>>()?,
                scalar => vec![scalar_id(scalar).ok_or_else(mismatch)?],
            };
            ids.retain(|id| !is_blank(id));
            ids.sort();
            ids.dedup();
            Ok(Normalized::Ids(ids))
        }
        OptionShape::Flag => boolean(value).map(|b| Normalized::Flag(Some(b))).ok_or_else(mismatch),
        OptionShape::Switch => boolean(value).map(Normalized::Switch).ok_or_else(mismatch),
        OptionShape::Number => match value {
            OptionValue::Int(i) => Ok(Normalized::Number(Some(Number::from(*i)))),
            OptionValue::Float(f) => Number::from_f64(*f)
                .map(|n| Normalized::Number(Some(n)))
                .ok_or_else(mismatch),
            _ => Err(mismatch()),
        },
        OptionShape::DateTime => match value {
            OptionValue::DateTime(dt) => Ok(Normalized::DateTime(Some(canonical_timestamp(dt)))),
            OptionValue::Date(day) => Ok(Normalized::DateTime(Some(canonical_timestamp(
                &day_start(*day),
            )))),
            OptionValue::Text(text) => parse_timestamp(text)
                .map(|dt| Normalized::DateTime(Some(canonical_timestamp(&dt))))
                .ok_or_else(|| CompileError::InvalidDate {
                    option: name.to_string(),
                    value: text.clone(),
                }),
            _ => Err(mismatch()),
        },
        OptionShape::Text => match value {
            OptionValue::Text(text) => Ok(Normalized::Text(Some(text.clone()))),
            _ => Err(mismatch()),
        },
        OptionShape::Count => match value {
            OptionValue::Int(i) => u64::try_from(*i)
                .map(|n| Normalized::Count(Some(n)))
                .map_err(|_| mismatch()),
            _ => Err(mismatch()),
        },
        OptionShape::Document => Ok(Normalized::Document(Some(value.to_json()))),
    }
}

/// Extracts a single identifier from a scalar value.
fn scalar_id(value: &OptionValue) -> Option<SearchId> {
    match value {
        OptionValue::Int(i) => Some(SearchId::Int(*i)),
        OptionValue::Text(s) => Some(SearchId::Str(s.clone())),
        OptionValue::Ref(id) => Some(id.search_id()),
        _ => None,
    }
}

/// Blank string identifiers come from empty form fields and never constrain.
fn is_blank(id: &SearchId) -> bool {
    matches!(id, SearchId::Str(s) if s.trim().is_empty())
}

/// Reads a boolean, accepting the literal strings sent by form encoders.
fn boolean(value: &OptionValue) -> Option<bool> {
    match value {
        OptionValue::Bool(b) => Some(*b),
        OptionValue::Text(s) if s.eq_ignore_ascii_case("true") => Some(true),
        OptionValue::Text(s) if s.eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    }
}
