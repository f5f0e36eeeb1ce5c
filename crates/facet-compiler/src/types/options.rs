//! Caller-facing option values.
//!
//! An option set maps option names to loosely typed [`OptionValue`]s. The
//! schema layer decides, per option, which values are acceptable and how they
//! normalize.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::{CompileError, CompileResult};
use crate::schema::OptionShape;

/// A plain record identifier as stored in the search index.
///
/// Numeric database ids and opaque string ids (external ids, country codes,
/// states) are both supported; the variant controls how the value is written
/// into the query body.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchId {
    /// Numeric identifier.
    Int(i64),
    /// String identifier.
    Str(String),
}

impl SearchId {
    /// Returns the identifier as a JSON value.
    pub fn to_value(&self) -> Value {
        match self {
            SearchId::Int(id) => json!(id),
            SearchId::Str(id) => json!(id),
        }
    }
}

impl fmt::Display for SearchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchId::Int(id) => write!(f, "{}", id),
            SearchId::Str(id) => write!(f, "{}", id),
        }
    }
}

impl From<i64> for SearchId {
    fn from(id: i64) -> Self {
        SearchId::Int(id)
    }
}

impl From<i32> for SearchId {
    fn from(id: i32) -> Self {
        SearchId::Int(i64::from(id))
    }
}

impl From<u32> for SearchId {
    fn from(id: u32) -> Self {
        SearchId::Int(i64::from(id))
    }
}

impl From<&str> for SearchId {
    fn from(id: &str) -> Self {
        SearchId::Str(id.to_string())
    }
}

impl From<String> for SearchId {
    fn from(id: String) -> Self {
        SearchId::Str(id)
    }
}

/// A domain entity that can be passed wherever an identifier is expected.
///
/// The compiler reads nothing from the entity except this identifier.
pub trait Identified: fmt::Debug + Send + Sync {
    /// Returns the identifier under which the entity is indexed.
    fn search_id(&self) -> SearchId;
}

/// Either a raw identifier or a reference to an identified entity.
#[derive(Debug, Clone)]
pub enum IdRef {
    /// The value is the identifier itself.
    Raw(SearchId),
    /// The identifier is read from the entity.
    Entity(Arc<dyn Identified>),
}

impl IdRef {
    /// Wraps an entity.
    pub fn entity<E: Identified + 'static>(entity: E) -> Self {
        IdRef::Entity(Arc::new(entity))
    }

    /// Extracts the plain identifier.
    pub fn search_id(&self) -> SearchId {
        match self {
            IdRef::Raw(id) => id.clone(),
            IdRef::Entity(entity) => entity.search_id(),
        }
    }
}

impl From<SearchId> for IdRef {
    fn from(id: SearchId) -> Self {
        IdRef::Raw(id)
    }
}

impl From<i64> for IdRef {
    fn from(id: i64) -> Self {
        IdRef::Raw(SearchId::from(id))
    }
}

impl From<i32> for IdRef {
    fn from(id: i32) -> Self {
        IdRef::Raw(SearchId::from(id))
    }
}

impl From<&str> for IdRef {
    fn from(id: &str) -> Self {
        IdRef::Raw(SearchId::from(id))
    }
}

impl From<String> for IdRef {
    fn from(id: String) -> Self {
        IdRef::Raw(SearchId::from(id))
    }
}

/// A single caller-supplied option value.
#[derive(Debug, Clone)]
pub enum OptionValue {
    /// Explicitly unset. Equivalent to omitting the option.
    Null,
    /// Boolean.
    Bool(bool),
    /// Integer (also a raw numeric identifier).
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// Text (also a raw string identifier or an unparsed date).
    Text(String),
    /// An absolute timestamp.
    DateTime(DateTime<Utc>),
    /// A calendar day, interpreted as UTC midnight.
    Date(NaiveDate),
    /// An identifier or entity reference.
    Ref(IdRef),
    /// A list of values.
    List(Vec<OptionValue>),
    /// An opaque JSON document (sort specs, aggregations, field selections).
    Json(Value),
}

impl OptionValue {
    /// Wraps an entity as an option value.
    pub fn entity<E: Identified + 'static>(entity: E) -> Self {
        OptionValue::Ref(IdRef::entity(entity))
    }

    /// Wraps a JSON document without interpreting it.
    pub fn document(value: Value) -> Self {
        OptionValue::Json(value)
    }

    /// Returns true for [`OptionValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, OptionValue::Null)
    }

    /// Short name of the value's kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            OptionValue::Null => "null",
            OptionValue::Bool(_) => "boolean",
            OptionValue::Int(_) => "integer",
            OptionValue::Float(_) => "float",
            OptionValue::Text(_) => "text",
            OptionValue::DateTime(_) => "timestamp",
            OptionValue::Date(_) => "date",
            OptionValue::Ref(IdRef::Raw(_)) => "identifier",
            OptionValue::Ref(IdRef::Entity(_)) => "entity",
            OptionValue::List(_) => "list",
            OptionValue::Json(_) => "document",
        }
    }

    /// Converts the value back into JSON for pass-through slots.
    pub fn to_json(&self) -> Value {
        match self {
            OptionValue::Null => Value::Null,
            OptionValue::Bool(b) => json!(b),
            OptionValue::Int(i) => json!(i),
            OptionValue::Float(f) => json!(f),
            OptionValue::Text(s) => json!(s),
            OptionValue::DateTime(dt) => json!(crate::schema::canonical_timestamp(dt)),
            OptionValue::Date(d) => json!(d.format("%Y-%m-%d").to_string()),
            OptionValue::Ref(id) => id.search_id().to_value(),
            OptionValue::List(items) => Value::Array(items.iter().map(Self::to_json).collect()),
            OptionValue::Json(v) => v.clone(),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        OptionValue::Bool(b)
    }
}

impl From<i64> for OptionValue {
    fn from(i: i64) -> Self {
        OptionValue::Int(i)
    }
}

impl From<i32> for OptionValue {
    fn from(i: i32) -> Self {
        OptionValue::Int(i64::from(i))
    }
}

impl From<u32> for OptionValue {
    fn from(i: u32) -> Self {
        OptionValue::Int(i64::from(i))
    }
}

impl From<f64> for OptionValue {
    fn from(f: f64) -> Self {
        OptionValue::Float(f)
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Text(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::Text(s)
    }
}

impl From<DateTime<Utc>> for OptionValue {
    fn from(dt: DateTime<Utc>) -> Self {
        OptionValue::DateTime(dt)
    }
}

impl From<NaiveDate> for OptionValue {
    fn from(d: NaiveDate) -> Self {
        OptionValue::Date(d)
    }
}

impl From<IdRef> for OptionValue {
    fn from(id: IdRef) -> Self {
        OptionValue::Ref(id)
    }
}

impl From<SearchId> for OptionValue {
    fn from(id: SearchId) -> Self {
        OptionValue::Ref(IdRef::Raw(id))
    }
}

impl<T: Into<OptionValue>> From<Vec<T>> for OptionValue {
    fn from(items: Vec<T>) -> Self {
        OptionValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<OptionValue>> From<Option<T>> for OptionValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(OptionValue::Null)
    }
}

/// Maps a JSON value as received from an HTTP layer.
///
/// Objects stay opaque documents; arrays become lists.
impl From<Value> for OptionValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => OptionValue::Null,
            Value::Bool(b) => OptionValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => OptionValue::Int(i),
                None => OptionValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => OptionValue::Text(s),
            Value::Array(items) => {
                OptionValue::List(items.into_iter().map(OptionValue::from).collect())
            }
            object @ Value::Object(_) => OptionValue::Json(object),
        }
    }
}

/// A caller-supplied set of named search options.
///
/// Option storage is ordered by name, so iteration never depends on insertion
/// order.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    values: BTreeMap<String, OptionValue>,
}

impl SearchOptions {
    /// Creates an empty option set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an option (builder style). A later value for the same name wins.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets an option, returning the previous value if any.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<OptionValue>,
    ) -> Option<OptionValue> {
        self.values.insert(name.into(), value.into())
    }

    /// Removes an option.
    pub fn remove(&mut self, name: &str) -> Option<OptionValue> {
        self.values.remove(name)
    }

    /// Returns the value for an option.
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.values.get(name)
    }

    /// Number of options, including explicit nulls.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no options are set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over options in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Builds an option set from a JSON object.
    pub fn from_json(value: &Value) -> CompileResult<Self> {
        let object = value.as_object().ok_or_else(|| CompileError::InvalidShape {
            option: "<root>".to_string(),
            expected: OptionShape::Document,
            found: OptionValue::from(value.clone()).kind(),
        })?;

        Ok(object
            .iter()
            .map(|(name, v)| (name.clone(), OptionValue::from(v.clone())))
            .collect())
    }
}

impl<K: Into<String>, V: Into<OptionValue>> FromIterator<(K, V)> for SearchOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = SearchOptions::new();
        for (name, value) in iter {
            options.insert(name, value);
        }
        options
    }
}
