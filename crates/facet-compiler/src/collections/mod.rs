//! Searchable collections.
//!
//! Each collection is a static table of [`Dimension`]s. The option schema of a
//! collection is derived from that table plus the shared native options, and
//! built once on first use.

mod messages;
mod transactions;

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::query::Dimension;
use crate::query::handlers::native;
use crate::schema::OptionSchema;

static TRANSACTIONS_SCHEMA: Lazy<OptionSchema> =
    Lazy::new(|| build_schema(Collection::Transactions));

static MESSAGES_SCHEMA: Lazy<OptionSchema> = Lazy::new(|| build_schema(Collection::Messages));

fn build_schema(collection: Collection) -> OptionSchema {
    let specs = collection
        .dimensions()
        .iter()
        .flat_map(Dimension::options)
        .chain(native::OPTIONS);
    OptionSchema::new(collection, specs)
}

/// A searchable collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    /// Purchases, searched by sellers.
    Transactions,
    /// Seller-authored messages to buyers.
    Messages,
}

impl Collection {
    /// Every collection.
    pub const ALL: [Collection; 2] = [Collection::Transactions, Collection::Messages];

    /// The collection name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Transactions => "transactions",
            Collection::Messages => "messages",
        }
    }

    /// The dimensions of this collection in build order.
    pub fn dimensions(&self) -> &'static [Dimension] {
        match self {
            Collection::Transactions => transactions::DIMENSIONS,
            Collection::Messages => messages::DIMENSIONS,
        }
    }

    /// The option schema of this collection.
    pub fn schema(&self) -> &'static OptionSchema {
        match self {
            Collection::Transactions => &TRANSACTIONS_SCHEMA,
            Collection::Messages => &MESSAGES_SCHEMA,
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "transactions" => Ok(Collection::Transactions),
            "messages" => Ok(Collection::Messages),
            _ => Err(format!("Unknown collection: {}", s)),
        }
    }
}
