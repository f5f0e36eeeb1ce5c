//! Test fixtures.

use std::sync::Arc;

use facet_compiler::types::{IdRef, Identified, SearchId};
use facet_compiler::{Collection, CompiledQuery, SearchCompiler, SearchOptions};

/// A stand-in for a persisted record such as a product or a purchaser.
#[derive(Debug)]
pub struct TestEntity {
    pub id: SearchId,
    pub label: &'static str,
}

impl Identified for TestEntity {
    fn search_id(&self) -> SearchId {
        self.id.clone()
    }
}

/// Wraps an identifier in an entity reference.
pub fn entity(id: impl Into<SearchId>) -> IdRef {
    IdRef::Entity(Arc::new(TestEntity {
        id: id.into(),
        label: "fixture",
    }))
}

/// Creates a compiler with the default configuration.
pub fn create_compiler() -> SearchCompiler {
    SearchCompiler::default()
}

/// Compiles options that are expected to be valid.
pub fn compile(collection: Collection, options: &SearchOptions) -> CompiledQuery {
    create_compiler()
        .compile(collection, options)
        .unwrap_or_else(|e| panic!("Failed to compile {} search: {}", collection, e))
}

/// Compiles a single option for a collection.
pub fn compile_one(
    collection: Collection,
    option: &str,
    value: impl Into<facet_compiler::OptionValue>,
) -> CompiledQuery {
    compile(collection, &SearchOptions::new().with(option, value))
}
