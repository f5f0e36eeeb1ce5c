//! Clause builders, one module per filter family.
//!
//! Each builder reads only the options of its own dimension and returns the
//! clauses it contributes as a fresh [`BoolQuery`](crate::types::BoolQuery).

pub mod exclusion;
pub mod flag;
pub mod identity;
pub mod native;
pub mod range;
pub mod text;
