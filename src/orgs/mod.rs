//! Organisations: the entity this service writes.
//!
//! Decoding happens in the HTTP layer; this module turns a decoded
//! organisation into the Cypher operations submitted to the batch writer.

mod model;
mod translate;

pub use model::{Identifier, Organisation};
pub use translate::{to_queries, FACTSET_AUTHORITY, LEI_AUTHORITY, SUGGESTED_INDEXES};
