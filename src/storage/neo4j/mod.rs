//! Neo4j adapter for the batch writer.
//!
//! Write operations are parameterised Cypher statements. A batch is executed
//! through the transactional HTTP endpoint in a single request.

mod client;
mod types;

pub use client::NeoStoreClient;
pub use types::CypherQuery;
