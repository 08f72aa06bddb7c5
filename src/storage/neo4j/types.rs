//! Neo4j transactional endpoint payloads.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A parameterised Cypher statement: the write operation for the graph store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CypherQuery {
    pub statement: String,
    pub parameters: Map<String, Value>,
}

impl CypherQuery {
    pub fn new(statement: impl Into<String>) -> Self {
        CypherQuery {
            statement: statement.into(),
            parameters: Map::new(),
        }
    }

    /// Adds (or replaces) one parameter.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }
}

/// Body of `POST .../transaction/commit`.
#[derive(Debug, Serialize)]
pub(crate) struct CommitRequest<'a> {
    pub statements: &'a [CypherQuery],
}

/// Response of `POST .../transaction/commit`.
///
/// Only `errors` matters for writes; a non-empty list means the transaction
/// was rolled back.
#[derive(Debug, Deserialize)]
pub(crate) struct CommitResponse {
    #[serde(default)]
    #[allow(dead_code)] // Returned rows are not used by writes
    pub results: Vec<Value>,
    #[serde(default)]
    pub errors: Vec<CypherErrorBody>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CypherErrorBody {
    pub code: String,
    pub message: String,
}
