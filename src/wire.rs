//! Wire types for the decision API.
//!
//! Requests wrap the query in an `input` object, OPA data-API style;
//! responses carry a single `result` field.

use serde::{Deserialize, Serialize};

/// One access query: who wants to do what to which object.
///
/// Missing fields deserialize to empty strings. An empty field can never
/// match a rule, so partial queries are denied rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessQuery {
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub object: String,
}

/// Request envelope: `{"input":{"user":...,"action":...,"object":...}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionInput {
    #[serde(default)]
    pub input: AccessQuery,
}

/// Response body: `{"result":<bool>}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionResponse {
    pub result: bool,
}
