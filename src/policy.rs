//! Hardcoded RBAC policy.
//!
//! The `rbac.allow` rule the benchmarks measure: a user may perform an
//! action on an object iff one of the user's roles grants that
//! (action, object) pair. Everything else is denied.

use crate::wire::AccessQuery;

/// Role assignments per user.
const USER_ROLES: &[(&str, &[&str])] = &[("alice", &["eng", "web"]), ("bob", &["hr"])];

/// Grants per role, as (action, object) pairs.
const ROLE_PERMISSIONS: &[(&str, &[(&str, &str)])] = &[
    ("eng", &[("read", "server123")]),
    ("web", &[("read", "server123"), ("write", "server123")]),
    ("hr", &[("read", "database456")]),
];

/// How a decision endpoint answers queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionMode {
    /// Answer `false` without reading the input.
    Stub,
    /// Evaluate the RBAC rules against the input.
    Evaluate,
    /// Parse the input, then answer `false`. Isolates parsing cost.
    ParseOnly,
}

/// Evaluate the RBAC rules for one query.
///
/// Unknown users, actions, and objects are denied.
pub fn is_allowed(query: &AccessQuery) -> bool {
    let Some((_, roles)) = USER_ROLES.iter().find(|(user, _)| *user == query.user) else {
        return false;
    };
    roles.iter().any(|role| {
        permissions_of(role)
            .iter()
            .any(|(action, object)| *action == query.action && *object == query.object)
    })
}

/// Decide one query under the given mode.
pub fn decide(query: &AccessQuery, mode: DecisionMode) -> bool {
    match mode {
        DecisionMode::Evaluate => is_allowed(query),
        DecisionMode::Stub | DecisionMode::ParseOnly => false,
    }
}

fn permissions_of(role: &str) -> &'static [(&'static str, &'static str)] {
    ROLE_PERMISSIONS
        .iter()
        .find(|(name, _)| *name == role)
        .map_or(&[], |(_, grants)| *grants)
}
