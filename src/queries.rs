// Query corpus generation module
//
// Draws uniformly from a fixed vocabulary that is wider than the rule
// tables, so generated corpora mix allowed and denied queries.

use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};

use crate::wire::{AccessQuery, DecisionInput};

/// Users drawn for generated queries. `charlie` has no roles.
pub const USERS: &[&str] = &["alice", "bob", "charlie"];

/// Actions drawn for generated queries.
pub const ACTIONS: &[&str] = &["read", "write", "admin"];

/// Objects drawn for generated queries.
pub const OBJECTS: &[&str] = &[
    "server123",
    "server234",
    "server345",
    "database456",
    "database567",
];

/// Infinite stream of random queries over the benchmark vocabulary.
pub struct QueryGenerator {
    rng: ChaCha20Rng,
}

impl QueryGenerator {
    /// Generator seeded from the OS entropy source.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha20Rng::from_entropy(),
        }
    }

    /// Deterministic generator for reproducible corpora.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn pick(&mut self, vocabulary: &[&str]) -> String {
        let index = self.rng.next_u32() as usize % vocabulary.len();
        vocabulary[index].to_string()
    }
}

impl Iterator for QueryGenerator {
    type Item = DecisionInput;

    fn next(&mut self) -> Option<DecisionInput> {
        Some(DecisionInput {
            input: AccessQuery {
                user: self.pick(USERS),
                action: self.pick(ACTIONS),
                object: self.pick(OBJECTS),
            },
        })
    }
}
