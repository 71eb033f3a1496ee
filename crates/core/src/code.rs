//! Entity codes and the registry that issues them.
//!
//! Cars and customers share a single code namespace: the registry guarantees
//! that no two entities of either kind are ever issued the same code within
//! one process.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Smallest code the registry will issue.
pub const CODE_MIN: u32 = 1_000;
/// Largest code the registry will issue.
pub const CODE_MAX: u32 = 1_000_000;

/// Process-unique entity identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityCode(u32);

impl EntityCode {
    pub fn value(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for EntityCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Issues process-unique entity codes.
///
/// An explicit service object: callers hold one registry and pass it to
/// constructors that need a code. Not thread-safe; the domain model assumes a
/// single logical thread of control.
#[derive(Debug)]
pub struct CodeRegistry {
    issued: HashSet<u32>,
    rng: StdRng,
}

impl CodeRegistry {
    /// Create a registry seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            issued: HashSet::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a deterministically seeded registry. Prefer this in tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            issued: HashSet::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Issue a fresh code in `[CODE_MIN, CODE_MAX]`.
    ///
    /// Draws are retried on collision with previously issued codes, so
    /// termination is probabilistic (the code space is far larger than any
    /// realistic entity count).
    pub fn issue(&mut self) -> EntityCode {
        loop {
            let candidate = self.rng.gen_range(CODE_MIN..=CODE_MAX);
            if self.issued.insert(candidate) {
                tracing::debug!(code = candidate, "issued entity code");
                return EntityCode(candidate);
            }
        }
    }

    pub fn is_issued(&self, code: EntityCode) -> bool {
        self.issued.contains(&code.0)
    }

    pub fn issued_count(&self) -> usize {
        self.issued.len()
    }
}

impl Default for CodeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
