//! Key-set rules for JSON request bodies.
//!
//! A rule names the keys an operation expects and how strictly to compare:
//! `Exact` requires the received key set to equal the expected set, while
//! `SupersetOf` only requires the expected keys to be present. Comparison is
//! case-sensitive exact string match.

use serde_json::Value;

/// How a received key set is compared against the expected set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMode {
    /// Received keys must equal the expected keys: same cardinality, every
    /// expected key present, no extras.
    Exact,

    /// Every expected key must be present; extra keys are tolerated.
    SupersetOf,
}

/// Expected key set for one operation on one resource.
#[derive(Debug, Clone, Copy)]
pub struct KeyRule {
    pub mode: KeyMode,
    pub keys: &'static [&'static str],
}

impl KeyRule {
    /// Rule requiring exactly these keys.
    pub const fn exact(keys: &'static [&'static str]) -> Self {
        Self {
            mode: KeyMode::Exact,
            keys,
        }
    }

    /// Rule requiring at least these keys.
    pub const fn superset_of(keys: &'static [&'static str]) -> Self {
        Self {
            mode: KeyMode::SupersetOf,
            keys,
        }
    }

    /// Check a request body against this rule.
    ///
    /// Non-object bodies always fail. An empty object fails `Exact` against
    /// any non-empty expected set.
    pub fn validate(&self, body: &Value) -> bool {
        let Some(received) = body.as_object() else {
            return false;
        };

        match self.mode {
            // Object keys are unique, so equal cardinality plus every
            // expected key present implies set equality.
            KeyMode::Exact => {
                received.len() == self.keys.len()
                    && self.keys.iter().all(|key| received.contains_key(*key))
            }
            KeyMode::SupersetOf => self.keys.iter().all(|key| received.contains_key(*key)),
        }
    }
}
