//! Identifiers for workout entities
//!
//! The parser never invents identifiers on its own. Every template, exercise
//! and set gets a fresh id from an injected [`IdGenerator`].
//!
//! ID Format:
//! - [`HashIdGenerator`]: 16 lowercase hex chars (e.g., `7f2b4c19a03de551`)
//! - [`SequentialIdGenerator`]: `{prefix}-{n}` (e.g., `id-1`, `id-2`)
//!
//! Hashes are derived from a per-generator seed, the generator's creation
//! timestamp and a monotonically increasing counter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    #[error("Invalid ID: identifiers must be non-empty and contain no whitespace, got '{0}'")]
    Invalid(String),
}

/// Source of fresh, unique, opaque identifiers
pub trait IdGenerator {
    /// Returns an identifier that has never been returned before
    fn generate_id(&self) -> String;
}

/// Default generator backed by blake3
#[derive(Debug)]
pub struct HashIdGenerator {
    seed: String,
    created_at: DateTime<Utc>,
    counter: AtomicU64,
}

impl HashIdGenerator {
    /// Creates a generator seeded with the current time
    pub fn new() -> Self {
        Self::with_seed("", Utc::now())
    }

    /// Creates a generator from an explicit seed and timestamp
    pub fn with_seed(seed: &str, created_at: DateTime<Utc>) -> Self {
        Self {
            seed: seed.to_string(),
            created_at,
            counter: AtomicU64::new(0),
        }
    }
}

impl Default for HashIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for HashIdGenerator {
    fn generate_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        let input = format!(
            "{}{}{}",
            self.seed,
            self.created_at.timestamp_nanos_opt().unwrap_or(0),
            n
        );
        let hash = blake3::hash(input.as_bytes());
        let hex = hash.to_hex();
        hex[..16].to_string()
    }
}

/// Deterministic generator producing `{prefix}-1`, `{prefix}-2`, ...
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            next: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("id")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }
}

fn validate(s: &str) -> Result<(), IdError> {
    if s.is_empty() || s.chars().any(char::is_whitespace) {
        return Err(IdError::Invalid(s.to_string()));
    }
    Ok(())
}

/// Declares an opaque string-backed identifier type.
macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Draws a fresh identifier from the generator
            pub fn generate(ids: &dyn IdGenerator) -> Self {
                Self(ids.generate_id())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                validate(s)?;
                Ok(Self(s.to_string()))
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                validate(&value)?;
                Ok(Self(value))
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

opaque_id!(
    /// Identifies a parsed workout template
    TemplateId
);
opaque_id!(
    /// Identifies an exercise (leaf or group) within a template
    ExerciseId
);
opaque_id!(
    /// Identifies a prescribed set within an exercise
    SetId
);
