//! Unique identifier types for matching entities
//!
//! Identifiers are caller-assigned integers, unique within a single solve
//! call. Newtype wrappers keep applicant and slot ids from being mixed up
//! at module boundaries while serializing as bare numbers on the wire.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an applicant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicantId(u64);

impl ApplicantId {
    /// Create an ApplicantId from a raw integer
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw integer value
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ApplicantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ApplicantId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Unique identifier for a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotId(u64);

impl SlotId {
    /// Create a SlotId from a raw integer
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw integer value
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for SlotId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
