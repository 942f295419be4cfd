//! Strongly-typed value objects used by domain entities.
//!
//! Ids assigned by the remote API are taken as they come. Ids typed into the
//! admin UI go through [`ContactId::new`], which only admits positive values.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided text is not an integer identifier.
    #[error("invalid id: {0}")]
    InvalidId(String),
}

/// Server-assigned identifier of a phonebook entry.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(from = "i64", into = "i64")]
pub struct ContactId(i64);

impl ContactId {
    /// Creates an identifier from user input, ensuring it is greater than zero.
    pub fn new(value: i64) -> Result<Self, TypeConstraintError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NonPositiveId)
        }
    }

    /// Returns the raw `i64` backing this identifier.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl Display for ContactId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Server-assigned ids are accepted unchecked.
impl From<i64> for ContactId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<ContactId> for i64 {
    fn from(value: ContactId) -> Self {
        value.0
    }
}

/// Parses any integer id, e.g. the trailing segment of a `Location` header.
impl FromStr for ContactId {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| TypeConstraintError::InvalidId(s.to_string()))
    }
}
