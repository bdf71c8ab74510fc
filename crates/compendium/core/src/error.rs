//! Error types raised while decoding and merging rules content.
//!
//! Decoding is lenient about missing fields; only structurally broken input
//! produces one of these errors.

use thiserror::Error;

/// Errors surfaced while decoding an element into an entity.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("ability token '{token}' is not of the form '<Name> <value>'")]
    MalformedAbility { token: String },

    #[error("ability token '{token}' names unknown ability '{name}'")]
    UnknownAbility { token: String, name: String },

    #[error("subrace '{subrace}' has no base race")]
    MissingBaseRace { subrace: String },
}

/// Errors surfaced while combining decoded entities.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MergeError {
    #[error("subrace '{subrace}' references unknown base race '{base}'")]
    UnresolvedBaseRace { base: String, subrace: String },
}

pub type Result<T> = std::result::Result<T, DecodeError>;
