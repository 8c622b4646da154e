//! Common error types.
use crate::types::ResourceId;
use serde::{Deserialize, Serialize};
use std::result::Result as StdResult;
use thiserror::Error;

// *******************
// *** Role Error ***
// *******************

/// A role value outside of the known roles.
#[derive(Serialize, Deserialize, Error, Clone, PartialEq, Debug)]
#[error("invalid role `{0}`")]
pub struct InvalidRole(pub String);

impl InvalidRole {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The rejected value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

// **********************
// *** Resource Error ***
// **********************

#[derive(Serialize, Deserialize, Error, Clone, PartialEq, Debug)]
pub enum Resource {
    /// No role may view the resource.
    #[error("resource `{0}` has no access roles")]
    EmptyAccessRoles(ResourceId),

    /// The unset role can not be granted access.
    #[error("resource `{0}` grants access to the unset role")]
    UnsetAccessRole(ResourceId),

    #[error("id `{0}` already exists")]
    DuplicateId(ResourceId),

    /// Catalog could not be parsed.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
}

// *********************
// *** Storage Error ***
// *********************

#[derive(Serialize, Deserialize, Error, Clone, PartialEq, Debug)]
pub enum Storage {
    /// Storage can not be accessed, e.g. disabled by the browser.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage quota exceeded")]
    QuotaExceeded,

    #[error("{0}")]
    Other(String),
}

// ********************
// *** Config Error ***
// ********************

#[derive(Serialize, Deserialize, Error, Clone, PartialEq, Debug)]
pub enum Config {
    #[error("invalid zoom bounds [{min}, {max}]")]
    InvalidZoomBounds { min: f64, max: f64 },

    #[error("storage key can not be empty")]
    EmptyKey,

    #[error("state and role can not share the storage key `{0}`")]
    DuplicateKey(String),

    #[error("could not parse config: {0}")]
    Parse(String),
}

// *************
// *** Error ***
// *************

#[derive(Serialize, Deserialize, Error, Clone, PartialEq, Debug)]
pub enum Error {
    #[error("{0}")]
    InvalidRole(InvalidRole),

    #[error("{0}")]
    Resource(Resource),

    #[error("{0}")]
    Storage(Storage),

    #[error("{0}")]
    Config(Config),
}

impl From<InvalidRole> for Error {
    fn from(err: InvalidRole) -> Self {
        Self::InvalidRole(err)
    }
}

impl From<Resource> for Error {
    fn from(err: Resource) -> Self {
        Self::Resource(err)
    }
}

impl From<Storage> for Error {
    fn from(err: Storage) -> Self {
        Self::Storage(err)
    }
}

impl From<Config> for Error {
    fn from(err: Config) -> Self {
        Self::Config(err)
    }
}

// **************
// *** Result ***
// **************

pub type Result<T = ()> = StdResult<T, Error>;

#[cfg(test)]
#[path = "./error_test.rs"]
mod error_test;
