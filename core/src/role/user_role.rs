//! Viewer categories.
use crate::error::InvalidRole;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// Category of the current viewer, chosen during onboarding.
/// Controls which resources are visible.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
#[serde(try_from = "String", into = "String")]
pub enum UserRole {
    /// No role selected yet. Nothing is visible.
    #[default]
    Unset,
    HealthcareProvider,
    Customer,
}

impl UserRole {
    /// Roles that may be granted access to a resource.
    pub const SELECTABLE: [UserRole; 2] = [UserRole::HealthcareProvider, UserRole::Customer];

    /// Persisted form of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::HealthcareProvider => "healthcareProvider",
            Self::Customer => "customer",
        }
    }

    /// Label for role dependent navigation and headings.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Unset => "No role",
            Self::HealthcareProvider => "Healthcare Provider",
            Self::Customer => "Customer",
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, Self::Unset)
    }
}

impl Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = InvalidRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Self::Unset),
            "healthcareProvider" => Ok(Self::HealthcareProvider),
            "customer" => Ok(Self::Customer),
            _ => Err(InvalidRole::new(s)),
        }
    }
}

impl TryFrom<String> for UserRole {
    type Error = InvalidRole;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.as_str().to_string()
    }
}

#[cfg(test)]
#[path = "./user_role_test.rs"]
mod user_role_test;
