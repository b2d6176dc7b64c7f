//! Deferred alias reference — an alias kept as-is until a container with an
//! [`Aliases`] service is available to resolve it.

use std::any::type_name;

use crate::{aliases::Aliases, container::Container, error::AliasError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasReference {
    alias: String,
}

impl AliasReference {
    pub fn to(alias: impl Into<String>) -> Self {
        Self { alias: alias.into() }
    }

    /// Build from a dynamically-typed config value. Only strings are accepted.
    pub fn from_value(value: &toml::Value) -> Result<Self, AliasError> {
        value
            .as_str()
            .map(Self::to)
            .ok_or_else(|| AliasError::InvalidArgument("Alias must be a string.".into()))
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Fetch [`Aliases`] from `container` and resolve the alias against it.
    pub fn resolve<C: Container>(&self, container: &C) -> Result<String, AliasError> {
        let aliases = container
            .get::<Aliases>()
            .ok_or(AliasError::MissingService(type_name::<Aliases>()))?;
        aliases.get(&self.alias)
    }
}

impl TryFrom<toml::Value> for AliasReference {
    type Error = AliasError;

    fn try_from(value: toml::Value) -> Result<Self, Self::Error> {
        Self::from_value(&value)
    }
}
