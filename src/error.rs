//! Crate-wide error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AliasError {
    #[error("Invalid path alias: {0}")]
    InvalidAlias(String),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("cyclic path alias: {alias} loops at {via}")]
    CyclicAlias { alias: String, via: String },

    #[error("container has no {0} service")]
    MissingService(&'static str),

    #[error("config error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_alias_display() {
        let e = AliasError::InvalidAlias("@alias_not_exists".into());
        assert_eq!(e.to_string(), "Invalid path alias: @alias_not_exists");
    }

    #[test]
    fn invalid_argument_is_bare_message() {
        let e = AliasError::InvalidArgument("Alias must be a string.".into());
        assert_eq!(e.to_string(), "Alias must be a string.");
    }

    #[test]
    fn cyclic_alias_names_both_ends() {
        let e = AliasError::CyclicAlias { alias: "@a".into(), via: "@b".into() };
        let msg = e.to_string();
        assert!(msg.contains("@a"));
        assert!(msg.contains("@b"));
    }

    #[test]
    fn config_error_display() {
        let e = AliasError::Config("missing field".into());
        assert!(e.to_string().contains("missing field"));
    }

    #[test]
    fn satisfies_std_error() {
        let e = AliasError::MissingService("Aliases");
        let _: &dyn std::error::Error = &e;
        assert!(e.to_string().contains("Aliases"));
    }
}
