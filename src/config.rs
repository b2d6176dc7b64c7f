//! Configuration loading with env-var override.
//!
//! Reads `config/default.toml` relative to the current working directory, or
//! the file named by `PATH_ALIASES_CONFIG`.
//!
//! ```toml
//! [aliases]
//! "@root" = "/srv/app"
//! "@runtime" = "@root/runtime"
//! ```

use std::{
    collections::BTreeMap,
    env, fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::error::AliasError;

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Fully-resolved configuration.
#[derive(Debug, Clone)]
pub struct AliasesConfig {
    /// Where the values were read from.
    pub source: PathBuf,
    /// Alias → path, unresolved. Values may reference other aliases.
    pub aliases: BTreeMap<String, String>,
}

/// Raw TOML shape — `serde` target before resolution.
#[derive(Deserialize)]
struct RawConfig {
    #[serde(default)]
    aliases: BTreeMap<String, String>,
}

/// Load config from `config/default.toml`, or from `PATH_ALIASES_CONFIG` when set.
pub fn load() -> Result<AliasesConfig, AliasError> {
    let path = env::var("PATH_ALIASES_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    load_from(Path::new(&path))
}

/// Internal loader — accepts an explicit path.
/// Tests pass the path directly instead of mutating env vars.
pub fn load_from(path: &Path) -> Result<AliasesConfig, AliasError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| AliasError::Config(format!("cannot read {}: {e}", path.display())))?;

    let parsed: RawConfig = toml::from_str(&raw)
        .map_err(|e| AliasError::Config(format!("parse error in {}: {e}", path.display())))?;

    Ok(AliasesConfig { source: path.to_path_buf(), aliases: parsed.aliases })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    use crate::aliases::Aliases;

    const FULL_TOML: &str = r#"
[aliases]
"@app" = "/path/to/app"
"@runtime" = "@app/runtime"
"#;

    fn write_toml(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn parse_full_config() {
        let f = write_toml(FULL_TOML);
        let cfg = load_from(f.path()).unwrap();
        assert_eq!(cfg.aliases.len(), 2);
        assert_eq!(cfg.aliases["@runtime"], "@app/runtime");
        assert_eq!(cfg.source, f.path());
    }

    #[test]
    fn empty_config_has_no_aliases() {
        let f = write_toml("");
        let cfg = load_from(f.path()).unwrap();
        assert!(cfg.aliases.is_empty());
        assert!(Aliases::from_config(&cfg).get_all().unwrap().is_empty());
    }

    #[test]
    fn aliases_seed_registry() {
        let f = write_toml(FULL_TOML);
        let cfg = load_from(f.path()).unwrap();
        let aliases = Aliases::from_config(&cfg);
        assert_eq!(aliases.get("@runtime/test").unwrap(), "/path/to/app/runtime/test");
    }

    #[test]
    fn unknown_tables_ignored() {
        let f = write_toml("[other]\nkey = 1\n\n[aliases]\n\"@app\" = \"/app\"\n");
        let cfg = load_from(f.path()).unwrap();
        assert_eq!(cfg.aliases["@app"], "/app");
    }

    #[test]
    fn missing_file_errors() {
        let result = load_from(Path::new("/nonexistent/config.toml"));
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("config error"));
    }

    #[test]
    fn non_string_alias_value_errors() {
        let f = write_toml("[aliases]\n\"@app\" = 42\n");
        let err = load_from(f.path()).unwrap_err();
        assert!(matches!(err, AliasError::Config(msg) if msg.contains("parse error")));
    }
}
