//! Alias registry — `@name` shortcuts mapped to paths, URLs or other aliases.
//!
//! Entries are keyed by the alias *root* (everything before the first `/`).
//! A root with a single alias stores its path directly; once a second alias
//! shares the root (`@yii` and `@yii/gii`) the entry becomes a table of
//! sub-aliases scanned in reverse key order, so the more specific alias is
//! tried first.
//!
//! ```text
//! "@yii" ─┬─ "@yii/gii/assets" → /yii/gii_assets
//!         ├─ "@yii/gii"        → /yii/gii
//!         └─ "@yii"            → /yii/framework
//! ```
//!
//! Resolution is lazy: a path may itself be an alias and is substituted again
//! on [`Aliases::get`], so registration order never matters.

use std::{
    borrow::Cow,
    collections::{BTreeMap, HashMap, HashSet},
};

use tracing::{debug, trace};

use crate::{config::AliasesConfig, error::AliasError};

/// Upper bound on chained translations in one [`Aliases::get`] call. Stops
/// chains that grow on every hop (`@a = @a/x`) and so never repeat.
pub const MAX_HOPS: usize = 64;

/// Registered value for one alias root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Only the root alias itself is registered.
    Direct(String),
    /// Several aliases share the root. Scanned with `.rev()`: descending key
    /// order, which puts `@yii/gii` ahead of `@yii`. That ordering is
    /// lexicographic, not by length; the `/`-boundary check in
    /// [`Aliases::get`] is what keeps matches correct.
    SubAliases(BTreeMap<String, String>),
}

/// Path alias registry.
#[derive(Debug, Clone, Default)]
pub struct Aliases {
    entries: HashMap<String, Entry>,
}

/// Returns `true` if `value` starts with `@`.
pub fn is_alias(value: &str) -> bool {
    value.starts_with('@')
}

fn normalize(alias: &str) -> Cow<'_, str> {
    if is_alias(alias) {
        Cow::Borrowed(alias)
    } else {
        Cow::Owned(format!("@{alias}"))
    }
}

fn root_of(alias: &str) -> &str {
    alias.split_once('/').map_or(alias, |(root, _)| root)
}

/// `key` is a prefix of `alias` ending on a `/` boundary (or the whole alias).
fn is_boundary_prefix(alias: &str, key: &str) -> bool {
    alias.starts_with(key) && (alias.len() == key.len() || alias.as_bytes()[key.len()] == b'/')
}

impl Aliases {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry seeded from the `[aliases]` table of a loaded config.
    pub fn from_config(config: &AliasesConfig) -> Self {
        config.aliases.iter().collect()
    }

    /// Register `alias` → `path`, overwriting any previous value.
    ///
    /// A missing leading `@` is added. Trailing `/` and `\` are trimmed from
    /// `path`. The path is not checked for existence and may be a URL or
    /// another alias (`@vendor/yiisoft`), which is resolved on [`get`](Self::get).
    pub fn set(&mut self, alias: &str, path: &str) {
        let alias = normalize(alias);
        let root = root_of(&alias);
        let path = path.trim_end_matches(['/', '\\']).to_string();
        let is_root = alias.len() == root.len();

        debug!(alias = %alias, path = %path, "alias set");

        match self.entries.get_mut(root) {
            None => {
                let entry = if is_root {
                    Entry::Direct(path)
                } else {
                    Entry::SubAliases(BTreeMap::from([(alias.to_string(), path)]))
                };
                self.entries.insert(root.to_string(), entry);
            }
            Some(Entry::Direct(current)) if is_root => *current = path,
            Some(entry) => match entry {
                Entry::Direct(current) => {
                    let previous = std::mem::take(current);
                    *entry = Entry::SubAliases(BTreeMap::from([
                        (alias.to_string(), path),
                        (root.to_string(), previous),
                    ]));
                }
                Entry::SubAliases(table) => {
                    table.insert(alias.to_string(), path);
                }
            },
        }
    }

    /// Unregister `alias`. Unknown aliases are ignored.
    ///
    /// Removing from a sub-alias table leaves the table in place even when a
    /// single entry (or none) remains.
    pub fn remove(&mut self, alias: &str) {
        let alias = normalize(alias);
        let root = root_of(&alias);

        match self.entries.get_mut(root) {
            Some(Entry::SubAliases(table)) => {
                if table.remove(alias.as_ref()).is_some() {
                    debug!(alias = %alias, "alias removed");
                }
            }
            Some(Entry::Direct(_)) if alias.len() == root.len() => {
                self.entries.remove(root);
                debug!(alias = %alias, "alias removed");
            }
            _ => {}
        }
    }

    /// Translate `alias` into an actual path.
    ///
    /// 1. A value not starting with `@` is returned unchanged.
    /// 2. Otherwise the longest registered alias matching the start of
    ///    `alias` on a `/` boundary is replaced by its path: with `@foo` and
    ///    `@foo/bar` registered, `@foo/bar/config` uses `@foo/bar` but
    ///    `@foo/barbar/config` uses `@foo`.
    /// 3. If that path matches a registered alias too, the substituted
    ///    result is translated again from step 1.
    ///
    /// A path that is an unknown alias is returned as is, but a later hop that
    /// lands on an unknown alias fails: with `@a = @b` and `@b = @c`, `@a`
    /// fails naming `@c`.
    ///
    /// Fails with [`AliasError::InvalidAlias`] when an alias to translate
    /// matches nothing, and with [`AliasError::CyclicAlias`] when the chain
    /// revisits an input or exceeds [`MAX_HOPS`].
    pub fn get(&self, alias: &str) -> Result<String, AliasError> {
        let mut current = alias.to_string();
        let mut seen = HashSet::new();

        loop {
            if !is_alias(&current) {
                return Ok(current);
            }
            if seen.len() == MAX_HOPS || !seen.insert(current.clone()) {
                return Err(AliasError::CyclicAlias { alias: alias.to_string(), via: current });
            }

            let (_, found) = self
                .find_match(&current)
                .ok_or_else(|| AliasError::InvalidAlias(current.clone()))?;
            let Some((key, next)) = self.find_match(&found) else {
                return Ok(found);
            };
            trace!(from = %found, to = %next, via = key, "alias substituted");
            current = next;
        }
    }

    /// Translate every element of `aliases`, preserving order.
    pub fn get_array<I, S>(&self, aliases: I) -> Result<Vec<String>, AliasError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        aliases.into_iter().map(|alias| self.get(alias.as_ref())).collect()
    }

    /// Every registered alias mapped to its fully resolved path.
    pub fn get_all(&self) -> Result<BTreeMap<String, String>, AliasError> {
        let mut all = BTreeMap::new();
        for (root, entry) in &self.entries {
            match entry {
                Entry::Direct(path) => {
                    all.insert(root.clone(), self.get(path)?);
                }
                Entry::SubAliases(table) => {
                    for (alias, path) in table {
                        all.insert(alias.clone(), self.get(path)?);
                    }
                }
            }
        }
        Ok(all)
    }

    /// `true` if exactly `alias` is registered (no prefix matching).
    pub fn contains(&self, alias: &str) -> bool {
        let alias = normalize(alias);
        match self.entries.get(root_of(&alias)) {
            Some(Entry::Direct(_)) => root_of(&alias).len() == alias.len(),
            Some(Entry::SubAliases(table)) => table.contains_key(alias.as_ref()),
            None => false,
        }
    }

    /// Number of registered aliases, counting every sub-alias.
    pub fn len(&self) -> usize {
        self.entries
            .values()
            .map(|entry| match entry {
                Entry::Direct(_) => 1,
                Entry::SubAliases(table) => table.len(),
            })
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw entry for `root`, unresolved.
    pub fn entry(&self, root: &str) -> Option<&Entry> {
        self.entries.get(normalize(root).as_ref())
    }

    /// Single substitution step: the registered alias that matched and the
    /// path it expands `alias` to.
    fn find_match(&self, alias: &str) -> Option<(&str, String)> {
        if !is_alias(alias) {
            return None;
        }
        let root = root_of(alias);
        let (key, entry) = self.entries.get_key_value(root)?;

        match entry {
            Entry::Direct(path) => Some((key.as_str(), format!("{path}{}", &alias[root.len()..]))),
            Entry::SubAliases(table) => table
                .iter()
                .rev()
                .find(|(name, _)| is_boundary_prefix(alias, name))
                .map(|(name, path)| (name.as_str(), format!("{path}{}", &alias[name.len()..]))),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Aliases
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut aliases = Self::new();
        aliases.extend(iter);
        aliases
    }
}

impl<K, V> Extend<(K, V)> for Aliases
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (alias, path) in iter {
            self.set(alias.as_ref(), path.as_ref());
        }
    }
}
