//! Path alias registry.
//!
//! Short `@`-prefixed names stand in for filesystem paths, URLs or other
//! aliases so configuration can refer to locations symbolically:
//!
//! ```
//! use path_aliases::Aliases;
//!
//! let mut aliases = Aliases::new();
//! aliases.set("@app", "/srv/app/");
//! aliases.set("@runtime", "@app/runtime");
//! assert_eq!(aliases.get("@runtime/cache").unwrap(), "/srv/app/runtime/cache");
//! ```

pub mod aliases;
pub mod config;
pub mod container;
pub mod error;
pub mod reference;

pub use aliases::{Aliases, Entry, MAX_HOPS, is_alias};
pub use config::AliasesConfig;
pub use container::{Container, SimpleContainer};
pub use error::AliasError;
pub use reference::AliasReference;
