//! Discovery and one-time loading of source units.
//!
//! A source unit is a UTF-8 file with the configured extension (default `kiln`)
//! somewhere below a source root. Loading walks the root, sorts the hits by path
//! and hands each distinct file to a [`UnitLoader`] exactly once.
//!
//! # Core Features
//!
//! - **Deterministic order**: candidates are sorted by path before loading.
//! - **Idempotency**: units are keyed by canonical path, so symlinks and repeated
//!   manifest entries never run the loader twice.
//! - **Fail fast**: the first unreadable, malformed or rejected unit aborts the load
//!   with an error naming it.
//!
//! # Examples
//!
//! ```rust
//! use kiln_loader::{LoaderError, UnitRegistry};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let tmp = tempfile::tempdir()?;
//! # std::fs::create_dir_all(tmp.path().join("std"))?;
//! # std::fs::write(tmp.path().join("std/int.kiln"), "class Int\nend\n")?;
//! let mut names = Vec::new();
//! let mut registry = UnitRegistry::builder()
//!     .root(tmp.path())
//!     .loader(|unit: &kiln_loader::SourceUnit| -> Result<(), LoaderError> {
//!         names.push(unit.path().file_name().map(|n| n.to_owned()));
//!         Ok(())
//!     })
//!     .build()?;
//!
//! assert_eq!(registry.load_all()?, 1);
//! assert_eq!(registry.load_all()?, 0, "second pass finds nothing new");
//! # drop(registry);
//! # assert_eq!(names.len(), 1);
//! # Ok(())
//! # }
//! ```

mod builder;
mod discovery;
mod error;
mod registry;

pub use builder::{NoRoot, RegistryBuilder, WithRoot};
pub use error::{LoaderError, LoaderErrorExt};
pub use registry::{LoadedUnits, SourceLoader, SourceUnit, UnitLoader, UnitRegistry, load_all_units};
