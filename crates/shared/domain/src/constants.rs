//! Well-known names shared by the bootstrap and its consumers.

/// Enables debug dumps when set to exactly `1`.
pub const DUMP: &str = "DUMP";
/// Disables type unification when set to exactly `0`.
pub const UNIFY: &str = "UNIFY";
/// Enables trace logging when set to exactly `1`.
pub const LOG: &str = "LOG";
/// Disables the compilation cache when set to exactly `0`.
pub const CACHE: &str = "CACHE";

/// Prefix for layered configuration overrides (e.g. `KILN__SOURCE_ROOT`).
pub const CONFIG_ENV_PREFIX: &str = "KILN";

/// File extension of loadable source units.
pub const SOURCE_EXTENSION: &str = "kiln";

/// Path segment separator produced from namespace separators.
pub const PATH_SEPARATOR: &str = "/";
/// Namespace separator in qualified names.
pub const NAMESPACE_SEPARATOR: &str = "::";
