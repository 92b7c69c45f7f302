//! Configuration: environment-derived flags and layered bootstrap settings.

mod env;

pub use env::{EnvSource, FlagRule, ProcessEnv, resolve_flag, resolve_flags};

use config::{Config, Environment, File};
use kiln_domain::config::BootstrapConfig;
use kiln_domain::constants::CONFIG_ENV_PREFIX;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, info};

/// Custom error type for config loading.
#[kiln_derive::kiln_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base File**: Loads settings from `path` (e.g., `kiln.toml`) when given. A missing
///    file is an error only when a path was passed explicitly.
/// 2. **Environment Overrides**: Overlays values from environment variables prefixed with `KILN__`.
///    Nested structures are accessed using double underscores (e.g., `KILN__SOURCE_ROOT` maps to `source_root`).
///
/// # Errors
/// This function will return an error if:
/// * The specified configuration file cannot be found or parsed.
/// * The merged values do not match the structure of type `T`.
///
/// # Example
/// ```rust
/// use kiln_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct ToolConfig {
///     #[serde(default)]
///     extension: String,
/// }
///
/// let cfg: ToolConfig = load_config(None::<&str>).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let mut builder = Config::builder();

    if let Some(path) = &path {
        let path: &Path = path.as_ref();
        info!("Loading config from {}", path.display());
        builder = builder.add_source(File::from(path).required(true));
    }

    let config = builder
        .add_source(
            Environment::with_prefix(CONFIG_ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

/// Builds the process bootstrap settings.
///
/// Layered settings come from [`load_config`]; the flags always come from the bare
/// `DUMP`, `UNIFY`, `LOG` and `CACHE` variables read through `env`.
///
/// # Errors
/// Propagates any [`ConfigError`] from [`load_config`].
pub fn load_bootstrap_config(
    path: Option<impl AsRef<Path>>,
    env: &impl EnvSource,
) -> Result<BootstrapConfig, ConfigError> {
    let flags = resolve_flags(env);
    debug!(?flags, "Resolved process flags");

    let config: BootstrapConfig = load_config(path)?;
    Ok(config.with_flags(flags))
}
