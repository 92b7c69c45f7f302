use crate::constants::SOURCE_EXTENSION;
use crate::flags::Flags;
use serde::Deserialize;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Settings fixed at process start.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BootstrapConfigInner {
    /// Resolved from `DUMP`/`UNIFY`/`LOG`/`CACHE`, never from the config file.
    #[serde(skip)]
    pub flags: Flags,
    /// Directory walked for source units. `None` means "next to the executable".
    pub source_root: Option<PathBuf>,
    /// Extension (without the dot) that marks a file as a source unit.
    pub extension: String,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
///
/// Read-only once built: there is no `DerefMut`, so flags cannot drift after bootstrap.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct BootstrapConfig {
    #[serde(flatten)]
    inner: Arc<BootstrapConfigInner>,
}

impl BootstrapConfig {
    #[must_use]
    pub fn new(inner: BootstrapConfigInner) -> Self {
        Self { inner: Arc::new(inner) }
    }

    /// Returns a copy with `flags` replaced. Used once while assembling the config.
    #[must_use]
    pub fn with_flags(self, flags: Flags) -> Self {
        let mut inner = Arc::unwrap_or_clone(self.inner);
        inner.flags = flags;
        Self::new(inner)
    }

    /// Returns a copy with `source_root` replaced.
    #[must_use]
    pub fn with_source_root(self, root: impl AsRef<Path>) -> Self {
        let mut inner = Arc::unwrap_or_clone(self.inner);
        inner.source_root = Some(root.as_ref().to_path_buf());
        Self::new(inner)
    }
}

impl Deref for BootstrapConfig {
    type Target = BootstrapConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

// --- Default ---

impl Default for BootstrapConfigInner {
    fn default() -> Self {
        Self { flags: Flags::DEFAULTS, source_root: None, extension: SOURCE_EXTENSION.to_owned() }
    }
}
