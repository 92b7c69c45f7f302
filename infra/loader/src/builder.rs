use crate::error::{LoaderError, LoaderErrorExt};
use crate::registry::{SourceLoader, UnitLoader, UnitRegistry};
use fxhash::FxHashSet;
use kiln_domain::constants::SOURCE_EXTENSION;
use private::Sealed;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Default)]
pub struct NoRoot;
#[derive(Debug)]
pub struct WithRoot(PathBuf);

mod private {
    pub(super) trait Sealed {}
}
impl Sealed for NoRoot {}
impl Sealed for WithRoot {}

#[allow(private_bounds)]
#[derive(Debug)]
pub struct RegistryBuilder<S: Sealed = NoRoot, L = SourceLoader> {
    state: S,
    extension: String,
    loader: L,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self { state: NoRoot, extension: SOURCE_EXTENSION.to_owned(), loader: SourceLoader }
    }
}

#[allow(private_bounds)]
impl<S: Sealed, L> RegistryBuilder<S, L> {
    /// Sets the extension (without the dot) that marks a file as a unit.
    #[must_use = "Sets the unit file extension"]
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Replaces the per-unit side effect.
    #[must_use = "Sets the loader invoked once per distinct unit"]
    pub fn loader<N: UnitLoader>(self, loader: N) -> RegistryBuilder<S, N> {
        RegistryBuilder { state: self.state, extension: self.extension, loader }
    }
}

impl<L> RegistryBuilder<NoRoot, L> {
    #[must_use = "Sets the directory walked for source units"]
    pub fn root(self, path: impl Into<PathBuf>) -> RegistryBuilder<WithRoot, L> {
        RegistryBuilder { state: WithRoot(path.into()), extension: self.extension, loader: self.loader }
    }
}

impl RegistryBuilder {
    #[must_use = "Creates a new registry builder with default configuration"]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<L: UnitLoader> RegistryBuilder<WithRoot, L> {
    /// Validates the root and returns an empty registry.
    ///
    /// The root is canonicalized so that units reached through different
    /// spellings of the same directory compare equal.
    ///
    /// # Errors
    /// * [`LoaderError::RootNotFound`] if the root is not an existing directory.
    /// * [`LoaderError::Io`] if the root cannot be resolved.
    pub fn build(self) -> Result<UnitRegistry<L>, LoaderError> {
        let root = &self.state.0;

        if !root.is_dir() {
            return Err(LoaderError::RootNotFound {
                message: root.display().to_string().into(),
                context: None,
            });
        }

        let canonical = fs::canonicalize(root)
            .context(format!("Failed to resolve source root: {}", root.display()))?;
        info!(root = %canonical.display(), extension = %self.extension, "Source registry ready");

        Ok(UnitRegistry {
            root: canonical,
            extension: self.extension,
            loader: self.loader,
            units: Vec::new(),
            loaded: FxHashSet::default(),
        })
    }
}
