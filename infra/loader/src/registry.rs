//! The unit registry: remembers what was loaded and refuses to load it twice.

use crate::builder::RegistryBuilder;
use crate::discovery;
use crate::error::{LoaderError, LoaderErrorExt};
use fxhash::FxHashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// One loaded source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    path: PathBuf,
    canonical: PathBuf,
    text: String,
}

impl SourceUnit {
    /// The path the unit was requested under.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The resolved physical path; two requests naming the same file share it.
    #[must_use]
    pub fn canonical(&self) -> &Path {
        &self.canonical
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// The per-unit side effect run exactly once for every distinct unit.
pub trait UnitLoader {
    /// # Errors
    /// Returning an error aborts the whole load.
    fn load(&mut self, unit: &SourceUnit) -> Result<(), LoaderError>;
}

/// Accepts every well-formed unit without further processing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceLoader;

impl UnitLoader for SourceLoader {
    fn load(&mut self, unit: &SourceUnit) -> Result<(), LoaderError> {
        debug!(path = %unit.path.display(), bytes = unit.text.len(), "Loaded source unit");
        Ok(())
    }
}

impl<F> UnitLoader for F
where
    F: FnMut(&SourceUnit) -> Result<(), LoaderError>,
{
    fn load(&mut self, unit: &SourceUnit) -> Result<(), LoaderError> {
        self(unit)
    }
}

/// Append-only set of loaded units rooted at one directory.
///
/// Units are keyed by canonical path, so symlinks and repeated manifest
/// entries resolve to a single load. Call [`UnitRegistry::freeze`] once
/// loading is finished.
#[derive(Debug)]
pub struct UnitRegistry<L = SourceLoader> {
    pub(crate) root: PathBuf,
    pub(crate) extension: String,
    pub(crate) loader: L,
    pub(crate) units: Vec<SourceUnit>,
    pub(crate) loaded: FxHashSet<PathBuf>,
}

impl UnitRegistry {
    #[must_use = "The registry is not created until you call .build()"]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }
}

impl<L: UnitLoader> UnitRegistry<L> {
    /// The canonical source root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Units loaded so far, in load order.
    #[must_use]
    pub fn units(&self) -> &[SourceUnit] {
        &self.units
    }

    /// Lists candidate units under the root, sorted by path.
    ///
    /// # Errors
    /// Returns [`LoaderError::Walk`] if any directory entry cannot be read.
    pub fn discover(&self) -> Result<Vec<PathBuf>, LoaderError> {
        discovery::discover(&self.root, &self.extension)
    }

    /// Discovers and loads every unit under the root.
    ///
    /// Returns how many units were newly loaded; already-loaded ones are skipped.
    ///
    /// # Errors
    /// Stops at the first unit that fails and returns its error.
    pub fn load_all(&mut self) -> Result<usize, LoaderError> {
        let paths = self.discover()?;
        let loaded = self.load_paths(paths)?;
        info!(root = %self.root.display(), loaded, total = self.units.len(), "Source units loaded");
        Ok(loaded)
    }

    /// Loads an explicit, ordered manifest of unit paths.
    ///
    /// # Errors
    /// Stops at the first unit that fails and returns its error.
    pub fn load_paths<I, P>(&mut self, paths: I) -> Result<usize, LoaderError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut loaded = 0;
        for path in paths {
            if self.load_unit(path)? {
                loaded += 1;
            }
        }
        Ok(loaded)
    }

    /// Loads a single unit unless its canonical path was loaded before.
    ///
    /// Returns `true` if the unit was loaded by this call.
    ///
    /// # Errors
    /// * [`LoaderError::Io`] if the file cannot be resolved or read.
    /// * [`LoaderError::Malformed`] if the file is not valid UTF-8.
    /// * Whatever the [`UnitLoader`] returns.
    pub fn load_unit(&mut self, path: impl AsRef<Path>) -> Result<bool, LoaderError> {
        let path = path.as_ref();
        let canonical = fs::canonicalize(path)
            .context(format!("Failed to resolve unit: {}", path.display()))?;

        if self.loaded.contains(&canonical) {
            debug!(path = %path.display(), "Source unit already loaded, skipping");
            return Ok(false);
        }

        let bytes = fs::read(&canonical).context(format!("Failed to read unit: {}", path.display()))?;
        let text = String::from_utf8(bytes).map_err(|e| LoaderError::Malformed {
            path: path.to_path_buf(),
            message: e.utf8_error().to_string().into(),
            context: None,
        })?;

        let unit = SourceUnit { path: path.to_path_buf(), canonical, text };
        self.loader.load(&unit).context(format!("Failed to load unit: {}", path.display()))?;

        self.loaded.insert(unit.canonical.clone());
        self.units.push(unit);
        Ok(true)
    }

    /// Whether `path` resolves to an already-loaded unit.
    #[must_use]
    pub fn is_loaded(&self, path: impl AsRef<Path>) -> bool {
        fs::canonicalize(path).is_ok_and(|canonical| self.loaded.contains(&canonical))
    }

    /// Ends loading and returns the read-only result together with the loader.
    #[must_use]
    pub fn freeze(self) -> (LoadedUnits, L) {
        let units = LoadedUnits { root: self.root.into(), units: self.units.into() };
        (units, self.loader)
    }
}

/// The frozen outcome of a load; cheap to clone and share.
#[derive(Debug, Clone)]
pub struct LoadedUnits {
    root: Arc<Path>,
    units: Arc<[SourceUnit]>,
}

impl LoadedUnits {
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SourceUnit> {
        self.units.iter()
    }

    /// Looks a unit up by the path it was requested under or by its canonical path.
    #[must_use]
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&SourceUnit> {
        let path = path.as_ref();
        self.units.iter().find(|unit| unit.path == path || unit.canonical == path)
    }
}

impl<'a> IntoIterator for &'a LoadedUnits {
    type Item = &'a SourceUnit;
    type IntoIter = std::slice::Iter<'a, SourceUnit>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.iter()
    }
}

/// Loads every unit with the default extension found under `base`.
///
/// # Errors
/// Fails fast on the first unit that cannot be loaded; nothing is returned in that case.
pub fn load_all_units(base: impl AsRef<Path>) -> Result<LoadedUnits, LoaderError> {
    let mut registry = UnitRegistry::builder().root(base.as_ref()).build()?;
    registry.load_all()?;
    Ok(registry.freeze().0)
}
