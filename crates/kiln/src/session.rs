use crate::error::KilnError;
use kiln_domain::config::BootstrapConfig;
use kiln_domain::constants::PATH_SEPARATOR;
use kiln_domain::flags::Flags;
use kiln_kernel::format::with_line_numbers;
use kiln_kernel::naming::{to_camel_form, to_snake_form};
use kiln_loader::{LoadedUnits, SourceLoader, SourceUnit, UnitLoader, UnitRegistry};
use kiln_logger::TraceLog;
use std::path::{Path, PathBuf};
use tracing::info;

/// Everything established at process start: fixed flags and the loaded units.
#[derive(Debug)]
pub struct Session {
    config: BootstrapConfig,
    units: LoadedUnits,
    trace: TraceLog,
}

impl Session {
    /// Loads every unit under the configured source root with the default loader.
    ///
    /// # Errors
    /// Returns [`KilnError::Loader`] for the first unit that fails; nothing is kept in that case.
    pub fn bootstrap(config: BootstrapConfig) -> Result<Self, KilnError> {
        Self::bootstrap_with(config, SourceLoader).map(|(session, _)| session)
    }

    /// Like [`Session::bootstrap`], running `loader` once per distinct unit.
    ///
    /// The loader is handed back so callers can inspect whatever it collected.
    ///
    /// # Errors
    /// Returns [`KilnError::Internal`] if no source root can be determined and
    /// [`KilnError::Loader`] for the first unit that fails.
    pub fn bootstrap_with<L: UnitLoader>(
        config: BootstrapConfig,
        loader: L,
    ) -> Result<(Self, L), KilnError> {
        let root = source_root(&config)?;
        let trace = TraceLog::new(config.flags.log());
        trace.log(format_args!("bootstrap {}", root.display()));

        let registry = {
            let _scope = trace.indent();
            let mut registry = UnitRegistry::builder()
                .root(&root)
                .extension(config.extension.clone())
                .loader(loader)
                .build()?;
            registry.load_all()?;
            for unit in registry.units() {
                trace.log(unit.path().display());
            }
            registry
        };

        let (units, loader) = registry.freeze();
        info!(root = %units.root().display(), units = units.len(), flags = ?config.flags, "Bootstrap complete");

        Ok((Self { config, units, trace }, loader))
    }

    #[must_use]
    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    #[must_use]
    pub fn flags(&self) -> Flags {
        self.config.flags
    }

    #[must_use]
    pub const fn units(&self) -> &LoadedUnits {
        &self.units
    }

    #[must_use]
    pub const fn trace(&self) -> &TraceLog {
        &self.trace
    }

    /// The unit a qualified type name lives in: `Std::IntArray` maps to `std/int_array.<ext>`.
    ///
    /// A leading `::` (top-level qualification) is ignored.
    #[must_use]
    pub fn unit_for(&self, type_name: &str) -> Option<&SourceUnit> {
        let snake = to_snake_form(type_name);
        let relative = format!("{}.{}", snake.trim_start_matches(PATH_SEPARATOR), self.config.extension);
        self.units.get(self.units.root().join(relative))
    }

    /// The qualified type name a unit declares by its location: `std/int_array.<ext>` maps to `Std::IntArray`.
    #[must_use]
    pub fn type_name_of(&self, unit: &SourceUnit) -> Option<String> {
        let relative = unit.path().strip_prefix(self.units.root()).ok()?.with_extension("");
        let segments: Vec<_> =
            relative.components().map(|c| c.as_os_str().to_string_lossy()).collect();
        Some(to_camel_form(&segments.join("/")))
    }

    /// Every loaded unit with numbered lines, or `None` unless the `DUMP` flag is set.
    #[must_use]
    pub fn dump(&self) -> Option<String> {
        self.config.flags.dump().then(|| {
            self.units
                .iter()
                .map(|unit| {
                    format!("== {}\n{}", unit.path().display(), with_line_numbers(unit.text().lines()))
                })
                .collect::<Vec<_>>()
                .join("\n")
        })
    }
}

/// The configured root, or the directory holding the running executable.
fn source_root(config: &BootstrapConfig) -> Result<PathBuf, KilnError> {
    if let Some(root) = &config.source_root {
        return Ok(root.clone());
    }

    let exe = std::env::current_exe()
        .map_err(|e| KilnError::from(format!("Cannot locate the running executable: {e}")))?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| "Executable has no parent directory".into())
}
