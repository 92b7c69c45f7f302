//! Facade crate for Kiln.
//! Re-exports the shared crates and owns the one-time process bootstrap.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Build a [`BootstrapConfig`] (usually via [`bootstrap_from_env`]).
//! - Call [`init`] once at startup; later calls return the same [`Session`].
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let tmp = tempfile::tempdir()?;
//! # std::fs::write(tmp.path().join("int_array.kiln"), "class IntArray\nend\n")?;
//! use kiln::domain::config::BootstrapConfig;
//!
//! let session = kiln::Session::bootstrap(BootstrapConfig::default().with_source_root(tmp.path()))?;
//! assert_eq!(session.units().len(), 1);
//! assert!(session.unit_for("IntArray").is_some());
//! # Ok(())
//! # }
//! ```

mod error;
mod session;

pub use error::{KilnError, KilnErrorExt};
pub use kiln_domain as domain;
pub use kiln_kernel as kernel;
pub use kiln_loader as loader;
pub use session::Session;

use kiln_domain::config::BootstrapConfig;
use kiln_kernel::config::{EnvSource, load_bootstrap_config};
use parking_lot::Mutex;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

static SESSION: OnceLock<Session> = OnceLock::new();
static INIT: Mutex<()> = parking_lot::const_mutex(());

/// Bootstraps the process once and publishes the resulting [`Session`].
///
/// The first successful call wins; every later call returns that session and
/// ignores its `config`. A failed bootstrap publishes nothing, so the caller is
/// expected to abort.
///
/// # Errors
/// Propagates the [`KilnError`] of [`Session::bootstrap`].
pub fn init(config: BootstrapConfig) -> Result<&'static Session, KilnError> {
    if let Some(session) = SESSION.get() {
        return Ok(session);
    }

    let _guard = INIT.lock();
    if let Some(session) = SESSION.get() {
        debug!("Bootstrap already completed by another caller");
        return Ok(session);
    }

    let session = Session::bootstrap(config)?;
    Ok(SESSION.get_or_init(|| session))
}

/// Reads layered settings and process flags, then calls [`init`].
///
/// # Errors
/// Returns [`KilnError::Config`] for unreadable settings and anything [`init`] returns.
pub fn bootstrap_from_env(
    path: Option<impl AsRef<Path>>,
    env: &impl EnvSource,
) -> Result<&'static Session, KilnError> {
    let config = load_bootstrap_config(path, env).context("Failed to assemble bootstrap config")?;
    init(config)
}

/// The published session, if [`init`] has succeeded.
#[must_use]
pub fn session() -> Option<&'static Session> {
    SESSION.get()
}
