//! # Logger
//!
//! Console logging for Kiln processes on top of `tracing-subscriber`, plus
//! [`TraceLog`], the indented trace channel that is only active when the
//! `LOG` flag is set.
//!
//! * Use [`LoggerBuilder::flags`] to derive the level from the process flags.
//! * Use [`LoggerBuilder::env_filter`] to set module-directed filters
//!   (e.g., `"kiln_loader=debug"`); otherwise `RUST_LOG` is honoured.
//!
//! ## Example
//!
//! ```rust
//! # use kiln_domain::flags::Flags;
//! # use kiln_logger::{LevelFilter, Logger};
//!
//! let logger = Logger::builder().name("kiln").flags(Flags::DEFAULTS | Flags::LOG).init().unwrap();
//! assert_eq!(logger.level(), LevelFilter::DEBUG);
//! ```

mod error;
mod trace;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use crate::trace::{IndentGuard, TraceLog};
pub use tracing::level_filters::LevelFilter;

use kiln_domain::flags::Flags;
use private::Sealed;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}

/// A builder for the global tracing subscriber. A name is required before [`LoggerBuilder::init`].
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName> {
    name: N,
    level: LevelFilter,
    env_filter: Option<String>,
}

impl LoggerBuilder<NoName> {
    /// Names the process in log output.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName> {
        LoggerBuilder { name: WithName(name.into()), level: self.level, env_filter: self.env_filter }
    }
}

impl LoggerBuilder<WithName> {
    /// Sets the default level directly.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Derives the level from the process flags: `DEBUG` when `LOG` is set, `WARN` otherwise.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn flags(self, flags: Flags) -> Self {
        self.level(if flags.log() { LevelFilter::DEBUG } else { LevelFilter::WARN })
    }

    /// Adds an explicit env filter (e.g., `kiln=debug,walkdir=info`) used instead of `RUST_LOG`.
    ///
    /// Invalid filters will cause [`LoggerBuilder::init`] to return an error.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Consumes the builder and installs the global subscriber.
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] for an empty name or a bad filter and
    /// [`LoggerError::Subscriber`] if a global subscriber has already been set.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Self { name: WithName(name), level, env_filter } = self;
        if name.trim().is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "Logger name cannot be empty".into(),
                context: None,
            });
        }

        let filter = build_env_filter(level, env_filter.as_deref())?;
        tracing_subscriber::registry()
            .with(filter)
            .with(layer().compact().with_ansi(true))
            .try_init()
            .context(format!("Failed to install logger '{name}'"))?;

        tracing::debug!(%name, %level, "Logger initialized");
        Ok(Logger { level })
    }
}

/// A handle to the initialized logging system.
#[must_use]
#[derive(Debug)]
pub struct Logger {
    level: LevelFilter,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`] with the `WARN` default level.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn builder() -> LoggerBuilder {
        LoggerBuilder { name: NoName, level: LevelFilter::WARN, env_filter: None }
    }

    /// The default level the subscriber was installed with.
    #[must_use]
    pub const fn level(&self) -> LevelFilter {
        self.level
    }
}

fn build_env_filter(level: LevelFilter, filter: Option<&str>) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(level.into());
    filter.map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: None,
            })
        },
    )
}
