use kiln_kernel::config::ConfigError;
use kiln_loader::LoaderError;
use std::borrow::Cow;
use std::path::Path;

/// Anything that can abort process bootstrap.
#[kiln_derive::kiln_error]
pub enum KilnError {
    #[error("Configuration failed{}: {source}", format_context(.context))]
    Config { source: ConfigError, context: Option<Cow<'static, str>> },

    #[error("Source loading failed{}: {source}", format_context(.context))]
    Loader { source: LoaderError, context: Option<Cow<'static, str>> },

    #[error("Bootstrap error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl KilnError {
    /// The source unit that caused the failure, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Loader { source, .. } => source.path(),
            _ => None,
        }
    }
}
