use std::borrow::Cow;
use std::path::PathBuf;

/// A specialized [`LoaderError`] enum of this crate.
#[kiln_derive::kiln_error]
pub enum LoaderError {
    #[error("Source root not found{}: {message}", format_context(.context))]
    RootNotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Filesystem I/O failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Directory walk failure{}: {source}", format_context(.context))]
    Walk { source: walkdir::Error, context: Option<Cow<'static, str>> },

    #[error("Malformed unit {}{}: {message}", .path.display(), format_context(.context))]
    Malformed { path: PathBuf, message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Unit {} failed to load{}: {message}", .path.display(), format_context(.context))]
    Unit { path: PathBuf, message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal loader error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl LoaderError {
    /// The unit path the failure is attributed to, when there is one.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Malformed { path, .. } | Self::Unit { path, .. } => Some(path),
            Self::Walk { source, .. } => source.path(),
            _ => None,
        }
    }
}
