use std::fmt::Display;
use std::sync::atomic::{AtomicUsize, Ordering};

const INDENT: &str = "  ";

/// Indented trace channel, active only when the `LOG` flag is set.
///
/// Nesting is tracked with [`TraceLog::indent`]; each line is prefixed with two
/// spaces per open [`IndentGuard`]. Lines go to `tracing` under the
/// `kiln::trace` target at `INFO`.
///
/// ```rust
/// use kiln_logger::TraceLog;
///
/// let log = TraceLog::new(true);
/// {
///     let _scope = log.indent();
///     assert_eq!(log.render("visiting Int").as_deref(), Some("  visiting Int"));
/// }
/// assert_eq!(log.render("done").as_deref(), Some("done"));
/// assert_eq!(TraceLog::new(false).render("dropped"), None);
/// ```
#[derive(Debug, Default)]
pub struct TraceLog {
    enabled: bool,
    depth: AtomicUsize,
}

impl TraceLog {
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled, depth: AtomicUsize::new(0) }
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth.load(Ordering::Relaxed)
    }

    /// Opens one nesting level until the returned guard is dropped.
    #[must_use = "The indentation is removed as soon as the guard is dropped"]
    pub fn indent(&self) -> IndentGuard<'_> {
        self.depth.fetch_add(1, Ordering::Relaxed);
        IndentGuard { log: self }
    }

    /// The line that [`TraceLog::log`] would emit, or `None` when disabled.
    #[must_use]
    pub fn render(&self, message: impl Display) -> Option<String> {
        self.enabled.then(|| format!("{}{message}", INDENT.repeat(self.depth())))
    }

    pub fn log(&self, message: impl Display) {
        if let Some(line) = self.render(message) {
            tracing::info!(target: "kiln::trace", "{line}");
        }
    }
}

/// Restores the previous nesting level of a [`TraceLog`] on drop.
#[derive(Debug)]
pub struct IndentGuard<'a> {
    log: &'a TraceLog,
}

impl Drop for IndentGuard<'_> {
    fn drop(&mut self) {
        self.log.depth.fetch_sub(1, Ordering::Relaxed);
    }
}
