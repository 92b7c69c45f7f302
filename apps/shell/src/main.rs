use anyhow::{Context, bail};
use kiln::kernel::config::{ProcessEnv, load_bootstrap_config, resolve_flags};
use kiln_logger::Logger;
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let flags = resolve_flags(&ProcessEnv);
    let _logger = Logger::builder().name(env!("CARGO_PKG_NAME")).flags(flags).init()?;

    let mut config = load_bootstrap_config(None::<&str>, &ProcessEnv)
        .context("Critical: Configuration is malformed")?;
    if let Some(root) = std::env::args_os().nth(1) {
        config = config.with_source_root(root);
    }

    let session = match kiln::init(config) {
        Ok(session) => session,
        Err(e) => match e.path() {
            Some(path) => bail!("{}: {e}", path.display()),
            None => return Err(e.into()),
        },
    };

    if let Some(dump) = session.dump() {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{dump}").context("Failed to write dump")?;
    }

    Ok(())
}
