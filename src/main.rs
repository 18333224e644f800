// main.rs

use anyhow::Context;
use clap::Parser;
use cli_calculator::{BufReadSource, Cli, EditorSource, Repl};
use nix::unistd::isatty;
use std::io;
use std::os::unix::io::AsRawFd;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let config = cli.session_config();
    // Pipes and files get the plain reader so the calculator can be scripted.
    let interactive = !cli.plain && isatty(io::stdin().as_raw_fd()).unwrap_or(false);
    log::debug!("interactive: {}, config: {:?}", interactive, config);

    if interactive {
        let source = EditorSource::new().context("failed to create line editor")?;
        Repl::new(source, io::stdout(), config)
            .run()
            .context("terminal I/O failed")?;
    } else {
        let source = BufReadSource::new(io::stdin().lock(), io::stdout());
        Repl::new(source, io::stdout(), config)
            .run()
            .context("terminal I/O failed")?;
    }
    Ok(())
}
