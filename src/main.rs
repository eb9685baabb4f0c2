use anyhow::Context;
use clap::Parser;
use weatherman::cli::{run, Cli};
use weatherman::utils::{resolve_log_level, setup_logging};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = cli.resolve_settings().context("loading settings")?;

    let level = resolve_log_level(cli.verbose, settings.log_level.as_deref());
    setup_logging(&level, settings.log_file.as_deref())?;

    run(&cli, &settings)
        .with_context(|| format!("reading weather data from {}", settings.data_dir.display()))?;
    Ok(())
}
