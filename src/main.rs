use anyhow::Context;
use clap::Parser;
use device_ext::{
    configure_tracing, construct_app_state,
    infra::{Cli, get_config_settings},
    run_command,
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = get_config_settings().context("Could not read application configuration.")?;

    // _worker_guard is held until main() returns so buffered tracing events are flushed to the
    // log file when it is dropped.
    let _worker_guard = configure_tracing(&settings);

    let app_state = construct_app_state(settings);

    let stdout = std::io::stdout();
    run_command(&cli.command, &app_state, &mut stdout.lock())
}
