pub mod domain;
pub mod infra;

use std::io::Write;

use anyhow::Context;
use domain::{
    countdown::{Countdown, FINISHED_LABEL, HmsParts},
    device::{DeviceFingerprint, DeviceInfo, Platform, ProfilePlatform},
    text::md5_hex,
};
use infra::{Command, Settings};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

#[derive(Clone, Debug)]
pub struct AppState {
    pub settings: Settings,
    pub platform: ProfilePlatform,
}

pub fn construct_app_state(settings: Settings) -> AppState {
    let platform = settings.device.platform();
    AppState { settings, platform }
}

pub fn configure_tracing(settings: &Settings) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::daily(
        settings.application.logs_directory.clone(),
        "device_ext.log",
    );
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(non_blocking)
        .init();
    _guard
}

/// Executes a single CLI command, writing its output line by line to `out`.
pub fn run_command(command: &Command, state: &AppState, out: &mut impl Write) -> anyhow::Result<()> {
    info!("Running {command:?} in {} environment", state.settings.environment);
    match command {
        Command::DeviceId => {
            writeln!(out, "{}", DeviceFingerprint::new(&state.platform).device_id())?;
        }
        Command::SeedHash => {
            let seed_hash = DeviceFingerprint::new(&state.platform)
                .derive_seed_hash()
                .context("Build attributes are not all available.")?;
            writeln!(out, "{seed_hash}")?;
        }
        Command::Field { name } => {
            let value = state
                .platform
                .get(*name)
                .with_context(|| format!("Could not read {name}."))?;
            writeln!(out, "{value}")?;
        }
        Command::Info { json } => {
            let info = DeviceInfo::read(&state.platform);
            if *json {
                let json =
                    serde_json::to_string(&info).context("Could not serialise device info.")?;
                writeln!(out, "{json}")?;
            } else {
                writeln!(out, "model: {}", info.model)?;
                writeln!(out, "brand: {}", info.brand)?;
                writeln!(out, "system version: {}", info.system_version)?;
            }
        }
        Command::Md5 { text } => writeln!(out, "{}", md5_hex(text))?,
        Command::Countdown { seconds } => {
            let millis = seconds
                .checked_mul(1000)
                .with_context(|| format!("A countdown of {seconds} seconds is too long."))?;
            for tick in Countdown::new(millis, Countdown::DEFAULT_INTERVAL) {
                let (h, m, s) = HmsParts::from_millis(tick).labels();
                writeln!(out, "{h}:{m}:{s}")?;
            }
            writeln!(out, "{FINISHED_LABEL}")?;
        }
        Command::Dp { value } => {
            writeln!(out, "{}", state.settings.display.dp_to_px(*value))?;
        }
    }
    Ok(())
}
