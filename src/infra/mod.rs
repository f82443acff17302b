mod cli;
mod config;

pub use cli::{Cli, Command};
pub use config::{ApplicationSettings, DeviceSettings, Settings, get_config_settings};
