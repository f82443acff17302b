use anyhow::Context;
use camino::Utf8PathBuf;
use config::Config;
use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::{
    device::{HardwareField, ProfilePlatform},
    display::DisplayMetrics,
};

#[derive(Clone, Deserialize, Debug)]
pub struct Settings {
    pub environment: String,
    pub application: ApplicationSettings,
    #[serde(default)]
    pub device: DeviceSettings,
    pub display: DisplayMetrics,
}

#[derive(Clone, Deserialize, Debug)]
pub struct ApplicationSettings {
    pub logs_directory: String,
}

/// Attribute values the device reports. A missing entry behaves like an
/// attribute the platform refuses to hand out.
#[derive(Clone, Deserialize, Debug, Default, PartialEq, Eq)]
pub struct DeviceSettings {
    pub secure_id: Option<String>,
    pub system_version: Option<String>,
    pub board: Option<String>,
    pub brand: Option<String>,
    pub device: Option<String>,
    pub hardware: Option<String>,
    pub id: Option<String>,
    pub model: Option<String>,
    pub product: Option<String>,
    pub serial: Option<String>,
}

impl DeviceSettings {
    pub fn platform(&self) -> ProfilePlatform {
        ProfilePlatform::new()
            .with_optional(HardwareField::SecureId, self.secure_id.clone())
            .with_optional(HardwareField::SystemVersion, self.system_version.clone())
            .with_optional(HardwareField::Board, self.board.clone())
            .with_optional(HardwareField::Brand, self.brand.clone())
            .with_optional(HardwareField::Device, self.device.clone())
            .with_optional(HardwareField::Hardware, self.hardware.clone())
            .with_optional(HardwareField::Id, self.id.clone())
            .with_optional(HardwareField::Model, self.model.clone())
            .with_optional(HardwareField::Product, self.product.clone())
            .with_optional(HardwareField::Serial, self.serial.clone())
    }
}

fn find_config_dir() -> anyhow::Result<PathBuf> {
    let current_dir =
        std::env::current_dir().context("Failed to determine the current directory.")?;
    let current_dir =
        Utf8PathBuf::try_from(current_dir).context("Could not convert PathBuf to Utf8PathBuf")?;

    let config_dir = current_dir
        .ancestors()
        .map(|p| p.join("config"))
        .find(|p| {
            let base_path = p.join("base.yaml");
            p.is_dir() && base_path.is_file()
        })
        .ok_or_else(|| anyhow::anyhow!("Cannot find config directory!"))?;

    config_dir
        .canonicalize()
        .with_context(|| format!("Could not canonicalize {config_dir}"))
}

pub fn get_config_settings() -> anyhow::Result<Settings> {
    let config_directory = find_config_dir()?;

    // Detect the running environment - default to `development` if unspecified.
    let environment: String =
        std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "development".to_owned());

    let base_source = config::File::from(config_directory.join("base")).required(true);
    let env_source = config::File::from(config_directory.join(environment.as_str())).required(true);

    // Override settings from environment variables with a prefix of APP and '__' as separator,
    // e.g. `APP_DEVICE__SERIAL=WTK7N16923005607` sets `Settings.device.serial`.
    let overrides_source = config::Environment::with_prefix("app")
        .prefix_separator("_")
        .separator("__");

    let config = Config::builder()
        .add_source(base_source)
        .add_source(env_source)
        .add_source(overrides_source)
        .build()?;

    config
        .try_deserialize()
        .context("Could not deserialise config settings.")
}
