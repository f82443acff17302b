use device_ext::{
    domain::device::{HardwareField, Platform, PlatformError, ProfilePlatform},
    infra::{Settings, get_config_settings},
};
use regex::Regex;

/// The reference device: every build attribute plus serial and secure id.
pub fn reference_profile() -> ProfilePlatform {
    ProfilePlatform::new()
        .with(HardwareField::Board, "a")
        .with(HardwareField::Brand, "bb")
        .with(HardwareField::Device, "ccc")
        .with(HardwareField::Hardware, "dddd")
        .with(HardwareField::Id, "e")
        .with(HardwareField::Model, "ff")
        .with(HardwareField::Product, "ggg")
        .with(HardwareField::Serial, "SERIAL123")
        .with(HardwareField::SecureId, "ABC123")
}

/// A platform on which every read is refused.
pub struct LockedDownPlatform;

impl Platform for LockedDownPlatform {
    fn get(&self, field: HardwareField) -> Result<String, PlatformError> {
        Err(PlatformError::Restricted(field))
    }
}

/// Asserts that `value` is exactly `len` lowercase hex characters.
pub fn assert_hex_of_len(value: &str, len: usize) {
    let pattern = Regex::new(&format!("^[0-9a-f]{{{len}}}$")).expect("Pattern should compile.");
    assert!(
        pattern.is_match(value),
        "expected {len} lowercase hex characters, got {value:?}"
    );
}

/// Loads settings for the given environment. Callers must be `#[serial]`.
pub fn settings_for(environment: &str) -> Settings {
    // SAFETY: tests touching the process environment are serialised.
    unsafe { std::env::set_var("APP_ENVIRONMENT", environment) };
    let settings = get_config_settings().expect("Could not read application configuration.");
    unsafe { std::env::remove_var("APP_ENVIRONMENT") };
    settings
}
