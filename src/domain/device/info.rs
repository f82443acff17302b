use serde::Serialize;

use super::{HardwareField, Platform};

/// What the platform reports about the handset itself.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DeviceInfo {
    pub model: String,
    pub brand: String,
    pub system_version: String,
}

impl DeviceInfo {
    /// Reads each attribute independently; unreadable ones are left empty.
    pub fn read(platform: &dyn Platform) -> Self {
        Self {
            model: platform.get_or_empty(HardwareField::Model),
            brand: platform.get_or_empty(HardwareField::Brand),
            system_version: platform.get_or_empty(HardwareField::SystemVersion),
        }
    }
}
