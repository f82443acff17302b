use std::str::FromStr;

use strum_macros::{AsRefStr, Display};

/// Named attributes a [`Platform`](super::Platform) can be asked for.
///
/// The first eight variants are the build attributes that feed the composite
/// seed, in seed order. `SecureId` and `SystemVersion` are read separately.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum HardwareField {
    Board,
    Brand,
    Device,
    Hardware,
    Id,
    Model,
    Product,
    Serial,
    SecureId,
    SystemVersion,
}

impl HardwareField {
    /// Build attributes in the order their lengths are folded into the seed.
    pub const SEED_FIELDS: [HardwareField; 8] = [
        HardwareField::Board,
        HardwareField::Brand,
        HardwareField::Device,
        HardwareField::Hardware,
        HardwareField::Id,
        HardwareField::Model,
        HardwareField::Product,
        HardwareField::Serial,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown hardware field '{0}'.")]
pub struct UnknownHardwareField(pub String);

impl FromStr for HardwareField {
    type Err = UnknownHardwareField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let field = match s {
            "board" => HardwareField::Board,
            "brand" => HardwareField::Brand,
            "device" => HardwareField::Device,
            "hardware" => HardwareField::Hardware,
            "id" => HardwareField::Id,
            "model" => HardwareField::Model,
            "product" => HardwareField::Product,
            "serial" => HardwareField::Serial,
            "secure_id" => HardwareField::SecureId,
            "system_version" => HardwareField::SystemVersion,
            other => return Err(UnknownHardwareField(other.to_owned())),
        };
        Ok(field)
    }
}
