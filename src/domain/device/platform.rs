use std::collections::{HashMap, HashSet};

use super::{HardwareField, PlatformError};

/// Read-only access to the attributes the host platform reports about the device.
///
/// Implementations are handed to consumers explicitly; there is no process-wide
/// instance. Every read may fail independently of the others.
pub trait Platform: Send + Sync {
    fn get(&self, field: HardwareField) -> Result<String, PlatformError>;

    /// Reads a field, treating any failure as an empty value.
    fn get_or_empty(&self, field: HardwareField) -> String {
        self.get(field).unwrap_or_else(|e| {
            tracing::debug!("{e}");
            String::new()
        })
    }
}

impl<P: Platform + ?Sized> Platform for &P {
    fn get(&self, field: HardwareField) -> Result<String, PlatformError> {
        (**self).get(field)
    }
}

/// A platform backed by a fixed set of attribute values, typically loaded from
/// configuration. Fields that were never set read as `Unavailable`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfilePlatform {
    values: HashMap<HardwareField, String>,
    restricted: HashSet<HardwareField>,
}

impl ProfilePlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: HardwareField, value: impl Into<String>) -> Self {
        self.values.insert(field, value.into());
        self
    }

    /// Sets the field when a value is present, leaves it unavailable otherwise.
    pub fn with_optional(self, field: HardwareField, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.with(field, value),
            None => self,
        }
    }

    /// Marks a field as denied by the platform, regardless of any stored value.
    pub fn restrict(mut self, field: HardwareField) -> Self {
        self.restricted.insert(field);
        self
    }
}

impl Platform for ProfilePlatform {
    fn get(&self, field: HardwareField) -> Result<String, PlatformError> {
        if self.restricted.contains(&field) {
            return Err(PlatformError::Restricted(field));
        }
        self.values
            .get(&field)
            .cloned()
            .ok_or(PlatformError::Unavailable(field))
    }
}
