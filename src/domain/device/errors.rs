use super::HardwareField;

/// A single platform attribute could not be read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlatformError {
    #[error("Platform attribute {0} is not available on this device.")]
    Unavailable(HardwareField),
    #[error("Platform attribute {0} is restricted by the platform.")]
    Restricted(HardwareField),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DigestError {
    #[error("Digest algorithm {0} is not available.")]
    Unavailable(&'static str),
}
