mod digest;
mod errors;
mod field;
mod fingerprint;
mod info;
mod platform;

pub use digest::{DigestAlgorithm, Sha1Digest};
pub use errors::{DigestError, PlatformError};
pub use field::{HardwareField, UnknownHardwareField};
pub use fingerprint::{DeviceFingerprint, composite};
pub use info::DeviceInfo;
pub use platform::{Platform, ProfilePlatform};
