//! Device fingerprint
//!
//! Derives a pseudo-unique identifier for a device from the secure-settings
//! identifier, the hardware serial and a hash of the build attributes. When no
//! signal can be read at all, a random identifier is returned instead.

use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::domain::helpers::device_fingerprint_calculator::{digest_to_hex, random_device_id};

use super::{DigestAlgorithm, HardwareField, Platform, PlatformError, Sha1Digest};

const SEED_PREFIX: &str = "3883756";
const SEPARATOR: char = '|';

pub struct DeviceFingerprint<'a> {
    platform: &'a dyn Platform,
    digest: &'a dyn DigestAlgorithm,
}

impl<'a> DeviceFingerprint<'a> {
    pub fn new(platform: &'a dyn Platform) -> Self {
        Self::with_digest(platform, &Sha1Digest)
    }

    pub fn with_digest(platform: &'a dyn Platform, digest: &'a dyn DigestAlgorithm) -> Self {
        Self { platform, digest }
    }

    /// The seed folded from the build attribute lengths, e.g. `388375612341239`.
    pub fn composite_seed(&self) -> Result<String, PlatformError> {
        let mut seed = String::from(SEED_PREFIX);
        for field in HardwareField::SEED_FIELDS {
            let value = self.platform.get(field)?;
            seed.push(digit_of_len(&value));
        }
        Ok(seed)
    }

    /// Hash of the composite seed paired with a hash of the serial.
    ///
    /// The string hash is only promised to be stable within a single run, so
    /// this value must not be persisted and compared across processes.
    pub fn derive_seed_hash(&self) -> Result<Uuid, PlatformError> {
        let seed = self.composite_seed()?;
        let serial = self.platform.get(HardwareField::Serial)?;
        Ok(Uuid::from_u64_pair(
            widen(string_hash(&seed)),
            widen(string_hash(&serial)),
        ))
    }

    /// Secure-settings identifier, empty when it cannot be read.
    pub fn android_id(&self) -> String {
        self.platform.get_or_empty(HardwareField::SecureId)
    }

    /// Hardware serial, empty when it cannot be read.
    pub fn serial(&self) -> String {
        self.platform.get_or_empty(HardwareField::Serial)
    }

    /// The device identifier: 40 hex characters when any signal was present,
    /// otherwise 32 random hex characters. Never fails.
    #[instrument(level = "debug", skip(self))]
    pub fn device_id(&self) -> String {
        let android_id = self.android_id();
        let serial = self.serial();
        let seed_hash = match self.derive_seed_hash() {
            Ok(uuid) => uuid.to_string(),
            Err(e) => {
                debug!("Seed hash unavailable: {e}");
                String::new()
            }
        };

        let composite = composite(&android_id, &serial, &seed_hash);
        if composite.is_empty() {
            warn!("No device signal available, using a random identifier.");
            return random_device_id();
        }

        match self.digest.digest(composite.as_bytes()) {
            Ok(digest) => match digest_to_hex(&digest) {
                Some(hex) => hex,
                None => {
                    warn!("Digest of device signals was empty, using a random identifier.");
                    random_device_id()
                }
            },
            Err(e) => {
                warn!("{e} Using a random identifier.");
                random_device_id()
            }
        }
    }
}

/// Joins the present signals: `a|` then `s|` then `u`, skipping empty ones.
pub fn composite(android_id: &str, serial: &str, seed_hash: &str) -> String {
    let mut composite = String::new();
    if !android_id.is_empty() {
        composite.push_str(android_id);
        composite.push(SEPARATOR);
    }
    if !serial.is_empty() {
        composite.push_str(serial);
        composite.push(SEPARATOR);
    }
    if !seed_hash.is_empty() {
        composite.push_str(seed_hash);
    }
    composite
}

/// Polynomial hash over UTF-16 code units, `h = 31 * h + unit` with wrapping.
fn string_hash(value: &str) -> i32 {
    value
        .encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Sign-extends the 32-bit hash into a UUID half.
fn widen(hash: i32) -> u64 {
    i64::from(hash) as u64
}

fn digit_of_len(value: &str) -> char {
    let len = value.encode_utf16().count() % 10;
    char::from(b'0' + len as u8)
}

//-------------------------- Tests -------------------------------
