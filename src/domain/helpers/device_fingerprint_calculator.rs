use uuid::Uuid;

/// A fresh random identifier: 32 lowercase hex characters, no hyphens.
#[inline]
pub fn random_device_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Lowercase hex of a digest, two characters per byte. `None` for an empty digest.
#[inline]
pub fn digest_to_hex(digest: &[u8]) -> Option<String> {
    if digest.is_empty() {
        None
    } else {
        Some(hex::encode(digest))
    }
}
