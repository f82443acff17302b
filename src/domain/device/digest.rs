use sha1::{Digest, Sha1};

use super::DigestError;

/// The hash primitive applied to the composite before hex encoding.
pub trait DigestAlgorithm: Send + Sync {
    fn digest(&self, data: &[u8]) -> Result<Vec<u8>, DigestError>;
}

/// SHA-1, producing 20 bytes.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha1Digest;

impl DigestAlgorithm for Sha1Digest {
    fn digest(&self, data: &[u8]) -> Result<Vec<u8>, DigestError> {
        let mut hasher = Sha1::new();
        hasher.update(data);
        Ok(hasher.finalize().to_vec())
    }
}
