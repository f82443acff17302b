use fake::{Dummy, Fake, Faker, faker::lorem::en::Word, uuid::UUIDv4};
use uuid::Uuid;

use crate::domain::device::{HardwareField, ProfilePlatform};

/// Generates a [`ProfilePlatform`] with every attribute populated.
pub struct FullProfile;

impl Dummy<FullProfile> for ProfilePlatform {
    fn dummy_with_rng<R: fake::Rng + ?Sized>(_config: &FullProfile, rng: &mut R) -> Self {
        let mut platform = ProfilePlatform::new();
        for field in HardwareField::SEED_FIELDS {
            let value: String = Word().fake_with_rng(rng);
            platform = platform.with(field, value);
        }
        platform
            .with(HardwareField::Serial, SerialNumber.fake_with_rng::<String, _>(rng))
            .with(HardwareField::SecureId, SecureId.fake_with_rng::<String, _>(rng))
            .with(
                HardwareField::SystemVersion,
                (8u8..15).fake_with_rng::<u8, _>(rng).to_string(),
            )
    }
}

/// A secure-settings style identifier: 16 lowercase hex characters.
pub struct SecureId;

impl Dummy<SecureId> for String {
    fn dummy_with_rng<R: fake::Rng + ?Sized>(_config: &SecureId, rng: &mut R) -> Self {
        let uuid: Uuid = UUIDv4.fake_with_rng(rng);
        uuid.simple().to_string()[..16].to_owned()
    }
}

/// A serial number in the shape vendors commonly use, e.g. `WTK7N16923005607`.
pub struct SerialNumber;

impl Dummy<SerialNumber> for String {
    fn dummy_with_rng<R: fake::Rng + ?Sized>(_config: &SerialNumber, rng: &mut R) -> Self {
        let uuid: Uuid = Faker.fake_with_rng(rng);
        uuid.simple().to_string()[..16].to_uppercase()
    }
}
