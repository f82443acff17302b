use device_ext::domain::{
    device::{DeviceFingerprint, HardwareField, ProfilePlatform, composite},
    fake::FullProfile,
};
use fake::Fake;

use crate::test_utils::{LockedDownPlatform, assert_hex_of_len, reference_profile};

#[test]
fn same_signals_give_the_same_id() {
    let platform = reference_profile();
    let fingerprint = DeviceFingerprint::new(&platform);

    let first = fingerprint.device_id();
    let second = fingerprint.device_id();

    assert_eq!(first, second);
    assert_eq!(first, "ae0b1bfeca04e8042490e375970eb5c00ca501cf");
}

#[test]
fn hashed_ids_are_40_lowercase_hex() {
    for _ in 0..20 {
        let platform: ProfilePlatform = FullProfile.fake();
        assert_hex_of_len(&DeviceFingerprint::new(&platform).device_id(), 40);
    }
}

#[test]
fn no_signals_gives_a_fresh_random_id_each_time() {
    let platform = ProfilePlatform::new();
    let fingerprint = DeviceFingerprint::new(&platform);

    let first = fingerprint.device_id();
    let second = fingerprint.device_id();

    assert_hex_of_len(&first, 32);
    assert_hex_of_len(&second, 32);
    assert_ne!(first, second);
}

#[test]
fn missing_secure_id_is_skipped_but_id_stays_deterministic() {
    let platform = ProfilePlatform::new()
        .with(HardwareField::Board, "a")
        .with(HardwareField::Brand, "bb")
        .with(HardwareField::Device, "ccc")
        .with(HardwareField::Hardware, "dddd")
        .with(HardwareField::Id, "e")
        .with(HardwareField::Model, "ff")
        .with(HardwareField::Product, "ggg")
        .with(HardwareField::Serial, "SERIAL123");
    let fingerprint = DeviceFingerprint::new(&platform);

    let id = fingerprint.device_id();

    assert_hex_of_len(&id, 40);
    assert_eq!(id, fingerprint.device_id());
    assert_eq!(id, "76d80673e6690b61073ddfbfa62e3358b5b4d65e");
}

#[test]
fn composite_is_pipe_separated_in_order() {
    assert_eq!(composite("X", "Y", "Z"), "X|Y|Z");
}

#[test]
fn every_read_failing_still_yields_an_id() {
    let fingerprint = DeviceFingerprint::new(&LockedDownPlatform);

    assert_eq!(fingerprint.android_id(), "");
    assert_eq!(fingerprint.serial(), "");
    assert!(fingerprint.derive_seed_hash().is_err());
    assert_hex_of_len(&fingerprint.device_id(), 32);
}

#[test]
fn secure_id_alone_is_enough_for_a_hashed_id() {
    let platform = ProfilePlatform::new().with(HardwareField::SecureId, "ABC123");
    let fingerprint = DeviceFingerprint::new(&platform);

    let id = fingerprint.device_id();
    assert_hex_of_len(&id, 40);
    assert_eq!(id, fingerprint.device_id());
}

#[test]
fn fingerprint_can_be_shared_between_threads() {
    let platform = reference_profile();
    let fingerprint = DeviceFingerprint::new(&platform);

    let ids: Vec<String> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| fingerprint.device_id())).collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("Thread should not panic."))
            .collect()
    });

    assert!(ids.iter().all(|id| id == &ids[0]));
}
