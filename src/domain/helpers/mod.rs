pub mod device_fingerprint_calculator;
pub mod fake;
