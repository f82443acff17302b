pub mod countdown;
pub mod device;
pub mod display;
mod helpers;
pub mod text;

pub use helpers::{
    device_fingerprint_calculator::random_device_id,
    fake,
};
