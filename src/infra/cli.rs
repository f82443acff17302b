use clap::{Parser, Subcommand};

use crate::domain::device::HardwareField;

#[derive(Parser, Debug)]
#[command(version, about = "Device identifier and platform helpers")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Print the device identifier.
    DeviceId,
    /// Print the hash of the build attributes.
    SeedHash,
    /// Print a single platform attribute, e.g. `serial` or `secure_id`.
    Field { name: HardwareField },
    /// Print model, brand and system version.
    Info {
        #[arg(long)]
        json: bool,
    },
    /// Print the MD5 of a string.
    Md5 { text: String },
    /// Print hh:mm:ss labels for each tick of a countdown.
    Countdown {
        #[arg(long, default_value_t = 60)]
        seconds: u64,
    },
    /// Convert density-independent pixels to pixels.
    Dp { value: i32 },
}
