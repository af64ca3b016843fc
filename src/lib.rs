// SPDX-License-Identifier: AGPL-3.0-or-later

//! wpak: PipeWire device switching, volume and mute helpers
//!
//! wpak drives three external programs: `wpctl` for audio control, `rofi`
//! for interactive selection and `dunstify` for feedback notifications.
//!
//! # Examples
//!
//! ```no_run
//! use wpaklib::{actions, Config, DeviceContext, SystemRunner, Target};
//!
//! # fn main() -> wpaklib::Result<()> {
//! let config = Config::load(None)?;
//! let ctx = DeviceContext::from_config(Target::Sink, &config);
//! let tools = actions::Tools::new(&SystemRunner, &config);
//!
//! actions::turn_volume(&tools, &ctx, 5)?;
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod config;
pub mod context;
pub mod device;
pub mod error;
pub mod menu;
pub mod notify;
pub mod runner;
pub mod status;
pub mod wpctl;

pub use config::Config;
pub use context::{DeviceContext, Target};
pub use device::{Device, DeviceList};
pub use error::{Result, WpakError};
pub use runner::{CommandRunner, SystemRunner};
pub use status::StatusEntry;
pub use wpctl::VolumeStep;
