// SPDX-License-Identifier: AGPL-3.0-or-later

//! User-facing operations
//!
//! Each operation takes the [`DeviceContext`] it acts on explicitly and runs a
//! short, fixed sequence of external commands. The first failure aborts the
//! operation.

use std::fmt;
use std::str::FromStr;

use crate::config::Config;
use crate::context::DeviceContext;
use crate::device::DeviceList;
use crate::error::{Result, WpakError};
use crate::menu::Menu;
use crate::notify::{Notification, Notifier};
use crate::runner::CommandRunner;
use crate::wpctl::{VolumeStep, Wpctl};

/// The external programs, configured
pub struct Tools<'a> {
    pub wpctl: Wpctl<'a>,
    pub menu: Menu<'a>,
    pub notifier: Notifier<'a>,
    pub notify_timeout_ms: u32,
}

impl<'a> Tools<'a> {
    pub fn new(runner: &'a dyn CommandRunner, config: &'a Config) -> Self {
        Self {
            wpctl: Wpctl::new(runner, config),
            menu: Menu::new(runner, &config.menu),
            notifier: Notifier::new(runner, &config.notifier),
            notify_timeout_ms: config.notify_timeout_ms,
        }
    }
}

/// Toggle mute on the default device, then notify
pub fn toggle_mute(tools: &Tools<'_>, ctx: &DeviceContext) -> Result<()> {
    tools.wpctl.toggle_mute(&ctx.default_id)?;
    notify(tools, ctx)
}

/// Change the default device's volume by `delta` percent, then notify.
///
/// A zero delta does nothing at all.
pub fn turn_volume(tools: &Tools<'_>, ctx: &DeviceContext, delta: i32) -> Result<()> {
    let Some(step) = VolumeStep::from_delta(delta) else {
        log::debug!("volume delta is zero, nothing to do");
        return Ok(());
    };
    tools.wpctl.set_volume(&ctx.default_id, step)?;
    notify(tools, ctx)
}

/// Make the device after the current default the new default, then notify
pub fn cycle_device(tools: &Tools<'_>, ctx: &DeviceContext) -> Result<()> {
    let list = DeviceList::fetch(&tools.wpctl, ctx)?;
    let Some(next) = list.next_after_default() else {
        log::info!("no {} to cycle through", ctx.section);
        return Ok(());
    };
    log::info!("switching default {} to {} ({})", ctx.prompt, next.nick, next.id);
    tools.wpctl.set_default(next.id)?;
    notify(tools, ctx)
}

/// Let the user pick the default device from a menu
pub fn select_device(tools: &Tools<'_>, ctx: &DeviceContext) -> Result<()> {
    let list = DeviceList::fetch(&tools.wpctl, ctx)?;
    if list.is_empty() {
        log::info!("no {} to select from", ctx.section);
        return Ok(());
    }

    let preselect = list.default_device().map_or("", |d| d.nick.as_str());
    let index = tools.menu.choose(&list.nicks(), preselect, &ctx.prompt)?;
    let chosen = list
        .get(index)
        .ok_or_else(|| WpakError::Parse(format!("menu index {} out of range", index)))?;

    log::info!("switching default {} to {} ({})", ctx.prompt, chosen.nick, chosen.id);
    tools.wpctl.set_default(chosen.id)
}

/// Show the default device and its volume
pub fn notify(tools: &Tools<'_>, ctx: &DeviceContext) -> Result<()> {
    let volume = tools.wpctl.get_volume(&ctx.default_id)?;
    let list = DeviceList::fetch(&tools.wpctl, ctx)?;
    let device = list.default_device().ok_or_else(|| {
        WpakError::NoDefaultDevice(format!("none of the {} is marked as default", ctx.section))
    })?;

    tools.notifier.send(&Notification {
        stack_tag: ctx.notif_tag.clone(),
        timeout_ms: tools.notify_timeout_ms,
        summary: format!("{}  {}", ctx.icon, device.nick),
        body: volume,
    })
}

/// Output format of [`list_devices`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ListFormat {
    type Err = WpakError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(ListFormat::Text),
            "json" => Ok(ListFormat::Json),
            other => Err(WpakError::InvalidInput(format!(
                "unknown format {:?}, expected text or json",
                other
            ))),
        }
    }
}

impl fmt::Display for ListFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListFormat::Text => write!(f, "text"),
            ListFormat::Json => write!(f, "json"),
        }
    }
}

/// Render the context's devices, default marked
pub fn list_devices(tools: &Tools<'_>, ctx: &DeviceContext, format: ListFormat) -> Result<String> {
    let list = DeviceList::fetch(&tools.wpctl, ctx)?;
    render_list(&list, format)
}

fn render_list(list: &DeviceList, format: ListFormat) -> Result<String> {
    match format {
        ListFormat::Json => Ok(serde_json::to_string_pretty(list)?),
        ListFormat::Text => {
            let default = list.default_index();
            let lines: Vec<String> = list
                .devices()
                .iter()
                .enumerate()
                .map(|(i, d)| {
                    let marker = if default == Some(i) { '*' } else { ' ' };
                    format!("{} {:>4}  {}  ({})", marker, d.id, d.nick, d.name)
                })
                .collect();
            Ok(lines.join("\n"))
        }
    }
}
