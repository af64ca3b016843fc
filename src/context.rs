// SPDX-License-Identifier: AGPL-3.0-or-later

//! Device context: which kind of device wpak operates on

use crate::config::Config;

/// Playback sinks or capture sources
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Sink,
    Source,
}

impl Target {
    pub fn from_source_flag(source: bool) -> Self {
        if source {
            Target::Source
        } else {
            Target::Sink
        }
    }
}

/// Everything that differs between operating on sinks and sources.
///
/// Built once at startup and passed by reference into each operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceContext {
    pub target: Target,
    /// wpctl alias for the current default device
    pub default_id: String,
    /// dunst stack tag, so repeated notifications replace each other
    pub notif_tag: String,
    /// Section header in `wpctl status` listing these devices
    pub section: String,
    pub icon: String,
    pub prompt: String,
}

impl DeviceContext {
    pub fn new(target: Target) -> Self {
        match target {
            Target::Sink => Self {
                target,
                default_id: "@DEFAULT_AUDIO_SINK@".into(),
                notif_tag: "wpak-sink".into(),
                section: "Sinks".into(),
                icon: "󰓃".into(),
                prompt: "sink".into(),
            },
            Target::Source => Self {
                target,
                default_id: "@DEFAULT_AUDIO_SOURCE@".into(),
                notif_tag: "wpak-source".into(),
                section: "Sources".into(),
                icon: "󰍬".into(),
                prompt: "source".into(),
            },
        }
    }

    /// Context for `target` with the icon and prompt overrides from `config` applied
    pub fn from_config(target: Target, config: &Config) -> Self {
        let mut ctx = Self::new(target);
        let overrides = match target {
            Target::Sink => &config.sink,
            Target::Source => &config.source,
        };
        if let Some(icon) = &overrides.icon {
            ctx.icon = icon.clone();
        }
        if let Some(prompt) = &overrides.prompt {
            ctx.prompt = prompt.clone();
        }
        ctx
    }
}
