// SPDX-License-Identifier: AGPL-3.0-or-later

//! Audio devices as reported by wpctl

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::context::DeviceContext;
use crate::error::{Result, WpakError};
use crate::status;
use crate::wpctl::Wpctl;

/// A sink or source node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// PipeWire object id
    pub id: u32,
    /// `node.description`
    pub name: String,
    /// `node.nick`, shown in the menu and notifications
    pub nick: String,
}

impl Device {
    /// Build a device from the output of `wpctl inspect <id>`
    pub fn from_inspect(id: u32, inspect: &str) -> Result<Self> {
        static DESCRIPTION: OnceLock<Regex> = OnceLock::new();
        static NICK: OnceLock<Regex> = OnceLock::new();

        let description = DESCRIPTION
            .get_or_init(|| Regex::new(r#"node\.description = "(.+)""#).expect("valid regex"));
        let nick = NICK.get_or_init(|| Regex::new(r#"node\.nick = "(.+)""#).expect("valid regex"));

        Ok(Self {
            id,
            name: capture(description, inspect, id, "node.description")?,
            nick: capture(nick, inspect, id, "node.nick")?,
        })
    }
}

fn capture(re: &Regex, text: &str, id: u32, key: &str) -> Result<String> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| WpakError::Parse(format!("no {} in inspect output of device {}", key, id)))
}

/// The devices of one section, plus which one is the current default
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceList {
    devices: Vec<Device>,
    default: Option<usize>,
}

impl DeviceList {
    /// Returns `None` if `default` does not index into `devices`
    pub fn new(devices: Vec<Device>, default: Option<usize>) -> Option<Self> {
        match default {
            Some(i) if i >= devices.len() => None,
            _ => Some(Self { devices, default }),
        }
    }

    /// Query `wpctl status`, then inspect every device of the context's section
    pub fn fetch(wpctl: &Wpctl<'_>, ctx: &DeviceContext) -> Result<Self> {
        let report = wpctl.status()?;
        let entries = status::parse_section(&report, &ctx.section)?;
        let default = status::default_index(&entries);

        let devices = entries
            .iter()
            .map(|entry| Device::from_inspect(entry.id, &wpctl.inspect(entry.id)?))
            .collect::<Result<Vec<_>>>()?;

        log::debug!(
            "{} {} device(s), default index {:?}",
            devices.len(),
            ctx.section,
            default
        );
        Self::new(devices, default).ok_or_else(|| {
            WpakError::Parse(format!("default index {:?} outside {} list", default, ctx.section))
        })
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn default_index(&self) -> Option<usize> {
        self.default
    }

    pub fn default_device(&self) -> Option<&Device> {
        self.default.and_then(|i| self.devices.get(i))
    }

    pub fn get(&self, index: usize) -> Option<&Device> {
        self.devices.get(index)
    }

    /// The device after the default, wrapping around.
    ///
    /// Without a default the first device is next. `None` only for an empty list.
    pub fn next_after_default(&self) -> Option<&Device> {
        if self.devices.is_empty() {
            return None;
        }
        let next = self.default.map_or(0, |i| (i + 1) % self.devices.len());
        self.devices.get(next)
    }

    pub fn nicks(&self) -> Vec<&str> {
        self.devices.iter().map(|d| d.nick.as_str()).collect()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::context::Target;
    use crate::runner::testing::FakeRunner;

    fn device(id: u32, nick: &str) -> Device {
        Device { id, name: format!("{} description", nick), nick: nick.into() }
    }

    #[test]
    fn test_from_inspect() {
        let out = fixtures::inspect(50, "USB Headset Analog Stereo", "USB Headset");
        let device = Device::from_inspect(50, &out).unwrap();
        assert_eq!(device.id, 50);
        assert_eq!(device.name, "USB Headset Analog Stereo");
        assert_eq!(device.nick, "USB Headset");
    }

    #[test]
    fn test_from_inspect_missing_nick() {
        let out = "id 50, type PipeWire:Interface:Node\n  * node.description = \"Headset\"\n";
        let err = Device::from_inspect(50, out).unwrap_err();
        assert!(matches!(err, WpakError::Parse(_)));
        assert!(err.to_string().contains("node.nick"));
    }

    #[test]
    fn test_from_inspect_missing_description() {
        let out = "id 50, type PipeWire:Interface:Node\n  * node.nick = \"Headset\"\n";
        let err = Device::from_inspect(50, out).unwrap_err();
        assert!(err.to_string().contains("node.description"));
    }

    #[test]
    fn test_new_rejects_out_of_range_default() {
        assert!(DeviceList::new(vec![device(1, "a")], Some(1)).is_none());
        assert!(DeviceList::new(Vec::new(), Some(0)).is_none());
        assert!(DeviceList::new(Vec::new(), None).is_some());
    }

    #[test]
    fn test_next_after_default_wraps() {
        let list = DeviceList::new(vec![device(1, "a"), device(2, "b"), device(3, "c")], Some(2))
            .unwrap();
        assert_eq!(list.next_after_default().map(|d| d.id), Some(1));

        let list = DeviceList::new(vec![device(1, "a"), device(2, "b")], Some(0)).unwrap();
        assert_eq!(list.next_after_default().map(|d| d.id), Some(2));
    }

    #[test]
    fn test_next_without_default_is_first() {
        let list = DeviceList::new(vec![device(1, "a"), device(2, "b")], None).unwrap();
        assert_eq!(list.next_after_default().map(|d| d.id), Some(1));
        assert!(list.default_device().is_none());
    }

    #[test]
    fn test_next_on_empty_list() {
        assert!(DeviceList::default().next_after_default().is_none());
    }

    #[test]
    fn test_fetch_sinks() {
        let runner = FakeRunner::new()
            .respond("wpctl status", fixtures::STATUS)
            .respond("wpctl inspect 49", &fixtures::inspect(49, "Built-in Audio Analog Stereo", "Built-in"))
            .respond("wpctl inspect 50", &fixtures::inspect(50, "USB Headset Analog Stereo", "Headset"));
        let config = Config::default();
        let wpctl = Wpctl::new(&runner, &config);
        let ctx = DeviceContext::new(Target::Sink);

        let list = DeviceList::fetch(&wpctl, &ctx).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.nicks(), vec!["Built-in", "Headset"]);
        assert_eq!(list.default_index(), Some(1));
        assert_eq!(list.default_device().map(|d| d.id), Some(50));
        assert_eq!(
            runner.lines(),
            vec!["wpctl status", "wpctl inspect 49", "wpctl inspect 50"]
        );
    }

    #[test]
    fn test_fetch_stops_on_bad_inspect() {
        let runner = FakeRunner::new()
            .respond("wpctl status", fixtures::STATUS)
            .respond("wpctl inspect 49", "id 49\n");
        let config = Config::default();
        let wpctl = Wpctl::new(&runner, &config);
        let ctx = DeviceContext::new(Target::Sink);

        assert!(DeviceList::fetch(&wpctl, &ctx).is_err());
        assert_eq!(runner.lines(), vec!["wpctl status", "wpctl inspect 49"]);
    }

    #[test]
    fn test_fetch_propagates_status_failure() {
        let runner = FakeRunner::new().fail("wpctl status");
        let config = Config::default();
        let wpctl = Wpctl::new(&runner, &config);
        let ctx = DeviceContext::new(Target::Source);

        let err = DeviceList::fetch(&wpctl, &ctx).unwrap_err();
        assert!(matches!(err, WpakError::CommandFailed { .. }));
    }
}
