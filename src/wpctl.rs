// SPDX-License-Identifier: AGPL-3.0-or-later

//! Typed wrapper around the `wpctl` subcommands wpak uses

use std::fmt;

use crate::config::Config;
use crate::error::Result;
use crate::runner::CommandRunner;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Relative volume change, formatted the way `wpctl set-volume` expects (`5%+`, `10%-`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeStep {
    pub percent: u32,
    pub direction: Direction,
}

impl VolumeStep {
    /// `None` for a zero delta
    pub fn from_delta(delta: i32) -> Option<Self> {
        let direction = match delta {
            0 => return None,
            d if d > 0 => Direction::Up,
            _ => Direction::Down,
        };
        Some(Self { percent: delta.unsigned_abs(), direction })
    }
}

impl fmt::Display for VolumeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self.direction {
            Direction::Up => '+',
            Direction::Down => '-',
        };
        write!(f, "{}%{}", self.percent, sign)
    }
}

/// `wpctl` invocations
pub struct Wpctl<'a> {
    runner: &'a dyn CommandRunner,
    program: &'a str,
    volume_limit: &'a str,
}

impl<'a> Wpctl<'a> {
    pub fn new(runner: &'a dyn CommandRunner, config: &'a Config) -> Self {
        Self {
            runner,
            program: &config.wpctl,
            volume_limit: &config.volume_limit,
        }
    }

    /// Full `wpctl status` report
    pub fn status(&self) -> Result<String> {
        self.runner.run(self.program, &["status"])
    }

    /// `key = "value"` properties of one object
    pub fn inspect(&self, id: u32) -> Result<String> {
        self.runner.run(self.program, &["inspect", &id.to_string()])
    }

    /// Volume line of `target`, e.g. `Volume: 0.40 [MUTED]`
    pub fn get_volume(&self, target: &str) -> Result<String> {
        self.runner.run(self.program, &["get-volume", target])
    }

    pub fn set_volume(&self, target: &str, step: VolumeStep) -> Result<()> {
        let step = step.to_string();
        self.runner
            .run(self.program, &["set-volume", target, &step, "-l", self.volume_limit])?;
        Ok(())
    }

    pub fn toggle_mute(&self, target: &str) -> Result<()> {
        self.runner.run(self.program, &["set-mute", target, "toggle"])?;
        Ok(())
    }

    pub fn set_default(&self, id: u32) -> Result<()> {
        self.runner.run(self.program, &["set-default", &id.to_string()])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::testing::FakeRunner;

    #[test]
    fn test_volume_step_from_delta() {
        assert_eq!(VolumeStep::from_delta(0), None);
        assert_eq!(
            VolumeStep::from_delta(5),
            Some(VolumeStep { percent: 5, direction: Direction::Up })
        );
        assert_eq!(
            VolumeStep::from_delta(-5),
            Some(VolumeStep { percent: 5, direction: Direction::Down })
        );
    }

    #[test]
    fn test_volume_step_display() {
        assert_eq!(VolumeStep::from_delta(5).unwrap().to_string(), "5%+");
        assert_eq!(VolumeStep::from_delta(-12).unwrap().to_string(), "12%-");
        assert_eq!(
            VolumeStep::from_delta(i32::MIN).unwrap().to_string(),
            "2147483648%-"
        );
    }

    #[test]
    fn test_commands() {
        let runner = FakeRunner::new()
            .respond("wpctl get-volume @DEFAULT_AUDIO_SINK@", "Volume: 0.40\n");
        let config = Config::default();
        let wpctl = Wpctl::new(&runner, &config);

        assert_eq!(wpctl.get_volume("@DEFAULT_AUDIO_SINK@").unwrap(), "Volume: 0.40");
        wpctl
            .set_volume("@DEFAULT_AUDIO_SINK@", VolumeStep::from_delta(-5).unwrap())
            .unwrap();
        wpctl.toggle_mute("@DEFAULT_AUDIO_SOURCE@").unwrap();
        wpctl.set_default(49).unwrap();
        wpctl.inspect(49).unwrap();

        assert_eq!(
            runner.lines(),
            vec![
                "wpctl get-volume @DEFAULT_AUDIO_SINK@",
                "wpctl set-volume @DEFAULT_AUDIO_SINK@ 5%- -l 1.0",
                "wpctl set-mute @DEFAULT_AUDIO_SOURCE@ toggle",
                "wpctl set-default 49",
                "wpctl inspect 49",
            ]
        );
    }

    #[test]
    fn test_configured_program_and_limit() {
        let runner = FakeRunner::new();
        let config = Config {
            wpctl: "/usr/local/bin/wpctl".into(),
            volume_limit: "1.5".into(),
            ..Config::default()
        };
        let wpctl = Wpctl::new(&runner, &config);
        wpctl
            .set_volume("@DEFAULT_AUDIO_SINK@", VolumeStep::from_delta(10).unwrap())
            .unwrap();
        assert_eq!(
            runner.lines(),
            vec!["/usr/local/bin/wpctl set-volume @DEFAULT_AUDIO_SINK@ 10%+ -l 1.5"]
        );
    }
}
