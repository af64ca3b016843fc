// SPDX-License-Identifier: AGPL-3.0-or-later

//! Interactive device chooser (`rofi -dmenu`)

use crate::error::{Result, WpakError};
use crate::runner::CommandRunner;

/// A dmenu-style chooser that reports the zero-based index of the chosen line
pub struct Menu<'a> {
    runner: &'a dyn CommandRunner,
    program: &'a str,
}

impl<'a> Menu<'a> {
    pub fn new(runner: &'a dyn CommandRunner, program: &'a str) -> Self {
        Self { runner, program }
    }

    /// Show `entries` with `preselect` highlighted and return the chosen index.
    ///
    /// Custom entries are disabled, so the reply must be an index into `entries`.
    /// Cancelling the menu makes it exit non-zero, which surfaces as an error.
    pub fn choose(&self, entries: &[&str], preselect: &str, prompt: &str) -> Result<usize> {
        let args = [
            "-dmenu",
            "-no-custom",
            "-format",
            "i",
            "-select",
            preselect,
            "-p",
            prompt,
        ];
        let reply = self
            .runner
            .run_with_input(self.program, &args, &entries.join("\n"))?;

        let index = reply
            .parse::<usize>()
            .map_err(|_| WpakError::Parse(format!("{} replied {:?}, expected an index", self.program, reply)))?;
        if index >= entries.len() {
            return Err(WpakError::Parse(format!(
                "{} chose index {} of {} entries",
                self.program,
                index,
                entries.len()
            )));
        }
        Ok(index)
    }
}
