// SPDX-License-Identifier: AGPL-3.0-or-later

//! Desktop notifications through `dunstify`

use crate::error::Result;
use crate::runner::CommandRunner;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Notifications sharing a stack tag replace each other instead of piling up
    pub stack_tag: String,
    pub timeout_ms: u32,
    pub summary: String,
    pub body: String,
}

impl Notification {
    fn args(&self) -> Vec<String> {
        vec![
            "-h".into(),
            format!("string:x-dunst-stack-tag:{}", self.stack_tag),
            "-t".into(),
            self.timeout_ms.to_string(),
            self.summary.clone(),
            self.body.clone(),
        ]
    }
}

pub struct Notifier<'a> {
    runner: &'a dyn CommandRunner,
    program: &'a str,
}

impl<'a> Notifier<'a> {
    pub fn new(runner: &'a dyn CommandRunner, program: &'a str) -> Self {
        Self { runner, program }
    }

    pub fn send(&self, notification: &Notification) -> Result<()> {
        let args = notification.args();
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        self.runner.run(self.program, &args)?;
        Ok(())
    }
}
