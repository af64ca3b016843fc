// SPDX-License-Identifier: AGPL-3.0-or-later

//! External program invocation
//!
//! Everything wpak does ends in a call to `wpctl`, the menu program or the
//! notifier. [`CommandRunner`] is the seam between that plumbing and the
//! logic deciding what to call, so the logic can be tested without PipeWire.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use crate::error::{Result, WpakError};

/// Runs an external program to completion and returns its trimmed stdout
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String>;

    /// Like [`CommandRunner::run`], with `input` written to the program's stdin
    fn run_with_input(&self, program: &str, args: &[&str], input: &str) -> Result<String>;
}

/// [`CommandRunner`] backed by `std::process`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        log::debug!("running {} {:?}", program, args);
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| spawn_error(program, e))?;
        check_output(program, output)
    }

    fn run_with_input(&self, program: &str, args: &[&str], input: &str) -> Result<String> {
        log::debug!("running {} {:?} with {} bytes on stdin", program, args, input.len());
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| spawn_error(program, e))?;

        {
            // Dropping the handle closes the pipe, which the reader needs to see EOF.
            let mut stdin = child.stdin.take().ok_or_else(|| {
                WpakError::Io(std::io::Error::new(
                    std::io::ErrorKind::BrokenPipe,
                    format!("{} has no stdin", program),
                ))
            })?;
            if let Err(e) = stdin.write_all(input.as_bytes()) {
                let _ = child.kill();
                let _ = child.wait();
                return Err(e.into());
            }
        }

        let output = child.wait_with_output()?;
        check_output(program, output)
    }
}

fn spawn_error(program: &str, err: std::io::Error) -> WpakError {
    WpakError::Io(std::io::Error::new(
        err.kind(),
        format!("failed to run {}: {}", program, err),
    ))
}

fn check_output(program: &str, output: Output) -> Result<String> {
    if !output.status.success() {
        return Err(WpakError::CommandFailed {
            program: program.to_string(),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }
    Ok(trim_output(&String::from_utf8_lossy(&output.stdout)))
}

/// Strip surrounding spaces, tabs and line breaks
pub fn trim_output(s: &str) -> String {
    s.trim_matches(|c| matches!(c, ' ' | '\n' | '\t' | '\r')).to_string()
}
