// SPDX-License-Identifier: AGPL-3.0-or-later

//! Parser for `wpctl status` output
//!
//! The report is a sequence of blank-line separated blocks, each starting with
//! a header line (`PipeWire ...`, `Audio`, `Video`, `Settings`). Inside the
//! `Audio` block, sections are drawn as a tree:
//!
//! ```text
//! Audio
//!  ├─ Devices:
//!  │      42. Built-in Audio                      [alsa]
//!  │
//!  ├─ Sinks:
//!  │      49. Built-in Audio Analog Stereo        [vol: 0.40]
//!  │  *   50. USB Headset                         [vol: 0.75]
//!  │
//!  ├─ Sources:
//! ```
//!
//! Device lines end with a bracketed annotation and the default device carries
//! a `*` before its identifier. The first line not ending in `]` closes the
//! section.

use crate::error::{Result, WpakError};

/// Header of the block holding the audio sections
pub const AUDIO_BLOCK: &str = "Audio";

/// One device line of a status section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusEntry {
    pub id: u32,
    pub is_default: bool,
}

/// Collect the device lines of `section` inside the `Audio` block, top to bottom.
///
/// Returns an empty list when the section is absent or has no devices.
pub fn parse_section(status: &str, section: &str) -> Result<Vec<StatusEntry>> {
    let section_header = format!("{}:", section);
    let mut entries = Vec::new();
    let mut header: Option<&str> = None;
    let mut in_section = false;

    for line in status.lines() {
        // Only a truly empty line separates blocks; whitespace-only lines belong to the block
        if line.is_empty() {
            header = None;
            continue;
        }
        let line = line.trim_end();
        let block = *header.get_or_insert(line);
        if block != AUDIO_BLOCK {
            continue;
        }

        if !in_section {
            in_section = line.ends_with(&section_header);
            continue;
        }

        if !line.ends_with(']') {
            break;
        }
        let entry = parse_device_line(line)?;
        log::trace!("{} entry: {:?}", section, entry);
        entries.push(entry);
    }

    if entries.iter().filter(|e| e.is_default).count() > 1 {
        log::warn!("more than one {} entry marked as default, using the last", section);
    }

    Ok(entries)
}

/// Index of the default entry. With several marked, the last one wins.
pub fn default_index(entries: &[StatusEntry]) -> Option<usize> {
    entries.iter().rposition(|e| e.is_default)
}

/// Parse a single device line such as ` │  *   50. USB Headset [vol: 0.75]`
pub fn parse_device_line(line: &str) -> Result<StatusEntry> {
    let rest = line.trim_start_matches(|c: char| c.is_whitespace() || is_tree_char(c));
    let (is_default, rest) = match rest.strip_prefix('*') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, rest),
    };

    let (id, _) = rest
        .split_once('.')
        .ok_or_else(|| WpakError::Parse(format!("no '.' after device id in {:?}", line)))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(WpakError::Parse(format!("missing device id in {:?}", line)));
    }
    let id = id
        .parse::<u32>()
        .map_err(|e| WpakError::Parse(format!("device id {:?} in {:?}: {}", id, line, e)))?;

    Ok(StatusEntry { id, is_default })
}

fn is_tree_char(c: char) -> bool {
    matches!(c, '│' | '├' | '└' | '─')
}
