// SPDX-License-Identifier: MIT OR Apache-2.0
//! Click scripts.
//!
//! One click per line, written as the chord followed by the action id:
//!
//! ```text
//! # replace, then add, then remove
//! graph.select_x_location_channel
//! shift+graph.select_y_rotation_channel
//! ctrl+graph.select_x_location_channel
//! ```

use crate::error::{HostError, Result};
use channel_filter::{FilterAction, FilterProfile, Modifiers};

/// One scripted button click
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Click {
    /// 1-based source line (0 for clicks given on the command line)
    pub line: usize,
    /// Action id as written
    pub action_id: String,
    /// Modifiers held
    pub modifiers: Modifiers,
}

impl Click {
    /// Parse `[shift+][ctrl+]<action id>`
    pub fn parse(text: &str, line: usize) -> Result<Self> {
        let mut parts: Vec<&str> = text.trim().split('+').map(str::trim).collect();
        let action_id = parts.pop().unwrap_or_default();
        if action_id.is_empty() {
            return Err(HostError::Script {
                line,
                message: format!("missing action id in {text:?}"),
            });
        }

        let mut modifiers = Modifiers::NONE;
        for part in parts {
            match part.to_ascii_lowercase().as_str() {
                "shift" => modifiers.shift = true,
                "ctrl" | "control" => modifiers.ctrl = true,
                other => {
                    return Err(HostError::Script {
                        line,
                        message: format!("unknown modifier {other:?}"),
                    })
                }
            }
        }

        Ok(Self {
            line,
            action_id: action_id.to_string(),
            modifiers,
        })
    }

    /// Resolve the action id against a profile
    pub fn resolve(&self, profile: &FilterProfile) -> Result<FilterAction> {
        profile
            .find_action(&self.action_id)
            .map_err(|source| HostError::ScriptAction {
                line: self.line,
                source,
            })
    }
}

/// Parse a whole script, skipping blank lines and `#` comments
pub fn parse_script(source: &str) -> Result<Vec<Click>> {
    source
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let line_text = line.split('#').next().unwrap_or_default().trim();
            (!line_text.is_empty()).then(|| Click::parse(line_text, index + 1))
        })
        .collect()
}
