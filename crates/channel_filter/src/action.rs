// SPDX-License-Identifier: MIT OR Apache-2.0
//! Named actions a panel button triggers.

use crate::channel::{Axis, Category};
use crate::engine::ApplyReport;
use crate::visibility::VisibilityReport;
use std::fmt;

/// A filter action, one per panel button
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FilterAction {
    /// Select one axis of one category
    Select {
        /// Category of the button's row
        category: Category,
        /// Axis of the button
        axis: Axis,
    },
    /// Hide every unselected channel
    HideRest,
    /// Unhide and unselect all channels
    Reset,
    /// Unselect all channels
    Unselect,
}

impl FilterAction {
    /// Bulk actions shown below the category rows, in panel order
    pub fn bulk() -> [FilterAction; 3] {
        [Self::HideRest, Self::Reset, Self::Unselect]
    }

    /// Stable identifier, e.g. `graph.select_x_location_channel`
    pub fn id(&self) -> String {
        match self {
            Self::Select { category, axis } => format!(
                "graph.select_{}_{}_channel",
                axis.letter().to_lowercase(),
                category.slug()
            ),
            Self::HideRest => "graph.hide_rest_channels".to_string(),
            Self::Reset => "graph.reset_channels".to_string(),
            Self::Unselect => "graph.unselect_channels".to_string(),
        }
    }

    /// Descriptive label, e.g. "Select X Location Channel"
    pub fn label(&self) -> String {
        match self {
            Self::Select { category, axis } => {
                format!("Select {axis} {} Channel", category.name)
            }
            Self::HideRest => "Hide Rest".to_string(),
            Self::Reset => "Reset Channels".to_string(),
            Self::Unselect => "Unselect Channels".to_string(),
        }
    }

    /// Short text drawn on the button
    pub fn button_text(&self) -> String {
        match self {
            Self::Select { axis, .. } => axis.letter().to_string(),
            _ => self.label(),
        }
    }

    /// Tooltip text
    pub fn description(&self) -> String {
        match self {
            Self::Select { category, axis } => {
                format!("Select {axis} {} channel for selected controls", category.name)
            }
            Self::HideRest => "Hide all non-selected channels".to_string(),
            Self::Reset => "Reset and unhide all channels".to_string(),
            Self::Unselect => "Unselect all selected channels".to_string(),
        }
    }

    /// Whether the modifier chord changes what this action does
    pub fn reads_modifiers(&self) -> bool {
        matches!(self, Self::Select { .. })
    }
}

impl fmt::Display for FilterAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

/// What executing an action did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionReport {
    /// Selection changed, then visibility was refreshed
    Selected(ApplyReport),
    /// Visibility refreshed
    Refreshed(VisibilityReport),
    /// Channels reset (count of channels changed)
    Reset(usize),
    /// Channels unselected (count previously selected)
    Unselected(usize),
}

impl fmt::Display for ActionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Selected(report) => write!(
                f,
                "{}: {} matched, {} visible, {} hidden",
                report.mode.name(),
                report.matched,
                report.visibility.visible,
                report.visibility.hidden
            ),
            Self::Refreshed(report) => {
                write!(f, "{} visible, {} hidden", report.visible, report.hidden)
            }
            Self::Reset(changed) => write!(f, "{changed} channels reset"),
            Self::Unselected(changed) => write!(f, "{changed} channels unselected"),
        }
    }
}
