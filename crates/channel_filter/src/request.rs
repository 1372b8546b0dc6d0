// SPDX-License-Identifier: MIT OR Apache-2.0
//! Selection requests: the target a button names plus the modifier chord.

use crate::channel::{Axis, Category};
use serde::{Deserialize, Serialize};

/// Modifier keys held when a filter button was clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct Modifiers {
    /// Shift key pressed
    pub shift: bool,
    /// Ctrl key pressed
    pub ctrl: bool,
}

impl Modifiers {
    /// No modifiers
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
    };

    /// Shift only
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
    };

    /// Ctrl only
    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
    };

    /// Whether no modifier is held
    pub fn is_none(&self) -> bool {
        !self.shift && !self.ctrl
    }

    /// Same chord with Ctrl released
    pub fn without_ctrl(self) -> Self {
        Self { ctrl: false, ..self }
    }
}

impl From<egui::Modifiers> for Modifiers {
    fn from(modifiers: egui::Modifiers) -> Self {
        Self {
            shift: modifiers.shift,
            ctrl: modifiers.ctrl,
        }
    }
}

/// How a click combines with the existing filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SelectMode {
    /// Clear the filter, then select the target (plain click)
    #[default]
    Replace,
    /// Select the target on top of the filter (Shift+Click)
    Add,
    /// Deselect the target (Ctrl+Click)
    Remove,
}

impl SelectMode {
    /// Resolve a modifier chord. Ctrl wins over Shift.
    pub fn from_modifiers(modifiers: Modifiers) -> Self {
        if modifiers.ctrl {
            Self::Remove
        } else if modifiers.shift {
            Self::Add
        } else {
            Self::Replace
        }
    }

    /// Get the display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Replace => "Replace",
            Self::Add => "Add",
            Self::Remove => "Remove",
        }
    }
}

/// One click on a category/axis button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRequest {
    /// Category clicked
    pub category: Category,
    /// Axis clicked
    pub axis: Axis,
    /// Modifiers held
    pub modifiers: Modifiers,
}

impl SelectionRequest {
    /// Create a request
    pub fn new(category: Category, axis: Axis, modifiers: Modifiers) -> Self {
        Self {
            category,
            axis,
            modifiers,
        }
    }

    /// Selection mode implied by the modifiers
    pub fn mode(&self) -> SelectMode {
        SelectMode::from_modifiers(self.modifiers)
    }
}
