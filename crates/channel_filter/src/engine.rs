// SPDX-License-Identifier: MIT OR Apache-2.0
//! Selection engine.
//!
//! Maps (channels, target, modifiers) to new selected flags, then runs the
//! visibility filter so selection and visibility never diverge.

use crate::channel::AnimationChannel;
use crate::request::{SelectMode, SelectionRequest};
use crate::reset::reset;
use crate::visibility::{refresh, VisibilityReport};

/// Outcome of one [`apply`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyReport {
    /// Mode the modifiers resolved to
    pub mode: SelectMode,
    /// Channels matching the target category and axis
    pub matched: usize,
    /// Visibility after the call
    pub visibility: VisibilityReport,
}

/// Apply one button click to a channel collection.
///
/// `channels` must already be resolved to the owners the click applies to.
/// A plain click resets every channel before selecting the target, Shift
/// adds the target, Ctrl deselects it. Owners without a matching channel
/// keep their selection untouched.
pub fn apply<C: AnimationChannel>(channels: &mut [C], request: &SelectionRequest) -> ApplyReport {
    let mode = request.mode();
    if mode == SelectMode::Replace {
        reset(channels);
    }

    let select = mode != SelectMode::Remove;
    let mut matched = 0;
    for channel in channels
        .iter_mut()
        .filter(|c| c.matches(&request.category, request.axis))
    {
        channel.set_selected(select);
        matched += 1;
    }

    let visibility = refresh(channels);

    tracing::debug!(
        category = %request.category.name,
        axis = %request.axis,
        mode = mode.name(),
        matched,
        visible = visibility.visible,
        "Applied channel filter"
    );

    ApplyReport {
        mode,
        matched,
        visibility,
    }
}
