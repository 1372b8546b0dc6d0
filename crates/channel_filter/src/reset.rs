// SPDX-License-Identifier: MIT OR Apache-2.0
//! Bulk clear operations.

use crate::channel::AnimationChannel;

/// Unhide and unselect every channel.
///
/// Returns the number of channels whose flags changed.
pub fn reset<C: AnimationChannel>(channels: &mut [C]) -> usize {
    let mut changed = 0;
    for channel in channels.iter_mut() {
        if channel.is_selected() || channel.is_hidden() {
            changed += 1;
        }
        channel.set_hidden(false);
        channel.set_selected(false);
    }
    tracing::trace!(changed, total = channels.len(), "Reset channels");
    changed
}

/// Unselect every channel, leaving visibility as it is.
///
/// Visibility is not recomputed here, so a previously visible channel
/// stays visible after losing its selection.
///
/// Returns the number of channels that were selected.
pub fn unselect<C: AnimationChannel>(channels: &mut [C]) -> usize {
    let mut changed = 0;
    for channel in channels.iter_mut() {
        if channel.is_selected() {
            changed += 1;
        }
        channel.set_selected(false);
    }
    tracing::trace!(changed, total = channels.len(), "Unselected channels");
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::{Axis, Category, Channel, OwnerId};

    fn mixed_channels() -> Vec<Channel> {
        let owner = OwnerId::new();
        vec![
            Channel::new(owner, &Category::location(), Axis::X).selected(true),
            Channel::new(owner, &Category::location(), Axis::Y).hidden(true),
            Channel::new(owner, &Category::rotation(), Axis::Z),
        ]
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut channels = mixed_channels();

        assert_eq!(reset(&mut channels), 2);
        assert!(channels.iter().all(|c| !c.selected && !c.hidden));

        // Nothing left to change
        assert_eq!(reset(&mut channels), 0);
    }

    #[test]
    fn test_unselect_keeps_visibility() {
        let mut channels = mixed_channels();

        assert_eq!(unselect(&mut channels), 1);
        assert!(channels.iter().all(|c| !c.selected));

        // Previously visible selection stays visible, hidden stays hidden
        assert!(!channels[0].hidden);
        assert!(channels[1].hidden);
        assert!(!channels[2].hidden);
    }
}
