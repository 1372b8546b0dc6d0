// SPDX-License-Identifier: MIT OR Apache-2.0
//! Visibility filter ("Hide Rest").

use crate::channel::AnimationChannel;

/// Counts after a visibility pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibilityReport {
    /// Channels left visible (the selected ones)
    pub visible: usize,
    /// Channels hidden
    pub hidden: usize,
}

/// Hide every unselected channel and show every selected one.
///
/// Pure projection of the selected flags: `hidden = !selected`.
pub fn refresh<C: AnimationChannel>(channels: &mut [C]) -> VisibilityReport {
    let mut report = VisibilityReport::default();
    for channel in channels.iter_mut() {
        let hide = !channel.is_selected();
        channel.set_hidden(hide);
        if hide {
            report.hidden += 1;
        } else {
            report.visible += 1;
        }
    }
    tracing::trace!(visible = report.visible, hidden = report.hidden, "Refreshed channel visibility");
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::{Axis, Category, Channel, OwnerId};

    #[test]
    fn test_hidden_is_not_selected() {
        let owner = OwnerId::new();
        let mut channels = vec![
            Channel::new(owner, &Category::location(), Axis::X).selected(true).hidden(true),
            Channel::new(owner, &Category::location(), Axis::Y),
            Channel::new(owner, &Category::location(), Axis::Z).hidden(true),
        ];

        let report = refresh(&mut channels);

        assert_eq!(report, VisibilityReport { visible: 1, hidden: 2 });
        assert!(!channels[0].hidden);
        assert!(channels[1].hidden);
        assert!(channels[2].hidden);
    }

    #[test]
    fn test_refresh_empty() {
        let mut channels: Vec<Channel> = Vec::new();
        assert_eq!(refresh(&mut channels), VisibilityReport::default());
    }
}
