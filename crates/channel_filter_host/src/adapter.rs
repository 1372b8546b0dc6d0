// SPDX-License-Identifier: MIT OR Apache-2.0
//! Host adapter: resolves the channels a click applies to and writes the
//! filter's result back onto the live curves.

use crate::error::Result;
use crate::scene::Scene;
use channel_filter::{ActionReport, FilterAction, FilterProfile, Modifiers};

/// What one invoked action touched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorReport {
    /// Action id
    pub action_id: String,
    /// Modifiers the action was invoked with
    pub modifiers: Modifiers,
    /// Selected objects at invocation time
    pub objects: usize,
    /// Curves handed to the filter
    pub channels: usize,
    /// Filter outcome
    pub outcome: ActionReport,
}

/// Runs filter actions against a [`Scene`]
#[derive(Debug, Clone, Default)]
pub struct HostAdapter {
    profile: FilterProfile,
}

impl HostAdapter {
    /// Create an adapter for a profile
    pub fn new(profile: FilterProfile) -> Self {
        Self { profile }
    }

    /// Active profile
    pub fn profile(&self) -> &FilterProfile {
        &self.profile
    }

    /// Run an action over the curves of every selected object.
    ///
    /// Objects without animation data or without an action contribute no
    /// curves; the action is still considered finished.
    pub fn invoke(&self, scene: &mut Scene, action: &FilterAction, modifiers: Modifiers) -> OperatorReport {
        let objects = scene.selected_objects().count();
        let mut curves = scene.selected_fcurves_mut();
        let outcome = self.profile.execute(&mut curves, action, modifiers);

        if curves.is_empty() {
            tracing::warn!("{}: no animation curves on {} selected objects", action, objects);
        } else {
            tracing::info!("{} ({:?}): {}", action, modifiers, outcome);
        }

        OperatorReport {
            action_id: action.id(),
            modifiers,
            objects,
            channels: curves.len(),
            outcome,
        }
    }

    /// Resolve an action id against the profile, then invoke it
    pub fn invoke_id(&self, scene: &mut Scene, action_id: &str, modifiers: Modifiers) -> Result<OperatorReport> {
        let action = self.profile.find_action(action_id)?;
        Ok(self.invoke(scene, &action, modifiers))
    }
}
