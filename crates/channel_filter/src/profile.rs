// SPDX-License-Identifier: MIT OR Apache-2.0
//! Versioned filter profiles.
//!
//! A profile declares which categories get a button row and which
//! modifiers a click honours. Actions are derived from that table rather
//! than declared one per category/axis pair.

use crate::action::{ActionReport, FilterAction};
use crate::channel::{AnimationChannel, Axis, Category};
use crate::engine::apply;
use crate::error::FilterError;
use crate::request::{Modifiers, SelectionRequest};
use crate::reset::{reset, unselect};
use crate::visibility::refresh;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Released feature sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProfileVersion {
    /// Location and Rotation rows; Shift adds, Ctrl is not read
    V1_0,
    /// Adds the Scale row and Ctrl-click removal
    #[default]
    V1_0_3,
}

impl ProfileVersion {
    /// Get the version string
    pub fn label(&self) -> &'static str {
        match self {
            Self::V1_0 => "1.0",
            Self::V1_0_3 => "1.0.3",
        }
    }

    /// Get all versions, oldest first
    pub fn all() -> &'static [ProfileVersion] {
        &[Self::V1_0, Self::V1_0_3]
    }
}

impl fmt::Display for ProfileVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProfileVersion {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|v| v.label() == s.trim())
            .ok_or_else(|| FilterError::UnknownProfile(s.to_string()))
    }
}

/// Category table plus modifier policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterProfile {
    version: ProfileVersion,
    categories: Vec<Category>,
    ctrl_removes: bool,
}

impl FilterProfile {
    /// Create the built-in profile for a version
    pub fn new(version: ProfileVersion) -> Self {
        match version {
            ProfileVersion::V1_0 => Self {
                version,
                categories: vec![Category::location(), Category::rotation()],
                ctrl_removes: false,
            },
            ProfileVersion::V1_0_3 => Self {
                version,
                categories: vec![Category::location(), Category::rotation(), Category::scale()],
                ctrl_removes: true,
            },
        }
    }

    /// Create the newest built-in profile
    pub fn latest() -> Self {
        Self::new(ProfileVersion::default())
    }

    /// Version this profile was built from
    pub fn version(&self) -> ProfileVersion {
        self.version
    }

    /// Categories in panel order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Whether Ctrl-click removes from the filter
    pub fn ctrl_removes(&self) -> bool {
        self.ctrl_removes
    }

    /// Append a category row
    pub fn add_category(&mut self, category: Category) -> Result<(), FilterError> {
        category.validate()?;
        let slug = category.slug();
        if self.categories.iter().any(|c| c.slug() == slug) {
            return Err(FilterError::InvalidCategory {
                name: category.name,
                reason: "another category produces the same action ids",
            });
        }
        self.categories.push(category);
        Ok(())
    }

    /// Builder form of [`Self::add_category`]
    pub fn with_category(mut self, category: Category) -> Result<Self, FilterError> {
        self.add_category(category)?;
        Ok(self)
    }

    /// Find a category by name or slug, ignoring case
    pub fn category(&self, name: &str) -> Option<&Category> {
        let wanted = name.trim();
        self.categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(wanted) || c.slug() == wanted.to_lowercase())
    }

    /// Find a category by name, or fail
    pub fn require_category(&self, name: &str) -> Result<&Category, FilterError> {
        self.category(name)
            .ok_or_else(|| FilterError::UnknownCategory(name.to_string()))
    }

    /// Modifiers as this profile reads them
    pub fn effective_modifiers(&self, modifiers: Modifiers) -> Modifiers {
        if self.ctrl_removes {
            modifiers
        } else {
            modifiers.without_ctrl()
        }
    }

    /// All actions: every category/axis pair, then the bulk actions
    pub fn actions(&self) -> Vec<FilterAction> {
        let mut actions: Vec<FilterAction> = self
            .categories
            .iter()
            .flat_map(|category| {
                Axis::ALL.into_iter().map(move |axis| FilterAction::Select {
                    category: category.clone(),
                    axis,
                })
            })
            .collect();
        actions.extend(FilterAction::bulk());
        actions
    }

    /// Resolve an action id
    pub fn find_action(&self, id: &str) -> Result<FilterAction, FilterError> {
        let id = id.trim();
        self.actions()
            .into_iter()
            .find(|action| action.id() == id)
            .ok_or_else(|| FilterError::UnknownAction(id.to_string()))
    }

    /// Build the selection request for a category/axis click
    pub fn request(&self, category: Category, axis: Axis, modifiers: Modifiers) -> SelectionRequest {
        SelectionRequest::new(category, axis, self.effective_modifiers(modifiers))
    }

    /// Run an action over an already-resolved channel collection
    pub fn execute<C: AnimationChannel>(
        &self,
        channels: &mut [C],
        action: &FilterAction,
        modifiers: Modifiers,
    ) -> ActionReport {
        match action {
            FilterAction::Select { category, axis } => {
                let request = self.request(category.clone(), *axis, modifiers);
                ActionReport::Selected(apply(channels, &request))
            }
            FilterAction::HideRest => ActionReport::Refreshed(refresh(channels)),
            FilterAction::Reset => ActionReport::Reset(reset(channels)),
            FilterAction::Unselect => ActionReport::Unselected(unselect(channels)),
        }
    }
}

impl Default for FilterProfile {
    fn default() -> Self {
        Self::latest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::{Channel, OwnerId};
    use crate::request::SelectMode;

    fn channels_for(profile: &FilterProfile) -> Vec<Channel> {
        let owner = OwnerId::new();
        profile
            .categories()
            .iter()
            .flat_map(|c| Axis::ALL.into_iter().map(move |axis| Channel::new(owner, c, axis)))
            .collect()
    }

    #[test]
    fn test_version_categories() {
        let old = FilterProfile::new(ProfileVersion::V1_0);
        assert_eq!(old.categories().len(), 2);
        assert!(old.category("Scale").is_none());
        assert_eq!(old.actions().len(), 2 * 3 + 3);

        let new = FilterProfile::latest();
        assert_eq!(new.version(), ProfileVersion::V1_0_3);
        assert_eq!(new.category("scale"), Some(&Category::scale()));
        assert_eq!(new.actions().len(), 3 * 3 + 3);
    }

    #[test]
    fn test_find_action_round_trip() {
        let profile = FilterProfile::latest();
        for action in profile.actions() {
            assert_eq!(profile.find_action(&action.id()).unwrap(), action);
        }
    }

    #[test]
    fn test_scale_unknown_in_old_profile() {
        let old = FilterProfile::new(ProfileVersion::V1_0);
        assert_eq!(
            old.find_action("graph.select_x_scale_channel"),
            Err(FilterError::UnknownAction("graph.select_x_scale_channel".to_string()))
        );
        assert_eq!(
            old.require_category("Scale"),
            Err(FilterError::UnknownCategory("Scale".to_string()))
        );
    }

    #[test]
    fn test_old_profile_ignores_ctrl() {
        let profile = FilterProfile::new(ProfileVersion::V1_0);
        let mut channels = channels_for(&profile);
        let location_x = profile.find_action("graph.select_x_location_channel").unwrap();
        let rotation_y = profile.find_action("graph.select_y_rotation_channel").unwrap();

        profile.execute(&mut channels, &location_x, Modifiers::NONE);
        let report = profile.execute(&mut channels, &rotation_y, Modifiers::CTRL);

        // Ctrl-click acts as a plain click: replace
        let ActionReport::Selected(report) = report else {
            panic!("expected a selection report");
        };
        assert_eq!(report.mode, SelectMode::Replace);
        let selected: Vec<_> = channels.iter().filter(|c| c.selected).collect();
        assert_eq!(selected.len(), 1);
        assert!(selected[0].matches(&Category::rotation(), Axis::Y));
    }

    #[test]
    fn test_execute_dispatch() {
        let profile = FilterProfile::latest();
        let mut channels = channels_for(&profile);
        let scale_z = profile.find_action("graph.select_z_scale_channel").unwrap();

        profile.execute(&mut channels, &scale_z, Modifiers::NONE);
        assert_eq!(
            profile.execute(&mut channels, &FilterAction::Unselect, Modifiers::SHIFT),
            ActionReport::Unselected(1)
        );
        // Unselect leaves the last filter's visibility in place
        assert_eq!(channels.iter().filter(|c| !c.hidden).count(), 1);

        assert_eq!(
            profile.execute(&mut channels, &FilterAction::HideRest, Modifiers::NONE),
            ActionReport::Refreshed(crate::visibility::VisibilityReport { visible: 0, hidden: 9 })
        );
        assert_eq!(
            profile.execute(&mut channels, &FilterAction::Reset, Modifiers::NONE),
            ActionReport::Reset(9)
        );
        assert!(channels.iter().all(|c| !c.selected && !c.hidden));
    }

    #[test]
    fn test_custom_category() {
        let profile = FilterProfile::latest()
            .with_category(Category::new("Delta Scale", "delta_scale"))
            .unwrap();
        assert!(profile.find_action("graph.select_x_delta_scale_channel").is_ok());

        let duplicate = profile.clone().with_category(Category::new("scale", "scale"));
        assert!(matches!(duplicate, Err(FilterError::InvalidCategory { .. })));

        let empty = FilterProfile::latest().with_category(Category::new("Empty", ""));
        assert!(matches!(empty, Err(FilterError::InvalidCategory { .. })));
    }

    #[test]
    fn test_categories_with_same_slug_rejected() {
        let profile = FilterProfile::latest()
            .with_category(Category::new("Delta Location", "delta_location"))
            .unwrap();

        // Extra whitespace collapses to the same action ids
        let spaced = profile
            .clone()
            .with_category(Category::new("Delta  Location", "delta_location"));
        assert!(matches!(spaced, Err(FilterError::InvalidCategory { .. })));

        let ids: Vec<String> = profile.actions().iter().map(FilterAction::id).collect();
        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_version_parse() {
        assert_eq!("1.0".parse::<ProfileVersion>(), Ok(ProfileVersion::V1_0));
        assert_eq!("1.0.3".parse::<ProfileVersion>(), Ok(ProfileVersion::V1_0_3));
        assert_eq!(
            "2.0".parse::<ProfileVersion>(),
            Err(FilterError::UnknownProfile("2.0".to_string()))
        );

        let ron_str = ron::to_string(&ProfileVersion::V1_0).unwrap();
        assert_eq!(ron::from_str::<ProfileVersion>(&ron_str).unwrap(), ProfileVersion::V1_0);
    }
}
