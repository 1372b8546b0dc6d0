// SPDX-License-Identifier: MIT OR Apache-2.0
//! Host scene model.
//!
//! Objects own optional animation data, which owns an optional action,
//! which owns the curves. Only selected objects take part in filtering.

use crate::error::{HostError, Result};
use channel_filter::{AnimationChannel, OwnerId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One animation curve as the host stores it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FCurve {
    /// Animated property path
    pub data_path: String,
    /// Component index within the property
    pub array_index: usize,
    /// Selected in the channel list
    #[serde(default)]
    pub select: bool,
    /// Hidden in the curve editor
    #[serde(default)]
    pub hide: bool,
}

impl FCurve {
    /// Create a visible, unselected curve
    pub fn new(data_path: impl Into<String>, array_index: usize) -> Self {
        Self {
            data_path: data_path.into(),
            array_index,
            select: false,
            hide: false,
        }
    }

    /// Display name, e.g. `location[0]`
    pub fn display_name(&self) -> String {
        format!("{}[{}]", self.data_path, self.array_index)
    }
}

impl AnimationChannel for FCurve {
    fn data_path(&self) -> &str {
        &self.data_path
    }

    fn array_index(&self) -> usize {
        self.array_index
    }

    fn is_selected(&self) -> bool {
        self.select
    }

    fn set_selected(&mut self, selected: bool) {
        self.select = selected;
    }

    fn is_hidden(&self) -> bool {
        self.hide
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.hide = hidden;
    }
}

/// Keyed animation of an object
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Action name
    pub name: String,
    /// Curves in channel-list order
    pub fcurves: Vec<FCurve>,
}

impl Action {
    /// Create an empty action
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fcurves: Vec::new(),
        }
    }

    /// Add one curve per component of a property
    pub fn with_property(mut self, data_path: &str, components: usize) -> Self {
        self.fcurves
            .extend((0..components).map(|index| FCurve::new(data_path, index)));
        self
    }
}

/// Animation slot of an object
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationData {
    /// Assigned action, if any
    pub action: Option<Action>,
}

/// An object in the scene
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneObject {
    /// Stable object handle stored with the scene
    #[serde(default)]
    pub id: OwnerId,
    /// Object name (unique within the scene)
    pub name: String,
    /// Selected in the viewport
    #[serde(default)]
    pub selected: bool,
    /// Animation data, if the object was ever animated
    #[serde(default)]
    pub animation_data: Option<AnimationData>,
}

impl SceneObject {
    /// Create an unselected object without animation data
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: OwnerId::new(),
            name: name.into(),
            selected: false,
            animation_data: None,
        }
    }

    /// Set the selected flag
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Assign an action
    pub fn with_action(mut self, action: Action) -> Self {
        self.animation_data = Some(AnimationData {
            action: Some(action),
        });
        self
    }

    /// Give the object animation data with no action
    pub fn with_empty_animation(mut self) -> Self {
        self.animation_data = Some(AnimationData::default());
        self
    }

    /// The object's action, if it has animation data and an action
    pub fn action(&self) -> Option<&Action> {
        self.animation_data.as_ref()?.action.as_ref()
    }

    /// Mutable access to the object's curves; empty without an action
    pub fn fcurves_mut(&mut self) -> &mut [FCurve] {
        match self.animation_data.as_mut().and_then(|d| d.action.as_mut()) {
            Some(action) => action.fcurves.as_mut_slice(),
            None => &mut [],
        }
    }
}

/// All objects of an editing session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    /// Objects by name, in outliner order
    pub objects: IndexMap<String, SceneObject>,
}

impl Scene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object, replacing one with the same name
    pub fn add_object(&mut self, object: SceneObject) {
        self.objects.insert(object.name.clone(), object);
    }

    /// Get an object by name
    pub fn object(&self, name: &str) -> Option<&SceneObject> {
        self.objects.get(name)
    }

    /// Get a mutable object by name
    pub fn object_mut(&mut self, name: &str) -> Option<&mut SceneObject> {
        self.objects.get_mut(name)
    }

    /// Selected objects in outliner order
    pub fn selected_objects(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.values().filter(|o| o.selected)
    }

    /// Curves of every selected object, flattened in outliner order
    pub fn selected_fcurves_mut(&mut self) -> Vec<&mut FCurve> {
        self.objects
            .values_mut()
            .filter(|o| o.selected)
            .flat_map(|o| o.fcurves_mut().iter_mut())
            .collect()
    }

    /// Load a scene from a RON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| HostError::io(path, e))?;
        let scene: Scene = ron::from_str(&contents).map_err(|e| HostError::parse(path, e))?;
        scene.validate()?;
        tracing::info!("Loaded scene {:?} with {} objects", path, scene.objects.len());
        Ok(scene)
    }

    /// Check that every object is keyed by its own name
    pub fn validate(&self) -> Result<()> {
        match self.objects.iter().find(|(key, object)| **key != object.name) {
            Some((key, object)) => Err(HostError::ObjectName {
                key: key.clone(),
                name: object.name.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Save the scene as pretty RON
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?;
        std::fs::write(path, contents).map_err(|e| HostError::io(path, e))?;
        tracing::info!("Saved scene to {:?}", path);
        Ok(())
    }

    /// Built-in scene covering the interesting shapes of animation data
    pub fn demo() -> Self {
        let mut scene = Self::new();
        scene.add_object(
            SceneObject::new("Cube").selected(true).with_action(
                Action::new("CubeAction")
                    .with_property("location", 3)
                    .with_property("rotation_euler", 3)
                    .with_property("scale", 3),
            ),
        );
        scene.add_object(
            SceneObject::new("Armature").selected(true).with_action(
                Action::new("ArmatureAction")
                    .with_property("pose.bones[\"Hand\"].location", 3)
                    .with_property("pose.bones[\"Hand\"].rotation_quaternion", 4),
            ),
        );
        scene.add_object(
            SceneObject::new("Camera")
                .with_action(Action::new("CameraAction").with_property("location", 3)),
        );
        scene.add_object(SceneObject::new("Empty").selected(true));
        scene.add_object(SceneObject::new("Light").selected(true).with_empty_animation());
        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_fcurves_skip_unselected_and_unanimated() {
        let mut scene = Scene::demo();
        let curves = scene.selected_fcurves_mut();
        // Cube 9 + Armature 7; Camera unselected, Empty/Light have no action
        assert_eq!(curves.len(), 16);
    }

    #[test]
    fn test_fcurves_mut_without_action() {
        let mut object = SceneObject::new("Light").with_empty_animation();
        assert!(object.fcurves_mut().is_empty());
        assert!(object.action().is_none());
    }

    #[test]
    fn test_scene_ron_round_trip() {
        let scene = Scene::demo();
        let ron_str = ron::ser::to_string_pretty(&scene, ron::ser::PrettyConfig::default()).unwrap();
        let loaded: Scene = ron::from_str(&ron_str).unwrap();
        assert_eq!(loaded, scene);
    }

    #[test]
    fn test_minimal_scene_file() {
        let source = r#"(
            objects: {
                "Ball": (
                    name: "Ball",
                    selected: true,
                    animation_data: Some((
                        action: Some((
                            name: "Bounce",
                            fcurves: [
                                (data_path: "location", array_index: 2),
                            ],
                        )),
                    )),
                ),
            },
        )"#;
        let scene: Scene = ron::from_str(source).unwrap();
        let ball = scene.object("Ball").unwrap();
        assert!(ball.selected);
        assert_eq!(ball.action().unwrap().fcurves, vec![FCurve::new("location", 2)]);
    }

    #[test]
    fn test_object_keyed_by_other_name() {
        let mut scene = Scene::demo();
        assert!(scene.validate().is_ok());

        scene.object_mut("Cube").unwrap().name = "Box".to_string();
        assert!(matches!(
            scene.validate(),
            Err(HostError::ObjectName { key, name }) if key == "Cube" && name == "Box"
        ));
    }

    #[test]
    fn test_load_rejects_mismatched_key() {
        let path = std::env::temp_dir().join(format!("channel_filter_scene_{}.ron", std::process::id()));
        std::fs::write(&path, r#"(objects: { "Ball": (name: "Cube") })"#).unwrap();

        let result = Scene::load(&path);
        let _ = std::fs::remove_file(&path);

        assert!(matches!(result, Err(HostError::ObjectName { .. })));
    }
}
