// SPDX-License-Identifier: MIT OR Apache-2.0
//! Channel state reports.

use crate::error::Result;
use crate::scene::Scene;
use serde::Serialize;
use std::fmt::Write;

/// One curve's flags as reported
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelRow {
    /// Owning object name
    pub object: String,
    /// Curve name, e.g. `location[0]`
    pub channel: String,
    /// Selected flag
    pub selected: bool,
    /// Hidden flag
    pub hidden: bool,
}

/// Rows for every curve of every selected object
pub fn channel_rows(scene: &Scene) -> Vec<ChannelRow> {
    scene
        .selected_objects()
        .filter_map(|object| object.action().map(|action| (object, action)))
        .flat_map(|(object, action)| {
            action.fcurves.iter().map(move |curve| ChannelRow {
                object: object.name.clone(),
                channel: curve.display_name(),
                selected: curve.select,
                hidden: curve.hide,
            })
        })
        .collect()
}

/// Aligned text table, grouped by object
pub fn render_text(scene: &Scene) -> String {
    let rows = channel_rows(scene);
    let width = rows.iter().map(|r| r.channel.len()).max().unwrap_or(0);

    let mut out = String::new();
    let mut current: Option<&str> = None;
    for row in &rows {
        if current != Some(row.object.as_str()) {
            let _ = writeln!(out, "{}", row.object);
            current = Some(row.object.as_str());
        }
        let _ = writeln!(
            out,
            "  {:<width$}  {:<8}  {}",
            row.channel,
            if row.selected { "selected" } else { "-" },
            if row.hidden { "hidden" } else { "visible" },
        );
    }

    for object in scene.selected_objects().filter(|o| o.action().is_none()) {
        let _ = writeln!(out, "{} (no animation)", object.name);
    }
    out
}

/// Pretty JSON array of rows
pub fn render_json(scene: &Scene) -> Result<String> {
    Ok(serde_json::to_string_pretty(&channel_rows(scene))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Action, SceneObject};

    fn small_scene() -> Scene {
        let mut scene = Scene::new();
        let mut action = Action::new("BallAction").with_property("location", 2);
        action.fcurves[1].select = true;
        action.fcurves[0].hide = true;
        scene.add_object(SceneObject::new("Ball").selected(true).with_action(action));
        scene.add_object(SceneObject::new("Empty").selected(true));
        scene.add_object(
            SceneObject::new("Hidden").with_action(Action::new("A").with_property("scale", 1)),
        );
        scene
    }

    #[test]
    fn test_rows_only_selected_animated() {
        let rows = channel_rows(&small_scene());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].channel, "location[1]");
        assert!(rows[1].selected);
        assert!(rows[0].hidden);
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&small_scene());
        assert_eq!(
            text,
            "Ball\n  location[0]  -         hidden\n  location[1]  selected  visible\nEmpty (no animation)\n"
        );
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&small_scene()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[1]["channel"], "location[1]");
        assert_eq!(value[1]["selected"], true);
    }
}
