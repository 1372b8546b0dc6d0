// SPDX-License-Identifier: MIT OR Apache-2.0
//! Filter panel rendering.
//!
//! Layout:
//! - "Filter Selections" header
//! - One row of X/Y/Z buttons per profile category
//! - "Filter" section with Hide Rest, Reset Channels and Unselect Channels
//!
//! The panel only reports clicks; the host decides which channels the
//! click applies to and runs it through [`FilterProfile::execute`].

use crate::action::FilterAction;
use crate::channel::Axis;
use crate::profile::FilterProfile;
use crate::request::Modifiers;

const BUTTON_WIDTH: f32 = 28.0;
const SECTION_SPACING: f32 = 6.0;

/// A button click together with the chord held at the time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelClick {
    /// Action of the clicked button
    pub action: FilterAction,
    /// Modifiers held on click
    pub modifiers: Modifiers,
}

/// One titled group of buttons
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelSection {
    /// Label drawn above the buttons
    pub title: String,
    /// Buttons in draw order
    pub actions: Vec<FilterAction>,
    /// Buttons share one row (axis rows) instead of stacking
    pub inline: bool,
}

/// The "Filter Channels" side panel
#[derive(Debug, Clone)]
pub struct FilterPanel {
    /// Panel title
    pub title: String,
    /// Show tooltips with the action description
    pub show_tooltips: bool,
}

impl FilterPanel {
    /// Create a panel with the default title
    pub fn new() -> Self {
        Self {
            title: "Filter Selections".to_string(),
            show_tooltips: true,
        }
    }

    /// Sections for a profile, in draw order
    pub fn sections(profile: &FilterProfile) -> Vec<PanelSection> {
        let mut sections: Vec<PanelSection> = profile
            .categories()
            .iter()
            .map(|category| PanelSection {
                title: category.name.clone(),
                actions: Axis::ALL
                    .into_iter()
                    .map(|axis| FilterAction::Select {
                        category: category.clone(),
                        axis,
                    })
                    .collect(),
                inline: true,
            })
            .collect();

        sections.push(PanelSection {
            title: "Filter".to_string(),
            actions: FilterAction::bulk().to_vec(),
            inline: false,
        });
        sections
    }

    /// Draw the panel. Returns the click, if a button was clicked this frame.
    pub fn show(&self, ui: &mut egui::Ui, profile: &FilterProfile) -> Option<PanelClick> {
        self.draw(ui, profile, |_, _| {})
    }

    /// Draw every button, reporting each button's rect to `on_button`
    fn draw(
        &self,
        ui: &mut egui::Ui,
        profile: &FilterProfile,
        mut on_button: impl FnMut(&FilterAction, egui::Rect),
    ) -> Option<PanelClick> {
        let mut clicked = None;

        ui.vertical(|ui| {
            ui.strong(self.title.as_str());
            ui.separator();

            for (index, section) in Self::sections(profile).into_iter().enumerate() {
                if index > 0 {
                    ui.add_space(SECTION_SPACING);
                }
                ui.label(section.title.as_str());

                if section.inline {
                    ui.horizontal(|ui| {
                        for action in section.actions {
                            let button = egui::Button::new(action.button_text())
                                .min_size(egui::vec2(BUTTON_WIDTH, 0.0));
                            let response = self.button(ui, button, &action);
                            on_button(&action, response.rect);
                            if response.clicked() {
                                clicked = Some(action);
                            }
                        }
                    });
                } else {
                    for action in section.actions {
                        let button = egui::Button::new(action.button_text());
                        let response = self.button(ui, button, &action);
                        on_button(&action, response.rect);
                        if response.clicked() {
                            clicked = Some(action);
                        }
                    }
                }
            }
        });

        let action = clicked?;
        let modifiers = Modifiers::from(ui.input(|i| i.modifiers));
        tracing::debug!(action = %action, ?modifiers, "Filter panel click");
        Some(PanelClick { action, modifiers })
    }

    fn button(&self, ui: &mut egui::Ui, button: egui::Button<'_>, action: &FilterAction) -> egui::Response {
        let response = ui.add(button);
        if self.show_tooltips {
            response.on_hover_text(action.description())
        } else {
            response
        }
    }
}

impl Default for FilterPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::Category;
    use crate::profile::ProfileVersion;

    fn screen() -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(800.0, 600.0))
    }

    /// Run one frame with `events`, returning the click and every button rect
    fn frame(
        ctx: &egui::Context,
        panel: &FilterPanel,
        profile: &FilterProfile,
        modifiers: egui::Modifiers,
        events: Vec<egui::Event>,
    ) -> (Option<PanelClick>, Vec<(FilterAction, egui::Rect)>) {
        let input = egui::RawInput {
            screen_rect: Some(screen()),
            modifiers,
            events,
            ..Default::default()
        };
        let mut click = None;
        let mut rects = Vec::new();
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                rects.clear();
                let frame_click = panel.draw(ui, profile, |action, rect| rects.push((action.clone(), rect)));
                if frame_click.is_some() {
                    click = frame_click;
                }
            });
        });
        (click, rects)
    }

    #[test]
    fn test_sections_follow_profile() {
        let sections = FilterPanel::sections(&FilterProfile::latest());
        let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["Location", "Rotation", "Scale", "Filter"]);
        assert!(sections[..3].iter().all(|s| s.inline && s.actions.len() == 3));
        assert_eq!(sections[3].actions, FilterAction::bulk().to_vec());

        let old = FilterPanel::sections(&FilterProfile::new(ProfileVersion::V1_0));
        assert_eq!(old.len(), 3);
    }

    #[test]
    fn test_show_without_input() {
        let ctx = egui::Context::default();
        let panel = FilterPanel::new();
        let profile = FilterProfile::latest();
        let mut click = Some(PanelClick {
            action: FilterAction::Reset,
            modifiers: Modifiers::NONE,
        });

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                click = panel.show(ui, &profile);
            });
        });

        assert_eq!(click, None);
    }

    #[test]
    fn test_shift_click_reports_action_and_modifiers() {
        let ctx = egui::Context::default();
        let panel = FilterPanel::new();
        let profile = FilterProfile::latest();
        let location_x = FilterAction::Select {
            category: Category::location(),
            axis: Axis::X,
        };
        let shift = egui::Modifiers::SHIFT;

        // Lay out once to find the button
        let (_, rects) = frame(&ctx, &panel, &profile, shift, Vec::new());
        let pos = rects
            .iter()
            .find(|(action, _)| *action == location_x)
            .map(|(_, rect)| rect.center())
            .unwrap();

        let press = |pressed| egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: shift,
        };
        let mut clicks = Vec::new();
        for events in [
            vec![egui::Event::PointerMoved(pos)],
            vec![press(true)],
            vec![press(false)],
            Vec::new(),
        ] {
            let (click, _) = frame(&ctx, &panel, &profile, shift, events);
            clicks.extend(click);
        }

        assert_eq!(
            clicks,
            vec![PanelClick {
                action: location_x,
                modifiers: Modifiers::SHIFT,
            }]
        );
    }
}
