use egui::{Frame, Grid, RichText, Sense, Ui};

use crate::installation::scene::Scene;

use super::colour_disc;

pub enum SceneAction {
    Apply(Scene),
    Delete(String),
}

/// Two-column grid of scene cards. Clicking a card applies it; custom scenes
/// also get a delete button.
pub fn render_scene_grid(
    ui: &mut Ui,
    grid_id: &str,
    scenes: &[Scene],
    current_scene: Option<&str>,
) -> Option<SceneAction> {
    let mut action = None;

    Grid::new(grid_id)
        .num_columns(2)
        .spacing([8., 8.])
        .show(ui, |ui| {
            for (i, scene) in scenes.iter().enumerate() {
                let is_current = current_scene == Some(scene.id.as_str());
                let stroke = if is_current {
                    ui.visuals().selection.stroke
                } else {
                    ui.visuals().widgets.noninteractive.bg_stroke
                };

                let mut delete_clicked = false;
                let card = Frame::group(ui.style()).stroke(stroke).show(ui, |ui| {
                    ui.set_min_width(160.);
                    ui.horizontal(|ui| {
                        colour_disc(ui, scene.colour.into(), 12., false);
                        ui.vertical(|ui| {
                            ui.label(RichText::new(&scene.name).strong());
                            ui.small(format!("{}%", scene.brightness));
                        });
                        if scene.is_custom() && ui.small_button("🗙").on_hover_text("Удалить").clicked()
                        {
                            delete_clicked = true;
                        }
                    });
                });

                if delete_clicked {
                    action = Some(SceneAction::Delete(String::from(&scene.id)));
                } else if card.response.interact(Sense::click()).clicked() {
                    action = Some(SceneAction::Apply(scene.clone()));
                }

                if i % 2 == 1 {
                    ui.end_row();
                }
            }
        });

    action
}

/// Heading plus grid, skipped entirely when there is nothing to show
pub fn render_scene_section(
    ui: &mut Ui,
    heading: &str,
    grid_id: &str,
    scenes: &[Scene],
    current_scene: Option<&str>,
) -> Option<SceneAction> {
    if scenes.is_empty() {
        return None;
    }
    ui.add_space(8.);
    ui.label(RichText::new(heading).strong());
    render_scene_grid(ui, grid_id, scenes, current_scene)
}
