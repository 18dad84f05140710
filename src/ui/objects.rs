use egui::{
    Align2, Button, Color32, FontId, Frame, Id, Key, RichText, ScrollArea, Sense, Slider,
    TextEdit, Ui, Vec2,
};

use crate::{
    installation::{
        colour::HexColour,
        entity::{ArtObject, CHAKRAS, MAX_BRIGHTNESS},
    },
    model::Model,
};

use super::{
    colour_disc,
    scene_list::{render_scene_section, SceneAction},
    CARD_WIDTH,
};

const DISC_RADIUS: f32 = 64.;

pub fn render_objects(model: &mut Model, ui: &mut Ui) {
    ui.heading(format!("Объекты ({})", model.installation.art_objects.len()));
    ui.separator();

    let mut open_object: Option<String> = None;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = Vec2::splat(16.);
                for object in model.installation.art_objects.iter() {
                    if render_object_card(ui, object) {
                        open_object = Some(String::from(&object.id));
                    }
                }
            });
        });

    if let Some(object_id) = open_object {
        model.open_settings(&object_id);
    }

    render_settings_window(model, ui.ctx());
}

/// Returns true if the card (or its settings button) was clicked
fn render_object_card(ui: &mut Ui, object: &ArtObject) -> bool {
    let mut settings_clicked = false;

    let card = Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(CARD_WIDTH);
        ui.vertical_centered(|ui| {
            let (rect, _) =
                ui.allocate_exact_size(Vec2::splat(DISC_RADIUS * 2. + 16.), Sense::hover());
            let painter = ui.painter();
            let colour = Color32::from(object.light.colour);
            painter.circle_filled(rect.center(), DISC_RADIUS + 8., colour.gamma_multiply(0.2));
            painter.circle_filled(
                rect.center(),
                DISC_RADIUS,
                object.light.colour.dimmed(object.light.brightness()),
            );
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                object.icon(),
                FontId::proportional(48.),
                Color32::WHITE,
            );

            ui.heading(&object.name);
            ui.label(
                RichText::new(format!("{}% яркость", object.light.brightness()))
                    .background_color(ui.visuals().faint_bg_color),
            );
            if let Some(chakra) = object.chakra() {
                ui.small(chakra.name);
            }
            if ui.button("⚙ Настройки").clicked() {
                settings_clicked = true;
            }
        });
    });

    settings_clicked || card.response.interact(Sense::click()).clicked()
}

fn render_settings_window(model: &mut Model, ctx: &egui::Context) {
    let Some(object) = model.selected().cloned() else {
        return;
    };

    let mut open = true;
    let mut brightness = object.light.brightness();
    let mut new_colour: Option<HexColour> = None;
    let mut scene_action: Option<SceneAction> = None;
    let mut submit_draft = false;

    let scenes = &model.installation.scenes;
    let draft = &mut model.scene_draft;
    let current_scene = object.light.current_scene.as_deref();

    egui::Window::new(object.name.as_str())
        .id(Id::new("ObjectSettings"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(520.)
        .anchor(Align2::CENTER_CENTER, [0., 0.])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                colour_disc(ui, object.light.colour.into(), 16., false);
                ui.heading(&object.name);
            });
            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Яркость");
                ui.label(RichText::new(format!("{}%", brightness)).color(Color32::GRAY));
            });
            ui.add(Slider::new(&mut brightness, 0..=MAX_BRIGHTNESS).show_value(false));

            if object.chakra().is_some() {
                ui.add_space(8.);
                ui.label(RichText::new("Выбор чакры").strong());
                ui.horizontal(|ui| {
                    for chakra in CHAKRAS.iter() {
                        let is_current = object.light.colour == chakra.colour;
                        if colour_disc(ui, chakra.colour.into(), 20., is_current)
                            .on_hover_text(format!("{} {}", chakra.icon, chakra.name))
                            .clicked()
                        {
                            new_colour = Some(chakra.colour);
                        }
                    }
                });
            }

            if let Some(action) = render_scene_section(
                ui,
                "Готовые сцены",
                "preset_scenes",
                scenes.presets(),
                current_scene,
            ) {
                scene_action = Some(action);
            }
            if let Some(action) = render_scene_section(
                ui,
                "Мои сцены",
                "custom_scenes",
                scenes.custom(),
                current_scene,
            ) {
                scene_action = Some(action);
            }

            ui.add_space(8.);
            if !draft.is_creating {
                if ui
                    .add_sized(
                        [ui.available_width(), 32.],
                        Button::new("➕ Создать свою сцену"),
                    )
                    .clicked()
                {
                    draft.is_creating = true;
                }
            } else {
                ui.group(|ui| {
                    ui.label("Название новой сцены");
                    ui.horizontal(|ui| {
                        let response =
                            ui.add(TextEdit::singleline(&mut draft.name).hint_text("Моя сцена..."));
                        if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                            submit_draft = true;
                        }
                        if ui.add_enabled(!draft.is_blank(), Button::new("✔")).clicked() {
                            submit_draft = true;
                        }
                        if ui.button("🗙").clicked() {
                            draft.is_creating = false;
                        }
                    });
                    ui.small(format!(
                        "Текущая яркость ({}%) и цвет сохранятся в сцене",
                        brightness
                    ));
                });
            }
        });

    if brightness != object.light.brightness() {
        model.set_object_brightness(&object.id, brightness);
    }
    if let Some(colour) = new_colour {
        model.set_object_colour(&object.id, colour);
    }
    match scene_action {
        Some(SceneAction::Apply(scene)) => model.apply_scene_to_selected(&scene),
        Some(SceneAction::Delete(scene_id)) => model.delete_custom_scene(&scene_id),
        None => {}
    }
    if submit_draft {
        model.create_custom_scene();
    }
    if !open {
        model.close_settings();
    }
}
