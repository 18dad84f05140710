use egui::{CollapsingHeader, Color32, ComboBox, Frame, RichText, ScrollArea, Slider, Ui, Vec2};

use crate::{
    installation::{
        colour::HexColour,
        entity::{Effect, Zone, MAX_BRIGHTNESS},
        scene::SceneCatalog,
    },
    model::Model,
};

use super::{
    colour_disc,
    scene_list::{render_scene_grid, SceneAction},
    CARD_WIDTH,
};

const ZONE_PALETTE: [HexColour; 8] = [
    HexColour::WHITE,
    HexColour::from_rgb(0xFD, 0xE6, 0x8A),
    HexColour::from_rgb(0xF5, 0x9E, 0x0B),
    HexColour::from_rgb(0xE5, 0x3E, 0x3E),
    HexColour::from_rgb(0x10, 0xB9, 0x81),
    HexColour::from_rgb(0x0E, 0xA5, 0xE9),
    HexColour::from_rgb(0x8B, 0x5C, 0xF6),
    HexColour::from_rgb(0xD9, 0x46, 0xEF),
];

enum ZoneAction {
    Toggle,
    Brightness(u8),
    Colour(HexColour),
    Effect(Effect),
    Scene(SceneAction),
}

pub fn render_zones(model: &mut Model, ui: &mut Ui) {
    ui.heading(format!("Зоны ({})", model.installation.zones.len()));
    ui.separator();

    if model.installation.zones.is_empty() {
        ui.label(RichText::new("Нет зон").color(Color32::GRAY));
        return;
    }

    let mut actions: Vec<(String, ZoneAction)> = Vec::new();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = Vec2::splat(16.);
                for zone in model.installation.zones.iter() {
                    for action in render_zone_card(ui, zone, &model.installation.scenes) {
                        actions.push((String::from(&zone.id), action));
                    }
                }
            });
        });

    for (zone_id, action) in actions {
        match action {
            ZoneAction::Toggle => model.toggle_zone(&zone_id),
            ZoneAction::Brightness(brightness) => model.set_zone_brightness(&zone_id, brightness),
            ZoneAction::Colour(colour) => model.set_zone_colour(&zone_id, colour),
            ZoneAction::Effect(effect) => model.set_zone_effect(&zone_id, effect),
            ZoneAction::Scene(SceneAction::Apply(scene)) => {
                model.apply_scene_to_zone(&zone_id, &scene)
            }
            ZoneAction::Scene(SceneAction::Delete(scene_id)) => {
                model.delete_custom_scene(&scene_id)
            }
        }
    }
}

fn render_zone_card(ui: &mut Ui, zone: &Zone, scenes: &SceneCatalog) -> Vec<ZoneAction> {
    let mut actions = Vec::new();

    Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(CARD_WIDTH);

        ui.horizontal(|ui| {
            let glow = if zone.is_on {
                zone.light.colour.dimmed(zone.light.brightness())
            } else {
                Color32::DARK_GRAY
            };
            colour_disc(ui, glow, 10., false);
            ui.heading(&zone.name);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let mut is_on = zone.is_on;
                if ui
                    .toggle_value(&mut is_on, if zone.is_on { "Вкл" } else { "Выкл" })
                    .clicked()
                {
                    actions.push(ZoneAction::Toggle);
                }
            });
        });
        ui.separator();

        ui.horizontal(|ui| {
            ui.label("Яркость");
            ui.label(
                RichText::new(format!("{}%", zone.light.brightness())).color(Color32::GRAY),
            );
        });
        let mut brightness = zone.light.brightness();
        if ui
            .add(Slider::new(&mut brightness, 0..=MAX_BRIGHTNESS).show_value(false))
            .changed()
        {
            actions.push(ZoneAction::Brightness(brightness));
        }

        ui.label("Цвет");
        ui.horizontal_wrapped(|ui| {
            for colour in ZONE_PALETTE {
                if colour_disc(ui, colour.into(), 11., zone.light.colour == colour)
                    .on_hover_text(colour.to_string())
                    .clicked()
                {
                    actions.push(ZoneAction::Colour(colour));
                }
            }
        });

        ui.horizontal(|ui| {
            ui.label("Эффект");
            let mut effect = zone.effect;
            ComboBox::from_id_source(format!("effect_{}", &zone.id))
                .selected_text(effect.label())
                .show_ui(ui, |ui| {
                    for option in Effect::ALL {
                        ui.selectable_value(&mut effect, option, option.label());
                    }
                });
            if effect != zone.effect {
                actions.push(ZoneAction::Effect(effect));
            }
        });

        CollapsingHeader::new("Сцены")
            .id_source(format!("zone_scenes_header_{}", &zone.id))
            .show(ui, |ui| {
                let all_scenes: Vec<_> = scenes.iter().cloned().collect();
                if let Some(action) = render_scene_grid(
                    ui,
                    &format!("zone_scenes_{}", &zone.id),
                    &all_scenes,
                    zone.light.current_scene.as_deref(),
                ) {
                    actions.push(ZoneAction::Scene(action));
                }
            });
    });

    actions
}
