use egui::{Align2, Color32, Frame, Response, RichText, Sense, Stroke, Ui, Vec2};

use crate::model::Model;

use self::{objects::render_objects, schedules::render_schedules, zones::render_zones};

mod objects;
mod scene_list;
mod schedules;
mod zones;

pub const WINDOW_SIZE: Vec2 = Vec2::new(1100., 800.);

const CARD_WIDTH: f32 = 260.;

#[derive(PartialEq, Clone, Copy, Debug, clap::ValueEnum)]
pub enum ViewMode {
    Objects,
    Zones,
    Schedule,
}

pub fn render_gui(model: &mut Model, ctx: &eframe::egui::Context, frame: &mut eframe::Frame) {
    ctx.request_repaint();

    render_mode_switcher(model, ctx, frame);

    egui::CentralPanel::default().show(ctx, |ui| match model.view_mode {
        ViewMode::Objects => render_objects(model, ui),
        ViewMode::Zones => render_zones(model, ui),
        ViewMode::Schedule => render_schedules(model, ui),
    });

    render_notifications(model, ctx);

    model.update();
}

pub fn render_mode_switcher(
    model: &mut Model,
    ctx: &eframe::egui::Context,
    _frame: &mut eframe::Frame,
) {
    egui::TopBottomPanel::top("Tabs")
        .min_height(48.)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(RichText::new("Sacrarium LED").strong());
                ui.label(
                    RichText::new("Управление световыми инсталляциями")
                        .color(Color32::GRAY)
                        .italics()
                        .small(),
                );
                ui.label("|");
                if ui
                    .selectable_value(&mut model.view_mode, ViewMode::Objects, "Объекты")
                    .clicked()
                {
                    // The settings window belongs to this tab only
                    model.close_settings();
                }
                if ui
                    .selectable_value(&mut model.view_mode, ViewMode::Zones, "Зоны")
                    .clicked()
                {
                    model.close_settings();
                }
                if ui
                    .selectable_value(&mut model.view_mode, ViewMode::Schedule, "Расписание")
                    .clicked()
                {
                    model.close_settings();
                }
            });
        });
}

fn render_notifications(model: &Model, ctx: &egui::Context) {
    if model.notifications.is_empty() {
        return;
    }
    egui::Area::new(egui::Id::new("Notifications"))
        .anchor(Align2::RIGHT_BOTTOM, [-16., -16.])
        .show(ctx, |ui| {
            for notification in model.notifications.iter() {
                let fade = model.notifications.remaining(notification);
                Frame::popup(ui.style()).show(ui, |ui| {
                    ui.label(
                        RichText::new(format!("✔ {}", &notification.message))
                            .color(Color32::LIGHT_GREEN.gamma_multiply(0.4 + 0.6 * fade)),
                    );
                });
                ui.add_space(4.);
            }
        });
}

/// A filled circle, clickable like a button
fn colour_disc(ui: &mut Ui, colour: Color32, radius: f32, selected: bool) -> Response {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(radius * 2.), Sense::click());
    let painter = ui.painter();
    painter.circle_filled(rect.center(), radius, colour);
    if selected {
        painter.circle_stroke(
            rect.center(),
            radius + 2.,
            Stroke::new(2., ui.visuals().selection.stroke.color),
        );
    } else if response.hovered() {
        painter.circle_stroke(rect.center(), radius, Stroke::new(1., Color32::WHITE));
    }
    response
}
