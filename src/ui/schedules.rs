use egui::{Color32, Grid, RichText, ScrollArea, Ui};

use crate::{installation::schedule::ScheduleAction, model::Model};

pub fn render_schedules(model: &mut Model, ui: &mut Ui) {
    ui.heading("Расписание");
    ui.label(
        RichText::new("Записи только отображаются; автоматического запуска нет")
            .color(Color32::GRAY)
            .small(),
    );
    ui.separator();

    let mut toggle_schedule: Option<String> = None;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            Grid::new("schedules")
                .num_columns(3)
                .spacing([24., 8.])
                .striped(true)
                .show(ui, |ui| {
                    for schedule in model.installation.schedules.iter() {
                        ui.label(RichText::new(&schedule.time).monospace().size(18.));
                        ui.label(RichText::new(schedule.action.label()).color(
                            match schedule.action {
                                ScheduleAction::TurnOn => Color32::LIGHT_GREEN,
                                ScheduleAction::TurnOff => Color32::GRAY,
                            },
                        ));
                        let mut enabled = schedule.enabled;
                        if ui.checkbox(&mut enabled, "Активно").changed() {
                            toggle_schedule = Some(String::from(&schedule.id));
                        }
                        ui.end_row();
                    }
                });
        });

    if let Some(schedule_id) = toggle_schedule {
        model.toggle_schedule(&schedule_id);
    }
}
