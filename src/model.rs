use std::time::Duration;

use log::debug;

use crate::{
    installation::{
        colour::HexColour,
        entity::{ArtObject, Effect, Luminaire, Zone},
        scene::Scene,
        Installation,
    },
    notifications::Notifications,
    settings::Cli,
    ui::{render_gui, ViewMode},
};

#[derive(Default)]
/// The "create your own scene" form inside the object settings window
pub struct SceneDraft {
    pub is_creating: bool,
    pub name: String,
}

impl SceneDraft {
    pub fn reset(&mut self) {
        self.is_creating = false;
        self.name.clear();
    }

    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }
}

pub struct Model {
    pub installation: Installation,
    /// Only the id is kept; the object itself is always looked up in the installation
    pub selected_object: Option<String>,
    pub scene_draft: SceneDraft,
    pub notifications: Notifications,
    pub view_mode: ViewMode,
}

impl eframe::App for Model {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        render_gui(self, ctx, frame);
    }
}

impl Model {
    pub fn new(settings: &Cli) -> Model {
        Model {
            installation: Installation::seeded(),
            selected_object: None,
            scene_draft: SceneDraft::default(),
            notifications: Notifications::new(Duration::from_secs(settings.toast_seconds)),
            view_mode: settings.initial_view,
        }
    }

    /// Per-frame housekeeping
    pub fn update(&mut self) {
        self.notifications.expire();
    }

    pub fn selected(&self) -> Option<&ArtObject> {
        self.selected_object
            .as_deref()
            .and_then(|id| self.installation.art_objects.get(id))
    }

    pub fn open_settings(&mut self, object_id: &str) {
        debug!("Open settings for object {}", object_id);
        self.selected_object = Some(String::from(object_id));
    }

    pub fn close_settings(&mut self) {
        self.selected_object = None;
        self.scene_draft.reset();
    }

    pub fn set_object_brightness(&mut self, object_id: &str, brightness: u8) {
        self.installation
            .art_objects
            .set_brightness(object_id, brightness);
    }

    pub fn set_object_colour(&mut self, object_id: &str, colour: HexColour) {
        self.installation.art_objects.set_colour(object_id, colour);
    }

    /// Does nothing unless an object is selected
    pub fn apply_scene_to_selected(&mut self, scene: &Scene) {
        let Some(id) = self.selected_object.clone() else {
            debug!("No object selected; scene \"{}\" not applied", &scene.id);
            return;
        };
        if self.installation.art_objects.apply_scene(&id, scene) {
            self.notifications
                .success(format!("Сцена \"{}\" применена", &scene.name));
        }
    }

    /// Capture the selected object's brightness and colour under the drafted
    /// name. Does nothing without a selection or with a blank name.
    pub fn create_custom_scene(&mut self) {
        if self.scene_draft.is_blank() {
            return;
        }
        let Some((brightness, colour)) = self
            .selected()
            .map(|o| (o.light.brightness(), o.light.colour))
        else {
            return;
        };

        let name = std::mem::take(&mut self.scene_draft.name);
        self.installation.scenes.add_custom(&name, brightness, colour);
        self.notifications
            .success(format!("Сцена \"{}\" создана", &name));
        self.scene_draft.reset();
    }

    pub fn delete_custom_scene(&mut self, scene_id: &str) {
        if self.installation.scenes.remove_custom(scene_id).is_some() {
            self.notifications.success("Сцена удалена");
        }
    }

    pub fn toggle_zone(&mut self, zone_id: &str) {
        if let Some(is_on) = self.installation.toggle_zone(zone_id) {
            let name = self.zone_name(zone_id);
            self.notifications.success(if is_on {
                format!("{} включена", name)
            } else {
                format!("{} выключена", name)
            });
        }
    }

    pub fn set_zone_brightness(&mut self, zone_id: &str, brightness: u8) {
        self.installation.zones.set_brightness(zone_id, brightness);
    }

    pub fn set_zone_colour(&mut self, zone_id: &str, colour: HexColour) {
        self.installation.zones.set_colour(zone_id, colour);
    }

    pub fn set_zone_effect(&mut self, zone_id: &str, effect: Effect) {
        self.installation.set_zone_effect(zone_id, effect);
    }

    pub fn apply_scene_to_zone(&mut self, zone_id: &str, scene: &Scene) {
        if self.installation.zones.apply_scene(zone_id, scene) {
            self.notifications
                .success(format!("Сцена \"{}\" применена", &scene.name));
        }
    }

    pub fn toggle_schedule(&mut self, schedule_id: &str) {
        self.installation.toggle_schedule(schedule_id);
    }

    fn zone_name(&self, zone_id: &str) -> String {
        self.installation
            .zones
            .get(zone_id)
            .map(|z: &Zone| String::from(z.name()))
            .unwrap_or_default()
    }
}
