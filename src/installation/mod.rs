use indexmap::IndexMap;
use log::{debug, warn};
use serde::Serialize;

use self::colour::HexColour;
use self::entity::{ArtObject, Effect, LightState, Luminaire, ObjectKind, Zone};
use self::scene::{Scene, SceneCatalog};
use self::schedule::{Schedule, ScheduleAction};

pub mod colour;
pub mod entity;
pub mod scene;
pub mod schedule;

/// Entities keyed by id, kept in insertion order
#[derive(Serialize, Clone, Debug)]
#[serde(transparent)]
pub struct Fixtures<E> {
    entries: IndexMap<String, E>,
}

impl<E: Luminaire> Fixtures<E> {
    pub fn get(&self, id: &str) -> Option<&E> {
        self.entries.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Patch a single entity in place. Returns `false` (and leaves everything
    /// untouched) if no entity has that id.
    pub fn update(&mut self, id: &str, patch: impl FnOnce(&mut E)) -> bool {
        match self.entries.get_mut(id) {
            Some(entity) => {
                patch(entity);
                true
            }
            None => {
                warn!("No entity with id \"{}\"; ignoring", id);
                false
            }
        }
    }

    pub fn set_brightness(&mut self, id: &str, brightness: u8) -> bool {
        self.update(id, |e| e.light_mut().set_brightness(brightness))
    }

    pub fn set_colour(&mut self, id: &str, colour: HexColour) -> bool {
        self.update(id, |e| e.light_mut().colour = colour)
    }

    /// Copy the scene's values into the entity and remember which scene it was
    pub fn apply_scene(&mut self, id: &str, scene: &Scene) -> bool {
        self.update(id, |e| {
            debug!("Apply scene \"{}\" to \"{}\"", &scene.id, e.name());
            let light = e.light_mut();
            light.set_brightness(scene.brightness);
            light.colour = scene.colour;
            light.current_scene = Some(String::from(&scene.id));
        })
    }
}

impl<E: Luminaire> FromIterator<E> for Fixtures<E> {
    /// Later entities with a duplicate id replace earlier ones, keeping the
    /// earlier position
    fn from_iter<T: IntoIterator<Item = E>>(iter: T) -> Self {
        Fixtures {
            entries: iter
                .into_iter()
                .map(|e| (String::from(e.id()), e))
                .collect(),
        }
    }
}

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
/// Everything the control panel knows about, held in memory only
pub struct Installation {
    pub art_objects: Fixtures<ArtObject>,
    pub zones: Fixtures<Zone>,
    pub scenes: SceneCatalog,
    pub schedules: Vec<Schedule>,
}

impl Installation {
    /// The fixed starting state, restored on every launch
    pub fn seeded() -> Installation {
        let art_objects = [
            ArtObject::new(
                "1",
                "Панно Чакры",
                ObjectKind::ChakraPanel {
                    chakra: String::from("solar"),
                },
                LightState::new(HexColour::from_rgb(0xF5, 0x9E, 0x0B), 80).with_scene("meditation"),
            ),
            ArtObject::new(
                "2",
                "Светильник Лотос",
                ObjectKind::Lamp,
                LightState::new(HexColour::from_rgb(0xD9, 0x46, 0xEF), 60).with_scene("relaxation"),
            ),
            ArtObject::new(
                "3",
                "Инсталляция Мандала",
                ObjectKind::Installation,
                LightState::new(HexColour::from_rgb(0x10, 0xB9, 0x81), 90).with_scene("energy"),
            ),
        ];

        let zones = [
            Zone::new(
                "1",
                "Гостиная",
                true,
                Effect::Static,
                LightState::new(HexColour::from_rgb(0xF5, 0x9E, 0x0B), 80),
            ),
            Zone::new(
                "2",
                "Спальня",
                false,
                Effect::Static,
                LightState::new(HexColour::from_rgb(0x8B, 0x5C, 0xF6), 40),
            ),
            Zone::new(
                "3",
                "Кухня",
                true,
                Effect::Static,
                LightState::new(HexColour::WHITE, 100),
            ),
            Zone::new(
                "4",
                "Кабинет",
                false,
                Effect::Pulse,
                LightState::new(HexColour::from_rgb(0x0E, 0xA5, 0xE9), 60),
            ),
        ];

        let schedules = vec![
            Schedule::new("1", "07:00", ScheduleAction::TurnOn, true),
            Schedule::new("2", "23:00", ScheduleAction::TurnOff, true),
            Schedule::new("3", "18:30", ScheduleAction::TurnOn, false),
        ];

        Installation {
            art_objects: art_objects.into_iter().collect(),
            zones: zones.into_iter().collect(),
            scenes: SceneCatalog::new(),
            schedules,
        }
    }

    /// Returns the zone's new on/off state, if it was found
    pub fn toggle_zone(&mut self, id: &str) -> Option<bool> {
        let mut is_on = None;
        self.zones.update(id, |z| {
            z.is_on = !z.is_on;
            is_on = Some(z.is_on);
        });
        is_on
    }

    pub fn set_zone_effect(&mut self, id: &str, effect: Effect) -> bool {
        self.zones.update(id, |z| z.effect = effect)
    }

    pub fn toggle_schedule(&mut self, id: &str) -> bool {
        match self.schedules.iter_mut().find(|s| s.id == id) {
            Some(schedule) => {
                schedule.enabled = !schedule.enabled;
                debug!(
                    "Schedule {} at {} is now {}",
                    &schedule.id,
                    &schedule.time,
                    if schedule.enabled { "enabled" } else { "disabled" }
                );
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone_id(installation: &Installation, name: &str) -> String {
        installation
            .zones
            .iter()
            .find(|z| z.name == name)
            .map(|z| z.id.clone())
            .unwrap()
    }

    #[test]
    fn seed_data() {
        let installation = Installation::seeded();
        assert_eq!(installation.art_objects.len(), 3);
        assert_eq!(installation.zones.len(), 4);
        assert_eq!(installation.schedules.len(), 3);

        let names: Vec<&str> = installation.art_objects.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["Панно Чакры", "Светильник Лотос", "Инсталляция Мандала"]);

        let lotus = installation.art_objects.get("2").unwrap();
        assert_eq!(lotus.light.brightness(), 60);
        assert_eq!(lotus.light.colour.to_string(), "#D946EF");
        assert_eq!(lotus.light.current_scene.as_deref(), Some("relaxation"));
    }

    #[test]
    fn set_brightness_touches_only_target() {
        let mut installation = Installation::seeded();
        let before: Vec<u8> = installation
            .art_objects
            .iter()
            .map(|o| o.light.brightness())
            .collect();

        for value in [0, 1, 42, 99, 100] {
            assert!(installation.art_objects.set_brightness("2", value));
            let after: Vec<u8> = installation
                .art_objects
                .iter()
                .map(|o| o.light.brightness())
                .collect();
            assert_eq!(after, vec![before[0], value, before[2]]);
        }
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let mut installation = Installation::seeded();
        let before = serde_json::to_value(&installation).unwrap();
        assert!(!installation.art_objects.set_brightness("nope", 10));
        assert!(!installation.art_objects.set_colour("nope", HexColour::WHITE));
        assert!(installation.toggle_zone("nope").is_none());
        assert!(!installation.set_zone_effect("nope", Effect::Wave));
        assert!(!installation.toggle_schedule("nope"));
        assert_eq!(serde_json::to_value(&installation).unwrap(), before);
    }

    #[test]
    fn apply_scene_is_idempotent() {
        let mut installation = Installation::seeded();
        let scene = installation.scenes.find("ritual").cloned().unwrap();

        installation.art_objects.apply_scene("1", &scene);
        let once = installation.art_objects.get("1").cloned().unwrap();
        installation.art_objects.apply_scene("1", &scene);
        let twice = installation.art_objects.get("1").cloned().unwrap();

        assert_eq!(once, twice);
        assert_eq!(once.light.brightness(), 70);
        assert_eq!(once.light.colour, scene.colour);
        assert_eq!(once.light.current_scene.as_deref(), Some("ritual"));
    }

    #[test]
    fn applied_scene_is_not_a_live_binding() {
        let mut installation = Installation::seeded();
        let id = installation
            .scenes
            .add_custom("Tmp", 12, HexColour::WHITE)
            .id
            .clone();
        let scene = installation.scenes.find(&id).cloned().unwrap();
        installation.art_objects.apply_scene("3", &scene);
        installation.scenes.remove_custom(&id);

        let object = installation.art_objects.get("3").unwrap();
        assert_eq!(object.light.brightness(), 12);
        assert_eq!(object.light.current_scene.as_deref(), Some(id.as_str()));
    }

    #[test]
    fn toggle_zone_is_its_own_inverse() {
        let mut installation = Installation::seeded();
        let id = zone_id(&installation, "Гостиная");
        assert_eq!(installation.toggle_zone(&id), Some(false));
        assert_eq!(installation.toggle_zone(&id), Some(true));
        let zone = installation.zones.get(&id).unwrap();
        assert!(zone.is_on);
        assert_eq!(zone.light.brightness(), 80);
    }

    #[test]
    fn set_effect_changes_only_effect() {
        let mut installation = Installation::seeded();
        let id = zone_id(&installation, "Гостиная");
        let before = installation.zones.get(&id).cloned().unwrap();
        assert!(before.is_on);
        assert_eq!(before.light.brightness(), 80);

        assert!(installation.set_zone_effect(&id, Effect::Rainbow));

        let after = installation.zones.get(&id).unwrap();
        assert_eq!(after.effect, Effect::Rainbow);
        assert_eq!(after.is_on, before.is_on);
        assert_eq!(after.light, before.light);
    }

    #[test]
    fn toggle_schedule_flips_only_that_entry() {
        let mut installation = Installation::seeded();
        assert!(installation.toggle_schedule("3"));
        let enabled: Vec<bool> = installation.schedules.iter().map(|s| s.enabled).collect();
        assert_eq!(enabled, vec![true, true, true]);
        assert!(installation.toggle_schedule("1"));
        let enabled: Vec<bool> = installation.schedules.iter().map(|s| s.enabled).collect();
        assert_eq!(enabled, vec![false, true, true]);
    }

    #[test]
    fn duplicate_ids_keep_one_entry() {
        let fixtures: Fixtures<Zone> = [
            Zone::new("a", "First", true, Effect::Static, LightState::new(HexColour::WHITE, 1)),
            Zone::new("a", "Second", true, Effect::Static, LightState::new(HexColour::WHITE, 2)),
        ]
        .into_iter()
        .collect();
        assert_eq!(fixtures.len(), 1);
        assert_eq!(fixtures.get("a").map(|z| z.name.as_str()), Some("Second"));
    }
}
