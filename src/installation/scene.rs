use std::time::{SystemTime, UNIX_EPOCH};

use log::debug;
use serde::{Deserialize, Serialize};

use super::{colour::HexColour, entity::MAX_BRIGHTNESS};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
/// A named brightness + colour preset
pub struct Scene {
    pub id: String,
    pub name: String,
    pub brightness: u8,
    pub colour: HexColour,
}

impl Scene {
    pub fn new(id: &str, name: &str, brightness: u8, colour: HexColour) -> Self {
        Scene {
            id: String::from(id),
            name: String::from(name),
            brightness: brightness.min(MAX_BRIGHTNESS),
            colour,
        }
    }

    pub fn is_custom(&self) -> bool {
        self.id.starts_with(CUSTOM_PREFIX)
    }
}

const CUSTOM_PREFIX: &str = "custom-";

const PRESETS: [(&str, &str, u8, HexColour); 4] = [
    (
        "meditation",
        "Медитация",
        50,
        HexColour::from_rgb(0x8B, 0x5C, 0xF6),
    ),
    ("energy", "Энергия", 100, HexColour::from_rgb(0xF5, 0x9E, 0x0B)),
    (
        "relaxation",
        "Релаксация",
        30,
        HexColour::from_rgb(0x10, 0xB9, 0x81),
    ),
    ("ritual", "Ритуал", 70, HexColour::from_rgb(0xD9, 0x46, 0xEF)),
];

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
/// Built-in presets (read-only) followed by the scenes the user has captured
pub struct SceneCatalog {
    presets: Vec<Scene>,
    custom: Vec<Scene>,
}

impl SceneCatalog {
    pub fn new() -> Self {
        SceneCatalog {
            presets: PRESETS
                .iter()
                .map(|(id, name, brightness, colour)| Scene::new(id, name, *brightness, *colour))
                .collect(),
            custom: Vec::new(),
        }
    }

    pub fn presets(&self) -> &[Scene] {
        &self.presets
    }

    pub fn custom(&self) -> &[Scene] {
        &self.custom
    }

    /// Presets first, then custom scenes in creation order
    pub fn iter(&self) -> impl Iterator<Item = &Scene> {
        self.presets.iter().chain(self.custom.iter())
    }

    pub fn find(&self, id: &str) -> Option<&Scene> {
        self.iter().find(|s| s.id == id)
    }

    /// Append a custom scene, returning a reference to it. The id is derived from
    /// the current time and bumped until it is unused in this catalog.
    pub fn add_custom(&mut self, name: &str, brightness: u8, colour: HexColour) -> &Scene {
        let id = self.next_custom_id(now_millis());
        debug!("New custom scene {} \"{}\"", &id, name);
        self.custom.push(Scene::new(&id, name, brightness, colour));
        &self.custom[self.custom.len() - 1]
    }

    /// Returns the removed scene, if the id matched a custom scene. Presets are
    /// never removed.
    pub fn remove_custom(&mut self, id: &str) -> Option<Scene> {
        let index = self.custom.iter().position(|s| s.id == id)?;
        Some(self.custom.remove(index))
    }

    fn next_custom_id(&self, mut millis: u128) -> String {
        loop {
            let candidate = format!("{}{}", CUSTOM_PREFIX, millis);
            if self.find(&candidate).is_none() {
                return candidate;
            }
            millis += 1;
        }
    }
}

impl Default for SceneCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_seeded() {
        let catalog = SceneCatalog::new();
        let ids: Vec<&str> = catalog.presets().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["meditation", "energy", "relaxation", "ritual"]);
        assert!(catalog.custom().is_empty());
        assert!(!catalog.presets().iter().any(Scene::is_custom));
    }

    #[test]
    fn custom_ids_are_unique_even_within_one_millisecond() {
        let mut catalog = SceneCatalog::new();
        let a = catalog.add_custom("A", 10, HexColour::WHITE).id.clone();
        let b = catalog.add_custom("B", 20, HexColour::WHITE).id.clone();
        let c = catalog.add_custom("C", 30, HexColour::WHITE).id.clone();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
        assert!(a.starts_with("custom-"));
        assert_eq!(catalog.custom().len(), 3);
    }

    #[test]
    fn bumps_colliding_id() {
        let mut catalog = SceneCatalog::new();
        catalog
            .custom
            .push(Scene::new("custom-1000", "Taken", 10, HexColour::WHITE));
        assert_eq!(catalog.next_custom_id(1000), "custom-1001");
        assert_eq!(catalog.next_custom_id(2000), "custom-2000");
    }

    #[test]
    fn presets_cannot_be_removed() {
        let mut catalog = SceneCatalog::new();
        assert!(catalog.remove_custom("energy").is_none());
        assert_eq!(catalog.presets().len(), 4);
    }

    #[test]
    fn find_searches_presets_and_custom() {
        let mut catalog = SceneCatalog::new();
        let id = catalog.add_custom("Mine", 5, HexColour::WHITE).id.clone();
        assert_eq!(catalog.find("ritual").map(|s| s.brightness), Some(70));
        assert_eq!(catalog.find(&id).map(|s| s.name.as_str()), Some("Mine"));
        assert!(catalog.find("missing").is_none());
        assert_eq!(catalog.iter().count(), 5);
    }
}
