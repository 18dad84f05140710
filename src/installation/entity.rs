use serde::{Deserialize, Deserializer, Serialize};

use super::colour::HexColour;

pub const MAX_BRIGHTNESS: u8 = 100;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
/// The part of an entity that scenes and the edit surface act upon
pub struct LightState {
    pub colour: HexColour,
    #[serde(deserialize_with = "clamped_brightness")]
    brightness: u8,
    /// Id of the last scene applied, if any. Only a label; the scene is not
    /// re-read later.
    #[serde(default)]
    pub current_scene: Option<String>,
}

impl LightState {
    pub fn new(colour: HexColour, brightness: u8) -> Self {
        LightState {
            colour,
            brightness: brightness.min(MAX_BRIGHTNESS),
            current_scene: None,
        }
    }

    pub fn with_scene(mut self, scene_id: &str) -> Self {
        self.current_scene = Some(String::from(scene_id));
        self
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Values above [`MAX_BRIGHTNESS`] are clamped
    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness.min(MAX_BRIGHTNESS);
    }
}

fn clamped_brightness<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    Ok(u8::deserialize(deserializer)?.min(MAX_BRIGHTNESS))
}

/// Anything that can be stored in a [`super::Fixtures`] collection
pub trait Luminaire {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn light(&self) -> &LightState;
    fn light_mut(&mut self) -> &mut LightState;
}

pub struct Chakra {
    pub id: &'static str,
    pub name: &'static str,
    pub colour: HexColour,
    pub icon: &'static str,
}

pub const CHAKRAS: [Chakra; 7] = [
    Chakra {
        id: "root",
        name: "Муладхара",
        colour: HexColour::from_rgb(0xE5, 0x3E, 0x3E),
        icon: "🔴",
    },
    Chakra {
        id: "sacral",
        name: "Свадхистана",
        colour: HexColour::from_rgb(0xF9, 0x73, 0x16),
        icon: "🟠",
    },
    Chakra {
        id: "solar",
        name: "Манипура",
        colour: HexColour::from_rgb(0xF5, 0x9E, 0x0B),
        icon: "🟡",
    },
    Chakra {
        id: "heart",
        name: "Анахата",
        colour: HexColour::from_rgb(0x10, 0xB9, 0x81),
        icon: "🟢",
    },
    Chakra {
        id: "throat",
        name: "Вишудха",
        colour: HexColour::from_rgb(0x0E, 0xA5, 0xE9),
        icon: "🔵",
    },
    Chakra {
        id: "third",
        name: "Аджна",
        colour: HexColour::from_rgb(0x8B, 0x5C, 0xF6),
        icon: "🟣",
    },
    Chakra {
        id: "crown",
        name: "Сахасрара",
        colour: HexColour::from_rgb(0xD9, 0x46, 0xEF),
        icon: "🟣",
    },
];

pub fn find_chakra(id: &str) -> Option<&'static Chakra> {
    CHAKRAS.iter().find(|c| c.id == id)
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "kebab-case", tag = "type")]
pub enum ObjectKind {
    ChakraPanel { chakra: String },
    Lamp,
    Installation,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
/// A single art object (panel, lamp, installation) in the sanctuary
pub struct ArtObject {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub kind: ObjectKind,
    #[serde(flatten)]
    pub light: LightState,
}

impl ArtObject {
    pub fn new(id: &str, name: &str, kind: ObjectKind, light: LightState) -> Self {
        ArtObject {
            id: String::from(id),
            name: String::from(name),
            kind,
            light,
        }
    }

    pub fn chakra(&self) -> Option<&'static Chakra> {
        match &self.kind {
            ObjectKind::ChakraPanel { chakra } => find_chakra(chakra),
            _ => None,
        }
    }

    /// Glyph drawn in the middle of the card
    pub fn icon(&self) -> &'static str {
        match &self.kind {
            ObjectKind::ChakraPanel { .. } => self.chakra().map(|c| c.icon).unwrap_or("✨"),
            ObjectKind::Lamp => "🪷",
            ObjectKind::Installation => "✨",
        }
    }
}

impl Luminaire for ArtObject {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn light(&self) -> &LightState {
        &self.light
    }
    fn light_mut(&mut self) -> &mut LightState {
        &mut self.light
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
/// Cosmetic label only; nothing animates
pub enum Effect {
    #[default]
    Static,
    Wave,
    Pulse,
    Rainbow,
    Strobe,
}

impl Effect {
    pub const ALL: [Effect; 5] = [
        Effect::Static,
        Effect::Wave,
        Effect::Pulse,
        Effect::Rainbow,
        Effect::Strobe,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Effect::Static => "Статичный",
            Effect::Wave => "Волна",
            Effect::Pulse => "Пульс",
            Effect::Rainbow => "Радуга",
            Effect::Strobe => "Стробоскоп",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
/// A room or area lit as one unit
pub struct Zone {
    pub id: String,
    pub name: String,
    pub is_on: bool,
    #[serde(default)]
    pub effect: Effect,
    #[serde(flatten)]
    pub light: LightState,
}

impl Zone {
    pub fn new(id: &str, name: &str, is_on: bool, effect: Effect, light: LightState) -> Self {
        Zone {
            id: String::from(id),
            name: String::from(name),
            is_on,
            effect,
            light,
        }
    }
}

impl Luminaire for Zone {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn light(&self) -> &LightState {
        &self.light
    }
    fn light_mut(&mut self) -> &mut LightState {
        &mut self.light
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightness_is_clamped() {
        let mut light = LightState::new(HexColour::WHITE, 250);
        assert_eq!(light.brightness(), MAX_BRIGHTNESS);
        light.set_brightness(42);
        assert_eq!(light.brightness(), 42);
        light.set_brightness(u8::MAX);
        assert_eq!(light.brightness(), 100);
    }

    #[test]
    fn chakra_panel_uses_chakra_icon() {
        let panel = ArtObject::new(
            "1",
            "Panel",
            ObjectKind::ChakraPanel {
                chakra: String::from("heart"),
            },
            LightState::new(HexColour::WHITE, 10),
        );
        assert_eq!(panel.icon(), "🟢");
        assert_eq!(panel.chakra().map(|c| c.name), Some("Анахата"));

        let lamp = ArtObject::new("2", "Lamp", ObjectKind::Lamp, LightState::new(HexColour::WHITE, 10));
        assert_eq!(lamp.icon(), "🪷");
        assert!(lamp.chakra().is_none());
    }

    #[test]
    fn unknown_chakra_falls_back() {
        let panel = ArtObject::new(
            "1",
            "Panel",
            ObjectKind::ChakraPanel {
                chakra: String::from("nonsense"),
            },
            LightState::new(HexColour::WHITE, 10),
        );
        assert_eq!(panel.icon(), "✨");
    }

    #[test]
    fn art_object_json_shape() {
        let panel = ArtObject::new(
            "1",
            "Panel",
            ObjectKind::ChakraPanel {
                chakra: String::from("solar"),
            },
            LightState::new(HexColour::from_rgb(0xF5, 0x9E, 0x0B), 80).with_scene("meditation"),
        );
        let value = serde_json::to_value(&panel).unwrap();
        assert_eq!(value["type"], "chakra-panel");
        assert_eq!(value["chakra"], "solar");
        assert_eq!(value["colour"], "#F59E0B");
        assert_eq!(value["brightness"], 80);
        assert_eq!(value["currentScene"], "meditation");
    }

    #[test]
    fn effect_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Effect::Rainbow).unwrap(), "\"rainbow\"");
        assert_eq!(Effect::default(), Effect::Static);
    }
}
