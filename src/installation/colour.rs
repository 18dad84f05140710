use std::{fmt, str::FromStr};

use anyhow::{anyhow, bail};
use egui::Color32;
use serde::{Deserialize, Serialize};

/// An sRGB colour that always prints (and parses) as `#RRGGBB`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct HexColour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColour {
    pub const WHITE: HexColour = HexColour::from_rgb(0xFF, 0xFF, 0xFF);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        HexColour { r, g, b }
    }

    /// Colour as displayed at the given brightness, i.e. faded out towards transparent
    pub fn dimmed(&self, brightness: u8) -> Color32 {
        Color32::from(*self).gamma_multiply(f32::from(brightness.min(100)) / 100.)
    }
}

impl FromStr for HexColour {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| anyhow!("colour \"{}\" must start with '#'", s))?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            bail!("colour \"{}\" is not of the form #RRGGBB", s);
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
        Ok(HexColour {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }
}

impl fmt::Display for HexColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for HexColour {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColour> for String {
    fn from(colour: HexColour) -> Self {
        colour.to_string()
    }
}

impl From<HexColour> for Color32 {
    fn from(colour: HexColour) -> Self {
        Color32::from_rgb(colour.r, colour.g, colour.b)
    }
}
