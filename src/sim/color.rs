//! RGB colors with CSS hex text form

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed 0xRRGGBB value (upper byte ignored)
    pub const fn from_u32(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xff) as u8,
            g: ((packed >> 8) & 0xff) as u8,
            b: (packed & 0xff) as u8,
        }
    }

    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Uniformly random 24-bit color
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_u32(rng.random_range(0..=0x00ff_ffff))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match hex.len() {
            // #rgb expands each digit (f -> ff)
            3 => {
                let packed = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
                let expand = |nibble: u32| (nibble * 0x11) as u8;
                Ok(Color::rgb(
                    expand((packed >> 8) & 0xf),
                    expand((packed >> 4) & 0xf),
                    expand(packed & 0xf),
                ))
            }
            6 => {
                let packed = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
                Ok(Color::from_u32(packed))
            }
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}
