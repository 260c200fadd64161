use phf::{Map, phf_map};
use std::fmt;
use thiserror::Error;

/// Display name and hex code of one pocket surface color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PocketColor {
    pub name: &'static str,
    pub hex: &'static str,
}

impl fmt::Display for PocketColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.hex)
    }
}

pub const DEFAULT_POCKET_COLOR: &str = "red";

/// Table keys in their canonical listing order.
pub const COLOR_KEYS: [&str; 10] = [
    "red", "green", "blue", "yellow", "magenta", "cyan", "orange", "celeste", "purple", "brown",
];

static POCKET_SURFACE_COLORS: Map<&'static str, PocketColor> = phf_map! {
    "red" => PocketColor { name: "Red", hex: "0xFF0000" },
    "green" => PocketColor { name: "Green", hex: "0x008000" },
    "blue" => PocketColor { name: "Blue", hex: "0x0403FF" },
    "yellow" => PocketColor { name: "Yellow", hex: "0xFFFF00" },
    "magenta" => PocketColor { name: "Magenta", hex: "0xFF00FF" },
    "cyan" => PocketColor { name: "Cyan", hex: "0x00FFFF" },
    "orange" => PocketColor { name: "Orange", hex: "0xFFA500" },
    "celeste" => PocketColor { name: "Celeste", hex: "0xb2FFFF" },
    "purple" => PocketColor { name: "Purple", hex: "0x800080" },
    "brown" => PocketColor { name: "Brown", hex: "0xA52A2A" },
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown pocket color '{0}'")]
pub struct UnknownColorError(pub String);

pub fn lookup_color(key: &str) -> Result<&'static PocketColor, UnknownColorError> {
    POCKET_SURFACE_COLORS
        .get(key)
        .ok_or_else(|| UnknownColorError(key.to_string()))
}

pub fn is_known_color(key: &str) -> bool {
    POCKET_SURFACE_COLORS.contains_key(key)
}

/// Iterates the table in [`COLOR_KEYS`] order.
pub fn palette() -> impl Iterator<Item = (&'static str, &'static PocketColor)> {
    COLOR_KEYS
        .iter()
        .filter_map(|key| POCKET_SURFACE_COLORS.get(*key).map(|color| (*key, color)))
}
