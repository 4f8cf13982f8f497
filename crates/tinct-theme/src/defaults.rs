//! Built-in base palettes per theme variant and palette role.
//!
//! Light and Dark palettes come from a constant table. The high-contrast
//! variants are derived from them, never stored. `System` has no palette
//! of its own; it is resolved by the consumer before lookup.

use std::collections::HashMap;
use std::sync::OnceLock;

use tinct_color::ColorValue;

use crate::palette::PaletteVariant;
use crate::tags::{PaletteRole, ThemeVariant};

/// Supplies the base (default-state) palette for a variant and role.
pub trait PaletteSource {
    fn palette(&self, variant: ThemeVariant, role: PaletteRole) -> Option<PaletteVariant>;
}

/// (role, light bg/fg/border, dark bg/fg/border) as `0xRRGGBB`.
const BASE_PALETTES: [(PaletteRole, [u32; 3], [u32; 3]); 8] = [
    (
        PaletteRole::Primary,
        [0x1565C0, 0xFFFFFF, 0x0D47A1],
        [0x90CAF9, 0x0D1B2A, 0x64B5F6],
    ),
    (
        PaletteRole::Secondary,
        [0x00796B, 0xFFFFFF, 0x004D40],
        [0x80CBC4, 0x00201C, 0x4DB6AC],
    ),
    (
        PaletteRole::Tertiary,
        [0x6A1B9A, 0xFFFFFF, 0x4A148C],
        [0xCE93D8, 0x2A0033, 0xBA68C8],
    ),
    (
        PaletteRole::Neutral,
        [0xFFFFFF, 0x1C1B1F, 0x79747E],
        [0x121212, 0xE6E1E5, 0x938F99],
    ),
    (
        PaletteRole::Error,
        [0xB3261E, 0xFFFFFF, 0x8C1D18],
        [0xF2B8B5, 0x601410, 0xEC928E],
    ),
    (
        PaletteRole::Warning,
        [0xFFB300, 0x1F1300, 0xFF8F00],
        [0xFFD54F, 0x261A00, 0xFFCA28],
    ),
    (
        PaletteRole::Success,
        [0x2E7D32, 0xFFFFFF, 0x1B5E20],
        [0xA5D6A7, 0x00210B, 0x81C784],
    ),
    (
        PaletteRole::Info,
        [0x0277BD, 0xFFFFFF, 0x01579B],
        [0x81D4FA, 0x001E2E, 0x4FC3F7],
    ),
];

const fn hex(rgb: u32) -> (u8, u8, u8) {
    ((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

fn color(rgb: u32) -> ColorValue {
    let (r, g, b) = hex(rgb);
    ColorValue::rgb(r, g, b)
}

fn palette([bg, fg, border]: [u32; 3]) -> PaletteVariant {
    PaletteVariant::new(color(bg), color(fg), color(border))
}

type PaletteTable = HashMap<(ThemeVariant, PaletteRole), PaletteVariant>;

fn table() -> &'static PaletteTable {
    static TABLE: OnceLock<PaletteTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = HashMap::with_capacity(BASE_PALETTES.len() * 4);
        for (role, light, dark) in BASE_PALETTES {
            let light = palette(light);
            let dark = palette(dark);
            table.insert((ThemeVariant::Light, role), light);
            table.insert((ThemeVariant::Dark, role), dark);
            table.insert((ThemeVariant::HighContrastLight, role), light.high_contrast());
            table.insert((ThemeVariant::HighContrastDark, role), dark.high_contrast());
        }
        table
    })
}

/// The built-in palette table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultPalettes;

impl PaletteSource for DefaultPalettes {
    fn palette(&self, variant: ThemeVariant, role: PaletteRole) -> Option<PaletteVariant> {
        table().get(&(variant, role)).copied()
    }
}

impl<S: PaletteSource + ?Sized> PaletteSource for &S {
    fn palette(&self, variant: ThemeVariant, role: PaletteRole) -> Option<PaletteVariant> {
        (**self).palette(variant, role)
    }
}
