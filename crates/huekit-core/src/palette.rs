//! Palette Document - the set of named colors the studio edits
//!
//! Four slots cover the roles a small site theme needs. The desktop page
//! owns one `Palette` and writes accepted picker values into it.

use serde::{Deserialize, Serialize};

use crate::color::HexColor;

/// Named color roles within a palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaletteSlot {
    /// Links, buttons, highlights
    Accent,
    /// Page background
    Background,
    /// Cards and panels sitting on the background
    Surface,
    /// Body text
    Text,
}

impl PaletteSlot {
    /// Every slot, in display order
    pub const ALL: [PaletteSlot; 4] = [
        PaletteSlot::Accent,
        PaletteSlot::Background,
        PaletteSlot::Surface,
        PaletteSlot::Text,
    ];

    /// Label shown above the slot's picker
    pub fn label(&self) -> &'static str {
        match self {
            PaletteSlot::Accent => "Accent",
            PaletteSlot::Background => "Background",
            PaletteSlot::Surface => "Surface",
            PaletteSlot::Text => "Text",
        }
    }
}

/// An editable site palette
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Accent color for interactive elements
    pub accent: HexColor,
    /// Page background color
    pub background: HexColor,
    /// Card/panel surface color
    pub surface: HexColor,
    /// Body text color
    pub text: HexColor,
    /// Unix timestamp of the last accepted change
    pub updated_at: i64,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            accent: HexColor::rgb(0x1a, 0x6b, 0x54),
            background: HexColor::rgb(0x0f, 0x11, 0x15),
            surface: HexColor::rgb(0x1b, 0x1e, 0x26),
            text: HexColor::rgb(0xe8, 0xe6, 0xe3),
            updated_at: 0,
        }
    }
}

impl Palette {
    /// Default palette with a caller-chosen accent
    pub fn with_accent(accent: HexColor) -> Self {
        Self {
            accent,
            ..Default::default()
        }
    }

    /// Read one slot
    pub fn get(&self, slot: PaletteSlot) -> HexColor {
        match slot {
            PaletteSlot::Accent => self.accent,
            PaletteSlot::Background => self.background,
            PaletteSlot::Surface => self.surface,
            PaletteSlot::Text => self.text,
        }
    }

    /// Write one slot and bump the modification timestamp
    pub fn set(&mut self, slot: PaletteSlot, color: HexColor) {
        tracing::debug!("palette {} -> {}", slot.label(), color);
        match slot {
            PaletteSlot::Accent => self.accent = color,
            PaletteSlot::Background => self.background = color,
            PaletteSlot::Surface => self.surface = color,
            PaletteSlot::Text => self.text = color,
        }
        self.touch();
    }

    /// Update the palette's timestamp
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now().timestamp();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        assert_eq!(palette.accent.to_string(), "#1a6b54");
        assert_eq!(palette.background.to_string(), "#0f1115");
        assert_eq!(palette.updated_at, 0);
    }

    #[test]
    fn test_with_accent() {
        let accent = HexColor::rgb(0xd4, 0xaf, 0x37);
        let palette = Palette::with_accent(accent);
        assert_eq!(palette.accent, accent);
        assert_eq!(palette.text, Palette::default().text);
    }

    #[test]
    fn test_get_set_roundtrip() {
        let mut palette = Palette::default();
        let color = HexColor::rgb(0x5f, 0x8f, 0xff);
        palette.set(PaletteSlot::Surface, color);
        assert_eq!(palette.get(PaletteSlot::Surface), color);
        // Other slots untouched
        assert_eq!(palette.accent, Palette::default().accent);
    }

    #[test]
    fn test_set_touches_timestamp() {
        let mut palette = Palette::default();
        palette.set(PaletteSlot::Accent, HexColor::rgb(1, 2, 3));
        assert!(palette.updated_at > 0);
    }

    #[test]
    fn test_slot_labels_cover_all() {
        for slot in PaletteSlot::ALL {
            assert!(!slot.label().is_empty());
        }
    }

    #[test]
    fn test_serde_roundtrip() {
        let palette = Palette::default();
        let json = serde_json::to_string(&palette).unwrap();
        let back: Palette = serde_json::from_str(&json).unwrap();
        assert_eq!(back, palette);
    }
}
