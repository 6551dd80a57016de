//! HueKit Core Library
//!
//! Color domain model for the HueKit palette studio: parsing and
//! formatting of `#rrggbb` values, structured validation errors, and the
//! named-slot palette document the desktop UI edits.
//!
//! ## Overview
//!
//! The desktop crate keeps all rendering concerns to itself; everything
//! here is pure and synchronous so it can be unit- and property-tested
//! without a UI runtime.
//!
//! ## Quick Start
//!
//! ```
//! use huekit_core::{HexColor, Palette, PaletteSlot};
//!
//! let accent: HexColor = "#1A6B54".parse().unwrap();
//! assert_eq!(accent.to_string(), "#1a6b54");
//!
//! let mut palette = Palette::default();
//! palette.set(PaletteSlot::Accent, accent);
//! assert_eq!(palette.get(PaletteSlot::Accent), accent);
//! ```

pub mod color;
pub mod error;
pub mod palette;

// Re-exports
pub use color::HexColor;
pub use error::ColorError;
pub use palette::{Palette, PaletteSlot};
