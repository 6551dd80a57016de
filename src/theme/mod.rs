//! Theme for HueKit.
//!
//! Chrome color constants and the injected global stylesheet. These
//! style the studio itself; the palette being edited lives in
//! `huekit_core::Palette`.

mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
