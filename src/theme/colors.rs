//! Chrome color constants for the studio UI.
//!
//! Quiet dark-neutral workshop palette, kept deliberately flatter than
//! anything a user might build so the edited palette reads as the
//! colorful thing on screen.

#![allow(dead_code)]

// === INK (Backgrounds) ===
pub const INK_BLACK: &str = "#101014";
pub const INK_PANEL: &str = "#16161c";
pub const INK_BORDER: &str = "#26262e";

// === BRASS (Titles, Focus) ===
pub const BRASS: &str = "#c2a24b";
pub const BRASS_GLOW: &str = "rgba(194, 162, 75, 0.3)";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#ececea";
pub const TEXT_SECONDARY: &str = "rgba(236, 236, 234, 0.7)";
pub const TEXT_MUTED: &str = "rgba(236, 236, 234, 0.45)";

// === SEMANTIC ===
pub const DANGER: &str = "#e5484d";
pub const OK_GREEN: &str = "#46a758";
