//! Color Swatch - solid-color preview rectangle.

use dioxus::prelude::*;

/// Read-only swatch rendered with the given color as background.
///
/// The hex value doubles as the tooltip.
#[component]
pub fn ColorSwatch(
    /// Color to display (any CSS color, normally `#rrggbb`)
    color: String,
    /// Render as a circle instead of a rounded square
    #[props(default = false)]
    round: bool,
) -> Element {
    rsx! {
        div {
            class: if round { "swatch round" } else { "swatch" },
            style: "background-color: {color};",
            title: "{color}",
        }
    }
}
