//! Studio page - the palette editor.
//!
//! Owns the palette document. One `ColorPicker` per slot writes accepted
//! values back here; the preview pane re-renders a mock site from the
//! current palette so every accepted edit is visible immediately.

use dioxus::prelude::*;
use huekit_core::{HexColor, Palette, PaletteSlot};

use crate::components::{ColorPicker, ColorSwatch};

/// Palette editor with live site preview.
#[component]
pub fn Studio() -> Element {
    let mut palette = use_signal(|| match crate::get_initial_accent() {
        Some(accent) => Palette::with_accent(accent),
        None => Palette::default(),
    });

    let mut copied_slot: Signal<Option<PaletteSlot>> = use_signal(|| None);

    // Copy handler with feedback
    let mut copy_hex = move |slot: PaletteSlot, value: String| {
        // Desktop clipboard via arboard
        if let Ok(mut clipboard) = arboard::Clipboard::new() {
            let _ = clipboard.set_text(&value);
        }

        copied_slot.set(Some(slot));

        // Reset after 2 seconds using tokio
        spawn(async move {
            tokio::time::sleep(std::time::Duration::from_secs(2)).await;
            copied_slot.set(None);
        });
    };

    let p = palette();
    // Keep button labels readable whatever the accent is
    let button_text_color = if p.accent.is_dark() { "#f2f2f0" } else { "#16181d" };

    rsx! {
        main { class: "studio",
            header { class: "studio-header",
                h1 { class: "page-title", "HueKit Studio" }
                p { class: "tagline", "tune a site palette and watch it land" }
            }

            section { class: "studio-columns",
                // Picker stack
                div { class: "picker-stack",
                    for slot in PaletteSlot::ALL {
                        div { class: "slot-row", key: "{slot.label()}",
                            ColorPicker {
                                label: slot.label().to_string(),
                                value: palette().get(slot).to_string(),
                                on_change: move |hex: String| {
                                    match HexColor::parse(&hex) {
                                        Ok(color) => palette.write().set(slot, color),
                                        Err(e) => {
                                            // Malformed values never reach the document
                                            tracing::warn!(
                                                "rejected {} update {:?}: {}",
                                                slot.label(),
                                                hex,
                                                e
                                            );
                                        }
                                    }
                                },
                            }

                            button {
                                class: if copied_slot() == Some(slot) {
                                    "copy-button copied"
                                } else {
                                    "copy-button"
                                },
                                onclick: move |_| copy_hex(slot, palette().get(slot).to_string()),
                                if copied_slot() == Some(slot) {
                                    "✓ Copied"
                                } else {
                                    "Copy hex"
                                }
                            }
                        }
                    }
                }

                // Live preview of a mock site under the current palette
                div {
                    class: "site-preview",
                    style: "background-color: {p.background};",

                    div {
                        class: "site-card",
                        style: "background-color: {p.surface}; color: {p.text};",

                        h2 {
                            class: "site-heading",
                            style: "color: {p.accent};",
                            "Morning Brew"
                        }
                        p { class: "site-copy",
                            "Small-batch coffee, roasted on Fridays. "
                            a {
                                class: "site-link",
                                style: "color: {p.accent};",
                                href: "#",
                                "See this month's beans"
                            }
                        }
                        button {
                            class: "site-button",
                            style: "background-color: {p.accent}; color: {button_text_color};",
                            "Subscribe"
                        }
                    }

                    div { class: "preview-strip",
                        for slot in PaletteSlot::ALL {
                            ColorSwatch {
                                color: palette().get(slot).to_string(),
                                round: true,
                            }
                        }
                    }
                }
            }
        }
    }
}
