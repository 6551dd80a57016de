//! Color Picker Component
//!
//! Labeled color form control: a native swatch input paired with a free
//! hex text field and a live preview. The parent owns the value; the
//! picker only reports accepted edits through `on_change`.

use dioxus::prelude::*;
use huekit_core::HexColor;

use super::ColorSwatch;

/// Whether a text edit is propagated to the owner
fn edit_accepted(text: &str) -> bool {
    HexColor::parse(text).is_ok()
}

/// Element id tying the label to the text input
fn picker_input_id(label: &str) -> String {
    let slug: String = label
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    format!("{slug}-color-input")
}

/// Color selection form control
///
/// The swatch input always reports well-formed `#rrggbb`, so it calls
/// back directly. The text field goes through the validation gate: an
/// accepted edit clears the error state and invokes `on_change`, a
/// rejected one only shows the inline error.
#[component]
pub fn ColorPicker(
    /// Field label shown above the inputs
    label: String,
    /// Current accepted color value
    value: String,
    /// Handler called with each newly accepted value
    on_change: EventHandler<String>,
    /// Extra class on the root element
    #[props(default = String::new())]
    class: String,
) -> Element {
    // Draft keeps rejected keystrokes on screen for correction
    let mut draft = use_signal(|| value.clone());
    let mut is_invalid = use_signal(|| false);

    // When the accepted value changes from outside (swatch pick, parent
    // write), the text field follows it and the error state clears.
    let mut last_value = use_signal(|| value.clone());
    if *last_value.read() != value {
        last_value.set(value.clone());
        draft.set(value.clone());
        is_invalid.set(false);
    }

    let handle_text_input = move |e: FormEvent| {
        let text = e.value();
        draft.set(text.clone());
        if edit_accepted(&text) {
            is_invalid.set(false);
            on_change.call(text);
        } else {
            is_invalid.set(true);
        }
    };

    let handle_swatch_input = move |e: FormEvent| {
        on_change.call(e.value());
    };

    let input_id = picker_input_id(&label);

    rsx! {
        div { class: "color-picker {class}",
            label {
                class: "picker-label",
                r#for: "{input_id}",
                "{label}"
            }

            div { class: "picker-row",
                input {
                    class: "picker-swatch-input",
                    r#type: "color",
                    value: "{value}",
                    oninput: handle_swatch_input,
                }

                div { class: "picker-text-column",
                    input {
                        class: if is_invalid() { "hex-input invalid" } else { "hex-input" },
                        r#type: "text",
                        id: "{input_id}",
                        value: "{draft}",
                        spellcheck: "false",
                        placeholder: "#rrggbb",
                        oninput: handle_text_input,
                    }

                    if is_invalid() {
                        p { class: "error-text", "⚠ Enter a hex color like #1a6b54" }
                    }
                }
            }

            div { class: "picker-preview",
                span { class: "preview-label", "Preview" }
                ColorSwatch { color: value.clone() }
            }
        }
    }
}
