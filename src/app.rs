use dioxus::prelude::*;

use crate::pages::Studio;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Injects the global stylesheet and renders the studio view.
#[component]
pub fn App() -> Element {
    rsx! {
        style { {GLOBAL_STYLES} }
        Studio {}
    }
}
