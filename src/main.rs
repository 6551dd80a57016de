#![allow(non_snake_case)]

mod app;
mod components;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use huekit_core::HexColor;

/// Accent color seeded from the command line
static INITIAL_ACCENT: OnceLock<HexColor> = OnceLock::new();

/// Get the CLI-seeded accent color, if one was given and valid
pub fn get_initial_accent() -> Option<HexColor> {
    INITIAL_ACCENT.get().copied()
}

/// HueKit - palette studio
#[derive(Parser, Debug)]
#[command(name = "huekit-desktop")]
#[command(about = "HueKit - tune a site palette with live preview")]
struct Args {
    /// Starting accent color, e.g. #1a6b54
    #[arg(short, long)]
    accent: Option<String>,

    /// Window title override
    #[arg(short, long)]
    title: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    if let Some(ref accent) = args.accent {
        match accent.parse::<HexColor>() {
            Ok(color) => {
                let _ = INITIAL_ACCENT.set(color);
            }
            Err(e) => {
                tracing::warn!("Ignoring --accent {:?}: {}", accent, e);
            }
        }
    }

    let title = args.title.unwrap_or_else(|| "HueKit Studio".to_string());

    tracing::info!(
        "Starting '{}' with accent: {:?}",
        title,
        get_initial_accent().map(|c| c.to_string())
    );

    // Picker stack on the left, live preview on the right
    let window_width = 980.0;
    let window_height = 760.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
