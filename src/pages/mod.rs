//! Page components for HueKit.

mod studio;

pub use studio::Studio;
