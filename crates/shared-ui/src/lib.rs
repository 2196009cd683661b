//! Dioxus component library for the Ushuari console.

pub mod components;

pub use components::*;
