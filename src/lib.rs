//! Firmware and host tooling for a WS2812 face visor driven by single-byte serial keycodes.
//!
//! A keypad (or any microcontroller) sends one byte per key press over a serial link.
//! Each byte selects a face, a color preset, or the next color in the palette.
//! The selected face bitmap is reordered into the panel's serpentine wiring order,
//! colored, and written to the LED strip.
//!
//! # Glossary
//!
//! - **Keycode:** single byte read from the serial link. See [`face::Keymap`].
//! - **Face:** a monochrome bitmap shown on the panel. See [`face::FaceId`].
//! - **Preset:** a keycode whose color is fixed regardless of the cycling state.
//! - **Serpentine order:** column-major traversal alternating direction each column.
//!   See [`led2d::layout::LedLayout`].
//! - **Settle delay:** pause after a hardware write so the strip latches the frame.
//!
//! # Features
//!
//! - `host` (default): `std` build with BMP and PNG face loading, PNG previews, and tests.
//! - `embedded`: RP2040 firmware (`pico1` + `arm` + `defmt`).
#![cfg_attr(not(feature = "host"), no_std)]
#![allow(async_fn_in_trait, reason = "single-threaded embedded")]

// Compile-time checks: firmware builds need the board and architecture (unless running on host)
#[cfg(all(not(feature = "pico1"), not(feature = "host")))]
compile_error!("Must enable the board feature 'pico1' (or 'host' for a host build)");

#[cfg(all(not(feature = "arm"), not(feature = "host")))]
compile_error!("Must enable the architecture feature 'arm' (or 'host' for a host build)");

#[cfg(not(feature = "host"))]
pub mod button;
mod error;
pub mod face;
pub mod led2d;
pub mod led_strip;
pub mod selection;
pub mod serial;
#[cfg(feature = "host")]
pub mod to_png;
pub mod visor;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
