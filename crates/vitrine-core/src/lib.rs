//! Vitrine Core - Domain Model for the Effects Slider Engine
//!
//! This crate contains the core domain model for Vitrine, including:
//! - Easing and interpolation primitives
//! - Color parsing and blending
//! - The effect/preset catalogue and the merged slider settings
//! - The preloader pulse state machine

#![warn(missing_docs)]

pub use glam::Vec2;

pub mod color;
pub mod easing;
pub mod effects;
pub mod preloader;
pub mod settings;

// --- Re-exports grouped by category ---

// Color
pub use color::{ColorPair, Rgb, Rgba};

// Easing
pub use easing::{ease_in_out_cubic, ease_in_out_sine, smoothstep};

// Effect catalogue
pub use effects::{EffectKind, Preset};

// Preloader
pub use preloader::{Dot, Phase, Preloader, PreloaderConfig, RingSpec, TickAction, RINGS};

// Settings
pub use settings::{PresetError, SliderSettings};
