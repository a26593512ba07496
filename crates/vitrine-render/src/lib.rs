//! Vitrine Render - CPU Overlay Renderer
//!
//! This crate rasterizes the preloader pulse onto a `tiny-skia` surface and
//! drives the host-facing reveal signal. The pulse math and timing live in
//! `vitrine-core`; this crate only paints frames and forwards the one-shot
//! "slider may reveal itself" notification.

pub mod overlay;

pub use overlay::{PreloaderOverlay, SliderHost};
