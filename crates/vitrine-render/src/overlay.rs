//! The preloader overlay: surface ownership, frame painting and the reveal
//! signal.

use std::time::Duration;
use tiny_skia::{Color, FillRule, Paint, Path, PathBuilder, Pixmap, Transform};
use tracing::{debug, info, warn};
use vitrine_core::preloader::{Phase, Preloader, PreloaderConfig, TickAction};

/// Host-side hook for the preloader's completion signal.
///
/// Invoked exactly once, after the overlay has been removed and the reveal
/// hold has elapsed; the slider may then begin its entrance transition.
pub trait SliderHost {
    /// The slider may start its entrance.
    fn slider_ready(&mut self);
}

/// Owns the pulse machine, the drawing surface and the host hook.
///
/// The host calls [`PreloaderOverlay::tick`] once per frame callback and,
/// while a surface exists, composites it at [`PreloaderOverlay::opacity`].
/// If the surface cannot be allocated the overlay runs headless: timing,
/// phases and the reveal signal are unaffected.
pub struct PreloaderOverlay<H: SliderHost> {
    preloader: Preloader,
    surface: Option<Pixmap>,
    host: H,
}

impl<H: SliderHost> PreloaderOverlay<H> {
    /// Create the overlay and allocate its surface.
    pub fn new(config: PreloaderConfig, host: H) -> Self {
        let size = config.surface_size;
        let surface = Pixmap::new(size, size);
        if surface.is_none() {
            warn!("preloader surface unavailable, running headless");
        }
        PreloaderOverlay {
            preloader: Preloader::new(config),
            surface,
            host,
        }
    }

    /// Advance the preloader to `now`, repaint or release the surface as
    /// the phase dictates, and forward the reveal signal. Returns the core
    /// machine's re-scheduling decision.
    pub fn tick(&mut self, now: Duration) -> TickAction {
        let action = self.preloader.tick(now);
        match action {
            // FadeOut paints the final frame; it stays up while fading
            TickAction::Continue | TickAction::FadeOut => self.repaint(),
            TickAction::Wait => {
                if self.preloader.phase() != Phase::FadingOut {
                    self.release_surface();
                }
            }
            TickAction::Reveal => {
                self.release_surface();
                info!("preloader done, signalling slider entrance");
                self.host.slider_ready();
            }
            TickAction::Finished => {}
        }
        action
    }

    /// The painted surface, `None` once dismissed (or never allocated).
    pub fn surface(&self) -> Option<&Pixmap> {
        self.surface.as_ref()
    }

    /// Overlay opacity for the host's compositor.
    pub fn opacity(&self) -> f32 {
        self.preloader.overlay_opacity()
    }

    /// Current lifecycle phase of the underlying machine.
    pub fn phase(&self) -> Phase {
        self.preloader.phase()
    }

    /// The host hook.
    pub fn host(&self) -> &H {
        &self.host
    }

    fn release_surface(&mut self) {
        if self.surface.take().is_some() {
            debug!("preloader overlay removed");
        }
    }

    fn repaint(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        surface.fill(Color::TRANSPARENT);

        let mut paint = Paint::default();
        paint.anti_alias = true;
        for dot in self.preloader.dots() {
            let Some(path) = circle(dot.position.x, dot.position.y, dot.radius) else {
                continue;
            };
            paint.set_color_rgba8(
                dot.color.r,
                dot.color.g,
                dot.color.b,
                (dot.color.alpha * 255.0).round() as u8,
            );
            surface.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }
    }
}

fn circle(x: f32, y: f32, radius: f32) -> Option<Path> {
    let mut builder = PathBuilder::new();
    builder.push_circle(x, y, radius);
    builder.finish()
}
