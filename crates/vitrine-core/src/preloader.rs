//! The preloader pulse state machine.
//!
//! [`Preloader`] is the tick-driven core of the loading animation: the host
//! calls [`Preloader::tick`] once per frame callback with the current
//! timestamp and acts on the returned [`TickAction`]. The machine owns its
//! frame clock exclusively and drops it the moment the pulse completes; the
//! drawing surface lives in `vitrine-render`, which consumes the [`Dot`]
//! list this module computes.

use crate::color::{ColorPair, Rgba};
use crate::easing::{ease_in_out_cubic, ease_in_out_sine, smoothstep};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;
use std::time::Duration;
use tracing::debug;

/// One concentric circle of evenly spaced dots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingSpec {
    /// Base ring radius in surface pixels
    pub radius: f32,
    /// Number of dots on the ring
    pub dot_count: u32,
}

/// The fixed concentric layout: five rings, inner to outer.
pub const RINGS: [RingSpec; 5] = [
    RingSpec { radius: 20.0, dot_count: 8 },
    RingSpec { radius: 35.0, dot_count: 12 },
    RingSpec { radius: 50.0, dot_count: 16 },
    RingSpec { radius: 65.0, dot_count: 20 },
    RingSpec { radius: 80.0, dot_count: 24 },
];

const CENTER_DOT_RADIUS: f32 = 3.0;
const CENTER_DOT_ALPHA: f32 = 0.9;
const RING_DOT_RADIUS: f32 = 2.0;

/// Preloader timing and appearance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreloaderConfig {
    /// Side length of the square drawing surface in pixels
    pub surface_size: u32,
    /// How long the pulse runs before fading out
    pub duration: Duration,
    /// Length of the fade to transparent
    pub fade_duration: Duration,
    /// Hold between overlay removal and the slider-ready signal
    pub reveal_delay: Duration,
    /// Primary/accent dot colors
    pub colors: ColorPair,
}

impl Default for PreloaderConfig {
    fn default() -> Self {
        PreloaderConfig {
            surface_size: 300,
            duration: Duration::from_millis(3000),
            fade_duration: Duration::from_millis(800),
            reveal_delay: Duration::from_millis(500),
            colors: ColorPair::default(),
        }
    }
}

/// Where the preloader is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Pulse animation running
    Pulsing,
    /// Pulse done, overlay fading to transparent
    FadingOut,
    /// Overlay removed, holding before the reveal signal
    AwaitingReveal,
    /// Reveal signalled, nothing left to do
    Finished,
}

/// The re-scheduling decision returned by [`Preloader::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickAction {
    /// A pulse frame advanced: present the surface and schedule the next
    /// frame callback
    Continue,
    /// Returned exactly once, when elapsed time reaches the configured
    /// duration: stop the frame loop and begin the overlay fade
    FadeOut,
    /// An internal deadline is pending: poll again on a later callback
    Wait,
    /// Returned exactly once: the host slider may begin its entrance
    Reveal,
    /// Terminal: no further calls required
    Finished,
}

/// One dot of the computed pulse frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    /// Center position on the surface
    pub position: Vec2,
    /// Dot radius in pixels
    pub radius: f32,
    /// Fill color with per-dot opacity applied
    pub color: Rgba,
}

// Frame timestamps while the pulse runs. Dropped on completion, which also
// cancels any further frame accounting.
#[derive(Debug, Clone, Copy)]
struct FrameClock {
    started: Duration,
    last: Duration,
}

#[derive(Debug, Clone, Copy)]
enum State {
    Pulsing,
    FadingOut { since: Duration },
    AwaitingReveal { since: Duration },
    Finished,
}

/// The tick-driven pulse machine. See the module docs for the contract.
#[derive(Debug)]
pub struct Preloader {
    config: PreloaderConfig,
    state: State,
    clock: Option<FrameClock>,
    /// Animation time in seconds, accumulated from frame deltas
    time: f32,
    opacity: f32,
}

impl Preloader {
    /// Create a machine in the `Pulsing` phase. The clock starts on the
    /// first `tick`.
    pub fn new(config: PreloaderConfig) -> Self {
        Preloader {
            config,
            state: State::Pulsing,
            clock: None,
            time: 0.0,
            opacity: 1.0,
        }
    }

    /// The configuration this machine runs with.
    pub fn config(&self) -> &PreloaderConfig {
        &self.config
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        match self.state {
            State::Pulsing => Phase::Pulsing,
            State::FadingOut { .. } => Phase::FadingOut,
            State::AwaitingReveal { .. } => Phase::AwaitingReveal,
            State::Finished => Phase::Finished,
        }
    }

    /// Overlay opacity for the host's compositor: 1.0 while pulsing, eased
    /// down across the fade, 0.0 once dismissed.
    pub fn overlay_opacity(&self) -> f32 {
        self.opacity
    }

    /// Animation time in seconds since the first tick.
    pub fn animation_time(&self) -> f32 {
        self.time
    }

    /// Advance the machine to `now`. Timestamps come from the host's frame
    /// callbacks and must be monotonic; at most one phase transition occurs
    /// per tick.
    pub fn tick(&mut self, now: Duration) -> TickAction {
        match self.state {
            State::Pulsing => {
                let clock = self.clock.get_or_insert(FrameClock {
                    started: now,
                    last: now,
                });
                let delta = now.saturating_sub(clock.last);
                clock.last = now;
                self.time += delta.as_secs_f32();

                if now.saturating_sub(clock.started) >= self.config.duration {
                    debug!("preloader pulse complete, fading out");
                    // Dropping the clock cancels further frame accounting
                    self.clock = None;
                    self.state = State::FadingOut { since: now };
                    return TickAction::FadeOut;
                }
                TickAction::Continue
            }
            State::FadingOut { since } => {
                let elapsed = now.saturating_sub(since);
                if elapsed >= self.config.fade_duration {
                    self.opacity = 0.0;
                    self.state = State::AwaitingReveal { since: now };
                    debug!("preloader overlay dismissed");
                } else {
                    let progress =
                        elapsed.as_secs_f32() / self.config.fade_duration.as_secs_f32();
                    self.opacity = 1.0 - ease_in_out_sine(progress);
                }
                TickAction::Wait
            }
            State::AwaitingReveal { since } => {
                if now.saturating_sub(since) >= self.config.reveal_delay {
                    self.state = State::Finished;
                    debug!("preloader reveal hold elapsed");
                    return TickAction::Reveal;
                }
                TickAction::Wait
            }
            State::Finished => TickAction::Finished,
        }
    }

    /// The current pulse frame: the static center dot followed by every
    /// ring dot, inner ring first.
    pub fn dots(&self) -> Vec<Dot> {
        let center = self.config.surface_size as f32 / 2.0;
        let colors = self.config.colors;
        let capacity = 1 + RINGS.iter().map(|ring| ring.dot_count as usize).sum::<usize>();
        let mut dots = Vec::with_capacity(capacity);

        dots.push(Dot {
            position: Vec2::splat(center),
            radius: CENTER_DOT_RADIUS,
            color: colors.primary.with_alpha(CENTER_DOT_ALPHA),
        });

        for (ring_index, ring) in RINGS.iter().enumerate() {
            // Staggered per-ring phase creates the outward wave
            let pulse_time = self.time * 2.0 - ring_index as f32 * 0.4;
            let radius_pulse = ease_in_out_sine((pulse_time.sin() + 1.0) / 2.0) * 6.0 - 3.0;
            let highlight = ease_in_out_cubic((pulse_time.sin() + 1.0) / 2.0);
            let blend = smoothstep(0.2, 0.8, highlight);

            for i in 0..ring.dot_count {
                let angle = i as f32 / ring.dot_count as f32 * TAU;
                let position = Vec2::new(
                    center + angle.cos() * (ring.radius + radius_pulse),
                    center + angle.sin() * (ring.radius + radius_pulse),
                );
                let opacity_phase = ((pulse_time + i as f32 * 0.2).sin() + 1.0) / 2.0;
                let opacity = 0.3 + ease_in_out_sine(opacity_phase) * 0.7;
                dots.push(Dot {
                    position,
                    radius: RING_DOT_RADIUS,
                    color: colors.primary.lerp(colors.accent, blend).with_alpha(opacity),
                });
            }
        }
        dots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn run_until_fade_out(preloader: &mut Preloader) -> Duration {
        let mut now = Duration::ZERO;
        loop {
            match preloader.tick(now) {
                TickAction::Continue => now += FRAME,
                TickAction::FadeOut => return now,
                other => panic!("unexpected action while pulsing: {:?}", other),
            }
            assert!(now < Duration::from_secs(10), "pulse never completed");
        }
    }

    #[test]
    fn completes_exactly_once_after_duration() {
        let mut preloader = Preloader::new(PreloaderConfig::default());
        let completed_at = run_until_fade_out(&mut preloader);
        assert!(completed_at >= Duration::from_millis(3000));
        assert_eq!(preloader.phase(), Phase::FadingOut);

        // No pulse frames are scheduled after completion
        for i in 1..10 {
            let action = preloader.tick(completed_at + FRAME * i);
            assert_ne!(action, TickAction::Continue);
            assert_ne!(action, TickAction::FadeOut);
        }
    }

    #[test]
    fn fade_and_reveal_deadlines() {
        let mut preloader = Preloader::new(PreloaderConfig::default());
        let faded_at = run_until_fade_out(&mut preloader);

        // Mid-fade the overlay is translucent and still fading
        let mid = faded_at + Duration::from_millis(400);
        assert_eq!(preloader.tick(mid), TickAction::Wait);
        assert_eq!(preloader.phase(), Phase::FadingOut);
        let opacity = preloader.overlay_opacity();
        assert!(opacity > 0.0 && opacity < 1.0);

        // Fade deadline dismisses the overlay
        let dismissed_at = faded_at + Duration::from_millis(800);
        assert_eq!(preloader.tick(dismissed_at), TickAction::Wait);
        assert_eq!(preloader.phase(), Phase::AwaitingReveal);
        assert_eq!(preloader.overlay_opacity(), 0.0);

        // Reveal fires once the hold elapses, and exactly once
        let early = dismissed_at + Duration::from_millis(499);
        assert_eq!(preloader.tick(early), TickAction::Wait);
        let reveal_at = dismissed_at + Duration::from_millis(500);
        assert_eq!(preloader.tick(reveal_at), TickAction::Reveal);
        assert_eq!(preloader.phase(), Phase::Finished);
        assert_eq!(preloader.tick(reveal_at + FRAME), TickAction::Finished);
    }

    #[test]
    fn frame_layout_is_one_center_dot_plus_five_rings() {
        let preloader = Preloader::new(PreloaderConfig::default());
        let dots = preloader.dots();
        assert_eq!(dots.len(), 81); // 1 + 8 + 12 + 16 + 20 + 24

        let center = dots[0];
        assert_eq!(center.position, Vec2::splat(150.0));
        assert_eq!(center.radius, 3.0);
        assert_eq!(center.color.alpha, 0.9);
    }

    #[test]
    fn time_zero_frame_is_deterministic() {
        let preloader = Preloader::new(PreloaderConfig::default());
        let dots = preloader.dots();

        // At time zero the innermost ring has no pulse offset:
        // sin(0) = 0 -> phase 0.5 -> radius offset exactly 0
        let first = dots[1];
        assert!((first.position.x - 170.0).abs() < 1e-3);
        assert!((first.position.y - 150.0).abs() < 1e-3);
        // Opacity phase 0.5 -> 0.3 + 0.7 * 0.5
        assert!((first.color.alpha - 0.65).abs() < 1e-3);
    }

    #[test]
    fn animation_time_accumulates_frame_deltas() {
        let mut preloader = Preloader::new(PreloaderConfig::default());
        preloader.tick(Duration::ZERO);
        preloader.tick(Duration::from_millis(100));
        preloader.tick(Duration::from_millis(250));
        assert!((preloader.animation_time() - 0.25).abs() < 1e-6);
    }
}
