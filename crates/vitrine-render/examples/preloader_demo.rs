//! Preloader Demo
//!
//! Runs the preloader against the real clock and logs each phase change.
//! A real host would composite `overlay.surface()` at `overlay.opacity()`
//! once per frame; here we just drive the lifecycle.

use anyhow::Result;
use std::time::{Duration, Instant};
use tracing::info;
use vitrine_core::preloader::{Phase, PreloaderConfig, TickAction};
use vitrine_render::{PreloaderOverlay, SliderHost};

struct DemoHost;

impl SliderHost for DemoHost {
    fn slider_ready(&mut self) {
        info!("slider may begin its entrance transition");
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let mut overlay = PreloaderOverlay::new(PreloaderConfig::default(), DemoHost);
    let epoch = Instant::now();
    let mut last_phase = Phase::Pulsing;

    loop {
        let action = overlay.tick(epoch.elapsed());
        let phase = overlay.phase();
        if phase != last_phase {
            info!(?phase, elapsed = ?epoch.elapsed(), "phase change");
            last_phase = phase;
        }
        if action == TickAction::Finished {
            break;
        }
        std::thread::sleep(Duration::from_millis(16));
    }

    info!("preloader finished");
    Ok(())
}
