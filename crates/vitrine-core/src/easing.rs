//! Easing and interpolation primitives for the preloader pulse.
//!
//! These mirror the standard CSS/GL formulations exactly; the pulse math in
//! [`crate::preloader`] depends on their precise shape, not just their
//! general feel.

use std::f32::consts::PI;

/// Sinusoidal ease-in-out: `-(cos(PI * t) - 1) / 2`.
pub fn ease_in_out_sine(t: f32) -> f32 {
    -((PI * t).cos() - 1.0) / 2.0
}

/// Cubic ease-in-out: `4t^3` below the midpoint, mirrored cubic above it.
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Hermite smoothstep between `edge0` and `edge1`, clamped to [0, 1].
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn sine_endpoints_and_midpoint() {
        assert!(ease_in_out_sine(0.0).abs() < EPS);
        assert!((ease_in_out_sine(1.0) - 1.0).abs() < EPS);
        assert!((ease_in_out_sine(0.5) - 0.5).abs() < EPS);
    }

    #[test]
    fn cubic_is_continuous_at_midpoint() {
        // Both branches must agree at t = 0.5
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < EPS);
        assert!((ease_in_out_cubic(0.4999999) - 0.5).abs() < 1e-5);
        assert!(ease_in_out_cubic(0.0).abs() < EPS);
        assert!((ease_in_out_cubic(1.0) - 1.0).abs() < EPS);
    }

    #[test]
    fn smoothstep_clamps_outside_edges() {
        assert_eq!(smoothstep(0.2, 0.8, 0.0), 0.0);
        assert_eq!(smoothstep(0.2, 0.8, 0.2), 0.0);
        assert_eq!(smoothstep(0.2, 0.8, 0.8), 1.0);
        assert_eq!(smoothstep(0.2, 0.8, 1.0), 1.0);
    }

    proptest! {
        #[test]
        fn smoothstep_is_monotonic(a in 0.0f32..1.0, b in 0.0f32..1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(smoothstep(0.2, 0.8, lo) <= smoothstep(0.2, 0.8, hi));
        }

        #[test]
        fn easings_stay_in_unit_range(t in 0.0f32..=1.0) {
            prop_assert!((0.0..=1.0).contains(&ease_in_out_sine(t)));
            prop_assert!((-EPS..=1.0 + EPS).contains(&ease_in_out_cubic(t)));
        }
    }
}
