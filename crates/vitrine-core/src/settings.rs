//! The merged slider settings record.
//!
//! [`SliderSettings`] is the single mutable record the host's shader
//! pipeline reads its uniforms from. It is explicitly owned by the host and
//! passed by reference to rendering code; there is no ambient global state.
//! Selecting a preset overlays that preset's key/value pairs onto this
//! record and leaves every other field untouched.

use crate::effects::EffectKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Preset and parameter lookup errors.
///
/// Both variants are programmer errors (a name outside the enumerated
/// tables) and fail loudly rather than substituting a default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresetError {
    /// The (effect, preset) pair is not in the catalogue
    #[error("unknown preset '{preset}' for effect '{effect}'")]
    UnknownPreset {
        /// Effect the lookup targeted
        effect: EffectKind,
        /// Requested preset label
        preset: String,
    },

    /// The parameter key names no settings field
    #[error("unknown parameter key '{0}'")]
    UnknownParameter(String),
}

/// The full mutable settings record: timing, the active selection, the
/// cross-effect multipliers and every per-effect parameter.
///
/// Field defaults equal each effect's `"Default"` preset values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSettings {
    /// Slide transition duration in seconds
    pub transition_duration: f32,
    /// Auto-advance interval in milliseconds
    pub auto_slide_ms: f32,

    /// Currently active effect
    pub current_effect: EffectKind,
    /// Label of the currently active preset
    pub current_preset: String,

    /// Global strength multiplier applied to every effect
    pub global_intensity: f32,
    /// Global animation speed multiplier
    pub speed_multiplier: f32,
    /// Global distortion multiplier
    pub distortion_strength: f32,
    /// Global color enhancement multiplier
    pub color_enhancement: f32,

    /// Glass refraction strength
    pub glass_refraction_strength: f32,
    /// Glass chromatic aberration amount
    pub glass_chromatic_aberration: f32,
    /// Glass bubble clarity
    pub glass_bubble_clarity: f32,
    /// Glass edge glow intensity
    pub glass_edge_glow: f32,
    /// Glass liquid flow speed
    pub glass_liquid_flow: f32,

    /// Frost overall intensity
    pub frost_intensity: f32,
    /// Frost crystal size
    pub frost_crystal_size: f32,
    /// Frost ice coverage
    pub frost_ice_coverage: f32,
    /// Frost temperature tint
    pub frost_temperature: f32,
    /// Frost texture detail
    pub frost_texture: f32,

    /// Ripple spatial frequency
    pub ripple_frequency: f32,
    /// Ripple displacement amplitude
    pub ripple_amplitude: f32,
    /// Ripple wave propagation speed
    pub ripple_wave_speed: f32,
    /// Ripple count multiplier
    pub ripple_count: f32,
    /// Ripple decay rate
    pub ripple_decay: f32,

    /// Plasma overall intensity
    pub plasma_intensity: f32,
    /// Plasma animation speed
    pub plasma_speed: f32,
    /// Plasma energy burst intensity
    pub plasma_energy_intensity: f32,
    /// Plasma contrast boost
    pub plasma_contrast_boost: f32,
    /// Plasma turbulence amount
    pub plasma_turbulence: f32,

    /// Timeshift distortion strength
    pub timeshift_distortion: f32,
    /// Timeshift blur amount
    pub timeshift_blur: f32,
    /// Timeshift flow speed
    pub timeshift_flow: f32,
    /// Timeshift chromatic fringe
    pub timeshift_chromatic: f32,
    /// Timeshift turbulence amount
    pub timeshift_turbulence: f32,
}

impl Default for SliderSettings {
    fn default() -> Self {
        SliderSettings {
            transition_duration: 2.5,
            auto_slide_ms: 5000.0,
            current_effect: EffectKind::Glass,
            current_preset: "Default".to_string(),
            global_intensity: 1.0,
            speed_multiplier: 1.0,
            distortion_strength: 1.0,
            color_enhancement: 1.0,
            glass_refraction_strength: 1.0,
            glass_chromatic_aberration: 1.0,
            glass_bubble_clarity: 1.0,
            glass_edge_glow: 1.0,
            glass_liquid_flow: 1.0,
            frost_intensity: 1.5,
            frost_crystal_size: 1.0,
            frost_ice_coverage: 1.0,
            frost_temperature: 1.0,
            frost_texture: 1.0,
            ripple_frequency: 25.0,
            ripple_amplitude: 0.08,
            ripple_wave_speed: 1.0,
            ripple_count: 1.0,
            ripple_decay: 1.0,
            plasma_intensity: 1.2,
            plasma_speed: 0.8,
            plasma_energy_intensity: 0.4,
            plasma_contrast_boost: 0.3,
            plasma_turbulence: 1.0,
            timeshift_distortion: 1.6,
            timeshift_blur: 1.5,
            timeshift_flow: 1.4,
            timeshift_chromatic: 1.5,
            timeshift_turbulence: 1.4,
        }
    }
}

// Generates the string-keyed accessors over the float fields.
macro_rules! param_accessors {
    ($($key:literal => $field:ident),+ $(,)?) => {
        impl SliderSettings {
            /// Read a parameter by key, `None` if the key names no field.
            pub fn param(&self, key: &str) -> Option<f32> {
                match key {
                    $($key => Some(self.$field),)+
                    _ => None,
                }
            }

            /// Write a parameter by key.
            pub fn set_param(&mut self, key: &str, value: f32) -> Result<(), PresetError> {
                match key {
                    $($key => {
                        self.$field = value;
                        Ok(())
                    })+
                    _ => Err(PresetError::UnknownParameter(key.to_string())),
                }
            }

            /// Every addressable parameter key, in declaration order.
            pub fn param_keys() -> &'static [&'static str] {
                &[$($key),+]
            }
        }
    };
}

param_accessors! {
    "global_intensity" => global_intensity,
    "speed_multiplier" => speed_multiplier,
    "distortion_strength" => distortion_strength,
    "color_enhancement" => color_enhancement,
    "glass_refraction_strength" => glass_refraction_strength,
    "glass_chromatic_aberration" => glass_chromatic_aberration,
    "glass_bubble_clarity" => glass_bubble_clarity,
    "glass_edge_glow" => glass_edge_glow,
    "glass_liquid_flow" => glass_liquid_flow,
    "frost_intensity" => frost_intensity,
    "frost_crystal_size" => frost_crystal_size,
    "frost_ice_coverage" => frost_ice_coverage,
    "frost_temperature" => frost_temperature,
    "frost_texture" => frost_texture,
    "ripple_frequency" => ripple_frequency,
    "ripple_amplitude" => ripple_amplitude,
    "ripple_wave_speed" => ripple_wave_speed,
    "ripple_count" => ripple_count,
    "ripple_decay" => ripple_decay,
    "plasma_intensity" => plasma_intensity,
    "plasma_speed" => plasma_speed,
    "plasma_energy_intensity" => plasma_energy_intensity,
    "plasma_contrast_boost" => plasma_contrast_boost,
    "plasma_turbulence" => plasma_turbulence,
    "timeshift_distortion" => timeshift_distortion,
    "timeshift_blur" => timeshift_blur,
    "timeshift_flow" => timeshift_flow,
    "timeshift_chromatic" => timeshift_chromatic,
    "timeshift_turbulence" => timeshift_turbulence,
}

impl SliderSettings {
    /// Select `preset` for `effect`: overlays exactly that preset's
    /// key/value pairs onto this record and updates the active selection.
    ///
    /// An unknown (effect, preset) pair is rejected and the record is left
    /// unmodified.
    pub fn select_preset(
        &mut self,
        effect: EffectKind,
        preset: &str,
    ) -> Result<(), PresetError> {
        let bundle = effect.preset(preset).ok_or_else(|| PresetError::UnknownPreset {
            effect,
            preset: preset.to_string(),
        })?;

        for &(key, value) in bundle.params {
            // Catalogue keys always name real fields
            self.set_param(key, value)?;
        }
        self.current_effect = effect;
        self.current_preset = preset.to_string();
        debug!("applied preset {} for effect {}", preset, effect);
        Ok(())
    }

    /// The currently selected preset bundle, if the active selection still
    /// names a catalogue entry.
    pub fn active_preset(&self) -> Option<&'static crate::effects::Preset> {
        self.current_effect.preset(&self.current_preset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn param_reads_match_fields() {
        let settings = SliderSettings::default();
        assert_eq!(settings.param("frost_intensity"), Some(1.5));
        assert_eq!(settings.param("ripple_frequency"), Some(25.0));
        assert_eq!(settings.param("bogus_key"), None);
    }

    #[test]
    fn set_param_rejects_unknown_keys() {
        let mut settings = SliderSettings::default();
        let err = settings.set_param("glass_opacity", 2.0).unwrap_err();
        assert_eq!(
            err,
            PresetError::UnknownParameter("glass_opacity".to_string())
        );
    }

    #[test]
    fn param_keys_cover_the_catalogue() {
        for effect in EffectKind::all() {
            for preset in effect.presets() {
                for (key, _) in preset.params {
                    assert!(
                        SliderSettings::param_keys().contains(key),
                        "catalogue key {} has no settings field",
                        key
                    );
                }
            }
        }
    }

    #[test]
    fn active_preset_follows_selection() {
        let mut settings = SliderSettings::default();
        assert_eq!(settings.active_preset().unwrap().name, "Default");
        settings
            .select_preset(EffectKind::Frost, "Arctic")
            .unwrap();
        assert_eq!(settings.active_preset().unwrap().name, "Arctic");
        assert_eq!(settings.current_effect, EffectKind::Frost);
    }
}
