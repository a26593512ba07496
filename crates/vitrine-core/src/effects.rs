//! The effect catalogue: every selectable slider effect and its named
//! parameter presets.
//!
//! The tables here are static configuration. Applying a preset to the merged
//! settings record happens in [`crate::settings`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// A selectable visual effect for the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectKind {
    /// Refractive glass distortion
    Glass,
    /// Ice crystal growth
    Frost,
    /// Concentric water ripples
    Ripple,
    /// Turbulent plasma field
    Plasma,
    /// Temporal smear and flow
    Timeshift,
}

/// A named, pre-tuned bundle of parameter values for one effect.
///
/// Keys name fields of [`crate::SliderSettings`]; applying a preset
/// overwrites exactly these keys and nothing else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    /// Preset label, unique within its effect
    pub name: &'static str,
    /// Parameter key/value pairs the preset overlays onto the settings
    pub params: &'static [(&'static str, f32)],
}

impl EffectKind {
    /// All effects, in display order.
    pub fn all() -> [EffectKind; 5] {
        [
            EffectKind::Glass,
            EffectKind::Frost,
            EffectKind::Ripple,
            EffectKind::Plasma,
            EffectKind::Timeshift,
        ]
    }

    /// Lowercase identifier, also the prefix of this effect's parameter keys.
    pub fn key(self) -> &'static str {
        match self {
            EffectKind::Glass => "glass",
            EffectKind::Frost => "frost",
            EffectKind::Ripple => "ripple",
            EffectKind::Plasma => "plasma",
            EffectKind::Timeshift => "timeshift",
        }
    }

    /// Human-readable display name.
    pub fn name(self) -> &'static str {
        match self {
            EffectKind::Glass => "Glass",
            EffectKind::Frost => "Frost",
            EffectKind::Ripple => "Ripple",
            EffectKind::Plasma => "Plasma",
            EffectKind::Timeshift => "Timeshift",
        }
    }

    /// The effect's preset table. Every effect carries exactly one preset
    /// named `"Default"`.
    pub fn presets(self) -> &'static [Preset] {
        match self {
            EffectKind::Glass => GLASS_PRESETS,
            EffectKind::Frost => FROST_PRESETS,
            EffectKind::Ripple => RIPPLE_PRESETS,
            EffectKind::Plasma => PLASMA_PRESETS,
            EffectKind::Timeshift => TIMESHIFT_PRESETS,
        }
    }

    /// Look up a preset by label.
    pub fn preset(self, name: &str) -> Option<&'static Preset> {
        self.presets().iter().find(|preset| preset.name == name)
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

const GLASS_PRESETS: &[Preset] = &[
    Preset {
        name: "Subtle",
        params: &[
            ("glass_refraction_strength", 0.6),
            ("glass_chromatic_aberration", 0.5),
            ("glass_bubble_clarity", 1.3),
            ("glass_edge_glow", 0.7),
            ("glass_liquid_flow", 0.8),
        ],
    },
    Preset {
        name: "Default",
        params: &[
            ("glass_refraction_strength", 1.0),
            ("glass_chromatic_aberration", 1.0),
            ("glass_bubble_clarity", 1.0),
            ("glass_edge_glow", 1.0),
            ("glass_liquid_flow", 1.0),
        ],
    },
    Preset {
        name: "Crystal",
        params: &[
            ("glass_refraction_strength", 1.5),
            ("glass_chromatic_aberration", 1.8),
            ("glass_bubble_clarity", 0.7),
            ("glass_edge_glow", 1.4),
            ("glass_liquid_flow", 0.5),
        ],
    },
    Preset {
        name: "Liquid",
        params: &[
            ("glass_refraction_strength", 0.8),
            ("glass_chromatic_aberration", 0.4),
            ("glass_bubble_clarity", 1.2),
            ("glass_edge_glow", 0.8),
            ("glass_liquid_flow", 1.8),
        ],
    },
];

const FROST_PRESETS: &[Preset] = &[
    Preset {
        name: "Light",
        params: &[
            ("frost_intensity", 0.8),
            ("frost_crystal_size", 1.3),
            ("frost_ice_coverage", 0.6),
            ("frost_temperature", 0.7),
            ("frost_texture", 0.8),
        ],
    },
    Preset {
        name: "Default",
        params: &[
            ("frost_intensity", 1.5),
            ("frost_crystal_size", 1.0),
            ("frost_ice_coverage", 1.0),
            ("frost_temperature", 1.0),
            ("frost_texture", 1.0),
        ],
    },
    Preset {
        name: "Heavy",
        params: &[
            ("frost_intensity", 2.2),
            ("frost_crystal_size", 0.7),
            ("frost_ice_coverage", 1.4),
            ("frost_temperature", 1.5),
            ("frost_texture", 1.3),
        ],
    },
    Preset {
        name: "Arctic",
        params: &[
            ("frost_intensity", 2.8),
            ("frost_crystal_size", 0.5),
            ("frost_ice_coverage", 1.8),
            ("frost_temperature", 2.0),
            ("frost_texture", 1.6),
        ],
    },
];

const RIPPLE_PRESETS: &[Preset] = &[
    Preset {
        name: "Gentle",
        params: &[
            ("ripple_frequency", 15.0),
            ("ripple_amplitude", 0.05),
            ("ripple_wave_speed", 0.7),
            ("ripple_count", 0.8),
            ("ripple_decay", 1.2),
        ],
    },
    Preset {
        name: "Default",
        params: &[
            ("ripple_frequency", 25.0),
            ("ripple_amplitude", 0.08),
            ("ripple_wave_speed", 1.0),
            ("ripple_count", 1.0),
            ("ripple_decay", 1.0),
        ],
    },
    Preset {
        name: "Strong",
        params: &[
            ("ripple_frequency", 35.0),
            ("ripple_amplitude", 0.12),
            ("ripple_wave_speed", 1.4),
            ("ripple_count", 1.3),
            ("ripple_decay", 0.8),
        ],
    },
    Preset {
        name: "Tsunami",
        params: &[
            ("ripple_frequency", 45.0),
            ("ripple_amplitude", 0.18),
            ("ripple_wave_speed", 1.8),
            ("ripple_count", 1.6),
            ("ripple_decay", 0.6),
        ],
    },
];

const PLASMA_PRESETS: &[Preset] = &[
    Preset {
        name: "Calm",
        params: &[
            ("plasma_intensity", 0.8),
            ("plasma_speed", 0.5),
            ("plasma_energy_intensity", 0.2),
            ("plasma_contrast_boost", 0.1),
            ("plasma_turbulence", 0.6),
        ],
    },
    Preset {
        name: "Default",
        params: &[
            ("plasma_intensity", 1.2),
            ("plasma_speed", 0.8),
            ("plasma_energy_intensity", 0.4),
            ("plasma_contrast_boost", 0.3),
            ("plasma_turbulence", 1.0),
        ],
    },
    Preset {
        name: "Storm",
        params: &[
            ("plasma_intensity", 1.8),
            ("plasma_speed", 1.3),
            ("plasma_energy_intensity", 0.7),
            ("plasma_contrast_boost", 0.5),
            ("plasma_turbulence", 1.5),
        ],
    },
    Preset {
        name: "Nuclear",
        params: &[
            ("plasma_intensity", 2.5),
            ("plasma_speed", 1.8),
            ("plasma_energy_intensity", 1.0),
            ("plasma_contrast_boost", 0.8),
            ("plasma_turbulence", 2.0),
        ],
    },
];

const TIMESHIFT_PRESETS: &[Preset] = &[
    Preset {
        name: "Subtle",
        params: &[
            ("timeshift_distortion", 0.5),
            ("timeshift_blur", 0.6),
            ("timeshift_flow", 0.5),
            ("timeshift_chromatic", 0.4),
            ("timeshift_turbulence", 0.6),
        ],
    },
    Preset {
        name: "Default",
        params: &[
            ("timeshift_distortion", 1.6),
            ("timeshift_blur", 1.5),
            ("timeshift_flow", 1.4),
            ("timeshift_chromatic", 1.5),
            ("timeshift_turbulence", 1.4),
        ],
    },
    Preset {
        name: "Intense",
        params: &[
            ("timeshift_distortion", 2.2),
            ("timeshift_blur", 2.0),
            ("timeshift_flow", 2.0),
            ("timeshift_chromatic", 2.2),
            ("timeshift_turbulence", 2.0),
        ],
    },
    Preset {
        name: "Dreamlike",
        params: &[
            ("timeshift_distortion", 2.8),
            ("timeshift_blur", 2.5),
            ("timeshift_flow", 2.5),
            ("timeshift_chromatic", 2.6),
            ("timeshift_turbulence", 2.5),
        ],
    },
];
