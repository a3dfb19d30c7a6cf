use serde::{Deserialize, Serialize};

use crate::EffectKind;

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("failed to parse effect manifest: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid effect manifest: {0}")]
    Invalid(String),
}

/// Deployment-level tunables for an effect.
///
/// Defaults match the values shipped on the original site. `pixel_ratio_limit`
/// caps how far the backing store scales with the device pixel ratio; 2.0 is
/// the performance ceiling the original chose, kept configurable here.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TunableParams {
    pub speed: f32,
    pub wave_amp: f32,
    pub wave_freq: f32,
    pub glow_strength: f32,
    pub pointer_force: f32,
    pub pointer_smoothing: f32,
    pub pixel_ratio_limit: f64,
}

impl Default for TunableParams {
    fn default() -> Self {
        Self {
            speed: 0.16,
            wave_amp: 1.0,
            wave_freq: 2.0,
            glow_strength: 0.05,
            pointer_force: 1.7,
            pointer_smoothing: 0.05,
            pixel_ratio_limit: 2.0,
        }
    }
}

/// TOML manifest selecting an effect and overriding its tunables.
///
/// ```toml
/// effect = "ink-wave"
///
/// [params]
/// speed = 0.2
/// glow_strength = 0.08
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EffectManifest {
    pub effect: EffectKind,
    #[serde(default)]
    pub params: TunableParams,
}

impl EffectManifest {
    pub fn from_toml_str(input: &str) -> Result<Self, ManifestError> {
        let manifest: EffectManifest = toml::from_str(input)?;
        manifest.validate()?;
        Ok(manifest)
    }

    fn validate(&self) -> Result<(), ManifestError> {
        let params = &self.params;
        if !(params.pointer_smoothing > 0.0 && params.pointer_smoothing <= 1.0) {
            return Err(ManifestError::Invalid(format!(
                "pointer_smoothing must be in (0, 1], got {}",
                params.pointer_smoothing
            )));
        }
        if params.glow_strength <= 0.0 {
            return Err(ManifestError::Invalid(format!(
                "glow_strength must be positive, got {}",
                params.glow_strength
            )));
        }
        if params.pixel_ratio_limit < 1.0 {
            return Err(ManifestError::Invalid(format!(
                "pixel_ratio_limit must be at least 1.0, got {}",
                params.pixel_ratio_limit
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_values() {
        let params = TunableParams::default();
        assert_eq!(params.speed, 0.16);
        assert_eq!(params.wave_amp, 1.0);
        assert_eq!(params.wave_freq, 2.0);
        assert_eq!(params.glow_strength, 0.05);
        assert_eq!(params.pointer_force, 1.7);
        assert_eq!(params.pointer_smoothing, 0.05);
        assert_eq!(params.pixel_ratio_limit, 2.0);
    }

    #[test]
    fn parses_manifest_with_overrides() {
        let manifest = EffectManifest::from_toml_str(
            r#"
effect = "ink-wave"

[params]
speed = 0.25
pixel_ratio_limit = 1.5
"#,
        )
        .unwrap();
        assert_eq!(manifest.effect, EffectKind::InkWave);
        assert_eq!(manifest.params.speed, 0.25);
        assert_eq!(manifest.params.pixel_ratio_limit, 1.5);
        // Untouched fields keep their defaults.
        assert_eq!(manifest.params.wave_freq, 2.0);
    }

    #[test]
    fn rejects_out_of_range_smoothing() {
        let err = EffectManifest::from_toml_str(
            r#"
effect = "pulse-rings"

[params]
pointer_smoothing = 0.0
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ManifestError::Invalid(_)));
    }

    #[test]
    fn rejects_sub_unit_pixel_ratio_limit() {
        let err = EffectManifest::from_toml_str(
            r#"
effect = "pulse-rings"

[params]
pixel_ratio_limit = 0.5
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ManifestError::Invalid(_)));
    }

    #[test]
    fn rejects_unknown_effect() {
        assert!(EffectManifest::from_toml_str(r#"effect = "plasma""#).is_err());
    }
}
