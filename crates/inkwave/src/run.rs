use std::fs;

use anyhow::{Context, Result};
use effects::{sources, EffectKind, EffectManifest, TunableParams};
use renderer::{run_windowed, ControllerConfig, EffectParams, WindowOptions};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

const REDUCED_MOTION_ENV: &str = "INKWAVE_REDUCED_MOTION";

pub fn initialise_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

pub fn run(cli: Cli) -> Result<()> {
    let (effect, params) = resolve_effect(&cli)?;
    let reduced_motion = cli.reduced_motion || reduced_motion_from_env();

    let config = ControllerConfig {
        params: EffectParams {
            speed: params.speed,
            wave_amp: params.wave_amp,
            wave_freq: params.wave_freq,
            glow_strength: params.glow_strength,
            pointer_force: params.pointer_force,
        },
        pointer_smoothing: params.pointer_smoothing,
        pixel_ratio_limit: params.pixel_ratio_limit,
        reduced_motion,
    };

    let sources = sources(effect);
    tracing::info!(
        effect = %effect,
        width = cli.size.0,
        height = cli.size.1,
        reduced_motion,
        "starting shader canvas"
    );

    run_windowed(WindowOptions {
        title: format!("inkwave - {}", sources.name),
        width: cli.size.0,
        height: cli.size.1,
        fps_cap: cli.fps,
        config,
        vertex_source: sources.vertex.to_owned(),
        fragment_source: sources.fragment.to_owned(),
    })
}

/// Resolution order: built-in defaults, then the manifest, then CLI flags.
///
/// A manifest also selects the effect; the positional argument applies only
/// when no manifest is given.
fn resolve_effect(cli: &Cli) -> Result<(EffectKind, TunableParams)> {
    let (effect, mut params) = match &cli.manifest {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read manifest {}", path.display()))?;
            let manifest = EffectManifest::from_toml_str(&text)
                .with_context(|| format!("failed to load manifest {}", path.display()))?;
            (manifest.effect, manifest.params)
        }
        None => (cli.effect, TunableParams::default()),
    };

    if let Some(speed) = cli.speed {
        params.speed = speed;
    }
    if let Some(wave_amp) = cli.wave_amp {
        params.wave_amp = wave_amp;
    }
    if let Some(wave_freq) = cli.wave_freq {
        params.wave_freq = wave_freq;
    }
    if let Some(glow) = cli.glow {
        params.glow_strength = glow;
    }
    if let Some(force) = cli.pointer_force {
        params.pointer_force = force;
    }
    if let Some(limit) = cli.pixel_ratio_limit {
        params.pixel_ratio_limit = limit.max(1.0);
    }

    Ok((effect, params))
}

fn reduced_motion_from_env() -> bool {
    match std::env::var(REDUCED_MOTION_ENV) {
        Ok(value) => matches!(value.trim(), "1" | "true" | "yes"),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from(["inkwave", "ink-wave", "--speed", "0.5", "--glow", "0.1"]);
        let (effect, params) = resolve_effect(&cli).unwrap();
        assert_eq!(effect, EffectKind::InkWave);
        assert_eq!(params.speed, 0.5);
        assert_eq!(params.glow_strength, 0.1);
        assert_eq!(params.pointer_force, 1.7);
    }

    #[test]
    fn pixel_ratio_limit_never_drops_below_one() {
        let cli = Cli::parse_from(["inkwave", "--pixel-ratio-limit", "0.25"]);
        let (_, params) = resolve_effect(&cli).unwrap();
        assert_eq!(params.pixel_ratio_limit, 1.0);
    }

    #[test]
    fn missing_manifest_is_an_error() {
        let cli = Cli::parse_from(["inkwave", "--manifest", "/nonexistent/effect.toml"]);
        assert!(resolve_effect(&cli).is_err());
    }
}
