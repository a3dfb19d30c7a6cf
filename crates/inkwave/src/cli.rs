use std::path::PathBuf;

use clap::Parser;
use effects::EffectKind;

#[derive(Parser, Debug)]
#[command(
    name = "inkwave",
    author,
    version,
    about = "Animated shader canvas viewer"
)]
pub struct Cli {
    /// Effect to display (`ink-wave` or `pulse-rings`).
    #[arg(value_name = "EFFECT", default_value = "ink-wave")]
    pub effect: EffectKind,

    /// TOML manifest overriding the effect and its tunables.
    #[arg(long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Window size (e.g. `1280x720`).
    #[arg(long, value_name = "WIDTHxHEIGHT", value_parser = parse_size, default_value = "1280x720")]
    pub size: (u32, u32),

    /// Optional FPS cap (uncapped by default).
    #[arg(long, value_name = "FPS")]
    pub fps: Option<f32>,

    /// Cap on the device pixel ratio used for the backing store.
    #[arg(long, value_name = "RATIO")]
    pub pixel_ratio_limit: Option<f64>,

    /// Render a single static frame instead of animating.
    ///
    /// Also honoured via the `INKWAVE_REDUCED_MOTION` environment variable.
    #[arg(long)]
    pub reduced_motion: bool,

    /// Time multiplier applied inside the shader.
    #[arg(long, value_name = "FACTOR")]
    pub speed: Option<f32>,

    /// Primary wave amplitude (ink-wave only).
    #[arg(long, value_name = "AMP")]
    pub wave_amp: Option<f32>,

    /// Primary wave frequency (ink-wave only).
    #[arg(long, value_name = "FREQ")]
    pub wave_freq: Option<f32>,

    /// Glow falloff half-width around the ink line.
    #[arg(long, value_name = "STRENGTH")]
    pub glow: Option<f32>,

    /// Strength of the pointer's pull on the ink line.
    #[arg(long, value_name = "FORCE")]
    pub pointer_force: Option<f32>,
}

pub fn parse() -> Cli {
    Cli::parse()
}

fn parse_size(value: &str) -> Result<(u32, u32), String> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{value}'"))?;
    let width: u32 = width
        .trim()
        .parse()
        .map_err(|_| format!("invalid width '{width}'"))?;
    let height: u32 = height
        .trim()
        .parse()
        .map_err(|_| format!("invalid height '{height}'"))?;
    if width == 0 || height == 0 {
        return Err("window size must be non-zero".to_string());
    }
    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_size_pairs() {
        assert_eq!(parse_size("1280x720"), Ok((1280, 720)));
        assert_eq!(parse_size("800X600"), Ok((800, 600)));
        assert!(parse_size("1280").is_err());
        assert!(parse_size("0x600").is_err());
        assert!(parse_size("axb").is_err());
    }

    #[test]
    fn defaults_to_the_ink_wave_effect() {
        let cli = Cli::parse_from(["inkwave"]);
        assert_eq!(cli.effect, EffectKind::InkWave);
        assert_eq!(cli.size, (1280, 720));
        assert!(!cli.reduced_motion);
    }

    #[test]
    fn accepts_tunable_overrides() {
        let cli = Cli::parse_from([
            "inkwave",
            "pulse-rings",
            "--speed",
            "0.3",
            "--fps",
            "30",
            "--pixel-ratio-limit",
            "1.5",
        ]);
        assert_eq!(cli.effect, EffectKind::PulseRings);
        assert_eq!(cli.speed, Some(0.3));
        assert_eq!(cli.fps, Some(30.0));
        assert_eq!(cli.pixel_ratio_limit, Some(1.5));
    }
}
