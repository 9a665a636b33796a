//! Drape CLI: garment fitting and cloth draping from the command line.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use drape_body::BodyMeasurements;

mod commands;
mod config;
mod logging;

#[derive(Parser)]
#[command(name = "drape")]
#[command(version, about = "Drape: measurement-driven garment fitting and cloth draping")]
struct Cli {
    /// Log level used when RUST_LOG is unset.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

/// Body measurements (cm / kg). Unset values come from the selected preset.
#[derive(Args, Debug, Clone)]
pub struct BodyArgs {
    /// Height [preset: 170 female, 178 male].
    #[arg(long)]
    height: Option<f32>,
    /// Weight [preset: 62 female, 75 male].
    #[arg(long)]
    weight: Option<f32>,
    /// Bust circumference [preset: 90 female, 100 male].
    #[arg(long)]
    bust: Option<f32>,
    /// Waist circumference [preset: 70 female, 84 male].
    #[arg(long)]
    waist: Option<f32>,
    /// Hip circumference [preset: 95 female, 98 male].
    #[arg(long)]
    hips: Option<f32>,
    /// Shoulder width [preset: 40 female, 46 male].
    #[arg(long)]
    shoulder: Option<f32>,
    /// Start from the reference male body instead of the female baseline.
    #[arg(long)]
    male: bool,
}

impl BodyArgs {
    pub fn measurements(&self) -> BodyMeasurements {
        let preset = if self.male {
            BodyMeasurements::reference_male()
        } else {
            BodyMeasurements::default()
        };
        BodyMeasurements {
            gender: preset.gender,
            height_cm: self.height.unwrap_or(preset.height_cm),
            weight_kg: self.weight.unwrap_or(preset.weight_kg),
            bust_cm: self.bust.unwrap_or(preset.bust_cm),
            waist_cm: self.waist.unwrap_or(preset.waist_cm),
            hips_cm: self.hips.unwrap_or(preset.hips_cm),
            shoulder_width_cm: self.shoulder.unwrap_or(preset.shoulder_width_cm),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize and deform a procedural garment against a reference mannequin.
    Fit {
        /// Garment name (drives upper/lower classification).
        #[arg(short, long, default_value = "Basic Tee")]
        name: String,

        /// Garment category.
        #[arg(long, default_value = "tops")]
        category: String,

        /// Give the garment shape keys so morph mirroring is used.
        #[arg(long)]
        morphs: bool,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,

        /// Optional TOML config.
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        body: BodyArgs,
    },

    /// Drape a hanging cloth panel in front of the mannequin.
    Simulate {
        /// Number of frames to run.
        #[arg(short, long, default_value_t = 120)]
        frames: u32,

        /// Frame delta (seconds).
        #[arg(long, default_value_t = 1.0 / 60.0)]
        dt: f32,

        /// Segments along each side of the panel.
        #[arg(short, long, default_value_t = 16)]
        segments: usize,

        /// Wind strength.
        #[arg(long, default_value_t = 0.0)]
        wind: f32,

        /// Mannequin rotation per frame (radians).
        #[arg(long, default_value_t = 0.0)]
        spin: f32,

        /// Optional TOML config.
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        body: BodyArgs,
    },

    /// Print the mannequin colliders as JSON.
    Colliders {
        #[command(flatten)]
        body: BodyArgs,
    },

    /// Validate a TOML config file.
    Validate {
        /// Path to config file.
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    let result = match cli.command {
        Commands::Fit {
            name,
            category,
            morphs,
            json,
            config,
            body,
        } => commands::fit(&name, &category, morphs, json, config.as_deref(), &body.measurements()),
        Commands::Simulate {
            frames,
            dt,
            segments,
            wind,
            spin,
            config,
            body,
        } => commands::simulate(
            &commands::SimulateOptions {
                frames,
                dt,
                segments,
                wind,
                spin,
            },
            config.as_deref(),
            &body.measurements(),
        ),
        Commands::Colliders { body } => commands::colliders(&body.measurements()),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drape_body::Gender;

    fn body_of(args: &[&str]) -> BodyMeasurements {
        let cli = Cli::try_parse_from(["drape", "colliders"].iter().chain(args)).unwrap();
        match cli.command {
            Commands::Colliders { body } => body.measurements(),
            _ => unreachable!(),
        }
    }

    #[test]
    fn body_defaults_to_female_baseline() {
        assert_eq!(body_of(&[]), BodyMeasurements::default());
    }

    #[test]
    fn male_flag_applies_male_preset() {
        let body = body_of(&["--male"]);
        assert_eq!(body, BodyMeasurements::reference_male());
        assert_eq!(body.gender, Gender::Male);
    }

    #[test]
    fn explicit_values_override_preset() {
        let body = body_of(&["--male", "--bust", "110"]);
        assert_eq!(body.bust_cm, 110.0);
        assert_eq!(body.height_cm, BodyMeasurements::reference_male().height_cm);
    }
}
