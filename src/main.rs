//! Headless simulator: plays an emotion sequence against a software
//! framebuffer on a simulated clock and prints frames as ASCII art.
//!
//! ```text
//! buddy-eyes run --profile companion happy sleep distracted
//! buddy-eyes schema > profile.schema.json
//! buddy-eyes export-profile ride_buddy ride_buddy.toml
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use buddy_eyes::display::Framebuffer;
use buddy_eyes::emotion::Emotion;
use buddy_eyes::engine::RobotEyes;
use buddy_eyes::options::Profile;
use buddy_eyes::platform::{Clock, ManualClock, RngSource};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "buddy-eyes")]
#[command(about = "Robot eyes simulator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play emotions in order and print frames
    Run {
        /// Built-in profile name or path to a TOML profile
        #[arg(long, default_value = "ride_buddy")]
        profile: String,
        /// How long each emotion plays, in simulated milliseconds
        #[arg(long, default_value_t = 2000)]
        hold_ms: u64,
        /// Print every Nth frame
        #[arg(long, default_value_t = 10)]
        every: u64,
        /// RNG seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
        /// Emotions to show (e.g. `happy sad sleep`); defaults to neutral
        emotions: Vec<String>,
    },

    /// Print the JSON Schema for profile files
    Schema,

    /// Write a built-in profile as TOML
    ExportProfile {
        /// Built-in profile name
        name: String,
        /// Output file
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            profile,
            hold_ms,
            every,
            seed,
            emotions,
        } => run(&profile, hold_ms, every, seed, &emotions),
        Command::Schema => {
            let schema = serde_json::to_string_pretty(&Profile::json_schema())?;
            writeln!(std::io::stdout().lock(), "{schema}")?;
            Ok(())
        }
        Command::ExportProfile { name, path } => {
            let Some(profile) = Profile::builtin(&name) else {
                bail!("unknown built-in profile '{name}'");
            };
            profile
                .save(&path)
                .with_context(|| format!("writing {}", path.display()))?;
            log::info!("Wrote profile '{name}' to {}", path.display());
            Ok(())
        }
    }
}

fn load_profile(name_or_path: &str) -> Result<Profile> {
    if let Some(profile) = Profile::builtin(name_or_path) {
        return Ok(profile);
    }
    Profile::load(Path::new(name_or_path))
        .with_context(|| format!("loading profile '{name_or_path}'"))
}

fn parse_emotions(names: &[String]) -> Result<Vec<Emotion>> {
    if names.is_empty() {
        return Ok(vec![Emotion::Neutral]);
    }
    names
        .iter()
        .map(|name| {
            Emotion::from_name(&name.to_lowercase())
                .with_context(|| format!("unknown emotion '{name}'"))
        })
        .collect()
}

fn run(
    profile: &str,
    hold_ms: u64,
    every: u64,
    seed: Option<u64>,
    emotions: &[String],
) -> Result<()> {
    let profile = load_profile(profile)?;
    let emotions = parse_emotions(emotions)?;
    let (width, height) = (profile.screen.width, profile.screen.height);
    let interval = u64::from(profile.timing.frame_interval_ms);
    let every = every.max(1);

    let clock = ManualClock::new(0);
    let random = seed.map_or_else(RngSource::from_os_rng, RngSource::seeded);
    let mut eyes = RobotEyes::new(profile, clock.clone(), random)?;
    eyes.begin(Framebuffer::new(width, height));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut until_print = 0u64;
    for emotion in emotions {
        eyes.set_emotion(emotion);
        let end = clock.now_ms() + hold_ms;
        while clock.now_ms() < end {
            eyes.update();
            if until_print == 0 {
                until_print = every;
                if let Some(frame) = eyes.display() {
                    writeln!(
                        out,
                        "t={} ms  {}  {}",
                        clock.now_ms(),
                        eyes.emotion(),
                        frame.summary()
                    )?;
                    write!(out, "{}", frame.to_ascii())?;
                }
            }
            until_print -= 1;
            clock.advance(interval);
        }
    }
    log::info!("Simulated {} frames", eyes.frames());
    Ok(())
}
