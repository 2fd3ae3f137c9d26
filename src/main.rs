//! Sweep Clock entry point
//!
//! Host-side driver: reads a style, schedules `render` once per second and
//! prints each frame.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};

use sweep_clock::tessellate::tessellate;
use sweep_clock::time::FixedClock;
use sweep_clock::{
    ClockEngine, ClockStyle, Frame, HandAngles, SystemClock, TimeSample, TimeSource,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Full frame as JSON, one line per frame
    Json,
    /// Hand angles and arc sweep
    Summary,
    /// Triangle vertex count
    Vertices,
}

#[derive(Debug, Parser)]
#[command(version, about = "Render analog clock frames")]
struct Args {
    /// Surface width in pixels
    #[arg(long, default_value_t = 1080.0)]
    width: f32,
    /// Surface height in pixels
    #[arg(long, default_value_t = 1080.0)]
    height: f32,
    /// Screen density applied to every style length
    #[arg(long, default_value_t = 1.0)]
    density: f32,
    /// Fixed start time (HH:MM[:SS]); defaults to local time
    #[arg(long)]
    time: Option<String>,
    /// JSON style file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Saved state payload to restore before the first frame
    #[arg(long)]
    state: Option<String>,
    /// Number of frames to render, one per second
    #[arg(long, default_value_t = 1)]
    frames: u32,
    #[arg(long, value_enum, default_value_t = Format::Summary)]
    format: Format,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let style = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading style {}", path.display()))?;
            ClockStyle::from_json(&json)
        }
        None => ClockStyle::default(),
    }
    .scaled(args.density);

    let fixed = args.time.as_deref().map(parse_time).transpose()?;

    let start = match fixed {
        Some(t) => t,
        None => SystemClock.now(),
    };
    let mut engine = ClockEngine::new(style, start);
    let surface = engine.surface(args.width, args.height);
    if surface.is_degenerate() {
        bail!(
            "surface {}x{} leaves no room for a face with padding {}",
            args.width,
            args.height,
            engine.style().padding
        );
    }
    if let Some(state) = &args.state {
        engine.restore_state_json(state, start);
    }

    log::info!("Sweep Clock starting at {start}");

    for i in 0..args.frames {
        let (now, frame) = match fixed {
            // Simulated time advances without waiting
            Some(t) => {
                let now = t.advanced_by(i);
                (now, engine.render_now(&FixedClock(now), &surface))
            }
            None => {
                if i > 0 {
                    std::thread::sleep(Duration::from_secs(1));
                }
                let now = SystemClock.now();
                (now, engine.render(now, &surface))
            }
        };
        print_frame(args.format, now, &frame)?;
    }

    log::info!("Final state {}", engine.save_state_json());
    Ok(())
}

fn parse_time(s: &str) -> Result<TimeSample> {
    TimeSample::parse(s).with_context(|| format!("invalid time {s:?}"))
}

fn print_frame(format: Format, now: TimeSample, frame: &Frame) -> Result<()> {
    match format {
        Format::Json => println!("{}", frame.to_json()?),
        Format::Summary => {
            let a = HandAngles::for_time(&now);
            let arc = frame.arc().map_or(0.0, |arc| arc.sweep_angle_deg);
            println!(
                "{now}  hour {:7.3}°  minute {:7.3}°  second {:5.1}°  arc {arc:7.1}°",
                a.hour, a.minute, a.second
            );
        }
        Format::Vertices => {
            let count = tessellate(frame, 16.0).len();
            println!("{now}  {} primitives  {count} vertices", frame.len());
        }
    }
    Ok(())
}
