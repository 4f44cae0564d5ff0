use std::path::PathBuf;
use std::process;

use clap::Parser;

use facetrack_core::pipeline::replay_overlay_use_case::ReplayOverlayUseCase;
use facetrack_core::shared::orientation::DeviceOrientation;
use facetrack_core::trace::infrastructure::json_trace_reader::JsonTraceReader;

const ORIENTATIONS: &[&str] = &[
    "portrait",
    "portrait-upside-down",
    "landscape-left",
    "landscape-right",
];

/// Replays a face-detection trace through the overlay tracker.
#[derive(Parser)]
#[command(name = "facetrack")]
struct Cli {
    /// Input detection trace (JSON array of frames).
    input: PathBuf,

    /// Force one device orientation for every frame instead of the
    /// per-frame snapshots recorded in the trace.
    #[arg(long)]
    orientation: Option<String>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let orientation_override = cli.orientation.as_deref().map(parse_orientation);

    let progress: Box<dyn Fn(usize, usize) -> bool + Send> = Box::new(|current, total| {
        eprint!("\rReplaying frame {current}/{total}");
        true
    });

    let reader = Box::new(JsonTraceReader::new());
    let mut use_case = ReplayOverlayUseCase::new(reader, orientation_override, Some(progress));
    let summary = use_case.execute(&cli.input)?;
    eprintln!();

    log::info!(
        "Replayed {} frames: {} elements attached, {} detached, {} geometry updates",
        summary.frames,
        summary.attached,
        summary.detached,
        summary.updates
    );
    log::info!("Peak simultaneous faces: {}", summary.peak_tracked);
    if summary.final_tracked.is_empty() {
        log::info!("No faces tracked at end of trace");
    } else {
        log::info!("Faces still tracked at end of trace: {:?}", summary.final_tracked);
    }

    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input trace not found: {}", cli.input.display()).into());
    }
    if let Some(ref orientation) = cli.orientation {
        if !ORIENTATIONS.contains(&orientation.as_str()) {
            return Err(format!(
                "Orientation must be one of: {}, got '{orientation}'",
                ORIENTATIONS.join(", ")
            )
            .into());
        }
    }
    Ok(())
}

fn parse_orientation(orientation: &str) -> DeviceOrientation {
    match orientation {
        "portrait-upside-down" => DeviceOrientation::PortraitUpsideDown,
        "landscape-left" => DeviceOrientation::LandscapeLeft,
        "landscape-right" => DeviceOrientation::LandscapeRight,
        _ => DeviceOrientation::Portrait,
    }
}
