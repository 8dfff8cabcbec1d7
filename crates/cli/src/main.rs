use std::path::PathBuf;
use std::process;

use clap::Parser;
use opencv::core::Mat;
use opencv::highgui;
use opencv::prelude::*;

use facelive_core::detection::domain::face_detector::Engine;
use facelive_core::detection::infrastructure::detector_factory::build_detectors;
use facelive_core::overlay::hud;
use facelive_core::pipeline::demo_options::DemoOptions;
use facelive_core::pipeline::detect_frame_use_case::DetectFrameUseCase;
use facelive_core::pipeline::frame_stats::{fps_from_ms, FrameStats, Stopwatch};
use facelive_core::pipeline::key_command::KeyCommand;
use facelive_core::shared::cascade_resolver;
use facelive_core::shared::constants::{
    CASCADE_NAME, CASCADE_URL, DEFAULT_SCALE, SCALE_MAX, SCALE_MIN, WINDOW_TITLE,
};
use facelive_core::video::domain::frame_source::FrameSource;
use facelive_core::video::infrastructure::camera_source::CameraSource;
use facelive_core::video::infrastructure::image_source::ImageSource;
use facelive_core::video::infrastructure::video_file_source::VideoFileSource;

/// Interactive face detection demo: a cascade classifier on CPU or CUDA,
/// bounding boxes and live FPS statistics over a video stream.
#[derive(Parser)]
#[command(name = "facelive")]
struct Cli {
    /// Cascade classifier XML (downloaded to the cache when omitted).
    #[arg(long)]
    cascade: Option<PathBuf>,

    /// Video file source (repeatable).
    #[arg(long)]
    video: Vec<PathBuf>,

    /// Camera device index source (repeatable).
    #[arg(long)]
    camera: Vec<i32>,

    /// Still image source (repeatable).
    #[arg(long)]
    image: Vec<PathBuf>,

    /// Initial frame resize ratio applied before detection.
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    scale: f64,

    /// Start in CPU mode instead of CUDA.
    #[arg(long)]
    cpu: bool,
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

    let cascade_path = resolve_cascade(&cli)?;
    let detectors = build_detectors(&cascade_path)?;
    let mut sources = build_sources(&cli)?;
    for source in &sources {
        log::info!("Source: {}", source.description());
    }

    let mut options = DemoOptions {
        engine: if cli.cpu { Engine::Cpu } else { Engine::Gpu },
        scale: cli.scale,
        ..DemoOptions::default()
    };

    let mut use_case = DetectFrameUseCase::new(detectors);
    highgui::named_window(WINDOW_TITLE, highgui::WINDOW_AUTOSIZE)?;

    let mut frame = Mat::default();
    loop {
        let total = Stopwatch::start();

        sources[options.source_index].next(&mut frame)?;
        let mut processed = use_case.process(&frame, &options)?;
        hud::draw_detections(&mut processed.display, &processed.faces)?;

        let stats = FrameStats {
            width: processed.display.cols(),
            height: processed.display.rows(),
            engine: processed.engine,
            detect_fps: fps_from_ms(processed.detect_ms),
            total_fps: total.fps(),
        };
        hud::draw_hud(&mut processed.display, &stats, options.show_help, sources.len())?;

        highgui::imshow(WINDOW_TITLE, &processed.display)?;

        match KeyCommand::from_key(highgui::wait_key(3)?) {
            Some(KeyCommand::Exit) => break,
            Some(command) => {
                if let Some(message) = command.apply(&mut options, sources.len()) {
                    log::info!("{message}");
                }
                if command == KeyCommand::NextSource {
                    sources[options.source_index].reset()?;
                }
            }
            None => {}
        }
    }

    highgui::destroy_all_windows()?;
    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !(SCALE_MIN..=SCALE_MAX).contains(&cli.scale) {
        return Err(format!(
            "Scale must be between {SCALE_MIN} and {SCALE_MAX}, got {}",
            cli.scale
        )
        .into());
    }
    for path in cli.video.iter().chain(cli.image.iter()) {
        if !path.exists() {
            return Err(format!("Source file not found: {}", path.display()).into());
        }
    }
    if let Some(cascade) = &cli.cascade {
        if !cascade.exists() {
            return Err(format!("Cascade file not found: {}", cascade.display()).into());
        }
    }
    Ok(())
}

fn resolve_cascade(cli: &Cli) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(path) = &cli.cascade {
        return Ok(path.clone());
    }
    log::info!("Resolving cascade: {CASCADE_NAME}");
    let path = cascade_resolver::resolve(
        CASCADE_NAME,
        CASCADE_URL,
        None,
        Some(Box::new(download_progress)),
    )?;
    eprintln!();
    Ok(path)
}

/// Builds the source list in the order videos, cameras, images. With no
/// source arguments at all, the default is camera 0.
fn build_sources(cli: &Cli) -> Result<Vec<Box<dyn FrameSource>>, Box<dyn std::error::Error>> {
    let mut sources: Vec<Box<dyn FrameSource>> = Vec::new();
    for path in &cli.video {
        sources.push(Box::new(VideoFileSource::open(path)?));
    }
    for index in &cli.camera {
        sources.push(Box::new(CameraSource::open(*index)?));
    }
    for path in &cli.image {
        sources.push(Box::new(ImageSource::open(path)?));
    }
    if sources.is_empty() {
        log::info!("No source given, using camera 0");
        sources.push(Box::new(CameraSource::open(0)?));
    }
    Ok(sources)
}

fn download_progress(downloaded: u64, total: u64) {
    if total > 0 {
        let pct = (downloaded as f64 / total as f64 * 100.0) as u32;
        eprint!("\rDownloading cascade classifier... {pct}%");
    } else {
        eprint!("\rDownloading cascade classifier... {downloaded} bytes");
    }
}
