use opencv::core::{Mat, Point, Rect, Scalar};
use opencv::imgproc;

use crate::pipeline::frame_stats::FrameStats;

const LINE_ORIGIN_X: i32 = 10;
const LINE_HEIGHT: i32 = 30;
const FONT_SCALE: f64 = 0.8;
const BOX_THICKNESS: i32 = 3;

fn green() -> Scalar {
    Scalar::new(0.0, 255.0, 0.0, 0.0)
}

fn red() -> Scalar {
    Scalar::new(0.0, 0.0, 255.0, 0.0)
}

fn white() -> Scalar {
    Scalar::new(255.0, 255.0, 255.0, 0.0)
}

fn black() -> Scalar {
    Scalar::new(0.0, 0.0, 0.0, 0.0)
}

/// Statistics block, one string per HUD line.
pub fn stats_lines(stats: &FrameStats) -> Vec<String> {
    vec![
        format!("Source size: {}x{}", stats.width, stats.height),
        format!("Mode: {}", stats.engine.label()),
        format!("FPS (detect): {:.1}", stats.detect_fps),
        format!("FPS (total): {:.1}", stats.total_fps),
    ]
}

/// Hotkey block. Collapsed to a single hint line until toggled open; the
/// source-cycling line only appears when there is something to cycle.
pub fn help_lines(show_help: bool, source_count: usize) -> Vec<String> {
    if !show_help {
        return vec!["H - toggle hotkeys help".to_string()];
    }

    let mut lines = vec![
        "Space - switch GPU / CPU".to_string(),
        "1/Q - increase/decrease scale".to_string(),
        "M - switch single-face / multi-face".to_string(),
        "F - toggle rectangle filter".to_string(),
    ];
    if source_count > 1 {
        lines.push("N - next source".to_string());
    }
    lines
}

/// Draws bounding boxes around the detected faces.
pub fn draw_detections(frame: &mut Mat, faces: &[Rect]) -> Result<(), Box<dyn std::error::Error>> {
    for face in faces {
        imgproc::rectangle(frame, *face, green(), BOX_THICKNESS, imgproc::LINE_8, 0)?;
    }
    Ok(())
}

/// Renders the statistics block followed by the hotkey block.
pub fn draw_hud(
    frame: &mut Mat,
    stats: &FrameStats,
    show_help: bool,
    source_count: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut line = 0;
    for text in stats_lines(stats) {
        put_line(frame, &text, line, white())?;
        line += 1;
    }
    for text in help_lines(show_help, source_count) {
        put_line(frame, &text, line, red())?;
        line += 1;
    }
    Ok(())
}

/// Double-pass text: dark outline under a colored fill so lines stay
/// readable over arbitrary frame content.
fn put_line(
    frame: &mut Mat,
    text: &str,
    line: i32,
    color: Scalar,
) -> Result<(), Box<dyn std::error::Error>> {
    let origin = Point::new(LINE_ORIGIN_X, LINE_HEIGHT * (line + 1));
    imgproc::put_text(
        frame,
        text,
        origin,
        imgproc::FONT_HERSHEY_SIMPLEX,
        FONT_SCALE,
        black(),
        4,
        imgproc::LINE_8,
        false,
    )?;
    imgproc::put_text(
        frame,
        text,
        origin,
        imgproc::FONT_HERSHEY_SIMPLEX,
        FONT_SCALE,
        color,
        2,
        imgproc::LINE_8,
        false,
    )?;
    Ok(())
}
