use opencv::core::{Mat, Rect};

use crate::detection::domain::face_detector::{DetectParams, Engine};
use crate::detection::infrastructure::detector_factory::DetectorSet;
use crate::pipeline::demo_options::DemoOptions;
use crate::pipeline::frame_prep;
use crate::pipeline::frame_stats::Stopwatch;
use crate::shared::constants::DETECT_SCALE_STEP;

/// Result of one loop iteration, ready for overlay and display.
pub struct ProcessedFrame {
    /// The resized BGR frame the detections refer to; overlays render here.
    pub display: Mat,
    pub faces: Vec<Rect>,
    /// Detector call duration; upload/download included on the CUDA path.
    pub detect_ms: f64,
    /// Engine actually used. Differs from the requested one when CUDA is
    /// unavailable.
    pub engine: Engine,
}

/// Per-frame orchestration: prepare, pick a provider, run the cascade.
///
/// Display stays with the caller so the use case can be exercised with stub
/// detectors.
pub struct DetectFrameUseCase {
    detectors: DetectorSet,
}

impl DetectFrameUseCase {
    pub fn new(detectors: DetectorSet) -> Self {
        Self { detectors }
    }

    pub fn process(
        &mut self,
        frame: &Mat,
        options: &DemoOptions,
    ) -> Result<ProcessedFrame, Box<dyn std::error::Error>> {
        let prepared = frame_prep::prepare(frame, options.scale)?;
        let params = DetectParams {
            scale_step: DETECT_SCALE_STEP,
            min_neighbors: options.min_neighbors(),
            find_largest: options.find_largest,
        };

        let (detector, engine) = self.detectors.select(options.engine);
        let watch = Stopwatch::start();
        let faces = detector.detect(&prepared.gray, &params)?;
        let detect_ms = watch.elapsed_ms();

        Ok(ProcessedFrame {
            display: prepared.resized,
            faces,
            detect_ms,
            engine,
        })
    }
}
