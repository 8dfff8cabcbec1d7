use opencv::core::{Mat, Rect};

/// Detection provider selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Engine {
    Cpu,
    Gpu,
}

impl Engine {
    /// HUD / log label, matching the backend name rather than the variant.
    pub fn label(&self) -> &'static str {
        match self {
            Engine::Cpu => "CPU",
            Engine::Gpu => "CUDA",
        }
    }
}

/// Per-call cascade parameters derived from the runtime options.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetectParams {
    /// Pyramid step of the multiscale scan.
    pub scale_step: f64,
    /// Neighbor count a candidate must collect to survive grouping;
    /// 0 disables grouping entirely.
    pub min_neighbors: i32,
    /// Report only the single largest object.
    pub find_largest: bool,
}

/// Domain interface for face detection over a prepared grayscale frame.
///
/// Returned rectangles are in the prepared frame's coordinate space.
/// Implementations may hold device-side buffers, hence `&mut self`.
pub trait FaceDetector: Send {
    fn detect(
        &mut self,
        gray: &Mat,
        params: &DetectParams,
    ) -> Result<Vec<Rect>, Box<dyn std::error::Error>>;
}
