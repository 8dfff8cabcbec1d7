use opencv::core::Mat;

/// Supplies consecutive BGR frames to the demo loop.
///
/// Sources never run dry on their own: file-backed implementations rewind at
/// end of stream so the demo keeps playing until the user exits. A source
/// that genuinely cannot deliver (dead camera, unreadable file) returns an
/// error, which is fatal to the demo.
pub trait FrameSource: Send {
    /// Writes the next frame into `frame`.
    fn next(&mut self, frame: &mut Mat) -> Result<(), Box<dyn std::error::Error>>;

    /// Rewinds to the beginning where the medium has one.
    fn reset(&mut self) -> Result<(), Box<dyn std::error::Error>>;

    /// Human-readable identification for logs and errors.
    fn description(&self) -> String;
}
