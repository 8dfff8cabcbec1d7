use opencv::core::Mat;
use opencv::prelude::*;
use opencv::videoio::{self, VideoCapture};

use crate::video::domain::frame_source::FrameSource;

/// Frames from a live capture device.
pub struct CameraSource {
    capture: VideoCapture,
    index: i32,
}

impl CameraSource {
    pub fn open(index: i32) -> Result<Self, Box<dyn std::error::Error>> {
        let capture = VideoCapture::new(index, videoio::CAP_ANY)?;
        if !capture.is_opened()? {
            return Err(format!("could not open camera {index}").into());
        }
        Ok(Self { capture, index })
    }
}

impl FrameSource for CameraSource {
    fn next(&mut self, frame: &mut Mat) -> Result<(), Box<dyn std::error::Error>> {
        if !self.capture.read(frame)? || frame.empty() {
            return Err(format!("camera {} stopped delivering frames", self.index).into());
        }
        Ok(())
    }

    // A live device has no beginning to rewind to.
    fn reset(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }

    fn description(&self) -> String {
        format!("camera {}", self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_missing_device_errors() {
        // Device indices this high do not exist on any test machine.
        let result = CameraSource::open(9_999);
        assert!(result.is_err());
    }
}
